use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

/// Maximum title length, counted in Unicode scalars.
pub const MAX_TITLE_LEN: usize = 200;
/// Hard upper bound on a stored excerpt, counted in Unicode scalars.
pub const MAX_EXCERPT_LEN: usize = 300;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PostId(pub i64);

impl PostId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("post id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<PostId> for i64 {
    fn from(value: PostId) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostTitle(String);

impl PostTitle {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into().trim().to_owned();
        if value.is_empty() {
            return Err(DomainError::Validation("title cannot be empty".into()));
        }
        if value.chars().count() > MAX_TITLE_LEN {
            return Err(DomainError::Validation(format!(
                "title cannot exceed {MAX_TITLE_LEN} characters"
            )));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PostTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<PostTitle> for String {
    fn from(value: PostTitle) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostContent(String);

impl PostContent {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("content cannot be empty".into()));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<PostContent> for String {
    fn from(value: PostContent) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PostSlug(String);

impl PostSlug {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("slug cannot be empty".into()));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PostSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<PostSlug> for String {
    fn from(value: PostSlug) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostExcerpt(String);

impl PostExcerpt {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.chars().count() > MAX_EXCERPT_LEN {
            return Err(DomainError::Validation(format!(
                "excerpt cannot exceed {MAX_EXCERPT_LEN} characters"
            )));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<PostExcerpt> for String {
    fn from(value: PostExcerpt) -> Self {
        value.0
    }
}
