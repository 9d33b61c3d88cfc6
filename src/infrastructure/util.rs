use crate::application::ports::util::SlugGenerator;
use slug::slugify;

/// Characters removed outright before slugification, so `Don't` becomes
/// `dont` rather than `don-t`. Everything else non-alphanumeric turns into
/// a single hyphen via the `slug` crate.
const REMOVED_CHARS: &[char] = &['*', '+', '~', '.', '(', ')', '\'', '"', '!', ':', '@'];

#[derive(Default, Clone)]
pub struct TitleSlugGenerator;

impl SlugGenerator for TitleSlugGenerator {
    fn slugify(&self, input: &str) -> String {
        let cleaned: String = input
            .chars()
            .filter(|ch| !REMOVED_CHARS.contains(ch))
            .collect();
        slugify(cleaned)
    }
}
