use crate::domain::post::value_objects::PostExcerpt;

/// Length the derivation truncates to, before the ellipsis. Distinct from
/// `MAX_EXCERPT_LEN`, which bounds what the model accepts from any source.
pub const EXCERPT_TARGET_LEN: usize = 160;

const ELLIPSIS: &str = "...";

/// Derive a plain-text excerpt from rich-text content: strip every `<...>`
/// tag, keep the first `EXCERPT_TARGET_LEN` scalars, trim, append an
/// ellipsis. Only called when the author did not supply an excerpt.
pub fn derive_excerpt(content: &str) -> PostExcerpt {
    let plain = strip_tags(content);
    let truncated: String = plain.chars().take(EXCERPT_TARGET_LEN).collect();
    let text = format!("{}{ELLIPSIS}", truncated.trim());
    // 160 scalars + 3 is always under the 300-scalar model bound.
    PostExcerpt::new(text).expect("derived excerpt is within the model bound")
}

/// Remove every substring of the form `<...>`. An unterminated `<` swallows
/// the rest of the input.
fn strip_tags(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut in_tag = false;
    for ch in input.chars() {
        match ch {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::post::value_objects::MAX_EXCERPT_LEN;

    #[test]
    fn strips_tags_and_appends_ellipsis() {
        let excerpt = derive_excerpt("<p>Hello <b>World</b>, this is a test.</p>");
        assert_eq!(excerpt.as_str(), "Hello World, this is a test....");
    }

    #[test]
    fn truncates_to_target_length() {
        let content = "a".repeat(500);
        let excerpt = derive_excerpt(&content);
        assert_eq!(
            excerpt.as_str().chars().count(),
            EXCERPT_TARGET_LEN + ELLIPSIS.chars().count()
        );
        assert!(excerpt.as_str().ends_with(ELLIPSIS));
    }

    #[test]
    fn never_exceeds_model_bound() {
        let content = format!("<div>{}</div>", "word ".repeat(200));
        let excerpt = derive_excerpt(&content);
        assert!(excerpt.as_str().chars().count() <= MAX_EXCERPT_LEN);
    }

    #[test]
    fn trims_before_ellipsis() {
        let excerpt = derive_excerpt("  spaced out  ");
        assert_eq!(excerpt.as_str(), "spaced out...");
    }

    #[test]
    fn tag_only_content_yields_bare_ellipsis() {
        let excerpt = derive_excerpt("<p><br/></p>");
        assert_eq!(excerpt.as_str(), ELLIPSIS);
    }

    #[test]
    fn unterminated_tag_swallows_remainder() {
        let excerpt = derive_excerpt("intro <a href=");
        assert_eq!(excerpt.as_str(), "intro...");
    }
}
