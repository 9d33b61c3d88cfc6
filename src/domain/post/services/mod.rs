mod excerpt;
mod slug;

pub use excerpt::{derive_excerpt, EXCERPT_TARGET_LEN};
pub use slug::PostSlugService;
