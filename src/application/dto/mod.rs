mod posts;

pub use posts::{PostDto, PostSummaryDto};
