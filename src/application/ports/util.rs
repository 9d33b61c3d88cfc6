// src/application/ports/util.rs

/// Normalizes a title into a base slug. Implementations must be
/// deterministic and idempotent: `slugify(slugify(x)) == slugify(x)`.
pub trait SlugGenerator: Send + Sync {
    fn slugify(&self, input: &str) -> String;
}
