// tests/support/mod.rs
// Shared by multiple integration test binaries; not every binary uses every
// helper, so allow dead_code at the module level.
#[allow(dead_code, unused_imports)]
pub mod mocks;
