// src/infrastructure/repositories/mod.rs
mod error;
mod postgres_post;

pub use postgres_post::{PostgresPostReadRepository, PostgresPostWriteRepository};
