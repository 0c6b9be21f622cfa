//! # forum-db
//!
//! Storage layer implementing the forum-core repository traits.
//!
//! ## Overview
//!
//! - PostgreSQL via SQLx: connection pool, runtime migrations, models,
//!   entity ↔ model mappers and repositories. Each reaction toggle runs in
//!   one transaction that row-locks the target first.
//! - An in-memory store with the same contracts for tests and local runs.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use forum_db::pool::{create_pool, PoolConfig};
//! use forum_db::PgReactionRepository;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = create_pool(&PoolConfig::default()).await?;
//!     let reactions = PgReactionRepository::new(pool);
//!
//!     // Use the repository...
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod memory;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use memory::{InMemoryForumStore, StoreOp};
pub use pool::{create_pool, default_migrations_dir, run_migrations, PgPool, PoolConfig};
pub use repositories::{PgNotificationRepository, PgReactionRepository, PgReactionUnitOfWork};
