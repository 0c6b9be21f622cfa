//! In-memory store
//!
//! Implements the same repository traits as the PostgreSQL layer. Units of
//! work are serialized through an async mutex held until commit or drop, and
//! undo their writes from a journal when dropped uncommitted, so an abandoned
//! or failed unit of work leaves nothing behind. Used by the service tests,
//! the HTTP integration tests and `STORE_BACKEND=memory` runs.

mod state;
mod store;
mod unit_of_work;

pub use store::InMemoryForumStore;
pub use unit_of_work::{MemoryUnitOfWork, StoreOp};
