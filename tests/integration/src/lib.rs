//! Integration test utilities for the forum reactions API
//!
//! This crate provides helpers for running end-to-end HTTP tests against a
//! server spawned on the in-memory store.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
