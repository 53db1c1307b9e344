//! Store module - the mutable collaborator
//!
//! Owns the item collection and persists the dates the pure scheduler
//! returns. Plain in-memory state; durable storage belongs to the layers
//! around this crate.

mod memory;

pub use memory::{ItemStore, Result, StoreError};
