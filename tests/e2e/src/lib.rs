//! Shared helpers for prepdeck journey tests

pub mod fixtures;
