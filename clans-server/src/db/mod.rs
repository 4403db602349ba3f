//! Database layer - connection pool and clan store
//!
//! - Bounded connection pool (5 connections by default), built once and injected
//! - One pooled connection per store call, released on every exit path
//! - Writes run in a transaction that is committed or explicitly rolled back

pub mod pool;
pub mod repos;

pub use pool::{create_pool, create_pool_with_options, PoolSettings};
pub use repos::*;
