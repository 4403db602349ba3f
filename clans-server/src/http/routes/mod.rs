//! Route handlers organized by resource

pub mod clans;
pub mod health;
pub mod index;
