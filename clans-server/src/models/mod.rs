//! Domain models with validation at construction
//!
//! Request input is turned into these types before any handler logic runs.
//! Invalid input returns ValidationError, not panic.

pub mod clan;
pub mod validation;

pub use clan::{ClanName, ClanQuery, NewClan, SortColumn};
pub use validation::ValidationError;
