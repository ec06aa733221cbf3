//! Game implementations built on the core engine types.

pub mod bluff_number;
