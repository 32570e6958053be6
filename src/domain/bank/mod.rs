//! Bank aggregate.
//!
//! A [`Bank`] owns its registered accounts and mediates transfers between
//! accounts, whether registered with it or not.

pub mod aggregate;

pub use aggregate::*;
