//! Domain layer: value objects, the Account entity, and the Bank aggregate.
//!
//! Everything in this layer is pure, in-memory, and single-threaded. The only
//! failure modes are the domain errors defined in [`account::errors`].

pub mod account;
pub mod bank;
pub mod value_objects;

pub use account::*;
pub use bank::*;
pub use value_objects::*;
