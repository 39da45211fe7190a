//! Canonical data model for the location SDK
//!
//! Vendor-independent value objects and result records shared by every
//! provider adapter and every caller. Types here are immutable once
//! constructed, composed by value, and carry no reference back to the
//! client or adapter that produced them.

pub mod entities;
pub mod value_objects;

pub use entities::*;
pub use value_objects::*;
