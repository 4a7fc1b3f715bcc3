//! Domain models for the plant care tracker.
//!
//! # Core Concepts
//!
//! - [`Plant`]: A tracked plant with a watering interval and the date it was
//!   last watered. Whether it needs water is computed, never stored.
//! - [`Category`]: A tag describing the kind of plant. All categories behave
//!   the same today; the tag is kept so it round-trips through storage.

mod category;
mod plant;

pub use category::*;
pub use plant::*;
