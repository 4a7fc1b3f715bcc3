//! Watering schedule tracker for a small personal plant collection.
//!
//! Plants are kept in an ordered [`registry::PlantRegistry`] backed by a
//! single JSON file ([`store::PlantStore`]). The [`shell`] module drives it
//! from an interactive text menu, and [`cli`] from one-shot subcommands.

pub mod cli;
pub mod models;
pub mod registry;
pub mod shell;
pub mod store;
