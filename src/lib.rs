//! metromap-rs: layout engine for metro-map style project timelines.
//!
//! The crate turns a validated table of station rows into an ordered list of
//! draw primitives plus diagram bounds. Hosts supply the rows, a
//! configuration, and a renderer; layout itself is pure and deterministic,
//! so identical input always yields an identical frame.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::DiagramEngine;
pub use error::{MetroError, MetroResult};
