//! Core-Domänentypen: Elemente, Segmente, Fehlertaxonomie.

pub mod element;
pub mod error;
pub mod segment;

pub use element::{ElementId, ElementKind, LinearElement};
pub use error::EqualizeError;
pub use segment::Segment;
