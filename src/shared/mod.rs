//! Layer-neutrale Bausteine: Geometrie, Einheiten, Optionen.

pub mod geometry;
pub mod options;
pub mod units;

pub use options::EqualizeOptions;
