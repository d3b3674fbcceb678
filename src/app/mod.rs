//! Anwendungsschicht: Ausgleich-Use-Case und Eingabe-Validierung.

pub mod equalize;

pub use equalize::{equalize, parse_distance, validate_distance, EqualizeSummary};
