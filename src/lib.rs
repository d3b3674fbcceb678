//! MEP-Equalize Library.
//! Geometrischer Kern und Host-Abstraktion als Library exportiert für
//! Tests, Host-Anbindungen und das Standalone-Tool.

pub mod app;
pub mod core;
pub mod host;
pub mod shared;

pub use app::{equalize, parse_distance, EqualizeSummary};
pub use core::{ElementId, ElementKind, EqualizeError, LinearElement, Segment};
pub use host::{HostDocument, JsonDocument, TranslationMap};
pub use shared::options::{EqualizeOptions, PARALLEL_TOLERANCE};
