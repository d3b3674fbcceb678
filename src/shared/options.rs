//! Zentrale Konfiguration für MEP-Equalize.
//!
//! `EqualizeOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Geometrie ───────────────────────────────────────────────────────

/// Absolute Toleranz für den komponentenweisen Richtungsvergleich.
pub const PARALLEL_TOLERANCE: f64 = 1e-9;

// ── Eingabe ─────────────────────────────────────────────────────────

/// Vorbelegung des Abstands in Metern (entspricht dem Dialog-Default).
pub const DEFAULT_DISTANCE_M: f64 = 1.0;

/// Alle zur Laufzeit änderbaren Optionen.
/// Wird als `mep_equalize.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EqualizeOptions {
    /// Toleranz für den Parallelitäts-Test
    pub parallel_tolerance: f64,
    /// Standard-Abstand in Metern wenn kein Abstand übergeben wird
    pub default_distance_m: f64,
}

impl Default for EqualizeOptions {
    fn default() -> Self {
        Self {
            parallel_tolerance: PARALLEL_TOLERANCE,
            default_distance_m: DEFAULT_DISTANCE_M,
        }
    }
}

impl EqualizeOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("mep-equalize"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("mep_equalize.toml")
    }
}
