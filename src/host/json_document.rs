//! JSON-Dokument als Standalone-Host: Laden, Speichern, atomares Anwenden.

use super::{HostDocument, TranslationMap};
use crate::core::{ElementId, ElementKind, EqualizeError, LinearElement, Segment};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Ein flaches Dokument aus linearen Elementen.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JsonDocument {
    /// Alle Elemente in Dokument-Reihenfolge
    pub elements: Vec<LinearElement>,
}

impl JsonDocument {
    /// Lädt ein Dokument aus einer JSON-Datei.
    pub fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Datei nicht lesbar: {}", path.display()))?;
        let doc: Self = serde_json::from_str(&content)
            .with_context(|| format!("JSON nicht parsbar: {}", path.display()))?;
        log::info!(
            "Dokument geladen: {} Elemente aus {}",
            doc.elements.len(),
            path.display()
        );
        Ok(doc)
    }

    /// Speichert das Dokument als JSON-Datei.
    pub fn save_to_file(&self, path: &Path) -> anyhow::Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)
            .with_context(|| format!("Datei nicht schreibbar: {}", path.display()))?;
        log::info!("Dokument gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Alle Element-IDs in Dokument-Reihenfolge.
    pub fn element_ids(&self) -> Vec<ElementId> {
        self.elements.iter().map(|e| e.id).collect()
    }

    fn find(&self, id: ElementId) -> Option<&LinearElement> {
        self.elements.iter().find(|e| e.id == id)
    }
}

impl HostDocument for JsonDocument {
    fn element_kind(&self, id: ElementId) -> Option<ElementKind> {
        self.find(id).map(|e| e.kind)
    }

    fn location_segment(&self, id: ElementId) -> Result<Segment, EqualizeError> {
        let element = self.find(id).ok_or(EqualizeError::NoLinearLocation(id))?;
        if element.location.is_degenerate() {
            return Err(EqualizeError::NoLinearLocation(id));
        }
        Ok(element.location)
    }

    fn apply_translations(&mut self, moves: &TranslationMap) -> Result<(), EqualizeError> {
        // Erst vollständig auflösen, dann mutieren: ein Fehler darf das
        // Dokument nicht halb verschoben zurücklassen.
        let mut indices = Vec::with_capacity(moves.len());
        for &id in moves.keys() {
            let index = self
                .elements
                .iter()
                .position(|e| e.id == id)
                .ok_or_else(|| {
                    EqualizeError::TransactionFailure(format!("Element {id} nicht im Dokument"))
                })?;
            indices.push(index);
        }

        for (index, &offset) in indices.into_iter().zip(moves.values()) {
            let element = &mut self.elements[index];
            element.location = element.location.translated(offset);
        }

        Ok(())
    }
}
