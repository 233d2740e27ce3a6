//! physiodoc-catalogs
//!
//! Injected clinical vocabularies: the complaint and measure option
//! catalogs and the ICD-10 diagnosis catalog. Pure data — the core never
//! mutates a catalog, and every consumer receives catalogs as explicit
//! parameters so label sets can be versioned or localized without touching
//! composition logic.

pub mod diagnosis;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// One selectable catalog entry, rendered as a toggle chip in the UI.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CatalogOption {
    pub id: String,
    pub label: String,
}

/// A fixed, ordered enumeration of catalog options.
#[derive(Debug, Clone)]
pub struct OptionCatalog {
    options: Vec<CatalogOption>,
}

impl OptionCatalog {
    pub fn new(options: Vec<CatalogOption>) -> Self {
        OptionCatalog { options }
    }

    pub fn options(&self) -> &[CatalogOption] {
        &self.options
    }

    /// Translate a stored identifier back into its display label. Unknown
    /// identifiers degrade to the raw id.
    pub fn label_for<'a>(&'a self, id: &'a str) -> &'a str {
        self.options
            .iter()
            .find(|opt| opt.id == id)
            .map(|opt| opt.label.as_str())
            .unwrap_or(id)
    }
}

/// The catalogs the note composer reads from.
#[derive(Debug, Clone)]
pub struct Catalogs {
    pub complaints: OptionCatalog,
    pub measures: OptionCatalog,
}

impl Default for Catalogs {
    fn default() -> Self {
        Catalogs {
            complaints: complaint_options(),
            measures: measure_options(),
        }
    }
}

fn build(options: &[(&str, &str)]) -> OptionCatalog {
    OptionCatalog::new(
        options
            .iter()
            .map(|(id, label)| CatalogOption {
                id: id.to_string(),
                label: label.to_string(),
            })
            .collect(),
    )
}

/// The built-in complaint vocabulary.
pub fn complaint_options() -> OptionCatalog {
    build(&[
        ("pain", "pain"),
        ("stiffness", "stiffness"),
        ("weakness", "weakness"),
        ("numbness", "numbness / tingling"),
        ("instability", "instability"),
        ("limited_rom", "reduced range of motion"),
        ("swelling", "swelling"),
    ])
}

/// The built-in treatment measure vocabulary.
pub fn measure_options() -> OptionCatalog {
    build(&[
        ("mt", "manual therapy"),
        ("pt", "remedial exercise therapy"),
        ("ml", "lymphatic drainage"),
        ("exercise", "active exercises"),
        ("edu", "patient education"),
        ("taping", "taping"),
        ("device", "equipment-based training"),
    ])
}
