//! # Field catalog for the Zeto acquisition dialogue
//!
//! This module centralizes the **static definitions** of the nine observable
//! parameters Zeto collects before handing a data set to the analysis service.
//!
//! ## Overview
//!
//! - One [`FieldDef`] per parameter: prompt, hint, placeholder, canonical key
//!   and the inclusive validity range used by the validator.
//! - The array order **is** the dialogue order: the sequencer walks
//!   [`FIELD_CATALOG`] front to back, one question per turn.
//! - Canonical keys are the wire contract with the analysis service
//!   (`orbper`, `trandep`, `trandur`, `rade`, `insol`, `eqt`, `teff`,
//!   `logg`, `rad`); long-form ids double as header synonyms for the
//!   tabular import path.
//!
//! The catalog is immutable for the process lifetime and lives entirely in
//! static memory.

/// Stable short identifier understood by the analysis service.
pub type CanonicalKey = &'static str;

/// Input widget kind requested from the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Number,
}

/// Static description of one collectible parameter.
///
/// # Fields
///
/// * `id` - Long-form identifier, also accepted as a tabular header synonym
/// * `key` - Canonical key sent to the analysis service
/// * `prompt` - Question text shown to the user
/// * `placeholder` - Example value for the input widget
/// * `hint` - One-line explanation including the accepted range
/// * `kind` - Input kind (all current fields are numeric)
/// * `min` / `max` - Inclusive validity bounds, `min <= max`, both finite
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldDef {
    pub id: &'static str,
    pub key: CanonicalKey,
    pub prompt: &'static str,
    pub placeholder: &'static str,
    pub hint: &'static str,
    pub kind: FieldKind,
    pub min: f64,
    pub max: f64,
}

/// The nine fields of the acquisition dialogue, in asking order.
pub const FIELD_CATALOG: [FieldDef; 9] = [
    FieldDef {
        id: "orbital_period",
        key: "orbper",
        prompt: "What is the orbital period in days?",
        placeholder: "e.g., 365.25",
        hint: "Time for one complete orbit around the star (0.15 - 84000 days)",
        kind: FieldKind::Number,
        min: 0.15,
        max: 84000.0,
    },
    FieldDef {
        id: "transit_depth",
        key: "trandep",
        prompt: "What is the transit depth in ppm?",
        placeholder: "e.g., 100",
        hint: "How much the star dims during transit (0.05 - 135.5 ppm)",
        kind: FieldKind::Number,
        min: 0.05,
        max: 135.5,
    },
    FieldDef {
        id: "transit_duration",
        key: "trandur",
        prompt: "What is the transit duration in hours?",
        placeholder: "e.g., 3.5",
        hint: "How long the transit lasts (0 - 55 hours)",
        kind: FieldKind::Number,
        min: 0.0,
        max: 55.0,
    },
    FieldDef {
        id: "planet_radius",
        key: "rade",
        prompt: "What is the planet radius in Earth radii?",
        placeholder: "e.g., 1.2",
        hint: "Size relative to Earth (0.4 - 1080 Earth radii)",
        kind: FieldKind::Number,
        min: 0.4,
        max: 1080.0,
    },
    FieldDef {
        id: "insolation_flux",
        key: "insol",
        prompt: "What is the insolation flux in Earth flux units?",
        placeholder: "e.g., 1.0",
        hint: "Amount of stellar energy received (0.027 - 8270 Earth flux units)",
        kind: FieldKind::Number,
        min: 0.027,
        max: 8270.0,
    },
    FieldDef {
        id: "equilibrium_temp",
        key: "eqt",
        prompt: "What is the equilibrium temperature in Kelvin?",
        placeholder: "e.g., 288",
        hint: "Expected surface temperature (82 - 2510 K)",
        kind: FieldKind::Number,
        min: 82.0,
        max: 2510.0,
    },
    FieldDef {
        id: "stellar_temp",
        key: "teff",
        prompt: "What is the stellar effective temperature in Kelvin?",
        placeholder: "e.g., 5778",
        hint: "Temperature of the host star (2520 - 46700 K)",
        kind: FieldKind::Number,
        min: 2520.0,
        max: 46700.0,
    },
    FieldDef {
        id: "stellar_logg",
        key: "logg",
        prompt: "What is the stellar log(g) in cm/s²?",
        placeholder: "e.g., 4.5",
        hint: "Surface gravity of the star (1.773 - 5.275)",
        kind: FieldKind::Number,
        min: 1.773,
        max: 5.275,
    },
    FieldDef {
        id: "stellar_radius",
        key: "rad",
        prompt: "What is the stellar radius in solar radii?",
        placeholder: "e.g., 1.0",
        hint: "Size relative to the Sun (0.11 - 85 solar radii)",
        kind: FieldKind::Number,
        min: 0.11,
        max: 85.0,
    },
];

/// Ordered view over the whole catalog.
pub fn list() -> &'static [FieldDef] {
    &FIELD_CATALOG
}

/// Field at dialogue position `index`, or `None` past the end.
pub fn by_index(index: usize) -> Option<&'static FieldDef> {
    FIELD_CATALOG.get(index)
}

/// Canonical keys of every field, in catalog order.
pub fn canonical_keys() -> impl Iterator<Item = CanonicalKey> {
    FIELD_CATALOG.iter().map(|field| field.key)
}
