//! # Evaluation Settings
//!
//! Caller-level configuration: which edition of each standard to evaluate
//! against, plus defaults applied when a design case leaves a choice open.
//!
//! ## JSON Example
//!
//! ```json
//! {
//!   "general_features": "IRC5:2015",
//!   "loads": "IRC6:2017",
//!   "deck_material": "Concrete",
//!   "terrain": "Plain",
//!   "parallel": true
//! }
//! ```
//!
//! Every field is optional; missing ones take the [`Default`] value.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::{CalcError, CalcResult};
use crate::standards::irc6_2017::{DeckMaterial, Terrain};
use crate::standards::{GeneralFeatures, GeneralFeaturesEdition, LoadsAndForces, LoadsEdition};

/// Settings shared by every case in a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EvaluationSettings {
    /// Edition used for geometric checks
    pub general_features: GeneralFeaturesEdition,

    /// Edition used for loads
    pub loads: LoadsEdition,

    /// Deck material when a case does not name one
    pub deck_material: DeckMaterial,

    /// Wind terrain when a case does not name one
    pub terrain: Terrain,

    /// Evaluate batches on the rayon thread pool
    pub parallel: bool,
}

impl Default for EvaluationSettings {
    fn default() -> Self {
        EvaluationSettings {
            general_features: GeneralFeaturesEdition::Irc5_2015,
            loads: LoadsEdition::Irc6_2017,
            deck_material: DeckMaterial::Concrete,
            terrain: Terrain::Plain,
            parallel: true,
        }
    }
}

impl EvaluationSettings {
    /// Parse settings from JSON text
    pub fn from_json(json: &str) -> CalcResult<Self> {
        let settings: EvaluationSettings =
            serde_json::from_str(json).map_err(|e| CalcError::settings(e.to_string()))?;
        debug!(?settings, "settings loaded");
        Ok(settings)
    }

    pub fn to_json(&self) -> CalcResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| CalcError::settings(e.to_string()))
    }

    pub fn general_features(&self) -> &'static dyn GeneralFeatures {
        self.general_features.resolve()
    }

    pub fn loads(&self) -> &'static dyn LoadsAndForces {
        self.loads.resolve()
    }

    pub fn with_deck_material(mut self, deck_material: DeckMaterial) -> Self {
        self.deck_material = deck_material;
        self
    }

    pub fn with_terrain(mut self, terrain: Terrain) -> Self {
        self.terrain = terrain;
        self
    }

    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference::Standard;

    #[test]
    fn test_defaults() {
        let settings = EvaluationSettings::default();
        assert_eq!(settings.general_features().edition(), Standard::Irc5_2015);
        assert_eq!(settings.loads().edition(), Standard::Irc6_2017);
        assert_eq!(settings.deck_material, DeckMaterial::Concrete);
        assert!(settings.parallel);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let settings = EvaluationSettings::from_json(r#"{ "deck_material": "Steel" }"#).unwrap();
        assert_eq!(settings.deck_material, DeckMaterial::Steel);
        assert_eq!(settings.terrain, Terrain::Plain);
    }

    #[test]
    fn test_roundtrip() {
        let settings = EvaluationSettings::default()
            .with_terrain(Terrain::Obstructed)
            .sequential();
        let json = settings.to_json().unwrap();
        assert_eq!(EvaluationSettings::from_json(&json).unwrap(), settings);
    }

    #[test]
    fn test_bad_json_is_settings_error() {
        let err = EvaluationSettings::from_json("{ not json").unwrap_err();
        assert_eq!(err.error_code(), "SETTINGS_ERROR");
        let err = EvaluationSettings::from_json(r#"{ "precision": 4 }"#).unwrap_err();
        assert_eq!(err.error_code(), "SETTINGS_ERROR");
        let err = EvaluationSettings::from_json(r#"{ "loads": "IRC6:2000" }"#).unwrap_err();
        assert_eq!(err.error_code(), "SETTINGS_ERROR");
    }
}
