//! Placement dataset and its sources
//!
//! The dataset is authored data. The engine depends only on its shape:
//!
//! ```text
//! default: { grid_mode: { motion_type: { attribute_key: { turns: {x, y} } } } }
//! special: { grid_mode: { letter: { orientation_key: { turns_tuple: { selector: {x, y} } } } } }
//! ```

use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::models::{AdjustmentPoint, GridMode};
use crate::placement::errors::{PlacementError, Result};

/// turns -> offset
pub type TurnsTable = BTreeMap<String, AdjustmentPoint>;
/// attribute key -> turns table
pub type AttributeTable = BTreeMap<String, TurnsTable>;
/// motion type -> attribute table
pub type MotionTypeTable = BTreeMap<String, AttributeTable>;

/// selector (color or motion type) -> offset
pub type SelectorTable = BTreeMap<String, AdjustmentPoint>;
/// turns tuple -> selector table
pub type TurnsTupleTable = BTreeMap<String, SelectorTable>;
/// orientation key -> turns tuple table
pub type OrientationTable = BTreeMap<String, TurnsTupleTable>;
/// letter -> orientation table
pub type LetterTable = BTreeMap<String, OrientationTable>;

/// The complete authored placement dataset
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct PlacementData {
    #[serde(default)]
    pub default: BTreeMap<GridMode, MotionTypeTable>,
    #[serde(default)]
    pub special: BTreeMap<GridMode, LetterTable>,
}

impl PlacementData {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }
}

/// Anything that can produce a placement dataset
pub trait PlacementDataSource {
    fn load(&self) -> Result<PlacementData>;
}

const EMBEDDED_DEFAULT: &str = include_str!("../../../data/default_placements.json");
const EMBEDDED_SPECIAL: &str = include_str!("../../../data/special_placements.json");

/// The dataset compiled into the module
pub struct EmbeddedPlacementSource;

impl PlacementDataSource for EmbeddedPlacementSource {
    fn load(&self) -> Result<PlacementData> {
        Ok(PlacementData {
            default: serde_json::from_str(EMBEDDED_DEFAULT)?,
            special: serde_json::from_str(EMBEDDED_SPECIAL)?,
        })
    }
}

/// A JSON document, typically fetched by the host
pub struct JsonPlacementSource(pub String);

impl PlacementDataSource for JsonPlacementSource {
    fn load(&self) -> Result<PlacementData> {
        PlacementData::from_json(&self.0)
    }
}

/// A YAML document
pub struct YamlPlacementSource(pub String);

impl PlacementDataSource for YamlPlacementSource {
    fn load(&self) -> Result<PlacementData> {
        PlacementData::from_yaml(&self.0)
    }
}

/// A file on disk; `.yaml`/`.yml` are read as YAML, anything else as JSON
pub struct FilePlacementSource {
    path: PathBuf,
}

impl FilePlacementSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl PlacementDataSource for FilePlacementSource {
    fn load(&self) -> Result<PlacementData> {
        let content = std::fs::read_to_string(&self.path)?;
        let is_yaml = matches!(
            self.path.extension().and_then(|e| e.to_str()),
            Some("yaml") | Some("yml")
        );
        if is_yaml {
            PlacementData::from_yaml(&content)
        } else {
            PlacementData::from_json(&content)
        }
    }
}

/// Holds the placement dataset once it has been loaded
///
/// Constructed by the caller and passed to the lookups; there is no
/// process-wide instance. Loading happens at most once, after which all
/// access is read-only.
#[derive(Debug, Default)]
pub struct PlacementDataService {
    data: OnceCell<PlacementData>,
}

impl PlacementDataService {
    /// An empty service; lookups fail until `load_placement_data` succeeds
    pub fn new() -> Self {
        Self::default()
    }

    /// A service preloaded with the given tables
    pub fn with_data(data: PlacementData) -> Self {
        Self {
            data: OnceCell::with_value(data),
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.data.get().is_some()
    }

    /// Load the dataset from `source` unless already loaded
    ///
    /// A failed load leaves the service unloaded so it can be retried.
    pub fn load_placement_data(&self, source: &dyn PlacementDataSource) -> Result<()> {
        if self.is_loaded() {
            log::debug!("Placement data already loaded, skipping");
            return Ok(());
        }
        let data = self.data.get_or_try_init(|| source.load())?;
        log::info!(
            "Loaded placement data: {} default grid modes, {} special grid modes",
            data.default.len(),
            data.special.len()
        );
        Ok(())
    }

    /// Load the dataset from `source`, failing if one is already in place
    ///
    /// Unlike `load_placement_data`, the caller learns that its dataset was
    /// not applied. `source` is not read in that case.
    pub fn load_new_placement_data(&self, source: &dyn PlacementDataSource) -> Result<()> {
        let mut loaded_here = false;
        self.data.get_or_try_init(|| {
            loaded_here = true;
            source.load()
        })?;

        if !loaded_here {
            return Err(PlacementError::DatasetAlreadyLoaded);
        }
        log::info!("Loaded new placement data");
        Ok(())
    }

    /// The loaded dataset
    pub fn data(&self) -> Result<&PlacementData> {
        self.data.get().ok_or(PlacementError::DatasetUnavailable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct CountingSource<'a> {
        calls: &'a Cell<usize>,
        fail: bool,
    }

    impl PlacementDataSource for CountingSource<'_> {
        fn load(&self) -> Result<PlacementData> {
            self.calls.set(self.calls.get() + 1);
            if self.fail {
                Err(PlacementError::DatasetIo("unreachable".to_string()))
            } else {
                Ok(PlacementData::default())
            }
        }
    }

    #[test]
    fn test_unloaded_service_is_unavailable() {
        let service = PlacementDataService::new();
        assert!(!service.is_loaded());
        assert_eq!(service.data().unwrap_err(), PlacementError::DatasetUnavailable);
    }

    #[test]
    fn test_load_is_idempotent() {
        let calls = Cell::new(0);
        let service = PlacementDataService::new();
        let source = CountingSource { calls: &calls, fail: false };

        service.load_placement_data(&source).unwrap();
        service.load_placement_data(&source).unwrap();

        assert!(service.is_loaded());
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_failed_load_can_be_retried() {
        let calls = Cell::new(0);
        let service = PlacementDataService::new();

        let failing = CountingSource { calls: &calls, fail: true };
        assert!(service.load_placement_data(&failing).is_err());
        assert!(!service.is_loaded());

        let working = CountingSource { calls: &calls, fail: false };
        service.load_placement_data(&working).unwrap();
        assert!(service.is_loaded());
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn test_new_dataset_after_load_is_refused() {
        let calls = Cell::new(0);
        let service = PlacementDataService::new();
        let source = CountingSource { calls: &calls, fail: false };

        service.load_new_placement_data(&source).unwrap();
        assert_eq!(
            service.load_new_placement_data(&source),
            Err(PlacementError::DatasetAlreadyLoaded)
        );
        assert_eq!(calls.get(), 1);

        let preloaded = PlacementDataService::with_data(PlacementData::default());
        assert_eq!(
            preloaded.load_new_placement_data(&source),
            Err(PlacementError::DatasetAlreadyLoaded)
        );
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_embedded_dataset_parses() {
        let data = EmbeddedPlacementSource.load().unwrap();
        assert!(data.default.contains_key(&GridMode::Diamond));
        assert!(data.default.contains_key(&GridMode::Box));
        assert!(!data.special.is_empty());
    }

    #[test]
    fn test_json_and_yaml_sources_agree() {
        let json = r#"{"default": {"diamond": {"pro": {"pro": {"0": {"x": 10.0, "y": -5.0}}}}}}"#;
        let yaml = "default:\n  diamond:\n    pro:\n      pro:\n        \"0\": {x: 10.0, y: -5.0}\n";

        let from_json = JsonPlacementSource(json.to_string()).load().unwrap();
        let from_yaml = YamlPlacementSource(yaml.to_string()).load().unwrap();
        assert_eq!(from_json, from_yaml);
        assert!(from_json.special.is_empty());
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let err = JsonPlacementSource("{not json".to_string()).load().unwrap_err();
        assert!(matches!(err, PlacementError::DatasetParse(_)));
    }
}
