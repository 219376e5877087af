//! Persisted selection snapshot
//!
//! The snapshot is a small JSON document:
//!
//! ```json
//! {"selected_category_ids": ["wood", "water"], "omit_unselected": false}
//! ```
//!
//! Loading never fails the caller: a missing or malformed file is logged and
//! treated as an empty snapshot, and stale ids are dropped on restore.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use swatch_engine::PaletteState;
use utoipa::ToSchema;

use crate::error::PersistError;

/// Selected categories and the omit flag, as stored on disk
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SelectionSnapshot {
    /// Selected category ids, in catalog order when written by us
    #[serde(default)]
    pub selected_category_ids: Vec<String>,
    /// Whether unselected categories are left off the texture
    #[serde(default)]
    pub omit_unselected: bool,
}

impl SelectionSnapshot {
    /// Capture the persistable part of `state`
    pub fn from_state(state: &PaletteState) -> Self {
        Self {
            selected_category_ids: state
                .selected_ids()
                .into_iter()
                .map(str::to_string)
                .collect(),
            omit_unselected: state.omit_unselected(),
        }
    }

    /// Restore into `state`, replacing its selection
    pub fn apply_to(&self, state: &mut PaletteState) {
        let before = self.selected_category_ids.len();
        state.restore(&self.selected_category_ids, self.omit_unselected);
        let dropped = before.saturating_sub(state.selected_count());
        if dropped > 0 {
            tracing::debug!(dropped, "Ignored unknown category ids in selection snapshot");
        }
    }

    pub fn load(path: &Path) -> Result<Self, PersistError> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Load `path`, or an empty snapshot if it is missing or malformed
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No selection file, starting empty");
            return Self::default();
        }
        match Self::load(path) {
            Ok(snapshot) => {
                tracing::info!(
                    path = %path.display(),
                    selected = snapshot.selected_category_ids.len(),
                    "Loaded selections"
                );
                snapshot
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), %e, "Could not load selections");
                Self::default()
            }
        }
    }

    pub fn save(&self, path: &Path) -> Result<(), PersistError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        tracing::info!(
            path = %path.display(),
            selected = self.selected_category_ids.len(),
            "Saved selections"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_state_uses_catalog_order() {
        let mut state = PaletteState::default();
        state.select("water");
        state.select("wood");
        state.set_omit_unselected(true);

        let snapshot = SelectionSnapshot::from_state(&state);
        assert_eq!(snapshot.selected_category_ids, vec!["wood", "water"]);
        assert!(snapshot.omit_unselected);
    }

    #[test]
    fn test_apply_drops_unknown_ids() {
        let snapshot = SelectionSnapshot {
            selected_category_ids: vec!["ice".into(), "retired_material".into()],
            omit_unselected: true,
        };
        let mut state = PaletteState::default();
        state.select("wood");
        snapshot.apply_to(&mut state);
        assert_eq!(state.selected_ids(), vec!["ice"]);
        assert!(state.omit_unselected());
    }

    #[test]
    fn test_deserialize_missing_fields() {
        let snapshot: SelectionSnapshot = serde_json::from_str("{}").unwrap();
        assert_eq!(snapshot, SelectionSnapshot::default());

        let snapshot: SelectionSnapshot =
            serde_json::from_str(r#"{"selected_category_ids":["gems"]}"#).unwrap();
        assert_eq!(snapshot.selected_category_ids, vec!["gems"]);
        assert!(!snapshot.omit_unselected);
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state").join("selections.json");
        let snapshot = SelectionSnapshot {
            selected_category_ids: vec!["bark".into(), "moss".into()],
            omit_unselected: false,
        };
        snapshot.save(&path).unwrap();
        assert_eq!(SelectionSnapshot::load(&path).unwrap(), snapshot);
    }

    #[test]
    fn test_load_or_default_tolerates_bad_files() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(
            SelectionSnapshot::load_or_default(&dir.path().join("missing.json")),
            SelectionSnapshot::default()
        );

        let garbage = dir.path().join("garbage.json");
        fs::write(&garbage, "not json at all").unwrap();
        assert!(matches!(
            SelectionSnapshot::load(&garbage),
            Err(PersistError::Json(_))
        ));
        assert_eq!(
            SelectionSnapshot::load_or_default(&garbage),
            SelectionSnapshot::default()
        );

        // A bare array is the wrong shape
        fs::write(&garbage, r#"["wood"]"#).unwrap();
        assert_eq!(
            SelectionSnapshot::load_or_default(&garbage),
            SelectionSnapshot::default()
        );
    }
}
