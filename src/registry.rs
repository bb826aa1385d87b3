//! Custom cursor asset registry
//!
//! Loads the configured cursor specs through the platform backend and owns
//! the identifier → resource mapping. Loading is non-fatal per cursor: a
//! spec that fails both the native loader and the PNG fallback is skipped
//! with a warning, so one bad asset cannot block startup.
//!
//! Resources are platform-owned and live for the process lifetime; the
//! registry never releases them, it only forgets mappings on reload.

use std::collections::HashMap;
use std::path::PathBuf;

use tracing::{info, warn};

use crate::backend::{CursorBackend, CursorResource};
use crate::config::CursorSpec;
use crate::{fallback, CursorId};

/// Identifier → loaded platform resource mapping.
pub struct CursorRegistry {
    asset_root: PathBuf,
    loaded: HashMap<CursorId, CursorResource>,
    mounted: Option<CursorId>,
}

impl CursorRegistry {
    pub fn new(asset_root: impl Into<PathBuf>) -> Self {
        Self {
            asset_root: asset_root.into(),
            loaded: HashMap::new(),
            mounted: None,
        }
    }

    /// Load (or fully reload) all specs, replacing any prior mapping.
    ///
    /// Hotspots are clamped into [0,1]² (out-of-range values log a warning
    /// first), the native loader gets the first shot, and the PNG
    /// density-variant fallback covers native failures.
    pub fn load(&mut self, backend: &mut dyn CursorBackend, specs: &[CursorSpec]) {
        self.loaded.clear();

        for spec in specs {
            if !spec.hotspot.is_normalized() {
                warn!(
                    "hotspot ({}, {}) for cursor [{}] is out of range, clamping",
                    spec.hotspot.x, spec.hotspot.y, spec.identifier
                );
            }
            let hotspot = spec.hotspot.clamped();
            let path = self.asset_root.join(&spec.path);

            let resource = backend
                .create_cursor_from_file(&path, hotspot)
                .or_else(|| fallback::load_from_pngs(backend, &path, hotspot));

            match resource {
                Some(resource) => {
                    info!("loaded cursor [{}] from {}", spec.identifier, path.display());
                    self.loaded.insert(spec.identifier.clone(), resource);
                }
                None => {
                    warn!(
                        "failed to load hardware cursor [{}] located at {}",
                        spec.identifier,
                        path.display()
                    );
                }
            }
        }
    }

    /// Bind the platform's custom-cursor slot to the resource for `id`.
    ///
    /// Returns false, leaving the previously bound shape untouched, if
    /// `id` was never successfully loaded.
    pub fn mount(&mut self, backend: &mut dyn CursorBackend, id: &CursorId) -> bool {
        match self.loaded.get(id) {
            Some(resource) => {
                self.mounted = Some(id.clone());
                backend.set_custom_shape(*resource);
                true
            }
            None => {
                warn!(
                    "tried to mount custom cursor [{}], but no such cursor has been loaded",
                    id
                );
                false
            }
        }
    }

    /// Number of successfully loaded cursors.
    pub fn count(&self) -> usize {
        self.loaded.len()
    }

    pub fn contains(&self, id: &CursorId) -> bool {
        self.loaded.contains_key(id)
    }

    /// All successfully loaded identifiers, sorted for deterministic output.
    pub fn identifiers(&self) -> Vec<CursorId> {
        let mut ids: Vec<CursorId> = self.loaded.keys().cloned().collect();
        ids.sort();
        ids
    }

    /// Identifier of the currently mounted custom cursor, if any.
    pub fn mounted(&self) -> Option<&CursorId> {
        self.mounted.as_ref()
    }
}
