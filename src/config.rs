//! Cursor configuration types
//!
//! The persisted configuration surface: the list of custom cursor specs and
//! the viewport auto-focus flag. Where the file lives and when it is read is
//! the host's concern; this module only defines the shape and a JSON loader.

use std::fs;
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::{CursorId, Hotspot};

/// Identity of one loadable custom cursor.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct CursorSpec {
    /// Unique symbolic key for this cursor.
    pub identifier: CursorId,
    /// Path to the cursor image relative to the asset root, without a file
    /// extension (for example `cursors/crosshair`). The platform loader and
    /// the PNG fallback both derive concrete file names from it.
    pub path: String,
    /// Operative point of the cursor, normalized to [0,1] per axis, relative
    /// to the top-left. A typical crosshair is (0.5, 0.5). File formats that
    /// embed their own hotspot override this value.
    #[serde(default)]
    pub hotspot: Hotspot,
}

/// Persisted cursor configuration, loaded once at session start.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct CursorConfig {
    /// Custom cursor specs to load on startup.
    #[serde(default)]
    pub cursors: Vec<CursorSpec>,
    /// If true, automatically focus the viewport while it is directly
    /// hovered. Prevents reversion to the default cursor when the viewport
    /// loses focus (e.g. on a button press). Can be toggled at runtime.
    #[serde(default = "default_auto_focus")]
    pub auto_focus_viewport: bool,
}

fn default_auto_focus() -> bool {
    true
}

impl Default for CursorConfig {
    fn default() -> Self {
        Self {
            cursors: Vec::new(),
            auto_focus_viewport: true,
        }
    }
}

impl CursorConfig {
    /// Parse a configuration from its JSON representation.
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        serde_json::from_str(json).context("invalid cursor configuration")
    }

    /// Read and parse a configuration file.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let data = fs::read_to_string(path)
            .with_context(|| format!("reading cursor configuration from {}", path.display()))?;
        Self::from_json(&data)
    }
}
