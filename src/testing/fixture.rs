//! Test fixture for integration testing
//!
//! The Fixture provides a complete engine environment for testing: a cursor
//! context over the headless backend, rooted in a temporary asset directory
//! that tests populate with PNG variants or fake native cursor files.

use std::fs;
use std::path::Path;

use image::RgbaImage;
use tempfile::TempDir;

use crate::backend::HeadlessBackend;
use crate::config::{CursorConfig, CursorSpec};
use crate::{CursorContext, CursorId, Hotspot};

/// Test harness: a cursor context plus a throwaway asset root.
///
/// Uses the same [`CursorContext`] as production, but with
/// [`HeadlessBackend`] standing in for the platform.
pub struct Fixture {
    context: CursorContext<HeadlessBackend>,
    asset_dir: TempDir,
}

impl Default for Fixture {
    fn default() -> Self {
        Self::new()
    }
}

impl Fixture {
    /// Create a fixture with an empty configuration.
    pub fn new() -> Self {
        Self::with_config(CursorConfig::default())
    }

    /// Create a fixture with the given configuration. Cursors are not
    /// loaded until `context().init()` runs, so tests can lay down asset
    /// files first.
    pub fn with_config(config: CursorConfig) -> Self {
        let asset_dir = TempDir::new().expect("failed to create temp asset dir");
        let context = CursorContext::new(HeadlessBackend::new(), asset_dir.path(), config);
        Self { context, asset_dir }
    }

    /// Write a `width`×`height` RGBA PNG below the asset root.
    pub fn write_png(&self, relative: &str, width: u32, height: u32) {
        let path = self.asset_dir.path().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("failed to create asset subdir");
        }
        RgbaImage::new(width, height)
            .save(&path)
            .expect("failed to write test png");
    }

    /// Write an arbitrary file below the asset root (for exercising the
    /// fake native loader, which only checks file existence).
    pub fn write_raw(&self, relative: &str) {
        let path = self.asset_dir.path().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("failed to create asset subdir");
        }
        fs::write(&path, b"").expect("failed to write test file");
    }

    pub fn asset_root(&self) -> &Path {
        self.asset_dir.path()
    }

    /// Mutable access to the engine under test.
    pub fn context(&mut self) -> &mut CursorContext<HeadlessBackend> {
        &mut self.context
    }

    /// Immutable access to the engine under test.
    pub fn context_ref(&self) -> &CursorContext<HeadlessBackend> {
        &self.context
    }

    /// Immutable access to the recorded backend state.
    pub fn backend(&self) -> &HeadlessBackend {
        self.context.backend()
    }

    /// Mutable backend access, for configuring scale/formats/viewport.
    pub fn backend_mut(&mut self) -> &mut HeadlessBackend {
        self.context.backend_mut()
    }

    /// Shorthand for building a cursor spec.
    pub fn spec(id: &str, path: &str, hotspot: (f32, f32)) -> CursorSpec {
        CursorSpec {
            identifier: CursorId::new(id),
            path: path.to_string(),
            hotspot: Hotspot::new(hotspot.0, hotspot.1),
        }
    }
}
