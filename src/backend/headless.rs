//! Headless backend for testing
//!
//! This module provides a mock platform that requires no display server,
//! allowing the full engine to run in CI environments and for integration
//! testing.
//!
//! # Design Invariants
//!
//! 1. **No platform access**: the headless backend never touches a real
//!    windowing system. Cursor "resources" are tokens over an in-memory
//!    record of the request that produced them.
//!
//! 2. **Deterministic**: the display scale, RGBA-cursor support flag, and
//!    the set of file extensions the fake native loader accepts are all
//!    fixed by the test, enabling reproducible load and fallback behavior.
//!
//! 3. **Observable**: every created cursor, the currently bound shape, and
//!    each focus grant is recorded for assertions.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::Hotspot;

use super::{CursorBackend, CursorResource, ViewportStatus};

/// How a recorded cursor resource was produced.
#[derive(Debug, Clone, PartialEq)]
pub enum CursorSource {
    /// Fake native load: a file with one of the accepted extensions existed.
    File(PathBuf),
    /// Synthesized from an RGBA buffer of the given dimensions.
    Rgba { width: u32, height: u32 },
}

/// Record of one created cursor resource.
#[derive(Debug, Clone, PartialEq)]
pub struct CreatedCursor {
    pub source: CursorSource,
    pub hotspot: Hotspot,
}

/// Mock platform backend for tests and the demo binary.
///
/// # Why Headless?
///
/// Integration tests need to exercise the full engine logic (spec loading,
/// fallback selection, stack arbitration, mount-on-change) without
/// requiring a display server or real hardware cursors. The headless
/// backend stands in for the platform while recording everything it is
/// asked to do.
pub struct HeadlessBackend {
    next_resource: u64,
    /// Extensions the fake native loader accepts, in priority order.
    /// Empty by default, which forces every load through the PNG fallback.
    native_formats: Vec<String>,
    rgba_supported: bool,
    display_scale: f32,
    viewport: ViewportStatus,
    /// Every resource ever minted, keyed by token.
    created: HashMap<CursorResource, CreatedCursor>,
    current_shape: Option<CursorResource>,
    shape_sets: usize,
    focus_grants: usize,
}

impl Default for HeadlessBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl HeadlessBackend {
    /// Create a new headless backend: scale 1.0, RGBA cursors supported,
    /// no native formats, viewport neither hovered nor focused.
    pub fn new() -> Self {
        Self {
            next_resource: 0,
            native_formats: Vec::new(),
            rgba_supported: true,
            display_scale: 1.0,
            viewport: ViewportStatus::default(),
            created: HashMap::new(),
            current_shape: None,
            shape_sets: 0,
            focus_grants: 0,
        }
    }

    /// Accept `extension` in the fake native loader. Priority follows call
    /// order, mirroring a platform's own format priority list.
    pub fn add_native_format(&mut self, extension: &str) {
        self.native_formats.push(extension.to_string());
    }

    pub fn set_rgba_supported(&mut self, supported: bool) {
        self.rgba_supported = supported;
    }

    pub fn set_display_scale(&mut self, scale: f32) {
        self.display_scale = scale;
    }

    /// Set the simulated hover/focus state of the render surface.
    pub fn set_viewport(&mut self, hovered: bool, focused: bool) {
        self.viewport = ViewportStatus { hovered, focused };
    }

    /// Record for a minted resource (for test assertions).
    pub fn created(&self, resource: CursorResource) -> Option<&CreatedCursor> {
        self.created.get(&resource)
    }

    /// Total number of resources ever minted.
    pub fn created_count(&self) -> usize {
        self.created.len()
    }

    /// Resource currently bound to the custom-cursor slot.
    pub fn current_shape(&self) -> Option<CursorResource> {
        self.current_shape
    }

    /// Record of the currently bound custom shape.
    pub fn current_shape_record(&self) -> Option<&CreatedCursor> {
        self.current_shape.and_then(|resource| self.created.get(&resource))
    }

    /// Number of times the custom-cursor slot was rebound.
    pub fn shape_set_count(&self) -> usize {
        self.shape_sets
    }

    /// Number of focus grants issued to the viewport.
    pub fn focus_grant_count(&self) -> usize {
        self.focus_grants
    }

    fn mint(&mut self, source: CursorSource, hotspot: Hotspot) -> CursorResource {
        self.next_resource += 1;
        let resource = CursorResource::from_raw(self.next_resource);
        self.created.insert(resource, CreatedCursor { source, hotspot });
        resource
    }
}

impl CursorBackend for HeadlessBackend {
    fn create_cursor_from_file(&mut self, path: &Path, hotspot: Hotspot) -> Option<CursorResource> {
        let candidate = self
            .native_formats
            .iter()
            .map(|extension| path.with_extension(extension))
            .find(|candidate| candidate.is_file());

        match candidate {
            Some(candidate) => {
                debug!("headless native load: {}", candidate.display());
                Some(self.mint(CursorSource::File(candidate), hotspot))
            }
            None => None,
        }
    }

    fn supports_rgba_cursors(&self) -> bool {
        self.rgba_supported
    }

    fn create_cursor_from_rgba(
        &mut self,
        pixels: &[u8],
        width: u32,
        height: u32,
        hotspot: Hotspot,
    ) -> Option<CursorResource> {
        if !self.rgba_supported {
            return None;
        }
        debug_assert_eq!(pixels.len(), (width * height * 4) as usize);
        debug!("headless rgba cursor: {}x{}", width, height);
        Some(self.mint(CursorSource::Rgba { width, height }, hotspot))
    }

    fn set_custom_shape(&mut self, resource: CursorResource) {
        self.shape_sets += 1;
        self.current_shape = Some(resource);
    }

    fn display_scale_at(&self, _x: f32, _y: f32) -> f32 {
        self.display_scale
    }

    fn viewport_status(&self) -> ViewportStatus {
        self.viewport
    }

    fn focus_viewport(&mut self) {
        self.viewport.focused = true;
        self.focus_grants += 1;
    }
}
