//! Platform cursor backend abstraction
//!
//! The engine never talks to a windowing system directly. Everything the
//! platform must provide (loading cursor images, synthesizing cursors from
//! raw pixels, binding the custom cursor slot, reporting display scale and
//! viewport status) goes through the [`CursorBackend`] trait.
//!
//! Two kinds of implementations are expected:
//!
//! - **Host backends**: thin adapters over a real windowing/platform cursor
//!   API (Win32, AppKit, a Wayland compositor seat). Written by the host
//!   application, not shipped here.
//!
//! - **Headless backend** (`headless`): for testing without a display.
//!   Deterministic, and records every call for assertions.
//!
//! # Design Invariants
//!
//! 1. **Backend isolation**: the stack engine and registry are
//!    backend-agnostic and work only through this trait. No backend type
//!    leaks into arbitration logic.
//!
//! 2. **Resources are write-once**: a [`CursorResource`] is minted when an
//!    image loads and stays valid until the process exits. There is no
//!    release call anywhere in this interface.

use std::path::Path;

use crate::Hotspot;

pub mod headless;

pub use headless::HeadlessBackend;

/// Opaque token for a cursor resource held by the platform.
///
/// Minted by a backend when a cursor image is loaded or synthesized. The
/// registry maps identifiers to these tokens; nothing else is ever done with
/// one except handing it back to the backend that minted it. Platform cursor
/// resources are never released, so tokens stay valid for the process
/// lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CursorResource(u64);

impl CursorResource {
    pub fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    pub fn raw(self) -> u64 {
        self.0
    }
}

/// Hover/focus state of the render surface, sampled once per frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ViewportStatus {
    /// The surface is the direct pointer-hover target.
    pub hovered: bool,
    /// The surface currently holds input focus.
    pub focused: bool,
}

/// Interface the host platform implements for the cursor engine.
///
/// All methods are infallible from the engine's point of view: loaders
/// return `None` on failure and the engine degrades gracefully, so a
/// backend should log its own diagnostics rather than panic.
pub trait CursorBackend {
    /// Load a cursor image for `path` (extension-less; the platform applies
    /// its own format priority, e.g. `.ani` → `.cur` → `.png` on Windows).
    /// `hotspot` applies only to formats that do not embed one.
    fn create_cursor_from_file(&mut self, path: &Path, hotspot: Hotspot) -> Option<CursorResource>;

    /// Whether this platform can synthesize cursors from raw pixel buffers.
    fn supports_rgba_cursors(&self) -> bool;

    /// Synthesize a cursor from an 8-bit RGBA pixel buffer.
    fn create_cursor_from_rgba(
        &mut self,
        pixels: &[u8],
        width: u32,
        height: u32,
        hotspot: Hotspot,
    ) -> Option<CursorResource>;

    /// Bind the platform's single mutable custom-cursor slot to `resource`.
    fn set_custom_shape(&mut self, resource: CursorResource);

    /// Display scale factor at the given point, in device pixels per logical
    /// pixel (1.0 on an unscaled display).
    fn display_scale_at(&self, x: f32, y: f32) -> f32;

    /// Current hover/focus state of the render surface.
    fn viewport_status(&self) -> ViewportStatus;

    /// Grant input focus to the render surface.
    fn focus_viewport(&mut self);
}
