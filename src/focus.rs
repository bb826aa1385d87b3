//! Viewport focus monitoring
//!
//! Many UI toolkits silently revert the visible pointer glyph to a system
//! default when input focus moves off the render surface (e.g. a clicked
//! button takes focus). The monitor runs once per rendered frame: while the
//! surface is directly hovered but unfocused, and auto-focus is enabled, it
//! grants focus back so the engine's chosen cursor stays visibly in effect.
//!
//! Best-effort cosmetic correction only; it never reads or writes the
//! request stack.

use tracing::debug;

use crate::backend::CursorBackend;

pub(crate) struct FocusMonitor {
    auto_focus: bool,
}

impl FocusMonitor {
    pub fn new(auto_focus: bool) -> Self {
        Self { auto_focus }
    }

    pub fn auto_focus(&self) -> bool {
        self.auto_focus
    }

    pub fn set_auto_focus(&mut self, enabled: bool) {
        self.auto_focus = enabled;
    }

    /// Per-frame audit. Returns true if a focus grant was issued.
    pub fn tick(&mut self, backend: &mut dyn CursorBackend) -> bool {
        if !self.auto_focus {
            return false;
        }
        let status = backend.viewport_status();
        if status.hovered && !status.focused {
            debug!("viewport hovered without focus, granting focus");
            backend.focus_viewport();
            return true;
        }
        false
    }
}
