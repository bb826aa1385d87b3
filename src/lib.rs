//! cursor-stack: stack-based hardware cursor arbitration
//!
//! Many independent callers (UI widgets, gameplay code, input-focus logic)
//! want to set the hardware cursor. This crate turns those concurrent
//! requests into one deterministic, currently-active cursor:
//!
//! - [`CursorContext`] owns an ordered request stack; the topmost element
//!   always dictates the effective cursor. Callers push, modify, and remove
//!   entries through opaque [`Handle`]s, and later pushes strictly shadow
//!   earlier ones until popped or removed.
//! - [`CursorRegistry`] loads custom cursor images through the platform
//!   backend, falling back to PNG density variants when the native loader
//!   fails, and exposes them as mountable identifiers.
//! - A per-frame viewport audit keeps the chosen cursor visible on
//!   toolkits that revert the pointer glyph when the surface loses focus.
//!
//! The platform itself is a collaborator behind [`backend::CursorBackend`];
//! a deterministic [`backend::HeadlessBackend`] ships for tests, CI, and
//! the demo binary.

pub mod backend;
pub mod config;
pub mod event;
pub mod fallback;
pub mod registry;
pub mod stack;
pub mod testing;
mod focus;

pub use config::{CursorConfig, CursorSpec};
pub use cursor_icon::CursorIcon;
pub use event::{CursorChanged, SubscriberId};
pub use registry::CursorRegistry;
pub use stack::{Handle, StackElement};

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};

use crate::backend::CursorBackend;
use crate::event::Subscribers;
use crate::focus::FocusMonitor;
use crate::stack::Stack;

/// Unique symbolic identifier for a custom cursor.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct CursorId(String);

impl CursorId {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CursorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CursorId {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl From<String> for CursorId {
    fn from(name: String) -> Self {
        Self(name)
    }
}

/// Normalized hotspot coordinates in [0,1]×[0,1], relative to the top-left.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq)]
pub struct Hotspot {
    pub x: f32,
    pub y: f32,
}

impl Hotspot {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn is_normalized(self) -> bool {
        (0.0..=1.0).contains(&self.x) && (0.0..=1.0).contains(&self.y)
    }

    /// Clamp each axis into [0,1].
    pub fn clamped(self) -> Self {
        Self {
            x: self.x.clamp(0.0, 1.0),
            y: self.y.clamp(0.0, 1.0),
        }
    }
}

/// A cursor request: one of the platform's standard shapes, or a custom
/// cursor loaded by the registry.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CursorKind {
    /// A standard platform shape from the shared `cursor-icon` vocabulary.
    Standard(CursorIcon),
    /// A custom cursor, referenced by its registry identifier.
    Custom(CursorId),
}

impl Default for CursorKind {
    fn default() -> Self {
        Self::Standard(CursorIcon::Default)
    }
}

impl CursorKind {
    pub fn custom(id: impl Into<CursorId>) -> Self {
        Self::Custom(id.into())
    }

    pub fn is_custom(&self) -> bool {
        matches!(self, Self::Custom(_))
    }

    /// The custom identifier, if this kind is custom.
    pub fn custom_id(&self) -> Option<&CursorId> {
        match self {
            Self::Custom(id) => Some(id),
            Self::Standard(_) => None,
        }
    }
}

/// Central cursor authority: owns the request stack, the asset registry,
/// the focus monitor, and the platform backend.
///
/// Explicitly owned and passed by reference to whatever needs cursor
/// control: construct at application start, drop at application end; one
/// logical instance per session. All operations run on the host's UI/update
/// thread. Within each mutating call, re-evaluation and change
/// notification complete synchronously before the call returns.
pub struct CursorContext<B: CursorBackend> {
    backend: B,
    registry: CursorRegistry,
    stack: Stack,
    specs: Vec<CursorSpec>,
    current: CursorKind,
    subscribers: Subscribers,
    focus: FocusMonitor,
    initialized: bool,
}

impl<B: CursorBackend> CursorContext<B> {
    /// Build a context over `backend`. Custom cursor paths resolve relative
    /// to `asset_root`. The stack starts with its permanent base element
    /// (the platform default shape); nothing is loaded until [`Self::init`].
    pub fn new(backend: B, asset_root: impl Into<PathBuf>, config: CursorConfig) -> Self {
        let base = CursorKind::default();
        Self {
            backend,
            registry: CursorRegistry::new(asset_root),
            stack: Stack::new(base.clone()),
            specs: config.cursors,
            current: base,
            subscribers: Subscribers::default(),
            focus: FocusMonitor::new(config.auto_focus_viewport),
            initialized: false,
        }
    }

    /// Load all configured cursors and run the initial evaluation.
    ///
    /// Calling this twice is a logged error and does nothing the second
    /// time.
    pub fn init(&mut self) {
        if self.initialized {
            error!("tried to initialize the cursor context after it was already initialized");
            return;
        }
        self.initialized = true;
        self.registry.load(&mut self.backend, &self.specs);
        info!(
            "cursor context initialized with {} custom cursor(s)",
            self.registry.count()
        );
        self.evaluate();
    }

    /// Reload every configured spec, replacing the prior mapping. Intended
    /// for editor-style session restarts; loading is idempotent.
    pub fn reload_cursors(&mut self) {
        self.registry.load(&mut self.backend, &self.specs);
    }

    // Stack manipulation

    /// Push a request on top of the stack and return its handle. The new
    /// request becomes the effective cursor immediately.
    pub fn push_cursor(&mut self, kind: CursorKind) -> Handle {
        let handle = self.stack.push(kind);
        self.evaluate();
        handle
    }

    pub fn push_standard(&mut self, icon: CursorIcon) -> Handle {
        self.push_cursor(CursorKind::Standard(icon))
    }

    pub fn push_custom(&mut self, id: impl Into<CursorId>) -> Handle {
        self.push_cursor(CursorKind::Custom(id.into()))
    }

    /// Overwrite the kind of the element with `handle`, keeping its
    /// position. Invalid or absent handles are silent no-ops.
    pub fn modify_cursor(&mut self, handle: Handle, kind: CursorKind) {
        if self.stack.modify(handle, kind) {
            self.evaluate();
        }
    }

    /// Remove the element with `handle`, wherever it sits in the stack.
    /// Invalid or absent handles are silent no-ops; the base cannot match.
    pub fn remove_cursor(&mut self, handle: Handle) {
        if self.stack.remove(handle) {
            self.evaluate();
        }
    }

    /// Remove the topmost request. No-op while only the base remains.
    pub fn pop_cursor(&mut self) {
        if self.stack.pop() {
            self.evaluate();
        }
    }

    /// Remove everything above the base, evaluating once.
    pub fn reset_stack(&mut self) {
        if self.stack.reset() {
            self.evaluate();
        }
    }

    /// Replace the base element (index 0). This is the only way to change
    /// the cursor shown when no other requests are stacked.
    pub fn set_base_cursor(&mut self, kind: CursorKind) {
        self.stack.set_base(kind);
        self.evaluate();
    }

    pub fn set_base_standard(&mut self, icon: CursorIcon) {
        self.set_base_cursor(CursorKind::Standard(icon));
    }

    pub fn set_base_custom(&mut self, id: impl Into<CursorId>) {
        self.set_base_cursor(CursorKind::Custom(id.into()));
    }

    // Registry access

    /// Bind the platform's custom-cursor slot to `id` directly, bypassing
    /// stack arbitration. Unknown identifiers log a warning and return
    /// false, leaving the previous shape in place.
    pub fn mount_custom_cursor(&mut self, id: &CursorId) -> bool {
        self.registry.mount(&mut self.backend, id)
    }

    pub fn custom_cursor_count(&self) -> usize {
        self.registry.count()
    }

    /// Identifiers of all successfully loaded cursors, sorted.
    pub fn custom_cursor_ids(&self) -> Vec<CursorId> {
        self.registry.identifiers()
    }

    pub fn mounted_custom_cursor(&self) -> Option<&CursorId> {
        self.registry.mounted()
    }

    // Observation

    /// The currently effective cursor kind. UI elements can poll this to
    /// bind their own displayed cursor to the engine's decision.
    pub fn current_kind(&self) -> &CursorKind {
        &self.current
    }

    /// Register a change callback, invoked synchronously from the mutating
    /// call whenever the effective cursor kind changes.
    pub fn subscribe(&mut self, callback: impl FnMut(&CursorChanged) + 'static) -> SubscriberId {
        self.subscribers.subscribe(Box::new(callback))
    }

    /// Drop a subscription. Unknown ids are ignored, so this is safe to
    /// call during teardown.
    pub fn unsubscribe(&mut self, id: SubscriberId) {
        self.subscribers.unsubscribe(id);
    }

    // Viewport focus

    /// Per-frame viewport audit, to be invoked by the host's tick driver.
    /// Grants focus back to the hovered-but-unfocused surface while
    /// auto-focus is enabled.
    pub fn audit_viewport(&mut self) {
        self.focus.tick(&mut self.backend);
    }

    pub fn auto_focus_viewport(&self) -> bool {
        self.focus.auto_focus()
    }

    pub fn set_auto_focus_viewport(&mut self, enabled: bool) {
        self.focus.set_auto_focus(enabled);
    }

    pub fn pause_auto_focus(&mut self) {
        self.set_auto_focus_viewport(false);
    }

    pub fn resume_auto_focus(&mut self) {
        self.set_auto_focus_viewport(true);
    }

    // Introspection

    /// Current stack depth, including the base element. Always ≥ 1.
    pub fn stack_depth(&self) -> usize {
        self.stack.len()
    }

    /// The active (topmost) stack element.
    pub fn top_element(&self) -> &StackElement {
        self.stack.top()
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    /// Re-read the top of the stack and broadcast if the effective cursor
    /// changed.
    ///
    /// Mount-on-change: switching to a custom identifier other than the
    /// currently mounted one re-mounts; re-affirming the mounted identifier
    /// does not touch the platform again.
    fn evaluate(&mut self) {
        let top = self.stack.top().kind.clone();
        if top == self.current {
            return;
        }
        let previous = std::mem::replace(&mut self.current, top.clone());

        if let CursorKind::Custom(id) = &top {
            if self.registry.mounted() != Some(id) {
                self.registry.mount(&mut self.backend, id);
            }
        }

        debug!("effective cursor changed: {:?} -> {:?}", previous, top);
        let event = CursorChanged {
            kind: top,
            previous,
        };
        self.subscribers.emit(&event);
    }
}
