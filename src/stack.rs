//! Cursor request stack
//!
//! The arbitration state: an ordered stack of cursor requests where the
//! topmost element always dictates the effective cursor. Index 0 is the
//! permanent base element; it is created with the stack, carries the
//! invalid handle, and can only be replaced, never removed, so a cursor
//! is always defined.
//!
//! Everything here is pure stack manipulation. Evaluation (deciding
//! whether the effective cursor changed and telling anyone about it) is
//! the context's job.

use std::sync::atomic::{AtomicI32, Ordering};

use crate::CursorKind;

/// Process-wide source of unique stack element ids.
static NEXT_HANDLE_ID: AtomicI32 = AtomicI32::new(0);

/// Opaque identity of a stack element.
///
/// Generated from a process-wide monotonically increasing counter; equality
/// and hashing use only the counter value. `-1` is the invalid sentinel.
/// The base element carries the sentinel, which is what keeps it out of
/// reach of handle-based modification and removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Handle {
    id: i32,
}

impl Handle {
    /// The "no handle" sentinel.
    pub const INVALID: Handle = Handle { id: -1 };

    /// Mint a fresh, unique, valid handle.
    pub fn generate() -> Self {
        Self {
            id: NEXT_HANDLE_ID.fetch_add(1, Ordering::Relaxed),
        }
    }

    pub fn is_valid(self) -> bool {
        self.id >= 0
    }
}

/// One entry in the cursor request stack.
#[derive(Debug, Clone, PartialEq)]
pub struct StackElement {
    handle: Handle,
    pub kind: CursorKind,
}

impl StackElement {
    fn new(handle: Handle, kind: CursorKind) -> Self {
        Self { handle, kind }
    }

    pub fn handle(&self) -> Handle {
        self.handle
    }
}

/// Ordered cursor request stack. Never empty: index 0 is the base.
#[derive(Debug)]
pub(crate) struct Stack {
    elements: Vec<StackElement>,
}

impl Stack {
    /// Create a stack seeded with its base element.
    pub fn new(base: CursorKind) -> Self {
        Self {
            elements: vec![StackElement::new(Handle::INVALID, base)],
        }
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// The topmost element, which dictates the effective cursor.
    pub fn top(&self) -> &StackElement {
        self.elements
            .last()
            .expect("stack always holds at least the base element")
    }

    /// Replace the base element's kind. The only way to touch index 0.
    pub fn set_base(&mut self, kind: CursorKind) {
        self.elements[0].kind = kind;
    }

    /// Append a new request on top of the stack. Always succeeds.
    pub fn push(&mut self, kind: CursorKind) -> Handle {
        let handle = Handle::generate();
        self.elements.push(StackElement::new(handle, kind));
        handle
    }

    /// Overwrite the kind of the element with `handle`, in place.
    /// Returns false (a silent no-op) for invalid or absent handles.
    pub fn modify(&mut self, handle: Handle, kind: CursorKind) -> bool {
        if !handle.is_valid() {
            return false;
        }
        match self.elements.iter_mut().find(|e| e.handle == handle) {
            Some(element) => {
                element.kind = kind;
                true
            }
            None => false,
        }
    }

    /// Remove the first element with `handle`. The base can never match,
    /// since its handle is the sentinel. Returns false for invalid or
    /// absent handles.
    pub fn remove(&mut self, handle: Handle) -> bool {
        if !handle.is_valid() {
            return false;
        }
        match self.elements.iter().position(|e| e.handle == handle) {
            Some(index) => {
                self.elements.remove(index);
                true
            }
            None => false,
        }
    }

    /// Remove the topmost element. No-op while only the base remains.
    pub fn pop(&mut self) -> bool {
        if self.elements.len() <= 1 {
            return false;
        }
        self.elements.pop();
        true
    }

    /// Remove everything above the base. Returns whether anything changed.
    pub fn reset(&mut self) -> bool {
        if self.elements.len() <= 1 {
            return false;
        }
        self.elements.truncate(1);
        true
    }
}
