//! Change notification plumbing
//!
//! Mutations that change the effective cursor emit a [`CursorChanged`]
//! event, synchronously, before the mutating call returns. Subscribers live
//! in a plain observer list keyed by [`SubscriberId`]; unsubscribing is
//! explicit and safe during teardown (unknown ids are ignored).

use serde::Serialize;

use crate::CursorKind;

/// Emitted whenever the effective cursor kind changes.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct CursorChanged {
    /// The new effective cursor kind.
    pub kind: CursorKind,
    /// The kind that was effective before this change.
    pub previous: CursorKind,
}

/// Identity of one registered change subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriberId(u64);

type Callback = Box<dyn FnMut(&CursorChanged)>;

/// Observer list for cursor change notifications.
#[derive(Default)]
pub(crate) struct Subscribers {
    next_id: u64,
    entries: Vec<(SubscriberId, Callback)>,
}

impl Subscribers {
    pub fn subscribe(&mut self, callback: Callback) -> SubscriberId {
        let id = SubscriberId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, callback));
        id
    }

    /// Remove a subscriber. Unknown ids are ignored, so teardown paths can
    /// unsubscribe unconditionally.
    pub fn unsubscribe(&mut self, id: SubscriberId) {
        self.entries.retain(|(entry_id, _)| *entry_id != id);
    }

    pub fn emit(&mut self, event: &CursorChanged) {
        for (_, callback) in &mut self.entries {
            callback(event);
        }
    }
}
