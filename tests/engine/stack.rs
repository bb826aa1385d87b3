//! Arbitration stack tests
//!
//! Ordering, handle-based modification, and the silent no-op contracts for
//! invalid or stale handles.

use cursor_stack::testing::Fixture;
use cursor_stack::{CursorIcon, CursorKind, Handle};

/// Topmost always wins: later pushes strictly shadow earlier ones.
#[test]
fn test_topmost_wins() {
    let mut fixture = Fixture::new();
    fixture.context().init();

    fixture.context().push_standard(CursorIcon::Text);
    fixture.context().push_standard(CursorIcon::Grab);
    let top = fixture.context().push_standard(CursorIcon::Wait);
    assert_eq!(
        *fixture.context_ref().current_kind(),
        CursorKind::Standard(CursorIcon::Wait)
    );
    assert_eq!(fixture.context_ref().stack_depth(), 4);
    assert_eq!(fixture.context_ref().top_element().handle(), top);
}

/// Modifying the topmost element changes the effective cursor; modifying a
/// shadowed element does not, but the change is kept for later.
#[test]
fn test_modify_round_trip() {
    let mut fixture = Fixture::new();
    fixture.context().init();

    let below = fixture.context().push_standard(CursorIcon::Text);
    let top = fixture.context().push_standard(CursorIcon::Grab);

    fixture
        .context()
        .modify_cursor(top, CursorKind::Standard(CursorIcon::Wait));
    assert_eq!(
        *fixture.context_ref().current_kind(),
        CursorKind::Standard(CursorIcon::Wait)
    );

    fixture
        .context()
        .modify_cursor(below, CursorKind::Standard(CursorIcon::Crosshair));
    assert_eq!(
        *fixture.context_ref().current_kind(),
        CursorKind::Standard(CursorIcon::Wait)
    );

    fixture.context().pop_cursor();
    assert_eq!(
        *fixture.context_ref().current_kind(),
        CursorKind::Standard(CursorIcon::Crosshair)
    );
}

/// Invalid and unknown handles are silent no-ops for modify and remove.
#[test]
fn test_unknown_handles_are_noops() {
    let mut fixture = Fixture::new();
    fixture.context().init();
    fixture.context().push_standard(CursorIcon::Grab);

    let depth = fixture.context_ref().stack_depth();
    let kind = fixture.context_ref().current_kind().clone();

    fixture
        .context()
        .modify_cursor(Handle::INVALID, CursorKind::Standard(CursorIcon::Wait));
    fixture.context().remove_cursor(Handle::INVALID);

    // A freshly generated handle is valid but present in no stack.
    let stranger = Handle::generate();
    fixture
        .context()
        .modify_cursor(stranger, CursorKind::Standard(CursorIcon::Wait));
    fixture.context().remove_cursor(stranger);

    assert_eq!(fixture.context_ref().stack_depth(), depth);
    assert_eq!(*fixture.context_ref().current_kind(), kind);
}

/// A handle becomes stale after removal; reusing it is a no-op, so racing
/// callers cannot corrupt the stack.
#[test]
fn test_stale_handle_after_remove() {
    let mut fixture = Fixture::new();
    fixture.context().init();

    let handle = fixture.context().push_standard(CursorIcon::Grab);
    fixture.context().remove_cursor(handle);
    assert_eq!(fixture.context_ref().stack_depth(), 1);

    fixture.context().remove_cursor(handle);
    fixture
        .context()
        .modify_cursor(handle, CursorKind::Standard(CursorIcon::Wait));
    assert_eq!(fixture.context_ref().stack_depth(), 1);
    assert_eq!(*fixture.context_ref().current_kind(), CursorKind::default());
}

/// Pop and reset can never remove the base element.
#[test]
fn test_base_is_unpoppable() {
    let mut fixture = Fixture::new();
    fixture.context().init();

    for _ in 0..4 {
        fixture.context().pop_cursor();
    }
    assert_eq!(fixture.context_ref().stack_depth(), 1);

    fixture.context().push_standard(CursorIcon::Grab);
    fixture.context().push_standard(CursorIcon::Wait);
    fixture.context().reset_stack();
    assert_eq!(fixture.context_ref().stack_depth(), 1);
    assert_eq!(*fixture.context_ref().current_kind(), CursorKind::default());

    fixture.context().reset_stack();
    assert_eq!(fixture.context_ref().stack_depth(), 1);
}

/// Removing an element below the top keeps the effective cursor stable.
#[test]
fn test_remove_shadowed_element() {
    let mut fixture = Fixture::new();
    fixture.context().init();

    let shadowed = fixture.context().push_standard(CursorIcon::Text);
    fixture.context().push_standard(CursorIcon::Wait);

    fixture.context().remove_cursor(shadowed);
    assert_eq!(fixture.context_ref().stack_depth(), 2);
    assert_eq!(
        *fixture.context_ref().current_kind(),
        CursorKind::Standard(CursorIcon::Wait)
    );

    fixture.context().pop_cursor();
    assert_eq!(*fixture.context_ref().current_kind(), CursorKind::default());
}
