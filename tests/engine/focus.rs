//! Viewport auto-focus tests
//!
//! The per-frame audit reclaims focus for a hovered-but-unfocused surface,
//! honoring the runtime pause/resume toggle and the configured default.

use cursor_stack::backend::CursorBackend;
use cursor_stack::testing::Fixture;
use cursor_stack::CursorConfig;

#[test]
fn test_audit_reclaims_focus() {
    let mut fixture = Fixture::new();
    fixture.context().init();
    fixture.backend_mut().set_viewport(true, false);

    fixture.context().audit_viewport();
    assert!(fixture.backend().viewport_status().focused);
    assert_eq!(fixture.backend().focus_grant_count(), 1);

    // Once focus is held, subsequent frames do nothing.
    fixture.context().audit_viewport();
    assert_eq!(fixture.backend().focus_grant_count(), 1);
}

#[test]
fn test_audit_requires_hover() {
    let mut fixture = Fixture::new();
    fixture.context().init();
    fixture.backend_mut().set_viewport(false, false);

    fixture.context().audit_viewport();
    assert!(!fixture.backend().viewport_status().focused);
    assert_eq!(fixture.backend().focus_grant_count(), 0);
}

#[test]
fn test_pause_and_resume() {
    let mut fixture = Fixture::new();
    fixture.context().init();
    assert!(fixture.context_ref().auto_focus_viewport());

    fixture.context().pause_auto_focus();
    fixture.backend_mut().set_viewport(true, false);
    fixture.context().audit_viewport();
    assert_eq!(fixture.backend().focus_grant_count(), 0);

    fixture.context().resume_auto_focus();
    fixture.context().audit_viewport();
    assert_eq!(fixture.backend().focus_grant_count(), 1);
}

#[test]
fn test_config_disables_auto_focus() {
    let mut fixture = Fixture::with_config(CursorConfig {
        cursors: Vec::new(),
        auto_focus_viewport: false,
    });
    fixture.context().init();
    assert!(!fixture.context_ref().auto_focus_viewport());

    fixture.backend_mut().set_viewport(true, false);
    fixture.context().audit_viewport();
    assert_eq!(fixture.backend().focus_grant_count(), 0);

    fixture.context().set_auto_focus_viewport(true);
    fixture.context().audit_viewport();
    assert_eq!(fixture.backend().focus_grant_count(), 1);
}
