//! PNG density-variant selection tests
//!
//! The resolver picks the variant whose scale factor is nearest the
//! platform's display scale; ties resolve to the first in ascending order.
//! Variant sizes differ per test so the recorded RGBA dimensions reveal
//! which file was decoded.

use cursor_stack::backend::headless::CursorSource;
use cursor_stack::testing::Fixture;
use cursor_stack::{CursorConfig, CursorId};

fn fixture_with_spec() -> Fixture {
    Fixture::with_config(CursorConfig {
        cursors: vec![Fixture::spec("p", "p1", (0.0, 0.0))],
        auto_focus_viewport: true,
    })
}

fn mounted_size(fixture: &mut Fixture) -> (u32, u32) {
    assert!(fixture.context().mount_custom_cursor(&CursorId::new("p")));
    match fixture.backend().current_shape_record().unwrap().source {
        CursorSource::Rgba { width, height } => (width, height),
        ref other => panic!("expected rgba cursor, got {other:?}"),
    }
}

/// Equidistant candidates: the tie goes to the lower scale (first in
/// ascending sorted order).
#[test]
fn test_tie_resolves_to_lowest_scale() {
    let mut fixture = fixture_with_spec();
    fixture.write_png("p1@1x.png", 4, 4);
    fixture.write_png("p1@3x.png", 12, 12);
    fixture.backend_mut().set_display_scale(2.0);
    fixture.context().init();

    assert_eq!(mounted_size(&mut fixture), (4, 4));
}

/// The strictly nearest scale wins regardless of discovery order.
#[test]
fn test_nearest_scale_wins() {
    let mut fixture = fixture_with_spec();
    fixture.write_png("p1.png", 4, 4);
    fixture.write_png("p1@2x.png", 8, 8);
    fixture.write_png("p1@4x.png", 16, 16);
    fixture.backend_mut().set_display_scale(1.9);
    fixture.context().init();

    assert_eq!(mounted_size(&mut fixture), (8, 8));
}

/// A bare `<name>.png` counts as scale 1.
#[test]
fn test_unsuffixed_variant_is_scale_one() {
    let mut fixture = fixture_with_spec();
    fixture.write_png("p1.png", 4, 4);
    fixture.write_png("p1@3x.png", 12, 12);
    fixture.backend_mut().set_display_scale(1.0);
    fixture.context().init();

    assert_eq!(mounted_size(&mut fixture), (4, 4));
}

/// Variants with a non-numeric scale token are discarded; the remaining
/// candidates still load.
#[test]
fn test_bad_scale_token_is_skipped() {
    let mut fixture = fixture_with_spec();
    fixture.write_png("p1@bogusx.png", 4, 4);
    fixture.write_png("p1@2x.png", 8, 8);
    fixture.backend_mut().set_display_scale(2.0);
    fixture.context().init();

    assert_eq!(fixture.context_ref().custom_cursor_count(), 1);
    assert_eq!(mounted_size(&mut fixture), (8, 8));
}

/// Variants may live in subdirectories below the prefix's directory.
#[test]
fn test_recursive_discovery() {
    let mut fixture = fixture_with_spec();
    fixture.write_png("hidpi/p1@2x.png", 8, 8);
    fixture.backend_mut().set_display_scale(2.0);
    fixture.context().init();

    assert_eq!(mounted_size(&mut fixture), (8, 8));
}

/// Without buffer-cursor support the fallback is unavailable and the spec
/// fails to load.
#[test]
fn test_no_rgba_support_disables_fallback() {
    let mut fixture = fixture_with_spec();
    fixture.write_png("p1@2x.png", 8, 8);
    fixture.backend_mut().set_rgba_supported(false);
    fixture.context().init();

    assert_eq!(fixture.context_ref().custom_cursor_count(), 0);
}

/// No candidate files at all: the spec is skipped.
#[test]
fn test_no_candidates_fails_load() {
    let mut fixture = fixture_with_spec();
    fixture.context().init();

    assert_eq!(fixture.context_ref().custom_cursor_count(), 0);
    assert!(!fixture.context().mount_custom_cursor(&CursorId::new("p")));
}

/// A corrupt PNG fails decoding and the spec is skipped, not fatal.
#[test]
fn test_corrupt_png_is_nonfatal() {
    let mut fixture = fixture_with_spec();
    fixture.write_raw("p1@2x.png");
    fixture.context().init();

    assert_eq!(fixture.context_ref().custom_cursor_count(), 0);
}
