//! PNG density-variant fallback loading
//!
//! When the platform's native cursor loader cannot handle a spec, the
//! registry falls back to PNG files discovered next to the requested path.
//! Sibling variants follow the `<name>[@<scale>[x<scale2>]].png` naming
//! convention: `crosshair.png`, `crosshair@2x.png`, `crosshair@1.5x.png`.
//! The variant whose scale factor is nearest the current display scale is
//! decoded to an 8-bit RGBA buffer and handed to the backend to synthesize
//! a cursor.

use std::path::{Path, PathBuf};

use tracing::{debug, error, warn};
use walkdir::WalkDir;

use crate::backend::{CursorBackend, CursorResource};
use crate::Hotspot;

/// One discovered PNG variant candidate.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct PngVariant {
    pub path: PathBuf,
    pub scale: f32,
}

/// Attempt to synthesize a cursor for `prefix` from PNG density variants.
///
/// Returns `None` when the backend cannot create cursors from raw buffers,
/// no candidate file exists, or the selected file fails to decode.
pub fn load_from_pngs(
    backend: &mut dyn CursorBackend,
    prefix: &Path,
    hotspot: Hotspot,
) -> Option<CursorResource> {
    if !backend.supports_rgba_cursors() {
        return None;
    }

    let variants = discover_variants(prefix);
    let platform_scale = backend.display_scale_at(0.0, 0.0);
    let nearest = select_nearest(&variants, platform_scale)?;

    let image = match image::open(&nearest.path) {
        Ok(image) => image.into_rgba8(),
        Err(err) => {
            warn!("failed to decode cursor png {}: {}", nearest.path.display(), err);
            return None;
        }
    };
    let (width, height) = image.dimensions();
    backend.create_cursor_from_rgba(image.as_raw(), width, height, hotspot)
}

/// Discover all PNG variants for `prefix` (an extension-less path), scanning
/// its parent directory recursively. Candidates are stable-sorted by
/// ascending scale factor, so a later nearest-scale tie resolves to the
/// lowest scale found.
pub(crate) fn discover_variants(prefix: &Path) -> Vec<PngVariant> {
    let Some(stem) = prefix.file_name().and_then(|name| name.to_str()) else {
        return Vec::new();
    };
    let dir = match prefix.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };

    let mut variants = Vec::new();
    for entry in WalkDir::new(&dir).into_iter().filter_map(Result::ok) {
        if !entry.file_type().is_file() {
            continue;
        }
        let Some(name) = entry.file_name().to_str() else {
            continue;
        };
        let Some(file_stem) = name.strip_suffix(".png") else {
            continue;
        };
        if !file_stem.starts_with(stem) {
            continue;
        }
        match parse_scale(file_stem) {
            Some(scale) => {
                debug!("cursor variant {} (scale {})", entry.path().display(), scale);
                variants.push(PngVariant {
                    path: entry.path().to_path_buf(),
                    scale,
                });
            }
            None => {
                error!(
                    "failed to load cursor variant {}: non-numeric characters in the scale factor",
                    entry.path().display()
                );
            }
        }
    }

    variants.sort_by(|a, b| a.scale.partial_cmp(&b.scale).unwrap_or(std::cmp::Ordering::Equal));
    variants
}

/// Parse the scale factor from a PNG file stem.
///
/// `crosshair` → 1.0, `crosshair@2x` → 2.0, `crosshair@1.5x1.5` → 1.5.
/// The token is whatever sits between the last `@` and the first following
/// `x`. Returns `None` for a non-numeric token.
fn parse_scale(stem: &str) -> Option<f32> {
    let Some(at) = stem.rfind('@') else {
        return Some(1.0);
    };
    let suffix = &stem[at + 1..];
    let token = match suffix.find('x') {
        Some(x) => &suffix[..x],
        None => suffix,
    };
    token.parse::<f32>().ok().filter(|scale| scale.is_finite())
}

/// Pick the candidate whose scale is nearest `target`. `variants` must be
/// sorted ascending; the strict comparison keeps the first of a tie.
fn select_nearest(variants: &[PngVariant], target: f32) -> Option<&PngVariant> {
    let mut candidates = variants.iter();
    let mut best = candidates.next()?;
    for variant in candidates {
        if (variant.scale - target).abs() < (best.scale - target).abs() {
            best = variant;
        }
    }
    Some(best)
}
