//! Demo binary for the cursor engine
//!
//! Walks the arbitration lifecycle against the headless backend, for
//! eyeballing the tracing output. Real applications embed `CursorContext`
//! with a platform backend instead.

use std::path::Path;

use cursor_stack::backend::HeadlessBackend;
use cursor_stack::{CursorConfig, CursorContext, CursorIcon, CursorKind};
use tracing::info;

fn main() {
    tracing_subscriber::fmt::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = match args.first() {
        Some(path) => match CursorConfig::load(Path::new(path)) {
            Ok(config) => config,
            Err(err) => {
                eprintln!("error: {err:#}");
                std::process::exit(1);
            }
        },
        None => CursorConfig::default(),
    };

    let mut context = CursorContext::new(HeadlessBackend::new(), ".", config);
    context.subscribe(|change| {
        info!("cursor changed: {:?} -> {:?}", change.previous, change.kind)
    });
    context.init();
    info!("loaded cursors: {:?}", context.custom_cursor_ids());

    let grab = context.push_standard(CursorIcon::Grab);
    let busy = context.push_standard(CursorIcon::Wait);
    info!("current: {:?}", context.current_kind());

    context.modify_cursor(busy, CursorKind::Standard(CursorIcon::Progress));
    context.pop_cursor();
    context.remove_cursor(grab);
    info!("current after teardown: {:?}", context.current_kind());
}
