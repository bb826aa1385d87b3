//! Testing infrastructure
//!
//! This module provides the test harness used by the integration suite to
//! exercise the engine without a display server.
//!
//! # Architecture
//!
//! 1. **HeadlessBackend** (`crate::backend::headless`): a deterministic
//!    stand-in for the platform that records every load, mount, and focus
//!    grant.
//!
//! 2. **Fixture**: wires a [`crate::CursorContext`] to the headless backend
//!    and a throwaway asset directory, so tests can lay down PNG variants
//!    and fake native cursor files before loading.
//!
//! # Example
//!
//! ```ignore
//! use cursor_stack::testing::Fixture;
//!
//! #[test]
//! fn test_fallback_load() {
//!     let mut fixture = Fixture::new();
//!     fixture.write_png("pointer@2x.png", 8, 8);
//!     fixture.context().init();
//! }
//! ```

mod fixture;

pub use fixture::Fixture;
