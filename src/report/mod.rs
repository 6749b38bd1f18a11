//! Renderers for attribution results.
//!
//! - [`markdown`] — the `UPSTREAM-LICENSES.md` document with embedded license texts.
//! - [`terminal`] — colored summary table; respects `--verbose` / `--quiet`.

pub mod markdown;
pub mod terminal;
