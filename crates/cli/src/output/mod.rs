//! Output renderers.
//!
//! Renderers are pure formatters over the finished [`Report`] shape; no
//! renderer feeds anything back into the core.
//!
//! [`Report`]: crate::report::Report

pub mod csv;
pub mod github;
pub mod junit;
pub mod sarif;
pub mod tap;
pub mod text;

/// Maximum failure rows the text renderer prints to the console. The full
/// list is always available via `--output-file`.
pub const CONSOLE_ROW_LIMIT: usize = 25;
