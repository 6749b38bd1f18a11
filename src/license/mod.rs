//! License expression evaluation.
//!
//! - [`expression`] — splits an expression at top-level `AND` / `OR` while
//!   respecting parenthesis nesting.
//! - [`selector`] — resolves an expression to the concrete licenses chosen
//!   under an ordered preference list.

pub mod expression;
pub mod selector;
