//! Rewrite camelCase variable names in C/C++ sources to snake_case.
//!
//! Matching is pattern based, not syntax aware: calls (`name(`), types
//! (`PacketBuffer`), named constants (`kDefaultOption`) and names that are
//! already snake_case or UPPER_CASE are left as they are.

pub mod config;
pub mod convert;
pub mod rules;
pub mod source;

pub use convert::{convert, CaseConverter, Conversion, Mode, Rename};
pub use rules::RuleSet;
