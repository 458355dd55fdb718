//! Argument-field desugaring
//!
//! Constructor parameters written with `var` or `final` (optionally `public`
//! or `private`) declare class fields. This crate rewrites them into ordinary
//! field declarations plus `this.<name> = <name>;` assignments at the start of
//! the constructor body (after a leading `super(...)` call).
//!
//! This crate provides:
//! - Modifier classification of constructor parameters
//! - Context enforcement (argument fields only on concrete top-level classes)
//! - An arena class table with ancestor field lookups
//! - Duplicate field validation, field synthesis and assignment injection
//! - `codespan-reporting` diagnostics and `argfields.toml` configuration
//!
//! # Usage
//!
//! ```
//! use argfields_ast::build::{class, ctor, module, param};
//! use argfields_desugar::{desugar_module, DesugarOptions};
//!
//! let mut unit = module(vec![class("Foo")
//!     .constructor(ctor(vec![param("value").public().final_().typed("String").build()], vec![]))
//!     .into_statement()]);
//!
//! let report = desugar_module(&mut unit, &DesugarOptions::default()).unwrap();
//! assert_eq!(report.field_count(), 1);
//! ```

pub mod classify;
pub mod config;
pub mod context;
pub mod diagnostic;
pub mod error;
pub mod hierarchy;
pub mod inject;
pub mod pass;
pub mod synthesize;
pub mod validate;

// Re-export main types
pub use config::{ConfigError, DesugarConfig, DesugarOptions, FieldOrder};
pub use diagnostic::{Diagnostic, JsonDiagnostic};
pub use error::{DesugarError, FieldContext};
pub use hierarchy::{ClassId, ClassTable, FieldEntry, FieldIndex};
pub use pass::{desugar_module, ClassReport, DesugarReport, Desugarer};
pub use synthesize::SynthesizedField;
