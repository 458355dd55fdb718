//! Abstract Syntax Tree for class declarations and their constructors.
//!
//! This module defines the tree the desugaring pass consumes and rewrites:
//! - Module structure
//! - Statements (declarations, control flow)
//! - Expressions (literals, member access, calls, assignments)
//! - Type annotations
//!
//! Every node includes a `Span` for precise source location tracking, and every
//! node is serializable so hosts can exchange trees as JSON.

use crate::token::Span;
use serde::{Deserialize, Serialize};

pub mod statement;
pub mod expression;
pub mod types;
pub mod visitor;

pub use statement::*;
pub use expression::*;
pub use types::*;
pub use visitor::*;

/// Root node: one compilation unit
///
/// # Example
/// ```
/// use argfields_ast::ast::*;
/// use argfields_ast::token::Span;
///
/// let module = Module::new(vec![], Span::new(0, 0, 1, 1));
/// assert!(module.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Module {
    /// Top-level statements
    pub statements: Vec<Statement>,

    /// Span covering the entire module
    pub span: Span,
}

impl Module {
    /// Create a new module
    pub fn new(statements: Vec<Statement>, span: Span) -> Self {
        Self { statements, span }
    }

    /// Check if the module is empty
    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    /// Get the number of top-level statements
    pub fn len(&self) -> usize {
        self.statements.len()
    }

    /// Iterate over the top-level class declarations
    pub fn classes(&self) -> impl Iterator<Item = &ClassDecl> {
        self.statements.iter().filter_map(|stmt| match stmt {
            Statement::ClassDecl(class) => Some(class),
            _ => None,
        })
    }
}

/// Identifier
///
/// Represents a name for a variable, function, class, field, etc.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Identifier {
    pub name: String,
    pub span: Span,
}

impl Identifier {
    pub fn new(name: impl Into<String>, span: Span) -> Self {
        Self {
            name: name.into(),
            span,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.name
    }
}
