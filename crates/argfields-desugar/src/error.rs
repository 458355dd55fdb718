//! Error types for argument-field desugaring
//!
//! Every error is a hard compile error carrying the span of the offending
//! declaration. The pass never downgrades any of them to a warning.

use argfields_ast::{ModifierKind, Span};
use std::fmt;
use thiserror::Error;

/// Declaration context in which an argument field was written
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldContext {
    /// Instance or static method of a class
    Method {
        /// Owning class name
        class: String,
        /// Method name
        method: String,
    },
    /// Constructor of an abstract class
    AbstractConstructor {
        /// Abstract class name
        class: String,
    },
    /// Function declaration, at top level or nested in a body
    Function {
        /// Function name
        name: String,
    },
    /// Constructor of a class declared inside a function or block body
    LocalClassConstructor {
        /// Local class name
        class: String,
    },
}

impl fmt::Display for FieldContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldContext::Method { class, method } => write!(f, "method '{}.{}'", class, method),
            FieldContext::AbstractConstructor { class } => {
                write!(f, "the constructor of abstract class '{}'", class)
            }
            FieldContext::Function { name } => write!(f, "function '{}'", name),
            FieldContext::LocalClassConstructor { class } => {
                write!(f, "the constructor of local class '{}'", class)
            }
        }
    }
}

/// Errors that can occur while desugaring argument fields
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DesugarError {
    /// `var`/`final` parameter outside a concrete class constructor
    #[error("Argument field '{name}' is not allowed in {context}")]
    InvalidFieldContext {
        /// Parameter name
        name: String,
        /// Where the parameter was declared
        context: FieldContext,
        /// Location of the parameter
        span: Span,
    },

    /// `static` combined with `var`/`final` on a parameter
    #[error("Argument field '{name}' cannot be static")]
    StaticArgumentField {
        /// Parameter name
        name: String,
        /// Location of the `static` modifier
        span: Span,
    },

    /// Field name already declared in the class, an ancestor, or earlier in the parameter list
    #[error("Duplicate field '{name}': already declared in class '{class}'")]
    DuplicateField {
        /// Field name
        name: String,
        /// Class holding the original declaration
        class: String,
        /// Location of the original declaration
        original: Span,
        /// Location of the argument field
        duplicate: Span,
    },

    /// Contradictory or repeated modifiers on one parameter
    #[error("Modifier '{second}' conflicts with '{first}' on parameter '{name}'")]
    ConflictingModifiers {
        /// Parameter name
        name: String,
        /// Modifier written first
        first: ModifierKind,
        /// Conflicting modifier
        second: ModifierKind,
        /// Location of the conflicting modifier
        span: Span,
    },

    /// Visibility or `static` on a parameter without `var`/`final`
    #[error("Modifier '{modifier}' on parameter '{name}' requires 'var' or 'final'")]
    ModifierWithoutStorage {
        /// Parameter name
        name: String,
        /// The stray modifier
        modifier: ModifierKind,
        /// Location of the modifier
        span: Span,
    },

    /// Superclass chain never reaches a root
    #[error("Class '{class}' has a cyclic superclass chain")]
    CyclicInheritance {
        /// Class on the cycle, or the first module class leading into one
        class: String,
        /// Location of the class declaration
        span: Span,
    },

    /// More than one constructor in a class
    #[error("Class '{class}' declares more than one constructor")]
    DuplicateConstructor {
        /// Class name
        class: String,
        /// Location of the first constructor
        original: Span,
        /// Location of the extra constructor
        duplicate: Span,
    },

    /// Two top-level classes with the same name
    #[error("Class '{class}' is already declared in this module")]
    DuplicateClass {
        /// Class name
        class: String,
        /// Location of the first declaration
        original: Span,
        /// Location of the repeated declaration
        duplicate: Span,
    },
}

impl DesugarError {
    /// Get the primary span associated with this error
    pub fn span(&self) -> Span {
        match self {
            DesugarError::InvalidFieldContext { span, .. } => *span,
            DesugarError::StaticArgumentField { span, .. } => *span,
            DesugarError::DuplicateField { duplicate, .. } => *duplicate,
            DesugarError::ConflictingModifiers { span, .. } => *span,
            DesugarError::ModifierWithoutStorage { span, .. } => *span,
            DesugarError::CyclicInheritance { span, .. } => *span,
            DesugarError::DuplicateConstructor { duplicate, .. } => *duplicate,
            DesugarError::DuplicateClass { duplicate, .. } => *duplicate,
        }
    }

    /// Stable error code (e.g., "E4003")
    pub fn code(&self) -> &'static str {
        match self {
            DesugarError::InvalidFieldContext { .. } => "E4001",
            DesugarError::StaticArgumentField { .. } => "E4002",
            DesugarError::DuplicateField { .. } => "E4003",
            DesugarError::ConflictingModifiers { .. } => "E4004",
            DesugarError::ModifierWithoutStorage { .. } => "E4005",
            DesugarError::CyclicInheritance { .. } => "E4006",
            DesugarError::DuplicateConstructor { .. } => "E4007",
            DesugarError::DuplicateClass { .. } => "E4008",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_field_message_names_class() {
        let err = DesugarError::DuplicateField {
            name: "foo".to_string(),
            class: "Foo".to_string(),
            original: Span::new(10, 13, 2, 5),
            duplicate: Span::new(40, 43, 6, 22),
        };
        assert_eq!(err.to_string(), "Duplicate field 'foo': already declared in class 'Foo'");
        assert_eq!(err.span().start, 40);
        assert_eq!(err.code(), "E4003");
    }

    #[test]
    fn test_field_context_display() {
        let err = DesugarError::InvalidFieldContext {
            name: "x".to_string(),
            context: FieldContext::Method {
                class: "Foo".to_string(),
                method: "reset".to_string(),
            },
            span: Span::default(),
        };
        assert_eq!(err.to_string(), "Argument field 'x' is not allowed in method 'Foo.reset'");

        let ctx = FieldContext::AbstractConstructor { class: "Shape".to_string() };
        assert_eq!(ctx.to_string(), "the constructor of abstract class 'Shape'");
    }

    #[test]
    fn test_conflicting_modifiers_message() {
        let err = DesugarError::ConflictingModifiers {
            name: "x".to_string(),
            first: ModifierKind::Var,
            second: ModifierKind::Final,
            span: Span::default(),
        };
        assert_eq!(err.to_string(), "Modifier 'final' conflicts with 'var' on parameter 'x'");
        assert_eq!(err.code(), "E4004");
    }
}
