//! Type annotation AST nodes
//!
//! Types are carried through the pass untouched: a synthesized field gets a
//! copy of its parameter's annotation, nothing more.

use super::*;
use crate::token::Span;
use serde::{Deserialize, Serialize};

/// Type annotation (compile-time type)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeAnnotation {
    pub ty: Type,
    pub span: Span,
}

/// Type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Type {
    /// Primitive types: Int, Float, String, Bool, Void, Dynamic
    Primitive(PrimitiveType),

    /// Type reference: MyClass, Map<K, V>
    Reference(TypeReference),

    /// Array type: Array<Int>
    Array(Box<TypeAnnotation>),
}

impl Type {
    /// Check if this type is a primitive
    pub fn is_primitive(&self) -> bool {
        matches!(self, Type::Primitive(_))
    }

    /// Get primitive type if this is a primitive
    pub fn as_primitive(&self) -> Option<PrimitiveType> {
        match self {
            Type::Primitive(p) => Some(*p),
            _ => None,
        }
    }
}

// ============================================================================
// Primitive Types
// ============================================================================

/// Primitive type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PrimitiveType {
    Int,
    Float,
    String,
    Bool,
    Void,
    Dynamic,
}

impl PrimitiveType {
    /// Get the source name of this primitive type
    pub fn name(&self) -> &'static str {
        match self {
            PrimitiveType::Int => "Int",
            PrimitiveType::Float => "Float",
            PrimitiveType::String => "String",
            PrimitiveType::Bool => "Bool",
            PrimitiveType::Void => "Void",
            PrimitiveType::Dynamic => "Dynamic",
        }
    }
}

// ============================================================================
// Type Reference
// ============================================================================

/// Type reference: Point, Map<K, V>
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeReference {
    pub name: Identifier,
    pub type_args: Option<Vec<TypeAnnotation>>,
}

impl TypeReference {
    /// Create a simple type reference without type arguments
    pub fn simple(name: Identifier) -> Self {
        Self {
            name,
            type_args: None,
        }
    }

    /// Create a generic type reference with type arguments
    pub fn generic(name: Identifier, type_args: Vec<TypeAnnotation>) -> Self {
        Self {
            name,
            type_args: Some(type_args),
        }
    }

    /// Check if this is a generic type reference
    pub fn is_generic(&self) -> bool {
        self.type_args.is_some()
    }
}
