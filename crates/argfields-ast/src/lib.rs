//! Syntax tree for class declarations with argument fields.
//!
//! This crate holds the tree shape shared by the host parser and the
//! argument-fields desugaring pass:
//! - `token`: source spans
//! - `ast`: modules, declarations, statements, expressions, types, visitor
//! - `build`: terse node constructors
//! - `printer`: source rendering of a tree

pub mod token;
pub mod ast;
pub mod build;
pub mod printer;

pub use token::Span;
pub use ast::{
    ClassDecl, ClassMember, ConstructorDecl, Expression, FieldDecl, FunctionDecl, Identifier,
    MetadataEntry, MethodDecl, Modifier, ModifierKind, Module, Parameter, Statement, StorageKind,
    Visibility,
};
