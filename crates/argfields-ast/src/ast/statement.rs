//! Statement AST nodes
//!
//! This module defines the statement types the desugaring pass sees, including:
//! - Variable, function and class declarations
//! - Class members (fields, methods, constructors) and their modifiers
//! - The small set of control flow statements constructor bodies contain

use super::*;
use crate::token::Span;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Top-level or block-level statement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Statement {
    /// Variable declaration: var/final
    VariableDecl(VariableDecl),

    /// Function declaration
    FunctionDecl(FunctionDecl),

    /// Class declaration
    ClassDecl(ClassDecl),

    /// Expression statement (e.g., assignment or call)
    Expression(ExpressionStatement),

    /// If statement
    If(IfStatement),

    /// While loop
    While(WhileStatement),

    /// Return statement
    Return(ReturnStatement),

    /// Nested block
    Block(BlockStatement),

    /// Empty statement (;)
    Empty(Span),
}

impl Statement {
    /// Get the span of this statement
    pub fn span(&self) -> &Span {
        match self {
            Statement::VariableDecl(s) => &s.span,
            Statement::FunctionDecl(s) => &s.span,
            Statement::ClassDecl(s) => &s.span,
            Statement::Expression(s) => &s.span,
            Statement::If(s) => &s.span,
            Statement::While(s) => &s.span,
            Statement::Return(s) => &s.span,
            Statement::Block(s) => &s.span,
            Statement::Empty(span) => span,
        }
    }

    /// Check if this statement is a declaration
    pub fn is_declaration(&self) -> bool {
        matches!(
            self,
            Statement::VariableDecl(_) | Statement::FunctionDecl(_) | Statement::ClassDecl(_)
        )
    }

    /// Check if this statement is a `super(...)` call
    pub fn is_super_call(&self) -> bool {
        match self {
            Statement::Expression(stmt) => match &stmt.expression {
                Expression::Call(call) => matches!(*call.callee, Expression::Super(_)),
                _ => false,
            },
            _ => false,
        }
    }
}

// ============================================================================
// Variable Declaration
// ============================================================================

/// Variable declaration: var x = 42; or final y:Int = 10;
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariableDecl {
    /// var or final
    pub storage: StorageKind,

    pub name: Identifier,

    /// Optional type annotation
    pub type_annotation: Option<TypeAnnotation>,

    pub initializer: Option<Expression>,

    pub span: Span,
}

/// Storage semantics of a variable or field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageKind {
    /// Mutable storage (`var`)
    Var,
    /// Immutable storage (`final`)
    Final,
}

impl StorageKind {
    pub fn keyword(&self) -> &'static str {
        match self {
            StorageKind::Var => "var",
            StorageKind::Final => "final",
        }
    }
}

// ============================================================================
// Function Declaration
// ============================================================================

/// Function declaration
///
/// # Example
/// ```text
/// function add(x:Int, y:Int):Int {
///     return x + y;
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionDecl {
    pub name: Identifier,

    pub params: Vec<Parameter>,

    /// Return type annotation
    pub return_type: Option<TypeAnnotation>,

    pub body: BlockStatement,

    pub span: Span,
}

/// Function, method or constructor parameter
///
/// Modifiers are kept exactly as written; the parser does not validate
/// their combination.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    /// Metadata entries (@:optional, @inject, etc.)
    pub metadata: Vec<MetadataEntry>,

    /// Modifiers in source order (`public final`, `var`, ...)
    pub modifiers: Vec<Modifier>,

    pub name: Identifier,
    pub type_annotation: Option<TypeAnnotation>,
    /// Default value for the parameter (e.g., `x:Int = 10`)
    pub default_value: Option<Expression>,
    pub span: Span,
}

impl Parameter {
    /// Check whether a modifier of the given kind was written
    pub fn has_modifier(&self, kind: ModifierKind) -> bool {
        self.modifiers.iter().any(|m| m.kind == kind)
    }

    /// Check whether any storage modifier (`var`/`final`) was written
    pub fn has_storage_modifier(&self) -> bool {
        self.modifiers.iter().any(|m| m.kind.is_storage())
    }
}

/// Modifier written on a parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Modifier {
    pub kind: ModifierKind,
    pub span: Span,
}

impl Modifier {
    pub fn new(kind: ModifierKind, span: Span) -> Self {
        Self { kind, span }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModifierKind {
    Var,
    Final,
    Public,
    Private,
    Static,
}

impl ModifierKind {
    /// Keyword as written in source
    pub fn keyword(&self) -> &'static str {
        match self {
            ModifierKind::Var => "var",
            ModifierKind::Final => "final",
            ModifierKind::Public => "public",
            ModifierKind::Private => "private",
            ModifierKind::Static => "static",
        }
    }

    pub fn is_storage(&self) -> bool {
        matches!(self, ModifierKind::Var | ModifierKind::Final)
    }

    pub fn is_visibility(&self) -> bool {
        matches!(self, ModifierKind::Public | ModifierKind::Private)
    }
}

impl fmt::Display for ModifierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

// ============================================================================
// Class Declaration
// ============================================================================

/// Class declaration
///
/// # Example
/// ```text
/// class Circle extends Shape {
///     new(public final radius:Float) {
///         super();
///     }
///
///     public function area():Float {
///         return Math.PI * radius * radius;
///     }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassDecl {
    pub metadata: Vec<MetadataEntry>,

    /// Abstract modifier
    pub is_abstract: bool,

    pub name: Identifier,

    /// Superclass named in the extends clause
    pub extends: Option<Identifier>,

    pub members: Vec<ClassMember>,
    pub span: Span,
}

impl ClassDecl {
    /// Iterate over the field members, in declaration order
    pub fn fields(&self) -> impl Iterator<Item = &FieldDecl> {
        self.members.iter().filter_map(|member| match member {
            ClassMember::Field(field) => Some(field),
            _ => None,
        })
    }

    /// Iterate over the constructors (well-formed classes have at most one)
    pub fn constructors(&self) -> impl Iterator<Item = &ConstructorDecl> {
        self.members.iter().filter_map(|member| match member {
            ClassMember::Constructor(ctor) => Some(ctor),
            _ => None,
        })
    }

    pub fn constructor(&self) -> Option<&ConstructorDecl> {
        self.constructors().next()
    }

    pub fn constructor_mut(&mut self) -> Option<&mut ConstructorDecl> {
        self.members.iter_mut().find_map(|member| match member {
            ClassMember::Constructor(ctor) => Some(ctor),
            _ => None,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ClassMember {
    Field(FieldDecl),
    Method(MethodDecl),
    Constructor(ConstructorDecl),
}

impl ClassMember {
    pub fn span(&self) -> &Span {
        match self {
            ClassMember::Field(f) => &f.span,
            ClassMember::Method(m) => &m.span,
            ClassMember::Constructor(c) => &c.span,
        }
    }
}

/// Visibility modifier for class members
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    /// Accessible from anywhere
    Public,
    /// Only accessible within the class and its subclasses (default)
    #[default]
    Private,
}

impl Visibility {
    pub fn keyword(&self) -> &'static str {
        match self {
            Visibility::Public => "public",
            Visibility::Private => "private",
        }
    }
}

/// Field declaration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDecl {
    pub metadata: Vec<MetadataEntry>,

    pub visibility: Visibility,

    /// var or final
    pub storage: StorageKind,

    pub is_static: bool,

    pub name: Identifier,
    pub type_annotation: Option<TypeAnnotation>,
    pub initializer: Option<Expression>,
    pub span: Span,
}

/// Method declaration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodDecl {
    pub metadata: Vec<MetadataEntry>,

    pub visibility: Visibility,

    /// Abstract modifier (method has no body)
    pub is_abstract: bool,

    pub is_static: bool,

    pub name: Identifier,
    pub params: Vec<Parameter>,
    pub return_type: Option<TypeAnnotation>,

    /// None if is_abstract is true
    pub body: Option<BlockStatement>,

    pub span: Span,
}

/// Constructor declaration: new(...) { ... }
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConstructorDecl {
    pub params: Vec<Parameter>,
    pub body: BlockStatement,
    pub span: Span,
}

// ============================================================================
// Metadata
// ============================================================================

/// Metadata entry: @name or @name(arg1, arg2)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetadataEntry {
    pub name: Identifier,
    pub args: Vec<Expression>,
    pub span: Span,
}

// ============================================================================
// Control Flow Statements
// ============================================================================

/// If statement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IfStatement {
    pub condition: Expression,
    pub then_branch: Box<Statement>,
    pub else_branch: Option<Box<Statement>>,
    pub span: Span,
}

/// While loop
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WhileStatement {
    pub condition: Expression,
    pub body: Box<Statement>,
    pub span: Span,
}

/// Return statement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReturnStatement {
    pub value: Option<Expression>,
    pub span: Span,
}

/// Block statement - a sequence of statements wrapped in { }.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockStatement {
    pub statements: Vec<Statement>,
    pub span: Span,
}

/// Expression statement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpressionStatement {
    pub expression: Expression,
    pub span: Span,
}
