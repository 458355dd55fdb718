//! AST visitor pattern for traversing the syntax tree
//!
//! Visitors are read-only. Passes that rewrite the tree find their targets with
//! a visitor first and mutate afterwards.
//!
//! # Example
//!
//! ```rust
//! use argfields_ast::ast::*;
//!
//! struct CountParameters {
//!     count: usize,
//! }
//!
//! impl Visitor for CountParameters {
//!     fn visit_parameter(&mut self, param: &Parameter) {
//!         self.count += 1;
//!         walk_parameter(self, param);
//!     }
//! }
//! ```

use super::*;

/// AST visitor trait
///
/// Each visit method has a default implementation that calls the
/// corresponding walk function.
pub trait Visitor: Sized {
    // Top-level
    fn visit_module(&mut self, module: &Module) {
        walk_module(self, module);
    }

    // Statements
    fn visit_statement(&mut self, stmt: &Statement) {
        walk_statement(self, stmt);
    }

    fn visit_variable_decl(&mut self, decl: &VariableDecl) {
        walk_variable_decl(self, decl);
    }

    fn visit_function_decl(&mut self, decl: &FunctionDecl) {
        walk_function_decl(self, decl);
    }

    fn visit_class_decl(&mut self, decl: &ClassDecl) {
        walk_class_decl(self, decl);
    }

    fn visit_field_decl(&mut self, decl: &FieldDecl) {
        walk_field_decl(self, decl);
    }

    fn visit_method_decl(&mut self, decl: &MethodDecl) {
        walk_method_decl(self, decl);
    }

    fn visit_constructor_decl(&mut self, decl: &ConstructorDecl) {
        walk_constructor_decl(self, decl);
    }

    fn visit_parameter(&mut self, param: &Parameter) {
        walk_parameter(self, param);
    }

    fn visit_metadata(&mut self, entry: &MetadataEntry) {
        walk_metadata(self, entry);
    }

    fn visit_block_statement(&mut self, stmt: &BlockStatement) {
        walk_block_statement(self, stmt);
    }

    // Expressions
    fn visit_expression(&mut self, expr: &Expression) {
        walk_expression(self, expr);
    }

    // Types
    fn visit_type_annotation(&mut self, ty: &TypeAnnotation) {
        walk_type_annotation(self, ty);
    }

    // Common
    fn visit_identifier(&mut self, _id: &Identifier) {
        // Leaf node - no traversal needed
    }
}

// ============================================================================
// Walk Functions - Default Traversal Implementations
// ============================================================================

pub fn walk_module<V: Visitor>(visitor: &mut V, module: &Module) {
    for stmt in &module.statements {
        visitor.visit_statement(stmt);
    }
}

pub fn walk_statement<V: Visitor>(visitor: &mut V, stmt: &Statement) {
    match stmt {
        Statement::VariableDecl(decl) => visitor.visit_variable_decl(decl),
        Statement::FunctionDecl(decl) => visitor.visit_function_decl(decl),
        Statement::ClassDecl(decl) => visitor.visit_class_decl(decl),
        Statement::Expression(stmt) => visitor.visit_expression(&stmt.expression),
        Statement::If(stmt) => {
            visitor.visit_expression(&stmt.condition);
            visitor.visit_statement(&stmt.then_branch);
            if let Some(else_branch) = &stmt.else_branch {
                visitor.visit_statement(else_branch);
            }
        }
        Statement::While(stmt) => {
            visitor.visit_expression(&stmt.condition);
            visitor.visit_statement(&stmt.body);
        }
        Statement::Return(stmt) => {
            if let Some(value) = &stmt.value {
                visitor.visit_expression(value);
            }
        }
        Statement::Block(stmt) => visitor.visit_block_statement(stmt),
        Statement::Empty(_) => {}
    }
}

pub fn walk_variable_decl<V: Visitor>(visitor: &mut V, decl: &VariableDecl) {
    visitor.visit_identifier(&decl.name);
    if let Some(type_ann) = &decl.type_annotation {
        visitor.visit_type_annotation(type_ann);
    }
    if let Some(init) = &decl.initializer {
        visitor.visit_expression(init);
    }
}

pub fn walk_function_decl<V: Visitor>(visitor: &mut V, decl: &FunctionDecl) {
    visitor.visit_identifier(&decl.name);
    for param in &decl.params {
        visitor.visit_parameter(param);
    }
    if let Some(return_type) = &decl.return_type {
        visitor.visit_type_annotation(return_type);
    }
    visitor.visit_block_statement(&decl.body);
}

pub fn walk_class_decl<V: Visitor>(visitor: &mut V, decl: &ClassDecl) {
    for entry in &decl.metadata {
        visitor.visit_metadata(entry);
    }
    visitor.visit_identifier(&decl.name);
    if let Some(extends) = &decl.extends {
        visitor.visit_identifier(extends);
    }
    for member in &decl.members {
        match member {
            ClassMember::Field(field) => visitor.visit_field_decl(field),
            ClassMember::Method(method) => visitor.visit_method_decl(method),
            ClassMember::Constructor(ctor) => visitor.visit_constructor_decl(ctor),
        }
    }
}

pub fn walk_field_decl<V: Visitor>(visitor: &mut V, decl: &FieldDecl) {
    for entry in &decl.metadata {
        visitor.visit_metadata(entry);
    }
    visitor.visit_identifier(&decl.name);
    if let Some(type_ann) = &decl.type_annotation {
        visitor.visit_type_annotation(type_ann);
    }
    if let Some(init) = &decl.initializer {
        visitor.visit_expression(init);
    }
}

pub fn walk_method_decl<V: Visitor>(visitor: &mut V, decl: &MethodDecl) {
    for entry in &decl.metadata {
        visitor.visit_metadata(entry);
    }
    visitor.visit_identifier(&decl.name);
    for param in &decl.params {
        visitor.visit_parameter(param);
    }
    if let Some(return_type) = &decl.return_type {
        visitor.visit_type_annotation(return_type);
    }
    // Body is None for abstract methods
    if let Some(body) = &decl.body {
        visitor.visit_block_statement(body);
    }
}

pub fn walk_constructor_decl<V: Visitor>(visitor: &mut V, decl: &ConstructorDecl) {
    for param in &decl.params {
        visitor.visit_parameter(param);
    }
    visitor.visit_block_statement(&decl.body);
}

pub fn walk_parameter<V: Visitor>(visitor: &mut V, param: &Parameter) {
    for entry in &param.metadata {
        visitor.visit_metadata(entry);
    }
    visitor.visit_identifier(&param.name);
    if let Some(type_ann) = &param.type_annotation {
        visitor.visit_type_annotation(type_ann);
    }
    if let Some(default) = &param.default_value {
        visitor.visit_expression(default);
    }
}

pub fn walk_metadata<V: Visitor>(visitor: &mut V, entry: &MetadataEntry) {
    visitor.visit_identifier(&entry.name);
    for arg in &entry.args {
        visitor.visit_expression(arg);
    }
}

pub fn walk_block_statement<V: Visitor>(visitor: &mut V, stmt: &BlockStatement) {
    for stmt in &stmt.statements {
        visitor.visit_statement(stmt);
    }
}

pub fn walk_expression<V: Visitor>(visitor: &mut V, expr: &Expression) {
    match expr {
        Expression::Identifier(id) => visitor.visit_identifier(id),
        Expression::Member(member) => {
            visitor.visit_expression(&member.object);
            visitor.visit_identifier(&member.property);
        }
        Expression::Call(call) => {
            visitor.visit_expression(&call.callee);
            for arg in &call.arguments {
                visitor.visit_expression(arg);
            }
        }
        Expression::Assignment(assign) => {
            visitor.visit_expression(&assign.target);
            visitor.visit_expression(&assign.value);
        }
        Expression::IntLiteral(_)
        | Expression::FloatLiteral(_)
        | Expression::StringLiteral(_)
        | Expression::BooleanLiteral(_)
        | Expression::NullLiteral(_)
        | Expression::This(_)
        | Expression::Super(_) => {}
    }
}

pub fn walk_type_annotation<V: Visitor>(visitor: &mut V, ty: &TypeAnnotation) {
    match &ty.ty {
        Type::Primitive(_) => {}
        Type::Reference(type_ref) => {
            visitor.visit_identifier(&type_ref.name);
            if let Some(args) = &type_ref.type_args {
                for arg in args {
                    visitor.visit_type_annotation(arg);
                }
            }
        }
        Type::Array(elem) => visitor.visit_type_annotation(elem),
    }
}
