//! Declaration-context enforcement
//!
//! Argument fields are only meaningful on the constructor of a concrete class
//! declared at module top level. This walks the whole module and rejects them
//! everywhere else, along with any stray parameter modifier outside a
//! constructor, so nothing is left for later stages to silently ignore.

use argfields_ast::ast::{
    walk_class_decl, walk_constructor_decl, walk_function_decl, walk_method_decl, Visitor,
};
use argfields_ast::{ClassDecl, ConstructorDecl, FunctionDecl, MethodDecl, Module, Parameter, Statement};
use rustc_hash::FxHashSet;

use crate::error::{DesugarError, FieldContext};

/// Result of context enforcement over one module
#[derive(Debug, Default)]
pub struct ContextReport {
    pub errors: Vec<DesugarError>,
    /// Indices into `Module::statements` of top-level classes with errors
    pub failed_statements: FxHashSet<usize>,
}

/// Check every parameter list in the module for misplaced field modifiers
pub fn check_contexts(module: &Module) -> ContextReport {
    let mut enforcer = ContextEnforcer::default();
    enforcer.visit_module(module);
    enforcer.report
}

struct ClassFrame {
    name: String,
    is_abstract: bool,
    top_level: bool,
}

#[derive(Default)]
struct ContextEnforcer {
    report: ContextReport,
    classes: Vec<ClassFrame>,
    /// Statement index of the top-level declaration being walked
    current_statement: usize,
    /// Set right before visiting a top-level class statement
    next_class_top_level: bool,
}

impl ContextEnforcer {
    fn push_error(&mut self, error: DesugarError) {
        if self.classes.first().is_some_and(|frame| frame.top_level) {
            self.report.failed_statements.insert(self.current_statement);
        }
        self.report.errors.push(error);
    }

    /// Reject every modifier in a parameter list that is not a constructor's
    fn reject_modifiers(&mut self, params: &[Parameter], context: impl Fn() -> FieldContext) {
        for param in params {
            if param.has_storage_modifier() {
                self.push_error(DesugarError::InvalidFieldContext {
                    name: param.name.name.clone(),
                    context: context(),
                    span: param.span,
                });
            } else if let Some(stray) = param.modifiers.first() {
                self.push_error(DesugarError::ModifierWithoutStorage {
                    name: param.name.name.clone(),
                    modifier: stray.kind,
                    span: stray.span,
                });
            }
        }
    }

    fn current_class_name(&self) -> String {
        self.classes
            .last()
            .map(|frame| frame.name.clone())
            .unwrap_or_default()
    }
}

impl Visitor for ContextEnforcer {
    fn visit_module(&mut self, module: &Module) {
        for (index, stmt) in module.statements.iter().enumerate() {
            self.current_statement = index;
            self.next_class_top_level = matches!(stmt, Statement::ClassDecl(_));
            self.visit_statement(stmt);
        }
    }

    fn visit_class_decl(&mut self, decl: &ClassDecl) {
        let top_level = std::mem::replace(&mut self.next_class_top_level, false);
        self.classes.push(ClassFrame {
            name: decl.name.name.clone(),
            is_abstract: decl.is_abstract,
            top_level,
        });
        walk_class_decl(self, decl);
        self.classes.pop();
    }

    fn visit_function_decl(&mut self, decl: &FunctionDecl) {
        self.next_class_top_level = false;
        let name = decl.name.name.clone();
        self.reject_modifiers(&decl.params, || FieldContext::Function { name: name.clone() });
        walk_function_decl(self, decl);
    }

    fn visit_method_decl(&mut self, decl: &MethodDecl) {
        let class = self.current_class_name();
        let method = decl.name.name.clone();
        self.reject_modifiers(&decl.params, || FieldContext::Method {
            class: class.clone(),
            method: method.clone(),
        });
        walk_method_decl(self, decl);
    }

    fn visit_constructor_decl(&mut self, decl: &ConstructorDecl) {
        let context = match self.classes.last() {
            Some(frame) if frame.is_abstract => Some(FieldContext::AbstractConstructor {
                class: frame.name.clone(),
            }),
            Some(frame) if !frame.top_level => Some(FieldContext::LocalClassConstructor {
                class: frame.name.clone(),
            }),
            _ => None,
        };
        // Constructors of concrete top-level classes are classified by the pass itself
        if let Some(context) = context {
            self.reject_modifiers(&decl.params, || context.clone());
        }
        walk_constructor_decl(self, decl);
    }
}
