//! Constructor assignment injection

use argfields_ast::ast::{AssignmentExpression, ExpressionStatement, MemberExpression};
use argfields_ast::{ConstructorDecl, Expression, Identifier, Statement};

/// Index where field assignments go: right after a leading `super(...)`,
/// otherwise the start of the body.
pub fn injection_point(ctor: &ConstructorDecl) -> usize {
    match ctor.body.statements.first() {
        Some(stmt) if stmt.is_super_call() => 1,
        _ => 0,
    }
}

/// `this.<name> = <name>;`, spanned at the parameter name
pub fn field_assignment(param_name: &Identifier) -> Statement {
    let span = param_name.span;
    let target = Expression::Member(MemberExpression {
        object: Box::new(Expression::This(span)),
        property: param_name.clone(),
        span,
    });
    let value = Expression::Identifier(param_name.clone());
    Statement::Expression(ExpressionStatement {
        expression: Expression::Assignment(AssignmentExpression {
            target: Box::new(target),
            value: Box::new(value),
            span,
        }),
        span,
    })
}

/// Splice one assignment per field name into the constructor body, in order
pub fn inject_assignments(ctor: &mut ConstructorDecl, field_names: &[Identifier]) {
    if field_names.is_empty() {
        return;
    }
    let at = injection_point(ctor);
    ctor.body
        .statements
        .splice(at..at, field_names.iter().map(field_assignment));
}
