//! Terse constructors for syntax tree nodes.
//!
//! Hosts that synthesize declarations (and tests) use these instead of
//! spelling out every struct literal. Nodes built here carry `Span::default()`
//! unless a span is given explicitly.

use crate::ast::*;
use crate::token::Span;

pub fn ident(name: &str) -> Identifier {
    Identifier::new(name, Span::default())
}

/// Type annotation from a source name: primitives by name, anything else a reference.
pub fn ty(name: &str) -> TypeAnnotation {
    let primitive = match name {
        "Int" => Some(PrimitiveType::Int),
        "Float" => Some(PrimitiveType::Float),
        "String" => Some(PrimitiveType::String),
        "Bool" => Some(PrimitiveType::Bool),
        "Void" => Some(PrimitiveType::Void),
        "Dynamic" => Some(PrimitiveType::Dynamic),
        _ => None,
    };
    let ty = match primitive {
        Some(p) => Type::Primitive(p),
        None => Type::Reference(TypeReference::simple(ident(name))),
    };
    TypeAnnotation {
        ty,
        span: Span::default(),
    }
}

pub fn string_lit(value: &str) -> Expression {
    Expression::StringLiteral(StringLiteral {
        value: value.to_string(),
        span: Span::default(),
    })
}

pub fn int_lit(value: i64) -> Expression {
    Expression::IntLiteral(IntLiteral {
        value,
        span: Span::default(),
    })
}

pub fn ident_expr(name: &str) -> Expression {
    Expression::Identifier(ident(name))
}

/// `this.<name>`
pub fn this_member(name: &str) -> Expression {
    Expression::Member(MemberExpression {
        object: Box::new(Expression::This(Span::default())),
        property: ident(name),
        span: Span::default(),
    })
}

/// Expression statement `target = value;`
pub fn assign(target: Expression, value: Expression) -> Statement {
    expr_stmt(Expression::Assignment(AssignmentExpression {
        target: Box::new(target),
        value: Box::new(value),
        span: Span::default(),
    }))
}

/// Expression statement `super(args);`
pub fn super_call(arguments: Vec<Expression>) -> Statement {
    expr_stmt(Expression::Call(CallExpression {
        callee: Box::new(Expression::Super(Span::default())),
        arguments,
        span: Span::default(),
    }))
}

/// Expression statement `callee(args);`
pub fn call(callee: &str, arguments: Vec<Expression>) -> Statement {
    expr_stmt(Expression::Call(CallExpression {
        callee: Box::new(ident_expr(callee)),
        arguments,
        span: Span::default(),
    }))
}

pub fn expr_stmt(expression: Expression) -> Statement {
    Statement::Expression(ExpressionStatement {
        span: *expression.span(),
        expression,
    })
}

pub fn block(statements: Vec<Statement>) -> BlockStatement {
    BlockStatement {
        statements,
        span: Span::default(),
    }
}

pub fn metadata(name: &str, args: Vec<Expression>) -> MetadataEntry {
    MetadataEntry {
        name: ident(name),
        args,
        span: Span::default(),
    }
}

/// Start building a parameter
pub fn param(name: &str) -> ParamBuilder {
    ParamBuilder {
        param: Parameter {
            metadata: Vec::new(),
            modifiers: Vec::new(),
            name: ident(name),
            type_annotation: None,
            default_value: None,
            span: Span::default(),
        },
    }
}

/// Builder for [`Parameter`]; modifiers are recorded in call order.
#[derive(Debug, Clone)]
pub struct ParamBuilder {
    param: Parameter,
}

impl ParamBuilder {
    pub fn modifier(mut self, kind: ModifierKind) -> Self {
        self.param.modifiers.push(Modifier::new(kind, self.param.span));
        self
    }

    pub fn var(self) -> Self {
        self.modifier(ModifierKind::Var)
    }

    pub fn final_(self) -> Self {
        self.modifier(ModifierKind::Final)
    }

    pub fn public(self) -> Self {
        self.modifier(ModifierKind::Public)
    }

    pub fn private(self) -> Self {
        self.modifier(ModifierKind::Private)
    }

    pub fn static_(self) -> Self {
        self.modifier(ModifierKind::Static)
    }

    pub fn typed(mut self, name: &str) -> Self {
        self.param.type_annotation = Some(ty(name));
        self
    }

    pub fn default_value(mut self, value: Expression) -> Self {
        self.param.default_value = Some(value);
        self
    }

    pub fn meta(mut self, entry: MetadataEntry) -> Self {
        self.param.metadata.push(entry);
        self
    }

    /// Set the parameter span; modifiers added afterwards share it.
    pub fn span(mut self, span: Span) -> Self {
        self.param.span = span;
        self.param.name.span = span;
        self
    }

    pub fn build(self) -> Parameter {
        self.param
    }
}

impl From<ParamBuilder> for Parameter {
    fn from(builder: ParamBuilder) -> Self {
        builder.build()
    }
}

pub fn field(storage: StorageKind, visibility: Visibility, name: &str, type_name: Option<&str>) -> FieldDecl {
    FieldDecl {
        metadata: Vec::new(),
        visibility,
        storage,
        is_static: false,
        name: ident(name),
        type_annotation: type_name.map(ty),
        initializer: None,
        span: Span::default(),
    }
}

pub fn ctor(params: Vec<Parameter>, body: Vec<Statement>) -> ConstructorDecl {
    ConstructorDecl {
        params,
        body: block(body),
        span: Span::default(),
    }
}

pub fn method(name: &str, params: Vec<Parameter>, body: Vec<Statement>) -> MethodDecl {
    MethodDecl {
        metadata: Vec::new(),
        visibility: Visibility::Public,
        is_abstract: false,
        is_static: false,
        name: ident(name),
        params,
        return_type: None,
        body: Some(block(body)),
        span: Span::default(),
    }
}

pub fn function(name: &str, params: Vec<Parameter>, body: Vec<Statement>) -> FunctionDecl {
    FunctionDecl {
        name: ident(name),
        params,
        return_type: None,
        body: block(body),
        span: Span::default(),
    }
}

pub fn module(statements: Vec<Statement>) -> Module {
    Module::new(statements, Span::default())
}

/// Start building a class declaration
pub fn class(name: &str) -> ClassBuilder {
    ClassBuilder {
        class: ClassDecl {
            metadata: Vec::new(),
            is_abstract: false,
            name: ident(name),
            extends: None,
            members: Vec::new(),
            span: Span::default(),
        },
    }
}

/// Builder for [`ClassDecl`]; members keep the order they are added in.
#[derive(Debug, Clone)]
pub struct ClassBuilder {
    class: ClassDecl,
}

impl ClassBuilder {
    pub fn extends(mut self, name: &str) -> Self {
        self.class.extends = Some(ident(name));
        self
    }

    pub fn abstract_(mut self) -> Self {
        self.class.is_abstract = true;
        self
    }

    pub fn span(mut self, span: Span) -> Self {
        self.class.span = span;
        self.class.name.span = span;
        self
    }

    pub fn field(mut self, field: FieldDecl) -> Self {
        self.class.members.push(ClassMember::Field(field));
        self
    }

    pub fn method(mut self, method: MethodDecl) -> Self {
        self.class.members.push(ClassMember::Method(method));
        self
    }

    pub fn constructor(mut self, ctor: ConstructorDecl) -> Self {
        self.class.members.push(ClassMember::Constructor(ctor));
        self
    }

    pub fn build(self) -> ClassDecl {
        self.class
    }

    pub fn into_statement(self) -> Statement {
        Statement::ClassDecl(self.class)
    }
}
