//! Source printer
//!
//! Renders a syntax tree back to source text. Used to show the result of
//! desugaring and to compare trees in tests without spelling out every node.

use crate::ast::*;

const INDENT: &str = "    ";

/// Render a whole module, one declaration after another
pub fn print_module(module: &Module) -> String {
    let mut printer = Printer::default();
    for (i, stmt) in module.statements.iter().enumerate() {
        if i > 0 && stmt.is_declaration() {
            printer.out.push('\n');
        }
        printer.statement(stmt);
    }
    printer.out
}

pub fn print_class(class: &ClassDecl) -> String {
    let mut printer = Printer::default();
    printer.class(class);
    printer.out
}

pub fn print_statement(stmt: &Statement) -> String {
    let mut printer = Printer::default();
    printer.statement(stmt);
    printer.out
}

/// Render a parameter list without the surrounding parentheses
pub fn print_params(params: &[Parameter]) -> String {
    params.iter().map(parameter).collect::<Vec<_>>().join(", ")
}

pub fn print_expression(expr: &Expression) -> String {
    expression(expr)
}

#[derive(Default)]
struct Printer {
    out: String,
    depth: usize,
}

impl Printer {
    fn line(&mut self, text: &str) {
        for _ in 0..self.depth {
            self.out.push_str(INDENT);
        }
        self.out.push_str(text);
        self.out.push('\n');
    }

    fn statement(&mut self, stmt: &Statement) {
        match stmt {
            Statement::VariableDecl(decl) => {
                let mut text = format!("{} {}", decl.storage.keyword(), decl.name.name);
                if let Some(ty) = &decl.type_annotation {
                    text.push(':');
                    text.push_str(&type_annotation(ty));
                }
                if let Some(init) = &decl.initializer {
                    text.push_str(" = ");
                    text.push_str(&expression(init));
                }
                text.push(';');
                self.line(&text);
            }
            Statement::FunctionDecl(decl) => {
                let header = format!(
                    "function {}({}){} {{",
                    decl.name.name,
                    print_params(&decl.params),
                    return_suffix(decl.return_type.as_ref())
                );
                self.braced(&header, &decl.body.statements);
            }
            Statement::ClassDecl(class) => self.class(class),
            Statement::Expression(stmt) => {
                let text = format!("{};", expression(&stmt.expression));
                self.line(&text);
            }
            Statement::If(stmt) => {
                let header = format!("if ({})", expression(&stmt.condition));
                self.nested(&header, &stmt.then_branch);
                if let Some(else_branch) = &stmt.else_branch {
                    self.nested("else", else_branch);
                }
            }
            Statement::While(stmt) => {
                let header = format!("while ({})", expression(&stmt.condition));
                self.nested(&header, &stmt.body);
            }
            Statement::Return(stmt) => match &stmt.value {
                Some(value) => self.line(&format!("return {};", expression(value))),
                None => self.line("return;"),
            },
            Statement::Block(block) => self.braced("{", &block.statements),
            Statement::Empty(_) => self.line(";"),
        }
    }

    /// Header followed by a branch body: blocks open on the header line.
    fn nested(&mut self, header: &str, body: &Statement) {
        match body {
            Statement::Block(block) => self.braced(&format!("{} {{", header), &block.statements),
            other => {
                self.line(header);
                self.depth += 1;
                self.statement(other);
                self.depth -= 1;
            }
        }
    }

    fn braced(&mut self, header: &str, statements: &[Statement]) {
        self.line(header);
        self.depth += 1;
        for stmt in statements {
            self.statement(stmt);
        }
        self.depth -= 1;
        self.line("}");
    }

    fn class(&mut self, class: &ClassDecl) {
        let mut header = metadata_prefix(&class.metadata);
        if class.is_abstract {
            header.push_str("abstract ");
        }
        header.push_str("class ");
        header.push_str(&class.name.name);
        if let Some(extends) = &class.extends {
            header.push_str(" extends ");
            header.push_str(&extends.name);
        }
        header.push_str(" {");
        self.line(&header);
        self.depth += 1;
        for member in &class.members {
            self.member(member);
        }
        self.depth -= 1;
        self.line("}");
    }

    fn member(&mut self, member: &ClassMember) {
        match member {
            ClassMember::Field(field) => {
                let mut text = metadata_prefix(&field.metadata);
                text.push_str(field.visibility.keyword());
                text.push(' ');
                if field.is_static {
                    text.push_str("static ");
                }
                text.push_str(field.storage.keyword());
                text.push(' ');
                text.push_str(&field.name.name);
                if let Some(ty) = &field.type_annotation {
                    text.push(':');
                    text.push_str(&type_annotation(ty));
                }
                if let Some(init) = &field.initializer {
                    text.push_str(" = ");
                    text.push_str(&expression(init));
                }
                text.push(';');
                self.line(&text);
            }
            ClassMember::Method(method) => {
                let mut header = metadata_prefix(&method.metadata);
                header.push_str(method.visibility.keyword());
                header.push(' ');
                if method.is_static {
                    header.push_str("static ");
                }
                if method.is_abstract {
                    header.push_str("abstract ");
                }
                header.push_str(&format!(
                    "function {}({}){}",
                    method.name.name,
                    print_params(&method.params),
                    return_suffix(method.return_type.as_ref())
                ));
                match &method.body {
                    Some(body) => self.braced(&format!("{} {{", header), &body.statements),
                    None => self.line(&format!("{};", header)),
                }
            }
            ClassMember::Constructor(ctor) => {
                let header = format!("new({}) {{", print_params(&ctor.params));
                self.braced(&header, &ctor.body.statements);
            }
        }
    }
}

fn metadata_prefix(entries: &[MetadataEntry]) -> String {
    let mut text = String::new();
    for entry in entries {
        text.push_str(&metadata_text(entry));
        text.push(' ');
    }
    text
}

fn metadata_text(entry: &MetadataEntry) -> String {
    if entry.args.is_empty() {
        format!("@{}", entry.name.name)
    } else {
        let args: Vec<String> = entry.args.iter().map(expression).collect();
        format!("@{}({})", entry.name.name, args.join(", "))
    }
}

fn return_suffix(ty: Option<&TypeAnnotation>) -> String {
    ty.map(|t| format!(":{}", type_annotation(t))).unwrap_or_default()
}

fn parameter(param: &Parameter) -> String {
    let mut text = metadata_prefix(&param.metadata);
    for modifier in &param.modifiers {
        text.push_str(modifier.kind.keyword());
        text.push(' ');
    }
    text.push_str(&param.name.name);
    if let Some(ty) = &param.type_annotation {
        text.push(':');
        text.push_str(&type_annotation(ty));
    }
    if let Some(default) = &param.default_value {
        text.push_str(" = ");
        text.push_str(&expression(default));
    }
    text
}

fn type_annotation(ty: &TypeAnnotation) -> String {
    match &ty.ty {
        Type::Primitive(p) => p.name().to_string(),
        Type::Reference(type_ref) => match &type_ref.type_args {
            Some(args) => {
                let args: Vec<String> = args.iter().map(type_annotation).collect();
                format!("{}<{}>", type_ref.name.name, args.join(", "))
            }
            None => type_ref.name.name.clone(),
        },
        Type::Array(elem) => format!("Array<{}>", type_annotation(elem)),
    }
}

fn expression(expr: &Expression) -> String {
    match expr {
        Expression::IntLiteral(lit) => lit.value.to_string(),
        Expression::FloatLiteral(lit) => format!("{:?}", lit.value),
        Expression::StringLiteral(lit) => {
            format!("'{}'", lit.value.replace('\\', "\\\\").replace('\'', "\\'"))
        }
        Expression::BooleanLiteral(lit) => lit.value.to_string(),
        Expression::NullLiteral(_) => "null".to_string(),
        Expression::Identifier(id) => id.name.clone(),
        Expression::This(_) => "this".to_string(),
        Expression::Super(_) => "super".to_string(),
        Expression::Member(member) => {
            format!("{}.{}", expression(&member.object), member.property.name)
        }
        Expression::Call(call) => {
            let args: Vec<String> = call.arguments.iter().map(expression).collect();
            format!("{}({})", expression(&call.callee), args.join(", "))
        }
        Expression::Assignment(assign) => {
            format!("{} = {}", expression(&assign.target), expression(&assign.value))
        }
    }
}
