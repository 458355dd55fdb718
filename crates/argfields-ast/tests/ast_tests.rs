use argfields_ast::ast::*;
use argfields_ast::build;
use argfields_ast::token::Span;

// ============================================================================
// Module Tests
// ============================================================================

#[test]
fn test_empty_module() {
    let module = Module::new(vec![], Span::new(0, 0, 1, 1));

    assert!(module.is_empty());
    assert_eq!(module.len(), 0);
}

#[test]
fn test_module_classes_skips_other_statements() {
    let module = build::module(vec![
        build::class("A").into_statement(),
        Statement::FunctionDecl(build::function("helper", vec![], vec![])),
        build::class("B").extends("A").into_statement(),
    ]);

    let names: Vec<_> = module.classes().map(|c| c.name.name.as_str()).collect();
    assert_eq!(names, vec!["A", "B"]);
}

// ============================================================================
// Parameter Tests
// ============================================================================

#[test]
fn test_parameter_modifier_queries() {
    let plain = build::param("x").typed("Int").build();
    assert!(!plain.has_storage_modifier());
    assert!(plain.modifiers.is_empty());

    let field = build::param("y").private().var().build();
    assert!(field.has_storage_modifier());
    assert!(field.has_modifier(ModifierKind::Private));
    assert!(!field.has_modifier(ModifierKind::Public));
}

#[test]
fn test_modifier_kind_keywords() {
    assert_eq!(ModifierKind::Var.keyword(), "var");
    assert_eq!(ModifierKind::Final.to_string(), "final");
    assert!(ModifierKind::Final.is_storage());
    assert!(ModifierKind::Public.is_visibility());
    assert!(!ModifierKind::Static.is_storage());
    assert!(!ModifierKind::Static.is_visibility());
}

// ============================================================================
// Serialization Tests
// ============================================================================

#[test]
fn test_class_json_shape() {
    let class = build::class("Foo")
        .constructor(build::ctor(
            vec![build::param("value").public().final_().typed("String").build()],
            vec![],
        ))
        .build();

    let json = serde_json::to_value(&class).unwrap();
    assert_eq!(json["name"]["name"], "Foo");
    let modifiers = &json["members"][0]["Constructor"]["params"][0]["modifiers"];
    assert_eq!(modifiers[0]["kind"], "public");
    assert_eq!(modifiers[1]["kind"], "final");
}

#[test]
fn test_module_from_json() {
    let json = r#"{
        "statements": [
            { "ClassDecl": {
                "metadata": [],
                "is_abstract": false,
                "name": { "name": "Foo", "span": { "start": 6, "end": 9, "line": 1, "column": 7 } },
                "extends": null,
                "members": [],
                "span": { "start": 0, "end": 12, "line": 1, "column": 1 }
            } }
        ],
        "span": { "start": 0, "end": 12, "line": 1, "column": 1 }
    }"#;

    let module: Module = serde_json::from_str(json).unwrap();
    let class = module.classes().next().unwrap();
    assert_eq!(class.name.name, "Foo");
    assert_eq!(class.name.span, Span::new(6, 9, 1, 7));
}

// ============================================================================
// Visitor Tests
// ============================================================================

struct ParameterNames {
    names: Vec<String>,
}

impl Visitor for ParameterNames {
    fn visit_parameter(&mut self, param: &Parameter) {
        self.names.push(param.name.name.clone());
        walk_parameter(self, param);
    }
}

#[test]
fn test_visitor_reaches_every_parameter_list() {
    let inner = build::function("inner", vec![build::param("d").build()], vec![]);
    let module = build::module(vec![
        build::class("Foo")
            .constructor(build::ctor(vec![build::param("a").build()], vec![]))
            .method(build::method(
                "run",
                vec![build::param("b").build()],
                vec![Statement::FunctionDecl(inner)],
            ))
            .into_statement(),
        Statement::FunctionDecl(build::function("top", vec![build::param("c").build()], vec![])),
    ]);

    let mut visitor = ParameterNames { names: vec![] };
    visitor.visit_module(&module);
    assert_eq!(visitor.names, vec!["a", "b", "d", "c"]);
}
