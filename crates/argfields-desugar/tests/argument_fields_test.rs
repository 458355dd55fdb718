//! Integration tests for argument-field desugaring
//!
//! Tests the complete workflow:
//! - Constructor parameters become fields plus assignments
//! - Defaults and metadata handling
//! - Duplicate and context errors
//! - Inheritance ordering, cycles and external superclasses

use argfields_ast::build::*;
use argfields_ast::printer::{print_class, print_module};
use argfields_ast::{ClassDecl, Module, Span, Statement, StorageKind, Visibility};
use argfields_desugar::{
    desugar_module, ClassTable, DesugarConfig, DesugarError, DesugarOptions, Desugarer,
    FieldContext, FieldEntry, FieldOrder,
};

fn class_named<'a>(module: &'a Module, name: &str) -> &'a ClassDecl {
    module
        .classes()
        .find(|c| c.name.name == name)
        .unwrap_or_else(|| panic!("class {} not found", name))
}

fn run(module: &mut Module) -> Result<argfields_desugar::DesugarReport, Vec<DesugarError>> {
    desugar_module(module, &DesugarOptions::default())
}

#[test]
fn test_public_final_matches_hand_written_class() {
    let mut module = module(vec![class("Foo")
        .constructor(ctor(
            vec![param("value").public().final_().typed("String").build()],
            vec![],
        ))
        .into_statement()]);

    run(&mut module).unwrap();

    let hand_written = class("Foo")
        .field(field(StorageKind::Final, Visibility::Public, "value", Some("String")))
        .constructor(ctor(
            vec![param("value").typed("String").build()],
            vec![assign(this_member("value"), ident_expr("value"))],
        ))
        .build();

    assert_eq!(class_named(&module, "Foo"), &hand_written);
    assert_eq!(
        print_class(class_named(&module, "Foo")),
        "class Foo {\n    public final value:String;\n    new(value:String) {\n        this.value = value;\n    }\n}\n"
    );
}

#[test]
fn test_default_value_stays_on_parameter() {
    let mut module = module(vec![class("Foo")
        .constructor(ctor(
            vec![param("fooBar")
                .var()
                .typed("String")
                .default_value(string_lit("foobar"))
                .build()],
            vec![],
        ))
        .into_statement()]);

    run(&mut module).unwrap();

    let foo = class_named(&module, "Foo");
    let field = foo.fields().next().unwrap();
    assert_eq!(field.name.name, "fooBar");
    assert_eq!(field.storage, StorageKind::Var);
    assert_eq!(field.visibility, Visibility::Private);
    assert!(field.initializer.is_none());

    let param = &foo.constructor().unwrap().params[0];
    assert_eq!(param.default_value, Some(string_lit("foobar")));
    assert!(print_class(foo).contains("new(fooBar:String = 'foobar') {"));
}

#[test]
fn test_metadata_moves_to_field_only_for_candidates() {
    let mut module = module(vec![class("Service")
        .constructor(ctor(
            vec![
                param("repo").final_().meta(metadata("inject", vec![])).build(),
                param("limit")
                    .typed("Int")
                    .meta(metadata("range", vec![int_lit(0), int_lit(10)]))
                    .build(),
            ],
            vec![],
        ))
        .into_statement()]);

    run(&mut module).unwrap();

    let service = class_named(&module, "Service");
    let field = service.fields().next().unwrap();
    assert_eq!(field.metadata, vec![metadata("inject", vec![])]);

    let params = &service.constructor().unwrap().params;
    assert!(params[0].metadata.is_empty());
    assert_eq!(params[1].metadata.len(), 1);
    assert_eq!(service.fields().count(), 1);
}

#[test]
fn test_reassigning_parameter_does_not_touch_field_assignment() {
    let mut module = module(vec![class("Foo")
        .constructor(ctor(
            vec![param("fooBar").var().typed("String").build()],
            vec![assign(ident_expr("fooBar"), string_lit("changed"))],
        ))
        .into_statement()]);

    run(&mut module).unwrap();

    let text = print_class(class_named(&module, "Foo"));
    assert!(text.contains("        this.fooBar = fooBar;\n        fooBar = 'changed';\n"));
}

#[test]
fn test_assignments_follow_super_call() {
    let mut module = module(vec![
        class("Base")
            .constructor(ctor(vec![param("id").final_().build()], vec![]))
            .into_statement(),
        class("User")
            .extends("Base")
            .constructor(ctor(
                vec![param("id").build(), param("name").public().var().build(), param("age").var().build()],
                vec![super_call(vec![ident_expr("id")]), call("init", vec![])],
            ))
            .into_statement(),
    ]);

    run(&mut module).unwrap();

    let user = class_named(&module, "User");
    let body: Vec<String> = user
        .constructor()
        .unwrap()
        .body
        .statements
        .iter()
        .map(|s| argfields_ast::printer::print_statement(s).trim().to_string())
        .collect();
    assert_eq!(
        body,
        vec!["super(id);", "this.name = name;", "this.age = age;", "init();"]
    );
}

#[test]
fn test_duplicate_with_ancestor_names_field_and_class() {
    // Descendant first in source: ancestors are still processed first
    let mut module = module(vec![
        class("FooBar")
            .extends("Foo")
            .constructor(ctor(vec![param("foo").var().typed("Int").build()], vec![]))
            .into_statement(),
        class("Foo")
            .constructor(ctor(vec![param("foo").var().typed("Int").build()], vec![]))
            .into_statement(),
    ]);

    let errors = run(&mut module).unwrap_err();
    assert_eq!(errors.len(), 1);
    match &errors[0] {
        DesugarError::DuplicateField { name, class, .. } => {
            assert_eq!(name, "foo");
            assert_eq!(class, "Foo");
        }
        other => panic!("expected DuplicateField, got {:?}", other),
    }

    // Foo still desugared; FooBar left as parsed
    assert_eq!(class_named(&module, "Foo").fields().count(), 1);
    let foobar = class_named(&module, "FooBar");
    assert_eq!(foobar.fields().count(), 0);
    assert!(foobar.constructor().unwrap().params[0].has_storage_modifier());
}

#[test]
fn test_private_ancestor_field_still_collides() {
    let mut module = module(vec![
        class("Account")
            .field(field(StorageKind::Var, Visibility::Private, "balance", Some("Float")))
            .into_statement(),
        class("Savings")
            .extends("Account")
            .constructor(ctor(vec![param("balance").public().var().build()], vec![]))
            .into_statement(),
    ]);

    let errors = run(&mut module).unwrap_err();
    assert!(matches!(
        errors.as_slice(),
        [DesugarError::DuplicateField { class, .. }] if class == "Account"
    ));
}

#[test]
fn test_static_field_collides() {
    let mut static_field = field(StorageKind::Var, Visibility::Public, "count", None);
    static_field.is_static = true;
    let mut module = module(vec![class("Counter")
        .field(static_field)
        .constructor(ctor(vec![param("count").var().build()], vec![]))
        .into_statement()]);

    assert!(matches!(
        run(&mut module).unwrap_err().as_slice(),
        [DesugarError::DuplicateField { .. }]
    ));
}

#[test]
fn test_no_collision_succeeds() {
    let mut module = module(vec![
        class("Foo")
            .field(field(StorageKind::Var, Visibility::Private, "foo", Some("Int")))
            .into_statement(),
        class("FooBar")
            .extends("Foo")
            .constructor(ctor(vec![param("bar").final_().typed("Int").build()], vec![]))
            .into_statement(),
    ]);

    let report = run(&mut module).unwrap();
    assert_eq!(report.class("FooBar").unwrap().fields.len(), 1);
}

#[test]
fn test_static_argument_field() {
    let mut module = module(vec![class("Foo")
        .constructor(ctor(vec![param("x").static_().var().build()], vec![]))
        .into_statement()]);
    assert!(matches!(
        run(&mut module).unwrap_err().as_slice(),
        [DesugarError::StaticArgumentField { name, .. }] if name == "x"
    ));
}

#[test]
fn test_invalid_contexts() {
    let mut module = module(vec![
        class("Foo")
            .method(method("update", vec![param("value").var().build()], vec![]))
            .into_statement(),
        Statement::FunctionDecl(function("make", vec![param("x").final_().build()], vec![])),
        class("Shape")
            .abstract_()
            .constructor(ctor(vec![param("sides").var().build()], vec![]))
            .into_statement(),
    ]);
    let before = module.clone();

    let errors = run(&mut module).unwrap_err();
    let contexts: Vec<FieldContext> = errors
        .iter()
        .filter_map(|e| match e {
            DesugarError::InvalidFieldContext { context, .. } => Some(context.clone()),
            _ => None,
        })
        .collect();
    assert_eq!(
        contexts,
        vec![
            FieldContext::Method { class: "Foo".to_string(), method: "update".to_string() },
            FieldContext::Function { name: "make".to_string() },
            FieldContext::AbstractConstructor { class: "Shape".to_string() },
        ]
    );
    // Offending declarations are left as parsed
    assert_eq!(module, before);
}

#[test]
fn test_cycle_reported_and_other_classes_desugared() {
    let mut module = module(vec![
        class("A").extends("B").into_statement(),
        class("B").extends("A").into_statement(),
        class("C")
            .constructor(ctor(vec![param("x").var().build()], vec![]))
            .into_statement(),
    ]);

    let errors = run(&mut module).unwrap_err();
    let cyclic: Vec<&str> = errors
        .iter()
        .filter_map(|e| match e {
            DesugarError::CyclicInheritance { class, .. } => Some(class.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(cyclic, vec!["A", "B"]);
    assert_eq!(class_named(&module, "C").fields().count(), 1);
}

#[test]
fn test_cycle_among_external_classes_is_reported() {
    let mut table = ClassTable::new();
    table.register_external("A", Some("B"), vec![]);
    table.register_external("B", Some("A"), vec![]);
    let desugarer = Desugarer::with_class_table(table);

    let mut module = module(vec![
        class("C")
            .extends("A")
            .constructor(ctor(vec![param("x").var().build()], vec![]))
            .into_statement(),
        class("D")
            .extends("C")
            .constructor(ctor(vec![param("y").var().build()], vec![]))
            .into_statement(),
    ]);
    let before = module.clone();

    let errors = desugarer
        .desugar_module(&mut module, &DesugarOptions::default())
        .unwrap_err();
    // Only the class leading into the cycle is reported, not its subclass
    assert!(matches!(
        errors.as_slice(),
        [DesugarError::CyclicInheritance { class, .. }] if class == "C"
    ));
    assert_eq!(errors[0].code(), "E4006");
    assert_eq!(module, before);
}

#[test]
fn test_repeated_class_name_is_rejected() {
    let mut module = module(vec![
        class("Foo")
            .field(field(StorageKind::Var, Visibility::Private, "foo", Some("Int")))
            .into_statement(),
        class("Foo")
            .constructor(ctor(vec![param("bar").var().build()], vec![]))
            .into_statement(),
        class("FooBar")
            .extends("Foo")
            .constructor(ctor(vec![param("foo").var().build()], vec![]))
            .into_statement(),
    ]);

    let errors = run(&mut module).unwrap_err();
    let codes: Vec<&str> = errors.iter().map(DesugarError::code).collect();
    assert_eq!(codes, vec!["E4008", "E4003"]);
    assert!(matches!(
        &errors[0],
        DesugarError::DuplicateClass { class, .. } if class == "Foo"
    ));
    // FooBar is checked against the first Foo, which declares `foo`
    assert!(matches!(
        &errors[1],
        DesugarError::DuplicateField { name, class, .. } if name == "foo" && class == "Foo"
    ));

    let repeat = module.classes().nth(1).unwrap();
    assert_eq!(repeat.fields().count(), 0);
    assert_eq!(repeat.constructor().unwrap().params[0].modifiers.len(), 1);
}

#[test]
fn test_external_superclass_fields() {
    let mut table = ClassTable::new();
    table.register_external("Entity", None, vec![FieldEntry::new("id", Span::default())]);
    let desugarer = Desugarer::with_class_table(table);

    let mut module = module(vec![class("User")
        .extends("Entity")
        .constructor(ctor(
            vec![param("id").var().build(), param("email").var().build()],
            vec![],
        ))
        .into_statement()]);

    let errors = desugarer
        .desugar_module(&mut module, &DesugarOptions::default())
        .unwrap_err();
    assert!(matches!(
        errors.as_slice(),
        [DesugarError::DuplicateField { name, class, .. }] if name == "id" && class == "Entity"
    ));
}

#[test]
fn test_configured_order_and_visibility() {
    let config = DesugarConfig::from_str(
        "[desugar]\ndefault-visibility = \"public\"\nfield-order = \"prepend\"\n",
    )
    .unwrap();
    assert_eq!(config.desugar.field_order, FieldOrder::Prepend);

    let mut module = module(vec![class("Point")
        .field(field(StorageKind::Var, Visibility::Private, "label", Some("String")))
        .constructor(ctor(
            vec![param("x").var().typed("Int").build(), param("y").private().var().typed("Int").build()],
            vec![],
        ))
        .into_statement()]);

    desugar_module(&mut module, &config.desugar).unwrap();

    assert_eq!(
        print_module(&module),
        "class Point {\n    public var x:Int;\n    private var y:Int;\n    private var label:String;\n    new(x:Int, y:Int) {\n        this.x = x;\n        this.y = y;\n    }\n}\n"
    );
}

#[test]
fn test_json_tree_from_host() {
    let host = module(vec![class("Foo")
        .constructor(ctor(vec![param("value").public().final_().typed("String").build()], vec![]))
        .into_statement()]);
    let json = serde_json::to_string(&host).unwrap();

    let mut module: Module = serde_json::from_str(&json).unwrap();
    let report = run(&mut module).unwrap();

    let summary = serde_json::to_value(&report).unwrap();
    assert_eq!(summary["classes"][0]["class"], "Foo");
    assert_eq!(summary["classes"][0]["fields"][0]["name"], "value");
    assert_eq!(summary["classes"][0]["fields"][0]["visibility"], "public");
    assert_eq!(summary["classes"][0]["fields"][0]["storage"], "final");
}

#[test]
fn test_fields_visible_to_grandchildren() {
    let mut module = module(vec![
        class("Leaf")
            .extends("Mid")
            .constructor(ctor(vec![param("root").var().build()], vec![]))
            .into_statement(),
        class("Mid").extends("Root").into_statement(),
        class("Root")
            .constructor(ctor(vec![param("root").var().build()], vec![]))
            .into_statement(),
    ]);

    let errors = run(&mut module).unwrap_err();
    assert!(matches!(
        errors.as_slice(),
        [DesugarError::DuplicateField { class, .. }] if class == "Root"
    ));
}
