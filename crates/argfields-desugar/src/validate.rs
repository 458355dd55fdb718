//! Duplicate field validation

use argfields_ast::{Parameter, Span};
use rustc_hash::FxHashMap;

use crate::classify::ParamClass;
use crate::error::DesugarError;
use crate::hierarchy::FieldIndex;

/// Check field candidates against every visible field and against each other.
///
/// `params` and `classes` are parallel slices. The check is name-based only:
/// visibility and storage of the original declaration do not matter.
pub fn check_duplicates(
    class_name: &str,
    params: &[Parameter],
    classes: &[ParamClass],
    index: &FieldIndex,
) -> Vec<DesugarError> {
    let mut errors = Vec::new();
    let mut seen: FxHashMap<&str, Span> = FxHashMap::default();

    for (param, class) in params.iter().zip(classes) {
        if class.as_field().is_none() {
            continue;
        }
        let name = param.name.as_str();

        if let Some(origin) = index.get(name) {
            errors.push(DesugarError::DuplicateField {
                name: name.to_string(),
                class: origin.class_name.clone(),
                original: origin.span,
                duplicate: param.name.span,
            });
        } else if let Some(&earlier) = seen.get(name) {
            errors.push(DesugarError::DuplicateField {
                name: name.to_string(),
                class: class_name.to_string(),
                original: earlier,
                duplicate: param.name.span,
            });
        }

        seen.entry(name).or_insert(param.name.span);
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::classify_parameters;
    use crate::hierarchy::ClassTable;
    use argfields_ast::build::*;
    use argfields_ast::{StorageKind, Visibility};

    fn run(module: &argfields_ast::Module, class: &str, params: &[Parameter]) -> Vec<DesugarError> {
        let table = ClassTable::from_module(module);
        let id = table.lookup(class).unwrap();
        let classes = classify_parameters(params).unwrap();
        check_duplicates(class, params, &classes, &table.field_index(id))
    }

    #[test]
    fn test_no_collision() {
        let module = module(vec![class("Foo")
            .field(field(StorageKind::Var, Visibility::Private, "count", Some("Int")))
            .into_statement()]);
        let params = vec![param("value").final_().build()];
        assert!(run(&module, "Foo", &params).is_empty());
    }

    #[test]
    fn test_collision_with_own_field() {
        let module = module(vec![class("Foo")
            .field(field(StorageKind::Final, Visibility::Public, "value", None))
            .into_statement()]);
        let params = vec![param("value").var().build()];
        let errors = run(&module, "Foo", &params);
        assert!(matches!(
            errors.as_slice(),
            [DesugarError::DuplicateField { name, class, .. }] if name == "value" && class == "Foo"
        ));
    }

    #[test]
    fn test_private_ancestor_field_collides() {
        let module = module(vec![
            class("Base")
                .field(field(StorageKind::Var, Visibility::Private, "secret", None))
                .into_statement(),
            class("Derived").extends("Base").into_statement(),
        ]);
        let params = vec![param("secret").public().var().build()];
        let errors = run(&module, "Derived", &params);
        assert!(matches!(
            errors.as_slice(),
            [DesugarError::DuplicateField { class, .. }] if class == "Base"
        ));
    }

    #[test]
    fn test_plain_parameter_may_shadow_field() {
        let module = module(vec![class("Foo")
            .field(field(StorageKind::Var, Visibility::Private, "value", None))
            .into_statement()]);
        let params = vec![param("value").typed("Int").build()];
        assert!(run(&module, "Foo", &params).is_empty());
    }

    #[test]
    fn test_repeat_within_parameter_list() {
        let first = Span::new(4, 5, 1, 5);
        let second = Span::new(11, 12, 1, 12);
        let module = module(vec![class("Pair").into_statement()]);
        let mut params = vec![param("x").var().build(), param("x").final_().build()];
        params[0].name.span = first;
        params[1].name.span = second;

        let errors = run(&module, "Pair", &params);
        assert_eq!(
            errors,
            vec![DesugarError::DuplicateField {
                name: "x".to_string(),
                class: "Pair".to_string(),
                original: first,
                duplicate: second,
            }]
        );
    }
}
