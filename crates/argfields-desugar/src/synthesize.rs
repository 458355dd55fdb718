//! Field synthesis from argument-field parameters

use argfields_ast::{ClassMember, FieldDecl, Parameter, Span, StorageKind, Visibility};
use serde::Serialize;

use crate::classify::FieldCandidate;
use crate::config::FieldOrder;

/// Summary of one synthesized field, for reports
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SynthesizedField {
    pub name: String,
    pub storage: StorageKind,
    pub visibility: Visibility,
    pub span: Span,
}

impl From<&FieldDecl> for SynthesizedField {
    fn from(field: &FieldDecl) -> Self {
        Self {
            name: field.name.name.clone(),
            storage: field.storage,
            visibility: field.visibility,
            span: field.name.span,
        }
    }
}

/// Build the field declared by a parameter and strip the parameter down to
/// a plain one.
///
/// Metadata moves to the field. The default value stays on the parameter and
/// the field gets no initializer.
pub fn synthesize_field(
    param: &mut Parameter,
    candidate: FieldCandidate,
    default_visibility: Visibility,
) -> FieldDecl {
    let metadata = std::mem::take(&mut param.metadata);
    param.modifiers.clear();

    FieldDecl {
        metadata,
        visibility: candidate.visibility_or(default_visibility),
        storage: candidate.storage,
        is_static: false,
        name: param.name.clone(),
        type_annotation: param.type_annotation.clone(),
        initializer: None,
        span: param.span,
    }
}

/// Insert synthesized fields into a member list, keeping their order
pub fn insert_fields(members: &mut Vec<ClassMember>, fields: Vec<FieldDecl>, order: FieldOrder) {
    if fields.is_empty() {
        return;
    }
    let is_field = |m: &ClassMember| matches!(m, ClassMember::Field(_));
    let at = match order {
        FieldOrder::Append => members
            .iter()
            .rposition(is_field)
            .map(|i| i + 1)
            .unwrap_or(0),
        FieldOrder::Prepend => members.iter().position(is_field).unwrap_or(0),
    };
    members.splice(at..at, fields.into_iter().map(ClassMember::Field));
}
