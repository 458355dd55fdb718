//! Modifier classification
//!
//! Decides, per constructor parameter, whether it is a plain parameter or an
//! argument field, using nothing but the modifiers written on it.

use argfields_ast::{Modifier, ModifierKind, Parameter, StorageKind, Visibility};

use crate::error::DesugarError;

/// Classification of one parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamClass {
    /// No modifiers: passes through unchanged
    Plain,
    /// `var`/`final`: becomes a field
    Field(FieldCandidate),
}

impl ParamClass {
    pub fn as_field(&self) -> Option<&FieldCandidate> {
        match self {
            ParamClass::Field(candidate) => Some(candidate),
            ParamClass::Plain => None,
        }
    }
}

/// A parameter that intends to become a field, before validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldCandidate {
    pub storage: StorageKind,
    /// None means the class default visibility
    pub visibility: Option<Visibility>,
}

impl FieldCandidate {
    pub fn visibility_or(&self, default: Visibility) -> Visibility {
        self.visibility.unwrap_or(default)
    }
}

/// Classify a parameter from its modifiers.
///
/// Each modifier group (storage, visibility, static) may appear at most once.
/// `static` is never valid: on a field candidate it cannot be expressed, on a
/// plain parameter it means nothing.
pub fn classify_parameter(param: &Parameter) -> Result<ParamClass, DesugarError> {
    let mut storage: Option<(StorageKind, Modifier)> = None;
    let mut visibility: Option<(Visibility, Modifier)> = None;
    let mut is_static: Option<Modifier> = None;

    for &modifier in &param.modifiers {
        let previous = match modifier.kind {
            ModifierKind::Var | ModifierKind::Final => storage
                .replace((storage_kind(modifier.kind), modifier))
                .map(|(_, m)| m),
            ModifierKind::Public | ModifierKind::Private => visibility
                .replace((visibility_kind(modifier.kind), modifier))
                .map(|(_, m)| m),
            ModifierKind::Static => is_static.replace(modifier),
        };
        if let Some(first) = previous {
            return Err(DesugarError::ConflictingModifiers {
                name: param.name.name.clone(),
                first: first.kind,
                second: modifier.kind,
                span: modifier.span,
            });
        }
    }

    let Some((storage, _)) = storage else {
        // Report whichever stray modifier came first in source order
        return match param.modifiers.first() {
            Some(stray) => Err(DesugarError::ModifierWithoutStorage {
                name: param.name.name.clone(),
                modifier: stray.kind,
                span: stray.span,
            }),
            None => Ok(ParamClass::Plain),
        };
    };

    if let Some(modifier) = is_static {
        return Err(DesugarError::StaticArgumentField {
            name: param.name.name.clone(),
            span: modifier.span,
        });
    }

    Ok(ParamClass::Field(FieldCandidate {
        storage,
        visibility: visibility.map(|(v, _)| v),
    }))
}

/// Classify a whole parameter list, collecting every error
pub fn classify_parameters(params: &[Parameter]) -> Result<Vec<ParamClass>, Vec<DesugarError>> {
    let mut classes = Vec::with_capacity(params.len());
    let mut errors = Vec::new();
    for param in params {
        match classify_parameter(param) {
            Ok(class) => classes.push(class),
            Err(err) => errors.push(err),
        }
    }
    if errors.is_empty() {
        Ok(classes)
    } else {
        Err(errors)
    }
}

fn storage_kind(kind: ModifierKind) -> StorageKind {
    match kind {
        ModifierKind::Final => StorageKind::Final,
        _ => StorageKind::Var,
    }
}

fn visibility_kind(kind: ModifierKind) -> Visibility {
    match kind {
        ModifierKind::Public => Visibility::Public,
        _ => Visibility::Private,
    }
}
