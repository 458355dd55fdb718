//! The desugaring pass over a module
//!
//! For each top-level class, in inheritance-depth order: classify constructor
//! parameters, check candidate names against the ancestor field index,
//! synthesize fields, inject assignments. A class with any error is left
//! untouched; unrelated classes are still desugared.

use argfields_ast::{ClassDecl, Identifier, Module, Statement};
use rustc_hash::FxHashSet;
use serde::Serialize;
use tracing::{debug, trace};

use crate::classify::classify_parameters;
use crate::config::DesugarOptions;
use crate::context::check_contexts;
use crate::error::DesugarError;
use crate::hierarchy::{ClassId, ClassTable, FieldEntry, FieldIndex};
use crate::inject::inject_assignments;
use crate::synthesize::{insert_fields, synthesize_field, SynthesizedField};
use crate::validate::check_duplicates;

/// Fields synthesized on one class
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassReport {
    pub class: String,
    pub fields: Vec<SynthesizedField>,
}

/// What a successful run changed
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DesugarReport {
    /// Desugared classes in processing order
    pub classes: Vec<ClassReport>,
}

impl DesugarReport {
    pub fn class(&self, name: &str) -> Option<&ClassReport> {
        self.classes.iter().find(|c| c.class == name)
    }

    /// Total number of synthesized fields
    pub fn field_count(&self) -> usize {
        self.classes.iter().map(|c| c.fields.len()).sum()
    }
}

/// Runs the pass. Holds classes registered by the host (e.g. superclasses
/// compiled in another unit) so their fields take part in collision checks.
#[derive(Debug, Default)]
pub struct Desugarer {
    externals: ClassTable,
}

impl Desugarer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a table of externally declared classes
    pub fn with_class_table(externals: ClassTable) -> Self {
        Self { externals }
    }

    pub fn class_table(&self) -> &ClassTable {
        &self.externals
    }

    pub fn class_table_mut(&mut self) -> &mut ClassTable {
        &mut self.externals
    }

    /// Desugar every argument field in the module.
    ///
    /// Classes that pass validation are rewritten in place even when other
    /// classes fail; the error list covers every failed class.
    pub fn desugar_module(
        &self,
        module: &mut Module,
        options: &DesugarOptions,
    ) -> Result<DesugarReport, Vec<DesugarError>> {
        let context = check_contexts(module);
        let mut errors = context.errors;

        let mut table = self.externals.clone();
        table.register_module(module);
        let order = table.inheritance_order();

        let mut failed: FxHashSet<ClassId> = FxHashSet::default();
        for &(first, repeat) in table.duplicate_classes() {
            let entry = table.get(repeat);
            errors.push(DesugarError::DuplicateClass {
                class: entry.name.clone(),
                original: table.get(first).span,
                duplicate: entry.span,
            });
            failed.insert(repeat);
        }
        for &id in &order.cycles {
            let entry = table.get(id);
            errors.push(DesugarError::CyclicInheritance {
                class: entry.name.clone(),
                span: entry.span,
            });
            failed.insert(id);
        }
        // A blocked class whose chain meets no reported class leads into a
        // cycle made only of host-registered classes; report it instead.
        for &id in &order.blocked {
            let entry = table.get(id);
            let covered = table
                .ancestors(id)
                .any(|a| order.cycles.contains(&a) || order.blocked.contains(&a));
            if covered {
                debug!(
                    target: "argfields::desugar",
                    class = %entry.name,
                    "skipping class that inherits from a cycle"
                );
            } else {
                errors.push(DesugarError::CyclicInheritance {
                    class: entry.name.clone(),
                    span: entry.span,
                });
            }
            failed.insert(id);
        }

        let mut report = DesugarReport::default();
        for id in order.order {
            if failed.contains(&id) {
                continue;
            }
            let Some(statement) = table.get(id).statement else {
                continue;
            };
            if context.failed_statements.contains(&statement) {
                failed.insert(id);
                continue;
            }
            if let Some(ancestor) = table.ancestors(id).find(|a| failed.contains(a)) {
                debug!(
                    target: "argfields::desugar",
                    class = %table.get(id).name,
                    ancestor = %table.get(ancestor).name,
                    "skipping class whose ancestor failed"
                );
                failed.insert(id);
                continue;
            }
            let Some(Statement::ClassDecl(class)) = module.statements.get_mut(statement) else {
                continue;
            };

            let index = table.field_index(id);
            match desugar_class(class, &index, options) {
                Ok(fields) => {
                    for field in &fields {
                        table.add_field(id, FieldEntry::new(field.name.clone(), field.span));
                    }
                    report.classes.push(ClassReport {
                        class: class.name.name.clone(),
                        fields,
                    });
                }
                Err(class_errors) => {
                    debug!(
                        target: "argfields::desugar",
                        class = %class.name.name,
                        errors = class_errors.len(),
                        "class left as parsed"
                    );
                    errors.extend(class_errors);
                    failed.insert(id);
                }
            }
        }

        if errors.is_empty() {
            Ok(report)
        } else {
            Err(errors)
        }
    }
}

/// Desugar a module with no external classes
pub fn desugar_module(
    module: &mut Module,
    options: &DesugarOptions,
) -> Result<DesugarReport, Vec<DesugarError>> {
    Desugarer::new().desugar_module(module, options)
}

/// Rewrite one class. Every check runs before the class is touched, so on
/// error the declaration is exactly as parsed.
pub fn desugar_class(
    class: &mut ClassDecl,
    index: &FieldIndex,
    options: &DesugarOptions,
) -> Result<Vec<SynthesizedField>, Vec<DesugarError>> {
    let class_name = class.name.name.clone();

    let mut constructors = class.constructors();
    let first = constructors.next().map(|c| c.span);
    let extra: Vec<DesugarError> = constructors
        .map(|c| DesugarError::DuplicateConstructor {
            class: class_name.clone(),
            original: first.unwrap_or_default(),
            duplicate: c.span,
        })
        .collect();
    if !extra.is_empty() {
        return Err(extra);
    }

    let Some(ctor) = class.constructor_mut() else {
        return Ok(Vec::new());
    };

    let classes = classify_parameters(&ctor.params)?;
    let duplicates = check_duplicates(&class_name, &ctor.params, &classes, index);
    if !duplicates.is_empty() {
        return Err(duplicates);
    }

    debug!(
        target: "argfields::desugar",
        class = %class_name,
        candidates = classes.iter().filter(|c| c.as_field().is_some()).count(),
        "desugaring constructor"
    );

    let mut fields = Vec::new();
    let mut names: Vec<Identifier> = Vec::new();
    for (param, param_class) in ctor.params.iter_mut().zip(&classes) {
        if let Some(&candidate) = param_class.as_field() {
            let field = synthesize_field(param, candidate, options.default_visibility);
            trace!(
                target: "argfields::desugar",
                class = %class_name,
                field = %field.name.name,
                storage = field.storage.keyword(),
                visibility = field.visibility.keyword(),
                "synthesized field"
            );
            names.push(param.name.clone());
            fields.push(field);
        }
    }
    inject_assignments(ctor, &names);

    let summary = fields.iter().map(SynthesizedField::from).collect();
    insert_fields(&mut class.members, fields, options.field_order);
    Ok(summary)
}
