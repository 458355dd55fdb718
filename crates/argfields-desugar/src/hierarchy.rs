//! Class table and ancestor field index
//!
//! Classes live in an arena indexed by [`ClassId`]; each entry stores its
//! superclass as an index. Field-name lookups walk that chain explicitly,
//! and [`ClassTable::inheritance_order`] sorts classes so every ancestor is
//! desugared before its descendants.

use argfields_ast::{Module, Span, Statement};
use rustc_hash::FxHashMap;
use tracing::debug;

/// Class identifier (index into the class table)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClassId(u32);

impl ClassId {
    pub fn new(id: u32) -> Self {
        ClassId(id)
    }

    pub fn as_u32(self) -> u32 {
        self.0
    }

    fn index(self) -> usize {
        self.0 as usize
    }
}

/// A field name as seen by collision checks
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldEntry {
    pub name: String,
    pub span: Span,
}

impl FieldEntry {
    pub fn new(name: impl Into<String>, span: Span) -> Self {
        Self {
            name: name.into(),
            span,
        }
    }
}

/// One class in the table
#[derive(Debug, Clone)]
pub struct ClassEntry {
    pub name: String,
    pub span: Span,
    /// Superclass name as written
    pub superclass: Option<String>,
    /// Resolved superclass
    pub parent: Option<ClassId>,
    /// Fields in declaration order, synthesized ones included once added
    pub fields: Vec<FieldEntry>,
    /// Index into `Module::statements`; None for classes registered by the host
    pub statement: Option<usize>,
}

/// Where a visible field name was declared
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldOrigin {
    pub class: ClassId,
    pub class_name: String,
    pub span: Span,
}

/// Field names visible from a class: its own and every ancestor's
#[derive(Debug, Clone, Default)]
pub struct FieldIndex {
    entries: FxHashMap<String, FieldOrigin>,
}

impl FieldIndex {
    pub fn get(&self, name: &str) -> Option<&FieldOrigin> {
        self.entries.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Visible names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

/// Processing order computed from the superclass links
#[derive(Debug, Clone, Default)]
pub struct InheritanceOrder {
    /// Module classes, ancestors before descendants (by depth, then source order)
    pub order: Vec<ClassId>,
    /// Classes whose superclass chain loops back to themselves
    pub cycles: Vec<ClassId>,
    /// Classes whose chain runs into a cycle without being on it
    pub blocked: Vec<ClassId>,
}

#[derive(Debug, Clone, Copy)]
enum Mark {
    Depth(usize),
    Cyclic,
    Blocked,
}

/// Arena of class declarations keyed by name
#[derive(Debug, Clone, Default)]
pub struct ClassTable {
    classes: Vec<ClassEntry>,
    by_name: FxHashMap<String, ClassId>,
    /// (first, repeat) pairs of module classes sharing a name
    duplicates: Vec<(ClassId, ClassId)>,
}

impl ClassTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from the top-level classes of a module
    pub fn from_module(module: &Module) -> Self {
        let mut table = Self::new();
        table.register_module(module);
        table
    }

    /// Register a class compiled elsewhere (already desugared by the host).
    ///
    /// Call [`ClassTable::resolve_parents`] (or `register_module`, which does)
    /// once every class is registered.
    pub fn register_external(
        &mut self,
        name: &str,
        superclass: Option<&str>,
        fields: impl IntoIterator<Item = FieldEntry>,
    ) -> ClassId {
        self.register(ClassEntry {
            name: name.to_string(),
            span: Span::default(),
            superclass: superclass.map(str::to_string),
            parent: None,
            fields: fields.into_iter().collect(),
            statement: None,
        })
    }

    /// Register every top-level class of a module and resolve superclasses.
    ///
    /// Module classes shadow external classes of the same name. A name
    /// repeated within the module keeps resolving to its first declaration;
    /// the repeats are listed by [`ClassTable::duplicate_classes`].
    pub fn register_module(&mut self, module: &Module) {
        let mut seen: FxHashMap<String, ClassId> = FxHashMap::default();
        for (index, stmt) in module.statements.iter().enumerate() {
            if let Statement::ClassDecl(class) = stmt {
                let entry = ClassEntry {
                    name: class.name.name.clone(),
                    span: class.name.span,
                    superclass: class.extends.as_ref().map(|e| e.name.clone()),
                    parent: None,
                    fields: class
                        .fields()
                        .map(|f| FieldEntry::new(f.name.name.clone(), f.name.span))
                        .collect(),
                    statement: Some(index),
                };
                match seen.get(&class.name.name) {
                    Some(&first) => {
                        let id = self.push(entry);
                        self.duplicates.push((first, id));
                    }
                    None => {
                        let id = self.register(entry);
                        seen.insert(class.name.name.clone(), id);
                    }
                }
            }
        }
        self.resolve_parents();
    }

    fn register(&mut self, entry: ClassEntry) -> ClassId {
        let name = entry.name.clone();
        let id = self.push(entry);
        self.by_name.insert(name, id);
        id
    }

    fn push(&mut self, entry: ClassEntry) -> ClassId {
        let id = ClassId::new(self.classes.len() as u32);
        self.classes.push(entry);
        id
    }

    /// Resolve superclass names to ids. Unknown names are treated as roots.
    pub fn resolve_parents(&mut self) {
        for i in 0..self.classes.len() {
            let parent = match &self.classes[i].superclass {
                Some(name) => {
                    let resolved = self.by_name.get(name).copied();
                    if resolved.is_none() {
                        debug!(
                            target: "argfields::desugar",
                            class = %self.classes[i].name,
                            superclass = %name,
                            "superclass not in class table, treating as root"
                        );
                    }
                    resolved
                }
                None => None,
            };
            self.classes[i].parent = parent;
        }
    }

    pub fn get(&self, id: ClassId) -> &ClassEntry {
        &self.classes[id.index()]
    }

    /// Class a name resolves to. For a name declared twice in one module
    /// this is the first declaration.
    pub fn lookup(&self, name: &str) -> Option<ClassId> {
        self.by_name.get(name).copied()
    }

    /// Module classes whose name was already taken, paired with the first
    /// class of that name
    pub fn duplicate_classes(&self) -> &[(ClassId, ClassId)] {
        &self.duplicates
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Record a field on a class (used after synthesis so descendants see it)
    pub fn add_field(&mut self, id: ClassId, field: FieldEntry) {
        self.classes[id.index()].fields.push(field);
    }

    /// Ancestors of a class, nearest first
    pub fn ancestors(&self, id: ClassId) -> AncestorChain<'_> {
        AncestorChain {
            table: self,
            current: self.get(id).parent,
            remaining: self.classes.len(),
        }
    }

    /// Field names declared by the class itself and every ancestor.
    ///
    /// The nearest declaration wins when a name appears more than once.
    pub fn field_index(&self, id: ClassId) -> FieldIndex {
        let mut index = FieldIndex::default();
        for class_id in std::iter::once(id).chain(self.ancestors(id)) {
            let entry = self.get(class_id);
            for field in &entry.fields {
                index
                    .entries
                    .entry(field.name.clone())
                    .or_insert_with(|| FieldOrigin {
                        class: class_id,
                        class_name: entry.name.clone(),
                        span: field.span,
                    });
            }
        }
        index
    }

    /// Sort module classes by inheritance depth and find cycles
    pub fn inheritance_order(&self) -> InheritanceOrder {
        let mut marks: Vec<Option<Mark>> = vec![None; self.classes.len()];

        for start in 0..self.classes.len() {
            if marks[start].is_some() {
                continue;
            }

            let mut path: Vec<usize> = Vec::new();
            let mut positions: FxHashMap<usize, usize> = FxHashMap::default();
            let mut current = Some(start);

            // Walk up until a root, an already-marked class, or a repeat on this path
            let base = loop {
                let Some(i) = current else {
                    break None;
                };
                if let Some(mark) = marks[i] {
                    break Some(Ok(mark));
                }
                if let Some(&pos) = positions.get(&i) {
                    break Some(Err(pos));
                }
                positions.insert(i, path.len());
                path.push(i);
                current = self.classes[i].parent.map(ClassId::index);
            };

            match base {
                None => assign_depths(&mut marks, &path, 0),
                Some(Ok(Mark::Depth(depth))) => assign_depths(&mut marks, &path, depth + 1),
                Some(Ok(Mark::Cyclic | Mark::Blocked)) => {
                    for &i in &path {
                        marks[i] = Some(Mark::Blocked);
                    }
                }
                Some(Err(cycle_start)) => {
                    for (pos, &i) in path.iter().enumerate() {
                        marks[i] = Some(if pos >= cycle_start { Mark::Cyclic } else { Mark::Blocked });
                    }
                }
            }
        }

        let mut result = InheritanceOrder::default();
        let mut ordered: Vec<(usize, usize, ClassId)> = Vec::new();
        for (i, entry) in self.classes.iter().enumerate() {
            let Some(statement) = entry.statement else {
                continue;
            };
            let id = ClassId::new(i as u32);
            match marks[i] {
                Some(Mark::Depth(depth)) => ordered.push((depth, statement, id)),
                Some(Mark::Cyclic) => result.cycles.push(id),
                Some(Mark::Blocked) | None => result.blocked.push(id),
            }
        }
        ordered.sort_unstable();
        result.order = ordered.into_iter().map(|(_, _, id)| id).collect();
        result
    }
}

/// Path is child-first; the last element sits directly on `base_depth`.
fn assign_depths(marks: &mut [Option<Mark>], path: &[usize], base_depth: usize) {
    for (offset, &i) in path.iter().rev().enumerate() {
        marks[i] = Some(Mark::Depth(base_depth + offset));
    }
}

/// Iterator over a class's ancestors, nearest first.
///
/// Bounded by the table size so a cyclic chain cannot loop forever.
pub struct AncestorChain<'a> {
    table: &'a ClassTable,
    current: Option<ClassId>,
    remaining: usize,
}

impl Iterator for AncestorChain<'_> {
    type Item = ClassId;

    fn next(&mut self) -> Option<ClassId> {
        if self.remaining == 0 {
            return None;
        }
        let id = self.current?;
        self.remaining -= 1;
        self.current = self.table.get(id).parent;
        Some(id)
    }
}
