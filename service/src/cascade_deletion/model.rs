use core_types::{DeletionAction, EntityId, EntityKind};
use project::Project;

use crate::cascade_deletion::adapters;
use crate::error::Error;

/// Reference to one concrete project entity, one variant per deletable
/// kind. Dispatch over kinds is a closed match, never type inspection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityRef {
    Actor(EntityId),
    ActorType(EntityId),
    Texture(EntityId),
    Animation(EntityId),
    Sound(EntityId),
    Scene(EntityId),
    Path(EntityId),
    NamedVariable(EntityId),
    ScriptVariable(EntityId),
    VariableSocket(EntityId),
}

impl EntityRef {
    pub fn id(&self) -> EntityId {
        match self {
            EntityRef::Actor(id)
            | EntityRef::ActorType(id)
            | EntityRef::Texture(id)
            | EntityRef::Animation(id)
            | EntityRef::Sound(id)
            | EntityRef::Scene(id)
            | EntityRef::Path(id)
            | EntityRef::NamedVariable(id)
            | EntityRef::ScriptVariable(id)
            | EntityRef::VariableSocket(id) => *id,
        }
    }

    pub fn kind(&self) -> EntityKind {
        match self {
            EntityRef::Actor(_) => EntityKind::Actor,
            EntityRef::ActorType(_) => EntityKind::ActorType,
            EntityRef::Texture(_) => EntityKind::Texture,
            EntityRef::Animation(_) => EntityKind::Animation,
            EntityRef::Sound(_) => EntityKind::Sound,
            EntityRef::Scene(_) => EntityKind::Scene,
            EntityRef::Path(_) => EntityKind::Path,
            EntityRef::NamedVariable(_) => EntityKind::NamedVariable,
            EntityRef::ScriptVariable(_) => EntityKind::ScriptVariable,
            EntityRef::VariableSocket(_) => EntityKind::VariableSocket,
        }
    }
}

/// Identity of one node in an ancestry path. Scripting components carry a
/// synthetic "Variables" grouping node keyed by the component's id, so it
/// needs its own identity space next to real entities.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentId {
    Entity(EntityId),
    VariableGroup(EntityId),
}

#[derive(Debug, Clone, PartialEq)]
pub struct PathSegment {
    pub name: String,
    pub category: Option<String>,
    pub id: SegmentId,
}

impl PathSegment {
    pub fn new(name: &str, category: Option<&str>, id: SegmentId) -> Self {
        Self {
            name: name.to_string(),
            category: category.map(str::to_string),
            id,
        }
    }

    pub fn label(&self) -> String {
        match &self.category {
            Some(category) => format!("{} - {}", category, self.name),
            None => self.name.clone(),
        }
    }
}

/// What committing one item did, for event reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommitEffect {
    pub removed: bool,
}

/// One unit of deletion work: an entity together with the action that will
/// resolve it. Roots are what the user asked to delete (always `Remove`);
/// discovered items carry the targets their dangling references point at so
/// a `Clear` commit knows exactly which slots to null.
#[derive(Debug, Clone, PartialEq)]
pub struct DeletionItem {
    pub name: String,
    pub action: DeletionAction,
    pub(crate) entity: EntityRef,
    pub(crate) targets: Vec<EntityId>,
    pub(crate) removed_descendants: Vec<EntityId>,
}

impl DeletionItem {
    pub fn root(name: &str, entity: EntityRef) -> Self {
        Self {
            name: name.to_string(),
            action: DeletionAction::Remove,
            entity,
            targets: Vec::new(),
            removed_descendants: Vec::new(),
        }
    }

    pub fn discovered(
        name: &str,
        entity: EntityRef,
        action: DeletionAction,
        target: EntityId,
    ) -> Self {
        Self {
            name: name.to_string(),
            action,
            entity,
            targets: vec![target],
            removed_descendants: Vec::new(),
        }
    }

    pub fn identity(&self) -> EntityId {
        self.entity.id()
    }

    pub fn kind(&self) -> EntityKind {
        self.entity.kind()
    }

    pub fn entity(&self) -> EntityRef {
        self.entity
    }

    pub fn targets(&self) -> &[EntityId] {
        &self.targets
    }

    pub fn label(&self) -> String {
        format!("{} - {}", self.kind(), self.name)
    }

    pub(crate) fn merge_targets(&mut self, other: &DeletionItem) {
        for target in &other.targets {
            if !self.targets.contains(target) {
                self.targets.push(*target);
            }
        }
    }

    /// Execute the remove or clear side effect. Must be called at most once
    /// per item; a `Remove` on a container records the detached subtree so
    /// later rounds can still discover references into it.
    pub fn commit(&mut self, project: &mut Project) -> Result<CommitEffect, Error> {
        adapters::commit(self, project)
    }

    /// Append every other entity referencing this one. Read-only; only
    /// invoked for items whose action is `Remove` (a cleared reference
    /// stops being a dependency edge).
    pub fn find_dependents(&self, project: &Project, out: &mut DeletionSet) {
        adapters::find_dependents(self, project, out);
    }

    /// The chain of named containers from the entity up to a project root,
    /// outermost first. Deterministic; used for grouping and for
    /// ancestor-based suppression.
    pub fn ancestry_path(&self, project: &Project) -> Vec<PathSegment> {
        adapters::ancestry_path(self, project)
    }
}

/// Insertion-ordered set of deletion items keyed by entity identity.
///
/// Inserting a second item with the same identity merges its targets into
/// the existing one instead of adding a duplicate; the first insertion
/// keeps its default action. Insertion order is the commit order, so the
/// set stays deterministic.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeletionSet {
    items: Vec<DeletionItem>,
}

impl DeletionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true when the item was newly added, false when it merged
    /// into an existing entry.
    pub fn insert(&mut self, item: DeletionItem) -> bool {
        if let Some(existing) = self.get_mut(item.identity()) {
            existing.merge_targets(&item);
            return false;
        }
        self.items.push(item);
        true
    }

    pub fn contains(&self, identity: EntityId) -> bool {
        self.items.iter().any(|item| item.identity() == identity)
    }

    pub fn get(&self, identity: EntityId) -> Option<&DeletionItem> {
        self.items.iter().find(|item| item.identity() == identity)
    }

    pub fn get_mut(&mut self, identity: EntityId) -> Option<&mut DeletionItem> {
        self.items
            .iter_mut()
            .find(|item| item.identity() == identity)
    }

    pub fn iter(&self) -> impl Iterator<Item = &DeletionItem> {
        self.items.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut DeletionItem> {
        self.items.iter_mut()
    }

    pub fn retain(&mut self, f: impl FnMut(&DeletionItem) -> bool) {
        self.items.retain(f);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn into_vec(self) -> Vec<DeletionItem> {
        self.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_dedups_by_identity_and_merges_targets() {
        let mut set = DeletionSet::new();
        let first = DeletionItem::discovered(
            "Hero",
            EntityRef::Actor(5),
            DeletionAction::Clear,
            10,
        );
        let second = DeletionItem::discovered(
            "Hero",
            EntityRef::Actor(5),
            DeletionAction::Remove,
            11,
        );

        assert!(set.insert(first));
        assert!(!set.insert(second));
        assert_eq!(set.len(), 1);

        let item = set.get(5).unwrap();
        // First insertion wins the action; targets accumulate.
        assert_eq!(item.action, DeletionAction::Clear);
        assert_eq!(item.targets(), &[10, 11]);
    }

    #[test]
    fn test_insert_keeps_distinct_identities() {
        let mut set = DeletionSet::new();
        set.insert(DeletionItem::discovered(
            "A",
            EntityRef::Texture(1),
            DeletionAction::Clear,
            9,
        ));
        set.insert(DeletionItem::discovered(
            "B",
            EntityRef::Sound(2),
            DeletionAction::Clear,
            9,
        ));
        assert_eq!(set.len(), 2);
        assert!(set.contains(1));
        assert!(set.contains(2));
    }

    #[test]
    fn test_root_items_always_remove() {
        let root = DeletionItem::root("Grass", EntityRef::Texture(3));
        assert_eq!(root.action, DeletionAction::Remove);
        assert!(root.targets().is_empty());
    }

    #[test]
    fn test_segment_label() {
        let with_category =
            PathSegment::new("Level One", Some("Scene"), SegmentId::Entity(1));
        assert_eq!(with_category.label(), "Scene - Level One");

        let plain = PathSegment::new("Variables", None, SegmentId::VariableGroup(2));
        assert_eq!(plain.label(), "Variables");
    }

    #[test]
    fn test_item_label() {
        let item = DeletionItem::root("Grass", EntityRef::Texture(3));
        assert_eq!(item.label(), "Texture - Grass");
        let item = DeletionItem::root("Enemy", EntityRef::ActorType(4));
        assert_eq!(item.label(), "Actor Type - Enemy");
    }
}
