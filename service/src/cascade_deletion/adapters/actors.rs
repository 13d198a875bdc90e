//! Adapters for scene-structured entities: actors, actor types, scenes and
//! movement paths.

use core_types::{DeletionAction, EntityId, EntityKind};
use project::{Project, ProjectError};

use super::{scan_graph_references, scan_variable_holders};
use crate::cascade_deletion::model::{CommitEffect, DeletionItem, DeletionSet, EntityRef};
use crate::error::Error;

pub(crate) fn find_actor_dependents(project: &Project, item: &DeletionItem, out: &mut DeletionSet) {
    let id = item.entity().id();
    if let Some(actor) = project.actor(id) {
        // Children hold a structural reference to their parent and cannot
        // exist detached; when the actor is a deletion root they are
        // suppressed again by the resolver since their path passes through
        // it.
        for child in &actor.children {
            out.insert(DeletionItem::discovered(
                &child.name,
                EntityRef::Actor(child.id),
                DeletionAction::Remove,
                id,
            ));
        }
        for target in actor.entity_ids() {
            scan_graph_references(project, target, out);
        }
    } else {
        // Already detached; the recorded subtree still pins down which
        // references went dangling.
        scan_graph_references(project, id, out);
        for target in &item.removed_descendants {
            scan_graph_references(project, *target, out);
        }
    }
}

pub(crate) fn commit_actor(
    project: &mut Project,
    id: EntityId,
    item: &mut DeletionItem,
) -> Result<CommitEffect, Error> {
    match item.action {
        DeletionAction::Remove => {
            let removed = project.remove_actor(id)?;
            item.removed_descendants = removed.entity_ids();
            Ok(CommitEffect { removed: true })
        }
        DeletionAction::Clear => {
            let actor = project
                .actor_mut(id)
                .ok_or(ProjectError::not_found(EntityKind::Actor, id))?;
            for target in &item.targets {
                if actor.drawable.is_some_and(|d| d.references(*target)) {
                    actor.drawable = None;
                }
                if actor.actor_type == Some(*target) {
                    actor.actor_type = None;
                }
                if actor.movement_path == Some(*target) {
                    actor.movement_path = None;
                }
            }
            Ok(CommitEffect { removed: false })
        }
    }
}

pub(crate) fn find_actor_type_dependents(project: &Project, id: EntityId, out: &mut DeletionSet) {
    for actor in project.all_actors() {
        if actor.actor_type == Some(id) {
            out.insert(DeletionItem::discovered(
                &actor.name,
                EntityRef::Actor(actor.id),
                DeletionAction::Clear,
                id,
            ));
        }
    }
    scan_variable_holders(project, id, out);
}

pub(crate) fn commit_actor_type(
    project: &mut Project,
    id: EntityId,
    item: &DeletionItem,
) -> Result<CommitEffect, Error> {
    match item.action {
        DeletionAction::Remove => {
            project.remove_actor_type(id)?;
            Ok(CommitEffect { removed: true })
        }
        DeletionAction::Clear => {
            let actor_type = project
                .actor_type_mut(id)
                .ok_or(ProjectError::not_found(EntityKind::ActorType, id))?;
            if actor_type
                .drawable
                .is_some_and(|d| item.targets.contains(&d.entity_id()))
            {
                actor_type.drawable = None;
            }
            Ok(CommitEffect { removed: false })
        }
    }
}

pub(crate) fn find_scene_dependents(project: &Project, item: &DeletionItem, out: &mut DeletionSet) {
    let id = item.entity().id();
    if let Some(scene) = project.scene(id) {
        // References to the scene itself or to anything living inside it
        // all go dangling when the scene is removed.
        for target in scene.entity_ids() {
            scan_graph_references(project, target, out);
        }
    } else {
        scan_graph_references(project, id, out);
        for target in &item.removed_descendants {
            scan_graph_references(project, *target, out);
        }
    }
}

pub(crate) fn commit_scene(
    project: &mut Project,
    id: EntityId,
    item: &mut DeletionItem,
) -> Result<CommitEffect, Error> {
    match item.action {
        DeletionAction::Remove => {
            let removed = project.remove_scene(id)?;
            item.removed_descendants = removed.entity_ids();
            Ok(CommitEffect { removed: true })
        }
        // A scene is never discovered as a clearable dependent; references
        // to it live in variables, which are their own deletion units.
        DeletionAction::Clear => Ok(CommitEffect { removed: false }),
    }
}

pub(crate) fn find_path_dependents(project: &Project, id: EntityId, out: &mut DeletionSet) {
    for actor in project.all_actors() {
        if actor.movement_path == Some(id) {
            out.insert(DeletionItem::discovered(
                &actor.name,
                EntityRef::Actor(actor.id),
                DeletionAction::Clear,
                id,
            ));
        }
    }
    scan_variable_holders(project, id, out);
}

pub(crate) fn commit_path(
    project: &mut Project,
    id: EntityId,
    action: DeletionAction,
) -> Result<CommitEffect, Error> {
    match action {
        DeletionAction::Remove => {
            project.remove_path(id)?;
            Ok(CommitEffect { removed: true })
        }
        DeletionAction::Clear => Ok(CommitEffect { removed: false }),
    }
}
