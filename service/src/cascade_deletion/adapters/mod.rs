//! Per-kind adapters between the deletion engine and the project graph.
//!
//! Each adapter is a mechanical enumeration over the relevant collections:
//! `find_dependents` scans for entities holding a reference to the target
//! identity, `commit` executes the remove or clear side effect, and
//! `ancestry_path` builds the container chain used for grouping and
//! ancestor suppression.

pub mod actors;
pub mod assets;
pub mod scripting;

use core_types::{DeletionAction, EntityId};
use project::{Project, ScriptLocation};

use crate::cascade_deletion::model::{
    CommitEffect, DeletionItem, DeletionSet, EntityRef, PathSegment, SegmentId,
};
use crate::error::Error;

pub(crate) fn commit(item: &mut DeletionItem, project: &mut Project) -> Result<CommitEffect, Error> {
    tracing::info!(
        "Committing {} for {} (id {})",
        item.action,
        item.label(),
        item.identity()
    );
    match item.entity {
        EntityRef::Texture(id) => assets::commit_texture(project, id, item.action),
        EntityRef::Animation(id) => assets::commit_animation(project, id, item),
        EntityRef::Sound(id) => assets::commit_sound(project, id, item.action),
        EntityRef::Actor(id) => actors::commit_actor(project, id, item),
        EntityRef::ActorType(id) => actors::commit_actor_type(project, id, item),
        EntityRef::Scene(id) => actors::commit_scene(project, id, item),
        EntityRef::Path(id) => actors::commit_path(project, id, item.action),
        EntityRef::NamedVariable(id) => scripting::commit_named_variable(project, id, item),
        EntityRef::ScriptVariable(id) => scripting::commit_script_variable(project, id, item),
        EntityRef::VariableSocket(id) => scripting::commit_socket(project, id, item),
    }
}

pub(crate) fn find_dependents(item: &DeletionItem, project: &Project, out: &mut DeletionSet) {
    match item.entity {
        EntityRef::Texture(id) => assets::find_texture_dependents(project, id, out),
        EntityRef::Animation(id) => assets::find_animation_dependents(project, id, out),
        EntityRef::Sound(id) => scan_variable_holders(project, id, out),
        EntityRef::Actor(_) => actors::find_actor_dependents(project, item, out),
        EntityRef::ActorType(id) => actors::find_actor_type_dependents(project, id, out),
        EntityRef::Scene(_) => actors::find_scene_dependents(project, item, out),
        EntityRef::Path(id) => actors::find_path_dependents(project, id, out),
        EntityRef::NamedVariable(id) => scan_socket_connections(project, id, out),
        // Nothing in the graph references a socket or its inline variable.
        EntityRef::ScriptVariable(_) | EntityRef::VariableSocket(_) => {}
    }
}

pub(crate) fn ancestry_path(item: &DeletionItem, project: &Project) -> Vec<PathSegment> {
    match item.entity {
        EntityRef::Texture(_)
        | EntityRef::Animation(_)
        | EntityRef::Sound(_)
        | EntityRef::ActorType(_)
        | EntityRef::Scene(_)
        | EntityRef::Path(_) => Vec::new(),
        EntityRef::Actor(id) => actor_segments(project, id, false),
        EntityRef::NamedVariable(id) => project
            .locate_named_variable(id)
            .map(|location| scripting_segments(project, &location))
            .unwrap_or_default(),
        EntityRef::ScriptVariable(id) => project
            .locate_inline_variable(id)
            .map(|location| scripting_segments(project, &location))
            .unwrap_or_default(),
        EntityRef::VariableSocket(id) => project
            .locate_socket(id)
            .map(|location| scripting_segments(project, &location))
            .unwrap_or_default(),
    }
}

/// Named variables and inline socket variables whose value references
/// `target`. The named variable itself is the deletion unit for the former;
/// the socket's inline variable for the latter.
pub(crate) fn scan_variable_holders(project: &Project, target: EntityId, out: &mut DeletionSet) {
    for (_, component) in project.all_components() {
        for variable in &component.variables {
            if variable.value.references(target) {
                out.insert(DeletionItem::discovered(
                    &variable.name,
                    EntityRef::NamedVariable(variable.id),
                    DeletionAction::Clear,
                    target,
                ));
            }
        }
        for node in &component.nodes {
            for socket in &node.sockets {
                if socket.inline.value.references(target) {
                    out.insert(DeletionItem::discovered(
                        &socket.name,
                        EntityRef::ScriptVariable(socket.inline.id),
                        DeletionAction::Clear,
                        target,
                    ));
                }
            }
        }
    }
}

/// Sockets connected to the named variable `target`.
pub(crate) fn scan_socket_connections(project: &Project, target: EntityId, out: &mut DeletionSet) {
    for (_, component) in project.all_components() {
        for node in &component.nodes {
            for socket in &node.sockets {
                if socket.connection == Some(target) {
                    out.insert(DeletionItem::discovered(
                        &socket.name,
                        EntityRef::VariableSocket(socket.id),
                        DeletionAction::Clear,
                        target,
                    ));
                }
            }
        }
    }
}

/// Actors and actor types drawn with the asset `target`.
pub(crate) fn scan_drawable_users(project: &Project, target: EntityId, out: &mut DeletionSet) {
    for actor in project.all_actors() {
        if actor.drawable.is_some_and(|d| d.references(target)) {
            out.insert(DeletionItem::discovered(
                &actor.name,
                EntityRef::Actor(actor.id),
                DeletionAction::Clear,
                target,
            ));
        }
    }
    for actor_type in &project.actor_types {
        if actor_type.drawable.is_some_and(|d| d.references(target)) {
            out.insert(DeletionItem::discovered(
                &actor_type.name,
                EntityRef::ActorType(actor_type.id),
                DeletionAction::Clear,
                target,
            ));
        }
    }
}

/// Everything anywhere in the graph holding a reference to `target`,
/// whatever container it lives in. Used when whole subtrees go away.
pub(crate) fn scan_graph_references(project: &Project, target: EntityId, out: &mut DeletionSet) {
    scan_variable_holders(project, target, out);
    scan_socket_connections(project, target, out);
}

/// Container segments above an actor: its scene, then ancestor actors,
/// optionally the actor itself.
pub(crate) fn actor_segments(
    project: &Project,
    actor_id: EntityId,
    include_self: bool,
) -> Vec<PathSegment> {
    let Some(ancestry) = project.actor_ancestry(actor_id) else {
        return Vec::new();
    };
    let mut segments = vec![PathSegment::new(
        &ancestry.scene_name,
        Some("Scene"),
        SegmentId::Entity(ancestry.scene_id),
    )];
    for (id, name) in &ancestry.ancestors {
        segments.push(PathSegment::new(
            name,
            Some("Actor"),
            SegmentId::Entity(*id),
        ));
    }
    if include_self && let Some(actor) = project.actor(actor_id) {
        segments.push(PathSegment::new(
            &actor.name,
            Some("Actor"),
            SegmentId::Entity(actor.id),
        ));
    }
    segments
}

/// Container segments above a scripting entity: the owning actor's path,
/// the scripting component, then either the script node or the synthetic
/// "Variables" group.
pub(crate) fn scripting_segments(project: &Project, location: &ScriptLocation) -> Vec<PathSegment> {
    let mut segments = actor_segments(project, location.actor_id, true);
    segments.push(PathSegment::new(
        "Scripting",
        None,
        SegmentId::Entity(location.component_id),
    ));
    match location.node_id {
        Some(node_id) => {
            let name = project
                .node(node_id)
                .map(|node| node.name.clone())
                .unwrap_or_default();
            segments.push(PathSegment::new(
                &name,
                Some("Node"),
                SegmentId::Entity(node_id),
            ));
        }
        None => segments.push(PathSegment::new(
            "Variables",
            None,
            SegmentId::VariableGroup(location.component_id),
        )),
    }
    segments
}
