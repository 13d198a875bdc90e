//! Adapters for the visual-scripting entities: named variables, socket
//! connections and the inline variables sockets fall back to.

use core_types::{DeletionAction, EntityId, EntityKind};
use project::{Project, ProjectError};

use crate::cascade_deletion::model::{CommitEffect, DeletionItem};
use crate::error::Error;

pub(crate) fn commit_named_variable(
    project: &mut Project,
    id: EntityId,
    item: &DeletionItem,
) -> Result<CommitEffect, Error> {
    match item.action {
        DeletionAction::Remove => {
            project.remove_named_variable(id)?;
            Ok(CommitEffect { removed: true })
        }
        DeletionAction::Clear => {
            let variable = project
                .named_variable_mut(id)
                .ok_or(ProjectError::not_found(EntityKind::NamedVariable, id))?;
            for target in &item.targets {
                variable.value.clear_reference(*target);
            }
            Ok(CommitEffect { removed: false })
        }
    }
}

/// The inline variable belongs to its socket and cannot be structurally
/// removed; `Remove` degrades to clearing whatever it references.
pub(crate) fn commit_script_variable(
    project: &mut Project,
    id: EntityId,
    item: &DeletionItem,
) -> Result<CommitEffect, Error> {
    let variable = project
        .inline_variable_mut(id)
        .ok_or(ProjectError::not_found(EntityKind::ScriptVariable, id))?;
    match item.action {
        DeletionAction::Remove => {
            variable.value.clear_any_reference();
        }
        DeletionAction::Clear => {
            for target in &item.targets {
                variable.value.clear_reference(*target);
            }
        }
    }
    Ok(CommitEffect { removed: false })
}

/// A socket belongs to its node's shape; resolving it means disconnecting
/// it from the named variable that is going away.
pub(crate) fn commit_socket(
    project: &mut Project,
    id: EntityId,
    item: &DeletionItem,
) -> Result<CommitEffect, Error> {
    let socket = project
        .socket_mut(id)
        .ok_or(ProjectError::not_found(EntityKind::VariableSocket, id))?;
    match item.action {
        DeletionAction::Remove => {
            socket.connection = None;
        }
        DeletionAction::Clear => {
            if socket.connection.is_some_and(|c| item.targets.contains(&c)) {
                socket.connection = None;
            }
        }
    }
    Ok(CommitEffect { removed: false })
}
