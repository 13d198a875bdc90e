use core_types::{EntityId, EntityKind};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProjectError {
    #[error("{kind} with id {id} not found")]
    NotFound { kind: EntityKind, id: EntityId },
    #[error("scripting component with id {id} not found")]
    ComponentNotFound { id: EntityId },
    #[error("script node with id {id} not found")]
    NodeNotFound { id: EntityId },
}

impl ProjectError {
    pub fn not_found(kind: EntityKind, id: EntityId) -> Self {
        ProjectError::NotFound { kind, id }
    }
}
