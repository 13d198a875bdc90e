pub mod events;

use serde::{Deserialize, Serialize};
use strum_macros::Display;

/// Identity of a project entity. Unique within one project; allocated from a
/// single project-wide counter so ids of different kinds never collide.
pub type EntityId = i64;

/// What committing a deletion item does to the underlying entity.
///
/// `Remove` detaches the entity from its owning collection, `Clear` only
/// nulls the dangling reference inside the referencing entity. Entities the
/// user asked to delete directly are always `Remove`; discovered dependents
/// default to a kind-specific action, typically `Clear`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize)]
pub enum DeletionAction {
    Remove,
    Clear,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize)]
pub enum EntityKind {
    Actor,
    #[strum(serialize = "Actor Type")]
    ActorType,
    Texture,
    Animation,
    Sound,
    Scene,
    Path,
    #[strum(serialize = "Variable")]
    NamedVariable,
    #[strum(serialize = "Script Variable")]
    ScriptVariable,
    #[strum(serialize = "Socket")]
    VariableSocket,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_kind_display() {
        assert_eq!(EntityKind::Texture.to_string(), "Texture");
        assert_eq!(EntityKind::ActorType.to_string(), "Actor Type");
        assert_eq!(EntityKind::NamedVariable.to_string(), "Variable");
        assert_eq!(EntityKind::VariableSocket.to_string(), "Socket");
    }

    #[test]
    fn test_deletion_action_display() {
        assert_eq!(DeletionAction::Remove.to_string(), "Remove");
        assert_eq!(DeletionAction::Clear.to_string(), "Clear");
    }
}
