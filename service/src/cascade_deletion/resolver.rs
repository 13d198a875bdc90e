//! Dependency closure resolution for one deletion round.

use core_types::{DeletionAction, EntityId};
use project::Project;

use crate::cascade_deletion::model::{DeletionItem, DeletionSet, SegmentId};

/// Compute the set of other entities that must be acted upon when `roots`
/// are deleted: every dependent of every `Remove` root, deduplicated by
/// identity, minus anything already implied by a root's own removal.
///
/// Read-only; safe to call repeatedly on an unmodified graph.
pub fn resolve(project: &Project, roots: &[DeletionItem]) -> DeletionSet {
    let mut found = DeletionSet::new();
    for root in roots {
        if root.action == DeletionAction::Remove {
            tracing::info!("Finding dependents of {}", root.label());
            root.find_dependents(project, &mut found);
        }
    }

    let root_ids: Vec<EntityId> = roots.iter().map(|root| root.identity()).collect();
    found.retain(|item| {
        if root_ids.contains(&item.identity()) {
            return false;
        }
        let suppressed = item.ancestry_path(project).iter().any(
            |segment| matches!(segment.id, SegmentId::Entity(id) if root_ids.contains(&id)),
        );
        if suppressed {
            tracing::info!(
                "Suppressing {}; an ancestor is already being removed",
                item.label()
            );
        }
        !suppressed
    });
    found
}
