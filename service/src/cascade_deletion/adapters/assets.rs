//! Adapters for the top-level assets: textures, animations and sounds.

use core_types::{DeletionAction, EntityId, EntityKind};
use project::{Project, ProjectError};

use super::{scan_drawable_users, scan_variable_holders};
use crate::cascade_deletion::model::{CommitEffect, DeletionItem, DeletionSet, EntityRef};
use crate::error::Error;

pub(crate) fn find_texture_dependents(project: &Project, id: EntityId, out: &mut DeletionSet) {
    for animation in &project.animations {
        if animation.frames.iter().any(|frame| frame.texture == id) {
            out.insert(DeletionItem::discovered(
                &animation.name,
                EntityRef::Animation(animation.id),
                DeletionAction::Clear,
                id,
            ));
        }
    }
    scan_drawable_users(project, id, out);
    scan_variable_holders(project, id, out);
}

pub(crate) fn find_animation_dependents(project: &Project, id: EntityId, out: &mut DeletionSet) {
    scan_drawable_users(project, id, out);
    scan_variable_holders(project, id, out);
}

pub(crate) fn commit_texture(
    project: &mut Project,
    id: EntityId,
    action: DeletionAction,
) -> Result<CommitEffect, Error> {
    match action {
        DeletionAction::Remove => {
            project.remove_texture(id)?;
            Ok(CommitEffect { removed: true })
        }
        // A texture holds no outbound references of its own.
        DeletionAction::Clear => Ok(CommitEffect { removed: false }),
    }
}

pub(crate) fn commit_animation(
    project: &mut Project,
    id: EntityId,
    item: &DeletionItem,
) -> Result<CommitEffect, Error> {
    match item.action {
        DeletionAction::Remove => {
            project.remove_animation(id)?;
            Ok(CommitEffect { removed: true })
        }
        DeletionAction::Clear => {
            let animation = project
                .animation_mut(id)
                .ok_or(ProjectError::not_found(EntityKind::Animation, id))?;
            let before = animation.frames.len();
            animation
                .frames
                .retain(|frame| !item.targets.contains(&frame.texture));
            tracing::info!(
                "Cleared {} frame(s) from animation {}",
                before - animation.frames.len(),
                id
            );
            Ok(CommitEffect { removed: false })
        }
    }
}

pub(crate) fn commit_sound(
    project: &mut Project,
    id: EntityId,
    action: DeletionAction,
) -> Result<CommitEffect, Error> {
    match action {
        DeletionAction::Remove => {
            project.remove_sound(id)?;
            Ok(CommitEffect { removed: true })
        }
        DeletionAction::Clear => Ok(CommitEffect { removed: false }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cascade_deletion::test_fixtures::TestProject;

    #[test]
    fn test_texture_dependents_cover_frames_drawables_and_variables() {
        let TestProject {
            project,
            grass,
            walk,
            hero,
            target_variable,
            ..
        } = TestProject::new();

        let mut out = DeletionSet::new();
        find_texture_dependents(&project, grass, &mut out);

        // Walk animation frames, the hero's drawable and the scripted
        // texture variable all reference the grass texture.
        assert!(out.contains(walk));
        assert!(out.contains(hero));
        assert!(out.contains(target_variable));
        assert!(
            out.iter()
                .all(|item| item.action == DeletionAction::Clear)
        );
        assert!(out.iter().all(|item| item.targets() == [grass]));
    }

    #[test]
    fn test_animation_clear_drops_only_target_frames() {
        let TestProject {
            mut project,
            grass,
            dirt,
            walk,
            ..
        } = TestProject::new();

        let mut item =
            DeletionItem::discovered("Walk", EntityRef::Animation(walk), DeletionAction::Clear, grass);
        let effect = item.commit(&mut project).unwrap();

        assert!(!effect.removed);
        let frames = &project.animation(walk).unwrap().frames;
        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0].texture, dirt);
    }

    #[test]
    fn test_animation_remove_detaches_it() {
        let TestProject {
            mut project, walk, ..
        } = TestProject::new();

        let mut item = DeletionItem::root("Walk", EntityRef::Animation(walk));
        let effect = item.commit(&mut project).unwrap();

        assert!(effect.removed);
        assert!(project.animation(walk).is_none());
    }

    #[test]
    fn test_commit_missing_texture_fails() {
        let mut project = Project::new();
        let mut item = DeletionItem::root("Ghost", EntityRef::Texture(99));
        assert!(matches!(
            item.commit(&mut project),
            Err(Error::ProjectError(_))
        ));
    }
}
