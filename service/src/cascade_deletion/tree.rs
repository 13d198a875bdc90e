//! Review forest: the resolved deletion set arranged by container ancestry
//! so the same scene or actor is shown once with its affected entities
//! nested under it.

use core_types::EntityId;
use project::Project;

use crate::cascade_deletion::model::{DeletionItem, DeletionSet, PathSegment, SegmentId};

/// One node of the review forest. Container nodes carry a segment identity
/// and no item; leaf nodes carry the identity of the deletion item they
/// stand for.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayNode {
    pub label: String,
    pub segment: Option<SegmentId>,
    pub item: Option<EntityId>,
    pub children: Vec<DisplayNode>,
}

impl DisplayNode {
    fn container(segment: &PathSegment) -> Self {
        Self {
            label: segment.label(),
            segment: Some(segment.id),
            item: None,
            children: Vec::new(),
        }
    }

    fn leaf(item: &DeletionItem) -> Self {
        Self {
            label: item.label(),
            segment: None,
            item: Some(item.identity()),
            children: Vec::new(),
        }
    }
}

/// Arrange `items` into a forest keyed by their ancestry paths. Sibling
/// containers merge on segment identity, never on display name, so two
/// scenes that happen to share a name stay apart. Item order within a
/// container follows insertion order of the set.
pub fn build_forest(project: &Project, items: &DeletionSet) -> Vec<DisplayNode> {
    let mut forest: Vec<DisplayNode> = Vec::new();
    for item in items.iter() {
        let mut level = &mut forest;
        for segment in item.ancestry_path(project) {
            let pos = ensure_container(level, &segment);
            level = &mut level[pos].children;
        }
        level.push(DisplayNode::leaf(item));
    }
    forest
}

fn ensure_container(nodes: &mut Vec<DisplayNode>, segment: &PathSegment) -> usize {
    if let Some(pos) = nodes
        .iter()
        .position(|node| node.segment == Some(segment.id))
    {
        return pos;
    }
    nodes.push(DisplayNode::container(segment));
    nodes.len() - 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cascade_deletion::model::EntityRef;
    use crate::cascade_deletion::resolver::resolve;
    use crate::cascade_deletion::test_fixtures::TestProject;
    use project::models::VariableValue;

    fn find<'a>(nodes: &'a [DisplayNode], label: &str) -> &'a DisplayNode {
        nodes
            .iter()
            .find(|node| node.label == label)
            .unwrap_or_else(|| panic!("no node labelled {label}"))
    }

    #[test]
    fn test_variables_of_one_component_share_one_group_node() {
        let TestProject {
            mut project,
            grass,
            component,
            ..
        } = TestProject::new();

        // Two named variables on the hero's component both reference the
        // grass texture.
        project
            .add_named_variable(component, "Backup Texture", VariableValue::Texture(Some(grass)))
            .unwrap();

        let roots = vec![DeletionItem::root("Grass", EntityRef::Texture(grass))];
        let resolved = resolve(&project, &roots);
        let forest = build_forest(&project, &resolved);

        let scene = find(&forest, "Scene - Level One");
        let actor = find(&scene.children, "Actor - Hero");
        let scripting = find(&actor.children, "Scripting");
        let variables = find(&scripting.children, "Variables");

        assert_eq!(
            scripting
                .children
                .iter()
                .filter(|node| node.segment == Some(SegmentId::VariableGroup(component)))
                .count(),
            1
        );
        assert_eq!(variables.children.len(), 2);
        assert!(variables.children.iter().all(|node| node.item.is_some()));
    }

    #[test]
    fn test_node_scoped_items_nest_under_their_node() {
        let TestProject {
            project,
            jump_sound,
            draw_node,
            play_node,
            sound_socket,
            sound_inline,
            ..
        } = TestProject::new();

        let roots = vec![DeletionItem::root("Jump", EntityRef::Sound(jump_sound))];
        let resolved = resolve(&project, &roots);
        // The inline variable is the deletion unit, not its socket.
        assert!(resolved.contains(sound_inline));
        assert!(!resolved.contains(sound_socket));

        let forest = build_forest(&project, &resolved);
        let scene = find(&forest, "Scene - Level One");
        let actor = find(&scene.children, "Actor - Hero");
        let scripting = find(&actor.children, "Scripting");
        let node = find(&scripting.children, "Node - Play Sound");

        assert_eq!(node.segment, Some(SegmentId::Entity(play_node)));
        assert_eq!(node.children.len(), 1);
        assert_eq!(node.children[0].item, Some(sound_inline));
        // The unaffected draw node contributes no container.
        assert!(
            scripting
                .children
                .iter()
                .all(|child| child.segment != Some(SegmentId::Entity(draw_node)))
        );
    }

    #[test]
    fn test_rootless_items_become_forest_roots() {
        let TestProject {
            project,
            grass,
            walk,
            hero,
            ..
        } = TestProject::new();

        let roots = vec![DeletionItem::root("Grass", EntityRef::Texture(grass))];
        let resolved = resolve(&project, &roots);
        let forest = build_forest(&project, &resolved);

        // The animation has no container; the actor sits under its scene.
        let animation = find(&forest, "Animation - Walk");
        assert_eq!(animation.item, Some(walk));
        let scene = find(&forest, "Scene - Level One");
        assert!(find(&scene.children, "Actor - Hero").item == Some(hero));
    }

    #[test]
    fn test_same_name_containers_stay_apart() {
        let TestProject {
            mut project,
            grass,
            ..
        } = TestProject::new();

        // Two scenes with the same name, each with an actor drawing the
        // grass texture.
        let town_a = project.add_scene("Town");
        let town_b = project.add_scene("Town");
        for scene in [town_a, town_b] {
            let actor = project.add_actor(scene, "Villager").unwrap();
            project.actor_mut(actor).unwrap().drawable =
                Some(project::models::DrawableAsset::Texture(grass));
        }

        let roots = vec![DeletionItem::root("Grass", EntityRef::Texture(grass))];
        let resolved = resolve(&project, &roots);
        let forest = build_forest(&project, &resolved);

        let towns: Vec<_> = forest
            .iter()
            .filter(|node| node.label == "Scene - Town")
            .collect();
        assert_eq!(towns.len(), 2);
        assert_ne!(towns[0].segment, towns[1].segment);
    }
}
