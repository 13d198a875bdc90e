//! Shared fixture graph for deletion-engine tests.

use core_types::EntityId;
use project::Project;
use project::models::{DrawableAsset, VariableValue};

/// A small but fully wired project: assets, a typed actor with a child and
/// a movement path, and a scripting component with variables, nodes and
/// sockets referencing the assets.
pub(crate) struct TestProject {
    pub project: Project,
    pub grass: EntityId,
    pub dirt: EntityId,
    pub walk: EntityId,
    pub jump_sound: EntityId,
    pub enemy_type: EntityId,
    pub patrol: EntityId,
    pub scene: EntityId,
    pub hero: EntityId,
    pub sword: EntityId,
    pub component: EntityId,
    pub target_variable: EntityId,
    pub draw_node: EntityId,
    pub texture_socket: EntityId,
    pub play_node: EntityId,
    pub sound_socket: EntityId,
    pub sound_inline: EntityId,
}

impl TestProject {
    pub fn new() -> Self {
        let mut project = Project::new();

        let grass = project.add_texture("Grass");
        let dirt = project.add_texture("Dirt");
        let walk = project.add_animation("Walk");
        project.add_frame(walk, grass, 100).unwrap();
        project.add_frame(walk, dirt, 100).unwrap();
        let jump_sound = project.add_sound("Jump");
        let enemy_type = project.add_actor_type("Enemy");
        project.actor_type_mut(enemy_type).unwrap().drawable =
            Some(DrawableAsset::Texture(grass));
        let patrol = project.add_path("Patrol");

        let scene = project.add_scene("Level One");
        let hero = project.add_actor(scene, "Hero").unwrap();
        let sword = project.add_child_actor(hero, "Sword").unwrap();
        {
            let actor = project.actor_mut(hero).unwrap();
            actor.drawable = Some(DrawableAsset::Texture(grass));
            actor.actor_type = Some(enemy_type);
            actor.movement_path = Some(patrol);
        }

        let component = project.attach_scripting(hero).unwrap();
        let target_variable = project
            .add_named_variable(component, "Target Texture", VariableValue::Texture(Some(grass)))
            .unwrap();

        let draw_node = project.add_script_node(component, "Draw Sprite").unwrap();
        let texture_socket = project
            .add_socket(draw_node, "Texture", VariableValue::Texture(None))
            .unwrap();
        project.connect_socket(texture_socket, target_variable).unwrap();

        let play_node = project.add_script_node(component, "Play Sound").unwrap();
        let sound_socket = project
            .add_socket(play_node, "Sound", VariableValue::Sound(Some(jump_sound)))
            .unwrap();
        let sound_inline = project.socket(sound_socket).unwrap().inline.id;

        Self {
            project,
            grass,
            dirt,
            walk,
            jump_sound,
            enemy_type,
            patrol,
            scene,
            hero,
            sword,
            component,
            target_variable,
            draw_node,
            texture_socket,
            play_node,
            sound_socket,
            sound_inline,
        }
    }
}
