use core_types::{EntityId, EntityKind};

use crate::error::ProjectError;
use crate::models::{
    Actor, ActorType, Animation, AnimationFrame, MovementPath, NamedVariable, Scene, ScriptNode,
    ScriptingComponent, Sound, Texture, Variable, VariableSocket, VariableValue,
};

/// Where an actor lives: its scene plus the chain of ancestor actors from
/// the outermost one down to the actor's direct parent.
#[derive(Debug, Clone, PartialEq)]
pub struct ActorAncestry {
    pub scene_id: EntityId,
    pub scene_name: String,
    pub ancestors: Vec<(EntityId, String)>,
}

/// Where a scripting entity (named variable, socket, inline variable)
/// lives inside the graph.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScriptLocation {
    pub actor_id: EntityId,
    pub component_id: EntityId,
    pub node_id: Option<EntityId>,
}

/// The whole in-memory project graph. The deletion engine reads and
/// mutates it through an explicit handle; there is no global state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Project {
    next_id: EntityId,
    pub textures: Vec<Texture>,
    pub animations: Vec<Animation>,
    pub sounds: Vec<Sound>,
    pub actor_types: Vec<ActorType>,
    pub paths: Vec<MovementPath>,
    pub scenes: Vec<Scene>,
}

impl Project {
    pub fn new() -> Self {
        Self::default()
    }

    fn next_id(&mut self) -> EntityId {
        self.next_id += 1;
        self.next_id
    }

    // --- builders ---

    pub fn add_texture(&mut self, name: &str) -> EntityId {
        let id = self.next_id();
        self.textures.push(Texture {
            id,
            name: name.to_string(),
        });
        id
    }

    pub fn add_animation(&mut self, name: &str) -> EntityId {
        let id = self.next_id();
        self.animations.push(Animation {
            id,
            name: name.to_string(),
            frames: Vec::new(),
        });
        id
    }

    pub fn add_frame(
        &mut self,
        animation_id: EntityId,
        texture: EntityId,
        duration_ms: u32,
    ) -> Result<(), ProjectError> {
        let animation = self
            .animation_mut(animation_id)
            .ok_or(ProjectError::not_found(EntityKind::Animation, animation_id))?;
        animation.frames.push(AnimationFrame {
            texture,
            duration_ms,
        });
        Ok(())
    }

    pub fn add_sound(&mut self, name: &str) -> EntityId {
        let id = self.next_id();
        self.sounds.push(Sound {
            id,
            name: name.to_string(),
        });
        id
    }

    pub fn add_actor_type(&mut self, name: &str) -> EntityId {
        let id = self.next_id();
        self.actor_types.push(ActorType {
            id,
            name: name.to_string(),
            drawable: None,
        });
        id
    }

    pub fn add_path(&mut self, name: &str) -> EntityId {
        let id = self.next_id();
        self.paths.push(MovementPath {
            id,
            name: name.to_string(),
        });
        id
    }

    pub fn add_scene(&mut self, name: &str) -> EntityId {
        let id = self.next_id();
        self.scenes.push(Scene {
            id,
            name: name.to_string(),
            actors: Vec::new(),
        });
        id
    }

    pub fn add_actor(&mut self, scene_id: EntityId, name: &str) -> Result<EntityId, ProjectError> {
        let id = self.next_id();
        let actor = Actor::new(id, name);
        let scene = self
            .scene_mut(scene_id)
            .ok_or(ProjectError::not_found(EntityKind::Scene, scene_id))?;
        scene.actors.push(actor);
        Ok(id)
    }

    pub fn add_child_actor(
        &mut self,
        parent_id: EntityId,
        name: &str,
    ) -> Result<EntityId, ProjectError> {
        let id = self.next_id();
        let actor = Actor::new(id, name);
        let parent = self
            .actor_mut(parent_id)
            .ok_or(ProjectError::not_found(EntityKind::Actor, parent_id))?;
        parent.children.push(actor);
        Ok(id)
    }

    /// Attach an empty scripting component to an actor, returning the
    /// component's id.
    pub fn attach_scripting(&mut self, actor_id: EntityId) -> Result<EntityId, ProjectError> {
        let id = self.next_id();
        let actor = self
            .actor_mut(actor_id)
            .ok_or(ProjectError::not_found(EntityKind::Actor, actor_id))?;
        actor.scripting = Some(ScriptingComponent {
            id,
            variables: Vec::new(),
            nodes: Vec::new(),
        });
        Ok(id)
    }

    pub fn add_named_variable(
        &mut self,
        component_id: EntityId,
        name: &str,
        value: VariableValue,
    ) -> Result<EntityId, ProjectError> {
        let id = self.next_id();
        let component = self
            .component_mut(component_id)
            .ok_or(ProjectError::ComponentNotFound { id: component_id })?;
        component.variables.push(NamedVariable {
            id,
            name: name.to_string(),
            value,
        });
        Ok(id)
    }

    pub fn add_script_node(
        &mut self,
        component_id: EntityId,
        name: &str,
    ) -> Result<EntityId, ProjectError> {
        let id = self.next_id();
        let component = self
            .component_mut(component_id)
            .ok_or(ProjectError::ComponentNotFound { id: component_id })?;
        component.nodes.push(ScriptNode {
            id,
            name: name.to_string(),
            sockets: Vec::new(),
        });
        Ok(id)
    }

    /// Add an input socket holding an inline value; allocates ids for both
    /// the socket and its inline variable and returns the socket's id.
    pub fn add_socket(
        &mut self,
        node_id: EntityId,
        name: &str,
        inline_value: VariableValue,
    ) -> Result<EntityId, ProjectError> {
        let socket_id = self.next_id();
        let variable_id = self.next_id();
        let node = self
            .node_mut(node_id)
            .ok_or(ProjectError::NodeNotFound { id: node_id })?;
        node.sockets.push(VariableSocket {
            id: socket_id,
            name: name.to_string(),
            connection: None,
            inline: Variable {
                id: variable_id,
                value: inline_value,
            },
        });
        Ok(socket_id)
    }

    pub fn connect_socket(
        &mut self,
        socket_id: EntityId,
        variable_id: EntityId,
    ) -> Result<(), ProjectError> {
        let socket = self
            .socket_mut(socket_id)
            .ok_or(ProjectError::not_found(EntityKind::VariableSocket, socket_id))?;
        socket.connection = Some(variable_id);
        Ok(())
    }

    // --- lookups ---

    pub fn texture(&self, id: EntityId) -> Option<&Texture> {
        self.textures.iter().find(|t| t.id == id)
    }

    pub fn animation(&self, id: EntityId) -> Option<&Animation> {
        self.animations.iter().find(|a| a.id == id)
    }

    pub fn animation_mut(&mut self, id: EntityId) -> Option<&mut Animation> {
        self.animations.iter_mut().find(|a| a.id == id)
    }

    pub fn sound(&self, id: EntityId) -> Option<&Sound> {
        self.sounds.iter().find(|s| s.id == id)
    }

    pub fn actor_type(&self, id: EntityId) -> Option<&ActorType> {
        self.actor_types.iter().find(|t| t.id == id)
    }

    pub fn actor_type_mut(&mut self, id: EntityId) -> Option<&mut ActorType> {
        self.actor_types.iter_mut().find(|t| t.id == id)
    }

    pub fn path(&self, id: EntityId) -> Option<&MovementPath> {
        self.paths.iter().find(|p| p.id == id)
    }

    pub fn scene(&self, id: EntityId) -> Option<&Scene> {
        self.scenes.iter().find(|s| s.id == id)
    }

    pub fn scene_mut(&mut self, id: EntityId) -> Option<&mut Scene> {
        self.scenes.iter_mut().find(|s| s.id == id)
    }

    pub fn actor(&self, id: EntityId) -> Option<&Actor> {
        self.scenes.iter().find_map(|scene| scene.find_actor(id))
    }

    pub fn actor_mut(&mut self, id: EntityId) -> Option<&mut Actor> {
        self.scenes
            .iter_mut()
            .find_map(|scene| scene.find_actor_mut(id))
    }

    /// Every actor in every scene, nested ones included, in scene order.
    pub fn all_actors(&self) -> Vec<&Actor> {
        let mut actors = Vec::new();
        for scene in &self.scenes {
            for actor in &scene.actors {
                Self::collect_actors(actor, &mut actors);
            }
        }
        actors
    }

    fn collect_actors<'a>(actor: &'a Actor, out: &mut Vec<&'a Actor>) {
        out.push(actor);
        for child in &actor.children {
            Self::collect_actors(child, out);
        }
    }

    /// Every scripting component together with its owning actor.
    pub fn all_components(&self) -> Vec<(&Actor, &ScriptingComponent)> {
        self.all_actors()
            .into_iter()
            .filter_map(|actor| actor.scripting.as_ref().map(|component| (actor, component)))
            .collect()
    }

    /// The chain of containers above an actor, outermost first.
    pub fn actor_ancestry(&self, id: EntityId) -> Option<ActorAncestry> {
        for scene in &self.scenes {
            for actor in &scene.actors {
                let mut chain = Vec::new();
                if Self::find_chain(actor, id, &mut chain) {
                    return Some(ActorAncestry {
                        scene_id: scene.id,
                        scene_name: scene.name.clone(),
                        ancestors: chain,
                    });
                }
            }
        }
        None
    }

    fn find_chain(actor: &Actor, id: EntityId, chain: &mut Vec<(EntityId, String)>) -> bool {
        if actor.id == id {
            return true;
        }
        chain.push((actor.id, actor.name.clone()));
        for child in &actor.children {
            if Self::find_chain(child, id, chain) {
                return true;
            }
        }
        chain.pop();
        false
    }

    pub fn component(&self, id: EntityId) -> Option<&ScriptingComponent> {
        self.all_components()
            .into_iter()
            .find_map(|(_, component)| (component.id == id).then_some(component))
    }

    pub fn component_mut(&mut self, id: EntityId) -> Option<&mut ScriptingComponent> {
        for scene in &mut self.scenes {
            for actor in &mut scene.actors {
                if let Some(component) = Self::component_mut_in(actor, id) {
                    return Some(component);
                }
            }
        }
        None
    }

    fn component_mut_in(actor: &mut Actor, id: EntityId) -> Option<&mut ScriptingComponent> {
        if actor.scripting.as_ref().is_some_and(|c| c.id == id) {
            return actor.scripting.as_mut();
        }
        actor
            .children
            .iter_mut()
            .find_map(|child| Self::component_mut_in(child, id))
    }

    pub fn named_variable(&self, id: EntityId) -> Option<&NamedVariable> {
        self.all_components()
            .into_iter()
            .find_map(|(_, component)| component.variables.iter().find(|v| v.id == id))
    }

    pub fn named_variable_mut(&mut self, id: EntityId) -> Option<&mut NamedVariable> {
        let component_id = self.locate_named_variable(id)?.component_id;
        self.component_mut(component_id)?
            .variables
            .iter_mut()
            .find(|v| v.id == id)
    }

    pub fn node(&self, id: EntityId) -> Option<&ScriptNode> {
        self.all_components()
            .into_iter()
            .find_map(|(_, component)| component.nodes.iter().find(|n| n.id == id))
    }

    pub fn node_mut(&mut self, id: EntityId) -> Option<&mut ScriptNode> {
        let component_id = self
            .all_components()
            .into_iter()
            .find_map(|(_, component)| {
                component
                    .nodes
                    .iter()
                    .any(|n| n.id == id)
                    .then_some(component.id)
            })?;
        self.component_mut(component_id)?
            .nodes
            .iter_mut()
            .find(|n| n.id == id)
    }

    pub fn socket(&self, id: EntityId) -> Option<&VariableSocket> {
        self.all_components().into_iter().find_map(|(_, component)| {
            component
                .nodes
                .iter()
                .find_map(|node| node.sockets.iter().find(|s| s.id == id))
        })
    }

    pub fn socket_mut(&mut self, id: EntityId) -> Option<&mut VariableSocket> {
        let node_id = self.locate_socket(id)?.node_id?;
        self.node_mut(node_id)?
            .sockets
            .iter_mut()
            .find(|s| s.id == id)
    }

    pub fn inline_variable(&self, id: EntityId) -> Option<&Variable> {
        self.all_components().into_iter().find_map(|(_, component)| {
            component.nodes.iter().find_map(|node| {
                node.sockets
                    .iter()
                    .find_map(|s| (s.inline.id == id).then_some(&s.inline))
            })
        })
    }

    pub fn inline_variable_mut(&mut self, id: EntityId) -> Option<&mut Variable> {
        let node_id = self.locate_inline_variable(id)?.node_id?;
        self.node_mut(node_id)?
            .sockets
            .iter_mut()
            .find_map(|s| (s.inline.id == id).then_some(&mut s.inline))
    }

    pub fn locate_named_variable(&self, id: EntityId) -> Option<ScriptLocation> {
        self.all_components()
            .into_iter()
            .find_map(|(actor, component)| {
                component.variables.iter().any(|v| v.id == id).then_some(ScriptLocation {
                    actor_id: actor.id,
                    component_id: component.id,
                    node_id: None,
                })
            })
    }

    pub fn locate_socket(&self, id: EntityId) -> Option<ScriptLocation> {
        self.all_components()
            .into_iter()
            .find_map(|(actor, component)| {
                component.nodes.iter().find_map(|node| {
                    node.sockets.iter().any(|s| s.id == id).then_some(ScriptLocation {
                        actor_id: actor.id,
                        component_id: component.id,
                        node_id: Some(node.id),
                    })
                })
            })
    }

    pub fn locate_inline_variable(&self, id: EntityId) -> Option<ScriptLocation> {
        self.all_components()
            .into_iter()
            .find_map(|(actor, component)| {
                component.nodes.iter().find_map(|node| {
                    node.sockets
                        .iter()
                        .any(|s| s.inline.id == id)
                        .then_some(ScriptLocation {
                            actor_id: actor.id,
                            component_id: component.id,
                            node_id: Some(node.id),
                        })
                })
            })
    }

    // --- structural removal ---

    pub fn remove_texture(&mut self, id: EntityId) -> Result<Texture, ProjectError> {
        let pos = self
            .textures
            .iter()
            .position(|t| t.id == id)
            .ok_or(ProjectError::not_found(EntityKind::Texture, id))?;
        tracing::info!("Removing texture {} from project", id);
        Ok(self.textures.remove(pos))
    }

    pub fn remove_animation(&mut self, id: EntityId) -> Result<Animation, ProjectError> {
        let pos = self
            .animations
            .iter()
            .position(|a| a.id == id)
            .ok_or(ProjectError::not_found(EntityKind::Animation, id))?;
        tracing::info!("Removing animation {} from project", id);
        Ok(self.animations.remove(pos))
    }

    pub fn remove_sound(&mut self, id: EntityId) -> Result<Sound, ProjectError> {
        let pos = self
            .sounds
            .iter()
            .position(|s| s.id == id)
            .ok_or(ProjectError::not_found(EntityKind::Sound, id))?;
        tracing::info!("Removing sound {} from project", id);
        Ok(self.sounds.remove(pos))
    }

    pub fn remove_actor_type(&mut self, id: EntityId) -> Result<ActorType, ProjectError> {
        let pos = self
            .actor_types
            .iter()
            .position(|t| t.id == id)
            .ok_or(ProjectError::not_found(EntityKind::ActorType, id))?;
        tracing::info!("Removing actor type {} from project", id);
        Ok(self.actor_types.remove(pos))
    }

    pub fn remove_path(&mut self, id: EntityId) -> Result<MovementPath, ProjectError> {
        let pos = self
            .paths
            .iter()
            .position(|p| p.id == id)
            .ok_or(ProjectError::not_found(EntityKind::Path, id))?;
        tracing::info!("Removing path {} from project", id);
        Ok(self.paths.remove(pos))
    }

    pub fn remove_scene(&mut self, id: EntityId) -> Result<Scene, ProjectError> {
        let pos = self
            .scenes
            .iter()
            .position(|s| s.id == id)
            .ok_or(ProjectError::not_found(EntityKind::Scene, id))?;
        tracing::info!("Removing scene {} from project", id);
        Ok(self.scenes.remove(pos))
    }

    /// Detach an actor and its whole subtree from wherever it lives.
    pub fn remove_actor(&mut self, id: EntityId) -> Result<Actor, ProjectError> {
        for scene in &mut self.scenes {
            if let Some(pos) = scene.actors.iter().position(|a| a.id == id) {
                tracing::info!("Removing actor {} from scene {}", id, scene.id);
                return Ok(scene.actors.remove(pos));
            }
            for actor in &mut scene.actors {
                if let Some(removed) = Self::remove_child_actor(actor, id) {
                    tracing::info!("Removing actor {} from parent in scene {}", id, scene.id);
                    return Ok(removed);
                }
            }
        }
        Err(ProjectError::not_found(EntityKind::Actor, id))
    }

    fn remove_child_actor(actor: &mut Actor, id: EntityId) -> Option<Actor> {
        if let Some(pos) = actor.children.iter().position(|c| c.id == id) {
            return Some(actor.children.remove(pos));
        }
        actor
            .children
            .iter_mut()
            .find_map(|child| Self::remove_child_actor(child, id))
    }

    pub fn remove_named_variable(&mut self, id: EntityId) -> Result<NamedVariable, ProjectError> {
        let component_id = self
            .locate_named_variable(id)
            .ok_or(ProjectError::not_found(EntityKind::NamedVariable, id))?
            .component_id;
        let component = self
            .component_mut(component_id)
            .ok_or(ProjectError::not_found(EntityKind::NamedVariable, id))?;
        let pos = component
            .variables
            .iter()
            .position(|v| v.id == id)
            .ok_or(ProjectError::not_found(EntityKind::NamedVariable, id))?;
        tracing::info!("Removing variable {} from component {}", id, component_id);
        Ok(component.variables.remove(pos))
    }
}
