use core_types::EntityId;

#[derive(Debug, Clone, PartialEq)]
pub struct Texture {
    pub id: EntityId,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Sound {
    pub id: EntityId,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnimationFrame {
    pub texture: EntityId,
    pub duration_ms: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Animation {
    pub id: EntityId,
    pub name: String,
    pub frames: Vec<AnimationFrame>,
}

/// An asset an actor or actor type is drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawableAsset {
    Texture(EntityId),
    Animation(EntityId),
}

impl DrawableAsset {
    pub fn entity_id(&self) -> EntityId {
        match self {
            DrawableAsset::Texture(id) => *id,
            DrawableAsset::Animation(id) => *id,
        }
    }

    pub fn references(&self, id: EntityId) -> bool {
        self.entity_id() == id
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ActorType {
    pub id: EntityId,
    pub name: String,
    pub drawable: Option<DrawableAsset>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MovementPath {
    pub id: EntityId,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub id: EntityId,
    pub name: String,
    pub actors: Vec<Actor>,
}

impl Scene {
    pub fn find_actor(&self, id: EntityId) -> Option<&Actor> {
        self.actors.iter().find_map(|actor| actor.find(id))
    }

    pub fn find_actor_mut(&mut self, id: EntityId) -> Option<&mut Actor> {
        self.actors.iter_mut().find_map(|actor| actor.find_mut(id))
    }

    /// Identities of the scene and everything it contains, used when the
    /// whole scene is detached and references into it must still be found.
    pub fn entity_ids(&self) -> Vec<EntityId> {
        let mut ids = vec![self.id];
        for actor in &self.actors {
            ids.extend(actor.entity_ids());
        }
        ids
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Actor {
    pub id: EntityId,
    pub name: String,
    pub actor_type: Option<EntityId>,
    pub drawable: Option<DrawableAsset>,
    pub movement_path: Option<EntityId>,
    pub children: Vec<Actor>,
    pub scripting: Option<ScriptingComponent>,
}

impl Actor {
    pub fn new(id: EntityId, name: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            actor_type: None,
            drawable: None,
            movement_path: None,
            children: Vec::new(),
            scripting: None,
        }
    }

    pub fn find(&self, id: EntityId) -> Option<&Actor> {
        if self.id == id {
            Some(self)
        } else {
            self.children.iter().find_map(|child| child.find(id))
        }
    }

    pub fn find_mut(&mut self, id: EntityId) -> Option<&mut Actor> {
        if self.id == id {
            Some(self)
        } else {
            self.children.iter_mut().find_map(|child| child.find_mut(id))
        }
    }

    /// Identities of the actor and everything it contains: descendant
    /// actors, scripting components, variables, nodes, sockets and inline
    /// variables.
    pub fn entity_ids(&self) -> Vec<EntityId> {
        let mut ids = vec![self.id];
        if let Some(component) = &self.scripting {
            ids.extend(component.entity_ids());
        }
        for child in &self.children {
            ids.extend(child.entity_ids());
        }
        ids
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScriptingComponent {
    pub id: EntityId,
    pub variables: Vec<NamedVariable>,
    pub nodes: Vec<ScriptNode>,
}

impl ScriptingComponent {
    pub fn entity_ids(&self) -> Vec<EntityId> {
        let mut ids = vec![self.id];
        for variable in &self.variables {
            ids.push(variable.id);
        }
        for node in &self.nodes {
            ids.push(node.id);
            for socket in &node.sockets {
                ids.push(socket.id);
                ids.push(socket.inline.id);
            }
        }
        ids
    }
}

/// A variable the user declared on a scripting component, connectable to
/// node sockets by name.
#[derive(Debug, Clone, PartialEq)]
pub struct NamedVariable {
    pub id: EntityId,
    pub name: String,
    pub value: VariableValue,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScriptNode {
    pub id: EntityId,
    pub name: String,
    pub sockets: Vec<VariableSocket>,
}

/// An input socket on a script node. When `connection` is set the socket
/// reads the named variable it points at; otherwise it falls back to its
/// own inline variable.
#[derive(Debug, Clone, PartialEq)]
pub struct VariableSocket {
    pub id: EntityId,
    pub name: String,
    pub connection: Option<EntityId>,
    pub inline: Variable,
}

/// The inline value a socket owns. It has its own identity so the deletion
/// engine can address it independently of the socket's connection.
#[derive(Debug, Clone, PartialEq)]
pub struct Variable {
    pub id: EntityId,
    pub value: VariableValue,
}

#[derive(Debug, Clone, PartialEq)]
pub enum VariableValue {
    Number(f64),
    Text(String),
    Flag(bool),
    Texture(Option<EntityId>),
    Animation(Option<EntityId>),
    Sound(Option<EntityId>),
    Actor(Option<EntityId>),
    ActorType(Option<EntityId>),
    Scene(Option<EntityId>),
    Path(Option<EntityId>),
}

impl VariableValue {
    pub fn referenced_entity(&self) -> Option<EntityId> {
        match self {
            VariableValue::Number(_) | VariableValue::Text(_) | VariableValue::Flag(_) => None,
            VariableValue::Texture(id)
            | VariableValue::Animation(id)
            | VariableValue::Sound(id)
            | VariableValue::Actor(id)
            | VariableValue::ActorType(id)
            | VariableValue::Scene(id)
            | VariableValue::Path(id) => *id,
        }
    }

    pub fn references(&self, id: EntityId) -> bool {
        self.referenced_entity() == Some(id)
    }

    /// Null the reference slot when it points at `id`. Returns whether a
    /// reference was cleared.
    pub fn clear_reference(&mut self, id: EntityId) -> bool {
        if !self.references(id) {
            return false;
        }
        self.clear_any_reference()
    }

    /// Null the reference slot whatever it points at. Returns whether a
    /// reference was cleared.
    pub fn clear_any_reference(&mut self) -> bool {
        match self {
            VariableValue::Number(_) | VariableValue::Text(_) | VariableValue::Flag(_) => false,
            VariableValue::Texture(id)
            | VariableValue::Animation(id)
            | VariableValue::Sound(id)
            | VariableValue::Actor(id)
            | VariableValue::ActorType(id)
            | VariableValue::Scene(id)
            | VariableValue::Path(id) => id.take().is_some(),
        }
    }
}
