pub mod error;
pub mod models;

mod graph;

pub use error::ProjectError;
pub use graph::{ActorAncestry, Project, ScriptLocation};
