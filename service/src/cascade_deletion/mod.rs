//! Cascading consistency-preserving deletion.
//!
//! Removing one entity from the project graph must leave every other entity
//! consistent: everything referencing it is either removed as well or has
//! the dangling reference cleared. The workflow runs in rounds: resolve the
//! dependency closure, present it for review, commit, then resolve again
//! seeded with what was just committed, until nothing new is discovered.
//! Only the first round can be cancelled; committed rounds are final.

pub mod adapters;
pub mod controller;
pub mod model;
pub mod resolver;
pub mod tree;

#[cfg(test)]
pub(crate) mod test_fixtures;

pub use controller::{CascadeController, ControllerState, DeletionRound};
pub use model::{CommitEffect, DeletionItem, DeletionSet, EntityRef, PathSegment, SegmentId};
pub use resolver::resolve;
pub use tree::{DisplayNode, build_forest};
