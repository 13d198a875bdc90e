//! Round-based commit workflow over the resolver.
//!
//! One controller drives one deletion from start to finish. The first round
//! is resolved from the user's roots and presented for review; confirming
//! commits it and resolves again, seeded with what was just committed,
//! until a round discovers nothing new. Committed rounds are never rolled
//! back, so cancellation is only offered before the first commit.

use std::sync::Arc;

use core_types::events::DeletionEvent;
use core_types::{DeletionAction, EntityId};
use project::Project;

use crate::cascade_deletion::model::{DeletionItem, DeletionSet};
use crate::cascade_deletion::resolver::resolve;
use crate::cascade_deletion::tree::{DisplayNode, build_forest};
use crate::change_listener::{ChangeListener, NoopChangeListener};
use crate::error::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerState {
    Ready,
    AwaitingReview,
    Committing,
    Resolved,
    Cancelled,
}

/// One reviewable batch of discovered items. Roots are held by the
/// controller and are not part of the review; their removal is the
/// premise of the round, not a choice.
#[derive(Debug, Clone)]
pub struct DeletionRound {
    pub number: u32,
    pub items: DeletionSet,
    pub forest: Vec<DisplayNode>,
    pub summary: String,
    pub cancelable: bool,
}

pub struct CascadeController<L: ChangeListener = NoopChangeListener> {
    listener: Arc<L>,
    state: ControllerState,
    roots: Vec<DeletionItem>,
    round: Option<DeletionRound>,
    committed: Vec<EntityId>,
    removed_total: usize,
    cleared_total: usize,
}

impl CascadeController<NoopChangeListener> {
    pub fn new() -> Self {
        Self::with_listener(Arc::new(NoopChangeListener))
    }
}

impl Default for CascadeController<NoopChangeListener> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: ChangeListener> CascadeController<L> {
    pub fn with_listener(listener: Arc<L>) -> Self {
        Self {
            listener,
            state: ControllerState::Ready,
            roots: Vec::new(),
            round: None,
            committed: Vec::new(),
            removed_total: 0,
            cleared_total: 0,
        }
    }

    pub fn state(&self) -> ControllerState {
        self.state
    }

    pub fn round(&self) -> Option<&DeletionRound> {
        self.round.as_ref()
    }

    /// Resolve the first round for `roots` and move to review. Roots are
    /// always removed outright, whatever action they were built with.
    ///
    /// With `auto_commit_if_empty` set, a deletion that drags nothing else
    /// in is committed immediately without a review stop.
    pub fn start(
        &mut self,
        project: &mut Project,
        roots: Vec<DeletionItem>,
        cancelable: bool,
        auto_commit_if_empty: bool,
    ) -> Result<ControllerState, Error> {
        if self.state != ControllerState::Ready {
            return Err(Error::InvalidState(format!(
                "cannot start a deletion in state {:?}",
                self.state
            )));
        }
        if roots.is_empty() {
            return Err(Error::InvalidInput(
                "at least one deletion root is required".to_string(),
            ));
        }

        let mut roots = roots;
        for root in &mut roots {
            root.action = DeletionAction::Remove;
        }
        let discovered = resolve(project, &roots);
        self.roots = roots;

        if discovered.is_empty() && auto_commit_if_empty {
            tracing::info!("No dependents found, committing without review");
            let items = std::mem::take(&mut self.roots);
            return self.commit_round(project, 1, items);
        }

        let labels: Vec<String> = self.roots.iter().map(DeletionItem::label).collect();
        let forest = build_forest(project, &discovered);
        self.round = Some(DeletionRound {
            number: 1,
            items: discovered,
            forest,
            summary: format!("Deleting: {}", labels.join(", ")),
            cancelable,
        });
        self.state = ControllerState::AwaitingReview;
        Ok(self.state)
    }

    /// Flip one discovered item between `Clear` and `Remove` during review.
    /// Roots cannot be adjusted; they are not reviewable items.
    pub fn set_action(&mut self, identity: EntityId, action: DeletionAction) -> Result<(), Error> {
        if self.state != ControllerState::AwaitingReview {
            return Err(Error::InvalidState(format!(
                "no round under review in state {:?}",
                self.state
            )));
        }
        let round = self
            .round
            .as_mut()
            .ok_or_else(|| Error::InvalidState("no active round".to_string()))?;
        let item = round
            .items
            .get_mut(identity)
            .ok_or_else(|| Error::UnknownItem(format!("no reviewable item with id {identity}")))?;
        item.action = action;
        Ok(())
    }

    /// Commit the round under review and resolve the next one. Returns the
    /// resulting state: `AwaitingReview` when new dependents were
    /// discovered, `Resolved` when the cascade is complete.
    ///
    /// A commit failure leaves the controller in `Committing`; earlier
    /// commits of the round are not undone.
    pub fn confirm(&mut self, project: &mut Project) -> Result<ControllerState, Error> {
        if self.state != ControllerState::AwaitingReview {
            return Err(Error::InvalidState(format!(
                "no round under review in state {:?}",
                self.state
            )));
        }
        let round = self
            .round
            .take()
            .ok_or_else(|| Error::InvalidState("no active round".to_string()))?;

        // Roots go first so container removals record their detached
        // subtrees before dependent clears run.
        let mut items = Vec::with_capacity(self.roots.len() + round.items.len());
        if round.number == 1 {
            items.append(&mut self.roots);
        }
        items.extend(round.items.into_vec());
        self.commit_round(project, round.number, items)
    }

    /// Abandon the deletion before anything was committed. Later rounds
    /// cannot be cancelled; their premise is already committed.
    pub fn cancel(&mut self) -> Result<(), Error> {
        if self.state != ControllerState::AwaitingReview {
            return Err(Error::InvalidState(format!(
                "no round under review in state {:?}",
                self.state
            )));
        }
        let cancelable = self.round.as_ref().is_some_and(|round| round.cancelable);
        if !cancelable {
            return Err(Error::CancelNotAllowed);
        }
        self.round = None;
        self.roots.clear();
        self.state = ControllerState::Cancelled;
        self.listener.notify(DeletionEvent::Cancelled);
        Ok(())
    }

    fn commit_round(
        &mut self,
        project: &mut Project,
        number: u32,
        items: Vec<DeletionItem>,
    ) -> Result<ControllerState, Error> {
        self.state = ControllerState::Committing;
        let mut removed = 0;
        let mut cleared = 0;
        let mut seeds = Vec::with_capacity(items.len());
        for mut item in items {
            let effect = item.commit(project)?;
            if effect.removed {
                removed += 1;
            } else {
                cleared += 1;
            }
            self.committed.push(item.identity());
            seeds.push(item);
        }
        self.removed_total += removed;
        self.cleared_total += cleared;
        tracing::info!(
            "Committed round {}: {} removed, {} cleared",
            number,
            removed,
            cleared
        );
        self.listener.notify(DeletionEvent::RoundCommitted {
            round: number,
            removed,
            cleared,
        });

        let mut next = resolve(project, &seeds);
        next.retain(|item| !self.committed.contains(&item.identity()));
        if next.is_empty() {
            self.state = ControllerState::Resolved;
            self.listener.notify(DeletionEvent::Resolved {
                rounds: number,
                removed: self.removed_total,
                cleared: self.cleared_total,
            });
        } else {
            let forest = build_forest(project, &next);
            self.round = Some(DeletionRound {
                number: number + 1,
                items: next,
                forest,
                summary: "Another items to delete".to_string(),
                cancelable: false,
            });
            self.state = ControllerState::AwaitingReview;
        }
        Ok(self.state)
    }
}
