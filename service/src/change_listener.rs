//! Host notification seam for the deletion engine.
//!
//! The engine mutates shared project data; once a cascading deletion fully
//! resolves, dependent views (scene tree, property panels, open script
//! editors) must refresh. The host registers a listener; tests use the mock
//! to assert which events were emitted.

use core_types::events::DeletionEvent;

pub trait ChangeListener: Send + Sync {
    fn notify(&self, event: DeletionEvent);
}

/// Default listener for hosts that poll project state themselves.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopChangeListener;

impl ChangeListener for NoopChangeListener {
    fn notify(&self, _event: DeletionEvent) {}
}
