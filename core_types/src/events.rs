/// Events emitted by the cascading deletion engine so dependent views
/// (scene tree, property panels, open script editors) can refresh.
#[derive(Debug, Clone, PartialEq)]
pub enum DeletionEvent {
    RoundCommitted {
        round: u32,
        removed: usize,
        cleared: usize,
    },
    Resolved {
        rounds: u32,
        removed: usize,
        cleared: usize,
    },
    Cancelled,
}
