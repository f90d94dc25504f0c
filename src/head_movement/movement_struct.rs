// Where the head went, and how far.

/// One serviced request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeekStep {
    /// Where the head was before this request.
    pub from: i64,
    /// The requested track, which is where the head is now.
    pub to: i64,
    /// Tracks crossed to get here.
    pub distance: u64,
}

/// Results of servicing every request in order.
///
/// Only obtainable through [`HeadMovement::calculate`], so there is always at
/// least one step and the average is always defined.
#[derive(Debug, Clone, PartialEq)]
pub struct HeadMovement {
    /// Every request, in the order it was serviced.
    pub(super) steps: Vec<SeekStep>,
    /// Sum of all step distances.
    pub(super) total: u64,
}
