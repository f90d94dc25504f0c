// Error types for calculating head movement.
// We do not allow string errors. This is RUST damn it, not python!
use thiserror::Error;

#[derive(Debug, Clone, Copy, Error, PartialEq)]
/// Reasons we could not work out how far the head moved.
pub enum MovementError {
    /// The average is total / requests, so zero requests has no average.
    #[error("Cannot compute average of zero requests.")]
    NoRequests,
    /// The running total no longer fits in a u64.
    #[error("Total head movement overflowed after servicing {serviced} requests.")]
    TotalOverflow { serviced: usize },
}
