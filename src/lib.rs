// The library cannot use unwraps.
#![deny(clippy::unwrap_used)]
// Gotta use all the results.
#![deny(unused_results)]

pub mod error_types;
pub mod head_movement;
