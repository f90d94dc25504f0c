// Moving the head around, one request at a time.

// Imports

use log::debug;

use crate::error_types::movement::MovementError;
use crate::head_movement::movement_struct::{HeadMovement, SeekStep};
use crate::head_movement::options_struct::SeekOptions;

// Implementations

impl HeadMovement {
    /// Service every track in `options` first come first served, tallying
    /// how far the head travels.
    ///
    /// Fails if there are no tracks, since there would be no average.
    pub fn calculate(options: &SeekOptions) -> Result<Self, MovementError> {
        service_requests(options)
    }
    /// Total tracks crossed across every request.
    pub fn total(&self) -> u64 {
        self.total
    }
    /// Average tracks crossed per request.
    pub fn average(&self) -> f64 {
        // Never empty, calculate() refuses that.
        self.total as f64 / self.steps.len() as f64
    }
    /// How many requests were serviced.
    pub fn request_count(&self) -> usize {
        self.steps.len()
    }
    /// Each serviced request, in order.
    pub fn steps(&self) -> &[SeekStep] {
        &self.steps
    }
}

//
// Functions
//

fn service_requests(options: &SeekOptions) -> Result<HeadMovement, MovementError> {
    // Check this up front, dividing by zero later would just hand back NaN.
    if options.tracks.is_empty() {
        return Err(MovementError::NoRequests);
    }

    debug!(
        "Servicing {} requests starting from track {}...",
        options.tracks.len(),
        options.initial_position
    );

    let mut current: i64 = options.initial_position;
    let mut total: u64 = 0;
    let mut steps: Vec<SeekStep> = Vec::with_capacity(options.tracks.len());

    for &track in &options.tracks {
        // abs_diff cannot overflow, even from i64::MIN to i64::MAX.
        let distance: u64 = current.abs_diff(track);
        total = total
            .checked_add(distance)
            .ok_or(MovementError::TotalOverflow {
                serviced: steps.len(),
            })?;
        debug!("Head {current} -> {track}, moved {distance}.");
        steps.push(SeekStep {
            from: current,
            to: track,
            distance,
        });
        current = track;
    }

    debug!("Done, head moved {total} tracks in total.");
    Ok(HeadMovement { steps, total })
}
