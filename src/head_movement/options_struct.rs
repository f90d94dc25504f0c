// What the head is asked to do.

/// Tracks requested when no other input is given, in arrival order.
const DEFAULT_TRACKS: [i64; 9] = [55, 58, 60, 70, 18, 90, 150, 160, 184];
/// Where the head sits before the first request.
const DEFAULT_INITIAL_POSITION: i64 = 50;

/// Input to a head movement calculation.
///
/// Tracks are serviced strictly in the order given here, nothing is reordered.
/// Positions are not checked against any maximum track, and negative values
/// are allowed through as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeekOptions {
    /// Requested tracks, first come first served.
    pub(super) tracks: Vec<i64>,
    /// Head position before servicing anything.
    pub(super) initial_position: i64,
}

impl SeekOptions {
    pub fn new(tracks: Vec<i64>, initial_position: i64) -> Self {
        Self {
            tracks,
            initial_position,
        }
    }
    pub fn tracks(&self) -> &[i64] {
        &self.tracks
    }
    pub fn initial_position(&self) -> i64 {
        self.initial_position
    }
}

impl Default for SeekOptions {
    /// The fixed request list the program runs with.
    fn default() -> Self {
        Self::new(DEFAULT_TRACKS.to_vec(), DEFAULT_INITIAL_POSITION)
    }
}
