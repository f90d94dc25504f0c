// Turning the results into something a human can read.

use crate::head_movement::movement_struct::HeadMovement;
use crate::head_movement::options_struct::SeekOptions;

/// Render the movement report.
///
/// Every track is followed by a space, including the last one. The average
/// always gets exactly two decimal places.
pub fn render(options: &SeekOptions, movement: &HeadMovement) -> String {
    let mut report = String::new();

    // track list first
    report.push_str("Track positions: ");
    for track in options.tracks() {
        report.push_str(&format!("{track} "));
    }
    report.push('\n');

    // then the numbers
    report.push_str(&format!(
        "Initial head position: {}\n",
        options.initial_position()
    ));
    report.push_str(&format!("Total head movement: {}\n", movement.total()));
    report.push_str(&format!(
        "Average head movement: {:.2}\n",
        movement.average()
    ));

    // done!
    report
}
