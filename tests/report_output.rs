// Looking at the whole thing from the outside.
// Unwrapping is okay here, since we want unexpected outcomes to fail tests.
#![allow(clippy::unwrap_used)]

use fcfs_seek::error_types::movement::MovementError;
use fcfs_seek::head_movement::movement_struct::HeadMovement;
use fcfs_seek::head_movement::options_struct::SeekOptions;
use fcfs_seek::head_movement::report::render;

use test_log::test; // We want to see logs while testing.

#[test]
// The program's one and only run.
fn default_report() {
    let options = SeekOptions::default();
    assert_eq!(options.tracks(), &[55, 58, 60, 70, 18, 90, 150, 160, 184]);
    assert_eq!(options.initial_position(), 50);

    let movement = HeadMovement::calculate(&options).unwrap();
    assert_eq!(
        render(&options, &movement),
        "Track positions: 55 58 60 70 18 90 150 160 184 \n\
         Initial head position: 50\n\
         Total head movement: 238\n\
         Average head movement: 26.44\n"
    );
}

#[test]
fn custom_requests() {
    let options = SeekOptions::new(vec![98, 183, 37, 122, 14, 124, 65, 67], 53);
    let movement = HeadMovement::calculate(&options).unwrap();
    assert_eq!(movement.total(), 640);
    assert_eq!(format!("{:.2}", movement.average()), "80.00");
}

#[test]
fn empty_requests_error_message() {
    let err = HeadMovement::calculate(&SeekOptions::new(vec![], 0)).unwrap_err();
    assert_eq!(err, MovementError::NoRequests);
    assert_eq!(err.to_string(), "Cannot compute average of zero requests.");
}
