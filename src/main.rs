use std::process::exit;

use fcfs_seek::head_movement::{
    movement_struct::HeadMovement, options_struct::SeekOptions, report::render,
};
use log::{error, info};

fn main() {
    // Logs go to stderr, stdout is only for the report.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    // No flags, always the same requests.
    let options = SeekOptions::default();
    info!(
        "Servicing {} track requests first come first served.",
        options.tracks().len()
    );

    let movement = match HeadMovement::calculate(&options) {
        Ok(movement) => movement,
        Err(err) => {
            error!("Couldn't calculate head movement: {err}");
            exit(1);
        }
    };

    print!("{}", render(&options, &movement));
}
