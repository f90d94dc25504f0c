mod movement_methods;
pub mod movement_struct;
pub mod options_struct;
pub mod report;
