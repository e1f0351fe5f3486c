pub mod axes;
pub mod constraints;
pub mod control;
pub mod errors;
