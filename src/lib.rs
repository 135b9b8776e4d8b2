pub mod dataset;
pub mod metrics;
pub mod qb_track;
pub mod scroll;
pub mod settings;
pub mod state;
pub mod trivia;
