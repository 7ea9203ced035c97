pub mod alerts;
pub mod config;
pub mod coordinator;
pub mod evaluator;
pub mod model;
pub mod pill;
pub mod state;
