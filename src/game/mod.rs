//! Game rules: scoring, round state and input tracking

pub mod config;
mod controller;
mod scoring;
mod session;
mod tracker;

pub use config::{GAME_DURATION, GameConfig, Mode};
pub use controller::Game;
pub use scoring::{score_for, score_word};
pub use session::{Outcome, PathStatus, RoundState, Session, Tick};
pub use tracker::PathTracker;
