//! Simulation core of a grid snake game.
//!
//! [`game::GameEngine`] owns one run: the snake, the food, the score and the
//! `Idle -> Running -> GameOver` state machine. Hosts drive it through the
//! [`scheduler::Scheduler`] and [`game::GameObserver`] seams.

pub mod config;
pub mod error;
pub mod food;
pub mod game;
pub mod input;
pub mod renderer;
pub mod scheduler;
pub mod score;
pub mod snake;
pub mod tempo;
pub mod wall;
