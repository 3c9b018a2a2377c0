//! Frame-gated classic Snake.
//!
//! [`game::GameSession`] holds the whole simulation and advances it one
//! logical tick at a time. [`game_loop::GameLoop`] gates those ticks on
//! display refresh callbacks and forwards tick output to a
//! [`events::GameObserver`]. The terminal front end lives in
//! [`presenter`], [`renderer`], [`ui`] and [`terminal_runtime`].

pub mod apple;
pub mod config;
pub mod engine;
pub mod error;
pub mod events;
pub mod game;
pub mod game_loop;
pub mod grid;
pub mod input;
pub mod presenter;
pub mod renderer;
pub mod snake;
pub mod terminal_runtime;
pub mod ui;
