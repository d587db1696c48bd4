//! # Connect Four Rounds
//!
//! Rules engine for two-player Connect Four played over repeated rounds,
//! with a small terminal front end built on Ratatui.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, players, round state machine, session
//! - [`ui`] — Terminal UI driving a [`game::GameSession`]
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod ui;
