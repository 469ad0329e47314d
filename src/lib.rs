//! # Connect Game
//!
//! Rules engine for an N-in-a-row connection game (generalized Connect
//! Four): a rectangular gravity-fed grid where players drop tokens into
//! columns and win by forming a contiguous run of configurable length
//! horizontally, vertically, or on either diagonal. The crate's binary is a
//! thin console driver; all game logic lives in the library.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, tokens, engine with status latch
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
