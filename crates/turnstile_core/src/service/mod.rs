//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into use-case level APIs for the board.
//! - Own the clock and the delayed-refresh lifecycle so the rules stay pure.

pub mod board_session;
pub mod check_service;
pub mod clock;
pub mod refresh;
