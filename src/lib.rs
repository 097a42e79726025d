//! # TaskBoard Core
//!
//! Core domain models and persistence for the TaskBoard single-user
//! task planner.
//!
//! This crate provides the board/column/card entity model, the board
//! operations that keep it consistent, and durable JSON persistence,
//! without any dependency on a specific UI implementation.

pub mod domain;
pub mod error;
pub mod session;
pub mod storage;

// Re-export commonly used types
pub use domain::{
    board::{Board, Column},
    card::Card,
    id::make_id,
};
pub use error::{Error, Result};
pub use session::BoardSession;
pub use storage::{FileStorage, Storage};
