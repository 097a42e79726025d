use crate::{domain::Board, error::Result};

pub mod file_storage;

pub use file_storage::FileStorage;

/// Storage backend for the board document.
///
/// Every mutating board operation flushes the full graph through
/// `save_board` before returning, so a successful operation is durable.
pub trait Storage {
    /// Loads the persisted board.
    ///
    /// A missing or unreadable location yields the seeded demo board, so a
    /// first run always has a usable board. A location that reads but does
    /// not parse is a fatal [`Error::CorruptBoard`](crate::Error::CorruptBoard):
    /// silently discarding unreadable user data is worse than failing.
    fn load_board(&self) -> Result<Board>;

    /// Persists the entire board graph, replacing prior content.
    ///
    /// The replacement is all-or-nothing: a crash mid-write must not leave
    /// a half-written file where a valid one used to be.
    fn save_board(&self, board: &Board) -> Result<()>;
}
