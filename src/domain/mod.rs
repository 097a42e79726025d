pub mod board;
pub mod card;
pub mod id;

pub use board::{Board, Column};
pub use card::Card;
pub use id::make_id;
