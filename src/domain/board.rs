use crate::domain::card::Card;
use crate::domain::id::make_id;
use serde::{Deserialize, Serialize};

/// A named, ordered bucket of cards (a workflow stage)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Column {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub cards: Vec<Card>,
}

impl Column {
    /// Creates a new empty column with a fresh identity
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: make_id(),
            title: title.into(),
            cards: Vec::new(),
        }
    }

    pub fn with_cards(mut self, cards: Vec<Card>) -> Self {
        self.cards = cards;
        self
    }

    /// Looks up a card by id
    pub fn card(&self, card_id: &str) -> Option<&Card> {
        self.cards.iter().find(|c| c.id == card_id)
    }

    /// Position of a card in display order
    pub fn card_position(&self, card_id: &str) -> Option<usize> {
        self.cards.iter().position(|c| c.id == card_id)
    }
}

impl PartialEq for Column {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Column {}

/// The single root task collection, containing ordered columns
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Board {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub columns: Vec<Column>,
}

impl Board {
    /// Creates a new empty board with a fresh identity
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: make_id(),
            title: title.into(),
            columns: Vec::new(),
        }
    }

    /// Seeded first-run board: one working column with three open cards
    /// and a "Done" column with one completed card.
    pub fn demo() -> Self {
        let week = Column::new("Week").with_cards(vec![
            Card::new("Find a video editing contract"),
            Card::new("Publish the weekly photo post"),
            Card::new("Polish the personal site"),
        ]);
        let done = Column::new("Done")
            .with_cards(vec![
                Card::new("Upload photos to the stock library").with_completed(true)
            ]);
        let mut board = Board::new("Tasks");
        board.columns = vec![week, done];
        board
    }

    /// Looks up a column by id
    pub fn column(&self, column_id: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.id == column_id)
    }

    /// Mutable lookup of a column by id
    pub fn column_mut(&mut self, column_id: &str) -> Option<&mut Column> {
        self.columns.iter_mut().find(|c| c.id == column_id)
    }

    /// Position of a column in display order
    pub fn column_position(&self, column_id: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.id == column_id)
    }

    /// Finds a card by id in whichever column holds it
    pub fn card_mut(&mut self, card_id: &str) -> Option<&mut Card> {
        self.columns
            .iter_mut()
            .flat_map(|col| col.cards.iter_mut())
            .find(|c| c.id == card_id)
    }

    /// Total number of cards across all columns
    pub fn card_count(&self) -> usize {
        self.columns.iter().map(|c| c.cards.len()).sum()
    }
}

impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Board {}

impl Default for Board {
    fn default() -> Self {
        Self::demo()
    }
}
