use crate::{
    domain::{Board, Card, Column},
    error::Result,
    storage::Storage,
};

/// A board plus the storage it persists to.
///
/// All mutating operations validate, mutate in memory, then flush the full
/// board through [`Storage::save_board`] before returning. The return value
/// distinguishes the three outcomes of the error taxonomy:
///
/// - `Ok(true)` — the board changed and the change is durable.
/// - `Ok(false)` — validation rejection or stale reference; nothing was
///   mutated and nothing was written.
/// - `Err(_)` — the save failed. The in-memory mutation is NOT rolled
///   back; callers needing strict consistency should reload or retry.
pub struct BoardSession<S: Storage> {
    board: Board,
    storage: S,
}

impl<S: Storage> BoardSession<S> {
    /// Opens a session by loading the board from storage
    pub fn open(storage: S) -> Result<Self> {
        let board = storage.load_board()?;
        Ok(Self { board, storage })
    }

    /// Wraps an already-materialized board
    pub fn with_board(board: Board, storage: S) -> Self {
        Self { board, storage }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn into_board(self) -> Board {
        self.board
    }

    /// Appends a new empty column to the board
    pub fn add_column(&mut self, title: &str) -> Result<bool> {
        let Some(title) = normalized(title) else {
            return Ok(false);
        };
        self.board.columns.push(Column::new(title));
        self.save()
    }

    /// Renames a column in place; its id and cards are untouched
    pub fn rename_column(&mut self, column_id: &str, title: &str) -> Result<bool> {
        let Some(title) = normalized(title) else {
            return Ok(false);
        };
        let Some(column) = self.board.column_mut(column_id) else {
            return Ok(false);
        };
        column.title = title;
        self.save()
    }

    /// Removes a column and every card it contains.
    ///
    /// The cascade is unconditional; confirming the destruction with the
    /// user is the caller's job.
    pub fn delete_column(&mut self, column_id: &str) -> Result<bool> {
        let Some(pos) = self.board.column_position(column_id) else {
            return Ok(false);
        };
        self.board.columns.remove(pos);
        self.save()
    }

    /// Appends a new card to the given column
    pub fn add_card(
        &mut self,
        column_id: &str,
        title: &str,
        description: &str,
        completed: bool,
    ) -> Result<bool> {
        let Some(title) = normalized(title) else {
            return Ok(false);
        };
        let Some(column) = self.board.column_mut(column_id) else {
            return Ok(false);
        };
        column.cards.push(
            Card::new(title)
                .with_description(description.trim())
                .with_completed(completed),
        );
        self.save()
    }

    /// Rewrites a card's fields in place; its id and position are untouched
    pub fn edit_card(
        &mut self,
        card_id: &str,
        title: &str,
        description: &str,
        completed: bool,
    ) -> Result<bool> {
        let Some(title) = normalized(title) else {
            return Ok(false);
        };
        let Some(card) = self.board.card_mut(card_id) else {
            return Ok(false);
        };
        card.title = title;
        card.description = description.trim().to_string();
        card.completed = completed;
        self.save()
    }

    /// Removes a card from the given column
    pub fn delete_card(&mut self, column_id: &str, card_id: &str) -> Result<bool> {
        let Some(column) = self.board.column_mut(column_id) else {
            return Ok(false);
        };
        let Some(pos) = column.card_position(card_id) else {
            return Ok(false);
        };
        column.cards.remove(pos);
        self.save()
    }

    /// Moves a card from one column to the end of another.
    ///
    /// The card always lands as the last item of the target; no other field
    /// changes. Atomic from the caller's view: the card is never observable
    /// in zero or two columns.
    pub fn move_card(&mut self, source_id: &str, card_id: &str, target_id: &str) -> Result<bool> {
        if source_id == target_id {
            return Ok(false);
        }
        let Some(source) = self.board.column_position(source_id) else {
            return Ok(false);
        };
        let Some(target) = self.board.column_position(target_id) else {
            return Ok(false);
        };
        let Some(pos) = self.board.columns[source].card_position(card_id) else {
            return Ok(false);
        };
        let card = self.board.columns[source].cards.remove(pos);
        self.board.columns[target].cards.push(card);
        self.save()
    }

    fn save(&mut self) -> Result<bool> {
        self.storage.save_board(&self.board)?;
        Ok(true)
    }
}

fn normalized(title: &str) -> Option<String> {
    let trimmed = title.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
