use uuid::Uuid;

/// Generates a fresh globally-unique identifier in UUID v4 textual form.
///
/// Every board, column, and card receives one at creation time. The id is
/// immutable once assigned and survives save/load round trips unchanged.
pub fn make_id() -> String {
    Uuid::new_v4().to_string()
}
