/// Catalog primary keys are SQLite INTEGER (64-bit) row ids.
pub type DbId = i64;
