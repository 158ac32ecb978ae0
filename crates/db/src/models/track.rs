//! Track search result model.

use serde::Serialize;
use sqlx::FromRow;
use tracksearch_core::types::DbId;

/// One row of a track search, joined with its album and artist.
///
/// Every column except `TrackId` may be NULL in the catalog. A `None` is
/// written as JSON `null`; keys are never skipped.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Track {
    pub track_id: DbId,
    pub name: Option<String>,
    pub artist: Option<String>,
    pub album: Option<String>,
    pub album_id: Option<DbId>,
    pub media_type_id: Option<DbId>,
    pub genre_id: Option<DbId>,
    pub composer: Option<String>,
    pub milliseconds: Option<i64>,
    pub bytes: Option<i64>,
    pub unit_price: Option<f64>,
}
