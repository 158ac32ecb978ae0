//! Repository for track title searches over the catalog.

use tracksearch_core::search::{escape_like, Page, SearchRequest};

use crate::models::track::Track;
use crate::{DbError, DbPool};

/// Projection shared by every search query.
///
/// `UnitPrice` is declared `NUMERIC` in the catalog, which SQLite may store
/// as an integer for whole prices, so it is cast to keep a float type.
const SELECT_COLUMNS: &str = "\
    t.TrackId AS track_id, t.Name AS name, ar.Name AS artist, al.Title AS album, \
    t.AlbumId AS album_id, t.MediaTypeId AS media_type_id, t.GenreId AS genre_id, \
    t.Composer AS composer, t.Milliseconds AS milliseconds, t.Bytes AS bytes, \
    CAST(t.UnitPrice AS REAL) AS unit_price";

/// Join, filter and relevance ordering.
///
/// Parameters: `?1` is the raw term (exact match), `?2` the LIKE-escaped
/// term. Tier 1 is an exact case-sensitive title match, tier 2 a prefix
/// match, tier 3 any other substring match; ties sort by title.
const SEARCH_BODY: &str = "\
    FROM Track t \
    INNER JOIN Album al ON t.AlbumId = al.AlbumId \
    INNER JOIN Artist ar ON al.ArtistId = ar.ArtistId \
    WHERE t.Name LIKE '%' || ?2 || '%' ESCAPE '\\' \
    ORDER BY CASE \
        WHEN t.Name = ?1 THEN 1 \
        WHEN t.Name LIKE ?2 || '%' ESCAPE '\\' THEN 2 \
        ELSE 3 \
    END, t.Name";

/// Build the search SQL for the requested page.
///
/// Limit and offset are bound as `?3` and `?4`.
fn search_sql(page: Page) -> String {
    let mut sql = format!("SELECT {SELECT_COLUMNS} {SEARCH_BODY}");
    match page {
        Page::All => {}
        Page::Limit { .. } => sql.push_str(" LIMIT ?3"),
        Page::LimitOffset { .. } => sql.push_str(" LIMIT ?3 OFFSET ?4"),
    }
    sql
}

/// Provides read-only track searches.
pub struct TrackRepo;

impl TrackRepo {
    /// Search track titles for `request.term()`, ordered by relevance tier
    /// then title, sliced by `request.page()`.
    ///
    /// One pooled connection is held for the duration of the query and
    /// released when this function returns.
    pub async fn search(pool: &DbPool, request: &SearchRequest) -> Result<Vec<Track>, DbError> {
        let mut conn = pool.acquire().await.map_err(DbError::Connection)?;

        let page = request.page();
        let sql = search_sql(page);

        let mut query = sqlx::query_as::<_, Track>(&sql)
            .bind(request.term())
            .bind(escape_like(request.term()));
        if let Some(limit) = page.limit() {
            query = query.bind(limit);
        }
        if let Some(offset) = page.offset() {
            query = query.bind(offset);
        }

        let tracks = query.fetch_all(&mut *conn).await.map_err(DbError::Query)?;

        tracing::debug!(
            term = request.term(),
            ?page,
            rows = tracks.len(),
            "Track search executed",
        );

        Ok(tracks)
    }
}
