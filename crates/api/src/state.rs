/// Per-request handler state, handed out through `State<AppState>`.
///
/// Holds only the catalog pool; configuration is consumed while the router
/// is built.
#[derive(Clone)]
pub struct AppState {
    pub pool: tracksearch_db::DbPool,
}
