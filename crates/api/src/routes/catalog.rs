//! Route definitions for the `/catalog` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::catalog;
use crate::state::AppState;

/// Routes mounted at `/catalog`.
///
/// ```text
/// GET    /          -> list
/// POST   /          -> create
/// GET    /{id}      -> get_by_id
/// PUT    /{id}      -> update
/// DELETE /{id}      -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(catalog::list).post(catalog::create))
        .route(
            "/{id}",
            get(catalog::get_by_id)
                .put(catalog::update)
                .delete(catalog::delete),
        )
}
