//! Site page routes, mounted at the root.

use axum::routing::get;
use axum::Router;

use crate::handlers::pages;
use crate::state::AppState;

/// ```text
/// GET /          -> home
/// GET /about     -> about
/// GET /resume    -> resume
/// GET /skills    -> skills
/// GET /projects  -> projects (catalog listing)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(pages::home))
        .route("/about", get(pages::about))
        .route("/resume", get(pages::resume))
        .route("/skills", get(pages::skills))
        .route("/projects", get(pages::projects))
}
