//! Handlers for the site's pages.
//!
//! Each page returns the model its view needs: a title, the view name, and
//! for the listing page the project and experience lists.

use axum::extract::State;
use axum::Json;
use folio_catalog::CatalogService;
use folio_db::models::catalog_entry::CatalogEntry;
use serde::Serialize;

use crate::error::AppResult;
use crate::state::AppState;

/// Model for a page with no dynamic content.
#[derive(Debug, Serialize)]
pub struct PageResponse {
    pub title: &'static str,
    pub page: &'static str,
}

/// Model for the projects and experience listing page.
#[derive(Debug, Serialize)]
pub struct ProjectsPageResponse {
    pub title: &'static str,
    pub page: &'static str,
    pub projects: Vec<CatalogEntry>,
    pub experiences: Vec<CatalogEntry>,
}

/// GET /
pub async fn home() -> Json<PageResponse> {
    Json(PageResponse {
        title: "Welcome to My Portfolio",
        page: "index",
    })
}

/// GET /about
pub async fn about() -> Json<PageResponse> {
    Json(PageResponse {
        title: "About Me",
        page: "about",
    })
}

/// GET /resume
pub async fn resume() -> Json<PageResponse> {
    Json(PageResponse {
        title: "Resume",
        page: "resume",
    })
}

/// GET /skills
pub async fn skills() -> Json<PageResponse> {
    Json(PageResponse {
        title: "Skills & Certifications",
        page: "skills",
    })
}

/// GET /projects
///
/// Entries whose type is neither `project` nor `experience` are omitted.
pub async fn projects(State(state): State<AppState>) -> AppResult<Json<ProjectsPageResponse>> {
    let all = state.catalog.get_all().await?;
    let split = CatalogService::partition_by_type(&all);

    Ok(Json(ProjectsPageResponse {
        title: "Projects and Experience",
        page: "projects",
        projects: split.projects,
        experiences: split.experiences,
    }))
}
