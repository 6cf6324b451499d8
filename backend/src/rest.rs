//! HTTP/JSON surface for the dashboard frontend.
//!
//! One handler per operation the presentation layer can trigger. Handlers
//! only translate between HTTP and the services; the rules live in the
//! domain layer.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, put},
    Json, Router,
};
use tracing::info;

use crate::errors::LedgerError;
use crate::Backend;
use shared::{CashBookResponse, CashEntry, ReferenceKind};

/// Application state shared by all handlers.
#[derive(Clone)]
pub struct AppState {
    pub backend: Arc<Backend>,
}

impl AppState {
    pub fn new(backend: Arc<Backend>) -> Self {
        Self { backend }
    }
}

/// Build the `/api` router.
pub fn api_router(state: AppState) -> Router {
    Router::new()
        .route("/dashboard", get(get_dashboard))
        .route("/cash-book", get(list_cash_book).post(create_entry))
        .route("/cash-book/:position", put(update_entry).delete(delete_entry))
        .route("/reference/:table", get(get_reference_table))
        .with_state(state)
}

fn status_for(error: &LedgerError) -> StatusCode {
    match error {
        // A stale or invalid position addresses an entry that is not there.
        LedgerError::OutOfRange { .. } => StatusCode::NOT_FOUND,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// GET /api/dashboard
async fn get_dashboard(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/dashboard");
    match state.backend.dashboard_service.dashboard() {
        Ok(dashboard) => (StatusCode::OK, Json(dashboard)).into_response(),
        Err(e) => {
            tracing::error!("Error building dashboard: {:?}", e);
            (status_for(&e), e.to_string()).into_response()
        }
    }
}

/// GET /api/cash-book — entries in display order (newest date first).
async fn list_cash_book(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/cash-book");
    match state.backend.cash_book_service.list_for_display() {
        Ok(entries) => (StatusCode::OK, Json(CashBookResponse { entries })).into_response(),
        Err(e) => {
            tracing::error!("Error listing cash book: {:?}", e);
            (status_for(&e), e.to_string()).into_response()
        }
    }
}

/// POST /api/cash-book — append an entry.
async fn create_entry(
    State(state): State<AppState>,
    Json(entry): Json<CashEntry>,
) -> impl IntoResponse {
    info!("POST /api/cash-book");
    match state.backend.cash_book_service.add_entry(entry) {
        Ok(entries) => (StatusCode::CREATED, Json(CashBookResponse { entries })).into_response(),
        Err(e) => {
            tracing::error!("Error adding cash book entry: {:?}", e);
            (status_for(&e), e.to_string()).into_response()
        }
    }
}

/// PUT /api/cash-book/:position — replace the entry at a position.
async fn update_entry(
    State(state): State<AppState>,
    Path(position): Path<usize>,
    Json(entry): Json<CashEntry>,
) -> impl IntoResponse {
    info!("PUT /api/cash-book/{}", position);
    match state.backend.cash_book_service.update_entry(position, entry) {
        Ok(entries) => (StatusCode::OK, Json(CashBookResponse { entries })).into_response(),
        Err(e) => {
            tracing::error!("Error updating cash book entry: {:?}", e);
            (status_for(&e), e.to_string()).into_response()
        }
    }
}

/// DELETE /api/cash-book/:position — remove the entry at a position.
async fn delete_entry(
    State(state): State<AppState>,
    Path(position): Path<usize>,
) -> impl IntoResponse {
    info!("DELETE /api/cash-book/{}", position);
    match state.backend.cash_book_service.delete_entry(position) {
        Ok(entries) => (StatusCode::OK, Json(CashBookResponse { entries })).into_response(),
        Err(e) => {
            tracing::error!("Error deleting cash book entry: {:?}", e);
            (status_for(&e), e.to_string()).into_response()
        }
    }
}

/// GET /api/reference/:table — one of `members`, `savings-loans`, `journal`.
async fn get_reference_table(
    State(state): State<AppState>,
    Path(table): Path<String>,
) -> impl IntoResponse {
    info!("GET /api/reference/{}", table);
    let Ok(kind) = table.parse::<ReferenceKind>() else {
        return (StatusCode::NOT_FOUND, "Unknown reference table").into_response();
    };
    match state.backend.reference_service.table(kind) {
        Ok(table) => (StatusCode::OK, Json(table)).into_response(),
        Err(e) => {
            tracing::error!("Error loading reference table: {:?}", e);
            (status_for(&e), e.to_string()).into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::Category;
    use tempfile::TempDir;

    fn setup_test_state() -> (AppState, TempDir) {
        let temp_dir = TempDir::new().expect("temp dir");
        let backend = Backend::new(temp_dir.path()).expect("backend");
        (AppState::new(Arc::new(backend)), temp_dir)
    }

    fn sample_entry() -> CashEntry {
        CashEntry {
            date: chrono::NaiveDate::from_ymd_opt(2024, 1, 5),
            description: "Dues".to_string(),
            category: Category::Inflow,
            amount: 50000,
        }
    }

    #[tokio::test]
    async fn create_then_dashboard_reflects_entry() {
        let (state, _dir) = setup_test_state();

        let response = create_entry(State(state.clone()), Json(sample_entry()))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::CREATED);

        let response = get_dashboard(State(state)).await.into_response();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn delete_at_stale_position_returns_not_found() {
        let (state, _dir) = setup_test_state();

        let response = delete_entry(State(state), Path(7)).await.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn unknown_reference_table_returns_not_found() {
        let (state, _dir) = setup_test_state();

        let response = get_reference_table(State(state), Path("payroll".to_string()))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn missing_reference_table_is_served_empty() {
        let (state, _dir) = setup_test_state();

        let response = get_reference_table(State(state), Path("members".to_string()))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
