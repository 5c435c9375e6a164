//! Person HTTP Routes
//!
//! Endpoints for the Person resource under `/persons` (nested under `/api`
//! by the server). Bodies are bare Person JSON; no envelope.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};

use crate::person::Person;
use crate::service::PersonService;

use super::errors::{ApiError, ApiResult};

/// Person state shared across handlers
pub struct PersonState {
    pub service: PersonService,
}

impl PersonState {
    pub fn new(service: PersonService) -> Self {
        Self { service }
    }
}

/// Create person routes
pub fn person_routes(state: Arc<PersonState>) -> Router {
    Router::new()
        .route("/persons", get(list_persons_handler))
        .route("/persons", post(create_person_handler))
        .route("/persons/:id", get(get_person_handler))
        .route("/persons/:id", put(update_person_handler))
        .route("/persons/:id", delete(delete_person_handler))
        .with_state(state)
}

async fn list_persons_handler(
    State(state): State<Arc<PersonState>>,
) -> ApiResult<Json<Vec<Person>>> {
    let persons = state.service.find_all()?;
    Ok(Json(persons))
}

async fn get_person_handler(
    State(state): State<Arc<PersonState>>,
    Path(id): Path<u64>,
) -> ApiResult<Json<Person>> {
    let person = state
        .service
        .find_by_id(id)?
        .ok_or(ApiError::NotFound(id))?;
    Ok(Json(person))
}

async fn create_person_handler(
    State(state): State<Arc<PersonState>>,
    Json(person): Json<Person>,
) -> ApiResult<(StatusCode, Json<Person>)> {
    // An explicit body id is honored (upsert); an unset one gets assigned.
    let created = state.service.save_or_update(person)?;
    Ok((StatusCode::CREATED, Json(created)))
}

async fn update_person_handler(
    State(state): State<Arc<PersonState>>,
    Path(id): Path<u64>,
    Json(mut person): Json<Person>,
) -> ApiResult<Json<Person>> {
    // Path id wins over whatever the body carries.
    person.id = Some(id);
    let updated = state.service.save_or_update(person)?;
    Ok(Json(updated))
}

async fn delete_person_handler(
    State(state): State<Arc<PersonState>>,
    Path(id): Path<u64>,
) -> ApiResult<StatusCode> {
    // 200 even when the id never existed; delete is a no-op then.
    state.service.delete_by_id(id)?;
    Ok(StatusCode::OK)
}
