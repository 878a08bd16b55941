//! JSON handlers for events.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use synergia_app::ports::{BookingRepository, EventRepository};
use synergia_domain::error::NotFoundError;
use synergia_domain::event::{Event, EventPatch, NewEvent};
use synergia_domain::id::EventId;

use crate::api::json_body;
use crate::error::ApiError;
use crate::state::AppState;

/// Request body for adding an event. Every field is optional here so that a
/// missing one is reported as a validation error rather than a body rejection.
#[derive(Default, Deserialize)]
pub struct CreateEventRequest {
    pub name: Option<String>,
    pub date: Option<String>,
    pub venue: Option<String>,
}

/// `{ message, event }` envelope used by create and update.
#[derive(Serialize)]
pub struct EventEnvelope {
    pub message: &'static str,
    pub event: Event,
}

/// `{ message, removedEvent }` envelope used by delete.
///
/// `removedEvent` is a one-element array holding the deleted event.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RemovedEventEnvelope {
    pub message: &'static str,
    pub removed_event: [Event; 1],
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Event>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get endpoint.
pub enum GetResponse {
    Ok(Json<Event>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Created(Json<EventEnvelope>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// Possible responses from the update endpoint.
pub enum UpdateResponse {
    Ok(Json<EventEnvelope>),
}

impl IntoResponse for UpdateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the delete endpoint.
pub enum DeleteResponse {
    Ok(Json<RemovedEventEnvelope>),
}

impl IntoResponse for DeleteResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// A path segment that is not an integer names no event.
fn parse_id(raw: &str) -> Result<EventId, ApiError> {
    raw.parse().map_err(|_| NotFoundError::event(raw).into())
}

/// `GET /events`
pub async fn list<ER, BR>(
    State(state): State<AppState<ER, BR>>,
) -> Result<ListResponse, ApiError>
where
    ER: EventRepository + Send + Sync + 'static,
    BR: BookingRepository + Send + Sync + 'static,
{
    let events = state.event_service.list_events().await?;
    Ok(ListResponse::Ok(Json(events)))
}

/// `POST /events/add`
pub async fn create<ER, BR>(
    State(state): State<AppState<ER, BR>>,
    payload: Result<Json<CreateEventRequest>, JsonRejection>,
) -> Result<CreateResponse, ApiError>
where
    ER: EventRepository + Send + Sync + 'static,
    BR: BookingRepository + Send + Sync + 'static,
{
    let req = json_body(payload)?;
    let event = NewEvent {
        name: req.name.unwrap_or_default(),
        date: req.date.unwrap_or_default(),
        venue: req.venue.unwrap_or_default(),
    };
    let created = state.event_service.create_event(event).await?;
    Ok(CreateResponse::Created(Json(EventEnvelope {
        message: "Event added successfully",
        event: created,
    })))
}

/// `GET /event/{id}`
pub async fn get<ER, BR>(
    State(state): State<AppState<ER, BR>>,
    Path(id): Path<String>,
) -> Result<GetResponse, ApiError>
where
    ER: EventRepository + Send + Sync + 'static,
    BR: BookingRepository + Send + Sync + 'static,
{
    let event_id = parse_id(&id)?;
    let event = state.event_service.get_event(event_id).await?;
    Ok(GetResponse::Ok(Json(event)))
}

/// `PUT /event/{id}`
pub async fn update<ER, BR>(
    State(state): State<AppState<ER, BR>>,
    Path(id): Path<String>,
    payload: Result<Json<EventPatch>, JsonRejection>,
) -> Result<UpdateResponse, ApiError>
where
    ER: EventRepository + Send + Sync + 'static,
    BR: BookingRepository + Send + Sync + 'static,
{
    let event_id = parse_id(&id)?;
    // Verify it exists
    state.event_service.get_event(event_id).await?;
    let patch = json_body(payload)?;
    let updated = state.event_service.update_event(event_id, patch).await?;
    Ok(UpdateResponse::Ok(Json(EventEnvelope {
        message: "Event updated successfully",
        event: updated,
    })))
}

/// `DELETE /event/{id}`
pub async fn delete<ER, BR>(
    State(state): State<AppState<ER, BR>>,
    Path(id): Path<String>,
) -> Result<DeleteResponse, ApiError>
where
    ER: EventRepository + Send + Sync + 'static,
    BR: BookingRepository + Send + Sync + 'static,
{
    let event_id = parse_id(&id)?;
    let removed = state.event_service.delete_event(event_id).await?;
    Ok(DeleteResponse::Ok(Json(RemovedEventEnvelope {
        message: "Event deleted successfully",
        removed_event: [removed],
    })))
}
