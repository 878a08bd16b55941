//! JSON handlers for bookings.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use synergia_app::ports::{BookingRepository, EventRepository};
use synergia_domain::booking::{Booking, BookingPatch, NewBooking};
use synergia_domain::error::NotFoundError;
use synergia_domain::id::{BookingId, EventId};

use crate::api::json_body;
use crate::error::ApiError;
use crate::state::AppState;

/// Request body for booking a participant onto an event.
///
/// `eventId` is kept as raw JSON: clients send it either as a number or as a
/// numeric string.
#[derive(Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
    pub event_id: Option<Value>,
    pub name: Option<String>,
    pub email: Option<String>,
}

/// `{ message, booking }` envelope used by create and update.
#[derive(Serialize)]
pub struct BookingEnvelope {
    pub message: &'static str,
    pub booking: Booking,
}

/// `{ message, removedBooking }` envelope used by delete.
///
/// `removedBooking` is a one-element array holding the cancelled booking.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RemovedBookingEnvelope {
    pub message: &'static str,
    pub removed_booking: [Booking; 1],
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Booking>>),
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
    Ok(Json<Booking>),
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
    Created(Json<BookingEnvelope>),
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
    Ok(Json<BookingEnvelope>),
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
    Ok(Json<RemovedBookingEnvelope>),
}

impl IntoResponse for DeleteResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

fn parse_id(raw: &str) -> Result<BookingId, ApiError> {
    raw.parse().map_err(|_| NotFoundError::booking(raw).into())
}

/// Resolve the `eventId` of a booking request.
///
/// Accepts an integer or a string holding one. Anything else, including an
/// absent field, names no event.
fn resolve_event_ref(value: Option<&Value>) -> Result<EventId, ApiError> {
    let resolved = match value {
        Some(Value::Number(n)) => n.as_u64().map(EventId::new),
        Some(Value::String(s)) => s.parse().ok(),
        _ => None,
    };
    resolved.ok_or_else(|| {
        let raw = value.map_or_else(|| "undefined".to_string(), Value::to_string);
        ApiError::from(NotFoundError::event(raw))
    })
}

/// `GET /api/bookings`
pub async fn list<ER, BR>(
    State(state): State<AppState<ER, BR>>,
) -> Result<ListResponse, ApiError>
where
    ER: EventRepository + Send + Sync + 'static,
    BR: BookingRepository + Send + Sync + 'static,
{
    let bookings = state.booking_service.list_bookings().await?;
    Ok(ListResponse::Ok(Json(bookings)))
}

/// `POST /api/bookings`
pub async fn create<ER, BR>(
    State(state): State<AppState<ER, BR>>,
    payload: Result<Json<CreateBookingRequest>, JsonRejection>,
) -> Result<CreateResponse, ApiError>
where
    ER: EventRepository + Send + Sync + 'static,
    BR: BookingRepository + Send + Sync + 'static,
{
    let req = json_body(payload)?;
    let event_id = resolve_event_ref(req.event_id.as_ref())?;
    let booking = NewBooking {
        event_id,
        name: req.name.unwrap_or_default(),
        email: req.email.unwrap_or_default(),
    };
    let created = state.booking_service.create_booking(booking).await?;
    Ok(CreateResponse::Created(Json(BookingEnvelope {
        message: "Booking successful",
        booking: created,
    })))
}

/// `GET /api/bookings/{id}`
pub async fn get<ER, BR>(
    State(state): State<AppState<ER, BR>>,
    Path(id): Path<String>,
) -> Result<GetResponse, ApiError>
where
    ER: EventRepository + Send + Sync + 'static,
    BR: BookingRepository + Send + Sync + 'static,
{
    let booking_id = parse_id(&id)?;
    let booking = state.booking_service.get_booking(booking_id).await?;
    Ok(GetResponse::Ok(Json(booking)))
}

/// `PUT /api/bookings/{id}`
pub async fn update<ER, BR>(
    State(state): State<AppState<ER, BR>>,
    Path(id): Path<String>,
    payload: Result<Json<BookingPatch>, JsonRejection>,
) -> Result<UpdateResponse, ApiError>
where
    ER: EventRepository + Send + Sync + 'static,
    BR: BookingRepository + Send + Sync + 'static,
{
    let booking_id = parse_id(&id)?;
    // Verify it exists
    state.booking_service.get_booking(booking_id).await?;
    let patch = json_body(payload)?;
    let updated = state
        .booking_service
        .update_booking(booking_id, patch)
        .await?;
    Ok(UpdateResponse::Ok(Json(BookingEnvelope {
        message: "Booking updated successfully",
        booking: updated,
    })))
}

/// `DELETE /api/bookings/{id}`
pub async fn delete<ER, BR>(
    State(state): State<AppState<ER, BR>>,
    Path(id): Path<String>,
) -> Result<DeleteResponse, ApiError>
where
    ER: EventRepository + Send + Sync + 'static,
    BR: BookingRepository + Send + Sync + 'static,
{
    let booking_id = parse_id(&id)?;
    let removed = state.booking_service.delete_booking(booking_id).await?;
    Ok(DeleteResponse::Ok(Json(RemovedBookingEnvelope {
        message: "Booking cancelled successfully",
        removed_booking: [removed],
    })))
}
