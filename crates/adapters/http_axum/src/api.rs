//! JSON API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod bookings;
#[allow(clippy::missing_errors_doc)]
pub mod events;

use axum::extract::rejection::JsonRejection;
use axum::routing::{get, post};
use axum::{Json, Router};

use synergia_app::ports::{BookingRepository, EventRepository};

use crate::error::ApiError;
use crate::state::AppState;

/// Unwrap a JSON body, treating a request sent without a JSON content type
/// as an empty object so the endpoint reports its own field errors.
pub(crate) fn json_body<T: Default>(
    payload: Result<Json<T>, JsonRejection>,
) -> Result<T, ApiError> {
    match payload {
        Ok(Json(body)) => Ok(body),
        Err(JsonRejection::MissingJsonContentType(_)) => Ok(T::default()),
        Err(rejection) => Err(rejection.into()),
    }
}

/// Build the sub-router holding every resource route.
///
/// Event routes live at the root (`/events`, `/event/{id}`) while booking
/// routes live under `/api`; both prefixes are part of the public contract.
pub fn routes<ER, BR>() -> Router<AppState<ER, BR>>
where
    ER: EventRepository + Send + Sync + 'static,
    BR: BookingRepository + Send + Sync + 'static,
{
    Router::new()
        // Events
        .route("/events", get(events::list::<ER, BR>))
        .route("/events/add", post(events::create::<ER, BR>))
        .route(
            "/event/{id}",
            get(events::get::<ER, BR>)
                .put(events::update::<ER, BR>)
                .delete(events::delete::<ER, BR>),
        )
        // Bookings
        .route(
            "/api/bookings",
            get(bookings::list::<ER, BR>).post(bookings::create::<ER, BR>),
        )
        .route(
            "/api/bookings/{id}",
            get(bookings::get::<ER, BR>)
                .put(bookings::update::<ER, BR>)
                .delete(bookings::delete::<ER, BR>),
        )
}
