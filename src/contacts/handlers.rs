use axum::{
    extract::{Path, Query, State},
    http::{header, HeaderMap, StatusCode},
    routing::{delete, get, post, put},
    Json, Router,
};
use time::OffsetDateTime;
use tracing::{info, instrument, warn};

use crate::{
    auth::jwt::CurrentUser,
    contacts::dto::{ContactOut, ContactPayload, SearchParams},
    contacts::repo::Contact,
    error::ApiError,
    state::AppState,
};

pub fn read_routes() -> Router<AppState> {
    Router::new()
        .route("/contacts", get(list_contacts))
        .route("/contacts/upcoming_birthdays", get(upcoming_birthdays))
        .route("/contacts/:id", get(get_contact))
}

pub fn write_routes() -> Router<AppState> {
    Router::new()
        .route("/contacts", post(create_contact))
        .route("/contacts/:id", put(update_contact))
        .route("/contacts/:id", delete(delete_contact))
}

#[instrument(skip(state, user))]
pub async fn list_contacts(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<ContactOut>>, ApiError> {
    let contacts =
        Contact::list_by_owner(&state.db, user.id, params.search_query.as_deref()).await?;
    Ok(Json(contacts.into_iter().map(ContactOut::from).collect()))
}

#[instrument(skip(state, user))]
pub async fn get_contact(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<i64>,
) -> Result<Json<ContactOut>, ApiError> {
    match Contact::get(&state.db, user.id, id).await? {
        Some(contact) => Ok(Json(contact.into())),
        None => {
            warn!(user_id = %user.id, %id, "contact not found");
            Err(ApiError::NotFound("Contact not found".into()))
        }
    }
}

#[instrument(skip(state, user, payload))]
pub async fn create_contact(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(payload): Json<ContactPayload>,
) -> Result<(StatusCode, HeaderMap, Json<ContactOut>), ApiError> {
    let contact = Contact::create(&state.db, user.id, &payload.into()).await?;

    let mut headers = HeaderMap::new();
    if let Ok(location) = format!("/api/v1/contacts/{}", contact.id).parse() {
        headers.insert(header::LOCATION, location);
    }

    info!(user_id = %user.id, contact_id = %contact.id, "contact created");
    Ok((StatusCode::CREATED, headers, Json(contact.into())))
}

#[instrument(skip(state, user, payload))]
pub async fn update_contact(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<i64>,
    Json(payload): Json<ContactPayload>,
) -> Result<Json<ContactOut>, ApiError> {
    match Contact::update(&state.db, user.id, id, &payload.into()).await? {
        Some(contact) => {
            info!(user_id = %user.id, contact_id = %id, "contact updated");
            Ok(Json(contact.into()))
        }
        None => {
            warn!(user_id = %user.id, %id, "update on missing contact");
            Err(ApiError::NotFound("Contact not found".into()))
        }
    }
}

#[instrument(skip(state, user))]
pub async fn delete_contact(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    if Contact::delete(&state.db, user.id, id).await? {
        info!(user_id = %user.id, contact_id = %id, "contact deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        warn!(user_id = %user.id, %id, "delete on missing contact");
        Err(ApiError::NotFound("Contact not found".into()))
    }
}

#[instrument(skip(state, user))]
pub async fn upcoming_birthdays(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> Result<Json<Vec<ContactOut>>, ApiError> {
    let today = OffsetDateTime::now_utc().date();
    let contacts = Contact::upcoming_birthdays(&state.db, user.id, today).await?;
    Ok(Json(contacts.into_iter().map(ContactOut::from).collect()))
}
