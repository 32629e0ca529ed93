use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;

use crate::{
    entities::contact_message::{ContactMessageForm, UpdateContactMessageRequest},
    errors::AppError,
    use_cases::extractors::JsonBody,
    AppState,
};

/// Stores the message and answers 201 with the stored row. The
/// notification outcome only shows up in the logs.
#[instrument(skip(state, form))]
pub async fn create_contact_message(
    state: web::Data<AppState>,
    form: JsonBody<ContactMessageForm>,
) -> Result<impl Responder, AppError> {
    let submission = state.contact_handler
        .create_contact_message(form.into_inner())
        .await?;

    Ok(HttpResponse::Created().json(submission.message))
}

#[instrument(skip(state))]
pub async fn list_contact_messages(
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let messages = state.contact_handler.list_contact_messages().await?;
    Ok(HttpResponse::Ok().json(messages))
}

#[instrument(skip(state))]
pub async fn get_contact_message(
    message_id: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let message = state.contact_handler.get_contact_message_by_id(&message_id).await?;
    Ok(HttpResponse::Ok().json(message))
}

#[instrument(skip(state, form))]
pub async fn replace_contact_message(
    message_id: web::Path<String>,
    state: web::Data<AppState>,
    form: JsonBody<ContactMessageForm>,
) -> Result<impl Responder, AppError> {
    let message = state.contact_handler
        .replace_contact_message(&message_id, form.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(message))
}

#[instrument(skip(state, form))]
pub async fn update_contact_message(
    message_id: web::Path<String>,
    state: web::Data<AppState>,
    form: JsonBody<UpdateContactMessageRequest>,
) -> Result<impl Responder, AppError> {
    let message = state.contact_handler
        .update_contact_message(&message_id, form.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(message))
}

#[instrument(skip(state))]
pub async fn delete_contact_message(
    message_id: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    state.contact_handler.delete_contact_message(&message_id).await?;
    Ok(HttpResponse::NoContent().finish())
}
