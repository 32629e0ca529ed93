use std::collections::HashMap;

use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;

use crate::{
    entities::document::{DocumentForm, UpdateDocumentRequest},
    errors::AppError,
    use_cases::extractors::JsonBody,
    AppState,
};

#[instrument(skip(state, query))]
pub async fn list_documents(
    state: web::Data<AppState>,
    query: web::Query<HashMap<String, String>>,
) -> Result<impl Responder, AppError> {
    let category = query.get("category").map(String::as_str);

    let documents = state.document_handler
        .list_documents(category)
        .await?;

    Ok(HttpResponse::Ok().json(documents))
}

#[instrument(skip(state, data))]
pub async fn create_document(
    state: web::Data<AppState>,
    data: JsonBody<DocumentForm>,
) -> Result<impl Responder, AppError> {
    let document = state.document_handler
        .create_document(data.into_inner())
        .await?;

    Ok(HttpResponse::Created().json(document))
}

#[instrument(skip(state))]
pub async fn get_document(
    document_id: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let document = state.document_handler.get_document_by_id(&document_id).await?;
    Ok(HttpResponse::Ok().json(document))
}

#[instrument(skip(state, data))]
pub async fn replace_document(
    document_id: web::Path<String>,
    state: web::Data<AppState>,
    data: JsonBody<DocumentForm>,
) -> Result<impl Responder, AppError> {
    let document = state.document_handler
        .replace_document(&document_id, data.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(document))
}

#[instrument(skip(state, data))]
pub async fn update_document(
    document_id: web::Path<String>,
    state: web::Data<AppState>,
    data: JsonBody<UpdateDocumentRequest>,
) -> Result<impl Responder, AppError> {
    let document = state.document_handler
        .update_document(&document_id, data.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(document))
}

#[instrument(skip(state))]
pub async fn delete_document(
    document_id: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    state.document_handler.delete_document(&document_id).await?;
    Ok(HttpResponse::NoContent().finish())
}
