use actix_web::{dev::Payload, web::Bytes, FromRequest, HttpRequest};
use futures_util::future::LocalBoxFuture;
use serde::de::DeserializeOwned;
use serde_path_to_error::Segment;

use crate::errors::AppError;

/// Field name used when a body error cannot be tied to one field.
pub const NON_FIELD_ERRORS: &str = "non_field_errors";

/// JSON request body. Unlike `web::Json`, a body that does not deserialize
/// is rejected with a 400 naming the field that failed.
/// Usage: take `body: JsonBody<ProjectForm>` in a handler.
#[derive(Debug)]
pub struct JsonBody<T>(pub T);

impl<T> JsonBody<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> FromRequest for JsonBody<T>
where
    T: DeserializeOwned + 'static,
{
    type Error = AppError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let body = Bytes::from_request(req, payload);

        Box::pin(async move {
            let bytes = body
                .await
                .map_err(|e| AppError::field(NON_FIELD_ERRORS, e.to_string()))?;

            parse_body(&bytes).map(JsonBody)
        })
    }
}

pub fn parse_body<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, AppError> {
    let mut deserializer = serde_json::Deserializer::from_slice(bytes);

    let value = serde_path_to_error::deserialize(&mut deserializer).map_err(|err| {
        let field = match err.path().iter().next() {
            Some(Segment::Map { key }) => key.clone(),
            _ => NON_FIELD_ERRORS.to_string(),
        };
        let message = err.into_inner().to_string();
        tracing::debug!(field = %field, "Rejected JSON body: {}", message);
        AppError::field(&field, strip_position(&message))
    })?;

    deserializer
        .end()
        .map_err(|e| AppError::field(NON_FIELD_ERRORS, strip_position(&e.to_string())))?;

    Ok(value)
}

fn strip_position(message: &str) -> &str {
    message
        .rfind(" at line ")
        .map_or(message, |idx| &message[..idx])
}
