use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use postboard_shared::api::ApiError;
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::error::AppError;

/// JSON body that has passed its declared `validator` rules.
///
/// Malformed bodies and failed rules both become a 400 with an `errors`
/// array.
#[derive(Debug)]
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection: JsonRejection| {
                tracing::debug!("Rejected request body: {}", rejection.body_text());
                AppError::Validation(vec![ApiError::msg(rejection.body_text())])
            })?;

        value
            .validate()
            .map_err(|errors| AppError::Validation(ApiError::from_validation(&errors)))?;

        Ok(ValidatedJson(value))
    }
}
