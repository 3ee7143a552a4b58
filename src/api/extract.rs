use axum::{
    extract::{
        rejection::{FormRejection, JsonRejection},
        FromRequest, Request,
    },
    http::header,
    response::{IntoResponse, Response},
    Form, Json,
};
use serde_json::Value;

use crate::models::NewComment;

/// A comment submission read from either a urlencoded form or a JSON body.
///
/// Bodies in any other format, or with no `Content-Type` at all, carry no
/// fields we can read and yield an empty submission, so the defaults apply.
/// Only a form or JSON body that cannot be read or parsed is rejected.
#[derive(Debug)]
pub struct Submission(pub NewComment);

#[derive(Debug, thiserror::Error)]
pub enum SubmissionRejection {
    #[error(transparent)]
    Form(#[from] FormRejection),
    #[error(transparent)]
    Json(#[from] JsonRejection),
}

impl IntoResponse for SubmissionRejection {
    fn into_response(self) -> Response {
        tracing::warn!("Rejected comment submission: {}", self);
        match self {
            Self::Form(rejection) => rejection.into_response(),
            Self::Json(rejection) => rejection.into_response(),
        }
    }
}

impl<S> FromRequest<S> for Submission
where
    S: Send + Sync,
{
    type Rejection = SubmissionRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let mime = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.split(';').next())
            .map(|value| value.trim().to_ascii_lowercase());

        match mime.as_deref() {
            Some("application/x-www-form-urlencoded") => {
                let Form(pairs) = Form::<Vec<(String, String)>>::from_request(req, state).await?;
                Ok(Self(NewComment::from_pairs(pairs)))
            }
            Some("application/json") => {
                let Json(body) = Json::<Value>::from_request(req, state).await?;
                Ok(Self(NewComment::from_json(&body)))
            }
            other => {
                tracing::debug!(
                    content_type = other.unwrap_or("none"),
                    "Submission body not readable, using defaults"
                );
                Ok(Self(NewComment::default()))
            }
        }
    }
}
