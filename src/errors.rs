use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use log::error;
use serde_json::Error as SerdeJsonError;
use stack_string::{format_sstr, StackString};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("NotFound: {0}")]
    NotFound(StackString),
    #[error("io Error {0}")]
    IoError(#[from] std::io::Error),
    #[error("invalid forecast data {0}")]
    JsonError(#[from] SerdeJsonError),
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound(message) => (StatusCode::NOT_FOUND, message.to_string()).into_response(),
            e => {
                error!("{e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format_sstr!("Internal Server Error, Please try later {e}").to_string(),
                )
                    .into_response()
            }
        }
    }
}

#[cfg(test)]
mod test {
    use axum::{http::StatusCode, response::IntoResponse};
    use std::io::ErrorKind;

    use crate::errors::ServiceError as Error;

    #[test]
    fn test_error_status() {
        let resp = Error::NotFound("no forecast".into()).into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let resp = Error::from(std::io::Error::from(ErrorKind::NotFound)).into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
