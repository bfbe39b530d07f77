use actix_web::{error, HttpResponse};
use actix_web::http::StatusCode;
use derive_more::{Display, Error};
use serde::Serialize;

#[derive(Debug, Display, Error, PartialEq)]
pub(crate) enum CustomError {
    #[display("invalid payload")]
    InvalidPayload,
    #[display("resource not found")]
    ResourceNotFound,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

impl error::ResponseError for CustomError {
    fn status_code(&self) -> StatusCode {
        match *self {
            CustomError::InvalidPayload => StatusCode::BAD_REQUEST,
            CustomError::ResourceNotFound => StatusCode::NOT_FOUND,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .json(ErrorBody { error: self.to_string() })
    }
}
