use actix_web::{get, web, Responder};
use crate::server::controller::error::CustomError;
use crate::server::model::HealthResponse;

#[get("/")]
async fn get_root() -> impl Responder {
    web::Json(HealthResponse::running())
}

#[get("/api/order")]
/// health probe on the order path, POST on the same path submits orders
async fn get_order_health() -> impl Responder {
    web::Json(HealthResponse::running())
}

/// fallback for unknown routes
pub(crate) async fn not_found() -> Result<&'static str, CustomError> {
    Err(CustomError::ResourceNotFound)
}
