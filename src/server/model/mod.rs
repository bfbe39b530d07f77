use serde::Serialize;

pub(crate) mod config;
pub(crate) mod order;

pub(crate) const SERVICE_NAME: &str = "Omar Restaurant";

#[derive(Debug, Serialize)]
pub(crate) struct HealthResponse {
    pub status: &'static str,
    pub message: String,
}

impl HealthResponse {
    pub fn running() -> Self {
        Self {
            status: "OK",
            message: format!("{} API is running", SERVICE_NAME),
        }
    }
}
