pub mod app;
pub mod error;

pub use app::{build_router, AppState};

#[derive(serde::Deserialize, Debug, Clone)]
pub struct GenerateRequest {
    pub message: String,
}

#[derive(serde::Serialize, Debug, Clone)]
pub struct GenerateResponse {
    pub response: String,
}
