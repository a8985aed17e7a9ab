use crate::error::AppError;
use crate::{GenerateRequest, GenerateResponse};

use axum::{
    extract::{FromRequest, State},
    routing::post,
    Json, Router,
};
use std::sync::Arc;
use std::time::{Duration, Instant};
use text_provider::{ProviderError, TextGenerator};
use tower_http::trace::TraceLayer;
use tracing::{instrument, Span};

/// `Json` whose rejections answer through [`AppError`].
#[derive(FromRequest)]
#[from_request(via(Json), rejection(AppError))]
pub struct ValidJson<T>(pub T);

#[derive(Clone)]
pub struct AppState {
    generator: Arc<dyn TextGenerator>,
    generate_timeout: Duration,
}

impl AppState {
    pub fn new(generator: Arc<dyn TextGenerator>, generate_timeout: Duration) -> Self {
        Self {
            generator,
            generate_timeout,
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/generate", post(generate_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[instrument(skip_all, fields(message_len, elapsed_time))]
async fn generate_handler(
    State(state): State<AppState>,
    ValidJson(request): ValidJson<GenerateRequest>,
) -> Result<Json<GenerateResponse>, AppError> {
    let span = Span::current();
    let message = request.message.trim();
    span.record("message_len", message.len());

    if message.is_empty() {
        return Err(AppError::EmptyMessage);
    }

    let start_time = Instant::now();
    let generated = match tokio::time::timeout(
        state.generate_timeout,
        state.generator.generate(message),
    )
    .await
    {
        Ok(generated) => generated,
        Err(_) => Err(ProviderError::Timeout(state.generate_timeout)),
    };
    span.record("elapsed_time", start_time.elapsed().as_secs_f32());

    let response = generated.map_err(|e| {
        tracing::error!("Error: {:?}", e);
        AppError::from(e)
    })?;

    tracing::info!("SUCCESS");
    Ok(Json(GenerateResponse { response }))
}
