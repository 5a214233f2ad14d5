use std::time::Instant;

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;

use crate::AppState;
use crate::error::AppError;
use crate::generator::Generator;
use crate::models::{GenerationRequest, GenerationResponse};

pub async fn health_check() -> &'static str {

    "OK"

}

pub async fn generate_handler(
    State(state): State<AppState>,
    payload: Result<Json<GenerationRequest>, JsonRejection>
) -> Result<Json<GenerationResponse>, AppError> {

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            state.request_log.record("rejected", "-", "-", 0).await;
            return Err(AppError::BadRequest(rejection.body_text()));
        }
    };

    let template = Generator::resolve(&request);
    let prompt_type = template.kind.as_str();

    let started = Instant::now();
    let outcome = state.generator.generate(template, &request).await;
    let latency_ms = started.elapsed().as_millis();

    match outcome {
        Ok(text) => {
            tracing::info!(
                prompt_type,
                model = template.model,
                latency_ms = latency_ms as u64,
                "generated text"
            );
            state.request_log.record("ok", prompt_type, template.model, latency_ms).await;
            Ok(Json(GenerationResponse { result: text }))
        }
        Err(err) => {
            state.request_log.record("error", prompt_type, template.model, latency_ms).await;
            Err(AppError::Generation(err))
        }
    }

}
