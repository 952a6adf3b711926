use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Deserialize;
use std::sync::Arc;

use crate::services::lookup_service::{self, LookupError};
use crate::AppState;

#[derive(Deserialize)]
pub struct TranslateRequest {
    #[serde(default)]
    pub query: String,
}

/// 公开查询接口：本地词库优先，未命中回落到翻译网关
///
/// 网关不可用属于预期的降级路径，对外表现为 404 而不是 5xx。
pub async fn translate(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<TranslateRequest>,
) -> impl IntoResponse {
    tracing::info!(">>> 收到查询请求: query={}", payload.query);

    match lookup_service::lookup(&state.db, &state.baidu, &payload.query).await {
        Ok(result) => (StatusCode::OK, Json(serde_json::json!(result))).into_response(),
        Err(LookupError::EmptyQuery) => (
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({ "error": "Query is required" })),
        )
            .into_response(),
        Err(LookupError::NotFound) => (
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({ "error": "Translation not found" })),
        )
            .into_response(),
    }
}
