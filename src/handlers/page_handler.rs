use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse},
};
use axum_extra::extract::cookie::CookieJar;
use std::sync::Arc;

use crate::auth::AuthUser;
use crate::services::entry_service;
use crate::{flash, templates, AppState};

/// 1. 公开首页
pub async fn home() -> Html<String> {
    Html(templates::home_page())
}

/// 2. 管理面板：全量词条列表，最近更新的在前
pub async fn admin_panel(
    user: AuthUser,
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
) -> axum::response::Response {
    let (jar, flash) = flash::take(jar);

    match entry_service::list_all(&state.db).await {
        Ok(entries) => {
            tracing::debug!("<<< 词条列表获取完毕, 数量: {}", entries.len());
            (
                jar,
                Html(templates::admin_panel_page(
                    &user.username,
                    &entries,
                    flash.as_ref(),
                )),
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!("!!! 获取词条列表异常: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "查询失败").into_response()
        }
    }
}
