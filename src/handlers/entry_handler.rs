use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Redirect},
    Form,
};
use axum_extra::extract::cookie::CookieJar;
use std::sync::Arc;

use crate::auth::AuthUser;
use crate::flash::{self, FlashKind};
use crate::models::entry::EntryForm;
use crate::services::entry_service;
use crate::AppState;

/// 1. 新增或更新词条：word 已存在时覆盖译文
pub async fn add_entry(
    _user: AuthUser,
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    Form(payload): Form<EntryForm>,
) -> axum::response::Response {
    let word = payload.word.trim();
    let translation = payload.translation.trim();

    if word.is_empty() || translation.is_empty() {
        // 校验失败不触碰存储
        let jar = flash::set(jar, FlashKind::Error, "单词和译文均不能为空");
        return (jar, Redirect::to("/admin/")).into_response();
    }

    tracing::info!(">>> 保存词条: word={}", word);

    match entry_service::upsert(&state.db, word, translation).await {
        Ok((entry, true)) => {
            tracing::info!("<<< 词条新增成功: {}", entry.word);
            let jar = flash::set(
                jar,
                FlashKind::Success,
                &format!("词条 \"{}\" 添加成功", entry.word),
            );
            (jar, Redirect::to("/admin/")).into_response()
        }
        Ok((entry, false)) => {
            tracing::info!("<<< 词条更新成功: {}", entry.word);
            let jar = flash::set(
                jar,
                FlashKind::Success,
                &format!("词条 \"{}\" 更新成功", entry.word),
            );
            (jar, Redirect::to("/admin/")).into_response()
        }
        Err(e) => {
            tracing::error!("!!! 词条保存失败: word={}, Error: {}", word, e);
            (StatusCode::INTERNAL_SERVER_ERROR, "保存失败").into_response()
        }
    }
}

/// 2. 按 id 删除词条：id 不存在只提示，不报错
pub async fn delete_entry(
    _user: AuthUser,
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    Path(id): Path<i64>,
) -> axum::response::Response {
    tracing::info!(">>> 删除词条: id={}", id);

    match entry_service::delete_by_id(&state.db, id).await {
        Ok(Some(word)) => {
            tracing::info!("<<< 词条删除成功: {}", word);
            let jar = flash::set(
                jar,
                FlashKind::Success,
                &format!("词条 \"{}\" 删除成功", word),
            );
            (jar, Redirect::to("/admin/")).into_response()
        }
        Ok(None) => {
            tracing::warn!("--- 尝试删除不存在的词条: id={}", id);
            let jar = flash::set(jar, FlashKind::Error, "词条不存在");
            (jar, Redirect::to("/admin/")).into_response()
        }
        Err(e) => {
            tracing::error!("!!! 词条删除异常: id={}, Error: {}", id, e);
            (StatusCode::INTERNAL_SERVER_ERROR, "删除失败").into_response()
        }
    }
}
