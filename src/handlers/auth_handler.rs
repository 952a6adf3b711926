use axum::{
    extract::State,
    response::{Html, IntoResponse, Redirect},
    Form,
};
use axum_extra::extract::cookie::CookieJar;
use std::sync::Arc;

use crate::models::user::User;
use crate::{auth, flash, templates, AppState};
use argon2::{
    password_hash::{PasswordHasher, SaltString},
    Argon2, PasswordHash, PasswordVerifier,
};
use chrono::Utc;
use rand::rngs::OsRng;
use serde::Deserialize;

#[derive(Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

#[derive(Deserialize)]
pub struct RegisterForm {
    pub username: String,
    pub password: String,
    pub confirm_password: String,
}

async fn fetch_user(pool: &sqlx::SqlitePool, username: &str) -> Option<User> {
    sqlx::query_as::<_, User>(
        "SELECT id, username, password_hash, created_at FROM users WHERE username = ?1",
    )
    .bind(username)
    .fetch_optional(pool)
    .await
    .unwrap_or(None)
}

async fn username_taken(pool: &sqlx::SqlitePool, username: &str) -> bool {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users WHERE username = ?1")
        .bind(username)
        .fetch_one(pool)
        .await
        .map(|n| n > 0)
        .unwrap_or(false)
}

/// 1. 登录页
pub async fn login_page(jar: CookieJar) -> impl IntoResponse {
    let (jar, flash) = flash::take(jar);
    (jar, Html(templates::login_page(None, flash.as_ref())))
}

/// 2. 用户登录：成功写入会话 Cookie 并跳转管理面板
pub async fn login(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    Form(payload): Form<LoginForm>,
) -> axum::response::Response {
    tracing::info!(">>> 登录尝试: username={}", payload.username);

    if let Some(user) = fetch_user(&state.db, &payload.username).await {
        if let Ok(parsed_hash) = PasswordHash::new(&user.password_hash) {
            if Argon2::default()
                .verify_password(payload.password.as_bytes(), &parsed_hash)
                .is_ok()
            {
                let token = match auth::issue_token(&state.config.session_secret, &user) {
                    Ok(token) => token,
                    Err(e) => {
                        tracing::error!("!!! 会话令牌签发失败: {}", e);
                        return Html(templates::login_page(Some("登录失败，请稍后重试"), None))
                            .into_response();
                    }
                };
                tracing::info!("<<< 登录成功: username={}, id={}", user.username, user.id);
                let jar = jar.add(auth::session_cookie(token));
                return (jar, Redirect::to("/admin/")).into_response();
            }
        }
        tracing::warn!("--- 登录失败: 用户[{}]密码校验未通过", payload.username);
    } else {
        tracing::warn!("--- 登录失败: 用户名[{}]不存在", payload.username);
    }

    // 统一提示，不区分用户名还是密码错误
    Html(templates::login_page(Some("用户名或密码错误"), None)).into_response()
}

/// 3. 注册页
pub async fn register_page() -> Html<String> {
    Html(templates::register_page(None))
}

/// 4. 用户注册：两次密码必须一致且用户名未被占用
pub async fn register(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    Form(payload): Form<RegisterForm>,
) -> axum::response::Response {
    tracing::info!(">>> 收到注册请求: username={}", payload.username);

    if payload.password != payload.confirm_password {
        return Html(templates::register_page(Some("两次输入的密码不一致"))).into_response();
    }

    if username_taken(&state.db, &payload.username).await {
        tracing::warn!("--- 注册失败: 用户名[{}]已存在", payload.username);
        return Html(templates::register_page(Some("用户名已存在"))).into_response();
    }

    let salt = SaltString::generate(&mut OsRng);
    let password_hash = Argon2::default()
        .hash_password(payload.password.as_bytes(), &salt)
        .map(|h| h.to_string())
        .unwrap_or_default();

    let res =
        sqlx::query("INSERT INTO users (username, password_hash, created_at) VALUES (?1, ?2, ?3)")
            .bind(&payload.username)
            .bind(&password_hash)
            .bind(Utc::now())
            .execute(&state.db)
            .await;

    match res {
        Ok(_) => {
            tracing::info!("<<< 用户注册成功: username={}", payload.username);
            let jar = flash::set(jar, flash::FlashKind::Success, "注册成功，请登录");
            (jar, Redirect::to("/login/")).into_response()
        }
        Err(e) => {
            // 并发注册同名用户时由唯一约束兜底
            tracing::error!("!!! 用户注册失败: username={}, Error: {}", payload.username, e);
            Html(templates::register_page(Some("用户名已存在"))).into_response()
        }
    }
}

/// 5. 退出登录：清除会话 Cookie 后回到首页
pub async fn logout(jar: CookieJar) -> (CookieJar, Redirect) {
    (auth::remove_session_cookie(jar), Redirect::to("/"))
}
