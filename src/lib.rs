use axum::{
    routing::{get, post},
    Router,
};
use sqlx::SqlitePool;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

// 声明子模块
pub mod auth;
pub mod config;
pub mod flash;
pub mod handlers;
pub mod models;
pub mod seed;
pub mod services;
pub mod templates;

use crate::config::AppConfig;
use crate::services::baidu_service::BaiduTranslator;

/// 嵌入式数据库迁移，启动流程与测试共用
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!();

/// 定义全局状态，方便在 Handler 中获取数据库连接池、配置与网关客户端
pub struct AppState {
    pub db: SqlitePool,
    pub config: AppConfig,
    pub baidu: BaiduTranslator,
}

pub fn build_router(state: Arc<AppState>) -> Router {
    // 跨域放开：/translate/ 需要被任意来源的前端直接调用
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // 公开页面与查询接口
        .route("/", get(handlers::page_handler::home))
        .route("/translate/", post(handlers::translate_handler::translate))
        // 账号相关
        .route(
            "/login/",
            get(handlers::auth_handler::login_page).post(handlers::auth_handler::login),
        )
        .route(
            "/register/",
            get(handlers::auth_handler::register_page).post(handlers::auth_handler::register),
        )
        .route(
            "/logout/",
            get(handlers::auth_handler::logout).post(handlers::auth_handler::logout),
        )
        // 管理面板（登录后可用）
        .route("/admin/", get(handlers::page_handler::admin_panel))
        .route("/add-entry/", post(handlers::entry_handler::add_entry))
        .route(
            "/delete-entry/:id/",
            post(handlers::entry_handler::delete_entry),
        )
        // 中间件：日志记录和跨域
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
