use std::sync::Arc;

use bilingual_dict_backend::config::AppConfig;
use bilingual_dict_backend::services::baidu_service::BaiduTranslator;
use bilingual_dict_backend::{build_router, seed, AppState, MIGRATOR};
use dotenvy::dotenv;
use sqlx::sqlite::SqlitePoolOptions;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // 1. 初始化日志系统
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // 2. 加载 .env 环境变量并构建配置
    dotenv().ok();
    let config = AppConfig::from_env();

    // 3. 初始化数据库连接池
    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect(&config.database_url)
        .await
        .expect("Failed to create database connection pool");

    // 4. 执行迁移并写入初始数据
    MIGRATOR
        .run(&pool)
        .await
        .expect("Failed to run database migrations");
    seed::create_initial_data(&pool, &config)
        .await
        .expect("Failed to seed initial data");

    // 5. 构建翻译网关客户端（凭证来自配置，不落源码）
    let baidu = BaiduTranslator::new(
        config.baidu_app_id.clone(),
        config.baidu_secret_key.clone(),
        config.baidu_api_url.clone(),
    )
    .expect("Failed to build translation client");

    let bind_addr = config.bind_addr;
    let shared_state = Arc::new(AppState {
        db: pool,
        config,
        baidu,
    });

    // 6. 构建路由并启动服务
    let app = build_router(shared_state);

    tracing::info!("🚀 Server started at http://{}", bind_addr);

    let listener = tokio::net::TcpListener::bind(bind_addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
