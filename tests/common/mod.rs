#![allow(dead_code)]

use axum::body::{to_bytes, Body};
use axum::extract::Query;
use axum::http::{header, HeaderMap, Request, StatusCode};
use axum::routing::get;
use axum::Router;
use bilingual_dict_backend::config::AppConfig;
use bilingual_dict_backend::services::baidu_service::BaiduTranslator;
use bilingual_dict_backend::{build_router, seed, AppState, MIGRATOR};
use serde_json::Value;
use sqlx::sqlite::SqlitePoolOptions;
use std::collections::HashMap;
use std::sync::Arc;
use tower::util::ServiceExt;

pub struct TestContext {
    pub state: Arc<AppState>,
    pub app: Router,
}

/// 默认上下文：网关指向必然连接失败的端口（discard 服务）
pub async fn build_test_context() -> TestContext {
    build_test_context_with_endpoint("http://127.0.0.1:9/translate".to_string()).await
}

pub async fn build_test_context_with_endpoint(endpoint: String) -> TestContext {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("连接内存数据库失败");
    MIGRATOR.run(&pool).await.expect("执行迁移失败");

    let config = AppConfig {
        database_url: "sqlite::memory:".to_string(),
        bind_addr: "127.0.0.1:0".parse().expect("地址解析失败"),
        session_secret: "test-secret".to_string(),
        admin_password: "changeme".to_string(),
        baidu_app_id: "testapp".to_string(),
        baidu_secret_key: "sekret".to_string(),
        baidu_api_url: endpoint.clone(),
    };
    seed::create_initial_data(&pool, &config)
        .await
        .expect("写入初始数据失败");

    let baidu = BaiduTranslator::new("testapp".to_string(), "sekret".to_string(), endpoint)
        .expect("构建网关客户端失败");
    let state = Arc::new(AppState {
        db: pool,
        config,
        baidu,
    });
    TestContext {
        app: build_router(state.clone()),
        state,
    }
}

/// 启动一个固定返回 body 的本地 mock 翻译服务，返回完整接口地址
pub async fn spawn_mock_provider(body: &'static str) -> String {
    let app = Router::new().route("/translate", get(move || async move { body }));
    spawn(app).await
}

/// 启动一个回显语向的 mock 翻译服务：dst = "from>to"
///
/// 请求参数不完整（缺 appid/salt 或签名不是 32 位十六进制）时返回空对象，
/// 调用方会因此拿到 404，相当于把参数校验编码进了测试。
pub async fn spawn_echo_provider() -> String {
    let app = Router::new().route(
        "/translate",
        get(|Query(params): Query<HashMap<String, String>>| async move {
            let sign_ok = params
                .get("sign")
                .map(|s| s.len() == 32 && s.chars().all(|c| c.is_ascii_hexdigit()))
                .unwrap_or(false);
            if params.get("appid").map(String::as_str) != Some("testapp")
                || !params.contains_key("salt")
                || !sign_ok
            {
                return "{}".to_string();
            }
            let from = params.get("from").cloned().unwrap_or_default();
            let to = params.get("to").cloned().unwrap_or_default();
            format!(
                "{{\"trans_result\":[{{\"src\":\"x\",\"dst\":\"{}>{}\"}}]}}",
                from, to
            )
        }),
    );
    spawn(app).await
}

async fn spawn(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("绑定端口失败");
    let addr = listener.local_addr().expect("获取监听地址失败");
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    format!("http://{}/translate", addr)
}

async fn send(app: &Router, req: Request<Body>) -> (StatusCode, HeaderMap, String) {
    let resp = app.clone().oneshot(req).await.expect("请求处理失败");
    let status = resp.status();
    let headers = resp.headers().clone();
    let bytes = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("读取响应体失败");
    (status, headers, String::from_utf8_lossy(&bytes).into_owned())
}

pub async fn get_page(
    app: &Router,
    uri: &str,
    cookie: Option<&str>,
) -> (StatusCode, HeaderMap, String) {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    send(app, builder.body(Body::empty()).expect("构建请求失败")).await
}

pub async fn post_form(
    app: &Router,
    uri: &str,
    cookie: Option<&str>,
    body: String,
) -> (StatusCode, HeaderMap, String) {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    send(app, builder.body(Body::from(body)).expect("构建请求失败")).await
}

pub async fn post_json(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let req = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("构建请求失败");
    let (status, _, text) = send(app, req).await;
    let value = serde_json::from_str(&text).unwrap_or(Value::Null);
    (status, value)
}

/// 从 Set-Cookie 中取出指定名字的 "name=value" 片段
pub fn extract_cookie(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .find_map(|v| {
            let pair = v.split(';').next()?.trim();
            pair.starts_with(&format!("{name}=")).then(|| pair.to_string())
        })
}

/// 以种子管理员身份登录，返回可直接放进 Cookie 头的会话片段
pub async fn login_session(app: &Router) -> String {
    let (status, headers, _) = post_form(
        app,
        "/login/",
        None,
        "username=admin&password=changeme".to_string(),
    )
    .await;
    assert_eq!(status, StatusCode::SEE_OTHER, "种子管理员登录应当成功");
    let cookie = extract_cookie(&headers, "dict_session").expect("登录后应当下发会话 Cookie");
    assert!(!cookie.ends_with('='), "会话 Cookie 不应为空值");
    cookie
}
