use std::net::SocketAddr;

/// 百度翻译开放平台的默认接口地址，可用 BAIDU_API_URL 覆盖（测试时指向本地 mock）
pub const DEFAULT_BAIDU_API_URL: &str = "https://fanyi-api.baidu.com/api/trans/vip/translate";

/// 进程级配置，启动时从环境变量加载一次，随 AppState 显式传递
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub bind_addr: SocketAddr,
    pub session_secret: String,
    pub admin_password: String,
    pub baidu_app_id: String,
    pub baidu_secret_key: String,
    pub baidu_api_url: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            database_url: std::env::var("DATABASE_URL")
                .expect("DATABASE_URL must be set in .env file"),
            bind_addr: std::env::var("BIND_ADDR")
                .unwrap_or_else(|_| "127.0.0.1:3000".to_string())
                .parse()
                .expect("BIND_ADDR must be a valid socket address"),
            session_secret: std::env::var("SESSION_SECRET")
                .expect("SESSION_SECRET must be set in .env file"),
            admin_password: std::env::var("ADMIN_PASSWORD")
                .unwrap_or_else(|_| "password".to_string()),
            baidu_app_id: std::env::var("BAIDU_APP_ID")
                .expect("BAIDU_APP_ID must be set in .env file"),
            baidu_secret_key: std::env::var("BAIDU_SECRET_KEY")
                .expect("BAIDU_SECRET_KEY must be set in .env file"),
            baidu_api_url: std::env::var("BAIDU_API_URL")
                .unwrap_or_else(|_| DEFAULT_BAIDU_API_URL.to_string()),
        }
    }
}
