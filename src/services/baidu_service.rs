use rand::Rng;
use reqwest::Client;
use std::time::Duration;

pub const LANG_ZH: &str = "zh";
pub const LANG_EN: &str = "en";

/// 外部接口无超时约定，客户端侧统一兜底 5 秒
const REQUEST_TIMEOUT_SECS: u64 = 5;

/// 百度翻译客户端
///
/// 凭证来自启动配置，任何失败（网络、超时、响应格式、服务端错误码）
/// 对调用方都只表现为 None。
#[derive(Debug, Clone)]
pub struct BaiduTranslator {
    http: Client,
    app_id: String,
    secret_key: String,
    endpoint: String,
}

impl BaiduTranslator {
    pub fn new(
        app_id: String,
        secret_key: String,
        endpoint: String,
    ) -> Result<Self, reqwest::Error> {
        let http = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;
        Ok(Self {
            http,
            app_id,
            secret_key,
            endpoint,
        })
    }

    pub async fn translate(&self, query: &str, from: &str, to: &str) -> Option<String> {
        let salt = rand::thread_rng().gen_range(32768..=65536).to_string();
        let sign = sign(&self.app_id, query, &salt, &self.secret_key);

        let response = self
            .http
            .get(&self.endpoint)
            .query(&[
                ("q", query),
                ("from", from),
                ("to", to),
                ("appid", &self.app_id),
                ("salt", &salt),
                ("sign", &sign),
            ])
            .send()
            .await;

        let body: serde_json::Value = match response {
            Ok(resp) => match resp.json().await {
                Ok(value) => value,
                Err(e) => {
                    tracing::warn!("--- 翻译接口响应解析失败: {}", e);
                    return None;
                }
            },
            Err(e) => {
                tracing::warn!("--- 翻译接口请求失败: {}", e);
                return None;
            }
        };

        if let Some(code) = body.get("error_code") {
            tracing::warn!("--- 翻译接口返回错误码: {}", code);
        }

        body.get("trans_result")
            .and_then(|v| v.get(0))
            .and_then(|v| v.get("dst"))
            .and_then(|v| v.as_str())
            .map(|s| s.to_string())
    }
}

/// 签名 = md5(appid + 原文 + salt + 密钥)，顺序固定、无分隔符
fn sign(app_id: &str, query: &str, salt: &str, secret_key: &str) -> String {
    format!("{:x}", md5::compute(format!("{app_id}{query}{salt}{secret_key}")))
}
