use serde::Serialize;
use sqlx::SqlitePool;

use crate::services::baidu_service::{BaiduTranslator, LANG_EN, LANG_ZH};
use crate::services::entry_service;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LookupSource {
    Database,
    Gateway,
}

#[derive(Debug, Serialize)]
pub struct LookupResult {
    pub translation: String,
    pub source: LookupSource,
}

#[derive(Debug, PartialEq, Eq)]
pub enum LookupError {
    EmptyQuery,
    NotFound,
}

/// 是否包含 CJK 统一表意文字（U+4E00..=U+9FFF）
///
/// 只要出现一个汉字就按中文处理，混合文本同样走 zh→en，
/// 这是有意保留的粗粒度规则。
pub fn contains_cjk(text: &str) -> bool {
    text.chars().any(|c| ('\u{4e00}'..='\u{9fff}').contains(&c))
}

/// 查询入口：本地词库优先，未命中时按语种方向调用翻译网关
pub async fn lookup(
    pool: &SqlitePool,
    baidu: &BaiduTranslator,
    query: &str,
) -> Result<LookupResult, LookupError> {
    let query = query.trim();
    if query.is_empty() {
        return Err(LookupError::EmptyQuery);
    }

    // 本地词库始终优先于外部接口
    let hit = entry_service::find_by_word(pool, query)
        .await
        .unwrap_or(None);
    if let Some(entry) = hit {
        tracing::info!("<<< 词库命中: {} -> {}", query, entry.translation);
        return Ok(LookupResult {
            translation: entry.translation,
            source: LookupSource::Database,
        });
    }

    let (from, to) = if contains_cjk(query) {
        (LANG_ZH, LANG_EN)
    } else {
        (LANG_EN, LANG_ZH)
    };

    match baidu.translate(query, from, to).await {
        Some(translation) => {
            tracing::info!("<<< 网关翻译成功: {} -> {}", query, translation);
            Ok(LookupResult {
                translation,
                source: LookupSource::Gateway,
            })
        }
        None => Err(LookupError::NotFound),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::sqlite::SqlitePoolOptions;

    #[test]
    fn cjk_detection() {
        assert!(contains_cjk("时间"));
        assert!(contains_cjk("hello 世界"));
        assert!(!contains_cjk("hello"));
        assert!(!contains_cjk("café 123"));
    }

    async fn test_pool() -> SqlitePool {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .expect("连接内存数据库失败");
        crate::MIGRATOR.run(&pool).await.expect("执行迁移失败");
        pool
    }

    fn unreachable_translator() -> BaiduTranslator {
        BaiduTranslator::new(
            "testapp".to_string(),
            "sekret".to_string(),
            "http://127.0.0.1:9/translate".to_string(),
        )
        .expect("构建客户端失败")
    }

    #[tokio::test]
    async fn empty_query_never_reaches_store_or_gateway() {
        let pool = test_pool().await;
        let baidu = unreachable_translator();
        assert_eq!(
            lookup(&pool, &baidu, "").await.unwrap_err(),
            LookupError::EmptyQuery
        );
        assert_eq!(
            lookup(&pool, &baidu, "   ").await.unwrap_err(),
            LookupError::EmptyQuery
        );
    }

    #[tokio::test]
    async fn database_hit_wins_regardless_of_script() {
        let pool = test_pool().await;
        entry_service::upsert(&pool, "hello", "你好")
            .await
            .expect("upsert 失败");
        entry_service::upsert(&pool, "时间", "time")
            .await
            .expect("upsert 失败");
        let baidu = unreachable_translator();

        let result = lookup(&pool, &baidu, "hello").await.expect("查询失败");
        assert_eq!(result.translation, "你好");
        assert_eq!(result.source, LookupSource::Database);

        let result = lookup(&pool, &baidu, "时间").await.expect("查询失败");
        assert_eq!(result.translation, "time");
        assert_eq!(result.source, LookupSource::Database);
    }

    #[tokio::test]
    async fn gateway_unavailable_maps_to_not_found() {
        let pool = test_pool().await;
        let baidu = unreachable_translator();
        assert_eq!(
            lookup(&pool, &baidu, "天气").await.unwrap_err(),
            LookupError::NotFound
        );
    }
}
