use chrono::Utc;
use sqlx::SqlitePool;

use crate::models::entry::DictionaryEntry;

/// 按单词精确查询，区分大小写
pub async fn find_by_word(
    pool: &SqlitePool,
    word: &str,
) -> Result<Option<DictionaryEntry>, sqlx::Error> {
    sqlx::query_as::<_, DictionaryEntry>(
        "SELECT id, word, translation, created_at, updated_at
         FROM dictionary_entries WHERE word = ?1",
    )
    .bind(word)
    .fetch_optional(pool)
    .await
}

/// 全量词条列表，最近更新的排在前面
pub async fn list_all(pool: &SqlitePool) -> Result<Vec<DictionaryEntry>, sqlx::Error> {
    sqlx::query_as::<_, DictionaryEntry>(
        "SELECT id, word, translation, created_at, updated_at
         FROM dictionary_entries ORDER BY updated_at DESC",
    )
    .fetch_all(pool)
    .await
}

/// 新增或更新词条，返回 (词条, 是否新建)
///
/// 单条 ON CONFLICT 语句保证并发下同词写入只会退化为后写覆盖，
/// 不会触发唯一约束冲突。word/translation 的非空校验由调用方完成。
pub async fn upsert(
    pool: &SqlitePool,
    word: &str,
    translation: &str,
) -> Result<(DictionaryEntry, bool), sqlx::Error> {
    let now = Utc::now();
    let entry = sqlx::query_as::<_, DictionaryEntry>(
        "INSERT INTO dictionary_entries (word, translation, created_at, updated_at)
         VALUES (?1, ?2, ?3, ?3)
         ON CONFLICT(word) DO UPDATE
             SET translation = excluded.translation,
                 updated_at = excluded.updated_at
         RETURNING id, word, translation, created_at, updated_at",
    )
    .bind(word)
    .bind(translation)
    .bind(now)
    .fetch_one(pool)
    .await?;

    // 新建的行 created_at 与 updated_at 写入的是同一个时间戳
    let was_created = entry.created_at == entry.updated_at;
    Ok((entry, was_created))
}

/// 按 id 删除词条，返回被删单词用于提示；id 不存在时返回 None
pub async fn delete_by_id(pool: &SqlitePool, id: i64) -> Result<Option<String>, sqlx::Error> {
    sqlx::query_scalar::<_, String>("DELETE FROM dictionary_entries WHERE id = ?1 RETURNING word")
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn count(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM dictionary_entries")
        .fetch_one(pool)
        .await
}
