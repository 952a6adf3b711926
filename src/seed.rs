use argon2::{
    password_hash::{PasswordHasher, SaltString},
    Argon2,
};
use chrono::Utc;
use rand::rngs::OsRng;
use sqlx::SqlitePool;

use crate::config::AppConfig;
use crate::services::entry_service;

/// 演示词条，仅在词库为空时写入
const SEED_ENTRIES: &[(&str, &str)] = &[("hello", "你好"), ("test", "测试"), ("时间", "time")];

/// 启动时写入初始数据：演示词条 + admin 账号，重复执行无副作用
pub async fn create_initial_data(pool: &SqlitePool, config: &AppConfig) -> Result<(), sqlx::Error> {
    if entry_service::count(pool).await? == 0 {
        for (word, translation) in SEED_ENTRIES {
            entry_service::upsert(pool, word, translation).await?;
        }
        tracing::info!("<<< 初始词条已写入, 数量: {}", SEED_ENTRIES.len());
    }

    let admin_exists =
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users WHERE username = ?1")
            .bind("admin")
            .fetch_one(pool)
            .await?
            > 0;

    if !admin_exists {
        let salt = SaltString::generate(&mut OsRng);
        let password_hash = Argon2::default()
            .hash_password(config.admin_password.as_bytes(), &salt)
            .map(|h| h.to_string())
            .unwrap_or_default();

        sqlx::query("INSERT INTO users (username, password_hash, created_at) VALUES (?1, ?2, ?3)")
            .bind("admin")
            .bind(&password_hash)
            .bind(Utc::now())
            .execute(pool)
            .await?;
        tracing::info!("<<< 管理员账号已创建: admin");
    }

    Ok(())
}
