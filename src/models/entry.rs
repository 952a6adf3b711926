use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use chrono::{DateTime, Utc};

#[derive(Debug, Serialize, Deserialize, FromRow)]
pub struct DictionaryEntry {
    pub id: i64,
    pub word: String,
    pub translation: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Deserialize)]
pub struct EntryForm {
    pub word: String,        // 用户输入，入库前需 trim
    pub translation: String,
}
