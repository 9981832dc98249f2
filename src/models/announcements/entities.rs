use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/announcement.ts")]
pub struct Announcement {
    // 公告ID
    pub id: i64,
    // 公告标题
    pub title: String,
    // 公告正文
    pub message: String,
    // 发布教师ID
    pub teacher_id: i64,
    // 所属科目ID
    pub subject_id: i64,
    // 创建时间
    pub created_at: chrono::DateTime<chrono::Utc>,
    // 更新时间
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
