use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 通知类型
//
// 以字符串落库，新增通知来源时无需迁移。
#[derive(Debug, Clone, Serialize, PartialEq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/notification.ts")]
pub enum NotificationType {
    Announcement, // 科目公告
}

impl<'de> Deserialize<'de> for NotificationType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            "announcement" => Ok(NotificationType::Announcement),
            _ => Err(serde::de::Error::custom(format!(
                "无效的通知类型: '{s}'. 支持的类型: announcement"
            ))),
        }
    }
}

impl std::fmt::Display for NotificationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NotificationType::Announcement => write!(f, "announcement"),
        }
    }
}

impl std::str::FromStr for NotificationType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "announcement" => Ok(NotificationType::Announcement),
            _ => Err(format!("Invalid notification type: {s}")),
        }
    }
}

// 通知实体
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/notification.ts")]
pub struct Notification {
    pub id: i64,
    pub notification_type: NotificationType,
    pub title: String,
    pub message: String,
    // 来源记录ID（公告通知即公告ID），无外键约束
    pub related_id: i64,
    pub course_subject_id: i64,
    pub student_id: i64,
    pub is_read: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub expires_at: chrono::DateTime<chrono::Utc>,
}
