use serde::Deserialize;
use ts_rs::TS;

use super::entities::NotificationType;
use crate::models::common::PaginationQuery;

/// 创建通知请求（存储层输入，由服务层扇出逻辑构造）
#[derive(Debug, Clone)]
pub struct CreateNotificationRequest {
    pub notification_type: NotificationType,
    pub title: String,
    pub message: String,
    pub related_id: i64,
    pub course_subject_id: i64,
    pub student_id: i64,
    pub expires_at: chrono::DateTime<chrono::Utc>,
}

/// 通知列表查询参数（HTTP 请求）
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/notification.ts")]
pub struct NotificationListParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    pub unread_only: Option<bool>,
}

// 用于存储层的内部查询参数
#[derive(Debug, Clone)]
pub struct NotificationListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub unread_only: Option<bool>,
}
