//! 通知存储操作

use super::SeaOrmStorage;
use crate::entity::notifications::{ActiveModel, Column, Entity as Notifications};
use crate::errors::{EduSystemError, Result};
use crate::models::{
    PaginationInfo,
    notifications::{
        entities::Notification,
        requests::{CreateNotificationRequest, NotificationListQuery},
        responses::NotificationListResponse,
    },
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    /// 批量创建通知
    ///
    /// 逐条插入，任一失败即返回错误；调用方（公告扇出）记录日志后吞掉。
    pub async fn create_notifications_batch_impl(
        &self,
        reqs: Vec<CreateNotificationRequest>,
    ) -> Result<Vec<Notification>> {
        let now = chrono::Utc::now().timestamp();
        let mut notifications = Vec::with_capacity(reqs.len());

        for req in reqs {
            let model = ActiveModel {
                notification_type: Set(req.notification_type.to_string()),
                title: Set(req.title),
                message: Set(req.message),
                related_id: Set(req.related_id),
                course_subject_id: Set(req.course_subject_id),
                student_id: Set(req.student_id),
                is_read: Set(false),
                created_at: Set(now),
                expires_at: Set(req.expires_at.timestamp()),
                ..Default::default()
            };

            let result = model
                .insert(&self.db)
                .await
                .map_err(|e| EduSystemError::database_operation(format!("批量创建通知失败: {e}")))?;

            notifications.push(result.into_notification());
        }

        Ok(notifications)
    }

    /// 通过 ID 获取通知
    pub async fn get_notification_by_id_impl(
        &self,
        notification_id: i64,
    ) -> Result<Option<Notification>> {
        let result = Notifications::find_by_id(notification_id)
            .one(&self.db)
            .await
            .map_err(|e| EduSystemError::database_operation(format!("查询通知失败: {e}")))?;

        Ok(result.map(|m| m.into_notification()))
    }

    /// 列出学生通知（分页，排除过期）
    pub async fn list_notifications_with_pagination_impl(
        &self,
        student_id: i64,
        query: NotificationListQuery,
    ) -> Result<NotificationListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;
        let now = chrono::Utc::now().timestamp();

        let mut select = Notifications::find()
            .filter(Column::StudentId.eq(student_id))
            .filter(Column::ExpiresAt.gt(now));

        // 未读筛选
        if let Some(true) = query.unread_only {
            select = select.filter(Column::IsRead.eq(false));
        }

        // 排序
        select = select.order_by_desc(Column::CreatedAt);

        // 分页查询
        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| EduSystemError::database_operation(format!("查询通知总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| EduSystemError::database_operation(format!("查询通知页数失败: {e}")))?;

        let notifications = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| EduSystemError::database_operation(format!("查询通知列表失败: {e}")))?;

        Ok(NotificationListResponse {
            items: notifications
                .into_iter()
                .map(|m| m.into_notification())
                .collect(),
            pagination: PaginationInfo {
                page: page as i64,
                size: size as i64,
                total: total as i64,
                pages: pages as i64,
            },
        })
    }

    /// 获取学生未读通知数量（排除过期）
    pub async fn get_unread_notification_count_impl(&self, student_id: i64) -> Result<i64> {
        let now = chrono::Utc::now().timestamp();
        let count = Notifications::find()
            .filter(Column::StudentId.eq(student_id))
            .filter(Column::IsRead.eq(false))
            .filter(Column::ExpiresAt.gt(now))
            .count(&self.db)
            .await
            .map_err(|e| {
                EduSystemError::database_operation(format!("查询未读通知数量失败: {e}"))
            })?;

        Ok(count as i64)
    }

    /// 标记通知为已读
    pub async fn mark_notification_as_read_impl(&self, notification_id: i64) -> Result<bool> {
        let result = Notifications::update_many()
            .col_expr(Column::IsRead, sea_orm::sea_query::Expr::value(true))
            .filter(Column::Id.eq(notification_id))
            .exec(&self.db)
            .await
            .map_err(|e| EduSystemError::database_operation(format!("标记通知已读失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 标记学生所有通知为已读
    pub async fn mark_all_notifications_as_read_impl(&self, student_id: i64) -> Result<i64> {
        let result = Notifications::update_many()
            .col_expr(Column::IsRead, sea_orm::sea_query::Expr::value(true))
            .filter(Column::StudentId.eq(student_id))
            .filter(Column::IsRead.eq(false))
            .exec(&self.db)
            .await
            .map_err(|e| {
                EduSystemError::database_operation(format!("标记全部通知已读失败: {e}"))
            })?;

        Ok(result.rows_affected as i64)
    }

    /// 删除过期通知
    pub async fn delete_expired_notifications_impl(&self) -> Result<i64> {
        let now = chrono::Utc::now().timestamp();
        let result = Notifications::delete_many()
            .filter(Column::ExpiresAt.lte(now))
            .exec(&self.db)
            .await
            .map_err(|e| EduSystemError::database_operation(format!("删除过期通知失败: {e}")))?;

        Ok(result.rows_affected as i64)
    }
}
