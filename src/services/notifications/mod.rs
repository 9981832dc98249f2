pub mod count;
pub mod list;
pub mod mark_all_read;
pub mod mark_read;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::notifications::requests::NotificationListParams;
use crate::storage::Storage;

pub struct NotificationService {
    storage: Option<Arc<dyn Storage>>,
}

impl NotificationService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    // 列出当前用户的通知
    pub async fn list_notifications(
        &self,
        req: &HttpRequest,
        user_id: i64,
        query: NotificationListParams,
    ) -> ActixResult<HttpResponse> {
        list::list_notifications(self, req, user_id, query).await
    }

    // 获取当前用户未读通知数量
    pub async fn get_unread_count(&self, req: &HttpRequest, user_id: i64) -> ActixResult<HttpResponse> {
        count::get_unread_count(self, req, user_id).await
    }

    // 标记单条通知已读
    pub async fn mark_as_read(
        &self,
        req: &HttpRequest,
        notification_id: i64,
        user_id: i64,
    ) -> ActixResult<HttpResponse> {
        mark_read::mark_as_read(self, req, notification_id, user_id).await
    }

    // 标记当前用户全部通知已读
    pub async fn mark_all_as_read(
        &self,
        req: &HttpRequest,
        user_id: i64,
    ) -> ActixResult<HttpResponse> {
        mark_all_read::mark_all_as_read(self, req, user_id).await
    }
}
