pub mod create;
pub mod delete;
pub mod fanout;
pub mod get;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::announcements::requests::{
    AnnouncementListParams, CreateAnnouncementRequest, UpdateAnnouncementRequest,
};
use crate::storage::Storage;

pub struct AnnouncementService {
    storage: Option<Arc<dyn Storage>>,
}

impl AnnouncementService {
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

    // 发布公告并扇出通知
    pub async fn create_announcement(
        &self,
        req: &HttpRequest,
        announcement_data: CreateAnnouncementRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_announcement(self, req, announcement_data).await
    }

    // 按科目列出公告
    pub async fn list_announcements(
        &self,
        req: &HttpRequest,
        query: AnnouncementListParams,
    ) -> ActixResult<HttpResponse> {
        list::list_announcements(self, req, query).await
    }

    // 获取公告详情
    pub async fn get_announcement(
        &self,
        req: &HttpRequest,
        announcement_id: i64,
    ) -> ActixResult<HttpResponse> {
        get::get_announcement(self, req, announcement_id).await
    }

    // 更新公告（仅发布教师）
    pub async fn update_announcement(
        &self,
        req: &HttpRequest,
        announcement_id: i64,
        update_data: UpdateAnnouncementRequest,
        user_id: i64,
    ) -> ActixResult<HttpResponse> {
        update::update_announcement(self, req, announcement_id, update_data, user_id).await
    }

    // 删除公告（仅发布教师，已发出的通知保留）
    pub async fn delete_announcement(
        &self,
        req: &HttpRequest,
        announcement_id: i64,
        user_id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::delete_announcement(self, req, announcement_id, user_id).await
    }
}
