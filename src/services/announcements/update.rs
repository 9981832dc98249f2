use std::sync::Arc;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::AnnouncementService;
use crate::middlewares::RequireJWT;
use crate::models::announcements::requests::UpdateAnnouncementRequest;
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};
use crate::storage::Storage;
use crate::utils::validate::{validate_message, validate_title};

pub async fn update_announcement(
    service: &AnnouncementService,
    request: &HttpRequest,
    announcement_id: i64,
    update_data: UpdateAnnouncementRequest,
    user_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let role = RequireJWT::extract_user_role(request);

    // 字段校验（仅校验提供的字段）
    if let Some(ref title) = update_data.title
        && let Err(msg) = validate_title(title)
    {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationFailed,
            format!("title: {msg}"),
        )));
    }
    if let Some(ref message) = update_data.message
        && let Err(msg) = validate_message(message)
    {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationFailed,
            format!("message: {msg}"),
        )));
    }

    // 所有权校验
    if let Err(resp) =
        check_announcement_ownership(&storage, announcement_id, user_id, role).await
    {
        return Ok(resp);
    }

    // 更新公告（不重新触发通知扇出）
    match storage
        .update_announcement(announcement_id, update_data)
        .await
    {
        Ok(Some(announcement)) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(announcement, "公告更新成功")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::AnnouncementNotFound,
            "公告不存在",
        ))),
        Err(e) => {
            error!("Announcement update failed: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("公告更新失败: {e}"),
                )),
            )
        }
    }
}

/// 所有权校验辅助函数：仅发布教师本人可操作，Admin 放行
pub(super) async fn check_announcement_ownership(
    storage: &Arc<dyn Storage>,
    announcement_id: i64,
    user_id: i64,
    role: Option<UserRole>,
) -> Result<(), HttpResponse> {
    let announcement = match storage.get_announcement_by_id(announcement_id).await {
        Ok(Some(announcement)) => announcement,
        Ok(None) => {
            return Err(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::AnnouncementNotFound,
                "公告不存在",
            )));
        }
        Err(e) => {
            error!("Failed to get announcement by id: {}", e);
            return Err(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Internal server error while fetching announcement",
                )),
            );
        }
    };

    // Admin 直接放行
    if role == Some(UserRole::Admin) {
        return Ok(());
    }

    if announcement.teacher_id != user_id {
        return Err(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::AnnouncementPermissionDenied,
            "只有发布教师可以操作该公告",
        )));
    }

    Ok(())
}
