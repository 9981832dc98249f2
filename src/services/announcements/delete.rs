use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::AnnouncementService;
use super::update::check_announcement_ownership;
use crate::middlewares::RequireJWT;
use crate::models::{ApiResponse, ErrorCode};

pub async fn delete_announcement(
    service: &AnnouncementService,
    request: &HttpRequest,
    announcement_id: i64,
    user_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let role = RequireJWT::extract_user_role(request);

    // 所有权校验
    if let Err(resp) =
        check_announcement_ownership(&storage, announcement_id, user_id, role).await
    {
        return Ok(resp);
    }

    // 删除公告；已发出的通知保留
    match storage.delete_announcement(announcement_id).await {
        Ok(true) => {
            info!("Announcement {} deleted by {}", announcement_id, user_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("公告删除成功")))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::AnnouncementNotFound,
            "公告不存在",
        ))),
        Err(e) => {
            error!("Announcement deletion failed: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("公告删除失败: {e}"),
                )),
            )
        }
    }
}
