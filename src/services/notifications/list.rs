use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::NotificationService;
use crate::models::notifications::requests::{NotificationListParams, NotificationListQuery};
use crate::models::{ApiResponse, ErrorCode};

pub async fn list_notifications(
    service: &NotificationService,
    request: &HttpRequest,
    user_id: i64,
    params: NotificationListParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let query = NotificationListQuery {
        page: Some(params.pagination.page),
        size: Some(params.pagination.size),
        unread_only: params.unread_only,
    };

    match storage
        .list_notifications_with_pagination(user_id, query)
        .await
    {
        Ok(resp) => Ok(HttpResponse::Ok().json(ApiResponse::success(resp, "获取通知列表成功"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("获取通知列表失败: {e}"),
            )),
        ),
    }
}
