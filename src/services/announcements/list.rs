use crate::models::announcements::requests::{AnnouncementListParams, AnnouncementListQuery};
use crate::models::{ApiResponse, ErrorCode};
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AnnouncementService;

pub async fn list_announcements(
    service: &AnnouncementService,
    request: &HttpRequest,
    params: AnnouncementListParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let query = AnnouncementListQuery {
        page: Some(params.pagination.page),
        size: Some(params.pagination.size),
        subject_id: params.subject_id,
        search: params.search,
    };

    match storage.list_announcements_with_pagination(query).await {
        Ok(resp) => Ok(HttpResponse::Ok().json(ApiResponse::success(resp, "获取公告列表成功"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("获取公告列表失败: {e}"),
            )),
        ),
    }
}
