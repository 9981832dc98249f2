use crate::models::subjects::requests::{SubjectListQuery, SubjectQueryParams};
use crate::models::{ApiResponse, ErrorCode};
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::SubjectService;

pub async fn list_subjects(
    service: &SubjectService,
    request: &HttpRequest,
    params: SubjectQueryParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let query = SubjectListQuery {
        page: Some(params.pagination.page),
        size: Some(params.pagination.size),
        search: params.search,
    };

    match storage.list_subjects_with_pagination(query).await {
        Ok(resp) => Ok(HttpResponse::Ok().json(ApiResponse::success(resp, "获取科目列表成功"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("获取科目列表失败: {e}"),
            )),
        ),
    }
}
