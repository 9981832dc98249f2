use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::CourseSubjectService;
use crate::models::course_subjects::requests::CourseSubjectQueryParams;
use crate::models::course_subjects::responses::CourseSubjectListResponse;
use crate::models::{ApiResponse, ErrorCode};

pub async fn list_course_subjects(
    service: &CourseSubjectService,
    request: &HttpRequest,
    query: CourseSubjectQueryParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 必须按课程或科目过滤，避免全表导出
    if query.course_id.is_none() && query.subject_id.is_none() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "必须指定 course_id 或 subject_id 过滤条件",
        )));
    }

    match storage.list_course_subjects(query).await {
        Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            CourseSubjectListResponse { items },
            "获取课程科目分配列表成功",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("获取课程科目分配列表失败: {e}"),
            )),
        ),
    }
}
