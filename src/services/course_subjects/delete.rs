use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::CourseSubjectService;
use crate::models::{ApiResponse, ErrorCode};

pub async fn delete_course_subject(
    service: &CourseSubjectService,
    request: &HttpRequest,
    course_subject_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 删除课程科目分配；已发出的通知保留
    match storage.delete_course_subject(course_subject_id).await {
        Ok(true) => {
            info!("Course subject {} deleted", course_subject_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("课程科目分配删除成功")))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::CourseSubjectNotFound,
            "课程科目分配不存在",
        ))),
        Err(e) => {
            error!("Course subject deletion failed: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("课程科目分配删除失败: {e}"),
                )),
            )
        }
    }
}
