use std::sync::Arc;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::EnrollmentService;
use crate::models::enrollments::requests::CreateEnrollmentRequest;
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};
use crate::storage::Storage;

pub async fn enroll_student(
    service: &EnrollmentService,
    request: &HttpRequest,
    enrollment_data: CreateEnrollmentRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 关联记录校验
    if let Err(resp) = check_enrollment_references(&storage, &enrollment_data).await {
        return Ok(resp);
    }

    // 创建注册
    match storage.create_enrollment(enrollment_data).await {
        Ok(enrollment) => {
            info!(
                "Student {} enrolled in course {}",
                enrollment.student_id, enrollment.course_id
            );
            Ok(HttpResponse::Created().json(ApiResponse::success(enrollment, "注册创建成功")))
        }
        Err(e) => Ok(handle_enrollment_create_error(&e.to_string())),
    }
}

/// 关联记录校验辅助函数
async fn check_enrollment_references(
    storage: &Arc<dyn Storage>,
    data: &CreateEnrollmentRequest,
) -> Result<(), HttpResponse> {
    // 被注册的用户必须是学生
    match storage.get_user_by_id(data.student_id).await {
        Ok(Some(user)) => {
            if user.role != UserRole::Student {
                return Err(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                    ErrorCode::ValidationFailed,
                    "student_id: 指定用户不是学生",
                )));
            }
        }
        Ok(None) => {
            return Err(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::UserNotFound,
                "学生不存在",
            )));
        }
        Err(e) => {
            error!("Failed to get user by id: {}", e);
            return Err(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Internal server error while fetching user",
                )),
            );
        }
    }

    match storage.get_course_by_id(data.course_id).await {
        Ok(Some(_)) => Ok(()),
        Ok(None) => Err(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::CourseNotFound,
            "课程不存在",
        ))),
        Err(e) => {
            error!("Failed to get course by id: {}", e);
            Err(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Internal server error while fetching course",
                )),
            )
        }
    }
}

/// 错误响应辅助函数
fn handle_enrollment_create_error(e: &str) -> HttpResponse {
    let msg = format!("Enrollment creation failed: {e}");
    error!("{}", msg);
    if msg.contains("UNIQUE constraint failed") {
        HttpResponse::Conflict().json(ApiResponse::error_empty(
            ErrorCode::EnrollmentAlreadyExists,
            "该学生已注册此课程",
        ))
    } else if msg.contains("FOREIGN KEY constraint failed") {
        HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationFailed,
            "关联的学生或课程不存在",
        ))
    } else {
        HttpResponse::InternalServerError()
            .json(ApiResponse::error_empty(ErrorCode::InternalServerError, msg))
    }
}
