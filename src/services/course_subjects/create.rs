use std::sync::Arc;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::CourseSubjectService;
use crate::models::course_subjects::requests::CreateCourseSubjectRequest;
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};
use crate::storage::Storage;
use crate::utils::validate::validate_schedule;

pub async fn create_course_subject(
    service: &CourseSubjectService,
    request: &HttpRequest,
    course_subject_data: CreateCourseSubjectRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 课表格式校验
    if let Err(msg) = validate_schedule(&course_subject_data.schedule) {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationFailed,
            format!("schedule: {msg}"),
        )));
    }

    // 关联记录校验
    if let Err(resp) = check_course_subject_references(&storage, &course_subject_data).await {
        return Ok(resp);
    }

    // 创建课程科目分配
    match storage.create_course_subject(course_subject_data).await {
        Ok(course_subject) => {
            info!(
                "Course subject {} created (course {}, subject {}, teacher {})",
                course_subject.id,
                course_subject.course_id,
                course_subject.subject_id,
                course_subject.teacher_id
            );
            Ok(HttpResponse::Created()
                .json(ApiResponse::success(course_subject, "课程科目分配创建成功")))
        }
        Err(e) => Ok(handle_course_subject_create_error(&e.to_string())),
    }
}

/// 关联记录校验辅助函数
async fn check_course_subject_references(
    storage: &Arc<dyn Storage>,
    data: &CreateCourseSubjectRequest,
) -> Result<(), HttpResponse> {
    match storage.get_course_by_id(data.course_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Err(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::CourseNotFound,
                "课程不存在",
            )));
        }
        Err(e) => {
            error!("Failed to get course by id: {}", e);
            return Err(internal_error("Internal server error while fetching course"));
        }
    }

    match storage.get_subject_by_id(data.subject_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Err(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::SubjectNotFound,
                "科目不存在",
            )));
        }
        Err(e) => {
            error!("Failed to get subject by id: {}", e);
            return Err(internal_error(
                "Internal server error while fetching subject",
            ));
        }
    }

    // 被指派的用户必须是教师
    match storage.get_user_by_id(data.teacher_id).await {
        Ok(Some(user)) => {
            if user.role != UserRole::Teacher {
                return Err(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                    ErrorCode::ValidationFailed,
                    "teacher_id: 指定用户不是教师",
                )));
            }
        }
        Ok(None) => {
            return Err(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::UserNotFound,
                "教师不存在",
            )));
        }
        Err(e) => {
            error!("Failed to get user by id: {}", e);
            return Err(internal_error("Internal server error while fetching user"));
        }
    }

    Ok(())
}

fn internal_error(message: &str) -> HttpResponse {
    HttpResponse::InternalServerError()
        .json(ApiResponse::error_empty(ErrorCode::InternalServerError, message))
}

/// 错误响应辅助函数
fn handle_course_subject_create_error(e: &str) -> HttpResponse {
    let msg = format!("Course subject creation failed: {e}");
    error!("{}", msg);
    if msg.contains("UNIQUE constraint failed") {
        HttpResponse::Conflict().json(ApiResponse::error_empty(
            ErrorCode::CourseSubjectAlreadyExists,
            "该课程已开设此科目",
        ))
    } else if msg.contains("FOREIGN KEY constraint failed") {
        HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationFailed,
            "关联的课程、科目或教师不存在",
        ))
    } else {
        HttpResponse::InternalServerError()
            .json(ApiResponse::error_empty(ErrorCode::InternalServerError, msg))
    }
}
