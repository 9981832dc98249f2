use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::EnrollmentService;
use crate::models::enrollments::entities::EnrollmentStatus;
use crate::models::{ApiResponse, ErrorCode};

pub async fn update_enrollment_status(
    service: &EnrollmentService,
    request: &HttpRequest,
    enrollment_id: i64,
    status: EnrollmentStatus,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 状态流转不做限制：休学可复学，毕业/转出也可由管理员纠错回退
    match storage.update_enrollment_status(enrollment_id, status).await {
        Ok(Some(enrollment)) => {
            info!(
                "Enrollment {} status changed to {}",
                enrollment.id, enrollment.status
            );
            Ok(HttpResponse::Ok().json(ApiResponse::success(enrollment, "注册状态更新成功")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::EnrollmentNotFound,
            "注册记录不存在",
        ))),
        Err(e) => {
            error!("Enrollment status update failed: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("注册状态更新失败: {e}"),
                )),
            )
        }
    }
}
