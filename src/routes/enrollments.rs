use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::enrollments::requests::{
    CreateEnrollmentRequest, EnrollmentQueryParams, UpdateEnrollmentStatusRequest,
};
use crate::models::users::entities::UserRole;
use crate::services::EnrollmentService;
use crate::utils::SafeIDI64;

// 懒加载的全局 EnrollmentService 实例
static ENROLLMENT_SERVICE: Lazy<EnrollmentService> = Lazy::new(EnrollmentService::new_lazy);

// 学生注册课程
pub async fn enroll_student(
    req: HttpRequest,
    body: web::Json<CreateEnrollmentRequest>,
) -> ActixResult<HttpResponse> {
    ENROLLMENT_SERVICE
        .enroll_student(&req, body.into_inner())
        .await
}

// 更新注册状态
pub async fn update_enrollment_status(
    req: HttpRequest,
    path: SafeIDI64,
    body: web::Json<UpdateEnrollmentStatusRequest>,
) -> ActixResult<HttpResponse> {
    ENROLLMENT_SERVICE
        .update_enrollment_status(&req, path.0, body.into_inner().status)
        .await
}

// 列出注册
pub async fn list_enrollments(
    req: HttpRequest,
    query: web::Query<EnrollmentQueryParams>,
) -> ActixResult<HttpResponse> {
    ENROLLMENT_SERVICE
        .list_enrollments(&req, query.into_inner())
        .await
}

// 配置路由
pub fn configure_enrollments_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/enrollments")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    // 列出注册 - 所有登录用户可访问（学生只能看到自己的记录）
                    .route(web::get().to(list_enrollments))
                    // 学生注册课程 - 仅管理员
                    .route(
                        web::post()
                            .to(enroll_student)
                            .wrap(middlewares::RateLimit::admin_mutation())
                            .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                    ),
            )
            .service(
                web::resource("/{id}/status")
                    // 更新注册状态 - 仅管理员
                    .route(
                        web::put()
                            .to(update_enrollment_status)
                            .wrap(middlewares::RateLimit::admin_mutation())
                            .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                    ),
            ),
    );
}
