use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::course_subjects::requests::{
    CourseSubjectQueryParams, CreateCourseSubjectRequest,
};
use crate::models::users::entities::UserRole;
use crate::services::CourseSubjectService;
use crate::utils::SafeIDI64;

// 懒加载的全局 CourseSubjectService 实例
static COURSE_SUBJECT_SERVICE: Lazy<CourseSubjectService> =
    Lazy::new(CourseSubjectService::new_lazy);

// 创建课程科目分配
pub async fn create_course_subject(
    req: HttpRequest,
    body: web::Json<CreateCourseSubjectRequest>,
) -> ActixResult<HttpResponse> {
    COURSE_SUBJECT_SERVICE
        .create_course_subject(&req, body.into_inner())
        .await
}

// 按课程或科目列出课程科目分配
pub async fn list_course_subjects(
    req: HttpRequest,
    query: web::Query<CourseSubjectQueryParams>,
) -> ActixResult<HttpResponse> {
    COURSE_SUBJECT_SERVICE
        .list_course_subjects(&req, query.into_inner())
        .await
}

// 删除课程科目分配
pub async fn delete_course_subject(
    req: HttpRequest,
    path: SafeIDI64,
) -> ActixResult<HttpResponse> {
    COURSE_SUBJECT_SERVICE
        .delete_course_subject(&req, path.0)
        .await
}

// 配置路由
pub fn configure_course_subjects_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/course-subjects")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    // 列出课程科目分配 - 所有登录用户可访问
                    .route(web::get().to(list_course_subjects))
                    // 创建课程科目分配 - 仅管理员
                    .route(
                        web::post()
                            .to(create_course_subject)
                            .wrap(middlewares::RateLimit::admin_mutation())
                            .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                    ),
            )
            .service(
                web::resource("/{id}")
                    // 删除课程科目分配 - 仅管理员
                    .route(
                        web::delete()
                            .to(delete_course_subject)
                            .wrap(middlewares::RateLimit::admin_mutation())
                            .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                    ),
            ),
    );
}
