use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares::{self, RequireJWT};
use crate::models::notifications::requests::NotificationListParams;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::NotificationService;
use crate::utils::SafeIDI64;

// 懒加载的全局 NotificationService 实例
static NOTIFICATION_SERVICE: Lazy<NotificationService> =
    Lazy::new(NotificationService::new_lazy);

fn extract_user_id_or_unauthorized(req: &HttpRequest) -> Result<i64, HttpResponse> {
    RequireJWT::extract_user_id(req).ok_or_else(|| {
        HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "无法获取用户信息",
        ))
    })
}

// 列出当前用户的通知
pub async fn list_notifications(
    req: HttpRequest,
    query: web::Query<NotificationListParams>,
) -> ActixResult<HttpResponse> {
    let user_id = match extract_user_id_or_unauthorized(&req) {
        Ok(id) => id,
        Err(resp) => return Ok(resp),
    };

    NOTIFICATION_SERVICE
        .list_notifications(&req, user_id, query.into_inner())
        .await
}

// 获取当前用户未读通知数量
pub async fn get_unread_count(req: HttpRequest) -> ActixResult<HttpResponse> {
    let user_id = match extract_user_id_or_unauthorized(&req) {
        Ok(id) => id,
        Err(resp) => return Ok(resp),
    };

    NOTIFICATION_SERVICE.get_unread_count(&req, user_id).await
}

// 标记单条通知已读
pub async fn mark_notification_as_read(
    req: HttpRequest,
    path: SafeIDI64,
) -> ActixResult<HttpResponse> {
    let user_id = match extract_user_id_or_unauthorized(&req) {
        Ok(id) => id,
        Err(resp) => return Ok(resp),
    };

    NOTIFICATION_SERVICE
        .mark_as_read(&req, path.0, user_id)
        .await
}

// 标记当前用户全部通知已读
pub async fn mark_all_notifications_as_read(req: HttpRequest) -> ActixResult<HttpResponse> {
    let user_id = match extract_user_id_or_unauthorized(&req) {
        Ok(id) => id,
        Err(resp) => return Ok(resp),
    };

    NOTIFICATION_SERVICE.mark_all_as_read(&req, user_id).await
}

// 配置路由
pub fn configure_notifications_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/notifications")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    // 列出当前用户的通知 - 所有登录用户可访问
                    .route(web::get().to(list_notifications)),
            )
            // 未读数量 - 所有登录用户可访问
            .service(web::resource("/unread/count").route(web::get().to(get_unread_count)))
            // 全部标记已读 - 所有登录用户可访问
            .service(
                web::resource("/read/all")
                    .route(web::put().to(mark_all_notifications_as_read)),
            )
            // 单条标记已读 - 业务层校验接收者身份
            .service(
                web::resource("/{id}/read")
                    .route(web::put().to(mark_notification_as_read)),
            ),
    );
}
