use std::sync::Arc;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::{AnnouncementService, fanout};
use crate::config::AppConfig;
use crate::middlewares::RequireJWT;
use crate::models::announcements::entities::Announcement;
use crate::models::announcements::requests::CreateAnnouncementRequest;
use crate::models::users::entities::{User, UserRole};
use crate::models::{ApiResponse, ErrorCode};
use crate::storage::Storage;
use crate::utils::validate::{validate_message, validate_title};

pub async fn create_announcement(
    service: &AnnouncementService,
    request: &HttpRequest,
    announcement_data: CreateAnnouncementRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let current_user = match RequireJWT::extract_user_claims(request) {
        Some(user) => user,
        None => {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "无法获取用户信息",
            )));
        }
    };

    // 字段校验
    if let Err(resp) = validate_announcement_fields(&announcement_data) {
        return Ok(resp);
    }

    // 权限校验：教师必须在该科目下有授课安排
    if let Err(resp) =
        check_announcement_create_permission(&storage, &current_user, &announcement_data).await
    {
        return Ok(resp);
    }

    // 创建公告
    let announcement = match storage
        .create_announcement(current_user.id, announcement_data)
        .await
    {
        Ok(announcement) => announcement,
        Err(e) => {
            error!("Announcement creation failed: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::AnnouncementCreationFailed,
                    format!("公告创建失败: {e}"),
                )),
            );
        }
    };

    info!(
        "Announcement {} created for subject {} by teacher {}",
        announcement.id, announcement.subject_id, announcement.teacher_id
    );

    // 通知扇出：尽力而为，失败只记录日志，不回滚公告、不影响响应
    dispatch_notifications(&storage, &announcement).await;

    Ok(HttpResponse::Created().json(ApiResponse::success(announcement, "公告发布成功")))
}

/// 字段校验辅助函数
fn validate_announcement_fields(
    data: &CreateAnnouncementRequest,
) -> Result<(), HttpResponse> {
    if let Err(msg) = validate_title(&data.title) {
        return Err(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationFailed,
            format!("title: {msg}"),
        )));
    }
    if let Err(msg) = validate_message(&data.message) {
        return Err(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationFailed,
            format!("message: {msg}"),
        )));
    }
    Ok(())
}

/// 权限校验辅助函数
async fn check_announcement_create_permission(
    storage: &Arc<dyn Storage>,
    current_user: &User,
    data: &CreateAnnouncementRequest,
) -> Result<(), HttpResponse> {
    // 科目必须存在
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
            return Err(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Internal server error while fetching subject",
                )),
            );
        }
    }

    // Admin 直接放行
    if current_user.role == UserRole::Admin {
        return Ok(());
    }

    // 教师必须在该科目下有授课安排
    match storage
        .is_teacher_assigned_to_subject(current_user.id, data.subject_id)
        .await
    {
        Ok(true) => Ok(()),
        Ok(false) => Err(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::AnnouncementPermissionDenied,
            "您未在该科目下授课，无法发布公告",
        ))),
        Err(e) => {
            error!("Failed to check teacher assignment: {}", e);
            Err(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Internal server error while checking teacher assignment",
                )),
            )
        }
    }
}

/// 通知扇出辅助函数
///
/// 受众解析或批量插入失败都不向上传播。
async fn dispatch_notifications(storage: &Arc<dyn Storage>, announcement: &Announcement) {
    let audiences = match storage.resolve_subject_audience(announcement.subject_id).await {
        Ok(audiences) => audiences,
        Err(e) => {
            error!(
                "Failed to resolve audience for announcement {}: {}",
                announcement.id, e
            );
            return;
        }
    };

    let config = AppConfig::get();
    let expires_at =
        chrono::Utc::now() + chrono::Duration::days(config.notification.expiry_days);

    let requests = fanout::build_notification_requests(announcement, &audiences, expires_at);
    if requests.is_empty() {
        info!(
            "No active students to notify for announcement {}",
            announcement.id
        );
        return;
    }

    let expected = requests.len();
    match storage.create_notifications_batch(requests).await {
        Ok(created) => {
            info!(
                "Dispatched {} notification(s) for announcement {}",
                created.len(),
                announcement.id
            );
        }
        Err(e) => {
            error!(
                "Notification fan-out failed for announcement {} (expected {}): {}",
                announcement.id, expected, e
            );
        }
    }
}
