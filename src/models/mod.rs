//! 数据模型定义
//!
//! 按领域拆分为 entities / requests / responses，与 entity 模块中的
//! 数据库实体分离。

pub mod announcements;
pub mod common;
pub mod course_subjects;
pub mod courses;
pub mod enrollments;
pub mod notifications;
pub mod subjects;
pub mod users;

pub use common::pagination::{PaginatedResponse, PaginationInfo, PaginationQuery};
pub use common::response::ApiResponse;

/// 程序启动时间（注入 app_data，用于运行时间统计）
#[derive(Debug, Clone)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}

/// 业务错误码
///
/// 与 HTTP 状态码独立：响应体 code 字段承载业务语义，
/// 前缀与 HTTP 状态对应（400xx/401xx/403xx/404xx/409xx/429xx/500xx）。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ErrorCode {
    Success = 0,

    BadRequest = 40000,
    ValidationFailed = 40001,

    Unauthorized = 40100,

    Forbidden = 40300,
    AnnouncementPermissionDenied = 40301,
    NotificationPermissionDenied = 40302,

    NotFound = 40400,
    UserNotFound = 40401,
    SubjectNotFound = 40402,
    CourseNotFound = 40403,
    CourseSubjectNotFound = 40404,
    EnrollmentNotFound = 40405,
    AnnouncementNotFound = 40406,
    NotificationNotFound = 40407,

    SubjectAlreadyExists = 40901,
    CourseAlreadyExists = 40902,
    CourseSubjectAlreadyExists = 40903,
    EnrollmentAlreadyExists = 40904,
    UserAlreadyExists = 40905,

    RateLimitExceeded = 42900,

    InternalServerError = 50000,
    AnnouncementCreationFailed = 50001,
}

#[cfg(test)]
mod tests {
    use super::ErrorCode;

    #[test]
    fn test_error_code_values() {
        assert_eq!(ErrorCode::Success as i32, 0);
        assert_eq!(ErrorCode::Unauthorized as i32, 40100);
        assert_eq!(ErrorCode::AnnouncementPermissionDenied as i32, 40301);
        assert_eq!(ErrorCode::AnnouncementNotFound as i32, 40406);
        assert_eq!(ErrorCode::InternalServerError as i32, 50000);
    }
}
