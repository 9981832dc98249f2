use std::sync::Arc;

use crate::models::{
    announcements::{
        entities::Announcement,
        requests::{AnnouncementListQuery, CreateAnnouncementRequest, UpdateAnnouncementRequest},
        responses::AnnouncementListResponse,
    },
    course_subjects::{
        entities::{CourseSubject, CourseSubjectAudience},
        requests::{CourseSubjectQueryParams, CreateCourseSubjectRequest},
    },
    courses::{
        entities::Course,
        requests::{CourseListQuery, CreateCourseRequest},
        responses::CourseListResponse,
    },
    enrollments::{
        entities::{Enrollment, EnrollmentStatus},
        requests::{CreateEnrollmentRequest, EnrollmentListQuery},
        responses::EnrollmentListResponse,
    },
    notifications::{
        entities::Notification,
        requests::{CreateNotificationRequest, NotificationListQuery},
        responses::NotificationListResponse,
    },
    subjects::{
        entities::Subject,
        requests::{CreateSubjectRequest, SubjectListQuery},
        responses::SubjectListResponse,
    },
    users::{
        entities::User,
        requests::{CreateUserRequest, UserListQuery},
        responses::UserListResponse,
    },
};

use crate::errors::Result;

pub mod sea_orm_storage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 用户管理方法
    // 创建用户
    async fn create_user(&self, user: CreateUserRequest) -> Result<User>;
    // 通过ID获取用户信息
    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>>;
    // 通过用户名获取用户信息
    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>>;
    // 列出用户
    async fn list_users_with_pagination(&self, query: UserListQuery) -> Result<UserListResponse>;

    /// 科目管理方法
    // 创建科目
    async fn create_subject(&self, subject: CreateSubjectRequest) -> Result<Subject>;
    // 通过ID获取科目信息
    async fn get_subject_by_id(&self, subject_id: i64) -> Result<Option<Subject>>;
    // 列出科目
    async fn list_subjects_with_pagination(
        &self,
        query: SubjectListQuery,
    ) -> Result<SubjectListResponse>;
    // 删除科目
    async fn delete_subject(&self, subject_id: i64) -> Result<bool>;

    /// 课程管理方法
    // 创建课程
    async fn create_course(&self, course: CreateCourseRequest) -> Result<Course>;
    // 通过ID获取课程信息
    async fn get_course_by_id(&self, course_id: i64) -> Result<Option<Course>>;
    // 列出课程
    async fn list_courses_with_pagination(
        &self,
        query: CourseListQuery,
    ) -> Result<CourseListResponse>;
    // 删除课程
    async fn delete_course(&self, course_id: i64) -> Result<bool>;

    /// 课程科目分配管理方法
    // 创建课程科目分配
    async fn create_course_subject(
        &self,
        course_subject: CreateCourseSubjectRequest,
    ) -> Result<CourseSubject>;
    // 通过ID获取课程科目分配
    async fn get_course_subject_by_id(
        &self,
        course_subject_id: i64,
    ) -> Result<Option<CourseSubject>>;
    // 按课程或科目列出课程科目分配
    async fn list_course_subjects(
        &self,
        query: CourseSubjectQueryParams,
    ) -> Result<Vec<CourseSubject>>;
    // 删除课程科目分配
    async fn delete_course_subject(&self, course_subject_id: i64) -> Result<bool>;
    // 判断教师是否在某科目下有授课安排
    async fn is_teacher_assigned_to_subject(
        &self,
        teacher_id: i64,
        subject_id: i64,
    ) -> Result<bool>;
    // 解析科目公告的通知受众：每个课程科目一组 active 学生，组内去重
    async fn resolve_subject_audience(
        &self,
        subject_id: i64,
    ) -> Result<Vec<CourseSubjectAudience>>;

    /// 选课注册管理方法
    // 创建注册（active 状态）
    async fn create_enrollment(&self, enrollment: CreateEnrollmentRequest) -> Result<Enrollment>;
    // 通过ID获取注册信息
    async fn get_enrollment_by_id(&self, enrollment_id: i64) -> Result<Option<Enrollment>>;
    // 更新注册状态
    async fn update_enrollment_status(
        &self,
        enrollment_id: i64,
        status: EnrollmentStatus,
    ) -> Result<Option<Enrollment>>;
    // 列出注册
    async fn list_enrollments_with_pagination(
        &self,
        query: EnrollmentListQuery,
    ) -> Result<EnrollmentListResponse>;

    /// 公告管理方法
    // 创建公告
    async fn create_announcement(
        &self,
        teacher_id: i64,
        announcement: CreateAnnouncementRequest,
    ) -> Result<Announcement>;
    // 通过ID获取公告
    async fn get_announcement_by_id(&self, announcement_id: i64) -> Result<Option<Announcement>>;
    // 按科目列出公告
    async fn list_announcements_with_pagination(
        &self,
        query: AnnouncementListQuery,
    ) -> Result<AnnouncementListResponse>;
    // 更新公告
    async fn update_announcement(
        &self,
        announcement_id: i64,
        update: UpdateAnnouncementRequest,
    ) -> Result<Option<Announcement>>;
    // 删除公告（已发出的通知不受影响）
    async fn delete_announcement(&self, announcement_id: i64) -> Result<bool>;

    /// 通知管理方法
    // 批量创建通知
    async fn create_notifications_batch(
        &self,
        reqs: Vec<CreateNotificationRequest>,
    ) -> Result<Vec<Notification>>;
    // 通过ID获取通知
    async fn get_notification_by_id(&self, notification_id: i64) -> Result<Option<Notification>>;
    // 列出用户通知（分页，排除过期）
    async fn list_notifications_with_pagination(
        &self,
        student_id: i64,
        query: NotificationListQuery,
    ) -> Result<NotificationListResponse>;
    // 获取用户未读通知数量（排除过期）
    async fn get_unread_notification_count(&self, student_id: i64) -> Result<i64>;
    // 标记通知为已读
    async fn mark_notification_as_read(&self, notification_id: i64) -> Result<bool>;
    // 标记用户所有通知为已读
    async fn mark_all_notifications_as_read(&self, student_id: i64) -> Result<i64>;
    // 删除过期通知，返回删除数量
    async fn delete_expired_notifications(&self) -> Result<i64>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
