use serde::Deserialize;
use ts_rs::TS;

// 创建课程科目分配请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/course_subject.ts")]
pub struct CreateCourseSubjectRequest {
    pub course_id: i64,
    pub subject_id: i64,
    pub teacher_id: i64,
    pub schedule: String,
}

// 课程科目列表查询参数（来自HTTP请求，二选一过滤）
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/course_subject.ts")]
pub struct CourseSubjectQueryParams {
    pub course_id: Option<i64>,
    pub subject_id: Option<i64>,
}
