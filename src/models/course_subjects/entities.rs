use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 课程科目分配：某课程开设某科目，由指定教师按课表授课
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/course_subject.ts")]
pub struct CourseSubject {
    pub id: i64,
    pub course_id: i64,
    pub subject_id: i64,
    pub teacher_id: i64,
    // 课表描述（如 "MON 08:00-09:40"）
    pub schedule: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

/// 单个课程科目的通知受众
///
/// 由受众解析器产出：course_subject 对应课程中处于 active 状态的学生，
/// 同一 course_subject 内学生不重复。
#[derive(Debug, Clone, PartialEq)]
pub struct CourseSubjectAudience {
    pub course_subject_id: i64,
    pub student_ids: Vec<i64>,
}
