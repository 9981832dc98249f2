use super::entities::CourseSubject;
use serde::Serialize;
use ts_rs::TS;

// 课程科目分配列表响应（按课程或科目过滤，数量有限，不分页）
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/course_subject.ts")]
pub struct CourseSubjectListResponse {
    pub items: Vec<CourseSubject>,
}
