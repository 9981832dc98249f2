//! 课程科目分配存储操作
//!
//! 包含公告通知的受众解析：科目 -> 课程科目 -> 该课程的 active 注册学生。

use super::SeaOrmStorage;
use crate::entity::course_subjects::{ActiveModel, Column, Entity as CourseSubjects};
use crate::entity::enrollments::{Column as EnrollmentColumn, Entity as Enrollments};
use crate::errors::{EduSystemError, Result};
use crate::models::course_subjects::{
    entities::{CourseSubject, CourseSubjectAudience},
    requests::{CourseSubjectQueryParams, CreateCourseSubjectRequest},
};
use crate::models::enrollments::entities::EnrollmentStatus;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    /// 创建课程科目分配
    pub async fn create_course_subject_impl(
        &self,
        req: CreateCourseSubjectRequest,
    ) -> Result<CourseSubject> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            course_id: Set(req.course_id),
            subject_id: Set(req.subject_id),
            teacher_id: Set(req.teacher_id),
            schedule: Set(req.schedule),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model.insert(&self.db).await.map_err(|e| {
            EduSystemError::database_operation(format!("创建课程科目分配失败: {e}"))
        })?;

        Ok(result.into_course_subject())
    }

    /// 通过 ID 获取课程科目分配
    pub async fn get_course_subject_by_id_impl(
        &self,
        course_subject_id: i64,
    ) -> Result<Option<CourseSubject>> {
        let result = CourseSubjects::find_by_id(course_subject_id)
            .one(&self.db)
            .await
            .map_err(|e| {
                EduSystemError::database_operation(format!("查询课程科目分配失败: {e}"))
            })?;

        Ok(result.map(|m| m.into_course_subject()))
    }

    /// 按课程或科目列出课程科目分配
    pub async fn list_course_subjects_impl(
        &self,
        query: CourseSubjectQueryParams,
    ) -> Result<Vec<CourseSubject>> {
        let mut select = CourseSubjects::find();

        if let Some(course_id) = query.course_id {
            select = select.filter(Column::CourseId.eq(course_id));
        }
        if let Some(subject_id) = query.subject_id {
            select = select.filter(Column::SubjectId.eq(subject_id));
        }

        let results = select
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| {
                EduSystemError::database_operation(format!("查询课程科目分配列表失败: {e}"))
            })?;

        Ok(results
            .into_iter()
            .map(|m| m.into_course_subject())
            .collect())
    }

    /// 删除课程科目分配
    pub async fn delete_course_subject_impl(&self, course_subject_id: i64) -> Result<bool> {
        let result = CourseSubjects::delete_by_id(course_subject_id)
            .exec(&self.db)
            .await
            .map_err(|e| {
                EduSystemError::database_operation(format!("删除课程科目分配失败: {e}"))
            })?;

        Ok(result.rows_affected > 0)
    }

    /// 判断教师是否在某科目下有授课安排
    pub async fn is_teacher_assigned_to_subject_impl(
        &self,
        teacher_id: i64,
        subject_id: i64,
    ) -> Result<bool> {
        let count = CourseSubjects::find()
            .filter(Column::TeacherId.eq(teacher_id))
            .filter(Column::SubjectId.eq(subject_id))
            .count(&self.db)
            .await
            .map_err(|e| {
                EduSystemError::database_operation(format!("查询教师授课安排失败: {e}"))
            })?;

        Ok(count > 0)
    }

    /// 解析科目公告的通知受众
    ///
    /// 逐个课程科目查出对应课程的 active 注册学生，组内去重。
    /// 同一学生选了同一科目的多个课程，会出现在多个组里（每组各收一条通知）。
    pub async fn resolve_subject_audience_impl(
        &self,
        subject_id: i64,
    ) -> Result<Vec<CourseSubjectAudience>> {
        let course_subjects = CourseSubjects::find()
            .filter(Column::SubjectId.eq(subject_id))
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| {
                EduSystemError::database_operation(format!("查询科目课程列表失败: {e}"))
            })?;

        let mut audiences = Vec::with_capacity(course_subjects.len());

        for course_subject in course_subjects {
            let enrollments = Enrollments::find()
                .filter(EnrollmentColumn::CourseId.eq(course_subject.course_id))
                .filter(EnrollmentColumn::Status.eq(EnrollmentStatus::Active.to_string()))
                .order_by_asc(EnrollmentColumn::Id)
                .all(&self.db)
                .await
                .map_err(|e| {
                    EduSystemError::database_operation(format!("查询课程注册学生失败: {e}"))
                })?;

            let mut student_ids: Vec<i64> =
                enrollments.into_iter().map(|e| e.student_id).collect();
            // 组内去重（(student_id, course_id) 唯一索引下通常已无重复）
            student_ids.sort_unstable();
            student_ids.dedup();

            audiences.push(CourseSubjectAudience {
                course_subject_id: course_subject.id,
                student_ids,
            });
        }

        Ok(audiences)
    }
}
