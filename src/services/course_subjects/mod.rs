pub mod create;
pub mod delete;
pub mod list;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::course_subjects::requests::{
    CourseSubjectQueryParams, CreateCourseSubjectRequest,
};
use crate::storage::Storage;

pub struct CourseSubjectService {
    storage: Option<Arc<dyn Storage>>,
}

impl CourseSubjectService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    // 创建课程科目分配（课程 + 科目 + 任课教师 + 课表）
    pub async fn create_course_subject(
        &self,
        req: &HttpRequest,
        course_subject_data: CreateCourseSubjectRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_course_subject(self, req, course_subject_data).await
    }

    // 按课程或科目列出课程科目分配
    pub async fn list_course_subjects(
        &self,
        req: &HttpRequest,
        query: CourseSubjectQueryParams,
    ) -> ActixResult<HttpResponse> {
        list::list_course_subjects(self, req, query).await
    }

    // 删除课程科目分配
    pub async fn delete_course_subject(
        &self,
        req: &HttpRequest,
        course_subject_id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::delete_course_subject(self, req, course_subject_id).await
    }
}
