pub mod enroll;
pub mod list;
pub mod update_status;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::enrollments::entities::EnrollmentStatus;
use crate::models::enrollments::requests::{CreateEnrollmentRequest, EnrollmentQueryParams};
use crate::storage::Storage;

pub struct EnrollmentService {
    storage: Option<Arc<dyn Storage>>,
}

impl EnrollmentService {
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

    // 学生注册课程
    pub async fn enroll_student(
        &self,
        req: &HttpRequest,
        enrollment_data: CreateEnrollmentRequest,
    ) -> ActixResult<HttpResponse> {
        enroll::enroll_student(self, req, enrollment_data).await
    }

    // 更新注册状态
    pub async fn update_enrollment_status(
        &self,
        req: &HttpRequest,
        enrollment_id: i64,
        status: EnrollmentStatus,
    ) -> ActixResult<HttpResponse> {
        update_status::update_enrollment_status(self, req, enrollment_id, status).await
    }

    // 列出注册
    pub async fn list_enrollments(
        &self,
        req: &HttpRequest,
        query: EnrollmentQueryParams,
    ) -> ActixResult<HttpResponse> {
        list::list_enrollments(self, req, query).await
    }
}
