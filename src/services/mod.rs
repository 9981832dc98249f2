pub mod announcements;
pub mod course_subjects;
pub mod courses;
pub mod enrollments;
pub mod notifications;
pub mod subjects;
pub mod users;

pub use announcements::AnnouncementService;
pub use course_subjects::CourseSubjectService;
pub use courses::CourseService;
pub use enrollments::EnrollmentService;
pub use notifications::NotificationService;
pub use subjects::SubjectService;
pub use users::UserService;
