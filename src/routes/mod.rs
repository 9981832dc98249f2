pub mod announcements;

pub mod course_subjects;

pub mod courses;

pub mod enrollments;

pub mod notifications;

pub mod subjects;

pub mod users;

pub use announcements::configure_announcements_routes;
pub use course_subjects::configure_course_subjects_routes;
pub use courses::configure_courses_routes;
pub use enrollments::configure_enrollments_routes;
pub use notifications::configure_notifications_routes;
pub use subjects::configure_subjects_routes;
pub use users::configure_user_routes;
