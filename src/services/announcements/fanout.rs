//! 公告通知扇出
//!
//! 根据受众解析结果为每个 (课程科目, 学生) 组合构造一条通知。
//! 构造是纯逻辑，插入由存储层完成；扇出失败由调用方记录日志后吞掉，
//! 不回滚已创建的公告。

use chrono::{DateTime, Utc};

use crate::models::announcements::entities::Announcement;
use crate::models::course_subjects::entities::CourseSubjectAudience;
use crate::models::notifications::entities::NotificationType;
use crate::models::notifications::requests::CreateNotificationRequest;

/// 为公告构造全部通知请求
///
/// 每个课程科目内学生已去重；同一学生出现在多个课程科目时，
/// 每个课程科目各产生一条通知。
pub fn build_notification_requests(
    announcement: &Announcement,
    audiences: &[CourseSubjectAudience],
    expires_at: DateTime<Utc>,
) -> Vec<CreateNotificationRequest> {
    let mut requests = Vec::new();

    for audience in audiences {
        for &student_id in &audience.student_ids {
            requests.push(CreateNotificationRequest {
                notification_type: NotificationType::Announcement,
                title: announcement.title.clone(),
                message: announcement.message.clone(),
                related_id: announcement.id,
                course_subject_id: audience.course_subject_id,
                student_id,
                expires_at,
            });
        }
    }

    requests
}

#[cfg(test)]
mod tests {
    use super::*;

    fn announcement() -> Announcement {
        Announcement {
            id: 7,
            title: "期中考试安排".to_string(),
            message: "下周三第一、二节课进行期中考试".to_string(),
            teacher_id: 3,
            subject_id: 11,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        }
    }

    fn audience(course_subject_id: i64, student_ids: &[i64]) -> CourseSubjectAudience {
        CourseSubjectAudience {
            course_subject_id,
            student_ids: student_ids.to_vec(),
        }
    }

    #[test]
    fn test_total_is_sum_over_course_subjects() {
        // N 个课程科目各有 Sᵢ 个学生，总通知数为 ΣSᵢ
        let audiences = vec![
            audience(101, &[1, 2, 3]),
            audience(102, &[4, 5]),
            audience(103, &[]),
        ];

        let requests =
            build_notification_requests(&announcement(), &audiences, chrono::Utc::now());
        assert_eq!(requests.len(), 5);
    }

    #[test]
    fn test_student_in_two_course_subjects_gets_two_notifications() {
        // 同一学生选了同科目下两个课程，每个课程科目各收一条
        let audiences = vec![audience(101, &[1, 2]), audience(102, &[2, 3])];

        let requests =
            build_notification_requests(&announcement(), &audiences, chrono::Utc::now());
        assert_eq!(requests.len(), 4);

        let for_student_2: Vec<_> = requests.iter().filter(|r| r.student_id == 2).collect();
        assert_eq!(for_student_2.len(), 2);
        assert_eq!(for_student_2[0].course_subject_id, 101);
        assert_eq!(for_student_2[1].course_subject_id, 102);
    }

    #[test]
    fn test_requests_share_announcement_fields() {
        let ann = announcement();
        let expires = chrono::Utc::now() + chrono::Duration::days(30);
        let requests = build_notification_requests(&ann, &[audience(101, &[1])], expires);

        assert_eq!(requests.len(), 1);
        let request = &requests[0];
        assert_eq!(request.notification_type, NotificationType::Announcement);
        assert_eq!(request.title, ann.title);
        assert_eq!(request.message, ann.message);
        assert_eq!(request.related_id, ann.id);
        assert_eq!(request.expires_at, expires);
    }

    #[test]
    fn test_empty_audience_produces_no_requests() {
        let requests =
            build_notification_requests(&announcement(), &[], chrono::Utc::now());
        assert!(requests.is_empty());
    }
}
