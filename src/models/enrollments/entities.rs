use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 选课注册状态
#[derive(Debug, Clone, Serialize, PartialEq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/enrollment.ts")]
pub enum EnrollmentStatus {
    Active,      // 在读
    Inactive,    // 休学/停课
    Graduated,   // 已毕业
    Transferred, // 已转出
}

impl<'de> Deserialize<'de> for EnrollmentStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            "active" => Ok(EnrollmentStatus::Active),
            "inactive" => Ok(EnrollmentStatus::Inactive),
            "graduated" => Ok(EnrollmentStatus::Graduated),
            "transferred" => Ok(EnrollmentStatus::Transferred),
            _ => Err(serde::de::Error::custom(format!(
                "无效的注册状态: '{s}'. 支持的状态: active, inactive, graduated, transferred"
            ))),
        }
    }
}

impl std::fmt::Display for EnrollmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EnrollmentStatus::Active => write!(f, "active"),
            EnrollmentStatus::Inactive => write!(f, "inactive"),
            EnrollmentStatus::Graduated => write!(f, "graduated"),
            EnrollmentStatus::Transferred => write!(f, "transferred"),
        }
    }
}

impl std::str::FromStr for EnrollmentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(EnrollmentStatus::Active),
            "inactive" => Ok(EnrollmentStatus::Inactive),
            "graduated" => Ok(EnrollmentStatus::Graduated),
            "transferred" => Ok(EnrollmentStatus::Transferred),
            _ => Err(format!("Invalid enrollment status: {s}")),
        }
    }
}

// 选课注册实体
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/enrollment.ts")]
pub struct Enrollment {
    pub id: i64,
    pub student_id: i64,
    pub course_id: i64,
    pub status: EnrollmentStatus,
    pub enrolled_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_enrollment_status_round_trip() {
        for status in [
            EnrollmentStatus::Active,
            EnrollmentStatus::Inactive,
            EnrollmentStatus::Graduated,
            EnrollmentStatus::Transferred,
        ] {
            let parsed = EnrollmentStatus::from_str(&status.to_string()).unwrap();
            assert_eq!(parsed, status);
        }
    }

    #[test]
    fn test_enrollment_status_rejects_unknown() {
        assert!(EnrollmentStatus::from_str("expelled").is_err());
        assert!(serde_json::from_str::<EnrollmentStatus>("\"expelled\"").is_err());
    }
}
