use once_cell::sync::Lazy;
use regex::Regex;

// 课表格式：逗号分隔的 "DAY HH:MM-HH:MM" 片段，如 "MON 08:00-09:40, THU 10:00-11:40"
static SCHEDULE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(MON|TUE|WED|THU|FRI|SAT|SUN) ([01][0-9]|2[0-3]):[0-5][0-9]-([01][0-9]|2[0-3]):[0-5][0-9](, (MON|TUE|WED|THU|FRI|SAT|SUN) ([01][0-9]|2[0-3]):[0-5][0-9]-([01][0-9]|2[0-3]):[0-5][0-9])*$",
    )
    .expect("Invalid schedule regex")
});

// 科目代码：2-16 位大写字母/数字/连字符
static SUBJECT_CODE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z0-9-]{2,16}$").expect("Invalid subject code regex"));

static USERNAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").expect("Invalid username regex"));

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Z|a-z]{2,}$").expect("Invalid email regex")
});

pub fn validate_username(username: &str) -> Result<(), &'static str> {
    // 用户名长度校验：5 <= x <= 16
    if username.len() < 5 || username.len() > 16 {
        return Err("Username length must be between 5 and 16 characters");
    }
    // 用户名格式校验：只能包含字母、数字、下划线或连字符
    if !USERNAME_RE.is_match(username) {
        return Err("Username must contain only letters, numbers, underscores or hyphens");
    }
    Ok(())
}

pub fn validate_email(email: &str) -> Result<(), &'static str> {
    // 邮箱格式校验：必须包含 @ 和 .
    if !EMAIL_RE.is_match(email) {
        return Err("Email format is invalid");
    }
    Ok(())
}

pub fn validate_title(title: &str) -> Result<(), &'static str> {
    // 标题长度校验：1 <= x <= 200
    if title.trim().is_empty() {
        return Err("Title must not be empty");
    }
    if title.chars().count() > 200 {
        return Err("Title must not exceed 200 characters");
    }
    Ok(())
}

pub fn validate_message(message: &str) -> Result<(), &'static str> {
    // 正文长度校验：1 <= x <= 5000
    if message.trim().is_empty() {
        return Err("Message must not be empty");
    }
    if message.chars().count() > 5000 {
        return Err("Message must not exceed 5000 characters");
    }
    Ok(())
}

pub fn validate_subject_code(code: &str) -> Result<(), &'static str> {
    if !SUBJECT_CODE_RE.is_match(code) {
        return Err(
            "Subject code must be 2-16 characters of uppercase letters, digits or hyphens",
        );
    }
    Ok(())
}

pub fn validate_schedule(schedule: &str) -> Result<(), &'static str> {
    if !SCHEDULE_RE.is_match(schedule) {
        return Err("Schedule must look like 'MON 08:00-09:40', comma separated");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_title() {
        assert!(validate_title("期中考试安排").is_ok());
        assert!(validate_title("Exam schedule").is_ok());
    }

    #[test]
    fn test_empty_title() {
        assert!(validate_title("").is_err());
        assert!(validate_title("   ").is_err());
    }

    #[test]
    fn test_overlong_title() {
        let title = "标".repeat(201);
        assert!(validate_title(&title).is_err());
        let title = "标".repeat(200);
        assert!(validate_title(&title).is_ok());
    }

    #[test]
    fn test_message_bounds() {
        assert!(validate_message("下周三第一节课随堂测验").is_ok());
        assert!(validate_message("").is_err());
        assert!(validate_message(&"m".repeat(5001)).is_err());
    }

    #[test]
    fn test_valid_schedule() {
        assert!(validate_schedule("MON 08:00-09:40").is_ok());
        assert!(validate_schedule("MON 08:00-09:40, THU 10:00-11:40").is_ok());
    }

    #[test]
    fn test_invalid_schedule() {
        assert!(validate_schedule("Monday morning").is_err());
        assert!(validate_schedule("MON 8:00-9:40").is_err());
        assert!(validate_schedule("MON 25:00-26:40").is_err());
        assert!(validate_schedule("").is_err());
    }

    #[test]
    fn test_valid_username() {
        assert!(validate_username("teacher_01").is_ok());
        assert!(validate_username("zhang-san").is_ok());
    }

    #[test]
    fn test_invalid_username() {
        assert!(validate_username("abc").is_err());
        assert!(validate_username("a".repeat(17).as_str()).is_err());
        assert!(validate_username("bad name!").is_err());
    }

    #[test]
    fn test_email() {
        assert!(validate_email("student@example.com").is_ok());
        assert!(validate_email("not-an-email").is_err());
    }

    #[test]
    fn test_subject_code() {
        assert!(validate_subject_code("MATH").is_ok());
        assert!(validate_subject_code("CS-101").is_ok());
        assert!(validate_subject_code("m").is_err());
        assert!(validate_subject_code("math").is_err());
    }
}
