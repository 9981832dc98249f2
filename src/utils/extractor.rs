//! 路径参数安全提取器
//!
//! 将 `{id}` 路径段解析为正整数，解析失败直接返回 400 统一响应，
//! 避免在每个处理函数里重复校验。

use actix_web::dev::Payload;
use actix_web::error::InternalError;
use actix_web::{FromRequest, HttpRequest, HttpResponse};
use futures_util::future::{Ready, ready};

use crate::models::{ApiResponse, ErrorCode};

/// 解析路径段为正 i64
pub(crate) fn parse_positive_i64(raw: &str) -> Option<i64> {
    raw.parse::<i64>().ok().filter(|id| *id > 0)
}

fn invalid_id_response(param: &str) -> actix_web::Error {
    InternalError::from_response(
        "invalid path parameter",
        HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            format!("路径参数 {param} 无效，必须为正整数"),
        )),
    )
    .into()
}

/// `{id}` 路径参数提取器
pub struct SafeIDI64(pub i64);

impl FromRequest for SafeIDI64 {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let parsed = req.match_info().get("id").and_then(parse_positive_i64);

        ready(match parsed {
            Some(id) => Ok(SafeIDI64(id)),
            None => Err(invalid_id_response("id")),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_positive_i64() {
        assert_eq!(parse_positive_i64("42"), Some(42));
        assert_eq!(parse_positive_i64("0"), None);
        assert_eq!(parse_positive_i64("-3"), None);
        assert_eq!(parse_positive_i64("abc"), None);
        assert_eq!(parse_positive_i64("9223372036854775808"), None); // i64 溢出
    }
}
