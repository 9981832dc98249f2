//! 请求参数错误处理器
//!
//! 将 actix 的 JSON / Query 反序列化错误统一转换为带字段信息的 400 响应。

use actix_web::error::{Error, InternalError, JsonPayloadError, QueryPayloadError};
use actix_web::{HttpRequest, HttpResponse};
use tracing::debug;

use crate::models::{ApiResponse, ErrorCode};

/// JSON 请求体解析错误处理器
pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> Error {
    let detail = match &err {
        JsonPayloadError::ContentType => "Content-Type 必须为 application/json".to_string(),
        JsonPayloadError::Deserialize(e) => format!("请求体字段错误: {e}"),
        JsonPayloadError::OverflowKnownLength { length, limit } => {
            format!("请求体过大: {length} 字节，上限 {limit} 字节")
        }
        other => format!("请求体解析失败: {other}"),
    };

    debug!("JSON payload error on {}: {}", req.path(), detail);

    let response =
        HttpResponse::BadRequest().json(ApiResponse::error_empty(ErrorCode::ValidationFailed, detail));
    InternalError::from_response(err, response).into()
}

/// 查询参数解析错误处理器
pub fn query_error_handler(err: QueryPayloadError, req: &HttpRequest) -> Error {
    let detail = match &err {
        QueryPayloadError::Deserialize(e) => format!("查询参数错误: {e}"),
        other => format!("查询参数解析失败: {other}"),
    };

    debug!("Query payload error on {}: {}", req.path(), detail);

    let response =
        HttpResponse::BadRequest().json(ApiResponse::error_empty(ErrorCode::ValidationFailed, detail));
    InternalError::from_response(err, response).into()
}
