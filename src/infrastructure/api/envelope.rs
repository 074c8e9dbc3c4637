//! 后端统一响应包装 `{code, message, data}` 的解析

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::application::ports::ApiError;

/// 业务成功码
pub const SUCCESS_CODE: i64 = 200;

/// 统一响应包装
#[derive(Debug, Deserialize)]
pub struct ApiEnvelope<T> {
    pub code: i64,
    #[serde(default)]
    pub message: String,
    #[serde(default = "Option::default")]
    pub data: Option<T>,
}

impl<T> ApiEnvelope<T> {
    /// 非成功码转为 `ApiError::Application`
    pub fn into_result(self) -> Result<Option<T>, ApiError> {
        if self.code == SUCCESS_CODE {
            Ok(self.data)
        } else {
            Err(ApiError::Application {
                code: self.code,
                message: self.message,
            })
        }
    }
}

/// 列表接口的 `data`，兼容分页对象与裸数组两种形态
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum Paged<T> {
    Records {
        #[serde(default = "Option::default")]
        records: Option<Vec<T>>,
    },
    Plain(Vec<T>),
}

impl<T> Paged<T> {
    pub fn into_records(self) -> Vec<T> {
        match self {
            Paged::Records { records } => records.unwrap_or_default(),
            Paged::Plain(records) => records,
        }
    }
}

/// 解析一次完整的响应
///
/// 2xx 时按包装解析并检查 `code`；其他状态尽量从包装里取出服务端消息，
/// 取不到时消息留空，由调用方展示本地兜底文案。
pub fn decode<T: DeserializeOwned>(status: u16, body: &str) -> Result<Option<T>, ApiError> {
    if !(200..300).contains(&status) {
        return Err(status_error(status, body));
    }

    let envelope: ApiEnvelope<T> = serde_json::from_str(body)
        .map_err(|e| ApiError::MalformedResponse(format!("Invalid envelope: {}", e)))?;
    envelope.into_result()
}

/// 非 2xx 响应的错误，消息取自响应体里的包装（若能解析）
pub fn status_error(status: u16, body: &str) -> ApiError {
    let message = serde_json::from_str::<ApiEnvelope<serde_json::Value>>(body)
        .map(|envelope| envelope.message)
        .unwrap_or_default();
    ApiError::HttpStatus { status, message }
}

/// 同 [`decode`]，但要求 `data` 存在
pub fn decode_data<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, ApiError> {
    decode(status, body)?
        .ok_or_else(|| ApiError::MalformedResponse("Response carries no data".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::world::World;

    #[test]
    fn test_decode_success_with_records() {
        let body = r#"{"code":200,"message":"ok","data":{"records":[{"id":1,"name":"艾泽拉斯","description":"","elements":[]}]}}"#;
        let page: Paged<World> = decode_data(200, body).unwrap();
        let worlds = page.into_records();
        assert_eq!(worlds.len(), 1);
        assert_eq!(worlds[0].id.as_str(), "1");
    }

    #[test]
    fn test_decode_plain_array() {
        let body = r#"{"code":200,"data":[]}"#;
        let page: Paged<World> = decode_data(200, body).unwrap();
        assert!(page.into_records().is_empty());
    }

    #[test]
    fn test_decode_null_records() {
        let body = r#"{"code":200,"data":{"records":null,"total":0}}"#;
        let page: Paged<World> = decode_data(200, body).unwrap();
        assert!(page.into_records().is_empty());
    }

    #[test]
    fn test_decode_application_error() {
        let body = r#"{"code":400,"message":"名称已存在","data":null}"#;
        let err = decode::<serde_json::Value>(200, body).unwrap_err();
        assert_eq!(
            err,
            ApiError::Application {
                code: 400,
                message: "名称已存在".into()
            }
        );
    }

    #[test]
    fn test_decode_http_status_recovers_envelope_message() {
        let body = r#"{"code":500,"message":"世界正在被引用"}"#;
        let err = decode::<serde_json::Value>(500, body).unwrap_err();
        assert_eq!(err.user_message("删除世界失败"), "世界正在被引用");

        let err = decode::<serde_json::Value>(502, "<html>Bad Gateway</html>").unwrap_err();
        assert_eq!(
            err,
            ApiError::HttpStatus {
                status: 502,
                message: String::new()
            }
        );
        assert_eq!(err.user_message("删除世界失败"), "删除世界失败");
    }

    #[test]
    fn test_decode_malformed_body() {
        let err = decode::<serde_json::Value>(200, "not json").unwrap_err();
        assert!(matches!(err, ApiError::MalformedResponse(_)));
    }

    #[test]
    fn test_decode_data_requires_data() {
        let err = decode_data::<World>(200, r#"{"code":200,"message":"ok"}"#).unwrap_err();
        assert!(matches!(err, ApiError::MalformedResponse(_)));
    }
}
