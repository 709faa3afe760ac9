use serde::Serialize;

/// Envoltorio de respuestas exitosas: `{ success, message?, data }`
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data,
        }
    }

    pub fn success_with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            data,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_shape() {
        let value = serde_json::to_value(ApiResponse::success(vec![1, 2])).unwrap();
        assert_eq!(value["success"], true);
        assert!(value.get("message").is_none());
        assert_eq!(value["data"], serde_json::json!([1, 2]));

        let value =
            serde_json::to_value(ApiResponse::success_with_message(7, "Bill generated")).unwrap();
        assert_eq!(value["message"], "Bill generated");
        assert_eq!(value["data"], 7);
    }
}
