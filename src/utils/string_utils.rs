//! # 문자열 유틸리티
//!
//! 문자열 처리와 관련된 공통 유틸리티 함수들입니다.

use serde::Deserialize;

/// 문자열 필드를 역직렬화하되 `null`은 빈 문자열로 변환합니다.
///
/// 문자열이 아닌 JSON 값(숫자, 객체 등)은 에러입니다.
pub fn deserialize_nullable_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.unwrap_or_default())
}

/// 표준 UUID 텍스트 형식인지 확인합니다.
///
/// 하이픈 형식 외에 `urn:uuid:` 접두어, 중괄호, 하이픈 없는 형식도 허용합니다.
pub fn is_valid_uuid(value: &str) -> bool {
    uuid::Uuid::parse_str(value).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct TestStruct {
        #[serde(default, deserialize_with = "deserialize_nullable_string")]
        field: String,
    }

    #[test]
    fn test_deserialize_nullable_string() {
        let value: TestStruct = serde_json::from_str(r#"{"field": "Hello"}"#).unwrap();
        assert_eq!(value.field, "Hello");

        let value: TestStruct = serde_json::from_str(r#"{"field": null}"#).unwrap();
        assert_eq!(value.field, "");

        let value: TestStruct = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(value.field, "");

        assert!(serde_json::from_str::<TestStruct>(r#"{"field": 1}"#).is_err());
    }

    #[test]
    fn test_is_valid_uuid() {
        assert!(is_valid_uuid("039d69ee-f9cb-4a3d-87e4-6eb63c302579"));
        assert!(is_valid_uuid("039d69eef9cb4a3d87e46eb63c302579"));
        assert!(!is_valid_uuid("not-a-uuid"));
        assert!(!is_valid_uuid(""));
        assert!(!is_valid_uuid("039d69ee-f9cb-4a3d-87e4-6eb63c30257"));
    }
}
