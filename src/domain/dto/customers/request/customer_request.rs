//! 고객 생성/수정 요청 DTO
//!
//! `POST /`와 `PUT /{uuid}`의 요청 본문을 정의합니다.
//! 검증은 규칙 순서가 고정된 목록으로 수행되며, 실패한 규칙마다 메시지 하나를 남깁니다.
//! 첫 실패에서 멈추지 않고 모든 실패를 함께 보고합니다.
use serde::Deserialize;
use validator::ValidateLength;

use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::Customer;
use crate::utils::string_utils::deserialize_nullable_string;

/// 고객 정보 요청 본문
///
/// 모든 필드는 선택이며, 누락되거나 `null`이면 빈 문자열로 취급됩니다.
/// 클라이언트가 보낸 `id`는 무시됩니다.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CustomerRequest {
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub name: String,

    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub last_name: String,

    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub dni: String,

    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub dni_type: String,

    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub phone: String,

    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub country: String,

    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub email: String,

    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub password: String,
}

impl CustomerRequest {
    /// 생성 규칙 위반 메시지를 규칙 순서대로 반환합니다.
    ///
    /// | 순서 | 규칙 | 메시지 |
    /// |------|------|--------|
    /// | 1 | name 필수 | name cannot be empty |
    /// | 2 | name ≤ 30 | name should be less than 30 chars long |
    /// | 3 | last_name 필수 | last_name cannot be empty |
    /// | 4 | last_name ≤ 30 | last_name should be less than 30 chars long |
    /// | 5 | email 필수 | email cannot be empty |
    /// | 6 | email ≤ 50 | email should be less than 50 chars long |
    /// | 7 | phone ≤ 20 | phone should be less than 20 chars long |
    /// | 8 | country = 2 | country should be equal to 2 chars long |
    pub fn store_violations(&self) -> Vec<String> {
        collect_violations([
            (self.name.validate_length(Some(1), None, None), "name cannot be empty"),
            (self.name.validate_length(None, Some(30), None), "name should be less than 30 chars long"),
            (self.last_name.validate_length(Some(1), None, None), "last_name cannot be empty"),
            (self.last_name.validate_length(None, Some(30), None), "last_name should be less than 30 chars long"),
            (self.email.validate_length(Some(1), None, None), "email cannot be empty"),
            (self.email.validate_length(None, Some(50), None), "email should be less than 50 chars long"),
            (self.phone.validate_length(None, Some(20), None), "phone should be less than 20 chars long"),
            (self.country.validate_length(None, None, Some(2)), "country should be equal to 2 chars long"),
        ])
    }

    /// 수정 규칙 위반 메시지를 규칙 순서대로 반환합니다.
    ///
    /// 생성 규칙과 달리 email은 필수가 아니며 country는 2자 이하이면 통과합니다.
    ///
    /// | 순서 | 규칙 | 메시지 |
    /// |------|------|--------|
    /// | 1 | name 필수 | name cannot be empty |
    /// | 2 | name ≤ 30 | name should be less than 30 chars long |
    /// | 3 | email ≤ 50 | email should be less than 50 chars long |
    /// | 4 | phone ≤ 20 | phone should be less than 20 chars long |
    /// | 5 | country ≤ 2 | country should be less than 2 chars long |
    /// | 6 | last_name 필수 | last_name cannot be empty |
    /// | 7 | last_name ≤ 30 | last_name should be less than 30 chars long |
    pub fn update_violations(&self) -> Vec<String> {
        collect_violations([
            (self.name.validate_length(Some(1), None, None), "name cannot be empty"),
            (self.name.validate_length(None, Some(30), None), "name should be less than 30 chars long"),
            (self.email.validate_length(None, Some(50), None), "email should be less than 50 chars long"),
            (self.phone.validate_length(None, Some(20), None), "phone should be less than 20 chars long"),
            (self.country.validate_length(None, Some(2), None), "country should be less than 2 chars long"),
            (self.last_name.validate_length(Some(1), None, None), "last_name cannot be empty"),
            (self.last_name.validate_length(None, Some(30), None), "last_name should be less than 30 chars long"),
        ])
    }

    /// 생성 검증. 위반이 있으면 `AppError::ValidationError`를 반환합니다.
    pub fn validate_store(&self) -> AppResult<()> {
        into_result(self.store_violations())
    }

    /// 수정 검증. 위반이 있으면 `AppError::ValidationError`를 반환합니다.
    pub fn validate_update(&self) -> AppResult<()> {
        into_result(self.update_violations())
    }
}

fn collect_violations<const N: usize>(rules: [(bool, &str); N]) -> Vec<String> {
    rules
        .into_iter()
        .filter(|(passed, _)| !passed)
        .map(|(_, message)| message.to_string())
        .collect()
}

fn into_result(violations: Vec<String>) -> AppResult<()> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(AppError::ValidationError(violations))
    }
}

impl From<CustomerRequest> for Customer {
    fn from(request: CustomerRequest) -> Self {
        let CustomerRequest {
            name,
            last_name,
            dni,
            dni_type,
            phone,
            country,
            email,
            password,
        } = request;

        Customer {
            id: String::new(),
            name,
            last_name,
            dni,
            dni_type,
            phone,
            country,
            email,
            password,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> CustomerRequest {
        serde_json::from_str(
            r#"{"name":"Bad","last_name":"Bunny","dni":"264573076","dni_type":"DNI","email":"baby@gmail.com","password":"x","phone":"+130698569","country":"CL"}"#,
        )
        .unwrap()
    }

    #[test]
    fn test_valid_request_passes_both_rule_sets() {
        assert!(valid().store_violations().is_empty());
        assert!(valid().update_violations().is_empty());
    }

    #[test]
    fn test_store_missing_names_reported_in_order() {
        let request = CustomerRequest {
            name: String::new(),
            last_name: String::new(),
            ..valid()
        };

        assert_eq!(
            request.store_violations(),
            vec!["name cannot be empty", "last_name cannot be empty"]
        );
    }

    #[test]
    fn test_store_collects_every_failure() {
        let request = CustomerRequest {
            name: "n".repeat(31),
            email: String::new(),
            phone: "1".repeat(21),
            country: "C".to_string(),
            ..valid()
        };

        assert_eq!(
            request.store_violations(),
            vec![
                "name should be less than 30 chars long",
                "email cannot be empty",
                "phone should be less than 20 chars long",
                "country should be equal to 2 chars long",
            ]
        );
    }

    #[test]
    fn test_update_allows_short_country_and_missing_email() {
        let request = CustomerRequest {
            country: "C".to_string(),
            email: String::new(),
            ..valid()
        };

        assert!(request.update_violations().is_empty());
        assert_eq!(
            request.store_violations(),
            vec!["email cannot be empty", "country should be equal to 2 chars long"]
        );
    }

    #[test]
    fn test_update_rule_order() {
        let request = CustomerRequest {
            name: String::new(),
            last_name: "l".repeat(31),
            email: "e".repeat(51),
            phone: "1".repeat(21),
            country: "CHL".to_string(),
            ..valid()
        };

        assert_eq!(
            request.update_violations(),
            vec![
                "name cannot be empty",
                "email should be less than 50 chars long",
                "phone should be less than 20 chars long",
                "country should be less than 2 chars long",
                "last_name should be less than 30 chars long",
            ]
        );
    }

    #[test]
    fn test_validate_store_wraps_violations() {
        let request = CustomerRequest::default();

        match request.validate_store() {
            Err(AppError::ValidationError(messages)) => {
                assert_eq!(messages[0], "name cannot be empty");
            }
            other => panic!("Expected ValidationError, got {:?}", other),
        }
    }

    #[test]
    fn test_null_fields_and_unknown_keys_are_tolerated() {
        let request: CustomerRequest =
            serde_json::from_str(r#"{"id":"x","name":null,"last_name":"Doe","extra":1}"#).unwrap();

        assert_eq!(request.name, "");
        assert_eq!(request.last_name, "Doe");
    }

    #[test]
    fn test_non_string_field_is_rejected() {
        let result = serde_json::from_str::<CustomerRequest>(r#"{"name":42}"#);

        assert!(result.is_err());
    }

    #[test]
    fn test_into_customer_leaves_id_empty() {
        let customer = Customer::from(valid());

        assert!(customer.id.is_empty());
        assert_eq!(customer.name, "Bad");
        assert_eq!(customer.password, "x");
    }
}
