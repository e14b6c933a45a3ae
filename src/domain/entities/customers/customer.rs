//! Customer Entity Implementation
//!
//! 고객 엔티티의 핵심 구현체입니다.
//! `customers` 테이블의 한 행에 대응하며, 응답 직렬화와 부분 수정(partial update)에
//! 사용할 컬럼 매핑을 함께 제공합니다.

use serde::Serialize;

/// 고객 엔티티
///
/// ## 필드 규칙
///
/// - `id`: 서버가 생성한 UUID 문자열 (`customer_uuid` 컬럼), 생성 후 변경 불가
/// - `password`: 쓰기 전용. 응답으로 직렬화되지 않으며 조회 경로에서는 항상 빈 값
///
/// 빈 문자열 필드는 응답 JSON에서 생략됩니다.
///
/// ```json
/// {
///   "id": "039d69ee-f9cb-4a3d-87e4-6eb63c302579",
///   "name": "Eddwin",
///   "last_name": "Paz",
///   "dni": "264573076",
///   "dni_type": "DNI",
///   "phone": "56900000000",
///   "country": "CL",
///   "email": "ep@latamig.com"
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, sqlx::FromRow)]
pub struct Customer {
    #[serde(skip_serializing_if = "String::is_empty")]
    #[sqlx(rename = "customer_uuid")]
    pub id: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub last_name: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub dni: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub dni_type: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub phone: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub country: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub email: String,

    /// 평문 비밀번호 (저장소에서 해시된 뒤에만 영속화됨)
    #[serde(skip_serializing)]
    #[sqlx(default)]
    pub password: String,
}

impl Customer {
    /// 부분 수정에 포함될 `(컬럼, 값)` 목록을 반환합니다.
    ///
    /// 필드와 컬럼의 매핑은 명시적으로 고정되어 있으며, 빈 문자열인 필드는 제외됩니다.
    /// `id`(`customer_uuid`)는 어떤 경우에도 포함되지 않습니다.
    ///
    /// 순서는 `name, last_name, dni, dni_type, phone, country, email, password`입니다.
    pub fn update_columns(&self) -> Vec<(&'static str, &str)> {
        [
            ("name", self.name.as_str()),
            ("last_name", self.last_name.as_str()),
            ("dni", self.dni.as_str()),
            ("dni_type", self.dni_type.as_str()),
            ("phone", self.phone.as_str()),
            ("country", self.country.as_str()),
            ("email", self.email.as_str()),
            ("password", self.password.as_str()),
        ]
        .into_iter()
        .filter(|(_, value)| !value.is_empty())
        .collect()
    }

    /// 응답용 사본을 반환합니다 (비밀번호 제거).
    pub fn safe(&self) -> Customer {
        Customer {
            password: String::new(),
            ..self.clone()
        }
    }
}
