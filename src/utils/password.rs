//! 비밀번호 해싱
//!
//! 평문 비밀번호는 저장 직전에 bcrypt로 단방향 해시됩니다.
//! cost는 [`PasswordConfig::bcrypt_cost`]를 따릅니다.

use bcrypt::hash;

use crate::config::PasswordConfig;
use crate::core::errors::{AppResult, ErrorContext};

/// 평문 비밀번호를 bcrypt 해시로 변환합니다.
pub fn hash_password(plain: &str) -> AppResult<String> {
    hash_password_with_cost(plain, PasswordConfig::bcrypt_cost())
}

pub fn hash_password_with_cost(plain: &str, cost: u32) -> AppResult<String> {
    let start = std::time::Instant::now();
    let hashed = hash(plain, cost).context("비밀번호 해싱 실패")?;

    log::debug!("Password hashing took: {:?}", start.elapsed());
    Ok(hashed)
}

/// 값이 있을 때만 해시합니다. 빈 문자열은 `None`입니다.
pub fn hash_if_present(plain: &str) -> AppResult<Option<String>> {
    if plain.is_empty() {
        return Ok(None);
    }
    hash_password(plain).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_is_not_plaintext_and_verifies() {
        let hashed = hash_password_with_cost("conejomalo", 4).unwrap();

        assert_ne!(hashed, "conejomalo");
        assert!(bcrypt::verify("conejomalo", &hashed).unwrap());
    }

    #[test]
    fn test_empty_password_is_not_hashed() {
        assert_eq!(hash_if_present("").unwrap(), None);
    }

    #[test]
    fn test_invalid_cost_maps_to_internal_error() {
        let result = hash_password_with_cost("x", 99);

        assert!(matches!(result, Err(crate::core::errors::AppError::InternalError(_))));
    }
}
