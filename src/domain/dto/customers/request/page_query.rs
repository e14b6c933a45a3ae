//! 목록 조회 쿼리 파라미터

use serde::Deserialize;

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_LIMIT: i64 = 10;

/// `GET /?page=&limit=` 쿼리 파라미터
///
/// 원문 그대로 받아 [`PageQuery::resolve`]에서 해석합니다.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageQuery {
    pub page: Option<String>,
    pub limit: Option<String>,
}

impl PageQuery {
    /// 쿼리 문자열을 파싱합니다. 형식이 깨진 쿼리는 빈 쿼리로 취급합니다.
    pub fn from_query_str(query: &str) -> Self {
        actix_web::web::Query::<PageQuery>::from_query(query)
            .map(|query| query.into_inner())
            .unwrap_or_default()
    }

    /// `(page, limit)`을 결정합니다.
    ///
    /// - 둘 중 하나라도 없거나 숫자가 아니면 `(1, 10)`
    /// - `page < 0`이면 1
    /// - `limit <= 0`이면 10
    pub fn resolve(&self) -> (i64, i64) {
        let parsed = self
            .page
            .as_deref()
            .and_then(|page| page.trim().parse::<i64>().ok())
            .zip(
                self.limit
                    .as_deref()
                    .and_then(|limit| limit.trim().parse::<i64>().ok()),
            );

        let Some((mut page, mut limit)) = parsed else {
            return (DEFAULT_PAGE, DEFAULT_LIMIT);
        };

        if page < 0 {
            page = DEFAULT_PAGE;
        }
        if limit <= 0 {
            limit = DEFAULT_LIMIT;
        }

        (page, limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_absent() {
        assert_eq!(PageQuery::from_query_str("").resolve(), (1, 10));
        assert_eq!(PageQuery::from_query_str("page=3").resolve(), (1, 10));
        assert_eq!(PageQuery::from_query_str("limit=5").resolve(), (1, 10));
    }

    #[test]
    fn test_defaults_when_not_numeric() {
        assert_eq!(PageQuery::from_query_str("page=abc&limit=5").resolve(), (1, 10));
        assert_eq!(PageQuery::from_query_str("page=2&limit=ten").resolve(), (1, 10));
    }

    #[test]
    fn test_negative_page_and_non_positive_limit_are_corrected() {
        assert_eq!(PageQuery::from_query_str("page=-4&limit=5").resolve(), (1, 5));
        assert_eq!(PageQuery::from_query_str("page=2&limit=0").resolve(), (2, 10));
        assert_eq!(PageQuery::from_query_str("page=2&limit=-3").resolve(), (2, 10));
    }

    #[test]
    fn test_explicit_values_are_kept() {
        assert_eq!(PageQuery::from_query_str("page=2&limit=25").resolve(), (2, 25));
    }
}
