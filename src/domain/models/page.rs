//! 페이지네이션 모델
//!
//! 목록 조회 결과와 오프셋/페이지 수 계산을 담당합니다.
//! 저장소 구현(MySQL, 인메모리)이 같은 계산을 공유하도록 순수 함수로 분리되어 있습니다.

use crate::domain::entities::Customer;

/// 목록 조회 결과
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CustomerPage {
    /// 현재 페이지의 고객 목록 (최근 생성 순)
    pub customers: Vec<Customer>,
    /// 삭제되지 않은 전체 고객 수
    pub total_rows: i64,
    /// 전체 페이지 수
    pub pages: i64,
    /// 요청된 페이지 번호
    pub current_page: i64,
}

/// 조회 시작 오프셋을 계산합니다.
///
/// `limit * page - limit`을 구한 뒤, 그 값이 1 이상이면 `limit`으로 고정합니다.
/// 따라서 2페이지 이후는 모두 2페이지와 같은 구간을 반환합니다.
/// 기존 클라이언트가 이 동작에 의존하므로 그대로 유지합니다 (DESIGN.md 참고).
/// 음수 결과(0페이지)는 0으로 보정됩니다.
/// 곱셈이 넘치는 큰 값도 1 이상으로 보고 `limit`으로 고정합니다.
pub fn page_offset(page: i64, limit: i64) -> i64 {
    match limit.checked_mul(page).and_then(|v| v.checked_sub(limit)) {
        Some(begin) if begin < 1 => begin.max(0),
        _ => limit,
    }
}

/// 전체 행 수와 페이지 크기로 페이지 수를 계산합니다 (올림).
pub fn page_count(total_rows: i64, limit: i64) -> i64 {
    if limit <= 0 {
        return 0;
    }
    let mut pages = total_rows / limit;
    if total_rows % limit != 0 {
        pages += 1;
    }
    pages
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_page_starts_at_zero() {
        assert_eq!(page_offset(1, 10), 0);
    }

    #[test]
    fn test_later_pages_clamp_to_limit() {
        assert_eq!(page_offset(2, 10), 10);
        assert_eq!(page_offset(3, 10), 10);
        assert_eq!(page_offset(7, 5), 5);
    }

    #[test]
    fn test_huge_values_clamp_to_limit() {
        assert_eq!(page_offset(i64::MAX, 10), 10);
        assert_eq!(page_offset(2, i64::MAX), i64::MAX);
        assert_eq!(page_offset(i64::MAX, i64::MAX), i64::MAX);
        assert_eq!(page_offset(1, i64::MAX), 0);
        assert_eq!(page_count(5, i64::MAX), 1);
    }

    #[test]
    fn test_page_zero_does_not_go_negative() {
        assert_eq!(page_offset(0, 10), 0);
    }

    #[test]
    fn test_page_count_rounds_up() {
        assert_eq!(page_count(0, 10), 0);
        assert_eq!(page_count(1, 10), 1);
        assert_eq!(page_count(10, 10), 1);
        assert_eq!(page_count(11, 10), 2);
    }
}
