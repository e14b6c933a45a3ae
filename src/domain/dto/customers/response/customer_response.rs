use serde::Serialize;

use crate::domain::entities::Customer;
use crate::domain::models::CustomerPage;

/// 단건 조회 응답 DTO (`data.customer`)
#[derive(Debug, Clone, Serialize)]
pub struct CustomerResponse {
    pub customer: Customer,
}

impl From<Customer> for CustomerResponse {
    fn from(customer: Customer) -> Self {
        Self {
            customer: customer.safe(),
        }
    }
}

/// 페이지 메타데이터
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct Pagination {
    pub pages: i64,
    pub current_page: i64,
    pub total_rows: i64,
}

/// 목록 조회 응답 DTO (`data.customers`, `data.pagination`)
#[derive(Debug, Clone, Serialize)]
pub struct CustomerPageResponse {
    pub customers: Vec<Customer>,
    pub pagination: Pagination,
}

impl From<CustomerPage> for CustomerPageResponse {
    fn from(page: CustomerPage) -> Self {
        let CustomerPage {
            customers,
            total_rows,
            pages,
            current_page,
        } = page;

        Self {
            customers: customers.iter().map(Customer::safe).collect(),
            pagination: Pagination {
                pages,
                current_page,
                total_rows,
            },
        }
    }
}
