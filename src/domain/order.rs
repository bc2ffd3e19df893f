// ==========================================
// 쿠팡 주문건 변환기 - 주문 테이블 모델
// ==========================================
// 입력: 쿠팡 주문건 내보내기 파일 (xlsx/csv)
// 용도: 임포터가 생성, 변환 엔진이 읽기 전용 사용
// ==========================================

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ==========================================
// 필수 입력 컬럼명 (쿠팡 주문건 내보내기 기준)
// ==========================================
pub const COL_OPTION_ID: &str = "옵션ID"; // 옵션 식별자 (매핑 키)
pub const COL_PAYMENT: &str = "결제액"; // 결제 금액 (천단위 구분자 포함 가능)
pub const COL_QUANTITY: &str = "구매수(수량)"; // 구매 수량
pub const COL_SHIP_DATE: &str = "주문시 출고예정일"; // 출고 예정일
pub const COL_RECIPIENT: &str = "수취인이름"; // 수취인 이름

/// 변환에 반드시 필요한 입력 컬럼 전체
pub const REQUIRED_ORDER_COLUMNS: [&str; 5] = [
    COL_OPTION_ID,
    COL_PAYMENT,
    COL_QUANTITY,
    COL_SHIP_DATE,
    COL_RECIPIENT,
];

// ==========================================
// OrderTable - 주문건 원본 테이블
// ==========================================
// 원칙: 원본 컬럼 순서/값을 그대로 보존 (필터 결과 다운로드용)
// 임의 추가 컬럼은 무시하되 버리지 않음
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderTable {
    // ===== 컬럼 헤더 (원본 순서 유지) =====
    pub headers: Vec<String>,

    // ===== 데이터 행 (헤더명 → 셀 문자열, TRIM 적용) =====
    pub rows: Vec<HashMap<String, String>>,
}

impl OrderTable {
    pub fn new(headers: Vec<String>, rows: Vec<HashMap<String, String>>) -> Self {
        Self { headers, rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// 특정 행의 셀 값 조회 (없으면 빈 문자열)
    pub fn cell<'a>(&'a self, row: &'a HashMap<String, String>, column: &str) -> &'a str {
        row.get(column).map(String::as_str).unwrap_or("")
    }

    /// 필수 컬럼 중 누락된 것들을 반환 (없으면 빈 Vec)
    pub fn missing_required_columns(&self) -> Vec<String> {
        REQUIRED_ORDER_COLUMNS
            .iter()
            .filter(|col| !self.headers.iter().any(|h| h == *col))
            .map(|col| col.to_string())
            .collect()
    }

    /// 동일 헤더를 유지한 채 행 부분집합으로 새 테이블 생성
    pub fn with_rows(&self, rows: Vec<HashMap<String, String>>) -> Self {
        Self {
            headers: self.headers.clone(),
            rows,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table_with_headers(headers: &[&str]) -> OrderTable {
        OrderTable::new(headers.iter().map(|h| h.to_string()).collect(), vec![])
    }

    #[test]
    fn test_missing_required_columns_all_present() {
        let table = table_with_headers(&[
            "옵션ID",
            "결제액",
            "구매수(수량)",
            "주문시 출고예정일",
            "수취인이름",
            "기타컬럼",
        ]);
        assert!(table.missing_required_columns().is_empty());
    }

    #[test]
    fn test_missing_required_columns_reports_each() {
        let table = table_with_headers(&["옵션ID", "결제액", "구매수(수량)"]);
        let missing = table.missing_required_columns();
        assert_eq!(
            missing,
            vec!["주문시 출고예정일".to_string(), "수취인이름".to_string()]
        );
    }

    #[test]
    fn test_cell_absent_column_is_empty() {
        let mut row = HashMap::new();
        row.insert("옵션ID".to_string(), "OPT1".to_string());
        let table = OrderTable::new(vec!["옵션ID".to_string()], vec![row]);
        assert_eq!(table.cell(&table.rows[0], "옵션ID"), "OPT1");
        assert_eq!(table.cell(&table.rows[0], "없는컬럼"), "");
    }
}
