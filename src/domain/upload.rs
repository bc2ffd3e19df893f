// ==========================================
// 쿠팡 주문건 변환기 - 이카운트 업로드 모델
// ==========================================
// 양식: 이카운트 판매입력 웹자료올리기 (24컬럼 고정)
// 컬럼 순서는 외부 시스템 계약이므로 변경 금지
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// 업로드 양식 고정 상수
// ==========================================
pub const COUNTERPARTY_NAME: &str = "쿠팡 주식회사"; // 거래처명
pub const WAREHOUSE_CODE: &str = "103"; // 출하창고
pub const SOURCE_CHANNEL: &str = "쿠팡"; // 수집처
pub const VOUCHER_FLAG: &str = "Y"; // 생산전표생성 (회계전표 자동 생성)

/// 판매입력 웹자료올리기 24컬럼 (순서 고정)
pub const UPLOAD_COLUMNS: [&str; 24] = [
    "일자",
    "순번",
    "거래처코드",
    "거래처명",
    "담당자",
    "출하창고",
    "거래유형",
    "통화",
    "환율",
    "잔액",
    "참고",
    "품목코드",
    "품목명",
    "규격",
    "수량",
    "단가",
    "외화금액",
    "공급가액",
    "부가세",
    "수집처",
    "수취인",
    "운송장번호",
    "적요",
    "생산전표생성",
];

// ==========================================
// CellValue - 타입 보존 셀 값
// ==========================================
// 용도: xlsx 출력 시 숫자는 숫자 셀로, 공란은 공란으로 기록
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CellValue {
    Blank,
    Text(String),
    Int(i64),
    Float(f64),
}

impl std::fmt::Display for CellValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CellValue::Blank => Ok(()),
            CellValue::Text(s) => write!(f, "{}", s),
            CellValue::Int(n) => write!(f, "{}", n),
            CellValue::Float(n) => write!(f, "{}", n),
        }
    }
}

// ==========================================
// UploadRow - 업로드 1행 (가변 필드만 보유)
// ==========================================
// 고정값/공란 컬럼은 cells()에서 조립
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadRow {
    pub ship_date: String, // 일자 (YYYYMMDD, 파싱 실패 시 빈 문자열)
    pub item_code: String, // 품목코드 (ERP 매핑 결과, 항상 비어있지 않음)
    pub quantity: f64,     // 수량
    pub unit_price: f64,   // 단가 (결제액 ÷ 수량, 수량 0이면 0)
    pub supply_value: i64, // 공급가액 (합계 − 부가세)
    pub vat: i64,          // 부가세 (합계 ÷ 11 절사)
    pub recipient: String, // 수취인
}

impl UploadRow {
    /// 24컬럼 순서대로 셀 값 조립
    pub fn cells(&self) -> Vec<CellValue> {
        vec![
            CellValue::Text(self.ship_date.clone()),            // 일자
            CellValue::Blank,                                   // 순번
            CellValue::Blank,                                   // 거래처코드
            CellValue::Text(COUNTERPARTY_NAME.to_string()),     // 거래처명
            CellValue::Blank,                                   // 담당자
            CellValue::Text(WAREHOUSE_CODE.to_string()),        // 출하창고
            CellValue::Blank,                                   // 거래유형
            CellValue::Blank,                                   // 통화
            CellValue::Blank,                                   // 환율
            CellValue::Blank,                                   // 잔액
            CellValue::Blank,                                   // 참고
            CellValue::Text(self.item_code.clone()),            // 품목코드
            CellValue::Blank,                                   // 품목명
            CellValue::Blank,                                   // 규격
            CellValue::Float(self.quantity),                    // 수량
            CellValue::Float(self.unit_price),                  // 단가
            CellValue::Blank,                                   // 외화금액
            CellValue::Int(self.supply_value),                  // 공급가액
            CellValue::Int(self.vat),                           // 부가세
            CellValue::Text(SOURCE_CHANNEL.to_string()),        // 수집처
            CellValue::Text(self.recipient.clone()),            // 수취인
            CellValue::Blank,                                   // 운송장번호
            CellValue::Blank,                                   // 적요
            CellValue::Text(VOUCHER_FLAG.to_string()),          // 생산전표생성
        ]
    }
}

// ==========================================
// UploadTable - 업로드 테이블
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadTable {
    pub rows: Vec<UploadRow>,
}

impl UploadTable {
    pub fn new(rows: Vec<UploadRow>) -> Self {
        Self { rows }
    }

    pub fn columns() -> &'static [&'static str] {
        &UPLOAD_COLUMNS
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
