// ==========================================
// 쿠팡 주문건 변환기 - 도메인 모델 층
// ==========================================
// 직책: 입력/출력 테이블 정의, 업로드 양식 계약
// 원칙: 데이터 접근 로직 금지, 변환 로직 금지
// ==========================================

pub mod order;
pub mod upload;

// 핵심 타입 재내보내기
pub use order::{
    OrderTable, COL_OPTION_ID, COL_PAYMENT, COL_QUANTITY, COL_RECIPIENT, COL_SHIP_DATE,
    REQUIRED_ORDER_COLUMNS,
};
pub use upload::{
    CellValue, UploadRow, UploadTable, COUNTERPARTY_NAME, SOURCE_CHANNEL, UPLOAD_COLUMNS,
    VOUCHER_FLAG, WAREHOUSE_CODE,
};
