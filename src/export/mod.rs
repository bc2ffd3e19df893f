// ==========================================
// 쿠팡 주문건 변환기 - 출력 층
// ==========================================
// 직책: 변환 결과 테이블 → xlsx 파일/바이트
// ==========================================

pub mod error;
pub mod excel;

// 핵심 타입 재내보내기
pub use error::{ExportError, ExportResult};
pub use excel::{orders_xlsx_bytes, upload_xlsx_bytes, write_orders_xlsx, write_upload_xlsx};
