// ==========================================
// 쿠팡 주문건 변환기 - 변환 엔진 층
// ==========================================
// 직책: 매핑 기반 필터 + 금액 파생의 순수 로직
// 원칙: 파일/네트워크 접근 금지, 입출력은 도메인 테이블로만
// ==========================================

pub mod cleaner;
pub mod sales_upload;

// 핵심 타입 재내보내기
pub use sales_upload::{build_sales_upload, SalesUpload, TransformError};
