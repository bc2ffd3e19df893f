// ==========================================
// 쿠팡 주문건 변환기 - API 층
// ==========================================
// 직책: 외부 호출자(UI/CLI)를 위한 변환 오케스트레이션
// ==========================================

pub mod convert_api;
pub mod error;

// 핵심 타입 재내보내기
pub use convert_api::{ConvertApi, ConvertOutcome};
pub use error::{ApiError, ApiResult};
