// ==========================================
// 쿠팡 주문건 변환기 - 핵심 라이브러리
// ==========================================
// 용도: 쿠팡 주문건 내보내기(xlsx/csv)를 이카운트 판매입력
//       웹자료올리기 양식으로 변환
// 매핑: 옵션ID → ERP 품목코드 (로컬 파일 또는 구글 시트)
// ==========================================

// ==========================================
// 모듈 선언
// ==========================================

// 도메인 층 - 테이블/양식 계약
pub mod domain;

// 임포트 층 - 주문건 파일 읽기
pub mod importer;

// 매핑 층 - 매핑 소스/캐시
pub mod mapping;

// 엔진 층 - 변환 로직
pub mod engine;

// 출력 층 - xlsx 생성
pub mod export;

// 설정 층 - 소스 선택/캐시 설정
pub mod config;

// 로그 시스템
pub mod logging;

// API 층 - 변환 오케스트레이션
pub mod api;

// ==========================================
// 핵심 타입 재내보내기
// ==========================================

// 도메인 타입
pub use domain::{OrderTable, UploadRow, UploadTable, UPLOAD_COLUMNS};

// 매핑 제공자
pub use mapping::{FileMappingSource, MappingProvider, MappingSource, SheetMappingSource};

// 변환 엔진
pub use engine::{build_sales_upload, SalesUpload, TransformError};

// API
pub use api::{ApiError, ConvertApi, ConvertOutcome};

// 설정
pub use config::{AppConfig, MappingSourceConfig};

// ==========================================
// 상수 정의
// ==========================================

// 시스템 버전
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 시스템 이름
pub const APP_NAME: &str = "쿠팡 주문건 변환기";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
