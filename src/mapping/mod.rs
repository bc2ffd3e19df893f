// ==========================================
// 쿠팡 주문건 변환기 - 매핑 제공자 층
// ==========================================
// 직책: 외부 소스(파일/구글 시트)에서 옵션ID → ERP 품목코드
//       매핑을 조회, TTL 캐싱, 단건 추가
// ==========================================

pub mod error;
pub mod file_source;
pub mod provider;
pub mod sheet_source;
pub mod source;

// 핵심 타입 재내보내기
pub use error::{MappingError, MappingResult};
pub use file_source::FileMappingSource;
pub use provider::{MappingProvider, DEFAULT_CACHE_TTL};
pub use sheet_source::SheetMappingSource;
pub use source::{MappingSource, CODE_COLUMN_CANDIDATES};
