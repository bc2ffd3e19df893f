// ==========================================
// 쿠팡 주문건 변환기 - 임포트 층
// ==========================================
// 직책: 외부 주문건 파일 읽기 → OrderTable 생성
// 지원: Excel(.xlsx), CSV(.csv)
// ==========================================

pub mod error;
pub mod file_parser;

// 핵심 타입 재내보내기
pub use error::{ImportError, ImportResult};
pub use file_parser::{read_order_table, CsvParser, ExcelParser, FileParser, UniversalFileParser};
