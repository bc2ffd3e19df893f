// ==========================================
// 쿠팡 주문건 변환기 - 임포트 에러 타입
// ==========================================
// 도구: thiserror 파생 매크로
// ==========================================

use thiserror::Error;

/// 임포트 모듈 에러 타입
#[derive(Error, Debug)]
pub enum ImportError {
    // ===== 파일 관련 에러 =====
    #[error("파일이 존재하지 않습니다: {0}")]
    FileNotFound(String),

    #[error("지원하지 않는 파일 형식: {0} (.xlsx/.csv 만 지원)")]
    UnsupportedFormat(String),

    #[error("파일 읽기 실패: {0}")]
    FileReadError(String),

    #[error("Excel 파싱 실패: {0}")]
    ExcelParseError(String),

    #[error("CSV 파싱 실패: {0}")]
    CsvParseError(String),

    // ===== 통용 에러 =====
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<std::io::Error> for ImportError {
    fn from(err: std::io::Error) -> Self {
        ImportError::FileReadError(err.to_string())
    }
}

impl From<csv::Error> for ImportError {
    fn from(err: csv::Error) -> Self {
        ImportError::CsvParseError(err.to_string())
    }
}

impl From<calamine::Error> for ImportError {
    fn from(err: calamine::Error) -> Self {
        ImportError::ExcelParseError(err.to_string())
    }
}

/// Result 타입 별칭
pub type ImportResult<T> = Result<T, ImportError>;
