// ==========================================
// 쿠팡 주문건 변환기 - 출력 모듈 에러 타입
// ==========================================

use thiserror::Error;

/// Excel 출력 에러 타입
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Excel 파일 생성 실패: {0}")]
    ExcelWriteError(String),

    #[error("파일 쓰기 실패: {0}")]
    FileWriteError(String),
}

impl From<rust_xlsxwriter::XlsxError> for ExportError {
    fn from(err: rust_xlsxwriter::XlsxError) -> Self {
        ExportError::ExcelWriteError(err.to_string())
    }
}

impl From<std::io::Error> for ExportError {
    fn from(err: std::io::Error) -> Self {
        ExportError::FileWriteError(err.to_string())
    }
}

/// Result 타입 별칭
pub type ExportResult<T> = Result<T, ExportError>;
