// ==========================================
// 쿠팡 주문건 변환기 - 매핑 모듈 에러 타입
// ==========================================
// 도구: thiserror 파생 매크로
// ==========================================

use thiserror::Error;

/// 매핑 제공자 에러 타입
#[derive(Error, Debug)]
pub enum MappingError {
    // ===== 소스 접근 에러 =====
    #[error("매핑 소스 접근 실패 ({backend}): {message}")]
    SourceUnavailable { backend: String, message: String },

    #[error("매핑 소스 인증 실패 ({backend}): {message}")]
    AuthFailed { backend: String, message: String },

    // ===== 추가(append) 에러 =====
    #[error("매핑 추가를 지원하지 않는 소스: {0}")]
    AppendUnsupported(String),

    #[error("매핑 추가 실패 ({backend}): {message}")]
    AppendFailed { backend: String, message: String },

    // ===== 입력 검증 에러 =====
    #[error("유효하지 않은 매핑 항목: {0}")]
    InvalidEntry(String),

    // ===== 통용 에러 =====
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result 타입 별칭
pub type MappingResult<T> = Result<T, MappingError>;
