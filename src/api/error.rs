// ==========================================
// 쿠팡 주문건 변환기 - API층 에러 타입
// ==========================================
// 직책: 하위 층 에러를 호출자 친화적 분류로 변환
// 분류: 소스 불가 / 구조적 입력 오류 / 기타 (행 단위 이상치는
//       하위 층에서 이미 흡수되어 여기 도달하지 않음)
// ==========================================

use crate::engine::TransformError;
use crate::export::ExportError;
use crate::importer::ImportError;
use crate::mapping::MappingError;
use thiserror::Error;

/// API층 에러 타입
#[derive(Error, Debug)]
pub enum ApiError {
    // ===== 매핑 소스 에러 (변환 불가, 차단성) =====
    #[error("매핑 데이터를 불러오지 못해 변환할 수 없습니다 (소스: {0})")]
    MappingUnavailable(String),

    #[error(transparent)]
    Mapping(#[from] MappingError),

    // ===== 입력 파일 에러 =====
    #[error(transparent)]
    Import(#[from] ImportError),

    // ===== 구조적 입력 에러 (필수 컬럼 누락) =====
    #[error(transparent)]
    Transform(#[from] TransformError),

    // ===== 출력 에러 =====
    #[error(transparent)]
    Export(#[from] ExportError),

    // ===== 통용 에러 =====
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result 타입 별칭
pub type ApiResult<T> = Result<T, ApiError>;
