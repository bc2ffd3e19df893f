// ==========================================
// 쿠팡 주문건 변환기 - 매핑 소스 인터페이스
// ==========================================
// 계약: 옵션ID → ERP 품목코드 스냅샷 조회 + 단건 추가
// 구현: FileMappingSource / SheetMappingSource
// ==========================================

use crate::mapping::error::MappingResult;
use std::collections::HashMap;

/// 매핑 소스의 ERP 코드 컬럼 후보 (우선순위 순)
///
/// 소스 시트마다 코드 컬럼명이 다르므로 정의된 우선순위대로
/// 조회하여 첫 번째로 값이 있는 컬럼을 사용한다.
pub const CODE_COLUMN_CANDIDATES: [&str; 5] = [
    "ERP 품목코드",
    "ERP코드",
    "이카운트품목코드",
    "이플렉스코드",
    "코드",
];

/// 매핑 소스 인터페이스
///
/// - `load`: 전체 스냅샷 조회. 식별자/코드 중 하나라도 비어 있는
///   행은 조용히 건너뛴다. 소스 접근 실패 시 부분 결과 없이 에러.
/// - `append`: (옵션ID, 코드) 한 쌍을 백업 저장소에 영속화.
pub trait MappingSource: Send + Sync {
    /// 매핑 스냅샷 조회 (키/값 모두 TRIM 적용, 중복 키는 마지막 값 우선)
    fn load(&self) -> MappingResult<HashMap<String, String>>;

    /// 새 매핑 항목을 소스에 추가
    fn append(&self, option_id: &str, erp_code: &str) -> MappingResult<()>;

    /// 진단/로그용 소스 설명
    fn describe(&self) -> String;
}
