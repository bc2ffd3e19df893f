// ==========================================
// 쿠팡 주문건 변환기 - 변환 API
// ==========================================
// 직책: 매핑 조회(캐시) → 파일 읽기 → 변환의 단건 오케스트레이션
// 모델: 단일 사용자, 요청당 1회 동기 실행
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use crate::domain::OrderTable;
use crate::engine::{build_sales_upload, SalesUpload};
use crate::importer::read_order_table;
use crate::mapping::MappingProvider;
use std::collections::HashMap;
use std::path::Path;

/// 변환 결과 구분
///
/// 매칭 0건은 실패가 아니라 명시적 "매칭 없음" 결과이다.
#[derive(Debug)]
pub enum ConvertOutcome {
    /// 변환 완료 (업로드 테이블 + 매칭 원본)
    Converted(SalesUpload),
    /// 매핑과 일치하는 주문건 없음
    NoMatches,
}

pub struct ConvertApi {
    provider: MappingProvider,
}

impl ConvertApi {
    pub fn new(provider: MappingProvider) -> Self {
        Self { provider }
    }

    /// 주문건 파일 1건 변환
    ///
    /// 매핑을 먼저 확인하므로 소스 불가/빈 매핑이면 파일을 읽지 않는다.
    /// 빈 매핑은 "변환 불가"로 차단한다 (매칭 0건과 구분).
    pub fn convert_file<P: AsRef<Path>>(&self, path: P) -> ApiResult<ConvertOutcome> {
        let mapping = self.ensure_mapping()?;
        let orders = read_order_table(path)?;
        self.run_transform(&orders, &mapping)
    }

    /// 이미 읽어들인 주문건 테이블 변환 (외부 호출자용)
    pub fn convert_table(&self, orders: &OrderTable) -> ApiResult<ConvertOutcome> {
        let mapping = self.ensure_mapping()?;
        self.run_transform(orders, &mapping)
    }

    fn ensure_mapping(&self) -> ApiResult<std::sync::Arc<HashMap<String, String>>> {
        let mapping = self.provider.load()?;
        if mapping.is_empty() {
            return Err(ApiError::MappingUnavailable(
                self.provider.source_description(),
            ));
        }
        Ok(mapping)
    }

    fn run_transform(
        &self,
        orders: &OrderTable,
        mapping: &HashMap<String, String>,
    ) -> ApiResult<ConvertOutcome> {
        let result = build_sales_upload(orders, mapping)?;

        if result.upload.is_empty() {
            tracing::warn!("매핑된 다잇쏘 주문건이 없습니다");
            return Ok(ConvertOutcome::NoMatches);
        }

        Ok(ConvertOutcome::Converted(result))
    }

    /// 새 매핑 추가 후 즉시 재조회 (다음 변환에 반영 보장)
    pub fn add_mapping(&self, option_id: &str, erp_code: &str) -> ApiResult<()> {
        self.provider.append(option_id, erp_code)?;
        self.provider.refresh()?;
        Ok(())
    }

    /// 매핑 미리보기 (앞쪽 limit건, 진단용)
    pub fn mapping_preview(&self, limit: usize) -> ApiResult<Vec<(String, String)>> {
        let mapping = self.provider.load()?;
        let mut entries: Vec<(String, String)> = mapping
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        entries.sort();
        entries.truncate(limit);
        Ok(entries)
    }

    pub fn provider(&self) -> &MappingProvider {
        &self.provider
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapping::{FileMappingSource, MappingProvider};
    use std::collections::HashMap;
    use std::io::Write;
    use std::time::Duration;
    use tempfile::NamedTempFile;

    fn provider_with(entries: &str) -> (NamedTempFile, ConvertApi) {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", entries).unwrap();
        let provider = MappingProvider::new(
            Box::new(FileMappingSource::new(file.path())),
            Duration::from_secs(60),
        );
        (file, ConvertApi::new(provider))
    }

    fn orders_with_row(option_id: &str) -> OrderTable {
        let headers = vec![
            "옵션ID".to_string(),
            "결제액".to_string(),
            "구매수(수량)".to_string(),
            "주문시 출고예정일".to_string(),
            "수취인이름".to_string(),
        ];
        let mut row = HashMap::new();
        row.insert("옵션ID".to_string(), option_id.to_string());
        row.insert("결제액".to_string(), "11000".to_string());
        row.insert("구매수(수량)".to_string(), "1".to_string());
        row.insert("주문시 출고예정일".to_string(), "2024-03-01".to_string());
        row.insert("수취인이름".to_string(), "Kim".to_string());
        OrderTable::new(headers, vec![row])
    }

    #[test]
    fn test_convert_table_success() {
        let (_file, api) = provider_with("OPT1:E100\n");
        let outcome = api.convert_table(&orders_with_row("OPT1")).unwrap();
        match outcome {
            ConvertOutcome::Converted(result) => {
                assert_eq!(result.upload.len(), 1);
                assert_eq!(result.upload.rows[0].item_code, "E100");
            }
            ConvertOutcome::NoMatches => panic!("매칭이 있어야 함"),
        }
    }

    #[test]
    fn test_convert_table_no_matches_is_not_error() {
        let (_file, api) = provider_with("OPT1:E100\n");
        let outcome = api.convert_table(&orders_with_row("OTHER")).unwrap();
        assert!(matches!(outcome, ConvertOutcome::NoMatches));
    }

    #[test]
    fn test_empty_mapping_blocks_conversion() {
        let (_file, api) = provider_with("# 주석뿐\n");
        let result = api.convert_table(&orders_with_row("OPT1"));
        assert!(matches!(result, Err(ApiError::MappingUnavailable(_))));
    }

    #[test]
    fn test_add_mapping_visible_in_next_conversion() {
        let (_file, api) = provider_with("OPT1:E100\n");

        // 추가 전에는 매칭 없음
        let before = api.convert_table(&orders_with_row("OPT2")).unwrap();
        assert!(matches!(before, ConvertOutcome::NoMatches));

        api.add_mapping("OPT2", "E200").unwrap();

        let after = api.convert_table(&orders_with_row("OPT2")).unwrap();
        match after {
            ConvertOutcome::Converted(result) => {
                assert_eq!(result.upload.rows[0].item_code, "E200");
            }
            ConvertOutcome::NoMatches => panic!("추가된 매핑이 반영되어야 함"),
        }
    }

    #[test]
    fn test_mapping_preview() {
        let (_file, api) = provider_with("OPT1:E100\nOPT2:E200\nOPT3:E300\n");
        let preview = api.mapping_preview(2).unwrap();
        assert_eq!(preview.len(), 2);
    }
}
