// ==========================================
// 쿠팡 주문건 변환기 - 매핑 제공자 (캐시 소유)
// ==========================================
// 직책: 소스 스냅샷의 TTL 캐싱 + 수동 무효화 + 단건 추가
// 동시성: 읽기는 Arc 공유, 교체는 원자적 (부분 스냅샷 노출 금지)
// ==========================================

use crate::mapping::error::{MappingError, MappingResult};
use crate::mapping::source::MappingSource;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use std::time::{Duration, Instant};

/// 기본 캐시 유지 시간 (10분)
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(600);

struct Snapshot {
    mapping: Arc<HashMap<String, String>>,
    fetched_at: Instant,
}

pub struct MappingProvider {
    source: Box<dyn MappingSource>,
    ttl: Duration,
    snapshot: RwLock<Option<Snapshot>>,
}

impl MappingProvider {
    pub fn new(source: Box<dyn MappingSource>, ttl: Duration) -> Self {
        Self {
            source,
            ttl,
            snapshot: RwLock::new(None),
        }
    }

    /// 매핑 스냅샷 조회 (캐시 유효 시 재사용)
    ///
    /// 빈 매핑도 유효한 결과이다. "변환 불가" 판단은 호출자의 몫.
    pub fn load(&self) -> MappingResult<Arc<HashMap<String, String>>> {
        {
            let guard = self
                .snapshot
                .read()
                .map_err(|e| MappingError::Other(anyhow::anyhow!("캐시 잠금 실패: {}", e)))?;
            if let Some(snap) = guard.as_ref() {
                if snap.fetched_at.elapsed() < self.ttl {
                    return Ok(Arc::clone(&snap.mapping));
                }
            }
        }

        self.refresh()
    }

    /// 캐시를 무시하고 소스에서 새로 조회
    pub fn refresh(&self) -> MappingResult<Arc<HashMap<String, String>>> {
        let mapping = Arc::new(self.source.load()?);
        tracing::info!(
            "매핑 스냅샷 갱신: {} ({}건)",
            self.source.describe(),
            mapping.len()
        );

        let mut guard = self
            .snapshot
            .write()
            .map_err(|e| MappingError::Other(anyhow::anyhow!("캐시 잠금 실패: {}", e)))?;
        *guard = Some(Snapshot {
            mapping: Arc::clone(&mapping),
            fetched_at: Instant::now(),
        });

        Ok(mapping)
    }

    /// 캐시 무효화 (다음 load는 소스 재조회)
    pub fn invalidate(&self) {
        if let Ok(mut guard) = self.snapshot.write() {
            *guard = None;
        }
    }

    /// 새 매핑 항목 추가 후 캐시 무효화
    pub fn append(&self, option_id: &str, erp_code: &str) -> MappingResult<()> {
        let option_id = option_id.trim();
        let erp_code = erp_code.trim();

        if option_id.is_empty() {
            return Err(MappingError::InvalidEntry(
                "옵션ID가 비어 있습니다".to_string(),
            ));
        }
        if erp_code.is_empty() {
            return Err(MappingError::InvalidEntry(
                "ERP 품목코드가 비어 있습니다".to_string(),
            ));
        }

        self.source.append(option_id, erp_code)?;
        tracing::info!("매핑 추가됨: {} → {}", option_id, erp_code);

        // 다음 load가 추가분을 반영하도록 캐시 무효화
        self.invalidate();
        Ok(())
    }

    pub fn source_description(&self) -> String {
        self.source.describe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// 조회 횟수를 세는 스텁 소스
    struct StubSource {
        load_calls: Arc<Mutex<usize>>,
        entries: Vec<(String, String)>,
        fail: bool,
    }

    impl StubSource {
        fn new(entries: &[(&str, &str)]) -> (Self, Arc<Mutex<usize>>) {
            let calls = Arc::new(Mutex::new(0));
            let source = Self {
                load_calls: Arc::clone(&calls),
                entries: entries
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect(),
                fail: false,
            };
            (source, calls)
        }

        fn failing() -> Self {
            Self {
                load_calls: Arc::new(Mutex::new(0)),
                entries: vec![],
                fail: true,
            }
        }
    }

    impl MappingSource for StubSource {
        fn load(&self) -> MappingResult<HashMap<String, String>> {
            *self.load_calls.lock().unwrap() += 1;
            if self.fail {
                return Err(MappingError::SourceUnavailable {
                    backend: self.describe(),
                    message: "연결 실패".to_string(),
                });
            }
            Ok(self.entries.iter().cloned().collect())
        }

        fn append(&self, _option_id: &str, _erp_code: &str) -> MappingResult<()> {
            Ok(())
        }

        fn describe(&self) -> String {
            "stub".to_string()
        }
    }

    #[test]
    fn test_load_caches_within_ttl() {
        let (source, calls) = StubSource::new(&[("OPT1", "E100")]);
        let provider = MappingProvider::new(Box::new(source), Duration::from_secs(60));

        let first = provider.load().unwrap();
        let second = provider.load().unwrap();

        assert_eq!(first.get("OPT1"), Some(&"E100".to_string()));
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(*calls.lock().unwrap(), 1);
    }

    #[test]
    fn test_load_refetches_after_ttl_expiry() {
        let (source, calls) = StubSource::new(&[("OPT1", "E100")]);
        let provider = MappingProvider::new(Box::new(source), Duration::ZERO);

        provider.load().unwrap();
        provider.load().unwrap();

        assert_eq!(*calls.lock().unwrap(), 2);
    }

    #[test]
    fn test_append_invalidates_cache() {
        let (source, calls) = StubSource::new(&[("OPT1", "E100")]);
        let provider = MappingProvider::new(Box::new(source), Duration::from_secs(60));

        provider.load().unwrap();
        provider.append("OPT2", "E200").unwrap();
        provider.load().unwrap();

        assert_eq!(*calls.lock().unwrap(), 2);
    }

    #[test]
    fn test_append_rejects_empty_entry() {
        let (source, _calls) = StubSource::new(&[]);
        let provider = MappingProvider::new(Box::new(source), Duration::from_secs(60));

        assert!(matches!(
            provider.append("  ", "E100"),
            Err(MappingError::InvalidEntry(_))
        ));
        assert!(matches!(
            provider.append("OPT1", ""),
            Err(MappingError::InvalidEntry(_))
        ));
    }

    #[test]
    fn test_source_failure_is_not_cached() {
        let provider = MappingProvider::new(
            Box::new(StubSource::failing()),
            Duration::from_secs(60),
        );

        assert!(provider.load().is_err());
        assert!(provider.load().is_err());
    }
}
