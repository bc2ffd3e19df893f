// ==========================================
// 쿠팡 주문건 변환기 - 로컬 파일 매핑 소스
// ==========================================
// 형식: 한 줄에 '옵션ID:ERP코드', '#' 시작 줄은 주석
// 추가: 파일 말미에 한 줄 append
// ==========================================

use crate::mapping::error::{MappingError, MappingResult};
use crate::mapping::source::MappingSource;
use std::collections::HashMap;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

pub struct FileMappingSource {
    path: PathBuf,
}

impl FileMappingSource {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl MappingSource for FileMappingSource {
    fn load(&self) -> MappingResult<HashMap<String, String>> {
        let content =
            std::fs::read_to_string(&self.path).map_err(|e| MappingError::SourceUnavailable {
                backend: self.describe(),
                message: e.to_string(),
            })?;

        let mut mapping = HashMap::new();
        for line in content.lines() {
            let line = line.trim();

            // 빈 줄과 주석('#')은 건너뛰기
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            match line.split_once(':') {
                Some((key, value)) => {
                    let key = key.trim();
                    let value = value.trim();
                    if key.is_empty() || value.is_empty() {
                        tracing::warn!("매핑 파일 무시된 줄 (키/값 누락): '{}'", line);
                        continue;
                    }
                    // 중복 키는 마지막 값 우선
                    mapping.insert(key.to_string(), value.to_string());
                }
                None => {
                    tracing::warn!("매핑 파일 무시된 줄 (형식 오류): '{}'", line);
                }
            }
        }

        Ok(mapping)
    }

    fn append(&self, option_id: &str, erp_code: &str) -> MappingResult<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| MappingError::AppendFailed {
                backend: self.describe(),
                message: e.to_string(),
            })?;

        writeln!(file, "{}:{}", option_id, erp_code).map_err(|e| MappingError::AppendFailed {
            backend: self.describe(),
            message: e.to_string(),
        })?;

        Ok(())
    }

    fn describe(&self) -> String {
        format!("file:{}", self.path.display())
    }
}
