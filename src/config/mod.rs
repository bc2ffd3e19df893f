// ==========================================
// 쿠팡 주문건 변환기 - 설정 층
// ==========================================
// 직책: 매핑 소스 선택 + 캐시/타임아웃 설정 (JSON 파일)
// 기본 소스: 로컬 mapping.txt (원격 시트는 설정으로 전환)
// ==========================================

use crate::mapping::{
    FileMappingSource, MappingError, MappingProvider, MappingSource, SheetMappingSource,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// 설정 에러 타입
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("설정 파일 읽기 실패 ({path}): {message}")]
    ReadError { path: String, message: String },

    #[error("설정 파일 형식 오류 ({path}): {message}")]
    ParseError { path: String, message: String },

    #[error(transparent)]
    SourceInit(#[from] MappingError),
}

// ==========================================
// MappingSourceConfig - 매핑 소스 선택
// ==========================================
// 변형: 로컬 파일 / 시트 ID / 사용자가 붙여넣은 시트 URL
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MappingSourceConfig {
    /// 로컬 플랫 파일 ('옵션ID:코드' 줄 단위)
    File { path: PathBuf },

    /// 구글 시트 (시트 ID 직접 지정)
    Sheet {
        sheet_id: String,
        #[serde(default = "default_worksheet")]
        worksheet: String,
        /// append 호출용 bearer 토큰 (조회에는 불필요)
        #[serde(default)]
        api_token: Option<String>,
    },

    /// 구글 시트 (스프레드시트 URL 붙여넣기)
    SheetUrl {
        url: String,
        #[serde(default = "default_worksheet")]
        worksheet: String,
        #[serde(default)]
        api_token: Option<String>,
    },
}

fn default_worksheet() -> String {
    "Sheet1".to_string()
}

fn default_mapping_source() -> MappingSourceConfig {
    MappingSourceConfig::File {
        path: PathBuf::from("mapping.txt"),
    }
}

fn default_cache_ttl_secs() -> u64 {
    crate::mapping::DEFAULT_CACHE_TTL.as_secs()
}

fn default_fetch_timeout_secs() -> u64 {
    10
}

// ==========================================
// AppConfig - 앱 설정
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_mapping_source")]
    pub mapping: MappingSourceConfig,

    /// 매핑 캐시 유지 시간 (초)
    #[serde(default = "default_cache_ttl_secs")]
    pub cache_ttl_secs: u64,

    /// 원격 소스 호출 제한 시간 (초)
    #[serde(default = "default_fetch_timeout_secs")]
    pub fetch_timeout_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            mapping: default_mapping_source(),
            cache_ttl_secs: default_cache_ttl_secs(),
            fetch_timeout_secs: default_fetch_timeout_secs(),
        }
    }
}

impl AppConfig {
    /// JSON 설정 파일 로드
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        serde_json::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// 기본 경로 설정 로드 (파일 없으면 기본값)
    pub fn load_default() -> Result<Self, ConfigError> {
        match Self::default_config_path() {
            Some(path) if path.exists() => Self::load(path),
            _ => Ok(Self::default()),
        }
    }

    /// 기본 설정 파일 경로 (~/.config/coupang-sales-upload/config.json)
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("coupang-sales-upload").join("config.json"))
    }

    /// 설정에 따라 매핑 제공자 구성
    pub fn build_provider(&self) -> Result<MappingProvider, ConfigError> {
        let timeout = Duration::from_secs(self.fetch_timeout_secs);

        let source: Box<dyn MappingSource> = match &self.mapping {
            MappingSourceConfig::File { path } => Box::new(FileMappingSource::new(path)),
            MappingSourceConfig::Sheet {
                sheet_id,
                worksheet,
                api_token,
            } => Box::new(SheetMappingSource::new(
                sheet_id.clone(),
                worksheet.clone(),
                api_token.clone(),
                timeout,
            )?),
            MappingSourceConfig::SheetUrl {
                url,
                worksheet,
                api_token,
            } => Box::new(SheetMappingSource::from_url(
                url,
                worksheet.clone(),
                api_token.clone(),
                timeout,
            )?),
        };

        Ok(MappingProvider::new(
            source,
            Duration::from_secs(self.cache_ttl_secs),
        ))
    }
}
