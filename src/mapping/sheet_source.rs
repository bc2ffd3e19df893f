// ==========================================
// 쿠팡 주문건 변환기 - 구글 시트 매핑 소스
// ==========================================
// 조회: 공개 CSV 내보내기 엔드포인트 (gviz/tq, out:csv)
// 추가: Sheets v4 values:append (bearer 토큰 필요)
// ==========================================

use crate::domain::COL_OPTION_ID;
use crate::mapping::error::{MappingError, MappingResult};
use crate::mapping::source::{MappingSource, CODE_COLUMN_CANDIDATES};
use std::collections::HashMap;
use std::time::Duration;

pub struct SheetMappingSource {
    sheet_id: String,
    worksheet: String,
    api_token: Option<String>,
    client: reqwest::blocking::Client,
}

impl SheetMappingSource {
    /// 시트 ID로 소스 생성
    ///
    /// - `worksheet`: 워크시트 이름 (기본 "Sheet1")
    /// - `api_token`: append 호출용 bearer 토큰 (조회에는 불필요)
    /// - `timeout`: 원격 호출 제한 시간 (행잉 방지)
    pub fn new(
        sheet_id: impl Into<String>,
        worksheet: impl Into<String>,
        api_token: Option<String>,
        timeout: Duration,
    ) -> MappingResult<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| MappingError::SourceUnavailable {
                backend: "sheet".to_string(),
                message: format!("HTTP 클라이언트 생성 실패: {}", e),
            })?;

        Ok(Self {
            sheet_id: sheet_id.into(),
            worksheet: worksheet.into(),
            api_token,
            client,
        })
    }

    /// 사용자가 붙여넣은 스프레드시트 URL에서 시트 ID 추출
    ///
    /// 예: https://docs.google.com/spreadsheets/d/<ID>/edit#gid=0
    pub fn from_url(
        url: &str,
        worksheet: impl Into<String>,
        api_token: Option<String>,
        timeout: Duration,
    ) -> MappingResult<Self> {
        let sheet_id = extract_sheet_id(url).ok_or_else(|| {
            MappingError::SourceUnavailable {
                backend: format!("url:{}", url),
                message: "스프레드시트 URL에서 시트 ID를 찾을 수 없습니다".to_string(),
            }
        })?;
        Self::new(sheet_id, worksheet, api_token, timeout)
    }

    fn export_url(&self) -> String {
        format!(
            "https://docs.google.com/spreadsheets/d/{}/gviz/tq",
            self.sheet_id
        )
    }

    fn append_url(&self) -> String {
        format!(
            "https://sheets.googleapis.com/v4/spreadsheets/{}/values/{}:append",
            self.sheet_id, self.worksheet
        )
    }
}

impl MappingSource for SheetMappingSource {
    fn load(&self) -> MappingResult<HashMap<String, String>> {
        let response = self
            .client
            .get(self.export_url())
            .query(&[("tqx", "out:csv"), ("sheet", self.worksheet.as_str())])
            .send()
            .map_err(|e| MappingError::SourceUnavailable {
                backend: self.describe(),
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(MappingError::SourceUnavailable {
                backend: self.describe(),
                message: format!("HTTP {}", status),
            });
        }

        let body = response
            .text()
            .map_err(|e| MappingError::SourceUnavailable {
                backend: self.describe(),
                message: e.to_string(),
            })?;

        parse_mapping_csv(&body, &self.describe())
    }

    fn append(&self, option_id: &str, erp_code: &str) -> MappingResult<()> {
        let token = self
            .api_token
            .as_deref()
            .ok_or_else(|| MappingError::AppendUnsupported(self.describe()))?;

        let body = serde_json::json!({ "values": [[option_id, erp_code]] });

        let response = self
            .client
            .post(self.append_url())
            .query(&[("valueInputOption", "RAW")])
            .bearer_auth(token)
            .json(&body)
            .send()
            .map_err(|e| MappingError::AppendFailed {
                backend: self.describe(),
                message: e.to_string(),
            })?;

        let status = response.status();
        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(MappingError::AuthFailed {
                backend: self.describe(),
                message: format!("HTTP {}", status),
            });
        }
        if !status.is_success() {
            return Err(MappingError::AppendFailed {
                backend: self.describe(),
                message: format!("HTTP {}", status),
            });
        }

        Ok(())
    }

    fn describe(&self) -> String {
        format!("sheet:{}/{}", self.sheet_id, self.worksheet)
    }
}

/// CSV 내보내기 본문 → 매핑 스냅샷
///
/// 옵션ID 컬럼이 없으면 소스 형식 오류로 간주한다. 코드 컬럼은
/// CODE_COLUMN_CANDIDATES 우선순위대로 행마다 첫 번째 비어있지 않은
/// 값을 사용하고, 식별자/코드 누락 행은 조용히 건너뛴다.
fn parse_mapping_csv(body: &str, source_desc: &str) -> MappingResult<HashMap<String, String>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(body.as_bytes());

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| MappingError::SourceUnavailable {
            backend: source_desc.to_string(),
            message: e.to_string(),
        })?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    let option_idx = headers
        .iter()
        .position(|h| h == COL_OPTION_ID)
        .ok_or_else(|| MappingError::SourceUnavailable {
            backend: source_desc.to_string(),
            message: format!("매핑 시트에 '{}' 컬럼이 없습니다", COL_OPTION_ID),
        })?;

    // 코드 컬럼 후보들의 인덱스 (우선순위 보존)
    let code_indices: Vec<usize> = CODE_COLUMN_CANDIDATES
        .iter()
        .filter_map(|candidate| headers.iter().position(|h| h == candidate))
        .collect();

    let mut mapping = HashMap::new();
    for result in reader.records() {
        let record = result.map_err(|e| MappingError::SourceUnavailable {
            backend: source_desc.to_string(),
            message: e.to_string(),
        })?;

        let option_id = record.get(option_idx).unwrap_or("").trim();
        if option_id.is_empty() {
            continue;
        }

        // 우선순위대로 첫 번째 비어있지 않은 코드 사용
        let code = code_indices
            .iter()
            .filter_map(|&idx| record.get(idx))
            .map(str::trim)
            .find(|v| !v.is_empty());

        match code {
            Some(code) => {
                mapping.insert(option_id.to_string(), code.to_string());
            }
            None => continue, // 코드 없는 행은 건너뛰기
        }
    }

    Ok(mapping)
}

/// '/spreadsheets/d/<ID>' 경로 세그먼트에서 시트 ID 추출
fn extract_sheet_id(url: &str) -> Option<String> {
    let marker = "/spreadsheets/d/";
    let start = url.find(marker)? + marker.len();
    let rest = &url[start..];
    let end = rest
        .find(|c: char| c == '/' || c == '?' || c == '#')
        .unwrap_or(rest.len());
    let id = &rest[..end];
    if id.is_empty() {
        None
    } else {
        Some(id.to_string())
    }
}
