// ==========================================
// 쿠팡 주문건 변환기 - 파일 파서 구현
// ==========================================
// 지원: Excel (.xlsx) / CSV (.csv)
// 출력: 헤더 순서를 보존한 OrderTable
// ==========================================

use crate::domain::OrderTable;
use crate::importer::error::{ImportError, ImportResult};
use calamine::{open_workbook, Data, DataType, Reader, Xlsx};
use csv::ReaderBuilder;
use std::collections::HashMap;
use std::fs::File;
use std::path::Path;

/// 주문건 파일 파서 인터페이스
pub trait FileParser {
    fn parse(&self, file_path: &Path) -> ImportResult<OrderTable>;
}

// ==========================================
// CSV Parser 구현
// ==========================================
pub struct CsvParser;

impl FileParser for CsvParser {
    fn parse(&self, file_path: &Path) -> ImportResult<OrderTable> {
        let path = file_path;

        // 파일 존재 확인
        if !path.exists() {
            return Err(ImportError::FileNotFound(path.display().to_string()));
        }

        // CSV 파일 열기
        let file = File::open(path)?;
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true) // 행 길이 불일치 허용
            .from_reader(file);

        // 헤더 읽기
        let headers: Vec<String> = reader
            .headers()?
            .iter()
            .map(|h| h.trim().to_string())
            .collect();

        // 데이터 행 읽기
        let mut rows = Vec::new();
        for result in reader.records() {
            let record = result?;
            let mut row_map = HashMap::new();

            for (col_idx, value) in record.iter().enumerate() {
                if let Some(header) = headers.get(col_idx) {
                    row_map.insert(header.clone(), value.trim().to_string());
                }
            }

            // 완전히 빈 행은 건너뛰기 (말미의 빈 행 포함)
            if row_map.values().all(|v| v.is_empty()) {
                continue;
            }

            rows.push(row_map);
        }

        Ok(OrderTable::new(headers, rows))
    }
}

// ==========================================
// Excel Parser 구현
// ==========================================
pub struct ExcelParser;

impl FileParser for ExcelParser {
    fn parse(&self, file_path: &Path) -> ImportResult<OrderTable> {
        let path = file_path;

        // 파일 존재 확인
        if !path.exists() {
            return Err(ImportError::FileNotFound(path.display().to_string()));
        }

        // Excel 파일 열기
        let mut workbook: Xlsx<_> = open_workbook(path)
            .map_err(|e: calamine::XlsxError| ImportError::ExcelParseError(e.to_string()))?;

        // 첫 번째 시트 읽기
        let sheet_names = workbook.sheet_names();
        if sheet_names.is_empty() {
            return Err(ImportError::ExcelParseError(
                "Excel 파일에 워크시트가 없습니다".to_string(),
            ));
        }

        let sheet_name = sheet_names[0].clone();
        let range = workbook
            .worksheet_range(&sheet_name)
            .map_err(|e| ImportError::ExcelParseError(e.to_string()))?;

        // 헤더 추출 (첫 행)
        let mut sheet_rows = range.rows();
        let header_row = sheet_rows
            .next()
            .ok_or_else(|| ImportError::ExcelParseError("Excel 파일에 데이터 행이 없습니다".to_string()))?;

        let headers: Vec<String> = header_row
            .iter()
            .map(|cell| cell.to_string().trim().to_string())
            .collect();

        // 데이터 행 읽기
        let mut rows = Vec::new();
        for data_row in sheet_rows {
            let mut row_map = HashMap::new();

            for (col_idx, cell) in data_row.iter().enumerate() {
                if let Some(header) = headers.get(col_idx) {
                    row_map.insert(header.clone(), cell_to_string(cell));
                }
            }

            // 완전히 빈 행은 건너뛰기
            if row_map.values().all(|v| v.is_empty()) {
                continue;
            }

            rows.push(row_map);
        }

        Ok(OrderTable::new(headers, rows))
    }
}

/// Excel 셀 → 문자열 (날짜 셀은 파싱 가능한 표현으로 렌더링)
fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::DateTime(_) => cell
            .as_datetime()
            .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
            .unwrap_or_else(|| cell.to_string()),
        other => other.to_string().trim().to_string(),
    }
}

// ==========================================
// 범용 파일 파서 (확장자 기준 자동 선택)
// ==========================================
pub struct UniversalFileParser;

impl UniversalFileParser {
    pub fn parse<P: AsRef<Path>>(&self, file_path: P) -> ImportResult<OrderTable> {
        let path = file_path.as_ref();
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        match ext.as_str() {
            "csv" => CsvParser.parse(path),
            "xlsx" => ExcelParser.parse(path),
            _ => Err(ImportError::UnsupportedFormat(ext)),
        }
    }
}

/// 주문건 파일을 읽어 OrderTable 생성
pub fn read_order_table<P: AsRef<Path>>(file_path: P) -> ImportResult<OrderTable> {
    let path = file_path.as_ref();
    let table = UniversalFileParser.parse(path)?;
    tracing::info!(
        "주문건 파일 읽기 완료: {} ({}행, {}컬럼)",
        path.display(),
        table.len(),
        table.headers.len()
    );
    Ok(table)
}
