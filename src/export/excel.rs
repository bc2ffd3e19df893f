// ==========================================
// 쿠팡 주문건 변환기 - Excel 출력
// ==========================================
// 출력 1: 이카운트 판매입력 업로드 (24컬럼, Sheet1)
// 출력 2: 매칭된 주문건 필터 결과 (원본 컬럼 보존, Sheet1)
// ==========================================

use crate::domain::{CellValue, OrderTable, UploadTable};
use crate::export::error::ExportResult;
use rust_xlsxwriter::{Workbook, Worksheet};
use std::path::Path;

const SHEET_NAME: &str = "Sheet1";

/// 업로드 테이블을 xlsx 파일로 저장
pub fn write_upload_xlsx<P: AsRef<Path>>(table: &UploadTable, path: P) -> ExportResult<()> {
    let mut workbook = build_upload_workbook(table)?;
    workbook.save(path.as_ref())?;
    tracing::info!(
        "이카운트 업로드 파일 저장: {} ({}행)",
        path.as_ref().display(),
        table.len()
    );
    Ok(())
}

/// 업로드 테이블을 xlsx 바이트로 직렬화 (다운로드 스트림용)
pub fn upload_xlsx_bytes(table: &UploadTable) -> ExportResult<Vec<u8>> {
    let mut workbook = build_upload_workbook(table)?;
    Ok(workbook.save_to_buffer()?)
}

/// 주문건 테이블(필터 결과)을 xlsx 파일로 저장
pub fn write_orders_xlsx<P: AsRef<Path>>(table: &OrderTable, path: P) -> ExportResult<()> {
    let mut workbook = build_orders_workbook(table)?;
    workbook.save(path.as_ref())?;
    tracing::info!(
        "주문건 필터 결과 저장: {} ({}행)",
        path.as_ref().display(),
        table.len()
    );
    Ok(())
}

/// 주문건 테이블을 xlsx 바이트로 직렬화
pub fn orders_xlsx_bytes(table: &OrderTable) -> ExportResult<Vec<u8>> {
    let mut workbook = build_orders_workbook(table)?;
    Ok(workbook.save_to_buffer()?)
}

fn build_upload_workbook(table: &UploadTable) -> ExportResult<Workbook> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet().set_name(SHEET_NAME)?;

    // 헤더 행 (24컬럼 고정 순서)
    for (col, name) in UploadTable::columns().iter().enumerate() {
        worksheet.write_string(0, col as u16, *name)?;
    }

    // 데이터 행 (숫자는 숫자 셀로, 공란은 비워둠)
    for (row_idx, row) in table.rows.iter().enumerate() {
        let excel_row = (row_idx + 1) as u32;
        for (col, cell) in row.cells().iter().enumerate() {
            write_cell(worksheet, excel_row, col as u16, cell)?;
        }
    }

    Ok(workbook)
}

fn build_orders_workbook(table: &OrderTable) -> ExportResult<Workbook> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet().set_name(SHEET_NAME)?;

    // 원본 컬럼 순서 유지
    for (col, name) in table.headers.iter().enumerate() {
        worksheet.write_string(0, col as u16, name)?;
    }

    for (row_idx, row) in table.rows.iter().enumerate() {
        let excel_row = (row_idx + 1) as u32;
        for (col, header) in table.headers.iter().enumerate() {
            let value = table.cell(row, header);
            if !value.is_empty() {
                worksheet.write_string(excel_row, col as u16, value)?;
            }
        }
    }

    Ok(workbook)
}

fn write_cell(
    worksheet: &mut Worksheet,
    row: u32,
    col: u16,
    cell: &CellValue,
) -> ExportResult<()> {
    match cell {
        CellValue::Blank => {}
        CellValue::Text(s) => {
            worksheet.write_string(row, col, s)?;
        }
        CellValue::Int(n) => {
            worksheet.write_number(row, col, *n as f64)?;
        }
        CellValue::Float(n) => {
            worksheet.write_number(row, col, *n)?;
        }
    }
    Ok(())
}
