// ==========================================
// 쿠팡 주문건 변환기 - 판매입력 변환 엔진
// ==========================================
// 직책: 매핑 기반 필터 + 행 단위 금액 파생 + 24컬럼 조립
// 원칙: 순수 함수 (입력/매핑이 같으면 결과 동일), 입력 행 순서 보존
// ==========================================

use crate::domain::{
    OrderTable, UploadRow, UploadTable, COL_OPTION_ID, COL_PAYMENT, COL_QUANTITY, COL_RECIPIENT,
    COL_SHIP_DATE,
};
use crate::engine::cleaner;
use std::collections::HashMap;
use thiserror::Error;

/// 변환 엔진 에러 타입
#[derive(Error, Debug)]
pub enum TransformError {
    /// 필수 입력 컬럼 누락 → 변환 전체 중단 (구조적 에러)
    #[error("필수 입력 컬럼 누락: {}", .0.join(", "))]
    MissingColumns(Vec<String>),
}

/// 변환 결과: 업로드 테이블 + 매칭된 원본 행 (검수/다운로드용)
#[derive(Debug, Clone)]
pub struct SalesUpload {
    pub upload: UploadTable,
    pub matched: OrderTable,
}

/// 주문건 테이블 → 이카운트 판매입력 업로드 변환
///
/// 처리 순서:
/// 1. 필수 컬럼 검증 (누락 시 아무것도 생성하지 않고 중단)
/// 2. 필터: 옵션ID가 매핑에 존재하고 매핑된 코드가 비어있지 않은 행만 유지
///    (출력 행의 품목코드는 절대 공란이 될 수 없다는 불변식)
/// 3. 행 단위 파생: 단가 = 결제액 ÷ 수량 (수량 0이면 0),
///    합계 = round(단가 × 수량) — 짝수 반올림(half-to-even),
///    부가세 = 합계 ÷ 11 절사, 공급가액 = 합계 − 부가세
/// 4. 출고예정일 → YYYYMMDD (파싱 실패 시 공란)
///
/// 행 단위 이상치(숫자/날짜 파싱 실패, 수량 0)는 변환을 중단시키지
/// 않고 0 또는 공란으로 강등된다. 매칭 행이 없는 결과는 에러가 아니다.
pub fn build_sales_upload(
    orders: &OrderTable,
    mapping: &HashMap<String, String>,
) -> Result<SalesUpload, TransformError> {
    // 1. 구조 검증
    let missing = orders.missing_required_columns();
    if !missing.is_empty() {
        return Err(TransformError::MissingColumns(missing));
    }

    let mut upload_rows = Vec::new();
    let mut matched_rows = Vec::new();

    for row in &orders.rows {
        // 2. 매핑 기반 필터 (식별자 공란 행 제외)
        let option_id = orders.cell(row, COL_OPTION_ID).trim();
        if option_id.is_empty() {
            continue;
        }
        let item_code = match mapping.get(option_id).map(|c| c.trim()) {
            Some(code) if !code.is_empty() => code,
            _ => continue,
        };

        // 3. 금액 파생
        let payment = cleaner::parse_amount(orders.cell(row, COL_PAYMENT));
        let quantity = cleaner::parse_quantity(orders.cell(row, COL_QUANTITY));
        let unit_price = if quantity == 0.0 {
            0.0
        } else {
            payment / quantity
        };
        let total = (unit_price * quantity).round_ties_even();
        let vat = (total / 11.0).trunc() as i64;
        let supply_value = total as i64 - vat;

        // 4. 날짜/수취인
        let ship_date = cleaner::format_ship_date(orders.cell(row, COL_SHIP_DATE));
        let recipient = orders.cell(row, COL_RECIPIENT).to_string();

        upload_rows.push(UploadRow {
            ship_date,
            item_code: item_code.to_string(),
            quantity,
            unit_price,
            supply_value,
            vat,
            recipient,
        });
        matched_rows.push(row.clone());
    }

    tracing::info!(
        "판매입력 변환 완료: 입력 {}행 → 매칭 {}행",
        orders.len(),
        upload_rows.len()
    );

    Ok(SalesUpload {
        upload: UploadTable::new(upload_rows),
        matched: orders.with_rows(matched_rows),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order_table(rows: &[&[(&str, &str)]]) -> OrderTable {
        let headers = vec![
            "옵션ID".to_string(),
            "결제액".to_string(),
            "구매수(수량)".to_string(),
            "주문시 출고예정일".to_string(),
            "수취인이름".to_string(),
        ];
        let rows = rows
            .iter()
            .map(|cells| {
                cells
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect()
            })
            .collect();
        OrderTable::new(headers, rows)
    }

    fn mapping(entries: &[(&str, &str)]) -> HashMap<String, String> {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_basic_row_derivation() {
        let orders = order_table(&[&[
            ("옵션ID", "OPT1"),
            ("결제액", "11000"),
            ("구매수(수량)", "1"),
            ("주문시 출고예정일", "2024-03-01"),
            ("수취인이름", "Kim"),
        ]]);
        let result = build_sales_upload(&orders, &mapping(&[("OPT1", "E100")])).unwrap();

        assert_eq!(result.upload.len(), 1);
        let row = &result.upload.rows[0];
        assert_eq!(row.ship_date, "20240301");
        assert_eq!(row.item_code, "E100");
        assert_eq!(row.quantity, 1.0);
        assert_eq!(row.unit_price, 11000.0);
        assert_eq!(row.supply_value, 10000);
        assert_eq!(row.vat, 1000);
        assert_eq!(row.recipient, "Kim");
    }

    #[test]
    fn test_zero_quantity_degrades_to_zero() {
        let orders = order_table(&[&[
            ("옵션ID", "OPT1"),
            ("결제액", "11000"),
            ("구매수(수량)", "0"),
            ("주문시 출고예정일", "2024-03-01"),
            ("수취인이름", "Kim"),
        ]]);
        let result = build_sales_upload(&orders, &mapping(&[("OPT1", "E100")])).unwrap();

        let row = &result.upload.rows[0];
        assert_eq!(row.unit_price, 0.0);
        assert_eq!(row.supply_value, 0);
        assert_eq!(row.vat, 0);
    }

    #[test]
    fn test_unmapped_rows_excluded_from_both_outputs() {
        let orders = order_table(&[
            &[
                ("옵션ID", "OPT1"),
                ("결제액", "11000"),
                ("구매수(수량)", "1"),
                ("주문시 출고예정일", "2024-03-01"),
                ("수취인이름", "Kim"),
            ],
            &[
                ("옵션ID", "UNKNOWN"),
                ("결제액", "5000"),
                ("구매수(수량)", "1"),
                ("주문시 출고예정일", "2024-03-02"),
                ("수취인이름", "Lee"),
            ],
        ]);
        let result = build_sales_upload(&orders, &mapping(&[("OPT1", "E100")])).unwrap();

        assert_eq!(result.upload.len(), 1);
        assert_eq!(result.matched.len(), 1);
        assert_eq!(
            result.matched.rows[0].get("옵션ID"),
            Some(&"OPT1".to_string())
        );
    }

    #[test]
    fn test_blank_mapped_code_excluded() {
        // 매핑에 존재하지만 코드가 공란인 식별자는 출력되지 않음
        let orders = order_table(&[&[
            ("옵션ID", "OPT1"),
            ("결제액", "11000"),
            ("구매수(수량)", "1"),
            ("주문시 출고예정일", "2024-03-01"),
            ("수취인이름", "Kim"),
        ]]);
        let result = build_sales_upload(&orders, &mapping(&[("OPT1", "  ")])).unwrap();

        assert!(result.upload.is_empty());
        assert!(result.matched.is_empty());
    }

    #[test]
    fn test_missing_required_column_aborts() {
        let headers = vec![
            "옵션ID".to_string(),
            "결제액".to_string(),
            "구매수(수량)".to_string(),
            "주문시 출고예정일".to_string(),
        ];
        let orders = OrderTable::new(headers, vec![]);

        let err = build_sales_upload(&orders, &mapping(&[("OPT1", "E100")])).unwrap_err();
        let TransformError::MissingColumns(cols) = err;
        assert_eq!(cols, vec!["수취인이름".to_string()]);
    }

    #[test]
    fn test_thousands_separator_payment() {
        let orders = order_table(&[&[
            ("옵션ID", "OPT1"),
            ("결제액", "1,234"),
            ("구매수(수량)", "2"),
            ("주문시 출고예정일", "2024-03-01"),
            ("수취인이름", "Park"),
        ]]);
        let result = build_sales_upload(&orders, &mapping(&[("OPT1", "E100")])).unwrap();

        let row = &result.upload.rows[0];
        assert_eq!(row.unit_price, 617.0);
        // 공급가액 + 부가세 == round(단가 × 수량)
        assert_eq!(row.supply_value + row.vat, 1234);
    }

    #[test]
    fn test_supply_plus_vat_equals_total() {
        for payment in ["10", "999", "12345", "1000000", "7"] {
            let orders = order_table(&[&[
                ("옵션ID", "OPT1"),
                ("결제액", payment),
                ("구매수(수량)", "1"),
                ("주문시 출고예정일", "2024-03-01"),
                ("수취인이름", "Kim"),
            ]]);
            let result = build_sales_upload(&orders, &mapping(&[("OPT1", "E100")])).unwrap();
            let row = &result.upload.rows[0];
            let total = payment.parse::<i64>().unwrap();
            assert_eq!(row.supply_value + row.vat, total, "payment={}", payment);
            assert_eq!(row.vat, total / 11, "payment={}", payment);
        }
    }

    #[test]
    fn test_half_even_rounding_of_total() {
        // 합계 반올림은 짝수 라운딩: 100.5 → 100, 101.5 → 102
        for (payment, expected_total) in [("100.5", 100), ("101.5", 102)] {
            let orders = order_table(&[&[
                ("옵션ID", "OPT1"),
                ("결제액", payment),
                ("구매수(수량)", "1"),
                ("주문시 출고예정일", "2024-03-01"),
                ("수취인이름", "Kim"),
            ]]);
            let result = build_sales_upload(&orders, &mapping(&[("OPT1", "E100")])).unwrap();
            let row = &result.upload.rows[0];
            assert_eq!(
                row.supply_value + row.vat,
                expected_total,
                "payment={}",
                payment
            );
        }
    }

    #[test]
    fn test_unparsable_date_becomes_blank_not_dropped() {
        let orders = order_table(&[&[
            ("옵션ID", "OPT1"),
            ("결제액", "11000"),
            ("구매수(수량)", "1"),
            ("주문시 출고예정일", "미정"),
            ("수취인이름", "Kim"),
        ]]);
        let result = build_sales_upload(&orders, &mapping(&[("OPT1", "E100")])).unwrap();

        assert_eq!(result.upload.len(), 1);
        assert_eq!(result.upload.rows[0].ship_date, "");
    }

    #[test]
    fn test_idempotent_transform() {
        let orders = order_table(&[&[
            ("옵션ID", "OPT1"),
            ("결제액", "11000"),
            ("구매수(수량)", "3"),
            ("주문시 출고예정일", "2024-03-01"),
            ("수취인이름", "Kim"),
        ]]);
        let map = mapping(&[("OPT1", "E100")]);

        let first = build_sales_upload(&orders, &map).unwrap();
        let second = build_sales_upload(&orders, &map).unwrap();

        assert_eq!(first.upload.rows, second.upload.rows);
        assert_eq!(first.matched.rows, second.matched.rows);
    }
}
