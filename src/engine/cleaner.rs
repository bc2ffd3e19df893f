// ==========================================
// 쿠팡 주문건 변환기 - 셀 값 정제기
// ==========================================
// 직책: 금액/수량/날짜 문자열의 관용 파싱
// 정책: 행 단위 이상치는 에러가 아니라 0 / 빈 문자열로 강등
// ==========================================

use chrono::{NaiveDate, NaiveDateTime};

/// 결제액 파싱 (천단위 구분자 제거 후 숫자 변환, 실패 시 0)
pub fn parse_amount(raw: &str) -> f64 {
    let cleaned = raw.trim().replace(',', "");
    cleaned.parse::<f64>().unwrap_or(0.0)
}

/// 수량 파싱 (실패 시 0)
pub fn parse_quantity(raw: &str) -> f64 {
    raw.trim().parse::<f64>().unwrap_or(0.0)
}

/// 출고예정일 → 'YYYYMMDD' 문자열 (파싱 실패 시 빈 문자열)
///
/// 쿠팡 내보내기와 Excel 셀 렌더링에서 나오는 표현을 모두 수용한다.
pub fn format_ship_date(raw: &str) -> String {
    let value = raw.trim();
    if value.is_empty() {
        return String::new();
    }

    // 날짜+시각 형식 먼저 시도
    const DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];
    for format in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, format) {
            return dt.format("%Y%m%d").to_string();
        }
    }

    // 날짜 전용 형식
    const DATE_FORMATS: [&str; 4] = ["%Y-%m-%d", "%Y/%m/%d", "%Y.%m.%d", "%Y%m%d"];
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(value, format) {
            return date.format("%Y%m%d").to_string();
        }
    }

    tracing::debug!("출고예정일 파싱 실패, 공란 처리: '{}'", value);
    String::new()
}
