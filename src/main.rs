// ==========================================
// 쿠팡 주문건 변환기 - CLI 진입점
// ==========================================
// 사용법:
//   coupang-sales-upload <주문건.xlsx|csv> [업로드출력.xlsx] [필터출력.xlsx]
//     [--config <설정.json>]
//
// 기본 출력 파일명은 원본 앱의 다운로드 파일명을 따른다.
// ==========================================

use coupang_sales_upload::api::{ConvertApi, ConvertOutcome};
use coupang_sales_upload::config::AppConfig;
use coupang_sales_upload::export::{write_orders_xlsx, write_upload_xlsx};
use coupang_sales_upload::logging;

const DEFAULT_UPLOAD_OUT: &str = "다잇쏘_쿠팡판매입력.xlsx";
const DEFAULT_FILTERED_OUT: &str = "다잇쏘_주문건_필터링결과.xlsx";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init();

    tracing::info!("==================================================");
    tracing::info!("{}", coupang_sales_upload::APP_NAME);
    tracing::info!("버전: {}", coupang_sales_upload::VERSION);
    tracing::info!("==================================================");

    // 인자 파싱 (위치 인자 + --config)
    let mut positional = Vec::new();
    let mut config_path: Option<String> = None;
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => {
                config_path = Some(args.next().ok_or("--config 뒤에 경로가 필요합니다")?);
            }
            "--help" | "-h" => {
                print_usage();
                return Ok(());
            }
            _ => positional.push(arg),
        }
    }

    let input_path = match positional.first() {
        Some(p) => p.clone(),
        None => {
            print_usage();
            return Err("주문건 파일 경로가 필요합니다".into());
        }
    };
    let upload_out = positional
        .get(1)
        .cloned()
        .unwrap_or_else(|| DEFAULT_UPLOAD_OUT.to_string());
    let filtered_out = positional
        .get(2)
        .cloned()
        .unwrap_or_else(|| DEFAULT_FILTERED_OUT.to_string());

    // 설정 로드
    let config = match &config_path {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::load_default()?,
    };

    // 매핑 제공자 구성
    let provider = config.build_provider()?;
    tracing::info!("매핑 소스: {}", provider.source_description());

    let api = ConvertApi::new(provider);

    // 매핑 미리보기 (원본 앱의 화면 미리보기에 해당)
    let preview = api.mapping_preview(5)?;
    tracing::info!("불러온 매핑 데이터 (일부): {:?}", preview);

    // 변환 실행
    match api.convert_file(&input_path)? {
        ConvertOutcome::Converted(result) => {
            write_upload_xlsx(&result.upload, &upload_out)?;
            write_orders_xlsx(&result.matched, &filtered_out)?;

            println!("변환 완료: 매칭 {}건", result.upload.len());
            println!("  이카운트 업로드: {}", upload_out);
            println!("  주문건 필터 결과: {}", filtered_out);
        }
        ConvertOutcome::NoMatches => {
            println!("매핑된 다잇쏘 주문건이 없습니다. 출력 파일을 생성하지 않았습니다.");
        }
    }

    Ok(())
}

fn print_usage() {
    println!("사용법:");
    println!("  coupang-sales-upload <주문건.xlsx|csv> [업로드출력.xlsx] [필터출력.xlsx] [--config <설정.json>]");
    println!();
    println!("기본 출력:");
    println!("  {}", DEFAULT_UPLOAD_OUT);
    println!("  {}", DEFAULT_FILTERED_OUT);
}
