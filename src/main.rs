use std::path::PathBuf;

use clap::Parser;
use fuel_combustion_calculator::{app, config};

/// 연료 원소 분석 웹 계산기 서버.
#[derive(Parser)]
#[command(name = "fuel_combustion_calculator")]
#[command(about = "Fuel composition and net calorific value web form", long_about = None)]
struct Cli {
    /// 설정 파일 경로 (없으면 기본값으로 생성)
    #[arg(short, long, default_value = config::DEFAULT_CONFIG_PATH)]
    config: PathBuf,
    /// 바인딩 호스트 (설정 파일 값 덮어쓰기)
    #[arg(long)]
    host: Option<String>,
    /// 바인딩 포트 (설정 파일 값 덮어쓰기)
    #[arg(short, long)]
    port: Option<u16>,
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 웹 서버를 실행한다.
fn main() {
    if let Err(err) = try_run() {
        eprintln!("오류: {err}");
        std::process::exit(1);
    }
}

fn try_run() -> Result<(), app::AppError> {
    let cli = Cli::parse();
    let mut cfg = config::load_or_create(&cli.config)?;
    if let Some(host) = cli.host {
        cfg.server.host = host;
    }
    if let Some(port) = cli.port {
        cfg.server.port = port;
    }
    app::init_tracing(&cfg);
    app::run(&cfg)
}
