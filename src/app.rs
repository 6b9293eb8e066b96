use thiserror::Error;
use tracing_subscriber::EnvFilter;

use crate::config::{Config, ConfigError};
use crate::web;

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum AppError {
    /// 파일/소켓 입출력 오류
    #[error("입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    /// 설정 저장/로드 오류
    #[error("설정 오류: {0}")]
    Config(#[from] ConfigError),
    /// 연료 계산 입력 오류
    #[error("계산 오류: {0}")]
    Calc(#[from] crate::fuel::CalcError),
}

/// 설정의 필터로 tracing 구독자를 초기화한다. `RUST_LOG`가 설정돼 있으면 그 값을 쓴다.
pub fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log.filter.as_str()));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// 웹 서버를 실행한다. 종료될 때까지 반환하지 않는다.
pub fn run(config: &Config) -> Result<(), AppError> {
    let addr = config.socket_addr()?;
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(web::serve(addr));
    Ok(())
}
