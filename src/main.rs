//! rayonix-faq CLI 진입점

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    // 로깅 초기화 (대화 출력과 섞이지 않도록 기본 WARN)
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    // CLI 실행
    let cli = rayonix_faq::cli::Cli::parse();
    rayonix_faq::cli::run(cli)
}
