//! CLI 모듈
//!
//! rayonix-faq CLI 명령어 정의 및 구현

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use crate::chat;
use crate::knowledge;

// ============================================================================
// CLI Definition
// ============================================================================

#[derive(Parser)]
#[command(name = "rayonix-faq")]
#[command(version, about = "키워드 매칭 기반 FAQ 챗봇", long_about = None)]
pub struct Cli {
    /// FAQ 지식 파일 경로
    #[arg(short, long, default_value = "faq.json")]
    pub faq: PathBuf,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 대화 세션 시작 (기본 명령)
    Chat,

    /// FAQ 파일 검증 및 상태 확인
    Status,
}

// ============================================================================
// CLI Runner
// ============================================================================

/// CLI 명령어 실행
pub fn run(cli: Cli) -> Result<()> {
    match cli.command.unwrap_or(Commands::Chat) {
        Commands::Chat => cmd_chat(&cli.faq),
        Commands::Status => cmd_status(&cli.faq),
    }
}

// ============================================================================
// Command Implementations
// ============================================================================

/// 대화 명령어 (chat)
///
/// FAQ 파일을 로드하고 표준 입출력으로 대화 세션을 시작합니다.
/// 로드 실패 시에도 빈 지식베이스로 세션은 시작됩니다.
fn cmd_chat(faq_path: &Path) -> Result<()> {
    let kb = knowledge::load_or_empty(faq_path);

    tracing::debug!("대화 세션 시작 (FAQ {} 건)", kb.len());

    chat::run_stdio(kb).context("대화 세션 실행 실패")
}

/// 상태 명령어 (status)
///
/// FAQ 파일을 엄격하게 로드하여 레코드 수와 키워드 통계를 출력합니다.
fn cmd_status(faq_path: &Path) -> Result<()> {
    println!("rayonix-faq v{}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("[*] FAQ 파일: {}", faq_path.display());

    match knowledge::load(faq_path) {
        Ok(kb) => {
            if kb.is_empty() {
                println!("[!] 로드됨, 그러나 레코드가 없습니다.");
                return Ok(());
            }

            println!("[OK] FAQ {} 건 로드됨:\n", kb.len());

            for record in kb.iter() {
                println!(
                    "  - {:<16} 키워드 {} 개",
                    record.question,
                    record.keywords.len()
                );
            }

            let total_keywords: usize = kb.iter().map(|r| r.keywords.len()).sum();
            println!();
            println!("    총 키워드: {} 개", total_keywords);
        }
        Err(e) => {
            println!("[!] 로드 실패: {}", e);
            println!("    chat 명령은 이 상태에서도 실행되지만 매칭 없이 되묻기만 수행합니다.");
        }
    }

    Ok(())
}
