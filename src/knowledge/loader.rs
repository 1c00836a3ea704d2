//! FAQ 로더 - JSON 지식 파일 로드
//!
//! 최상위 `faqs` 키 아래의 레코드 배열을 읽어 [`KnowledgeBase`]를 생성합니다.
//! 로드 실패는 프로세스 시작을 막지 않습니다. 빈 지식베이스로 계속 실행되며
//! 이 경우 챗봇은 매칭 없이 되묻기만 수행합니다 (degraded mode).

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::knowledge::base::{FaqRecord, KnowledgeBase};

// ============================================================================
// Errors
// ============================================================================

/// 로드 시점 오류
///
/// 어느 경우든 치명적이지 않습니다. [`load_or_empty`]가 메시지를 출력하고
/// 빈 지식베이스를 반환합니다.
#[derive(Debug, Error)]
pub enum LoadError {
    /// 파일 없음
    #[error("FAQ 파일을 찾을 수 없습니다: {path}")]
    NotFound { path: PathBuf },

    /// 파일 없음 이외의 I/O 오류
    #[error("FAQ 파일을 읽을 수 없습니다 ({path}): {source}")]
    Io {
        path: PathBuf,
        source: io::Error,
    },

    /// JSON 형식 오류 (필드 누락, 타입 불일치 포함)
    #[error("FAQ 파일 파싱에 실패했습니다 ({path}): {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

// ============================================================================
// Loader
// ============================================================================

/// JSON 파일 형식: `{ "faqs": [ ... ] }`
#[derive(Debug, Deserialize)]
struct FaqFile {
    faqs: Vec<FaqRecord>,
}

/// FAQ 파일을 로드하여 지식베이스 생성
///
/// 레코드 형식은 역직렬화 시점에 검증되므로 필드가 누락된 항목은
/// 즉시 [`LoadError::Parse`]로 실패합니다. 키워드는 소문자로 정규화됩니다.
pub fn load(path: &Path) -> Result<KnowledgeBase, LoadError> {
    let text = match fs::read_to_string(path) {
        Ok(t) => t,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(LoadError::NotFound {
                path: path.to_path_buf(),
            })
        }
        Err(e) => {
            return Err(LoadError::Io {
                path: path.to_path_buf(),
                source: e,
            })
        }
    };

    let file: FaqFile = serde_json::from_str(&text).map_err(|e| LoadError::Parse {
        path: path.to_path_buf(),
        source: e,
    })?;

    let records: Vec<FaqRecord> = file.faqs.into_iter().map(FaqRecord::lowercased).collect();

    tracing::debug!("FAQ {} 건 로드됨: {}", records.len(), path.display());

    Ok(KnowledgeBase::new(records))
}

/// 로드 실패 시 빈 지식베이스로 폴백
///
/// 오류 종류별 메시지를 출력한 뒤 빈 지식베이스를 반환합니다.
/// 재시도 없음.
pub fn load_or_empty(path: &Path) -> KnowledgeBase {
    match load(path) {
        Ok(kb) => kb,
        Err(e) => {
            println!("[!] {}", e);
            println!("    빈 지식베이스로 계속합니다 (모든 입력에 되묻기 응답).");
            tracing::warn!("지식베이스 로드 실패: {}", e);
            KnowledgeBase::empty()
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
