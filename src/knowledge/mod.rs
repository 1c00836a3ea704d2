//! Knowledge 모듈 - FAQ 지식베이스
//!
//! - base: FAQ 레코드 타입과 폴백 응답 조회
//! - loader: JSON 지식 파일 로드 (실패 시 빈 지식베이스로 폴백)

mod base;
mod loader;

// Re-exports
pub use base::{FaqRecord, KnowledgeBase, GENERIC_FALLBACK};
pub use loader::{load, load_or_empty, LoadError};
