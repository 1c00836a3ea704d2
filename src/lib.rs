//! rayonix-faq - 키워드 매칭 기반 FAQ 챗봇
//!
//! JSON 지식 파일의 question/answer/keywords 레코드를 로드하고,
//! 입력 토큰 집합과 키워드 집합의 교집합 크기로 최적 답변을 고르는
//! 대화형 CLI 챗봇입니다. 매칭 실패 시 되묻기 문구를 출력합니다.

pub mod chat;
pub mod cli;
pub mod knowledge;
pub mod matcher;

// Re-exports
pub use chat::{
    clarify, is_exit_phrase, ChatSession, APP_CLARIFICATION, EXIT_PHRASES, GENERIC_CLARIFICATION,
    PRICING_CLARIFICATION,
};
pub use knowledge::{
    load, load_or_empty, FaqRecord, KnowledgeBase, LoadError, GENERIC_FALLBACK,
};
pub use matcher::{find_best_match, keyword_score, normalize, token_set, BestMatch};
