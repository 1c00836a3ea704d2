//! Matcher 모듈 - 키워드 교집합 기반 FAQ 매칭
//!
//! 입력 토큰 집합과 각 레코드의 키워드 집합의 교집합 크기를 점수로 사용하는
//! 단순 bag-of-words 매칭입니다. 가중치, 어간 추출, 퍼지 매칭 없음.

mod normalize;

// Re-exports
pub use normalize::{normalize, token_set};

use std::collections::HashSet;

use crate::knowledge::{FaqRecord, KnowledgeBase};

// ============================================================================
// Types
// ============================================================================

/// 최고 점수 매칭 결과
#[derive(Debug, Clone)]
pub struct BestMatch<'a> {
    /// 매칭된 레코드
    pub record: &'a FaqRecord,
    /// 키워드 점수 (교집합 크기, 항상 1 이상)
    pub score: usize,
}

// ============================================================================
// Scoring
// ============================================================================

/// 레코드 1건의 키워드 점수 계산
///
/// 입력 토큰 집합에 포함된 키워드 수를 반환합니다.
pub fn keyword_score(record: &FaqRecord, tokens: &HashSet<String>) -> usize {
    record
        .keywords
        .iter()
        .filter(|k| tokens.contains(k.as_str()))
        .count()
}

/// 최고 점수 레코드 선택
///
/// 입력을 정규화해 고유 토큰 집합으로 만들고, 파일 순서대로 각 레코드의
/// 점수를 계산합니다. 엄격한 `>` 비교만 사용하므로 동점일 때는
/// 먼저 나온 레코드가 유지됩니다. 최고 점수가 0이면 매칭 없음입니다.
pub fn find_best_match<'a>(kb: &'a KnowledgeBase, raw_input: &str) -> Option<BestMatch<'a>> {
    let tokens = token_set(raw_input);
    if tokens.is_empty() {
        return None;
    }

    let mut best: Option<BestMatch<'a>> = None;
    let mut highest = 0usize;

    for record in kb.iter() {
        let score = keyword_score(record, &tokens);
        if score > highest {
            highest = score;
            best = Some(BestMatch { record, score });
        }
    }

    if let Some(ref m) = best {
        tracing::debug!("매칭: {} (점수 {})", m.record.question, m.score);
    }

    best
}

// ============================================================================
// Tests
// ============================================================================
