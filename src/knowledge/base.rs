//! FAQ 지식베이스 타입
//!
//! 로드 시점에 한 번 생성되고 이후 불변인 FAQ 레코드 목록입니다.
//! 카테고리 레이블("Greeting", "Pricing" 등)을 폴백 응답 조회 키로 사용합니다.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// 폴백 레코드가 없을 때 사용하는 기본 응답
pub const GENERIC_FALLBACK: &str =
    "I'm not sure how to handle that. Please try asking something else.";

// ============================================================================
// Types
// ============================================================================

/// FAQ 레코드 1건
///
/// `question`은 카테고리 레이블, `keywords`는 매칭용 소문자 토큰 집합입니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FaqRecord {
    /// 카테고리 레이블 (예: "Greeting", "Pricing")
    pub question: String,
    /// 매칭 시 출력할 응답
    pub answer: String,
    /// 매칭용 키워드 집합
    pub keywords: HashSet<String>,
}

impl FaqRecord {
    /// 키워드를 트림 + 소문자로 정규화 (로드 시 1회 적용)
    pub fn lowercased(mut self) -> Self {
        self.keywords = self
            .keywords
            .iter()
            .map(|k| k.trim().to_lowercase())
            .filter(|k| !k.is_empty())
            .collect();
        self
    }
}

/// FAQ 지식베이스
///
/// 파일 순서를 유지하는 불변 레코드 목록입니다.
/// 순서는 동점 시 선두 레코드 우선 규칙에 사용됩니다.
#[derive(Debug, Clone, Default)]
pub struct KnowledgeBase {
    records: Vec<FaqRecord>,
}

impl KnowledgeBase {
    /// 레코드 목록으로 생성
    pub fn new(records: Vec<FaqRecord>) -> Self {
        Self { records }
    }

    /// 빈 지식베이스 (로드 실패 시 폴백)
    pub fn empty() -> Self {
        Self::default()
    }

    /// 레코드 수
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// 레코드가 없는지 여부
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// 파일 순서대로 레코드 순회
    pub fn iter(&self) -> impl Iterator<Item = &FaqRecord> {
        self.records.iter()
    }

    /// 컨텍스트별 폴백 응답 조회
    ///
    /// `context`를 레이블 형식으로 변환("exit" -> "Exit")한 뒤
    /// `question`이 일치하는 첫 레코드의 응답을 반환합니다.
    /// 해당 레코드가 없으면 [`GENERIC_FALLBACK`]을 반환합니다.
    pub fn fallback_response(&self, context: &str) -> &str {
        let label = capitalize(context);
        self.records
            .iter()
            .find(|r| r.question == label)
            .map(|r| r.answer.as_str())
            .unwrap_or(GENERIC_FALLBACK)
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// 첫 글자만 대문자, 나머지는 소문자로 변환
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}

// ============================================================================
// Tests
// ============================================================================
