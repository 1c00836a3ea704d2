//! 텍스트 정규화
//!
//! 사용자 입력을 소문자화하고 구두점을 제거하여 매칭용 토큰을 만듭니다.
//! 순수 함수이며 같은 입력에 항상 같은 결과를 반환합니다.

use std::collections::HashSet;

use regex::Regex;

/// 입력 텍스트 정규화
///
/// 소문자 변환 후 단어 문자(`\w`, 유니코드)와 공백을 제외한
/// 모든 문자를 제거합니다. 공백으로 구분된 토큰 경계는 유지됩니다.
pub fn normalize(text: &str) -> String {
    let punct_re = Regex::new(r"[^\w\s]").unwrap();
    punct_re.replace_all(&text.to_lowercase(), "").into_owned()
}

/// 정규화 후 고유 토큰 집합 생성
///
/// 중복 토큰은 합쳐지며 순서는 의미가 없습니다.
pub fn token_set(text: &str) -> HashSet<String> {
    let normalized = normalize(text);
    normalized
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_lowercases() {
        assert_eq!(normalize("Hello World"), "hello world");
    }

    #[test]
    fn test_normalize_strips_punctuation() {
        let tokens = token_set("Hello, world!!");
        assert_eq!(tokens.len(), 2);
        assert!(tokens.contains("hello"));
        assert!(tokens.contains("world"));
    }

    #[test]
    fn test_normalize_idempotent() {
        let once = normalize("What's your price range?");
        let twice = normalize(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_normalize_keeps_unicode_words() {
        // \w는 유니코드 단어 문자를 포함
        assert_eq!(normalize("안녕하세요!"), "안녕하세요");
        assert_eq!(normalize("café?"), "café");
    }

    #[test]
    fn test_token_set_collapses_duplicates() {
        let tokens = token_set("price price PRICE price!");
        assert_eq!(tokens.len(), 1);
        assert!(tokens.contains("price"));
    }

    #[test]
    fn test_token_set_empty_input() {
        assert!(token_set("").is_empty());
        assert!(token_set("  !!! ,,, ").is_empty());
    }
}
