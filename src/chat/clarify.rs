//! Clarifier - 매칭 실패 시 되묻기 응답
//!
//! 매칭되는 FAQ가 없을 때 단순 부분 문자열 검사로 되묻기 문구를 고릅니다.
//! 우선순위 고정: app -> cost/price -> 일반.

/// "app" 포함 입력에 대한 되묻기
pub const APP_CLARIFICATION: &str =
    "I see you're interested in an app. Do you need a mobile, web, or desktop solution?";

/// "cost" 또는 "price" 포함 입력에 대한 되묻기
pub const PRICING_CLARIFICATION: &str =
    "I'd be happy to discuss pricing. Could you tell me a bit more about your project type \
     (e.g., website, mobile app, custom software)?";

/// 일반 되묻기
pub const GENERIC_CLARIFICATION: &str =
    "That's an interesting question. Can you tell me a bit more about what you're looking for?";

/// 되묻기 문구 선택
///
/// 원본 입력을 소문자화한 뒤 부분 문자열 포함 여부만 검사합니다.
pub fn clarify(raw_input: &str) -> &'static str {
    let vague = raw_input.to_lowercase();

    if vague.contains("app") {
        APP_CLARIFICATION
    } else if vague.contains("cost") || vague.contains("price") {
        PRICING_CLARIFICATION
    } else {
        GENERIC_CLARIFICATION
    }
}

// ============================================================================
// Tests
// ============================================================================
