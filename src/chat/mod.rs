//! Chat 모듈 - 대화 루프
//!
//! 입력 한 줄 읽기 -> 종료 문구 검사 -> 매칭 1회 -> 응답 출력을
//! 종료 또는 입력 스트림 끝까지 반복합니다. 턴 간 상태는 없습니다.
//!
//! 입출력은 BufRead/Write 제네릭으로 받아 테스트에서 메모리 버퍼로
//! 대체할 수 있습니다.

mod clarify;

// Re-exports
pub use clarify::{clarify, APP_CLARIFICATION, GENERIC_CLARIFICATION, PRICING_CLARIFICATION};

use std::io::{self, BufRead, Write};

use crate::knowledge::KnowledgeBase;
use crate::matcher::find_best_match;

/// 종료 트리거 문구 (트림 + 소문자 변환 후 완전 일치)
pub const EXIT_PHRASES: [&str; 5] = ["bye", "goodbye", "exit", "quit", "see you"];

/// 종료 문구 여부 검사
pub fn is_exit_phrase(input: &str) -> bool {
    let trimmed = input.trim().to_lowercase();
    EXIT_PHRASES.iter().any(|p| *p == trimmed)
}

// ============================================================================
// ChatSession
// ============================================================================

/// 대화 세션
///
/// 지식베이스는 시작 시 한 번 로드된 불변 값으로 전달받습니다.
pub struct ChatSession<R, W> {
    kb: KnowledgeBase,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> ChatSession<R, W> {
    /// 세션 생성
    pub fn new(kb: KnowledgeBase, input: R, output: W) -> Self {
        Self { kb, input, output }
    }

    /// 대화 루프 실행
    ///
    /// 종료 문구 또는 입력 스트림 끝(EOF)에서 정상 반환합니다.
    /// 입력 읽기 오류도 암묵적 종료로 처리합니다.
    pub fn run(mut self) -> io::Result<()> {
        self.print_banner()?;

        loop {
            write!(self.output, "You: ")?;
            self.output.flush()?;

            let mut line = String::new();
            match self.input.read_line(&mut line) {
                // EOF -> 암묵적 종료
                Ok(0) => {
                    writeln!(self.output)?;
                    break;
                }
                Ok(_) => {}
                Err(e) => {
                    tracing::debug!("입력 스트림 읽기 실패, 종료합니다: {}", e);
                    break;
                }
            }

            let user_input = line.trim();

            // 종료 문구 검사
            if is_exit_phrase(user_input) {
                writeln!(self.output, "Chatbot: {}", self.kb.fallback_response("exit"))?;
                break;
            }

            // 매칭은 턴당 1회만 수행하고 결과로 분기
            match find_best_match(&self.kb, user_input) {
                Some(m) => writeln!(self.output, "Chatbot: {}", m.record.answer)?,
                None => writeln!(self.output, "Chatbot: {}", clarify(user_input))?,
            }
        }

        Ok(())
    }

    /// 시작 배너 출력 (세션당 1회)
    fn print_banner(&mut self) -> io::Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "=== Welcome to the Rayonix Solutions Chatbot ===")?;
        writeln!(self.output, "I'm here to answer your questions about our services.")?;
        writeln!(
            self.output,
            "You can ask me about pricing, services, or how to get started."
        )?;
        writeln!(self.output, "Type 'bye' at any time to exit.")?;
        writeln!(self.output)?;
        Ok(())
    }
}

/// 표준 입출력으로 세션 실행
pub fn run_stdio(kb: KnowledgeBase) -> io::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    ChatSession::new(kb, stdin.lock(), stdout.lock()).run()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::knowledge::{FaqRecord, GENERIC_FALLBACK};
    use std::io::Cursor;

    fn record(question: &str, answer: &str, keywords: &[&str]) -> FaqRecord {
        FaqRecord {
            question: question.to_string(),
            answer: answer.to_string(),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
        }
    }

    fn sample_kb() -> KnowledgeBase {
        KnowledgeBase::new(vec![
            record("Greeting", "Hello! How can I help you?", &["hello", "hi"]),
            record(
                "Pricing",
                "Our pricing depends on scope.",
                &["price", "cost", "pricing"],
            ),
            record("Exit", "Thank you for visiting. Goodbye!", &["bye"]),
        ])
    }

    /// 입력 문자열로 세션을 실행하고 전체 출력을 반환
    fn run_session(kb: KnowledgeBase, input: &str) -> String {
        let mut output = Vec::new();
        ChatSession::new(kb, Cursor::new(input.to_string()), &mut output)
            .run()
            .unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_is_exit_phrase() {
        assert!(is_exit_phrase("bye"));
        assert!(is_exit_phrase(" BYE  "));
        assert!(is_exit_phrase("See You"));
        assert!(!is_exit_phrase("byebye"));
        assert!(!is_exit_phrase(""));
    }

    #[test]
    fn test_quit_prints_exit_fallback_and_stops() {
        let output = run_session(sample_kb(), "quit\nhello\n");
        assert!(output.contains("Chatbot: Thank you for visiting. Goodbye!"));
        // 종료 후에는 입력을 더 읽지 않음
        assert!(!output.contains("How can I help you?"));
    }

    #[test]
    fn test_exit_without_exit_record_uses_generic_fallback() {
        let kb = KnowledgeBase::new(vec![record("Greeting", "Hello!", &["hello"])]);
        let output = run_session(kb, "quit\n");
        assert!(output.contains(&format!("Chatbot: {}", GENERIC_FALLBACK)));
    }

    #[test]
    fn test_greeting_answered_like_any_match() {
        let output = run_session(sample_kb(), "hello there\nbye\n");
        assert!(output.contains("Chatbot: Hello! How can I help you?"));
    }

    #[test]
    fn test_pricing_question_matches() {
        let output = run_session(sample_kb(), "What's your price range?\nbye\n");
        assert!(output.contains("Chatbot: Our pricing depends on scope."));
    }

    #[test]
    fn test_no_match_asks_clarification() {
        let output = run_session(sample_kb(), "something unrelated entirely\nbye\n");
        assert!(output.contains(&format!("Chatbot: {}", GENERIC_CLARIFICATION)));
    }

    #[test]
    fn test_empty_kb_app_clarification() {
        let output = run_session(KnowledgeBase::empty(), "I need a mobile app\n");
        assert!(output.contains(&format!("Chatbot: {}", APP_CLARIFICATION)));
    }

    #[test]
    fn test_eof_terminates_gracefully() {
        // 입력이 비어 있으면 배너 출력 후 바로 종료
        let output = run_session(sample_kb(), "");
        assert!(output.contains("=== Welcome to the Rayonix Solutions Chatbot ==="));
        assert!(!output.contains("Chatbot:"));
    }

    #[test]
    fn test_banner_printed_once() {
        let output = run_session(sample_kb(), "bye\n");
        let count = output
            .matches("=== Welcome to the Rayonix Solutions Chatbot ===")
            .count();
        assert_eq!(count, 1);
    }
}
