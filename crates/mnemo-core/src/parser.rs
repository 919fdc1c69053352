//! Speaker-attributed transcript splitting

use crate::types::ParsedConversation;
use chrono::Utc;
use regex::Regex;
use std::sync::OnceLock;

static USER_RE: OnceLock<Regex> = OnceLock::new();
static ASSISTANT_RE: OnceLock<Regex> = OnceLock::new();

/// Split raw transcript text into user and assistant segments.
///
/// Speaker labels are matched case-insensitively and spans cross newlines.
/// Total over all inputs: when no user label is found the whole text is
/// treated as the user message, and a missing assistant span yields an
/// empty string.
pub fn parse_conversation(text: &str) -> ParsedConversation {
    let user_re = USER_RE.get_or_init(|| {
        Regex::new(
            r"(?is)(?:User|Human|You|Q|Question|Me)[\s:]+(.+?)(?:(?:Assistant|AI|Bot|A|Answer|Response)[\s:]|$)",
        )
        .unwrap()
    });
    let assistant_re = ASSISTANT_RE.get_or_init(|| {
        Regex::new(r"(?is)(?:Assistant|AI|Bot|A|Answer|Response)[\s:]+(.+)$").unwrap()
    });

    let mut user = user_re
        .captures(text)
        .map(|c| c[1].trim().to_string())
        .unwrap_or_default();
    let assistant = assistant_re
        .captures(text)
        .map(|c| c[1].trim().to_string())
        .unwrap_or_default();

    if user.is_empty() {
        user = text.to_string();
    }

    ParsedConversation {
        user,
        assistant,
        full_text: text.to_string(),
        timestamp: Utc::now(),
    }
}
