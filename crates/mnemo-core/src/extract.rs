//! Pattern-rule fact extraction

use crate::types::{ExtractedInfo, ParsedConversation};
use regex::Regex;
use std::sync::OnceLock;

const MAX_ACTIONS: usize = 10;
const MAX_GOALS: usize = 5;
const MAX_CONSTRAINTS: usize = 5;

static WEEKDAYS: &[&str] = &[
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

static PROJECT_RE: OnceLock<Regex> = OnceLock::new();
static TECHNOLOGY_RE: OnceLock<Regex> = OnceLock::new();
static TASK_RE: OnceLock<Regex> = OnceLock::new();
static NAME_RE: OnceLock<Regex> = OnceLock::new();
static NUMBER_RE: OnceLock<Regex> = OnceLock::new();
static DATE_RE: OnceLock<Regex> = OnceLock::new();
static QUOTE_RE: OnceLock<Regex> = OnceLock::new();
static ACTION_RE: OnceLock<Regex> = OnceLock::new();
static GOAL_RE: OnceLock<Regex> = OnceLock::new();
static CONSTRAINT_RE: OnceLock<Regex> = OnceLock::new();

fn find_all(re: &Regex, text: &str) -> Vec<String> {
    re.find_iter(text).map(|m| m.as_str().to_string()).collect()
}

/// Apply the fixed pattern rules to a parsed conversation.
///
/// Rules run over the user and assistant text concatenated with a single
/// space, exactly as the speakers produced it. Each rule is independent;
/// an empty result for a rule is not an error.
pub fn extract_information(parsed: &ParsedConversation) -> ExtractedInfo {
    let full_text = format!("{} {}", parsed.user, parsed.assistant);

    let project_re = PROJECT_RE.get_or_init(|| {
        Regex::new(r"\b[A-Z][A-Za-z]*(?:App|System|Tool|Analyzer|Manager|Project|Platform|Service|Bot|API|Dashboard|Portal)\b").unwrap()
    });
    let technology_re = TECHNOLOGY_RE.get_or_init(|| {
        Regex::new(r"(?i)\b(?:Python|JavaScript|TypeScript|Java|C\+\+|C#|Ruby|Go|Rust|Swift|Kotlin|PHP|React|Vue|Angular|Svelte|Next\.?js|Node\.?js|Django|Flask|FastAPI|Express|Spring|Rails|Laravel|HTML|CSS|SASS|SCSS|SQL|NoSQL|MongoDB|PostgreSQL|MySQL|Redis|GraphQL|REST|AWS|Azure|GCP|Docker|Kubernetes|Git|GitHub|GitLab|Jira|Figma|Tailwind|Bootstrap|Webpack|Vite|npm|yarn|pip|conda)\b").unwrap()
    });
    let task_re = TASK_RE.get_or_init(|| {
        Regex::new(r"(?i)(?:need to|have to|must|should|will|want to|going to|plan to) ([^.!?]+)")
            .unwrap()
    });
    let name_re =
        NAME_RE.get_or_init(|| Regex::new(r"\b[A-Z][a-z]+(?:\s+[A-Z][a-z]+)+\b").unwrap());
    let number_re = NUMBER_RE.get_or_init(|| {
        Regex::new(r"\$?\d+(?:,\d{3})*(?:\.\d+)?(?:\s*(?:percent|%|dollars|USD|EUR|hours|days|weeks|months|years))?").unwrap()
    });
    let date_re = DATE_RE.get_or_init(|| {
        Regex::new(r"(?i)\b(?:Monday|Tuesday|Wednesday|Thursday|Friday|Saturday|Sunday|today|tomorrow|yesterday|next week|next month|next Friday|this week|this month|January|February|March|April|May|June|July|August|September|October|November|December|\d{1,2}/\d{1,2}/\d{2,4})\b").unwrap()
    });
    let quote_re = QUOTE_RE.get_or_init(|| Regex::new(r#""[^"]+""#).unwrap());
    let action_re = ACTION_RE.get_or_init(|| {
        Regex::new(r"(?i)(?:create|build|implement|design|develop|analyze|process|generate|fix|update|delete|add|remove|modify|test|deploy|configure|setup|install)\s+[^.!?]{5,50}").unwrap()
    });
    let goal_re = GOAL_RE.get_or_init(|| {
        Regex::new(r"(?i)(?:goal is to|aim to|objective is|want to achieve|trying to|need to accomplish)\s+[^.!?]+").unwrap()
    });
    let constraint_re = CONSTRAINT_RE.get_or_init(|| {
        Regex::new(r"(?i)(?:budget|deadline|limit|constraint|requirement|must be|cannot|should not|within|by|before)\s+[^.!?]+").unwrap()
    });

    ExtractedInfo {
        projects: find_all(project_re, &full_text),
        technologies: find_all(technology_re, &full_text),
        tasks: task_re
            .captures_iter(&full_text)
            .map(|c| c[1].trim().to_string())
            .collect(),
        names: name_re
            .find_iter(&full_text)
            .map(|m| m.as_str().to_string())
            .filter(|n| !WEEKDAYS.iter().any(|d| n.starts_with(d)))
            .collect(),
        numbers: find_all(number_re, &full_text),
        dates: find_all(date_re, &full_text),
        quotes: find_all(quote_re, &full_text),
        actions: find_all(action_re, &full_text)
            .into_iter()
            .take(MAX_ACTIONS)
            .collect(),
        goals: find_all(goal_re, &full_text)
            .into_iter()
            .take(MAX_GOALS)
            .collect(),
        constraints: find_all(constraint_re, &full_text)
            .into_iter()
            .take(MAX_CONSTRAINTS)
            .collect(),
    }
}
