//! Pure text predicates: regexes and closed-set lookups over trimmed text,
//! with no geometry or context involved.
//!
//! Mirrors the teacher's `pdf/markdown/constants.rs` habit of compiling every
//! pattern once behind `once_cell::sync::Lazy`.

use once_cell::sync::Lazy;
use regex::Regex;

static SCENE_HEADING_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:INT|EXT|INT/EXT|EXT/INT)\.?\s+.+$").unwrap());

static CHARACTER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z][^():]*?(?:\s*\(.*?\))?$").unwrap());

static CONTINUATION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\((?:MORE|CONT'D|CONTINUED|CONT|MORE TO COME)\)$").unwrap());

static PAGE_NUMBER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:page\s+)?\d+\.?$|^-?\d+-?$|^\d{1,3}$").unwrap());

static SCENE_NUMBER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z]?\d+[A-Z]?\.?$|^\d+[A-Z]?-\d*$").unwrap());

static DATE_SLASH_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d{1,2}/\d{1,2}/\d{2,4}").unwrap());

static DATE_NAMED_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(January|February|March|April|May|June|July|August|September|October|November|December)\s+\d{1,2},\s*\d{4}",
    )
    .unwrap()
});

static SUBHEADING_MARKER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)^(OPEN ON:|LATER|CONTINUOUS|MOMENTS LATER|THE NEXT DAY|THE FOLLOWING DAY|MORNING|AFTERNOON|EVENING|NIGHT|DAWN|DUSK|SAME TIME|THAT NIGHT|THE NEXT MORNING)$",
    )
    .unwrap()
});

const TRANSITIONS: &[&str] = &[
    "FADE IN:",
    "FADE OUT.",
    "CUT TO:",
    "DISSOLVE TO:",
    "MATCH CUT TO:",
    "SMASH CUT TO:",
    "JUMP CUT TO:",
    "CROSS CUT TO:",
    "INTERCUT:",
    "INTERCUT WITH:",
    "BURN TO:",
    "BURN TO PINK:",
    "MONTAGE:",
    "END MONTAGE",
    "BACK TO:",
    "FLASHBACK:",
    "END FLASHBACK",
    "FREEZE FRAME",
    "THE END",
];

const AUTHOR_MARKERS: &[&str] = &[
    "written",
    "by",
    "written by",
    "screenplay by",
    "teleplay by",
    "story by",
];

const SOURCE_MARKER_NEEDLES: &[&str] = &["based on", "adapted from", "inspired by"];

const SOURCE_CREDIT_PREFIXES: &[&str] = &[
    "story by",
    "original screenplay by",
    "characters by",
    "original story by",
];

const NOTES_NEEDLES: &[&str] = &[
    "Bros", "Pictures", "Productions", "Entertainment", "Studios", "Films", "\u{a9}", "Copyright",
    "@",
];

const DRAFT_NEEDLES: &[&str] = &["DRAFT", "VERSION", "REVISION", "FINAL"];

/// Pure text predicates over a single trimmed string. Stateless; every
/// method takes the already-trimmed text it judges.
pub struct TextPatterns;

impl TextPatterns {
    pub fn scene_heading(text: &str) -> bool {
        SCENE_HEADING_RE.is_match(text)
    }

    pub fn character(text: &str) -> bool {
        CHARACTER_RE.is_match(text) && !text.ends_with(':')
    }

    pub fn transition(text: &str) -> bool {
        let upper = text.to_uppercase();
        TRANSITIONS.iter().any(|t| upper == *t)
    }

    pub fn parenthetical(text: &str) -> bool {
        text.starts_with('(') && text.ends_with(')') && !Self::continuation(text)
    }

    pub fn continuation(text: &str) -> bool {
        CONTINUATION_RE.is_match(&text.to_uppercase())
    }

    pub fn subheading(text: &str) -> bool {
        if !Self::all_caps_text(text) || text.len() > 20 {
            return false;
        }
        if Self::scene_heading(text) || Self::transition(text) || Self::continuation(text) {
            return false;
        }
        !Self::character(text) || SUBHEADING_MARKER_RE.is_match(text)
    }

    pub fn all_caps_text(text: &str) -> bool {
        text == text.to_uppercase() && text.chars().any(|c| c.is_ascii_alphabetic())
    }

    pub fn author_marker(text: &str) -> bool {
        let lower = text.trim().to_lowercase();
        AUTHOR_MARKERS.iter().any(|m| lower == *m)
    }

    pub fn source_marker(text: &str) -> bool {
        let lower = text.to_lowercase();
        SOURCE_MARKER_NEEDLES.iter().any(|n| lower.contains(n))
    }

    pub fn source_credit(text: &str) -> bool {
        let lower = text.trim().to_lowercase();
        SOURCE_CREDIT_PREFIXES.iter().any(|p| lower.starts_with(p))
    }

    pub fn source_names(text: &str) -> bool {
        let upper = text.to_uppercase();
        if DRAFT_NEEDLES.iter().any(|n| upper.contains(n)) {
            return true;
        }
        DATE_SLASH_RE.is_match(text) || DATE_NAMED_RE.is_match(text)
    }

    pub fn notes(text: &str) -> bool {
        NOTES_NEEDLES.iter().any(|n| text.contains(n))
    }

    pub fn page_number(text: &str) -> bool {
        PAGE_NUMBER_RE.is_match(text)
    }

    pub fn scene_number(text: &str) -> bool {
        SCENE_NUMBER_RE.is_match(text)
    }
}
