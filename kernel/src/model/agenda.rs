//! Rule-based suggestions for owners' meeting agenda items.
//!
//! A fixed keyword table is matched case-insensitively against title and
//! description. There is no model behind this: the same input always yields
//! the same suggestion.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgendaItem {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImprovedAgendaItem {
    pub improved_title: String,
    pub improved_description: String,
    pub legal_notes: Option<Vec<String>>,
    pub vote_required: bool,
}

struct AgendaRule {
    keywords: &'static [&'static str],
    title_prefix: &'static str,
    legal_note: Option<&'static str>,
    vote_required: bool,
}

const RULES: &[AgendaRule] = &[
    AgendaRule {
        keywords: &["sanierung", "renovierung", "modernisierung", "umbau"],
        title_prefix: "Beschlussfassung über bauliche Maßnahme",
        legal_note: Some("§ 20 WEG: bauliche Veränderungen bedürfen eines Beschlusses"),
        vote_required: true,
    },
    AgendaRule {
        keywords: &["hausgeld", "wirtschaftsplan", "jahresabrechnung"],
        title_prefix: "Beschlussfassung über Finanzen",
        legal_note: Some("§ 28 WEG: Wirtschaftsplan und Jahresabrechnung"),
        vote_required: true,
    },
    AgendaRule {
        keywords: &["sonderumlage"],
        title_prefix: "Beschlussfassung über Sonderumlage",
        legal_note: Some("§ 28 WEG: Sonderumlagen werden durch Beschluss festgelegt"),
        vote_required: true,
    },
    AgendaRule {
        keywords: &["verwalter", "verwaltung"],
        title_prefix: "Beschlussfassung zur Verwaltung",
        legal_note: Some("§ 26 WEG: Bestellung und Abberufung des Verwalters"),
        vote_required: true,
    },
    AgendaRule {
        keywords: &["hausordnung"],
        title_prefix: "Änderung der Hausordnung",
        legal_note: Some("§ 19 WEG: Hausordnung als Maßnahme ordnungsmäßiger Verwaltung"),
        vote_required: true,
    },
    AgendaRule {
        keywords: &["information", "bericht"],
        title_prefix: "Information",
        legal_note: None,
        vote_required: false,
    },
];

const FALLBACK_PREFIX: &str = "TOP";
const RESOLUTION_PROPOSAL: &str = "Beschlussvorschlag: Die Eigentümergemeinschaft beschließt ...";
const NOTICE_ONLY: &str = "Zur Kenntnisnahme, keine Beschlussfassung erforderlich.";

pub fn improve(item: &AgendaItem) -> ImprovedAgendaItem {
    let haystack = format!("{} {}", item.title, item.description).to_lowercase();
    let matched: Vec<&AgendaRule> = RULES
        .iter()
        .filter(|rule| rule.keywords.iter().any(|k| haystack.contains(k)))
        .collect();

    let prefix = matched
        .first()
        .map(|rule| rule.title_prefix)
        .unwrap_or(FALLBACK_PREFIX);
    let vote_required = matched.iter().any(|rule| rule.vote_required);
    let notes: Vec<String> = matched
        .iter()
        .filter_map(|rule| rule.legal_note.map(str::to_string))
        .collect();

    let trailer = if vote_required {
        RESOLUTION_PROPOSAL
    } else {
        NOTICE_ONLY
    };
    let description = item.description.trim();
    let improved_description = if description.is_empty() {
        trailer.to_string()
    } else {
        format!("{description}\n\n{trailer}")
    };

    ImprovedAgendaItem {
        improved_title: format!("{prefix}: {}", capitalize(item.title.trim())),
        improved_description,
        legal_notes: (!notes.is_empty()).then_some(notes),
        vote_required,
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
