use crate::types::SourceType;

/// Academic keyword as it appears in the corpus naming convention.
///
/// Spelled `standford`, not `stanford`: files named `stanford_*.pdf` are not
/// matched by this keyword.
pub const ACADEMIC_STANDFORD_KEYWORD: &str = "standford";

/// Keyword sets checked in priority order; the first set with a hit wins.
const SOURCE_KEYWORDS: &[(SourceType, &[&str])] = &[
    (
        SourceType::Consulting,
        &["mckinsey", "bain", "bcg", "pwc", "deloitte"],
    ),
    (
        SourceType::Academic,
        &["mit", ACADEMIC_STANDFORD_KEYWORD, "harvard"],
    ),
    (SourceType::Industry, &["google", "microsoft", "openai"]),
    (SourceType::Policy, &["wef", "oecd", "undp", "iti"]),
];

pub struct SourceClassifier;

impl Default for SourceClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl SourceClassifier {
    pub fn new() -> Self {
        Self
    }

    /// Classify a document from its filename alone.
    ///
    /// Plain case-insensitive substring match, so short keywords also hit
    /// inside longer words (`"mit"` in `"summit"`).
    pub fn classify(&self, filename: &str) -> SourceType {
        let filename = filename.to_lowercase();

        SOURCE_KEYWORDS
            .iter()
            .find(|(_, keywords)| keywords.iter().any(|keyword| filename.contains(keyword)))
            .map(|(source_type, _)| *source_type)
            .unwrap_or(SourceType::Unknown)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(name: &str) -> SourceType {
        SourceClassifier::new().classify(name)
    }

    #[test]
    fn classifies_each_source_type() {
        assert_eq!(classify("McKinsey_State_of_AI.pdf"), SourceType::Consulting);
        assert_eq!(classify("harvard_agents_review.pdf"), SourceType::Academic);
        assert_eq!(classify("OpenAI_practical_guide.pdf"), SourceType::Industry);
        assert_eq!(classify("oecd_ai_outlook.pdf"), SourceType::Policy);
        assert_eq!(classify("random_whitepaper.pdf"), SourceType::Unknown);
    }

    #[test]
    fn first_matching_set_wins() {
        assert_eq!(classify("deloitte_wef_report.pdf"), SourceType::Consulting);
        assert_eq!(classify("google_oecd_joint.pdf"), SourceType::Industry);
    }

    #[test]
    fn standford_keyword_is_literal() {
        assert_eq!(classify("Standford_HAI_index.pdf"), SourceType::Academic);
        assert_eq!(classify("stanford_hai_index.pdf"), SourceType::Unknown);
    }

    #[test]
    fn keywords_match_inside_words() {
        // "summit" contains "mit", "critical" contains "iti"
        assert_eq!(classify("agent_summit.pdf"), SourceType::Academic);
        assert_eq!(classify("critical_infrastructure.pdf"), SourceType::Policy);
    }
}
