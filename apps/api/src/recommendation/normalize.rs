use std::collections::BTreeSet;

/// Canonical set of skill tokens: trimmed, lower-cased, non-empty, unique.
/// `BTreeSet` keeps iteration (and serialized skill lists) deterministic.
pub type SkillSet = BTreeSet<String>;

/// Turns a raw comma-separated skill string into a canonical `SkillSet`.
///
/// Splits on commas, trims each piece, lower-cases, drops pieces that end up
/// empty, and deduplicates. Never fails: blank or comma-only input yields an
/// empty set, and the caller decides whether that is acceptable.
pub fn normalize(raw_input: &str) -> SkillSet {
    raw_input
        .split(',')
        .map(|piece| piece.trim().to_lowercase())
        .filter(|token| !token.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_and_whitespace_insensitive() {
        let skills = normalize("Python, SQL ,  sql");
        let expected: SkillSet = ["python", "sql"].iter().map(|s| s.to_string()).collect();
        assert_eq!(skills, expected);
    }

    #[test]
    fn test_deduplicates_after_normalization() {
        let skills = normalize("Java,java, JAVA ");
        assert_eq!(skills.len(), 1);
        assert!(skills.contains("java"));
    }

    #[test]
    fn test_empty_input_yields_empty_set() {
        assert!(normalize("").is_empty());
        assert!(normalize("   ").is_empty());
    }

    #[test]
    fn test_comma_only_input_yields_empty_set() {
        assert!(normalize(",,,").is_empty());
        assert!(normalize(" , , ").is_empty());
    }

    #[test]
    fn test_discards_empty_pieces_keeps_rest() {
        let skills = normalize("python,,  ,sql");
        assert_eq!(skills.len(), 2);
        assert!(skills.contains("python"));
        assert!(skills.contains("sql"));
    }

    #[test]
    fn test_no_token_is_whitespace_only() {
        let skills = normalize(" rust , \t , go ");
        assert!(skills.iter().all(|t| !t.trim().is_empty()));
        assert_eq!(skills.len(), 2);
    }

    #[test]
    fn test_idempotent_over_rejoined_output() {
        let inputs = ["Python, SQL ,  sql", "a,b,c", "  Docker ,KUBERNETES", ""];
        for input in inputs {
            let once = normalize(input);
            let rejoined = once.iter().cloned().collect::<Vec<_>>().join(",");
            assert_eq!(normalize(&rejoined), once, "input: {input:?}");
        }
    }

    #[test]
    fn test_multiword_skills_survive_intact() {
        let skills = normalize("problem-solving, version-control, machine-learning");
        assert!(skills.contains("problem-solving"));
        assert!(skills.contains("version-control"));
        assert!(skills.contains("machine-learning"));
    }
}
