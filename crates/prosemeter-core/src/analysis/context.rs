//! Document-context classification.
//!
//! Every domain profile scores the text by keyword and secondary-marker hit
//! counts; the highest scaled score wins. Tone, structure, and purpose are
//! each a three-way competition between pattern categories. All ties go to
//! the category listed first.

use std::sync::LazyLock;

use regex::Regex;

use crate::math::{ratio, round2};
use crate::{readability, text};

use super::reports::{
    ContextPurpose, ContextStructure, ContextTone, DocumentContext, Domain, DomainScore,
};

/// Keyword profile of one domain.
struct DomainProfile {
    domain: Domain,
    /// Domain vocabulary, weighted ×2.
    primary: Regex,
    /// Structural markers (citations, metrics, code, dialogue), weighted ×1.
    secondary: Regex,
    multiplier: f64,
}

fn profile(domain: Domain, primary: &str, secondary: &str, multiplier: f64) -> DomainProfile {
    DomainProfile {
        domain,
        primary: Regex::new(&format!(r"(?i)\b(?:{primary})\b")).expect("valid regex"),
        secondary: Regex::new(secondary).expect("valid regex"),
        multiplier,
    }
}

static PROFILES: LazyLock<[DomainProfile; 7]> = LazyLock::new(|| {
    [
        profile(
            Domain::Technical,
            r"apis?|algorithms?|software|code|functions?|databases?|servers?|frameworks?|implementation|configuration|deploy(?:ment|ed)?|interfaces?|protocols?|compil(?:e|er|ed)",
            r"```|`[^`\n]+`|\b\w+\(\)|\bv?\d+\.\d+\.\d+\b",
            1.2,
        ),
        profile(
            Domain::Academic,
            r"research|stud(?:y|ies)|theory|theories|analysis|literature|thesis|scholars?|scholarly|methodology|findings|discourse",
            r"\([A-Z][A-Za-z\-]+(?: et al\.)?,? \d{4}\)|\bet al\.|\[\d+\]",
            1.1,
        ),
        profile(
            Domain::Business,
            r"revenue|markets?|customers?|strategy|stakeholders?|profits?|roi|growth|investments?|quarterly|sales|budgets?|clients?",
            r"\$\s?\d|\d+(?:\.\d+)?%|(?i:\bq[1-4]\b)",
            1.0,
        ),
        profile(
            Domain::Creative,
            r"story|stories|characters?|imagin(?:e|ed|ation)|dreams?|heart|whisper(?:s|ed)?|shadows?|soul|memor(?:y|ies)|moonlight",
            r#""[^"\n]+"|“[^”\n]+”|(?i:\b(?:suddenly|softly|slowly|silently)\b)"#,
            1.0,
        ),
        profile(
            Domain::Scientific,
            r"experiments?|hypothes[ie]s|data|samples?|measurements?|variables?|laborator(?:y|ies)|observations?|specimens?|control group",
            r"(?i)\b\d+(?:\.\d+)?\s?(?:mg|ml|kg|cm|mm|nm|hz|°c)\b|\bp\s?[<=>]\s?0?\.\d+",
            1.3,
        ),
        profile(
            Domain::Legal,
            r"contracts?|agreements?|part(?:y|ies)|liability|clauses?|pursuant|hereby|jurisdiction|plaintiff|defendant|statutes?|shall",
            r"§|(?i:\bsection\s+\d+|\bherein(?:after)?\b|\bwhereas\b)",
            1.3,
        ),
        profile(
            Domain::Educational,
            r"learn(?:ing|ers?)?|students?|lessons?|teach(?:ing|ers?)?|courses?|exercises?|curriculum|objectives?|quiz(?:zes)?",
            r"(?m)^\s*(?:\d+\.|[-*])\s|(?i:\bstep \d+\b|\bfor example\b|\bpractice\b)",
            1.1,
        ),
    ]
});

static TONE_PATTERNS: LazyLock<[(ContextTone, Regex); 3]> = LazyLock::new(|| {
    [
        (
            ContextTone::Formal,
            r"(?i)\b(?:therefore|furthermore|moreover|consequently|thus|hence|whereas|accordingly|notwithstanding)\b",
        ),
        (
            ContextTone::Conversational,
            r"(?i)\b(?:you|your|i|we|let's|gonna|really|pretty|just|okay)\b|n't\b",
        ),
        (
            ContextTone::Persuasive,
            r"(?i)\b(?:must|should|need to|essential|crucial|clearly|undoubtedly|imperative|best)\b",
        ),
    ]
    .map(|(tone, pattern)| (tone, Regex::new(pattern).expect("valid regex")))
});

static STRUCTURE_PATTERNS: LazyLock<[(ContextStructure, Regex); 3]> = LazyLock::new(|| {
    [
        (
            ContextStructure::Sequential,
            r"(?i)\b(?:first|second|third|next|then|finally|step|afterwards)\b",
        ),
        (
            ContextStructure::Comparative,
            r"(?i)\b(?:however|whereas|unlike|similarly|compared|contrast|both|likewise)\b",
        ),
        (
            ContextStructure::CauseEffect,
            r"(?i)\b(?:because|therefore|consequently|result(?:s|ed)?|caus(?:e|es|ed)|effects?|due to|leads? to)\b",
        ),
    ]
    .map(|(structure, pattern)| (structure, Regex::new(pattern).expect("valid regex")))
});

static PURPOSE_PATTERNS: LazyLock<[(ContextPurpose, Regex); 3]> = LazyLock::new(|| {
    [
        (
            ContextPurpose::Inform,
            r"(?i)\b(?:describes?|explains?|defines?|overview|information|reports?|shows?|presents?)\b",
        ),
        (
            ContextPurpose::Persuade,
            r"(?i)\b(?:should|must|recommend|believe|argue|convince|need to|urge)\b",
        ),
        (
            ContextPurpose::Instruct,
            r"(?i)\b(?:how to|step|click|install|follow|run|open|select|enter|configure)\b",
        ),
    ]
    .map(|(purpose, pattern)| (purpose, Regex::new(pattern).expect("valid regex")))
});

/// Classify a document.
///
/// `readability_score` and `avg_sentence_length` come from analyses already
/// run on the same text and are recorded as-is.
#[tracing::instrument(skip(text), fields(text_len = text.len()))]
pub fn classify_context(
    text: &str,
    readability_score: f64,
    avg_sentence_length: f64,
) -> DocumentContext {
    let scores: Vec<DomainScore> = PROFILES
        .iter()
        .map(|p| {
            let primary = p.primary.find_iter(text).count() as f64;
            let secondary = p.secondary.find_iter(text).count() as f64;
            DomainScore {
                domain: p.domain,
                score: round2((primary * 2.0 + secondary) * p.multiplier),
            }
        })
        .collect();

    let primary_type = argmax(scores.iter().map(|s| (s.domain, s.score)))
        .unwrap_or(Domain::Technical);

    DocumentContext {
        primary_type,
        scores,
        tone: strongest(text, &*TONE_PATTERNS),
        structure: strongest(text, &*STRUCTURE_PATTERNS),
        purpose: strongest(text, &*PURPOSE_PATTERNS),
        complexity: readability_score,
        sentence_length: avg_sentence_length,
    }
}

/// Classify a document on its own, computing the Flesch score and mean
/// sentence length from `text`.
pub fn document_context(text: &str) -> DocumentContext {
    let words = text::words(text).len();
    let sentences = text::sentences(text).len();
    let readability = readability::check_readability(text);
    classify_context(text, readability.score, round2(ratio(words, sentences)))
}

/// Category with the most hits; the first category wins ties.
fn strongest<T: Copy>(text: &str, patterns: &[(T, Regex); 3]) -> T {
    let counts = patterns
        .iter()
        .map(|(category, re)| (*category, re.find_iter(text).count() as f64));
    argmax(counts).unwrap_or(patterns[0].0)
}

/// Key of the strictly greatest value; earlier keys win ties.
fn argmax<T>(items: impl IntoIterator<Item = (T, f64)>) -> Option<T> {
    let mut best: Option<(T, f64)> = None;
    for (key, value) in items {
        if best.as_ref().is_none_or(|(_, top)| value > *top) {
            best = Some((key, value));
        }
    }
    best.map(|(key, _)| key)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(input: &str) -> DocumentContext {
        classify_context(input, 50.0, 12.0)
    }

    #[test]
    fn technical_text() {
        let ctx = classify(
            "The API calls a function on the server. Deploy the software with `cargo run` \
             and check the database configuration.",
        );
        assert_eq!(ctx.primary_type, Domain::Technical);
        assert_eq!(ctx.scores.len(), 7);
    }

    #[test]
    fn legal_text() {
        let ctx = classify(
            "The parties hereby agree that the contract shall be governed by the \
             jurisdiction named in Section 4. Whereas the defendant accepts liability.",
        );
        assert_eq!(ctx.primary_type, Domain::Legal);
    }

    #[test]
    fn scientific_text() {
        let ctx = classify(
            "The experiment used 20 samples. Each measurement of 5 mg was recorded, \
             and the data supported the hypothesis (p < 0.05).",
        );
        assert_eq!(ctx.primary_type, Domain::Scientific);
    }

    #[test]
    fn empty_text_ties_resolve_to_first() {
        let ctx = classify("");
        assert_eq!(ctx.primary_type, Domain::Technical);
        assert!(ctx.scores.iter().all(|s| s.score == 0.0));
        assert_eq!(ctx.tone, ContextTone::Formal);
        assert_eq!(ctx.structure, ContextStructure::Sequential);
        assert_eq!(ctx.purpose, ContextPurpose::Inform);
        assert_eq!(ctx.primary_score(), 0.0);
    }

    #[test]
    fn multiplier_scales_scores() {
        // One legal keyword: 1 * 2 * 1.3
        let ctx = classify("The clause is short.");
        let legal = ctx
            .scores
            .iter()
            .find(|s| s.domain == Domain::Legal)
            .map(|s| s.score);
        assert_eq!(legal, Some(2.6));
    }

    #[test]
    fn tone_structure_purpose() {
        let ctx = classify(
            "You really should install it. First, open the terminal. Then run the installer. \
             You must follow each step.",
        );
        assert_eq!(ctx.tone, ContextTone::Conversational);
        assert_eq!(ctx.structure, ContextStructure::Sequential);
        assert_eq!(ctx.purpose, ContextPurpose::Instruct);
    }

    #[test]
    fn contextual_fields_are_copied() {
        let ctx = classify_context("Words here.", 71.5, 8.25);
        assert_eq!(ctx.complexity, 71.5);
        assert_eq!(ctx.sentence_length, 8.25);
    }

    #[test]
    fn standalone_matches_engine() {
        let input = "The API calls a function on the server. It returns JSON.";
        assert_eq!(
            document_context(input),
            crate::analysis::analyze_document(input).context
        );
    }

    #[test]
    fn argmax_prefers_first_on_ties() {
        assert_eq!(argmax([("a", 1.0), ("b", 1.0), ("c", 0.5)]), Some("a"));
        assert_eq!(argmax([("a", 1.0), ("b", 2.0)]), Some("b"));
        assert_eq!(argmax(Vec::<(&str, f64)>::new()), None);
    }
}
