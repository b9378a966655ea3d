//! Improvement suggestions derived from a finished analysis.
//!
//! Basic rules look at the numbers; context rules add advice keyed by the
//! detected domain, tone, and purpose. Each rule fires at most once and rules
//! are evaluated in a fixed order. Output is plain text.

use super::reports::{
    ContextPurpose, ContextTone, DocumentAnalysis, Domain, Suggestion, SuggestionIcon,
};

/// Flesch score below which readability advice fires.
const MIN_READABILITY: f64 = 60.0;
/// Passive constructions tolerated before voice advice fires.
const MAX_PASSIVE: usize = 3;
/// Word count below which short texts are told to expand.
const MIN_WORDS: usize = 300;
/// Grade level above which language advice fires.
const MAX_GRADE: f64 = 10.0;
/// Domain score above which a domain-specific introduction is suggested.
const INTRO_DOMAIN_SCORE: f64 = 5.0;

fn suggestion(icon: SuggestionIcon, title: &str, content: impl Into<String>) -> Suggestion {
    Suggestion {
        icon,
        title: title.to_string(),
        content: content.into(),
    }
}

/// Threshold rules over the headline numbers.
///
/// The "Expand Content" rule checks `text` for the literal, case-sensitive
/// substring `conclusion`.
pub fn basic_suggestions(text: &str, analysis: &DocumentAnalysis) -> Vec<Suggestion> {
    let mut out = Vec::new();

    if analysis.readability.score < MIN_READABILITY {
        out.push(suggestion(
            SuggestionIcon::BookOpen,
            "Improve Readability",
            format!(
                "Your readability score is {:.1} ({}). Shorten sentences and prefer \
                 simpler words to make the text easier to follow.",
                analysis.readability.score, analysis.readability.level
            ),
        ));
    }

    if !analysis.structure.has_introduction {
        out.push(suggestion(
            SuggestionIcon::ListTree,
            "Add Introduction",
            "Open with a short introduction that tells the reader what the text covers.",
        ));
    }

    if analysis.style.passive_voice_count > MAX_PASSIVE {
        out.push(suggestion(
            SuggestionIcon::Megaphone,
            "Use Active Voice",
            format!(
                "Found {} passive constructions. Rewrite them so the subject performs the action.",
                analysis.style.passive_voice_count
            ),
        ));
    }

    if analysis.statistics.word_count < MIN_WORDS && !text.contains("conclusion") {
        out.push(suggestion(
            SuggestionIcon::FilePlus,
            "Expand Content",
            format!(
                "The text has {} words. Develop the main points further and close with a conclusion.",
                analysis.statistics.word_count
            ),
        ));
    }

    if analysis.readability.grade > MAX_GRADE {
        out.push(suggestion(
            SuggestionIcon::Feather,
            "Simplify Language",
            format!(
                "The text reads at grade {:.1}. Replace long words and split compound sentences.",
                analysis.readability.grade
            ),
        ));
    }

    out
}

/// Advice keyed by the document context.
///
/// Nothing fires when no domain scored at all.
pub fn context_suggestions(analysis: &DocumentAnalysis) -> Vec<Suggestion> {
    let context = &analysis.context;
    let domain_score = context.primary_score();
    if domain_score <= 0.0 {
        return Vec::new();
    }

    let mut out = Vec::new();

    if !analysis.structure.has_introduction && domain_score > INTRO_DOMAIN_SCORE {
        out.push(suggestion(
            SuggestionIcon::ListTree,
            "Add Introduction",
            introduction_template(context.primary_type),
        ));
    }

    let (title, content) = domain_template(context.primary_type);
    out.push(suggestion(SuggestionIcon::Compass, title, content));

    let (title, content) = tone_template(context.tone);
    out.push(suggestion(SuggestionIcon::MessageCircle, title, content));

    let (title, content) = purpose_template(context.purpose);
    out.push(suggestion(SuggestionIcon::Target, title, content));

    out
}

/// Basic rules followed by context rules.
#[tracing::instrument(skip_all)]
pub fn all_suggestions(text: &str, analysis: &DocumentAnalysis) -> Vec<Suggestion> {
    let mut out = basic_suggestions(text, analysis);
    out.extend(context_suggestions(analysis));
    out
}

fn introduction_template(domain: Domain) -> &'static str {
    match domain {
        Domain::Technical => {
            "State the problem, the system involved, and what the reader will be able to do afterwards."
        }
        Domain::Academic => {
            "Introduce the research question, its context in the literature, and your thesis."
        }
        Domain::Business => "Lead with the key outcome or recommendation and why it matters now.",
        Domain::Creative => "Open with a scene or image that sets the mood before any exposition.",
        Domain::Scientific => {
            "Summarize the hypothesis, the method, and the main finding in the first paragraph."
        }
        Domain::Legal => "Identify the parties, the subject matter, and the governing terms up front.",
        Domain::Educational => "List the learning objectives so readers know what they will learn.",
    }
}

fn domain_template(domain: Domain) -> (&'static str, &'static str) {
    match domain {
        Domain::Technical => (
            "Define Technical Terms",
            "Define acronyms and specialist terms on first use and pair concepts with concrete examples.",
        ),
        Domain::Academic => (
            "Support Claims With Sources",
            "Cite evidence for each claim and signpost how each section advances the argument.",
        ),
        Domain::Business => (
            "Quantify Outcomes",
            "Back statements with figures, timelines, and owners so readers can act on them.",
        ),
        Domain::Creative => (
            "Show, Don't Tell",
            "Use sensory detail and dialogue to let the reader infer emotion.",
        ),
        Domain::Scientific => (
            "Report Methods Precisely",
            "Give units, sample sizes, and statistical tests so the work can be reproduced.",
        ),
        Domain::Legal => (
            "Use Consistent Defined Terms",
            "Define each term once and use it identically throughout to avoid ambiguity.",
        ),
        Domain::Educational => (
            "Add Practice",
            "Follow each concept with an example or exercise that lets the learner apply it.",
        ),
    }
}

fn tone_template(tone: ContextTone) -> (&'static str, &'static str) {
    match tone {
        ContextTone::Formal => (
            "Keep Formal Prose Readable",
            "Formal register reads best with varied transitions and sentences of moderate length.",
        ),
        ContextTone::Conversational => (
            "Check Conversational Tone",
            "Direct address suits guides and posts; trim filler words if the audience expects formality.",
        ),
        ContextTone::Persuasive => (
            "Balance Persuasion With Evidence",
            "Strong claims land better when each is followed by a reason or a source.",
        ),
    }
}

fn purpose_template(purpose: ContextPurpose) -> (&'static str, &'static str) {
    match purpose {
        ContextPurpose::Inform => (
            "Organize Information",
            "Group related facts under headings and lead each paragraph with its main point.",
        ),
        ContextPurpose::Persuade => (
            "Address Counterarguments",
            "Acknowledge the strongest objection and explain why your position still holds.",
        ),
        ContextPurpose::Instruct => (
            "Number the Steps",
            "Present procedures as numbered steps that start with a verb.",
        ),
    }
}
