//! Semantics extraction from situation text.

use serde::{Deserialize, Serialize};
use sse_types::{Domain, Mode, RuleTable};
use tracing::debug;

use crate::lexicon;
use crate::tokenizer::tokenize;

// ── Situation Semantics ─────────────────────────────────────────────────

/// Structured reading of one situation description.
///
/// Produced once per prediction run and never modified afterwards.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SituationSemantics {
    pub raw_text: String,
    /// Actor tags in order of first mention, without duplicates.
    pub actors: Vec<String>,
    /// Institution tags in order of first mention, without duplicates.
    pub institutions: Vec<String>,
    pub conflict: bool,
    pub domain: Domain,
    pub mode: Mode,
}

impl SituationSemantics {
    /// Lowercased raw text, for substring keyword probes.
    pub fn lowered_text(&self) -> String {
        self.raw_text.to_lowercase()
    }
}

// ── Extractor ───────────────────────────────────────────────────────────

/// Keyword-driven semantics extractor.
#[derive(Clone, Debug)]
pub struct SemanticsExtractor {
    mode_rules: RuleTable<Mode>,
    domain_rules: RuleTable<Domain>,
    actor_vocabulary: &'static [&'static str],
    institution_vocabulary: &'static [&'static str],
    conflict_markers: &'static [&'static str],
}

impl Default for SemanticsExtractor {
    fn default() -> Self {
        Self {
            mode_rules: lexicon::mode_rules(),
            domain_rules: lexicon::domain_rules(),
            actor_vocabulary: lexicon::ACTOR_VOCABULARY,
            institution_vocabulary: lexicon::INSTITUTION_VOCABULARY,
            conflict_markers: lexicon::CONFLICT_MARKERS,
        }
    }
}

impl SemanticsExtractor {
    /// Extract semantics from `text`. Never fails.
    pub fn extract(&self, text: &str) -> SituationSemantics {
        let tokens = tokenize(text);

        let actors = collect_unique(&tokens, self.actor_vocabulary);
        let institutions = collect_unique(&tokens, self.institution_vocabulary);
        let conflict = tokens
            .iter()
            .any(|t| self.conflict_markers.contains(&t.as_str()));
        let domain = self.infer_domain(tokens.as_slice());
        let mode = self.infer_mode(tokens.as_slice());

        debug!(
            tokens = tokens.len(),
            actors = actors.len(),
            institutions = institutions.len(),
            conflict,
            %domain,
            %mode,
            "Extracted situation semantics"
        );

        SituationSemantics {
            raw_text: text.to_string(),
            actors,
            institutions,
            conflict,
            domain,
            mode,
        }
    }

    /// Classify the interaction mode of a token sequence.
    pub fn infer_mode<S: AsRef<str>>(&self, tokens: &[S]) -> Mode {
        self.mode_rules.classify(tokens)
    }

    /// Classify the topic domain of a token sequence.
    pub fn infer_domain<S: AsRef<str>>(&self, tokens: &[S]) -> Domain {
        self.domain_rules.classify(tokens)
    }
}

/// Extract semantics with the default vocabularies.
pub fn parse_situation(text: &str) -> SituationSemantics {
    SemanticsExtractor::default().extract(text)
}

/// Tokens found in `vocabulary`, first-mention order, deduplicated.
fn collect_unique(tokens: &[String], vocabulary: &[&str]) -> Vec<String> {
    let mut found: Vec<String> = Vec::new();
    for token in tokens {
        if vocabulary.contains(&token.as_str()) && !found.contains(token) {
            found.push(token.clone());
        }
    }
    found
}
