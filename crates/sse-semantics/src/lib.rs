//! # sse-semantics
//!
//! Turns free situation text into [`SituationSemantics`]: the actors and
//! institutions it mentions, whether it describes a conflict, its topic
//! [`Domain`](sse_types::Domain), and its interaction
//! [`Mode`](sse_types::Mode).
//!
//! Classification is keyword based. Mode and domain are decided by ordered
//! [`RuleTable`](sse_types::RuleTable)s, so precedence is data that can be
//! inspected and tested on its own:
//!
//! ```text
//! mode:   collective markers → C │ interpersonal markers → B │ else A
//! domain: education → workplace → policy → media │ else general
//! ```

#![deny(unsafe_code)]

pub mod extractor;
pub mod lexicon;
pub mod tokenizer;

// ── Re-exports ──────────────────────────────────────────────────────────

pub use extractor::{parse_situation, SemanticsExtractor, SituationSemantics};
pub use tokenizer::tokenize;
