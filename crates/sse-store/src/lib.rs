//! # sse-store
//!
//! File-backed collaborators around the prediction core:
//!
//! - [`ProfileStore`]: named profiles addressable by `@tag`, used to
//!   rewrite mentions in a situation before prediction
//! - [`TrackingStore`]: recorded predictions awaiting an accuracy vote
//!
//! Each store keeps one pretty-printed JSON array on disk. Every
//! read-modify-write runs under the store's mutex, so at most one writer
//! touches the file at a time.

#![deny(unsafe_code)]

pub mod error;
mod file;
pub mod profiles;
pub mod tracking;

// ── Re-exports ──────────────────────────────────────────────────────────

pub use error::{StoreError, StoreResult};
pub use profiles::{
    normalize_tag, NewProfile, Profile, ProfileStore, ProfileUpdate, ResolvedText,
};
pub use tracking::{TrackingItem, TrackingStatus, TrackingStore, Vote, SEED_ITEM_ID};
