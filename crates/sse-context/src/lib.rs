//! # sse-context
//!
//! The two context stages between semantics extraction and strategy:
//!
//! - [`EssSnapshot`]: the environment, as fixed constraints and affordances
//!   per domain plus the institutions the text mentions.
//! - [`McmPriors`]: psychological tendencies and two scalar traits
//!   (risk aversion, conformity) per domain.
//!
//! Both are pure functions of the semantics and always succeed.

#![deny(unsafe_code)]

pub mod priors;
pub mod snapshot;

pub use priors::{synthesize_priors, McmPriors};
pub use snapshot::{build_snapshot, EssSnapshot};
