//! Prediction tracking with accuracy votes.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use sse_types::{Horizon, Mode, Outcome, PredictionResult};
use tracing::info;
use uuid::Uuid;

use crate::error::{StoreError, StoreResult};
use crate::file::JsonFile;

/// File name of the tracking store inside a store directory.
pub const TRACKING_FILE: &str = "tracking.json";

/// Id of the sample item inserted into an empty store.
pub const SEED_ITEM_ID: &str = "dummy-tracking-item-001";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrackingStatus {
    Tracking,
    Resolved,
}

/// Verdict on a tracked prediction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Vote {
    Accurate,
    Inaccurate,
}

impl Vote {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Accurate => "accurate",
            Self::Inaccurate => "inaccurate",
        }
    }
}

impl fmt::Display for Vote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Vote {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "accurate" => Ok(Self::Accurate),
            "inaccurate" => Ok(Self::Inaccurate),
            _ => Err(StoreError::InvalidVote(s.to_string())),
        }
    }
}

/// A prediction recorded for later comparison with what happened.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrackingItem {
    pub id: String,
    pub situation: String,
    pub prediction: PredictionResult,
    pub started_at: DateTime<Utc>,
    pub expected_at: Option<DateTime<Utc>>,
    pub actual_at: Option<DateTime<Utc>>,
    pub vote: Option<Vote>,
    /// What actually happened; only kept for inaccurate votes.
    pub actual_outcome: Option<String>,
    pub status: TrackingStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// JSON-file store of tracked predictions.
pub struct TrackingStore {
    file: JsonFile<TrackingItem>,
}

impl TrackingStore {
    /// Store at `dir/tracking.json`.
    pub fn open(dir: impl AsRef<Path>) -> Self {
        Self::at(dir.as_ref().join(TRACKING_FILE))
    }

    /// Store at an explicit file path.
    pub fn at(path: impl AsRef<Path>) -> Self {
        Self {
            file: JsonFile::new(path.as_ref()),
        }
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }

    /// Start tracking a prediction. `started_at` defaults to now.
    pub fn create(
        &self,
        situation: impl Into<String>,
        prediction: PredictionResult,
        started_at: Option<DateTime<Utc>>,
        expected_at: Option<DateTime<Utc>>,
    ) -> StoreResult<TrackingItem> {
        let now = Utc::now();
        let item = TrackingItem {
            id: Uuid::new_v4().to_string(),
            situation: situation.into(),
            prediction,
            started_at: started_at.unwrap_or(now),
            expected_at,
            actual_at: None,
            vote: None,
            actual_outcome: None,
            status: TrackingStatus::Tracking,
            created_at: now,
            updated_at: now,
        };

        self.file.update(|items| {
            items.push(item.clone());
            Some(())
        })?;

        info!(id = %item.id, outcome = %item.prediction.predicted_outcome.id, "Tracking prediction");
        Ok(item)
    }

    pub fn get(&self, id: &str) -> StoreResult<Option<TrackingItem>> {
        Ok(self.file.read()?.into_iter().find(|i| i.id == id))
    }

    /// All items, newest first.
    pub fn list(&self) -> StoreResult<Vec<TrackingItem>> {
        let mut items = self.file.read()?;
        items.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(items)
    }

    /// Record a vote and resolve the item.
    ///
    /// `actual_outcome` is discarded for accurate votes. `actual_at`
    /// defaults to now.
    pub fn vote(
        &self,
        id: &str,
        vote: Vote,
        actual_outcome: Option<String>,
        actual_at: Option<DateTime<Utc>>,
    ) -> StoreResult<TrackingItem> {
        let voted = self.file.update(|items| {
            let item = items.iter_mut().find(|i| i.id == id)?;
            let now = Utc::now();
            item.vote = Some(vote);
            item.actual_outcome = match vote {
                Vote::Inaccurate => actual_outcome,
                Vote::Accurate => None,
            };
            item.actual_at = Some(actual_at.unwrap_or(now));
            item.status = TrackingStatus::Resolved;
            item.updated_at = now;
            Some(item.clone())
        })?;

        let item = voted.ok_or_else(|| StoreError::NotFound(format!("tracking item '{}'", id)))?;
        info!(id = %item.id, vote = %vote, "Resolved tracked prediction");
        Ok(item)
    }

    /// Insert the sample item when the store is empty. Returns whether
    /// anything was inserted.
    pub fn ensure_seed_item(&self) -> StoreResult<bool> {
        let inserted = self.file.update(|items| {
            if !items.is_empty() {
                return None;
            }
            items.push(seed_item(Utc::now()));
            Some(())
        })?;
        Ok(inserted.is_some())
    }
}

fn seed_item(now: DateTime<Utc>) -> TrackingItem {
    let label = "The employee quietly searches for another job while maintaining performance.";
    let prediction = PredictionResult {
        predicted_outcome: Outcome::new(
            "quiet_job_search",
            label,
            0.68,
            &["career preservation", "avoid open conflict"],
        ),
        explanation: format!(
            "{} This outcome is most likely given the constraints and priors in the situation.",
            label
        ),
        horizon: Horizon::Days,
        mode: Mode::B,
        alternatives: Vec::new(),
        belief_shift_summary: String::new(),
        signal_evaluation_summary: String::new(),
        coalition_likelihood: 0.0,
        recursion_depth_used: 1,
    };

    TrackingItem {
        id: SEED_ITEM_ID.to_string(),
        situation: "An employee expects a promotion decision by month-end after repeated high \
                    performance."
            .to_string(),
        prediction,
        started_at: Utc
            .with_ymd_and_hms(2026, 2, 1, 9, 0, 0)
            .single()
            .unwrap_or(now),
        expected_at: Utc.with_ymd_and_hms(2026, 2, 28, 17, 0, 0).single(),
        actual_at: None,
        vote: None,
        actual_outcome: None,
        status: TrackingStatus::Tracking,
        created_at: now,
        updated_at: now,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store() -> (TempDir, TrackingStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = TrackingStore::open(dir.path());
        (dir, store)
    }

    fn prediction() -> PredictionResult {
        seed_item(Utc::now()).prediction
    }

    #[test]
    fn vote_parsing() {
        assert_eq!("Accurate".parse::<Vote>().unwrap(), Vote::Accurate);
        assert_eq!("inaccurate".parse::<Vote>().unwrap(), Vote::Inaccurate);
        assert!(matches!("maybe".parse::<Vote>(), Err(StoreError::InvalidVote(_))));
    }

    #[test]
    fn create_and_get() {
        let (_dir, store) = store();
        let item = store.create("A situation.", prediction(), None, None).unwrap();
        assert_eq!(item.status, TrackingStatus::Tracking);
        assert!(Uuid::parse_str(&item.id).is_ok());
        assert_eq!(item.started_at, item.created_at);

        let fetched = store.get(&item.id).unwrap().unwrap();
        assert_eq!(fetched.situation, "A situation.");
        assert_eq!(fetched.created_at, item.created_at);
        assert_eq!(fetched.prediction.predicted_outcome.id, "quiet_job_search");
        assert!(store.get("missing").unwrap().is_none());
    }

    #[test]
    fn list_newest_first() {
        let (_dir, store) = store();
        let first = store.create("First.", prediction(), None, None).unwrap();
        let second = store.create("Second.", prediction(), None, None).unwrap();
        let ids: Vec<String> = store.list().unwrap().into_iter().map(|i| i.id).collect();
        if second.created_at > first.created_at {
            assert_eq!(ids, vec![second.id, first.id]);
        } else {
            assert_eq!(ids.len(), 2);
        }
    }

    #[test]
    fn accurate_vote_drops_actual_outcome() {
        let (_dir, store) = store();
        let item = store.create("A situation.", prediction(), None, None).unwrap();
        let voted = store
            .vote(&item.id, Vote::Accurate, Some("something else".into()), None)
            .unwrap();
        assert_eq!(voted.vote, Some(Vote::Accurate));
        assert_eq!(voted.status, TrackingStatus::Resolved);
        assert!(voted.actual_outcome.is_none());
        assert!(voted.actual_at.is_some());
    }

    #[test]
    fn inaccurate_vote_keeps_actual_outcome() {
        let (_dir, store) = store();
        let item = store.create("A situation.", prediction(), None, None).unwrap();
        let when = Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap();
        let voted = store
            .vote(&item.id, Vote::Inaccurate, Some("They resigned.".into()), Some(when))
            .unwrap();
        assert_eq!(voted.actual_outcome.as_deref(), Some("They resigned."));
        assert_eq!(voted.actual_at, Some(when));
        let stored = store.get(&item.id).unwrap().unwrap();
        assert_eq!(stored.status, TrackingStatus::Resolved);
        assert_eq!(stored.vote, Some(Vote::Inaccurate));
    }

    #[test]
    fn vote_on_missing_item() {
        let (_dir, store) = store();
        let err = store.vote("nope", Vote::Accurate, None, None).unwrap_err();
        assert!(matches!(err, StoreError::NotFound(_)));
    }

    #[test]
    fn seed_only_into_empty_store() {
        let (_dir, store) = store();
        assert!(store.ensure_seed_item().unwrap());
        assert!(!store.ensure_seed_item().unwrap());

        let items = store.list().unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, SEED_ITEM_ID);
        assert_eq!(items[0].prediction.mode, Mode::B);
        assert_eq!(
            items[0].expected_at.unwrap().to_rfc3339(),
            "2026-02-28T17:00:00+00:00"
        );
    }

    #[test]
    fn seed_skipped_when_items_exist() {
        let (_dir, store) = store();
        store.create("Existing.", prediction(), None, None).unwrap();
        assert!(!store.ensure_seed_item().unwrap());
        assert_eq!(store.list().unwrap().len(), 1);
    }
}
