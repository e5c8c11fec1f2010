//! Profile registry and `@mention` resolution.

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::StoreResult;
use crate::file::JsonFile;

/// File name of the profile store inside a store directory.
pub const PROFILES_FILE: &str = "profiles.json";

static MENTION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"@([A-Za-z0-9_-]+)").expect("valid mention regex"));
static INVALID_TAG_CHARS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9_-]").expect("valid tag charset regex"));
static UNDERSCORE_RUN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"_+").expect("valid underscore run regex"));

/// Normalise a raw tag to lowercase `[a-z0-9_-]`.
///
/// Other characters become `_`, runs of `_` collapse, and leading or
/// trailing `_` are trimmed. An empty result becomes `profile`.
pub fn normalize_tag(raw: &str) -> String {
    let lowered = raw.trim().to_lowercase();
    let replaced = INVALID_TAG_CHARS_RE.replace_all(&lowered, "_");
    let collapsed = UNDERSCORE_RUN_RE.replace_all(&replaced, "_");
    let trimmed = collapsed.trim_matches('_');
    if trimmed.is_empty() {
        "profile".to_string()
    } else {
        trimmed.to_string()
    }
}

/// A named person, group, or organisation that situations can mention.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub tag: String,
    pub name: String,
    pub profile_type: String,
    pub description: String,
    #[serde(default)]
    pub attributes: BTreeMap<String, String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Profile {
    /// One-paragraph context appended to resolved situations.
    pub fn context(&self) -> String {
        let base = format!(
            "{} is a {} profile. {}",
            self.name, self.profile_type, self.description
        );
        if self.attributes.is_empty() {
            return base;
        }
        let attrs: Vec<String> = self
            .attributes
            .iter()
            .map(|(k, v)| format!("{}: {}", k, v))
            .collect();
        format!("{} Attributes: {}.", base, attrs.join("; "))
    }
}

/// Input for [`ProfileStore::create`].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NewProfile {
    pub name: String,
    pub profile_type: String,
    pub description: String,
    #[serde(default)]
    pub attributes: BTreeMap<String, String>,
    /// Tag to use instead of one derived from the name.
    #[serde(default)]
    pub tag: Option<String>,
}

/// Partial update; `None` fields are left unchanged.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub profile_type: Option<String>,
    pub description: Option<String>,
    pub attributes: Option<BTreeMap<String, String>>,
}

/// Situation text after mention resolution.
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedText {
    pub text: String,
    /// Profiles that matched a mention, in first-mention order.
    pub profiles: Vec<Profile>,
}

/// JSON-file profile registry.
pub struct ProfileStore {
    file: JsonFile<Profile>,
}

impl ProfileStore {
    /// Store at `dir/profiles.json`.
    pub fn open(dir: impl AsRef<Path>) -> Self {
        Self::at(dir.as_ref().join(PROFILES_FILE))
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

    /// Create a profile, replacing any existing profile with the same tag.
    pub fn create(&self, input: NewProfile) -> StoreResult<Profile> {
        let tag = normalize_tag(input.tag.as_deref().unwrap_or(&input.name));
        let now = Utc::now();
        let profile = Profile {
            tag,
            name: input.name.trim().to_string(),
            profile_type: input.profile_type,
            description: input.description.trim().to_string(),
            attributes: input.attributes,
            created_at: now,
            updated_at: now,
        };

        self.file.update(|items| {
            items.retain(|p| p.tag != profile.tag);
            items.push(profile.clone());
            Some(())
        })?;

        info!(tag = %profile.tag, "Created profile");
        Ok(profile)
    }

    /// Apply a partial update. Returns `None` when no profile has the tag.
    pub fn update(&self, tag: &str, changes: ProfileUpdate) -> StoreResult<Option<Profile>> {
        let wanted = normalize_tag(tag);
        let updated = self.file.update(|items| {
            let profile = items.iter_mut().find(|p| p.tag == wanted)?;
            if let Some(name) = changes.name {
                profile.name = name.trim().to_string();
            }
            if let Some(profile_type) = changes.profile_type {
                profile.profile_type = profile_type;
            }
            if let Some(description) = changes.description {
                profile.description = description.trim().to_string();
            }
            if let Some(attributes) = changes.attributes {
                profile.attributes = attributes;
            }
            profile.updated_at = Utc::now();
            Some(profile.clone())
        })?;

        if updated.is_some() {
            debug!(tag = %wanted, "Updated profile");
        }
        Ok(updated)
    }

    /// Look up a profile by tag; the tag is normalised first.
    pub fn get(&self, tag: &str) -> StoreResult<Option<Profile>> {
        let wanted = normalize_tag(tag);
        Ok(self.file.read()?.into_iter().find(|p| p.tag == wanted))
    }

    /// All profiles, newest first.
    pub fn list(&self) -> StoreResult<Vec<Profile>> {
        let mut items = self.file.read()?;
        items.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(items)
    }

    /// Replace each `@tag` naming a stored profile with the profile's name
    /// and append the matched profiles' context.
    ///
    /// Mentions of unknown tags are left in place. When nothing resolves
    /// the text is returned unchanged.
    pub fn resolve_mentions(&self, text: &str) -> StoreResult<ResolvedText> {
        if !MENTION_RE.is_match(text) {
            return Ok(ResolvedText {
                text: text.to_string(),
                profiles: Vec::new(),
            });
        }

        let known = self.file.read()?;
        let mut used: Vec<Profile> = Vec::new();
        let replaced = MENTION_RE.replace_all(text, |caps: &Captures<'_>| {
            let tag = normalize_tag(&caps[1]);
            match known.iter().find(|p| p.tag == tag) {
                Some(profile) => {
                    if !used.iter().any(|u| u.tag == profile.tag) {
                        used.push(profile.clone());
                    }
                    profile.name.clone()
                }
                None => caps[0].to_string(),
            }
        });

        if used.is_empty() {
            return Ok(ResolvedText {
                text: text.to_string(),
                profiles: Vec::new(),
            });
        }

        let contexts: Vec<String> = used.iter().map(Profile::context).collect();
        let text = format!("{} Profile context: {}", replaced, contexts.join(" "));
        debug!(profiles = used.len(), "Resolved profile mentions");
        Ok(ResolvedText {
            text,
            profiles: used,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use tempfile::TempDir;

    fn store() -> (TempDir, ProfileStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = ProfileStore::open(dir.path());
        (dir, store)
    }

    fn ana() -> NewProfile {
        NewProfile {
            name: "  Ana Ruiz ".into(),
            profile_type: "person".into(),
            description: "A senior engineer. ".into(),
            attributes: BTreeMap::from([("team".to_string(), "platform".to_string())]),
            tag: Some("ana".into()),
        }
    }

    #[test]
    fn tag_normalization() {
        assert_eq!(normalize_tag("Ana Ruiz"), "ana_ruiz");
        assert_eq!(normalize_tag("  __Big!!Corp__ "), "big_corp");
        assert_eq!(normalize_tag("team-7"), "team-7");
        assert_eq!(normalize_tag("!!!"), "profile");
        assert_eq!(normalize_tag(""), "profile");
    }

    #[test]
    fn create_trims_and_replaces_same_tag() {
        let (_dir, store) = store();
        let first = store.create(ana()).unwrap();
        assert_eq!(first.name, "Ana Ruiz");
        assert_eq!(first.description, "A senior engineer.");

        let mut again = ana();
        again.description = "Now a manager.".into();
        store.create(again).unwrap();

        let all = store.list().unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].description, "Now a manager.");
    }

    #[test]
    fn tag_defaults_to_name() {
        let (_dir, store) = store();
        let p = store
            .create(NewProfile {
                name: "City Council".into(),
                profile_type: "organization".into(),
                description: "Local government.".into(),
                ..NewProfile::default()
            })
            .unwrap();
        assert_eq!(p.tag, "city_council");
        assert!(store.get("City Council").unwrap().is_some());
    }

    #[test]
    fn partial_update() {
        let (_dir, store) = store();
        store.create(ana()).unwrap();
        let updated = store
            .update(
                "ANA",
                ProfileUpdate {
                    description: Some(" Leads the team. ".into()),
                    ..ProfileUpdate::default()
                },
            )
            .unwrap()
            .unwrap();
        assert_eq!(updated.description, "Leads the team.");
        assert_eq!(updated.name, "Ana Ruiz");
        assert!(updated.updated_at >= updated.created_at);

        assert!(store.update("nobody", ProfileUpdate::default()).unwrap().is_none());
    }

    #[test]
    fn context_text() {
        let (_dir, store) = store();
        let p = store.create(ana()).unwrap();
        assert_eq!(
            p.context(),
            "Ana Ruiz is a person profile. A senior engineer. Attributes: team: platform."
        );
    }

    #[test]
    fn resolve_known_mentions() {
        let (_dir, store) = store();
        store.create(ana()).unwrap();
        let resolved = store
            .resolve_mentions("@ana confronts @bob and @Ana again.")
            .unwrap();
        assert_eq!(
            resolved.text,
            "Ana Ruiz confronts @bob and Ana Ruiz again. Profile context: Ana Ruiz is a person \
             profile. A senior engineer. Attributes: team: platform."
        );
        assert_eq!(resolved.profiles.len(), 1);
    }

    #[test]
    fn unresolved_text_unchanged() {
        let (_dir, store) = store();
        let text = "@nobody waits for a decision.";
        let resolved = store.resolve_mentions(text).unwrap();
        assert_eq!(resolved.text, text);
        assert!(resolved.profiles.is_empty());

        let plain = store.resolve_mentions("no mentions here").unwrap();
        assert_eq!(plain.text, "no mentions here");
    }

    #[test]
    fn persisted_as_json_array() {
        let (_dir, store) = store();
        store.create(ana()).unwrap();
        let raw = std::fs::read_to_string(store.path()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value[0]["tag"], "ana");
        assert_eq!(value[0]["attributes"]["team"], "platform");
    }

    proptest! {
        #[test]
        fn normalized_tags_are_clean(raw in ".{0,40}") {
            let tag = normalize_tag(&raw);
            prop_assert!(!tag.is_empty());
            prop_assert!(tag.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' || c == '-'));
            prop_assert!(!tag.starts_with('_') && !tag.ends_with('_'));
            prop_assert!(!tag.contains("__"));
            prop_assert_eq!(normalize_tag(&tag), tag.clone());
        }
    }
}
