//! The static profile document and its trophy-summary sub-document.

use std::fs;
use std::path::Path;

use serde::de::Error as _;
use serde::ser::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::ProfileError;

const AVATAR_URL: &str =
    "http://static-resource.np.community.playstation.net/avatar_xl/WWS_E/E0012_XL.png";
const PICTURE_URL: &str = "https://image.api.np.km.playstation.net/images/?format=png&w=440&h=440&image=https%3A%2F%2Fkfscdn.api.np.km.playstation.net%2F00000000000008%2F000000000000003.png&sign=blablabla019501";

/// Trophy counts by grade, all zero for a synthesized profile.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EarnedTrophies {
    pub platinum: u32,
    pub gold: u32,
    pub silver: u32,
    pub bronze: u32,
}

/// The trophy-summary sub-document embedded in [`OnlineProfile`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrophySummary {
    pub level: u32,
    pub progress: u32,
    #[serde(rename = "earnedTrophies")]
    pub earned_trophies: EarnedTrophies,
}

impl TrophySummary {
    /// The fixed summary every synthesized profile carries: level 1, no
    /// progress, no trophies.
    pub fn synthesized() -> Self {
        Self {
            level: 1,
            progress: 0,
            earned_trophies: EarnedTrophies::default(),
        }
    }
}

/// The `online.json` document written for offline-activated users.
///
/// Field names and value shapes match the consumer exactly: camelCase keys,
/// the trophy summary serialized as an embedded JSON string, and the
/// verification flag as the string `"true"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OnlineProfile {
    pub avatar_url: String,
    pub first_name: String,
    pub last_name: String,
    pub picture_url: String,
    #[serde(
        serialize_with = "embed_as_json_string",
        deserialize_with = "parse_json_string"
    )]
    pub trophy_summary: TrophySummary,
    pub is_officially_verified: String,
}

impl OnlineProfile {
    /// Produce the fixed document. Deterministic and pure; the content is
    /// not user-configurable.
    pub fn synthesize() -> Self {
        Self {
            avatar_url: AVATAR_URL.to_string(),
            first_name: String::new(),
            last_name: String::new(),
            picture_url: PICTURE_URL.to_string(),
            trophy_summary: TrophySummary::synthesized(),
            is_officially_verified: "true".to_string(),
        }
    }

    /// Serialize the document to its JSON text form.
    pub fn to_json(&self) -> Result<String, ProfileError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Write the document to `path`.
    pub fn write_to(&self, path: &Path) -> Result<(), ProfileError> {
        let json = self.to_json()?;
        fs::write(path, json).map_err(|source| ProfileError::Write {
            path: path.to_path_buf(),
            source,
        })
    }
}

fn embed_as_json_string<S>(summary: &TrophySummary, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let json = serde_json::to_string(summary).map_err(S::Error::custom)?;
    serializer.serialize_str(&json)
}

fn parse_json_string<'de, D>(deserializer: D) -> Result<TrophySummary, D::Error>
where
    D: Deserializer<'de>,
{
    let text = String::deserialize(deserializer)?;
    serde_json::from_str(&text).map_err(D::Error::custom)
}
