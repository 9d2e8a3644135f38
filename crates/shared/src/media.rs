use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

#[derive(
    EnumString,
    Display,
    AsRefStr,
    Clone,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[serde(from = "String", into = "String")]
pub enum MediaType {
    Movie,
    Tv,
    Book,
    Music,
    Podcast,
    Game,
    /// Anything the tracker does not know about yet, kept verbatim.
    #[strum(default)]
    Other(String),
}

impl From<String> for MediaType {
    fn from(value: String) -> Self {
        value
            .parse()
            .unwrap_or_else(|_| MediaType::Other(value.to_owned()))
    }
}

impl From<MediaType> for String {
    fn from(value: MediaType) -> Self {
        value.to_string()
    }
}

/// A logged piece of media as it appears on a feed event.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MediaItem {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creator: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media_type: Option<MediaType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f32>,
}

impl MediaItem {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            creator: None,
            media_type: None,
            external_id: None,
            external_source: None,
            image_url: None,
            rating: None,
        }
    }
}
