use serde::{Deserialize, Serialize};
use time::{OffsetDateTime, format_description::well_known::Rfc3339};

use crate::MediaItem;

pub const LIST_ADD: &str = "list_add";
pub const RATING: &str = "rating";
pub const FINISHED: &str = "finished";

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum EventError {
    #[error("missing required field `{0}`")]
    MissingField(&'static str),

    #[error("invalid timestamp `{0}`")]
    InvalidTimestamp(String),
}

/// Event as handed over by the event source, before validation.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EventRecord {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub action_type: Option<String>,
    #[serde(default)]
    pub media_item: Option<MediaItem>,
    #[serde(default)]
    pub list_name: Option<String>,
    #[serde(default)]
    pub list_id: Option<String>,
    #[serde(default)]
    pub rating: Option<f32>,
    #[serde(default)]
    pub timestamp: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum ActivityKind {
    ListAdd {
        list_name: String,
        list_id: Option<String>,
    },
    Rating {
        rating: f32,
    },
    Finished,
    /// Action types this version does not know about.
    Shared {
        action_type: String,
    },
}

impl ActivityKind {
    pub fn action_type(&self) -> &str {
        match self {
            ActivityKind::ListAdd { .. } => LIST_ADD,
            ActivityKind::Rating { .. } => RATING,
            ActivityKind::Finished => FINISHED,
            ActivityKind::Shared { action_type } => action_type,
        }
    }
}

/// A validated user action.
#[derive(Clone, Debug, PartialEq)]
pub struct RawEvent {
    pub id: String,
    pub user_id: String,
    pub timestamp: OffsetDateTime,
    pub media_item: MediaItem,
    pub kind: ActivityKind,
}

impl RawEvent {
    pub fn action_type(&self) -> &str {
        self.kind.action_type()
    }
}

impl TryFrom<EventRecord> for RawEvent {
    type Error = EventError;

    fn try_from(record: EventRecord) -> Result<Self, Self::Error> {
        let id = non_empty(record.id).ok_or(EventError::MissingField("id"))?;
        let user_id = non_empty(record.user_id).ok_or(EventError::MissingField("userId"))?;
        let action_type =
            non_empty(record.action_type).ok_or(EventError::MissingField("actionType"))?;
        let media_item = record
            .media_item
            .ok_or(EventError::MissingField("mediaItem"))?;
        let raw_timestamp = record
            .timestamp
            .ok_or(EventError::MissingField("timestamp"))?;
        let timestamp = parse_timestamp(&raw_timestamp)?;

        let kind = match action_type.as_str() {
            LIST_ADD => ActivityKind::ListAdd {
                list_name: non_empty(record.list_name)
                    .ok_or(EventError::MissingField("listName"))?,
                list_id: non_empty(record.list_id),
            },
            RATING => ActivityKind::Rating {
                rating: record
                    .rating
                    .or(media_item.rating)
                    .ok_or(EventError::MissingField("rating"))?,
            },
            FINISHED => ActivityKind::Finished,
            _ => ActivityKind::Shared { action_type },
        };

        Ok(RawEvent {
            id,
            user_id,
            timestamp,
            media_item,
            kind,
        })
    }
}

pub fn parse_timestamp(value: &str) -> Result<OffsetDateTime, EventError> {
    OffsetDateTime::parse(value.trim(), &Rfc3339)
        .map_err(|_| EventError::InvalidTimestamp(value.to_owned()))
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
