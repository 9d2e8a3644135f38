use consumed_shared::{ActivityKind, Engagement, FINISHED, LIST_ADD, MediaItem, RATING, RawEvent};
use serde::Serialize;
use time::OffsetDateTime;

/// Items rendered inline on a card before the "+N more" disclosure.
pub const INLINE_ITEM_LIMIT: usize = 3;

/// Action type shared by every event of a group.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(into = "String")]
pub enum GroupKind {
    ListAdd,
    Rating,
    Finished,
    Shared(String),
}

impl GroupKind {
    pub fn as_str(&self) -> &str {
        match self {
            GroupKind::ListAdd => LIST_ADD,
            GroupKind::Rating => RATING,
            GroupKind::Finished => FINISHED,
            GroupKind::Shared(action_type) => action_type,
        }
    }
}

impl From<&ActivityKind> for GroupKind {
    fn from(kind: &ActivityKind) -> Self {
        match kind {
            ActivityKind::ListAdd { .. } => GroupKind::ListAdd,
            ActivityKind::Rating { .. } => GroupKind::Rating,
            ActivityKind::Finished => GroupKind::Finished,
            ActivityKind::Shared { action_type } => GroupKind::Shared(action_type.to_owned()),
        }
    }
}

impl From<GroupKind> for String {
    fn from(kind: GroupKind) -> Self {
        kind.as_str().to_owned()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListGroup {
    pub list_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub list_id: Option<String>,
    pub items: Vec<MediaItem>,
}

/// One carousel page of a group.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Slide {
    #[serde(rename = "type")]
    pub kind: GroupKind,
    pub items: Vec<MediaItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub list_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub list_id: Option<String>,
}

impl Slide {
    fn new(kind: GroupKind) -> Self {
        Self {
            kind,
            items: Vec::new(),
            rating: None,
            list_name: None,
            list_id: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityGroup {
    pub user_id: String,
    #[serde(rename = "actionType")]
    pub kind: GroupKind,
    pub items: Vec<MediaItem>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub lists: Vec<ListGroup>,
    pub slides: Vec<Slide>,
    pub total_items: usize,
    pub total_lists: usize,
    #[serde(flatten)]
    pub engagement: Engagement,
    pub original_post_ids: Vec<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub latest_timestamp: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub earliest_timestamp: OffsetDateTime,
}

impl ActivityGroup {
    /// Post that stands in for the whole group on like, comment and delete.
    pub fn representative_post_id(&self) -> Option<&str> {
        self.original_post_ids.first().map(String::as_str)
    }

    pub fn inline_items(&self) -> &[MediaItem] {
        &self.items[..self.items.len().min(INLINE_ITEM_LIMIT)]
    }

    pub fn remaining_count(&self) -> usize {
        self.total_items.saturating_sub(INLINE_ITEM_LIMIT)
    }

    pub fn has_more_lists(&self) -> bool {
        self.total_lists > 1
    }

    pub fn first_list_name(&self) -> Option<&str> {
        self.lists.first().map(|list| list.list_name.as_str())
    }
}

/// Accumulates the events of one group while the consolidator walks the feed.
pub(crate) struct GroupBuilder {
    user_id: String,
    kind: GroupKind,
    anchor: OffsetDateTime,
    earliest: OffsetDateTime,
    items: Vec<MediaItem>,
    lists: Vec<ListGroup>,
    slides: Vec<Slide>,
    post_ids: Vec<String>,
}

impl GroupBuilder {
    pub(crate) fn new(event: RawEvent) -> Self {
        let mut builder = Self {
            user_id: event.user_id.to_owned(),
            kind: GroupKind::from(&event.kind),
            anchor: event.timestamp,
            earliest: event.timestamp,
            items: Vec::new(),
            lists: Vec::new(),
            slides: Vec::new(),
            post_ids: Vec::new(),
        };
        builder.push(event);
        builder
    }

    /// Same user, same action type, and no further than `window` from the
    /// earliest event already in the group.
    pub(crate) fn accepts(&self, event: &RawEvent, window: time::Duration) -> bool {
        self.user_id == event.user_id
            && self.kind.as_str() == event.action_type()
            && (self.earliest - event.timestamp).abs() <= window
    }

    pub(crate) fn push(&mut self, event: RawEvent) {
        let RawEvent {
            id,
            timestamp,
            mut media_item,
            kind,
            ..
        } = event;

        if timestamp < self.earliest {
            self.earliest = timestamp;
        }

        match kind {
            ActivityKind::ListAdd { list_name, list_id } => {
                match self.lists.iter_mut().find(|l| l.list_name == list_name) {
                    Some(list) => list.items.push(media_item.clone()),
                    None => self.lists.push(ListGroup {
                        list_name: list_name.to_owned(),
                        list_id: list_id.to_owned(),
                        items: vec![media_item.clone()],
                    }),
                }

                match self
                    .slides
                    .iter_mut()
                    .find(|s| s.list_name.as_deref() == Some(list_name.as_str()))
                {
                    Some(slide) => slide.items.push(media_item.clone()),
                    None => {
                        let mut slide = Slide::new(GroupKind::ListAdd);
                        slide.list_name = Some(list_name);
                        slide.list_id = list_id;
                        slide.items.push(media_item.clone());
                        self.slides.push(slide);
                    }
                }
            }
            ActivityKind::Rating { rating } => {
                media_item.rating = Some(rating);

                match self.slides.iter_mut().find(|s| s.rating == Some(rating)) {
                    Some(slide) => slide.items.push(media_item.clone()),
                    None => {
                        let mut slide = Slide::new(GroupKind::Rating);
                        slide.rating = Some(rating);
                        slide.items.push(media_item.clone());
                        self.slides.push(slide);
                    }
                }
            }
            ActivityKind::Finished | ActivityKind::Shared { .. } => match self.slides.first_mut() {
                Some(slide) => slide.items.push(media_item.clone()),
                None => {
                    let mut slide = Slide::new(self.kind.clone());
                    slide.items.push(media_item.clone());
                    self.slides.push(slide);
                }
            },
        }

        self.items.push(media_item);
        self.post_ids.push(id);
    }

    pub(crate) fn build(self) -> ActivityGroup {
        let total_items = self.items.len();
        let total_lists = self.lists.len();

        ActivityGroup {
            user_id: self.user_id,
            kind: self.kind,
            items: self.items,
            lists: self.lists,
            slides: self.slides,
            total_items,
            total_lists,
            engagement: Engagement::default(),
            original_post_ids: self.post_ids,
            latest_timestamp: self.anchor,
            earliest_timestamp: self.earliest,
        }
    }
}
