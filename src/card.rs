use consumed_feed::{ActivityGroup, ActivityIcon, format_relative_date};
use consumed_shared::MediaItem;
use serde::Serialize;
use time::OffsetDateTime;

/// Activity group as handed to the rendering layer, with its derived text.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedCard {
    #[serde(flatten)]
    pub group: ActivityGroup,
    pub header: String,
    pub summary: String,
    pub icon: ActivityIcon,
    pub inline_items: Vec<MediaItem>,
    pub remaining_count: usize,
    pub has_more_lists: bool,
    pub date_label: String,
}

impl FeedCard {
    pub fn new(group: ActivityGroup, now: OffsetDateTime) -> Self {
        Self {
            header: group.header_text(),
            summary: group.summary_text(),
            icon: group.icon(),
            inline_items: group.inline_items().to_vec(),
            remaining_count: group.remaining_count(),
            has_more_lists: group.has_more_lists(),
            date_label: format_relative_date(group.latest_timestamp, now),
            group,
        }
    }
}

pub fn feed_cards(groups: Vec<ActivityGroup>, now: OffsetDateTime) -> Vec<FeedCard> {
    groups
        .into_iter()
        .map(|group| FeedCard::new(group, now))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use consumed_shared::{EventRecord, LIST_ADD};
    use time::macros::datetime;

    #[test]
    fn test_card_carries_derived_text() {
        let events = (0..4).map(|i| EventRecord {
            id: Some(format!("p{i}")),
            user_id: Some("u1".to_string()),
            action_type: Some(LIST_ADD.to_string()),
            media_item: Some(MediaItem::new(format!("Title {i}"))),
            list_name: Some("Want To".to_string()),
            timestamp: Some(format!("2026-03-09T20:0{i}:00Z")),
            ..Default::default()
        });
        let groups = consumed_feed::consolidate(events, consumed_feed::DEFAULT_WINDOW_SECONDS);

        let cards = feed_cards(groups, datetime!(2026-03-10 09:00:00 UTC));

        assert_eq!(cards.len(), 1);
        let card = &cards[0];
        assert_eq!(card.header, "added to → Want To");
        assert_eq!(card.summary, "Title 3, Title 2, Title 1 and 1 more");
        assert_eq!(card.icon, ActivityIcon::Plus);
        assert_eq!(card.inline_items.len(), 3);
        assert_eq!(card.remaining_count, 1);
        assert!(!card.has_more_lists);
        assert_eq!(card.date_label, "Yesterday");

        let json = serde_json::to_value(card).unwrap();
        assert_eq!(json["header"], "added to → Want To");
        assert_eq!(json["icon"], "plus");
        assert_eq!(json["totalItems"], 4);
        assert_eq!(json["remainingCount"], 1);
    }
}
