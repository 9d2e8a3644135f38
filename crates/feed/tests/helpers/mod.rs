#![allow(dead_code)]

use consumed_shared::{EventRecord, FINISHED, LIST_ADD, MediaItem, RATING};

pub fn list_add(id: &str, user_id: &str, list_name: &str, title: &str, timestamp: &str) -> EventRecord {
    EventRecord {
        list_name: Some(list_name.to_owned()),
        ..record(id, user_id, LIST_ADD, title, timestamp)
    }
}

pub fn rating(id: &str, user_id: &str, value: f32, title: &str, timestamp: &str) -> EventRecord {
    EventRecord {
        rating: Some(value),
        ..record(id, user_id, RATING, title, timestamp)
    }
}

pub fn finished(id: &str, user_id: &str, title: &str, timestamp: &str) -> EventRecord {
    record(id, user_id, FINISHED, title, timestamp)
}

pub fn record(id: &str, user_id: &str, action_type: &str, title: &str, timestamp: &str) -> EventRecord {
    EventRecord {
        id: Some(id.to_owned()),
        user_id: Some(user_id.to_owned()),
        action_type: Some(action_type.to_owned()),
        media_item: Some(MediaItem::new(title)),
        list_name: None,
        list_id: None,
        rating: None,
        timestamp: Some(timestamp.to_owned()),
    }
}

pub fn titles(items: &[MediaItem]) -> Vec<&str> {
    items.iter().map(|item| item.title.as_str()).collect()
}
