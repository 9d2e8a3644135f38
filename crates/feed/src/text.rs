use consumed_shared::MediaItem;
use serde::Serialize;
use strum::{AsRefStr, Display};

use crate::group::{ActivityGroup, GroupKind};

#[derive(Display, AsRefStr, Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ActivityIcon {
    Plus,
    Star,
    Check,
    Share,
}

impl From<&GroupKind> for ActivityIcon {
    fn from(kind: &GroupKind) -> Self {
        match kind {
            GroupKind::ListAdd => ActivityIcon::Plus,
            GroupKind::Rating => ActivityIcon::Star,
            GroupKind::Finished => ActivityIcon::Check,
            GroupKind::Shared(_) => ActivityIcon::Share,
        }
    }
}

impl ActivityGroup {
    pub fn icon(&self) -> ActivityIcon {
        ActivityIcon::from(&self.kind)
    }

    /// Card header. List additions only name the first list; the others
    /// hide behind "see more".
    pub fn header_text(&self) -> String {
        let verb = match &self.kind {
            GroupKind::ListAdd => {
                return match self.first_list_name() {
                    Some(list_name) => format!("added to → {list_name}"),
                    None => "added to a list".to_owned(),
                };
            }
            GroupKind::Rating => "rated",
            GroupKind::Finished => "finished",
            GroupKind::Shared(_) => "shared",
        };

        if self.total_items > 1 {
            format!("{verb} {} items", self.total_items)
        } else {
            verb.to_owned()
        }
    }

    pub fn summary_text(&self) -> String {
        summary_text(&self.items)
    }
}

/// "A", "A and B", "A, B and C", "A, B, C and 2 more".
pub fn summary_text(items: &[MediaItem]) -> String {
    let titles: Vec<&str> = items.iter().map(|item| item.title.as_str()).collect();

    match titles.as_slice() {
        [] => String::new(),
        [only] => (*only).to_owned(),
        [first, second] => format!("{first} and {second}"),
        [first, second, third] => format!("{first}, {second} and {third}"),
        [first, second, third, rest @ ..] => {
            format!("{first}, {second}, {third} and {} more", rest.len())
        }
    }
}
