use consumed_shared::{EventError, parse_timestamp};
use time::{OffsetDateTime, format_description::BorrowedFormatItem, macros::format_description};

const SAME_YEAR: &[BorrowedFormatItem<'static>] =
    format_description!("[month repr:short] [day padding:none]");
const OTHER_YEAR: &[BorrowedFormatItem<'static>] =
    format_description!("[month repr:short] [day padding:none], [year]");

/// Calendar-day label for a feed card, evaluated in `now`'s offset.
pub fn format_relative_date(timestamp: OffsetDateTime, now: OffsetDateTime) -> String {
    let date = timestamp.to_offset(now.offset()).date();
    let today = now.date();
    let days = (today - date).whole_days();

    match days {
        d if d <= 0 => "Today".to_owned(),
        1 => "Yesterday".to_owned(),
        d if d < 7 => format!("{d} days ago"),
        _ => {
            let format = if date.year() == today.year() {
                SAME_YEAR
            } else {
                OTHER_YEAR
            };
            date.format(format).unwrap_or_else(|_| date.to_string())
        }
    }
}

pub fn format_relative_timestamp(value: &str, now: OffsetDateTime) -> Result<String, EventError> {
    parse_timestamp(value).map(|timestamp| format_relative_date(timestamp, now))
}
