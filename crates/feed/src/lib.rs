pub mod consolidation;
pub mod date;
pub mod group;
pub mod text;

pub use consolidation::{
    ActivityConsolidator, DEFAULT_WINDOW_SECONDS, consolidate, consolidate_with,
};
pub use date::{format_relative_date, format_relative_timestamp};
pub use group::{ActivityGroup, GroupKind, INLINE_ITEM_LIMIT, ListGroup, Slide};
pub use text::{ActivityIcon, summary_text};
