use consumed_shared::{EngagementLookup, EventRecord, NoEngagement, RawEvent};
use time::Duration;

use crate::group::{ActivityGroup, GroupBuilder};

/// Default grouping window for every action type: a day.
pub const DEFAULT_WINDOW_SECONDS: u64 = 24 * 60 * 60;

/// Activity Consolidator
///
/// Stateless service that rolls raw feed events up into activity cards, one
/// per user, action type and time window, so that an evening spent adding ten
/// films to a list renders as one card instead of ten.
///
/// Malformed events are logged and skipped; one bad row never fails the feed.
#[derive(Clone, Copy, Debug)]
pub struct ActivityConsolidator {
    window: Duration,
}

impl Default for ActivityConsolidator {
    fn default() -> Self {
        Self::from_seconds(DEFAULT_WINDOW_SECONDS)
    }
}

impl ActivityConsolidator {
    pub fn new(window: Duration) -> Self {
        Self { window }
    }

    pub fn from_seconds(window_seconds: u64) -> Self {
        Self::new(Duration::seconds(
            i64::try_from(window_seconds).unwrap_or(i64::MAX),
        ))
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    /// Validate and consolidate wire records, without engagement counters.
    pub fn consolidate<I>(&self, records: I) -> Vec<ActivityGroup>
    where
        I: IntoIterator<Item = EventRecord>,
    {
        self.consolidate_with(records, &NoEngagement)
    }

    /// Validate and consolidate wire records, taking each group's engagement
    /// from its first underlying post.
    pub fn consolidate_with<I, L>(&self, records: I, lookup: &L) -> Vec<ActivityGroup>
    where
        I: IntoIterator<Item = EventRecord>,
        L: EngagementLookup + ?Sized,
    {
        let events = records
            .into_iter()
            .filter_map(|record| {
                let id = record.id.to_owned();
                match RawEvent::try_from(record) {
                    Ok(event) => Some(event),
                    Err(err) => {
                        tracing::warn!(event.id = ?id, error = %err, "skipping malformed feed event");
                        None
                    }
                }
            })
            .collect();

        self.consolidate_events(events, lookup)
    }

    /// Consolidate already validated events.
    ///
    /// Groups come back most recent first. Within a group, items keep the
    /// newest-first order of their source events.
    pub fn consolidate_events<L>(&self, mut events: Vec<RawEvent>, lookup: &L) -> Vec<ActivityGroup>
    where
        L: EngagementLookup + ?Sized,
    {
        if events.is_empty() {
            return Vec::new();
        }

        let total_events = events.len();

        // Stable sort: user, action type, newest first
        events.sort_by(|a, b| {
            a.user_id
                .cmp(&b.user_id)
                .then_with(|| a.action_type().cmp(b.action_type()))
                .then_with(|| b.timestamp.cmp(&a.timestamp))
        });

        let mut builders: Vec<GroupBuilder> = Vec::new();

        for event in events {
            match builders.last_mut() {
                Some(builder) if builder.accepts(&event, self.window) => builder.push(event),
                _ => builders.push(GroupBuilder::new(event)),
            }
        }

        let mut groups: Vec<ActivityGroup> = builders
            .into_iter()
            .map(|builder| {
                let mut group = builder.build();
                let engagement = group
                    .representative_post_id()
                    .and_then(|id| lookup.engagement(id));
                if let Some(engagement) = engagement {
                    group.engagement = engagement;
                }
                group
            })
            .collect();

        groups.sort_by(|a, b| b.latest_timestamp.cmp(&a.latest_timestamp));

        tracing::debug!(
            events = total_events,
            groups = groups.len(),
            window_seconds = self.window.whole_seconds(),
            "consolidated feed events"
        );

        groups
    }
}

pub fn consolidate<I>(records: I, window_seconds: u64) -> Vec<ActivityGroup>
where
    I: IntoIterator<Item = EventRecord>,
{
    ActivityConsolidator::from_seconds(window_seconds).consolidate(records)
}

pub fn consolidate_with<I, L>(records: I, window_seconds: u64, lookup: &L) -> Vec<ActivityGroup>
where
    I: IntoIterator<Item = EventRecord>,
    L: EngagementLookup + ?Sized,
{
    ActivityConsolidator::from_seconds(window_seconds).consolidate_with(records, lookup)
}
