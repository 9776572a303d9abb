//! Merging per-purpose sub-schedules into one deterministic timeline.

use log::debug;

use actus_core::types::{EventType, ScheduledEvent, Timestamp};

/// Wraps a sequence of schedule dates as events of one type.
#[must_use]
pub fn events_from_dates(event_type: EventType, dates: &[Timestamp]) -> Vec<ScheduledEvent> {
    dates
        .iter()
        .map(|&t| ScheduledEvent::new(event_type, t))
        .collect()
}

/// Sorts events into timeline order: schedule time ascending, same-time
/// ties broken by the event type's epoch offset (lower first). Null
/// placeholder events are removed, never compared as real times.
pub fn sort_events(events: &mut Vec<ScheduledEvent>) {
    events.retain(|e| !e.is_null());
    events.sort();
}

/// Concatenates per-purpose sub-schedules (interest payments, principal
/// redemptions, rate resets, fees, scaling, milestones) into a single
/// ordered timeline.
///
/// The ordering is load-bearing: payoff computation relies on, e.g., an
/// initial exchange being processed before an interest payment falling
/// on the same day. The final sort is sequential and deterministic even
/// if the input sub-schedules were produced concurrently.
#[must_use]
pub fn merge_and_sort<I>(sequences: I) -> Vec<ScheduledEvent>
where
    I: IntoIterator<Item = Vec<ScheduledEvent>>,
{
    let mut events: Vec<ScheduledEvent> = sequences.into_iter().flatten().collect();
    sort_events(&mut events);
    debug!("merged timeline of {} events", events.len());
    events
}
