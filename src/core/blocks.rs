use crate::models::event::Event;
use crate::models::work_block::WorkBlock;
use chrono::{Duration, NaiveDateTime};

/// Pair a day's events into work blocks and total the time worked.
///
/// The caller's slice is never modified. An odd event count means the last
/// start has no stop yet; a synthetic stop at `now` measures that block up
/// to the present moment without persisting anything. Pairing assumes
/// strict alternation starting with a start event: a malformed sequence
/// (possible after a failed reconciliation) silently pairs as-is rather
/// than erroring.
pub fn daily_blocks(events: &[Event], now: NaiveDateTime) -> (Duration, Vec<WorkBlock>) {
    let mut events = events.to_vec();
    if events.len() % 2 != 0 {
        events.push(Event::new(now, false));
    }

    let mut total = Duration::zero();
    let mut blocks = Vec::with_capacity(events.len() / 2);

    for pair in events.chunks_exact(2) {
        let duration = pair[1].timestamp - pair[0].timestamp;
        total += duration;
        blocks.push(WorkBlock {
            start: pair[0].timestamp,
            stop: pair[1].timestamp,
            duration,
        });
    }

    (total, blocks)
}

/// Total the time worked over a week of per-day event lists.
/// Returns the grand total plus one total per day; the per-day block
/// lists are discarded.
pub fn weekly_blocks(week: &[Vec<Event>], now: NaiveDateTime) -> (Duration, Vec<Duration>) {
    let mut total = Duration::zero();
    let mut daily_totals = Vec::with_capacity(week.len());

    for day in week {
        let (daily_total, _) = daily_blocks(day, now);
        total += daily_total;
        daily_totals.push(daily_total);
    }

    (total, daily_totals)
}
