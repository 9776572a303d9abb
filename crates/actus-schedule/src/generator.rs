//! Cyclic date generation over a bounding segment.

use log::trace;

use actus_core::types::{Cycle, EndOfMonthConvention, Segment, StubPolicy, Timestamp};

use crate::end_of_month::adjust_end_of_month_convention;

/// Generates the ordered cycle dates of `[cycle_start, cycle_end]` that
/// fall inside `segment`.
///
/// - `cycle = None` means no recurrence: the cycle collapses to the
///   single anchor point `cycle_start` (plus `cycle_end` when
///   `include_cycle_end` is set), each retained only if it lies inside
///   the segment. In particular, a segment strictly inside
///   `[cycle_start, cycle_end]` yields an *empty* result: an unset cycle
///   is never interpolated.
/// - `cycle = Some(..)` generates the grid `cycle_start + i * period`
///   (one multiplied-quantity step per index, see [`Cycle::advance`]),
///   rolled to month-end when the effective end-of-month convention
///   applies, and retains the grid dates inside the segment.
///   `cycle_end` itself is appended when `include_cycle_end` is set and
///   it lies inside the segment. Only actual cycle-grid timestamps are
///   ever emitted: the segment's own boundaries never appear as
///   synthetic events.
/// - When the grid does not meet `cycle_end` exactly, the trailing
///   partial period is the stub. [`StubPolicy::ShortStub`] keeps the
///   last regular grid date (short final period);
///   [`StubPolicy::LongStub`] drops it, merging the partial period into
///   the preceding interval.
///
/// Degenerate inputs (inverted segment, no overlap) yield an empty
/// sequence, never an error, and the result carries no null
/// placeholders.
#[must_use]
pub fn compute_dates_from_cycle_segment(
    cycle_start: Timestamp,
    cycle_end: Timestamp,
    cycle: Option<Cycle>,
    eom_convention: EndOfMonthConvention,
    include_cycle_end: bool,
    segment: Segment,
) -> Vec<Timestamp> {
    let mut dates = Vec::new();

    let Some(cycle) = cycle else {
        if segment.contains(cycle_start) {
            dates.push(cycle_start);
        }
        if include_cycle_end && segment.contains(cycle_end) {
            dates.push(cycle_end);
        }
        return dates;
    };

    let effective_eom = adjust_end_of_month_convention(eom_convention, cycle_start, cycle);

    let mut index: u32 = 0;
    let mut date = cycle_start;
    let mut grid_count: usize = 0;
    let mut last_grid = cycle_start;
    while date < cycle_end {
        last_grid = date;
        if segment.contains(date) {
            dates.push(date);
            grid_count += 1;
        }
        index += 1;
        date = cycle.advance(cycle_start, index);
        if effective_eom == EndOfMonthConvention::EndOfMonth {
            date = date.end_of_month();
        }
    }

    // The grid overshot cycle_end: the trailing partial period is a stub.
    let has_stub = date != cycle_end;

    if include_cycle_end && segment.contains(cycle_end) {
        dates.push(cycle_end);
    }

    // Merging folds the short trailing period into the preceding
    // interval by dropping the last regular grid date. That needs at
    // least two retained grid dates (with the anchor alone there is no
    // preceding full period, and the anchor must survive), and the
    // retained tail must actually be the last grid date: when the
    // segment already clipped it, the merge happens outside the segment
    // and nothing visible is dropped.
    if cycle.stub() == StubPolicy::LongStub && has_stub && grid_count > 1 {
        if dates.last() == Some(&cycle_end) {
            if dates[dates.len() - 2] == last_grid {
                dates.remove(dates.len() - 2);
            }
        } else if dates.last() == Some(&last_grid) {
            dates.pop();
        }
    }

    trace!(
        "cycle {} over [{}, {}] in {}: {} dates",
        cycle,
        cycle_start,
        cycle_end,
        segment,
        dates.len()
    );
    dates
}

#[cfg(test)]
mod tests {
    use super::*;
    use actus_core::types::{Period, PeriodUnit};

    fn ymd(y: i32, m: u32, d: u32) -> Timestamp {
        Timestamp::from_ymd(y, m, d).unwrap()
    }

    fn monthly(stub: StubPolicy) -> Option<Cycle> {
        Some(Cycle::monthly(1, stub).unwrap())
    }

    #[test]
    fn test_unset_cycle_anchor_points_only() {
        let c_start = ymd(2018, 1, 1);
        let c_end = ymd(2018, 10, 1);
        let segment = Segment::new(c_start, c_end);

        let dates = compute_dates_from_cycle_segment(
            c_start,
            c_end,
            None,
            EndOfMonthConvention::SameDay,
            true,
            segment,
        );
        assert_eq!(dates, vec![c_start, c_end]);

        let without_end = compute_dates_from_cycle_segment(
            c_start,
            c_end,
            None,
            EndOfMonthConvention::SameDay,
            false,
            segment,
        );
        assert_eq!(without_end, vec![c_start]);
    }

    #[test]
    fn test_unset_cycle_segment_strictly_inside_is_empty() {
        // cStart=1514764800, cEnd=1538352000, sStart=1525132800,
        // sEnd=1535760000: the segment lies strictly inside the cycle
        // span, so nothing is generated.
        let dates = compute_dates_from_cycle_segment(
            Timestamp::new(1514764800),
            Timestamp::new(1538352000),
            None,
            EndOfMonthConvention::SameDay,
            true,
            Segment::new(Timestamp::new(1525132800), Timestamp::new(1535760000)),
        );
        assert!(dates.is_empty());
    }

    #[test]
    fn test_regular_monthly_grid() {
        let c_start = ymd(2020, 1, 15);
        let c_end = ymd(2020, 7, 15);
        let dates = compute_dates_from_cycle_segment(
            c_start,
            c_end,
            monthly(StubPolicy::ShortStub),
            EndOfMonthConvention::SameDay,
            true,
            Segment::new(c_start, c_end),
        );
        let expected: Vec<_> = (0..=6)
            .map(|i| Period::new(i, PeriodUnit::Month).add_to(c_start))
            .collect();
        assert_eq!(dates, expected);
    }

    #[test]
    fn test_segment_clips_grid() {
        let c_start = ymd(2020, 1, 15);
        let c_end = ymd(2020, 7, 15);
        // Only March through May fall inside the segment.
        let segment = Segment::new(ymd(2020, 3, 1), ymd(2020, 5, 31));
        let dates = compute_dates_from_cycle_segment(
            c_start,
            c_end,
            monthly(StubPolicy::ShortStub),
            EndOfMonthConvention::SameDay,
            true,
            segment,
        );
        assert_eq!(
            dates,
            vec![ymd(2020, 3, 15), ymd(2020, 4, 15), ymd(2020, 5, 15)]
        );
    }

    #[test]
    fn test_short_vs_long_stub_counts() {
        // Anchor 2016-01-15, end 2017-01-01: the grid ends at
        // 2016-12-15 with a 17-day stub to cycle_end.
        let c_start = Timestamp::new(1452816000);
        let c_end = Timestamp::new(1483228800);
        let segment = Segment::new(c_start, c_end);

        let short = compute_dates_from_cycle_segment(
            c_start,
            c_end,
            monthly(StubPolicy::ShortStub),
            EndOfMonthConvention::SameDay,
            false,
            segment,
        );
        assert_eq!(short.len(), 12);
        assert_eq!(short.last(), Some(&ymd(2016, 12, 15)));

        let long = compute_dates_from_cycle_segment(
            c_start,
            c_end,
            monthly(StubPolicy::LongStub),
            EndOfMonthConvention::SameDay,
            false,
            segment,
        );
        assert_eq!(long.len(), 11);
        assert_eq!(long.last(), Some(&ymd(2016, 11, 15)));

        // Identical inputs otherwise: only the penultimate placement
        // differs.
        assert_eq!(&short[..11], &long[..]);
    }

    #[test]
    fn test_long_stub_with_end_time_drops_last_grid_date() {
        let c_start = Timestamp::new(1452816000);
        let c_end = Timestamp::new(1483228800);
        let segment = Segment::new(c_start, c_end);

        let long = compute_dates_from_cycle_segment(
            c_start,
            c_end,
            monthly(StubPolicy::LongStub),
            EndOfMonthConvention::SameDay,
            true,
            segment,
        );
        // 11 regular dates (Dec 15 dropped) plus cycle_end.
        assert_eq!(long.len(), 12);
        assert_eq!(long.last(), Some(&c_end));
        assert_eq!(long[10], ymd(2016, 11, 15));
    }

    #[test]
    fn test_no_stub_when_grid_meets_end() {
        let c_start = ymd(2020, 1, 15);
        let c_end = ymd(2020, 7, 15);
        for stub in [StubPolicy::ShortStub, StubPolicy::LongStub] {
            let dates = compute_dates_from_cycle_segment(
                c_start,
                c_end,
                monthly(stub),
                EndOfMonthConvention::SameDay,
                true,
                Segment::new(c_start, c_end),
            );
            assert_eq!(dates.len(), 7, "stub policy must not matter: {stub:?}");
        }
    }

    #[test]
    fn test_same_day_clamps_february() {
        // Anchored on 2016-04-30 generating monthly to 2017-02-28: the
        // nominal day 30 clamps to February's actual last day.
        let c_start = Timestamp::new(1461974400);
        let c_end = ymd(2017, 2, 28);
        let dates = compute_dates_from_cycle_segment(
            c_start,
            c_end,
            monthly(StubPolicy::ShortStub),
            EndOfMonthConvention::SameDay,
            true,
            Segment::new(c_start, c_end),
        );
        assert_eq!(dates.first(), Some(&ymd(2016, 4, 30)));
        assert_eq!(dates[9], ymd(2017, 1, 30));
        assert_eq!(dates.last(), Some(&ymd(2017, 2, 28)));
        assert_eq!(dates.len(), 11);
    }

    #[test]
    fn test_same_day_clamps_leap_february() {
        let c_start = ymd(2015, 4, 30);
        let c_end = ymd(2016, 2, 29);
        let dates = compute_dates_from_cycle_segment(
            c_start,
            c_end,
            monthly(StubPolicy::ShortStub),
            EndOfMonthConvention::SameDay,
            true,
            Segment::new(c_start, c_end),
        );
        assert_eq!(dates[9], ymd(2016, 1, 30));
        assert_eq!(dates.last(), Some(&ymd(2016, 2, 29)));
    }

    #[test]
    fn test_end_of_month_convention_rolls_to_month_end() {
        let c_start = ymd(2016, 4, 30);
        let c_end = ymd(2016, 10, 31);
        let dates = compute_dates_from_cycle_segment(
            c_start,
            c_end,
            monthly(StubPolicy::ShortStub),
            EndOfMonthConvention::EndOfMonth,
            true,
            Segment::new(c_start, c_end),
        );
        assert_eq!(
            dates,
            vec![
                ymd(2016, 4, 30),
                ymd(2016, 5, 31),
                ymd(2016, 6, 30),
                ymd(2016, 7, 31),
                ymd(2016, 8, 31),
                ymd(2016, 9, 30),
                ymd(2016, 10, 31),
            ]
        );
    }

    #[test]
    fn test_inverted_segment_is_empty() {
        let c_start = ymd(2020, 1, 15);
        let c_end = ymd(2020, 7, 15);
        let dates = compute_dates_from_cycle_segment(
            c_start,
            c_end,
            monthly(StubPolicy::ShortStub),
            EndOfMonthConvention::SameDay,
            true,
            Segment::new(c_end, c_start),
        );
        assert!(dates.is_empty());
    }

    #[test]
    fn test_disjoint_segment_is_empty() {
        let c_start = ymd(2020, 1, 15);
        let c_end = ymd(2020, 7, 15);
        let dates = compute_dates_from_cycle_segment(
            c_start,
            c_end,
            monthly(StubPolicy::ShortStub),
            EndOfMonthConvention::SameDay,
            true,
            Segment::new(ymd(2021, 1, 1), ymd(2021, 12, 31)),
        );
        assert!(dates.is_empty());
    }

    #[test]
    fn test_long_stub_keeps_lone_anchor() {
        // A single partial period: the grid is just the anchor, so
        // there is no preceding full interval to merge the stub into.
        let c_start = ymd(2020, 1, 15);
        let c_end = ymd(2020, 2, 1);
        let dates = compute_dates_from_cycle_segment(
            c_start,
            c_end,
            monthly(StubPolicy::LongStub),
            EndOfMonthConvention::SameDay,
            true,
            Segment::new(c_start, c_end),
        );
        assert_eq!(dates, vec![c_start, c_end]);
    }

    #[test]
    fn test_long_stub_lone_anchor_without_end_time() {
        let c_start = ymd(2020, 1, 15);
        let c_end = ymd(2020, 2, 1);
        let dates = compute_dates_from_cycle_segment(
            c_start,
            c_end,
            monthly(StubPolicy::LongStub),
            EndOfMonthConvention::SameDay,
            false,
            Segment::new(c_start, c_end),
        );
        assert_eq!(dates, vec![c_start]);
    }

    #[test]
    fn test_long_stub_merge_outside_clipped_segment() {
        // Grid: Jan 15 .. Jun 15, stub to Jul 1. The segment ends in
        // April, before the Jun 15 date the merge would drop, so the
        // clipped output is unaffected by the stub policy.
        let c_start = ymd(2020, 1, 15);
        let c_end = ymd(2020, 7, 1);
        let segment = Segment::new(c_start, ymd(2020, 4, 30));
        let long = compute_dates_from_cycle_segment(
            c_start,
            c_end,
            monthly(StubPolicy::LongStub),
            EndOfMonthConvention::SameDay,
            true,
            segment,
        );
        let short = compute_dates_from_cycle_segment(
            c_start,
            c_end,
            monthly(StubPolicy::ShortStub),
            EndOfMonthConvention::SameDay,
            true,
            segment,
        );
        assert_eq!(long, short);
        assert_eq!(
            long,
            vec![ymd(2020, 1, 15), ymd(2020, 2, 15), ymd(2020, 3, 15), ymd(2020, 4, 15)]
        );
    }
}
