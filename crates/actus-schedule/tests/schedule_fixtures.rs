//! Schedule generation fixtures validated against the ACTUS reference
//! test vectors (raw epoch-second timestamps).

use actus_core::types::{
    Cycle, EndOfMonthConvention, Period, PeriodUnit, Segment, StubPolicy, Timestamp,
};
use actus_schedule::compute_dates_from_cycle_segment;

fn ts(seconds: u64) -> Timestamp {
    Timestamp::new(seconds)
}

fn ymd(y: i32, m: u32, d: u32) -> Timestamp {
    Timestamp::from_ymd(y, m, d).unwrap()
}

fn cycle(quantity: u32, unit: PeriodUnit, stub: StubPolicy) -> Option<Cycle> {
    Some(Cycle::new(Period::new(quantity, unit), stub).unwrap())
}

#[test]
fn unset_cycle_fully_containing_segment_yields_empty() {
    // cStart=2018-01-01, cEnd=2018-10-01; segment 2018-05-01..2018-09-01
    // lies strictly inside: no interpolation for an unset cycle.
    let dates = compute_dates_from_cycle_segment(
        ts(1514764800),
        ts(1538352000),
        None,
        EndOfMonthConvention::SameDay,
        true,
        Segment::new(ts(1525132800), ts(1535760000)),
    );
    assert_eq!(dates, Vec::<Timestamp>::new());
}

#[test]
fn unset_cycle_boundaries_inside_segment_are_kept() {
    let c_start = ts(1514764800);
    let c_end = ts(1538352000);
    let segment = Segment::new(ts(1500000000), ts(1600000000));

    let dates = compute_dates_from_cycle_segment(
        c_start,
        c_end,
        None,
        EndOfMonthConvention::SameDay,
        true,
        segment,
    );
    assert_eq!(dates, vec![c_start, c_end]);
}

#[test]
fn monthly_sd_shortstub() {
    // Anchor 2016-01-15, cycle end 2017-01-01, 1M cycle, short stub.
    let dates = compute_dates_from_cycle_segment(
        ts(1452816000),
        ts(1483228800),
        cycle(1, PeriodUnit::Month, StubPolicy::ShortStub),
        EndOfMonthConvention::SameDay,
        false,
        Segment::new(ts(1452816000), ts(1483228800)),
    );
    assert_eq!(dates.len(), 12);
    for (i, date) in dates.iter().enumerate() {
        assert_eq!(*date, ymd(2016, 1 + i as u32, 15));
    }
}

#[test]
fn monthly_sd_longstub() {
    // Identical inputs, long stub: one fewer date, the 2016-12-15 grid
    // point is merged into the final period.
    let dates = compute_dates_from_cycle_segment(
        ts(1452816000),
        ts(1483228800),
        cycle(1, PeriodUnit::Month, StubPolicy::LongStub),
        EndOfMonthConvention::SameDay,
        false,
        Segment::new(ts(1452816000), ts(1483228800)),
    );
    assert_eq!(dates.len(), 11);
    assert_eq!(*dates.last().unwrap(), ymd(2016, 11, 15));
}

#[test]
fn monthly_sd_shortstub_with_end_time() {
    let dates = compute_dates_from_cycle_segment(
        ts(1452816000),
        ts(1483228800),
        cycle(1, PeriodUnit::Month, StubPolicy::ShortStub),
        EndOfMonthConvention::SameDay,
        true,
        Segment::new(ts(1452816000), ts(1483228800)),
    );
    assert_eq!(dates.len(), 13);
    assert_eq!(*dates.last().unwrap(), ts(1483228800));
}

#[test]
fn quarterly_sd_longstub_with_end_time() {
    // Anchor 2016-01-15, end 2017-01-01, 1Q cycle: grid Jan/Apr/Jul/Oct,
    // long stub folds Oct 15 into the final period.
    let short = compute_dates_from_cycle_segment(
        ts(1452816000),
        ts(1483228800),
        cycle(1, PeriodUnit::Quarter, StubPolicy::ShortStub),
        EndOfMonthConvention::SameDay,
        true,
        Segment::new(ts(1452816000), ts(1483228800)),
    );
    assert_eq!(
        short,
        vec![
            ymd(2016, 1, 15),
            ymd(2016, 4, 15),
            ymd(2016, 7, 15),
            ymd(2016, 10, 15),
            ts(1483228800),
        ]
    );

    let long = compute_dates_from_cycle_segment(
        ts(1452816000),
        ts(1483228800),
        cycle(1, PeriodUnit::Quarter, StubPolicy::LongStub),
        EndOfMonthConvention::SameDay,
        true,
        Segment::new(ts(1452816000), ts(1483228800)),
    );
    assert_eq!(
        long,
        vec![
            ymd(2016, 1, 15),
            ymd(2016, 4, 15),
            ymd(2016, 7, 15),
            ts(1483228800),
        ]
    );
}

#[test]
fn eom_anchor_clamps_february() {
    // Anchor 2016-04-30 (= 1461974400) generating monthly, same-day
    // convention: day 30 exists everywhere except February, which
    // clamps to its actual last day.
    let c_start = ts(1461974400);
    let c_end = ymd(2017, 2, 28);
    let dates = compute_dates_from_cycle_segment(
        c_start,
        c_end,
        cycle(1, PeriodUnit::Month, StubPolicy::ShortStub),
        EndOfMonthConvention::SameDay,
        true,
        Segment::new(c_start, c_end),
    );
    assert_eq!(
        dates,
        vec![
            ymd(2016, 4, 30),
            ymd(2016, 5, 30),
            ymd(2016, 6, 30),
            ymd(2016, 7, 30),
            ymd(2016, 8, 30),
            ymd(2016, 9, 30),
            ymd(2016, 10, 30),
            ymd(2016, 11, 30),
            ymd(2016, 12, 30),
            ymd(2017, 1, 30),
            ymd(2017, 2, 28),
        ]
    );
}

#[test]
fn eom_anchor_clamps_leap_february() {
    let c_start = ymd(2015, 4, 30);
    let c_end = ymd(2016, 2, 29);
    let dates = compute_dates_from_cycle_segment(
        c_start,
        c_end,
        cycle(1, PeriodUnit::Month, StubPolicy::ShortStub),
        EndOfMonthConvention::SameDay,
        true,
        Segment::new(c_start, c_end),
    );
    assert_eq!(dates[9], ymd(2016, 1, 30));
    assert_eq!(*dates.last().unwrap(), ymd(2016, 2, 29));
}

#[test]
fn eom_convention_rolls_every_date_to_month_end() {
    let c_start = ymd(2016, 4, 30);
    let c_end = ymd(2017, 2, 28);
    let dates = compute_dates_from_cycle_segment(
        c_start,
        c_end,
        cycle(1, PeriodUnit::Month, StubPolicy::ShortStub),
        EndOfMonthConvention::EndOfMonth,
        true,
        Segment::new(c_start, c_end),
    );
    assert_eq!(dates[1], ymd(2016, 5, 31));
    assert_eq!(dates[2], ymd(2016, 6, 30));
    assert_eq!(dates[9], ymd(2017, 1, 31));
    assert_eq!(*dates.last().unwrap(), ymd(2017, 2, 28));
    for date in &dates {
        assert!(date.is_last_day_of_month());
    }
}

#[test]
fn weekly_cycle_ignores_eom_convention() {
    let c_start = ymd(2016, 4, 30);
    let c_end = ymd(2016, 6, 30);
    let dates = compute_dates_from_cycle_segment(
        c_start,
        c_end,
        cycle(2, PeriodUnit::Week, StubPolicy::ShortStub),
        EndOfMonthConvention::EndOfMonth,
        false,
        Segment::new(c_start, c_end),
    );
    assert_eq!(dates[0], ymd(2016, 4, 30));
    assert_eq!(dates[1], ymd(2016, 5, 14));
    assert_eq!(dates[2], ymd(2016, 5, 28));
}

#[test]
fn inverted_segment_yields_empty() {
    let dates = compute_dates_from_cycle_segment(
        ts(1452816000),
        ts(1483228800),
        cycle(1, PeriodUnit::Month, StubPolicy::ShortStub),
        EndOfMonthConvention::SameDay,
        true,
        Segment::new(ts(1483228800), ts(1452816000)),
    );
    assert!(dates.is_empty());
}

#[test]
fn result_carries_no_null_placeholders() {
    let dates = compute_dates_from_cycle_segment(
        ts(1452816000),
        ts(1483228800),
        cycle(1, PeriodUnit::Month, StubPolicy::ShortStub),
        EndOfMonthConvention::SameDay,
        true,
        Segment::new(ts(1452816000), ts(1483228800)),
    );
    assert!(dates.iter().all(|d| d.is_set()));
}
