//! End-of-month convention adjustment for cycle anchors.

use actus_core::types::{Cycle, EndOfMonthConvention, Timestamp};

/// Resolves the *effective* end-of-month convention for a cycle anchor.
///
/// The requested [`EndOfMonthConvention::EndOfMonth`] policy only takes
/// effect when the anchor date is the last calendar day of its month
/// and the cycle advances in whole months (monthly, quarterly,
/// half-yearly, yearly): a cycle anchored mid-month, or one counted in
/// days or weeks, generates same-day dates regardless of the requested
/// policy.
///
/// Downstream, an effective `EndOfMonth` rolls every generated cycle
/// date to the last day of its month (handling 28/29/30/31-day
/// variability, leap-year February included); `SameDay` leaves the
/// clamped month addition of the cycle arithmetic untouched.
#[must_use]
pub fn adjust_end_of_month_convention(
    requested: EndOfMonthConvention,
    cycle_start: Timestamp,
    cycle: Cycle,
) -> EndOfMonthConvention {
    match requested {
        EndOfMonthConvention::EndOfMonth
            if cycle_start.is_last_day_of_month() && cycle.period().unit().is_month_based() =>
        {
            EndOfMonthConvention::EndOfMonth
        }
        _ => EndOfMonthConvention::SameDay,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actus_core::types::{Period, PeriodUnit, StubPolicy};

    fn monthly() -> Cycle {
        Cycle::monthly(1, StubPolicy::ShortStub).unwrap()
    }

    #[test]
    fn test_eom_applies_on_month_end_anchor() {
        let eom_anchor = Timestamp::from_ymd(2016, 4, 30).unwrap();
        assert_eq!(
            adjust_end_of_month_convention(
                EndOfMonthConvention::EndOfMonth,
                eom_anchor,
                monthly()
            ),
            EndOfMonthConvention::EndOfMonth
        );
    }

    #[test]
    fn test_eom_ignored_mid_month() {
        let mid_month = Timestamp::from_ymd(2016, 4, 15).unwrap();
        assert_eq!(
            adjust_end_of_month_convention(
                EndOfMonthConvention::EndOfMonth,
                mid_month,
                monthly()
            ),
            EndOfMonthConvention::SameDay
        );
    }

    #[test]
    fn test_eom_ignored_for_day_based_cycles() {
        let eom_anchor = Timestamp::from_ymd(2016, 4, 30).unwrap();
        let weekly = Cycle::new(Period::new(1, PeriodUnit::Week), StubPolicy::ShortStub).unwrap();
        assert_eq!(
            adjust_end_of_month_convention(EndOfMonthConvention::EndOfMonth, eom_anchor, weekly),
            EndOfMonthConvention::SameDay
        );
    }

    #[test]
    fn test_same_day_passes_through() {
        let eom_anchor = Timestamp::from_ymd(2016, 4, 30).unwrap();
        assert_eq!(
            adjust_end_of_month_convention(EndOfMonthConvention::SameDay, eom_anchor, monthly()),
            EndOfMonthConvention::SameDay
        );
    }
}
