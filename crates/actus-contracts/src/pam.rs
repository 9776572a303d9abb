//! Schedule assembly and state transitions for the
//! principal-at-maturity contract.
//!
//! `schedule` derives the event timeline from the terms; the state
//! functions then replay that timeline. Events carry business-day
//! shifted times, so downstream consumers never re-shift.

use log::debug;

use actus_core::calendars::shift_event_time;
use actus_core::types::{Cycle, EventType, ScheduledEvent, Segment, Timestamp};
use actus_math::Fixed;
use actus_schedule::{compute_dates_from_cycle_segment, events_from_dates, merge_and_sort};
use serde::{Deserialize, Serialize};

use crate::error::{ContractError, ContractResult};
use crate::terms::PamTerms;

/// The evolving state of a principal-at-maturity contract.
///
/// All monetary amounts carry the contract-role sign: an asset's
/// notional is positive, a liability's negative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PamState {
    /// Time the state is valid as of (time of the last applied event).
    pub status_date: Timestamp,
    /// Outstanding signed notional.
    pub notional_principal: Fixed,
    /// Current nominal interest rate.
    pub nominal_interest_rate: Fixed,
    /// Signed interest accrued since the last interest event.
    pub accrued_interest: Fixed,
    /// Signed fees accrued since the last fee event.
    pub fee_accrued: Fixed,
    /// Multiplier applied to the notional by scaling-index revisions.
    pub notional_scaling_multiplier: Fixed,
}

/// Builds the full event timeline of the contract inside `segment`.
///
/// Assembles the non-cyclic milestones (initial exchange, maturity,
/// purchase, termination) and the cyclic sub-schedules (interest,
/// capitalization, rate resets, fees, scaling) via the cycle generator,
/// shifts every event time by the terms' business-day convention, and
/// merges everything into one deterministically ordered timeline. When
/// a termination date is set, the timeline is cut there.
///
/// # Errors
///
/// Returns [`ContractError::InvalidTerms`] when the terms record is
/// inconsistent. Degenerate segments yield an empty timeline, not an
/// error.
pub fn schedule(terms: &PamTerms, segment: Segment) -> ContractResult<Vec<ScheduledEvent>> {
    terms.validate()?;
    let calendar = terms.calendar.calendar();

    let mut sequences: Vec<Vec<ScheduledEvent>> = Vec::new();

    let mut milestones = Vec::new();
    for (event_type, t) in [
        (EventType::InitialExchange, terms.initial_exchange_date),
        (EventType::Maturity, terms.maturity_date),
        (EventType::Purchase, terms.purchase_date),
        (EventType::Termination, terms.termination_date),
    ] {
        if t.is_set() && segment.contains(t) {
            milestones.push(ScheduledEvent::new(event_type, t));
        }
    }
    sequences.push(milestones);

    // Interest: dates up to the capitalization end accrue into the
    // notional (IPCI), later ones pay out (IP).
    let ip_dates = cyclic_dates(
        terms.cycle_anchor_of_interest_payment,
        terms.cycle_of_interest_payment,
        terms,
        segment,
        true,
    );
    if terms.capitalization_end_date.is_set() {
        let (capitalizing, paying): (Vec<Timestamp>, Vec<Timestamp>) = ip_dates
            .into_iter()
            .partition(|t| *t <= terms.capitalization_end_date);
        sequences.push(events_from_dates(
            EventType::InterestCapitalization,
            &capitalizing,
        ));
        sequences.push(events_from_dates(EventType::InterestPayment, &paying));
    } else {
        sequences.push(events_from_dates(EventType::InterestPayment, &ip_dates));
    }

    // Rate resets: the first reset after the status date is fixed (RRF)
    // when the terms carry a known next rate.
    let rr_dates = cyclic_dates(
        terms.cycle_anchor_of_rate_reset,
        terms.cycle_of_rate_reset,
        terms,
        segment,
        false,
    );
    let mut rr_events = Vec::with_capacity(rr_dates.len());
    let mut fixed_pending = terms.next_reset_rate.is_some();
    for t in rr_dates {
        if fixed_pending && t > terms.status_date {
            rr_events.push(ScheduledEvent::new(EventType::RateResetFixed, t));
            fixed_pending = false;
        } else {
            rr_events.push(ScheduledEvent::new(EventType::RateResetVariable, t));
        }
    }
    sequences.push(rr_events);

    if !terms.fee_rate.is_zero() {
        let fp_dates = cyclic_dates(
            terms.cycle_anchor_of_fee,
            terms.cycle_of_fee,
            terms,
            segment,
            true,
        );
        sequences.push(events_from_dates(EventType::FeePayment, &fp_dates));
    }

    let sc_dates = cyclic_dates(
        terms.cycle_anchor_of_scaling,
        terms.cycle_of_scaling,
        terms,
        segment,
        false,
    );
    sequences.push(events_from_dates(EventType::ScalingIndex, &sc_dates));

    let mut events: Vec<ScheduledEvent> = merge_and_sort(sequences)
        .into_iter()
        .map(|e| {
            ScheduledEvent::new(
                e.event_type,
                shift_event_time(e.schedule_time, terms.business_day_convention, calendar),
            )
        })
        .collect();
    // Shifting can reorder events that started on different days.
    events.sort_unstable();

    if terms.termination_date.is_set() {
        let cutoff = shift_event_time(
            terms.termination_date,
            terms.business_day_convention,
            calendar,
        );
        events.retain(|e| e.schedule_time <= cutoff);
    }

    debug!("{} events scheduled in {}", events.len(), segment);
    Ok(events)
}

/// Generates one cyclic sub-schedule, anchored at `anchor` (falling back
/// to the initial exchange date) and running to maturity.
fn cyclic_dates(
    anchor: Timestamp,
    cycle: Option<Cycle>,
    terms: &PamTerms,
    segment: Segment,
    include_maturity: bool,
) -> Vec<Timestamp> {
    if cycle.is_none() {
        return Vec::new();
    }
    let anchor = if anchor.is_set() {
        anchor
    } else {
        terms.initial_exchange_date
    };
    compute_dates_from_cycle_segment(
        anchor,
        terms.maturity_date,
        cycle,
        terms.end_of_month_convention,
        include_maturity,
        segment,
    )
}

/// Builds the contract state as of the terms' status date.
///
/// Before the initial exchange the state is empty; afterwards it carries
/// the role-signed notional and accrued interest from the terms.
pub fn initialize_state(terms: &PamTerms) -> ContractResult<PamState> {
    terms.validate()?;
    let role = terms.contract_role.sign();

    if terms.status_date < terms.initial_exchange_date {
        return Ok(PamState {
            status_date: terms.status_date,
            notional_principal: Fixed::zero(),
            nominal_interest_rate: Fixed::zero(),
            accrued_interest: Fixed::zero(),
            fee_accrued: Fixed::zero(),
            notional_scaling_multiplier: Fixed::one(),
        });
    }

    Ok(PamState {
        status_date: terms.status_date,
        notional_principal: role.multiply(&terms.notional_principal)?,
        nominal_interest_rate: terms.nominal_interest_rate.clone(),
        accrued_interest: role.multiply(&terms.accrued_interest)?,
        fee_accrued: Fixed::zero(),
        notional_scaling_multiplier: Fixed::one(),
    })
}

/// Applies one event to the state, returning the successor state and
/// the event's payoff amount (positive = inflow for the role).
///
/// `observed_rate` feeds market-dependent events: the new market rate at
/// a variable rate reset, the index ratio at a scaling revision. Events
/// that need an observation fail with
/// [`ContractError::MissingObservation`] when it is absent.
///
/// # Errors
///
/// Arithmetic failures (overflow, granularity loss, division by zero)
/// propagate; the state is never silently clamped.
pub fn transition(
    state: &PamState,
    event: ScheduledEvent,
    terms: &PamTerms,
    observed_rate: Option<&Fixed>,
) -> ContractResult<(PamState, Fixed)> {
    let mut next = state.clone();
    let t = event.schedule_time;
    let role = terms.contract_role.sign();

    let payoff = match event.event_type {
        EventType::InitialExchange => {
            next.status_date = t;
            next.notional_principal = role.multiply(&terms.notional_principal)?;
            next.nominal_interest_rate = terms.nominal_interest_rate.clone();
            next.accrued_interest = role.multiply(&terms.accrued_interest)?;
            // Principal flows out at inception.
            next.notional_principal.checked_neg()?
        }
        EventType::InterestPayment => {
            accrue(&mut next, t, terms)?;
            let payoff = next.accrued_interest.clone();
            next.accrued_interest = Fixed::zero();
            payoff
        }
        EventType::InterestCapitalization => {
            accrue(&mut next, t, terms)?;
            next.notional_principal = next
                .notional_principal
                .checked_add(&next.accrued_interest)?;
            next.accrued_interest = Fixed::zero();
            Fixed::zero()
        }
        EventType::FeePayment => {
            accrue(&mut next, t, terms)?;
            let payoff = next.fee_accrued.clone();
            next.fee_accrued = Fixed::zero();
            payoff
        }
        EventType::RateResetVariable => {
            accrue(&mut next, t, terms)?;
            let observed = observed_rate.ok_or(ContractError::MissingObservation {
                event_type: event.event_type,
            })?;
            next.nominal_interest_rate = observed.checked_add(&terms.rate_spread)?;
            Fixed::zero()
        }
        EventType::RateResetFixed => {
            accrue(&mut next, t, terms)?;
            next.nominal_interest_rate = terms
                .next_reset_rate
                .clone()
                .ok_or_else(|| ContractError::invalid_terms("next reset rate is not set"))?;
            Fixed::zero()
        }
        EventType::ScalingIndex => {
            accrue(&mut next, t, terms)?;
            let observed = observed_rate.ok_or(ContractError::MissingObservation {
                event_type: event.event_type,
            })?;
            next.notional_scaling_multiplier = observed.clone();
            Fixed::zero()
        }
        EventType::Purchase => {
            accrue(&mut next, t, terms)?;
            // The buyer pays price plus accrued.
            role.multiply(&terms.price_at_purchase_date)?
                .checked_add(&next.accrued_interest)?
                .checked_neg()?
        }
        EventType::Termination => {
            accrue(&mut next, t, terms)?;
            let payoff = role
                .multiply(&terms.price_at_termination_date)?
                .checked_add(&next.accrued_interest)?;
            next.notional_principal = Fixed::zero();
            next.nominal_interest_rate = Fixed::zero();
            next.accrued_interest = Fixed::zero();
            next.fee_accrued = Fixed::zero();
            payoff
        }
        EventType::Maturity => {
            accrue(&mut next, t, terms)?;
            let redemption = next
                .notional_principal
                .multiply(&next.notional_scaling_multiplier)?;
            let payoff = redemption
                .checked_add(&next.accrued_interest)?
                .checked_add(&next.fee_accrued)?;
            next.notional_principal = Fixed::zero();
            next.nominal_interest_rate = Fixed::zero();
            next.accrued_interest = Fixed::zero();
            next.fee_accrued = Fixed::zero();
            payoff
        }
        EventType::Monitoring => {
            accrue(&mut next, t, terms)?;
            Fixed::zero()
        }
        other => {
            return Err(ContractError::UnsupportedEvent { event_type: other });
        }
    };

    Ok((next, payoff))
}

/// Rolls interest and fee accrual forward to `t` and advances the
/// state's status date.
fn accrue(state: &mut PamState, t: Timestamp, terms: &PamTerms) -> ContractResult<()> {
    if t <= state.status_date {
        state.status_date = t;
        return Ok(());
    }
    let yf = terms
        .day_count_convention
        .year_fraction(state.status_date, t, terms.maturity_date);

    let interest = yf
        .multiply(&state.notional_principal)?
        .multiply(&state.nominal_interest_rate)?;
    state.accrued_interest = state.accrued_interest.checked_add(&interest)?;

    if !terms.fee_rate.is_zero() {
        let fee = yf
            .multiply(&state.notional_principal)?
            .multiply(&terms.fee_rate)?;
        state.fee_accrued = state.fee_accrued.checked_add(&fee)?;
    }

    state.status_date = t;
    Ok(())
}
