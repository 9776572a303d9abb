//! Contract terms for the principal-at-maturity contract.

use serde::{Deserialize, Serialize};

use actus_core::calendars::{BusinessDayConvention, Calendar, NoCalendar, WeekendCalendar};
use actus_core::daycounts::DayCountConvention;
use actus_core::types::{Cycle, EndOfMonthConvention, Timestamp};
use actus_math::Fixed;

/// The party's position in the contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ContractRole {
    /// Real position asset: cash inflows are positive.
    #[default]
    RealPositionAsset,
    /// Real position liability: cash inflows are negative.
    RealPositionLiability,
}

impl ContractRole {
    /// The sign applied to notional and payoff amounts.
    #[must_use]
    pub fn sign(self) -> Fixed {
        match self {
            ContractRole::RealPositionAsset => Fixed::one(),
            ContractRole::RealPositionLiability => Fixed::from_integer(-1),
        }
    }
}

/// Which holiday calendar governs business-day shifting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CalendarChoice {
    /// Every calendar day is a business day.
    #[default]
    NoCalendar,
    /// Monday through Friday are business days.
    MondayToFriday,
}

static NO_CALENDAR: NoCalendar = NoCalendar;
static WEEKEND_CALENDAR: WeekendCalendar = WeekendCalendar;

impl CalendarChoice {
    /// Returns the calendar implementation for this choice.
    #[must_use]
    pub fn calendar(self) -> &'static dyn Calendar {
        match self {
            CalendarChoice::NoCalendar => &NO_CALENDAR,
            CalendarChoice::MondayToFriday => &WEEKEND_CALENDAR,
        }
    }
}

/// Immutable terms of a principal-at-maturity contract.
///
/// Optional dates use [`Timestamp::ZERO`] for "not set"; optional cycles
/// use `None`. A cyclic schedule is only generated when its cycle is
/// present and its anchor is set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PamTerms {
    /// The party's position.
    pub contract_role: ContractRole,
    /// The date the terms record is valid as of.
    pub status_date: Timestamp,
    /// Initial exchange of principal (IED).
    pub initial_exchange_date: Timestamp,
    /// Contract maturity (MD).
    pub maturity_date: Timestamp,
    /// Purchase date (PRD), unset when the contract is not purchased.
    pub purchase_date: Timestamp,
    /// Termination date (TD), unset when the contract runs to maturity.
    pub termination_date: Timestamp,

    /// Outstanding notional at status date.
    pub notional_principal: Fixed,
    /// Nominal interest rate per year fraction.
    pub nominal_interest_rate: Fixed,
    /// Interest accrued as of the status date.
    pub accrued_interest: Fixed,
    /// Spread added to an observed market rate at a rate reset.
    pub rate_spread: Fixed,
    /// Known rate applied by the first reset after the status date,
    /// making it a fixed reset (RRF) instead of a market reset (RR).
    pub next_reset_rate: Option<Fixed>,
    /// Fee rate per year fraction of notional.
    pub fee_rate: Fixed,
    /// Price exchanged at the purchase date.
    pub price_at_purchase_date: Fixed,
    /// Price exchanged at the termination date.
    pub price_at_termination_date: Fixed,

    /// Day count convention for accrual.
    pub day_count_convention: DayCountConvention,
    /// Business day shifting convention.
    pub business_day_convention: BusinessDayConvention,
    /// Holiday calendar for business-day shifting.
    pub calendar: CalendarChoice,
    /// End-of-month convention for month-based cycles.
    pub end_of_month_convention: EndOfMonthConvention,

    /// Anchor of the interest payment cycle.
    pub cycle_anchor_of_interest_payment: Timestamp,
    /// Interest payment cycle (IP).
    pub cycle_of_interest_payment: Option<Cycle>,
    /// Interest accrual capitalizes (IPCI) until this date; unset means
    /// interest is always paid out.
    pub capitalization_end_date: Timestamp,

    /// Anchor of the rate reset cycle.
    pub cycle_anchor_of_rate_reset: Timestamp,
    /// Rate reset cycle (RR).
    pub cycle_of_rate_reset: Option<Cycle>,

    /// Anchor of the fee payment cycle.
    pub cycle_anchor_of_fee: Timestamp,
    /// Fee payment cycle (FP).
    pub cycle_of_fee: Option<Cycle>,

    /// Anchor of the scaling index cycle.
    pub cycle_anchor_of_scaling: Timestamp,
    /// Scaling index revision cycle (SC).
    pub cycle_of_scaling: Option<Cycle>,
}

impl PamTerms {
    /// Creates a minimal bullet contract: principal exchanged at
    /// `initial_exchange_date`, repaid with interest at `maturity_date`,
    /// no cyclic schedules.
    #[must_use]
    pub fn bullet(
        initial_exchange_date: Timestamp,
        maturity_date: Timestamp,
        notional_principal: Fixed,
        nominal_interest_rate: Fixed,
    ) -> Self {
        PamTerms {
            contract_role: ContractRole::RealPositionAsset,
            status_date: initial_exchange_date,
            initial_exchange_date,
            maturity_date,
            purchase_date: Timestamp::ZERO,
            termination_date: Timestamp::ZERO,
            notional_principal,
            nominal_interest_rate,
            accrued_interest: Fixed::zero(),
            rate_spread: Fixed::zero(),
            next_reset_rate: None,
            fee_rate: Fixed::zero(),
            price_at_purchase_date: Fixed::zero(),
            price_at_termination_date: Fixed::zero(),
            day_count_convention: DayCountConvention::default(),
            business_day_convention: BusinessDayConvention::default(),
            calendar: CalendarChoice::default(),
            end_of_month_convention: EndOfMonthConvention::default(),
            cycle_anchor_of_interest_payment: Timestamp::ZERO,
            cycle_of_interest_payment: None,
            capitalization_end_date: Timestamp::ZERO,
            cycle_anchor_of_rate_reset: Timestamp::ZERO,
            cycle_of_rate_reset: None,
            cycle_anchor_of_fee: Timestamp::ZERO,
            cycle_of_fee: None,
            cycle_anchor_of_scaling: Timestamp::ZERO,
            cycle_of_scaling: None,
        }
    }

    /// Validates the cross-field consistency of the terms.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ContractError::InvalidTerms`] when required
    /// dates are unset or out of order.
    pub fn validate(&self) -> crate::ContractResult<()> {
        if !self.initial_exchange_date.is_set() {
            return Err(crate::ContractError::invalid_terms(
                "initial exchange date is not set",
            ));
        }
        if !self.maturity_date.is_set() {
            return Err(crate::ContractError::invalid_terms(
                "maturity date is not set",
            ));
        }
        if self.maturity_date <= self.initial_exchange_date {
            return Err(crate::ContractError::invalid_terms(
                "maturity date must be after the initial exchange date",
            ));
        }
        if self.termination_date.is_set() && self.termination_date < self.status_date {
            return Err(crate::ContractError::invalid_terms(
                "termination date precedes the status date",
            ));
        }
        Ok(())
    }
}
