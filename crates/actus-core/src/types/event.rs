//! Contract event vocabulary, encoding, and deterministic ordering.
//!
//! Every ACTUS event is a pair of an [`EventType`] and a schedule time.
//! The pair packs into a single sortable [`EncodedEvent`] value (type
//! tag in the most-significant byte, time in the low 64 bits), and two
//! events on the same calendar instant are ordered by the event type's
//! fixed epoch offset: lower offset is processed first. Payoff
//! computation depends on this ordering (e.g. principal redemption
//! before same-day interest accrual).

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

use super::Timestamp;
use crate::error::{ActusError, ActusResult};

/// The ACTUS contract event types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventType {
    /// Monitoring / analysis event (AD), schedulable at any time.
    Monitoring,
    /// Initial exchange of principal (IED).
    InitialExchange,
    /// Principal redemption (PR).
    PrincipalRedemption,
    /// Interest payment (IP).
    InterestPayment,
    /// Interest capitalization (IPCI).
    InterestCapitalization,
    /// Fee payment (FP).
    FeePayment,
    /// Dividend payment (DV).
    Dividend,
    /// Penalty payment (PY).
    Penalty,
    /// Margin call (MR).
    MarginCall,
    /// Rate reset with known (fixed) rate (RRF).
    RateResetFixed,
    /// Rate reset with market-observed rate (RR).
    RateResetVariable,
    /// Scaling index revision (SC).
    ScalingIndex,
    /// Interest calculation base fixing (IPCB).
    InterestCalculationBase,
    /// Principal drawing (PD).
    PrincipalDrawing,
    /// Principal prepayment (PP).
    PrincipalPrepayment,
    /// Purchase of the contract (PRD).
    Purchase,
    /// Termination of the contract (TD).
    Termination,
    /// Settlement of an exercised claim (STD).
    Settlement,
    /// Maturity of the contract (MD).
    Maturity,
    /// Exercise of an optionality (XD).
    Exercise,
    /// Credit event of a counterparty (CE).
    CreditEvent,
}

impl EventType {
    /// All event types, in tag order.
    pub const ALL: [EventType; 21] = [
        EventType::Monitoring,
        EventType::InitialExchange,
        EventType::PrincipalRedemption,
        EventType::InterestPayment,
        EventType::InterestCapitalization,
        EventType::FeePayment,
        EventType::Dividend,
        EventType::Penalty,
        EventType::MarginCall,
        EventType::RateResetFixed,
        EventType::RateResetVariable,
        EventType::ScalingIndex,
        EventType::InterestCalculationBase,
        EventType::PrincipalDrawing,
        EventType::PrincipalPrepayment,
        EventType::Purchase,
        EventType::Termination,
        EventType::Settlement,
        EventType::Maturity,
        EventType::Exercise,
        EventType::CreditEvent,
    ];

    /// Returns the ACTUS acronym for the event type.
    #[must_use]
    pub fn acronym(self) -> &'static str {
        match self {
            EventType::Monitoring => "AD",
            EventType::InitialExchange => "IED",
            EventType::PrincipalRedemption => "PR",
            EventType::InterestPayment => "IP",
            EventType::InterestCapitalization => "IPCI",
            EventType::FeePayment => "FP",
            EventType::Dividend => "DV",
            EventType::Penalty => "PY",
            EventType::MarginCall => "MR",
            EventType::RateResetFixed => "RRF",
            EventType::RateResetVariable => "RR",
            EventType::ScalingIndex => "SC",
            EventType::InterestCalculationBase => "IPCB",
            EventType::PrincipalDrawing => "PD",
            EventType::PrincipalPrepayment => "PP",
            EventType::Purchase => "PRD",
            EventType::Termination => "TD",
            EventType::Settlement => "STD",
            EventType::Maturity => "MD",
            EventType::Exercise => "XD",
            EventType::CreditEvent => "CE",
        }
    }

    /// Returns the epoch offset: the fixed intra-day processing priority
    /// used to break ties between events scheduled at the same instant.
    /// Lower offsets are processed first.
    #[must_use]
    pub fn epoch_offset(self) -> u32 {
        match self {
            EventType::InitialExchange => 20,
            EventType::PrincipalRedemption => 25,
            EventType::InterestPayment => 30,
            EventType::InterestCapitalization => 40,
            EventType::FeePayment => 50,
            EventType::Dividend => 60,
            EventType::Penalty => 70,
            EventType::MarginCall => 80,
            EventType::RateResetFixed => 90,
            EventType::RateResetVariable => 100,
            EventType::ScalingIndex => 110,
            EventType::InterestCalculationBase => 120,
            EventType::PrincipalDrawing => 122,
            EventType::PrincipalPrepayment => 124,
            EventType::Purchase => 130,
            EventType::Termination => 140,
            EventType::Settlement => 150,
            EventType::Maturity => 160,
            EventType::Exercise => 170,
            EventType::CreditEvent => 180,
            // Monitoring events may fire at any time and always sort
            // after the contractual events of the same instant.
            EventType::Monitoring => 950,
        }
    }

    /// Returns the one-byte tag used in the packed encoding.
    #[must_use]
    pub fn tag(self) -> u8 {
        match self {
            EventType::Monitoring => 0,
            EventType::InitialExchange => 1,
            EventType::PrincipalRedemption => 2,
            EventType::InterestPayment => 3,
            EventType::InterestCapitalization => 4,
            EventType::FeePayment => 5,
            EventType::Dividend => 6,
            EventType::Penalty => 7,
            EventType::MarginCall => 8,
            EventType::RateResetFixed => 9,
            EventType::RateResetVariable => 10,
            EventType::ScalingIndex => 11,
            EventType::InterestCalculationBase => 12,
            EventType::PrincipalDrawing => 13,
            EventType::PrincipalPrepayment => 14,
            EventType::Purchase => 15,
            EventType::Termination => 16,
            EventType::Settlement => 17,
            EventType::Maturity => 18,
            EventType::Exercise => 19,
            EventType::CreditEvent => 20,
        }
    }

    /// Resolves a tag byte back to its event type.
    #[must_use]
    pub fn from_tag(tag: u8) -> Option<EventType> {
        EventType::ALL.get(usize::from(tag)).copied()
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.acronym())
    }
}

/// A contract event with its scheduled time.
///
/// An event whose `schedule_time` is [`Timestamp::ZERO`] is the null
/// placeholder event; it is filtered out of every produced sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScheduledEvent {
    /// What happens.
    pub event_type: EventType,
    /// When it happens.
    pub schedule_time: Timestamp,
}

impl ScheduledEvent {
    /// Creates a scheduled event.
    #[must_use]
    pub const fn new(event_type: EventType, schedule_time: Timestamp) -> Self {
        ScheduledEvent {
            event_type,
            schedule_time,
        }
    }

    /// Returns true for the null placeholder event.
    #[must_use]
    pub fn is_null(&self) -> bool {
        !self.schedule_time.is_set()
    }

    /// Packs the event into its single sortable encoding.
    #[must_use]
    pub fn encode(&self) -> EncodedEvent {
        EncodedEvent::encode(self.event_type, self.schedule_time)
    }
}

impl Ord for ScheduledEvent {
    /// Deterministic timeline order: schedule time ascending, ties
    /// broken by epoch offset, then by tag for a total order.
    fn cmp(&self, other: &Self) -> Ordering {
        self.schedule_time
            .cmp(&other.schedule_time)
            .then_with(|| self.event_type.epoch_offset().cmp(&other.event_type.epoch_offset()))
            .then_with(|| self.event_type.tag().cmp(&other.event_type.tag()))
    }
}

impl PartialOrd for ScheduledEvent {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for ScheduledEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.event_type, self.schedule_time)
    }
}

/// The packed form of a [`ScheduledEvent`]: event-type tag in the
/// most-significant byte, schedule time in the low 64 bits.
///
/// Decoding an encoding reproduces the exact original pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EncodedEvent(u128);

const TAG_SHIFT: u32 = 120;

impl EncodedEvent {
    /// Packs an event type and schedule time.
    #[must_use]
    pub fn encode(event_type: EventType, schedule_time: Timestamp) -> Self {
        let packed =
            (u128::from(event_type.tag()) << TAG_SHIFT) | u128::from(schedule_time.as_seconds());
        EncodedEvent(packed)
    }

    /// Unpacks the event. Infallible for values produced by `encode`.
    #[must_use]
    pub fn decode(self) -> ScheduledEvent {
        let tag = (self.0 >> TAG_SHIFT) as u8;
        // Constructors guarantee a valid tag byte.
        let event_type = EventType::from_tag(tag).unwrap_or(EventType::Monitoring);
        let schedule_time = Timestamp::new(self.0 as u64);
        ScheduledEvent::new(event_type, schedule_time)
    }

    /// Returns the raw packed value.
    #[must_use]
    pub const fn as_u128(self) -> u128 {
        self.0
    }
}

impl TryFrom<u128> for EncodedEvent {
    type Error = ActusError;

    /// Validates a raw packed value from an external source.
    fn try_from(raw: u128) -> ActusResult<Self> {
        let tag = (raw >> TAG_SHIFT) as u8;
        if EventType::from_tag(tag).is_none() {
            return Err(ActusError::InvalidEventTag { tag });
        }
        if (raw >> 64) & ((1u128 << (TAG_SHIFT - 64)) - 1) != 0 {
            return Err(ActusError::InvalidEventTag { tag });
        }
        Ok(EncodedEvent(raw))
    }
}

impl From<EncodedEvent> for u128 {
    fn from(event: EncodedEvent) -> u128 {
        event.0
    }
}
