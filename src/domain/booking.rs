use crate::domain::money::Money;
use crate::error::{BookingError, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

pub type PassengerId = u32;

/// One passenger card shown on the summary page.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct PassengerCard {
    pub id: PassengerId,
    pub full_name: String,
}

/// Server-supplied price constants, immutable for the page lifetime.
#[derive(Debug, Deserialize, PartialEq, Clone, Copy)]
pub struct PriceSheet {
    pub base_flight_cost: Money,
    pub baggage_unit_price: Money,
    pub insurance_flat_price: Money,
}

#[derive(Debug, Deserialize, PartialEq, Eq, Clone, Copy, Default)]
#[serde(rename_all = "snake_case")]
pub enum TripType {
    #[default]
    OneWay,
    RoundTrip,
}

impl FromStr for TripType {
    type Err = BookingError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "one_way" => Ok(TripType::OneWay),
            "round_trip" => Ok(TripType::RoundTrip),
            other => Err(BookingError::ValidationError(format!(
                "Unknown trip type: {other}"
            ))),
        }
    }
}

/// Lifecycle of the confirm action. `Submitting` is terminal: the button
/// never re-enables before the page navigates away, and a chosen
/// passenger cannot be deselected, so `Enabled` never falls back to
/// `Disabled`.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum ConfirmState {
    #[default]
    Disabled,
    Enabled,
    Submitting,
}

impl ConfirmState {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConfirmState::Disabled => "disabled",
            ConfirmState::Enabled => "enabled",
            ConfirmState::Submitting => "submitting",
        }
    }
}

/// The values the server embeds into the summary page, read once at load.
#[derive(Debug, Deserialize, Clone)]
pub struct PageContext {
    pub prices: PriceSheet,
    #[serde(default)]
    pub initial_baggage: u32,
    #[serde(default)]
    pub selected_passenger: Option<PassengerId>,
    #[serde(default)]
    pub passengers: Vec<PassengerCard>,
    #[serde(default)]
    pub trip_type: TripType,
}

impl PageContext {
    /// Parses the embedded page context from its JSON document.
    pub fn from_json(source: impl std::io::Read) -> Result<Self> {
        Ok(serde_json::from_reader(source)?)
    }
}

/// The mutable in-progress booking state, owned exclusively by the engine.
///
/// Created once per run from the page context, mutated in place by user
/// commands, discarded at exit. Derived totals are never stored here.
#[derive(Debug, PartialEq, Clone)]
pub struct BookingDraft {
    pub selected_passenger: Option<PassengerId>,
    pub baggage_count: u32,
    pub has_insurance: bool,
    pub trip_type: TripType,
    pub return_date: Option<String>,
    pub confirm: ConfirmState,
}

impl BookingDraft {
    /// Applies a baggage adjustment, floor-clamping the count at zero.
    pub fn adjust_baggage(&mut self, delta: i64) {
        let next = i64::from(self.baggage_count) + delta;
        self.baggage_count = next.clamp(0, i64::from(u32::MAX)) as u32;
    }

    /// Overwrites the current selection (last write wins). Enables the
    /// confirm action on the first selection of the session.
    pub fn select_passenger(&mut self, id: PassengerId) {
        self.selected_passenger = Some(id);
        if self.confirm == ConfirmState::Disabled {
            self.confirm = ConfirmState::Enabled;
        }
    }

    pub fn toggle_insurance(&mut self) {
        self.has_insurance = !self.has_insurance;
    }

    /// Switching to one-way clears any entered return date.
    pub fn set_trip_type(&mut self, trip: TripType) {
        self.trip_type = trip;
        if trip == TripType::OneWay {
            self.return_date = None;
        }
    }

    /// The return date field is disabled while the trip is one-way.
    pub fn set_return_date(&mut self, date: String) {
        if self.trip_type == TripType::RoundTrip {
            self.return_date = Some(date);
        }
    }

    /// Guarded submit: a booking may only be confirmed with a passenger
    /// selected. On success the confirm action enters its terminal
    /// `Submitting` state.
    pub fn begin_submit(&mut self) -> Result<()> {
        if self.selected_passenger.is_none() {
            return Err(BookingError::ValidationError(
                "Please select a passenger before confirming the booking.".to_string(),
            ));
        }
        self.confirm = ConfirmState::Submitting;
        Ok(())
    }
}

/// Derived totals, a pure function of draft and price sheet.
///
/// Recomputed from scratch on every render so the displayed total can
/// never drift from its inputs.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct Totals {
    pub baggage_total: Money,
    pub insurance_total: Money,
    pub grand_total: Money,
}

impl Totals {
    pub fn compute(draft: &BookingDraft, prices: &PriceSheet) -> Self {
        let baggage_total = prices.baggage_unit_price.times(draft.baggage_count);
        let insurance_total = if draft.has_insurance {
            prices.insurance_flat_price
        } else {
            Money::ZERO
        };
        let grand_total = prices.base_flight_cost + baggage_total + insurance_total;
        Self {
            baggage_total,
            insurance_total,
            grand_total,
        }
    }
}

/// Final state of a run, shaped for the summary writer.
#[derive(Debug, Serialize, PartialEq, Clone)]
pub struct BookingSummary {
    pub passenger: Option<PassengerId>,
    pub baggage_count: u32,
    pub baggage_total: String,
    pub insurance: bool,
    pub insurance_total: String,
    pub base_cost: String,
    pub total: String,
    pub state: &'static str,
}
