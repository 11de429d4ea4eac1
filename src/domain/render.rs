use crate::domain::booking::{BookingDraft, ConfirmState, PassengerId, PriceSheet, Totals, TripType};

/// Projection of the confirm button: whether it accepts clicks and the
/// label it shows.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct ConfirmControl {
    pub enabled: bool,
    pub label: &'static str,
}

/// One render pass worth of display state.
///
/// The engine computes a full frame after every mutation and hands it to
/// the sink; the sink never sees the draft itself, so display state
/// cannot be updated incrementally and drift from the inputs.
#[derive(Debug, PartialEq, Clone)]
pub struct RenderFrame {
    pub baggage_count: u32,
    pub totals: Totals,
    pub baggage_row_visible: bool,
    pub insurance_row_visible: bool,
    pub return_field_visible: bool,
    pub selected_passenger: Option<PassengerId>,
    pub confirm: ConfirmControl,
}

impl RenderFrame {
    pub fn project(draft: &BookingDraft, prices: &PriceSheet) -> Self {
        let confirm = match draft.confirm {
            ConfirmState::Disabled => ConfirmControl {
                enabled: false,
                label: "Confirm Booking",
            },
            ConfirmState::Enabled => ConfirmControl {
                enabled: true,
                label: "Confirm Booking",
            },
            ConfirmState::Submitting => ConfirmControl {
                enabled: false,
                label: "Processing...",
            },
        };

        Self {
            baggage_count: draft.baggage_count,
            totals: Totals::compute(draft, prices),
            baggage_row_visible: draft.baggage_count > 0,
            insurance_row_visible: draft.has_insurance,
            return_field_visible: draft.trip_type == TripType::RoundTrip,
            selected_passenger: draft.selected_passenger,
            confirm,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::money::Money;
    use rust_decimal_macros::dec;

    fn fixture() -> (BookingDraft, PriceSheet) {
        let prices = PriceSheet {
            base_flight_cost: Money::new(dec!(1000.00)).unwrap(),
            baggage_unit_price: Money::new(dec!(50.00)).unwrap(),
            insurance_flat_price: Money::new(dec!(200.00)).unwrap(),
        };
        let draft = BookingDraft {
            selected_passenger: None,
            baggage_count: 0,
            has_insurance: false,
            trip_type: TripType::OneWay,
            return_date: None,
            confirm: ConfirmState::Disabled,
        };
        (draft, prices)
    }

    #[test]
    fn test_rows_hidden_until_used() {
        let (mut draft, prices) = fixture();
        let frame = RenderFrame::project(&draft, &prices);
        assert!(!frame.baggage_row_visible);
        assert!(!frame.insurance_row_visible);
        assert!(!frame.return_field_visible);

        draft.adjust_baggage(1);
        draft.toggle_insurance();
        draft.set_trip_type(TripType::RoundTrip);
        let frame = RenderFrame::project(&draft, &prices);
        assert!(frame.baggage_row_visible);
        assert!(frame.insurance_row_visible);
        assert!(frame.return_field_visible);
    }

    #[test]
    fn test_confirm_control_projection() {
        let (mut draft, prices) = fixture();
        let frame = RenderFrame::project(&draft, &prices);
        assert!(!frame.confirm.enabled);
        assert_eq!(frame.confirm.label, "Confirm Booking");

        draft.select_passenger(10234);
        let frame = RenderFrame::project(&draft, &prices);
        assert!(frame.confirm.enabled);

        draft.begin_submit().unwrap();
        let frame = RenderFrame::project(&draft, &prices);
        assert!(!frame.confirm.enabled);
        assert_eq!(frame.confirm.label, "Processing...");
    }
}
