use crate::domain::booking::{
    BookingDraft, BookingSummary, ConfirmState, PageContext, PassengerId, PriceSheet, Totals,
    TripType,
};
use crate::domain::command::{Command, CommandKind};
use crate::domain::ports::RenderSinkBox;
use crate::domain::render::RenderFrame;
use crate::error::Result;
use std::collections::HashSet;
use tracing::debug;

/// The main entry point for the booking summary page.
///
/// `BookingSummaryEngine` owns the single booking draft for the run and
/// re-renders every derived display value whenever a command mutates it.
/// Handlers run synchronously, one at a time, to completion; the only
/// operation that can fail is the confirm guard, which is a user-facing
/// validation rejection rather than an exception.
pub struct BookingSummaryEngine {
    draft: BookingDraft,
    prices: PriceSheet,
    roster: HashSet<PassengerId>,
    sink: RenderSinkBox,
}

impl BookingSummaryEngine {
    /// Builds the draft from the server-embedded page context and
    /// renders the initial frame.
    ///
    /// A pre-selected passenger id that does not name a roster member is
    /// treated as no selection, leaving the confirm action disabled.
    pub fn initialize(context: PageContext, sink: RenderSinkBox) -> Self {
        let roster: HashSet<PassengerId> = context.passengers.iter().map(|p| p.id).collect();
        let selected = context.selected_passenger.filter(|id| roster.contains(id));

        let draft = BookingDraft {
            selected_passenger: selected,
            baggage_count: context.initial_baggage,
            has_insurance: false,
            trip_type: context.trip_type,
            return_date: None,
            confirm: if selected.is_some() {
                ConfirmState::Enabled
            } else {
                ConfirmState::Disabled
            },
        };

        let mut engine = Self {
            draft,
            prices: context.prices,
            roster,
            sink,
        };
        engine.render();
        engine
    }

    /// Dispatches one command to its handler.
    ///
    /// Once the confirm action is submitting, the page is on its way
    /// out and every further command is ignored.
    pub fn apply(&mut self, command: Command) -> Result<()> {
        if self.draft.confirm == ConfirmState::Submitting {
            debug!(op = ?command.op, "booking already submitting, command ignored");
            return Ok(());
        }

        match command.op {
            CommandKind::Select => {
                if let Some(id) = command.passenger {
                    self.select_passenger(id);
                }
            }
            CommandKind::Baggage => self.adjust_baggage(command.delta.unwrap_or(0)),
            CommandKind::Insurance => self.toggle_insurance(),
            CommandKind::Trip => {
                if let Some(value) = command.value.as_deref()
                    && let Ok(trip) = value.parse::<TripType>()
                {
                    self.set_trip_type(trip);
                }
            }
            CommandKind::Return => {
                if let Some(value) = command.value {
                    self.set_return_date(value);
                }
            }
            CommandKind::Confirm => self.attempt_confirm()?,
        }
        Ok(())
    }

    pub fn adjust_baggage(&mut self, delta: i64) {
        self.draft.adjust_baggage(delta);
        self.render();
    }

    /// Selecting an unknown passenger card is a silent no-op: nothing on
    /// the page changes, not even the confirm button.
    pub fn select_passenger(&mut self, id: PassengerId) {
        if !self.roster.contains(&id) {
            debug!(passenger = id, "unknown passenger card, selection ignored");
            return;
        }
        self.draft.select_passenger(id);
        self.render();
    }

    pub fn toggle_insurance(&mut self) {
        self.draft.toggle_insurance();
        self.render();
    }

    pub fn set_trip_type(&mut self, trip: TripType) {
        self.draft.set_trip_type(trip);
        self.render();
    }

    pub fn set_return_date(&mut self, date: String) {
        self.draft.set_return_date(date);
        self.render();
    }

    /// Guarded submit. With no passenger selected the submission is
    /// aborted and the rejection surfaces to the user; the draft is left
    /// untouched. Otherwise the confirm action enters its terminal
    /// submitting state and the button renders disabled with a
    /// processing label.
    pub fn attempt_confirm(&mut self) -> Result<()> {
        self.draft.begin_submit()?;
        self.render();
        Ok(())
    }

    pub fn draft(&self) -> &BookingDraft {
        &self.draft
    }

    pub fn totals(&self) -> Totals {
        Totals::compute(&self.draft, &self.prices)
    }

    fn render(&mut self) {
        let frame = RenderFrame::project(&self.draft, &self.prices);
        self.sink.apply(frame);
    }

    /// Consumes the engine and returns the final summary row.
    pub fn into_summary(self) -> BookingSummary {
        let totals = Totals::compute(&self.draft, &self.prices);
        BookingSummary {
            passenger: self.draft.selected_passenger,
            baggage_count: self.draft.baggage_count,
            baggage_total: totals.baggage_total.to_string(),
            insurance: self.draft.has_insurance,
            insurance_total: totals.insurance_total.to_string(),
            base_cost: self.prices.base_flight_cost.to_string(),
            total: totals.grand_total.to_string(),
            state: self.draft.confirm.as_str(),
        }
    }
}
