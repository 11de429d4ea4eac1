use crate::domain::money::Money;
use crate::domain::ports::{FareSource, RenderSink};
use crate::domain::render::RenderFrame;
use crate::error::Result;
use async_trait::async_trait;
use std::sync::{Arc, Mutex, PoisonError};

/// A render sink that records every frame it is handed.
///
/// Clones share the same frame log, so a test can keep a handle while
/// the engine owns the boxed sink. The last frame is what the page
/// would currently display.
#[derive(Default, Clone)]
pub struct RecordingSink {
    frames: Arc<Mutex<Vec<RenderFrame>>>,
}

impl RecordingSink {
    /// Creates a new sink with an empty frame log.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_frame(&self) -> Option<RenderFrame> {
        self.frames
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .last()
            .cloned()
    }

    pub fn frame_count(&self) -> usize {
        self.frames
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

impl RenderSink for RecordingSink {
    fn apply(&mut self, frame: RenderFrame) {
        self.frames
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(frame);
    }
}

/// A canned fare source for tests and offline runs.
pub struct FixedFareSource {
    pub price: Money,
    pub arrival: String,
}

#[async_trait]
impl FareSource for FixedFareSource {
    async fn flight_price(&self, _flight_no: &str) -> Result<Money> {
        Ok(self.price)
    }

    async fn arrival_time(&self, _route: &str, _departure_time: &str) -> Result<String> {
        Ok(self.arrival.clone())
    }
}
