use super::money::Money;
use super::render::RenderFrame;
use crate::error::Result;
use async_trait::async_trait;

/// Display sink the engine renders into.
///
/// The original page mutated text nodes and element styles; tests and
/// the CLI record frames instead.
pub trait RenderSink {
    fn apply(&mut self, frame: RenderFrame);
}

pub type RenderSinkBox = Box<dyn RenderSink + Send>;

/// Backend autofill lookups.
///
/// Fire-and-forget from the page's point of view: callers log failures
/// and keep the field's prior value, and a later response always
/// overwrites an earlier one.
#[async_trait]
pub trait FareSource: Send + Sync {
    async fn flight_price(&self, flight_no: &str) -> Result<Money>;
    async fn arrival_time(&self, route: &str, departure_time: &str) -> Result<String>;
}

pub type FareSourceBox = Box<dyn FareSource>;
