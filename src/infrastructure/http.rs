use crate::domain::money::Money;
use crate::domain::ports::FareSource;
use crate::error::{BookingError, Result};
use async_trait::async_trait;
use reqwest::Client;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Reads one cookie out of a `Cookie` header style string
/// (`name=value; other=value`).
///
/// The backend expects the `csrftoken` cookie echoed back in the
/// `X-CSRFToken` header on every autofill call.
pub fn read_cookie<'a>(cookies: &'a str, name: &str) -> Option<&'a str> {
    cookies.split(';').map(str::trim).find_map(|cookie| {
        cookie
            .strip_prefix(name)
            .and_then(|rest| rest.strip_prefix('='))
    })
}

#[derive(Serialize)]
struct PriceQuery<'a> {
    flight_no: &'a str,
}

#[derive(Deserialize)]
struct PriceReply {
    message: String,
}

#[derive(Serialize)]
struct ArrivalQuery<'a> {
    route: &'a str,
    departure_time: &'a str,
}

#[derive(Deserialize)]
struct ArrivalReply {
    arrival_time: String,
}

/// `FareSource` backed by the booking backend's autofill endpoints.
pub struct HttpFareSource {
    client: Client,
    base_url: String,
    csrf_token: Option<String>,
}

impl HttpFareSource {
    /// `cookies` is the raw cookie header the page would carry; only the
    /// `csrftoken` entry is used.
    pub fn new(base_url: impl Into<String>, cookies: Option<&str>) -> Self {
        let base: String = base_url.into();
        let csrf_token = cookies
            .and_then(|header| read_cookie(header, "csrftoken"))
            .map(str::to_owned);
        Self {
            client: Client::new(),
            base_url: base.trim_end_matches('/').to_owned(),
            csrf_token,
        }
    }

    fn post(&self, path: &str) -> reqwest::RequestBuilder {
        let mut request = self.client.post(format!("{}{}", self.base_url, path));
        if let Some(token) = &self.csrf_token {
            request = request.header("X-CSRFToken", token);
        }
        request
    }
}

#[async_trait]
impl FareSource for HttpFareSource {
    async fn flight_price(&self, flight_no: &str) -> Result<Money> {
        let reply: PriceReply = self
            .post("/get-flight-price/")
            .json(&PriceQuery { flight_no })
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let value = Decimal::from_str(reply.message.trim()).map_err(|e| {
            BookingError::BackendError(format!("unparseable price {:?}: {e}", reply.message))
        })?;
        Money::new(value)
    }

    async fn arrival_time(&self, route: &str, departure_time: &str) -> Result<String> {
        let reply: ArrivalReply = self
            .post("/get-arrival-time/")
            .json(&ArrivalQuery {
                route,
                departure_time,
            })
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(reply.arrival_time)
    }
}
