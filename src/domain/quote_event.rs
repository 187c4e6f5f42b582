//! Quote event model for asynchronous analytics.

use crate::domain::pricing::{FeeQuote, OrderType};

/// An in-memory record of a served fee quote.
///
/// Sent from the quote service to the background worker over a bounded
/// channel so that quote responses never wait on analytics writes. Events
/// are best-effort: when the channel is full the event is dropped and the
/// drop is logged.
#[derive(Debug, Clone)]
pub struct QuoteEvent {
    pub merchant_id: i64,
    pub order_type: OrderType,
    pub fee_amount: i64,
    pub distance_meters: f64,
    pub is_free_zone: bool,
}

impl QuoteEvent {
    /// Builds an event from a served quote.
    pub fn from_quote(merchant_id: i64, order_type: OrderType, quote: &FeeQuote) -> Self {
        Self {
            merchant_id,
            order_type,
            fee_amount: quote.fee_amount,
            distance_meters: quote.distance_meters,
            is_free_zone: quote.is_free_zone,
        }
    }
}
