//! Repository trait for the quote analytics log.

use crate::domain::quote_event::QuoteEvent;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for recording served quotes.
///
/// Writes happen off the request path in
/// [`crate::domain::quote_worker::run_quote_worker`]; implementations
/// should be a single insert with no read side.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgQuoteLogRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuoteLogRepository: Send + Sync {
    /// Appends one served quote to the log.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors. The worker
    /// retries these; there is no partial-success state to report.
    async fn record(&self, event: QuoteEvent) -> Result<(), AppError>;
}
