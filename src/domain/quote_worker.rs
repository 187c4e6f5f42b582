//! Asynchronous quote analytics worker.

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio_retry::Retry;
use tokio_retry::strategy::{ExponentialBackoff, jitter};
use tracing::{debug, warn};

use crate::domain::quote_event::QuoteEvent;
use crate::domain::repositories::QuoteLogRepository;

/// Drains the quote event channel and persists events to the quote log.
///
/// Transient database errors are retried with jittered exponential backoff;
/// an event that still fails after the last attempt is dropped with a
/// warning. The worker exits when all senders are gone.
pub async fn run_quote_worker<R: QuoteLogRepository>(
    mut rx: mpsc::Receiver<QuoteEvent>,
    repository: Arc<R>,
) {
    while let Some(event) = rx.recv().await {
        let backoff = ExponentialBackoff::from_millis(50).map(jitter).take(3);

        let result = Retry::spawn(backoff, || {
            let repository = repository.clone();
            let event = event.clone();
            async move { repository.record(event).await }
        })
        .await;

        match result {
            Ok(()) => debug!(
                merchant_id = event.merchant_id,
                fee = event.fee_amount,
                "Quote event recorded"
            ),
            Err(e) => warn!(
                merchant_id = event.merchant_id,
                "Dropping quote event after retries: {e}"
            ),
        }
    }

    debug!("Quote event channel closed, worker exiting");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::pricing::OrderType;
    use crate::domain::repositories::MockQuoteLogRepository;
    use crate::error::AppError;
    use serde_json::json;

    fn event(merchant_id: i64) -> QuoteEvent {
        QuoteEvent {
            merchant_id,
            order_type: OrderType::Delivery,
            fee_amount: 3_000,
            distance_meters: 2_500.0,
            is_free_zone: false,
        }
    }

    #[tokio::test]
    async fn test_worker_records_events_until_channel_closes() {
        let mut mock_repo = MockQuoteLogRepository::new();
        mock_repo.expect_record().times(2).returning(|_| Ok(()));

        let (tx, rx) = mpsc::channel(8);
        tx.send(event(1)).await.unwrap();
        tx.send(event(2)).await.unwrap();
        drop(tx);

        run_quote_worker(rx, Arc::new(mock_repo)).await;
    }

    #[tokio::test]
    async fn test_worker_retries_transient_failures() {
        let mut mock_repo = MockQuoteLogRepository::new();
        let mut attempts = 0;
        mock_repo.expect_record().times(2).returning(move |_| {
            attempts += 1;
            if attempts == 1 {
                Err(AppError::internal("Database error", json!({})))
            } else {
                Ok(())
            }
        });

        let (tx, rx) = mpsc::channel(8);
        tx.send(event(1)).await.unwrap();
        drop(tx);

        run_quote_worker(rx, Arc::new(mock_repo)).await;
    }

    #[tokio::test]
    async fn test_worker_drops_event_after_exhausted_retries() {
        let mut mock_repo = MockQuoteLogRepository::new();
        // 1 initial attempt + 3 retries.
        mock_repo
            .expect_record()
            .times(4)
            .returning(|_| Err(AppError::internal("Database error", json!({}))));

        let (tx, rx) = mpsc::channel(8);
        tx.send(event(1)).await.unwrap();
        drop(tx);

        // Worker must not wedge on a poison event.
        run_quote_worker(rx, Arc::new(mock_repo)).await;
    }
}
