use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;
use uuid::Uuid;

use crate::domain::entities::payments::{NewPaymentEntity, PaymentEntity};

#[automock]
#[async_trait]
pub trait PaymentRepository {
    /// Payments of a booking, oldest `payment_date` first.
    async fn list_by_booking(&self, booking_id: Uuid) -> Result<Vec<PaymentEntity>>;
    async fn record_payment(&self, payment: NewPaymentEntity) -> Result<PaymentEntity>;
    /// Returns `false` when no payment with that id belongs to the booking.
    async fn delete_for_booking(&self, booking_id: Uuid, payment_id: Uuid) -> Result<bool>;
}
