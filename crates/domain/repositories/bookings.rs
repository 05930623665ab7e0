use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;
use uuid::Uuid;

use crate::domain::entities::bookings::BookingEntity;

#[automock]
#[async_trait]
pub trait BookingRepository {
    async fn find_by_id(&self, booking_id: Uuid) -> Result<Option<BookingEntity>>;
}
