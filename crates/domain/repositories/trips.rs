use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;
use uuid::Uuid;

use crate::domain::entities::trips::TripEntity;

#[automock]
#[async_trait]
pub trait TripRepository {
    async fn find_by_id(&self, trip_id: Uuid) -> Result<Option<TripEntity>>;
}
