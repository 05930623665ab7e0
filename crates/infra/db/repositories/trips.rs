use anyhow::Result;
use async_trait::async_trait;
use diesel::{OptionalExtension, RunQueryDsl, prelude::*};
use std::sync::Arc;
use uuid::Uuid;

use crate::{
    domain,
    infra::db::postgres::{postgres_connection::PgPoolSquad, schema::trips},
};
use domain::{entities::trips::TripEntity, repositories::trips::TripRepository};

pub struct TripPostgres {
    db_pool: Arc<PgPoolSquad>,
}

impl TripPostgres {
    pub fn new(db_pool: Arc<PgPoolSquad>) -> Self {
        Self { db_pool }
    }
}

#[async_trait]
impl TripRepository for TripPostgres {
    async fn find_by_id(&self, trip_id: Uuid) -> Result<Option<TripEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let trip = trips::table
            .filter(trips::id.eq(trip_id))
            .select(TripEntity::as_select())
            .first::<TripEntity>(&mut conn)
            .optional()?;

        Ok(trip)
    }
}
