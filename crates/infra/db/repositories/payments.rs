use anyhow::Result;
use async_trait::async_trait;
use diesel::{RunQueryDsl, delete, insert_into, prelude::*};
use std::sync::Arc;
use uuid::Uuid;

use crate::{
    domain,
    infra::db::postgres::{postgres_connection::PgPoolSquad, schema::payments},
};
use domain::{
    entities::payments::{NewPaymentEntity, PaymentEntity},
    repositories::payments::PaymentRepository,
};

pub struct PaymentPostgres {
    db_pool: Arc<PgPoolSquad>,
}

impl PaymentPostgres {
    pub fn new(db_pool: Arc<PgPoolSquad>) -> Self {
        Self { db_pool }
    }
}

#[async_trait]
impl PaymentRepository for PaymentPostgres {
    async fn list_by_booking(&self, booking_id: Uuid) -> Result<Vec<PaymentEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let rows = payments::table
            .filter(payments::booking_id.eq(booking_id))
            .order((payments::payment_date.asc(), payments::created_at.asc()))
            .select(PaymentEntity::as_select())
            .load::<PaymentEntity>(&mut conn)?;

        Ok(rows)
    }

    async fn record_payment(&self, payment: NewPaymentEntity) -> Result<PaymentEntity> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let recorded = insert_into(payments::table)
            .values(&payment)
            .returning(PaymentEntity::as_returning())
            .get_result::<PaymentEntity>(&mut conn)?;

        Ok(recorded)
    }

    async fn delete_for_booking(&self, booking_id: Uuid, payment_id: Uuid) -> Result<bool> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let deleted = delete(
            payments::table
                .filter(payments::id.eq(payment_id))
                .filter(payments::booking_id.eq(booking_id)),
        )
        .execute(&mut conn)?;

        Ok(deleted > 0)
    }
}
