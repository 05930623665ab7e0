use chrono::{DateTime, NaiveDate, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use crate::{
    domain::value_objects::payment_calculator::PaymentRecord,
    infra::db::postgres::schema::payments,
};

#[derive(Debug, Clone, Identifiable, Selectable, Queryable)]
#[diesel(table_name = payments)]
pub struct PaymentEntity {
    pub id: Uuid,
    pub booking_id: Uuid,
    pub amount_cents: Option<i64>,
    pub payment_date: NaiveDate,
    pub method: String,
    pub note: Option<String>,
    pub recorded_by: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

impl From<&PaymentEntity> for PaymentRecord {
    fn from(value: &PaymentEntity) -> Self {
        Self {
            amount_cents: value.amount_cents,
            payment_date: value.payment_date,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Insertable)]
#[diesel(table_name = payments)]
pub struct InsertPaymentEntity {
    pub booking_id: Uuid,
    pub amount_cents: Option<i64>,
    pub payment_date: NaiveDate,
    pub method: String,
    pub note: Option<String>,
    pub recorded_by: Option<Uuid>,
}

// NewPaymentEntity is the application-facing alias for inserting rows into `payments`.
pub type NewPaymentEntity = InsertPaymentEntity;
