use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::payments::PaymentEntity;
use crate::domain::value_objects::enums::payment_methods::PaymentMethod;
use crate::domain::value_objects::payment_calculator::{PaymentPlanInstallment, PaymentSummary};

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PaymentDto {
    pub id: Uuid,
    pub booking_id: Uuid,
    pub amount_cents: Option<i64>,
    pub payment_date: NaiveDate,
    pub method: Option<PaymentMethod>,
    pub note: Option<String>,
    pub recorded_by: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

impl From<PaymentEntity> for PaymentDto {
    fn from(value: PaymentEntity) -> Self {
        Self {
            id: value.id,
            booking_id: value.booking_id,
            amount_cents: value.amount_cents,
            payment_date: value.payment_date,
            method: PaymentMethod::from_str(&value.method),
            note: value.note,
            recorded_by: value.recorded_by,
            created_at: value.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct BookingPaymentsDto {
    pub booking_id: Uuid,
    pub trip_id: Uuid,
    pub payments: Vec<PaymentDto>,
    pub summary: PaymentSummary,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PaymentPlanDto {
    pub trip_id: Uuid,
    pub trip_price_cents: Option<i64>,
    pub trip_start_date: Option<NaiveDate>,
    pub installments: Vec<PaymentPlanInstallment>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RecordPaymentModel {
    pub amount_cents: i64,
    pub method: String,
    #[serde(default)]
    pub payment_date: Option<NaiveDate>,
    #[serde(default)]
    pub note: Option<String>,
}
