use chrono::{DateTime, NaiveDate, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use crate::infra::db::postgres::schema::trips;

#[derive(Debug, Clone, Identifiable, Selectable, Queryable)]
#[diesel(table_name = trips)]
pub struct TripEntity {
    pub id: Uuid,
    pub title: String,
    pub destination: Option<String>,
    pub price_cents: Option<i64>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
}
