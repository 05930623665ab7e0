use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use crate::infra::db::postgres::schema::bookings;

#[derive(Debug, Clone, Identifiable, Selectable, Queryable)]
#[diesel(table_name = bookings)]
pub struct BookingEntity {
    pub id: Uuid,
    pub trip_id: Uuid,
    pub contact_name: String,
    pub contact_email: Option<String>,
    pub participants: i32,
    pub status: String,
    pub created_at: DateTime<Utc>,
}
