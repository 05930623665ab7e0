use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    response::IntoResponse,
    routing::get,
};
use crates::{
    domain::repositories::{
        bookings::BookingRepository, payments::PaymentRepository, trips::TripRepository,
    },
    infra::db::{
        postgres::postgres_connection::PgPoolSquad,
        repositories::{
            bookings::BookingPostgres, payments::PaymentPostgres, trips::TripPostgres,
        },
    },
};
use uuid::Uuid;

use crate::{
    auth::AuthUser, axum_http::error_responses::AppError,
    usecases::booking_payments::BookingPaymentsUseCase,
};

pub fn routes(db_pool: Arc<PgPoolSquad>) -> Router {
    let usecase = BookingPaymentsUseCase::new(
        Arc::new(TripPostgres::new(Arc::clone(&db_pool))),
        Arc::new(BookingPostgres::new(Arc::clone(&db_pool))),
        Arc::new(PaymentPostgres::new(Arc::clone(&db_pool))),
    );

    Router::new()
        .route("/:trip_id/payment-plan", get(payment_plan_preview))
        .with_state(Arc::new(usecase))
}

/// Schedule a new booking of this trip would get if created now.
pub async fn payment_plan_preview<T, B, P>(
    State(usecase): State<Arc<BookingPaymentsUseCase<T, B, P>>>,
    auth: AuthUser,
    Path(trip_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError>
where
    T: TripRepository + Send + Sync + 'static,
    B: BookingRepository + Send + Sync + 'static,
    P: PaymentRepository + Send + Sync + 'static,
{
    auth.require_staff()?;
    let plan = usecase.trip_payment_plan(trip_id).await?;
    Ok(Json(plan))
}
