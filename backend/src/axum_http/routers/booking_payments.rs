use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get},
};
use crates::{
    domain::{
        repositories::{
            bookings::BookingRepository, payments::PaymentRepository, trips::TripRepository,
        },
        value_objects::booking_payments::RecordPaymentModel,
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
    let trip_repository = TripPostgres::new(Arc::clone(&db_pool));
    let booking_repository = BookingPostgres::new(Arc::clone(&db_pool));
    let payment_repository = PaymentPostgres::new(Arc::clone(&db_pool));

    let usecase = BookingPaymentsUseCase::new(
        Arc::new(trip_repository),
        Arc::new(booking_repository),
        Arc::new(payment_repository),
    );

    Router::new()
        .route("/:booking_id/payments", get(list_payments).post(record_payment))
        .route("/:booking_id/payments/:payment_id", delete(delete_payment))
        .route("/:booking_id/payment-plan", get(payment_plan))
        .with_state(Arc::new(usecase))
}

pub async fn list_payments<T, B, P>(
    State(usecase): State<Arc<BookingPaymentsUseCase<T, B, P>>>,
    auth: AuthUser,
    Path(booking_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError>
where
    T: TripRepository + Send + Sync + 'static,
    B: BookingRepository + Send + Sync + 'static,
    P: PaymentRepository + Send + Sync + 'static,
{
    auth.require_staff()?;
    let dto = usecase.booking_payments(booking_id).await?;
    Ok(Json(dto))
}

pub async fn record_payment<T, B, P>(
    State(usecase): State<Arc<BookingPaymentsUseCase<T, B, P>>>,
    auth: AuthUser,
    Path(booking_id): Path<Uuid>,
    Json(model): Json<RecordPaymentModel>,
) -> Result<impl IntoResponse, AppError>
where
    T: TripRepository + Send + Sync + 'static,
    B: BookingRepository + Send + Sync + 'static,
    P: PaymentRepository + Send + Sync + 'static,
{
    auth.require_admin()?;
    let dto = usecase
        .record_payment(booking_id, auth.user_id, model)
        .await?;
    Ok((StatusCode::CREATED, Json(dto)))
}

pub async fn delete_payment<T, B, P>(
    State(usecase): State<Arc<BookingPaymentsUseCase<T, B, P>>>,
    auth: AuthUser,
    Path((booking_id, payment_id)): Path<(Uuid, Uuid)>,
) -> Result<impl IntoResponse, AppError>
where
    T: TripRepository + Send + Sync + 'static,
    B: BookingRepository + Send + Sync + 'static,
    P: PaymentRepository + Send + Sync + 'static,
{
    auth.require_admin()?;
    usecase.delete_payment(booking_id, payment_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn payment_plan<T, B, P>(
    State(usecase): State<Arc<BookingPaymentsUseCase<T, B, P>>>,
    auth: AuthUser,
    Path(booking_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError>
where
    T: TripRepository + Send + Sync + 'static,
    B: BookingRepository + Send + Sync + 'static,
    P: PaymentRepository + Send + Sync + 'static,
{
    auth.require_staff()?;
    let plan = usecase.booking_payment_plan(booking_id).await?;
    Ok(Json(plan))
}
