use std::sync::Arc;

use chrono::Utc;
use crates::domain::{
    entities::{bookings::BookingEntity, payments::NewPaymentEntity, trips::TripEntity},
    repositories::{
        bookings::BookingRepository, payments::PaymentRepository, trips::TripRepository,
    },
    value_objects::{
        booking_payments::{BookingPaymentsDto, PaymentDto, PaymentPlanDto, RecordPaymentModel},
        enums::{booking_statuses::BookingStatus, payment_methods::PaymentMethod},
        payment_calculator::{PaymentRecord, calculate_balance, generate_payment_plan},
    },
};
use thiserror::Error;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::axum_http::error_responses::AppError;

#[derive(Debug, Error)]
pub enum BookingPaymentsError {
    #[error("booking not found")]
    BookingNotFound,
    #[error("trip not found")]
    TripNotFound,
    #[error("payment not found")]
    PaymentNotFound,
    #[error("invalid payment: {0}")]
    InvalidPayment(String),
    #[error("booking is cancelled")]
    BookingCancelled,
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl BookingPaymentsError {
    pub fn status_code(&self) -> axum::http::StatusCode {
        use axum::http::StatusCode;
        match self {
            BookingPaymentsError::BookingNotFound
            | BookingPaymentsError::TripNotFound
            | BookingPaymentsError::PaymentNotFound => StatusCode::NOT_FOUND,
            BookingPaymentsError::InvalidPayment(_) => StatusCode::BAD_REQUEST,
            BookingPaymentsError::BookingCancelled => StatusCode::CONFLICT,
            BookingPaymentsError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<BookingPaymentsError> for AppError {
    fn from(err: BookingPaymentsError) -> Self {
        match err {
            BookingPaymentsError::BookingNotFound
            | BookingPaymentsError::TripNotFound
            | BookingPaymentsError::PaymentNotFound => AppError::NotFound(err.to_string()),
            BookingPaymentsError::InvalidPayment(_) => AppError::BadRequest(err.to_string()),
            BookingPaymentsError::BookingCancelled => AppError::Conflict(err.to_string()),
            BookingPaymentsError::Internal(inner) => AppError::Internal(inner),
        }
    }
}

pub type UseCaseResult<T> = std::result::Result<T, BookingPaymentsError>;

/// Payment views and bookkeeping for bookings: balance summaries, the
/// deposit/balance schedule and manual payment entries.
pub struct BookingPaymentsUseCase<T, B, P>
where
    T: TripRepository + Send + Sync + 'static,
    B: BookingRepository + Send + Sync + 'static,
    P: PaymentRepository + Send + Sync + 'static,
{
    trip_repo: Arc<T>,
    booking_repo: Arc<B>,
    payment_repo: Arc<P>,
}

impl<T, B, P> BookingPaymentsUseCase<T, B, P>
where
    T: TripRepository + Send + Sync + 'static,
    B: BookingRepository + Send + Sync + 'static,
    P: PaymentRepository + Send + Sync + 'static,
{
    pub fn new(trip_repo: Arc<T>, booking_repo: Arc<B>, payment_repo: Arc<P>) -> Self {
        Self {
            trip_repo,
            booking_repo,
            payment_repo,
        }
    }

    pub async fn booking_payments(&self, booking_id: Uuid) -> UseCaseResult<BookingPaymentsDto> {
        info!(%booking_id, "booking_payments: loading payments");
        let booking = self.load_booking(booking_id).await?;
        let trip = self.load_trip(booking.trip_id).await?;

        let payments = self
            .payment_repo
            .list_by_booking(booking_id)
            .await
            .map_err(|err| {
                error!(%booking_id, db_error = ?err, "booking_payments: failed to list payments");
                BookingPaymentsError::Internal(err)
            })?;

        let records: Vec<PaymentRecord> = payments.iter().map(PaymentRecord::from).collect();
        let summary = calculate_balance(trip.price_cents, &records);

        info!(
            %booking_id,
            payment_count = payments.len(),
            balance = summary.balance,
            is_overpaid = summary.is_overpaid,
            "booking_payments: summary computed"
        );
        if summary.is_overpaid {
            warn!(%booking_id, balance = summary.balance, "booking_payments: booking is overpaid");
        }

        Ok(BookingPaymentsDto {
            booking_id,
            trip_id: trip.id,
            payments: payments.into_iter().map(PaymentDto::from).collect(),
            summary,
        })
    }

    pub async fn booking_payment_plan(&self, booking_id: Uuid) -> UseCaseResult<PaymentPlanDto> {
        info!(%booking_id, "booking_payments: generating payment plan for booking");
        let booking = self.load_booking(booking_id).await?;
        let trip = self.load_trip(booking.trip_id).await?;

        Ok(Self::plan_for(&trip))
    }

    pub async fn trip_payment_plan(&self, trip_id: Uuid) -> UseCaseResult<PaymentPlanDto> {
        info!(%trip_id, "booking_payments: generating payment plan preview for trip");
        let trip = self.load_trip(trip_id).await?;

        Ok(Self::plan_for(&trip))
    }

    pub async fn record_payment(
        &self,
        booking_id: Uuid,
        recorded_by: Uuid,
        model: RecordPaymentModel,
    ) -> UseCaseResult<PaymentDto> {
        info!(
            %booking_id,
            %recorded_by,
            amount_cents = model.amount_cents,
            method = %model.method,
            "booking_payments: recording payment"
        );

        if model.amount_cents <= 0 {
            return Err(BookingPaymentsError::InvalidPayment(
                "amount_cents must be positive".to_string(),
            ));
        }
        let method = PaymentMethod::from_str(&model.method).ok_or_else(|| {
            BookingPaymentsError::InvalidPayment(format!("unsupported method: {}", model.method))
        })?;

        let booking = self.load_booking(booking_id).await?;
        if BookingStatus::from_str(&booking.status) == BookingStatus::Cancelled {
            warn!(%booking_id, "booking_payments: refusing payment for cancelled booking");
            return Err(BookingPaymentsError::BookingCancelled);
        }

        let new_payment = NewPaymentEntity {
            booking_id,
            amount_cents: Some(model.amount_cents),
            payment_date: model
                .payment_date
                .unwrap_or_else(|| Utc::now().date_naive()),
            method: method.to_string(),
            note: model
                .note
                .map(|note| note.trim().to_string())
                .filter(|note| !note.is_empty()),
            recorded_by: Some(recorded_by),
        };

        let recorded = self
            .payment_repo
            .record_payment(new_payment)
            .await
            .map_err(|err| {
                error!(%booking_id, db_error = ?err, "booking_payments: failed to record payment");
                BookingPaymentsError::Internal(err)
            })?;

        info!(%booking_id, payment_id = %recorded.id, "booking_payments: payment recorded");
        Ok(PaymentDto::from(recorded))
    }

    pub async fn delete_payment(&self, booking_id: Uuid, payment_id: Uuid) -> UseCaseResult<()> {
        info!(%booking_id, %payment_id, "booking_payments: deleting payment");

        let deleted = self
            .payment_repo
            .delete_for_booking(booking_id, payment_id)
            .await
            .map_err(|err| {
                error!(
                    %booking_id,
                    %payment_id,
                    db_error = ?err,
                    "booking_payments: failed to delete payment"
                );
                BookingPaymentsError::Internal(err)
            })?;

        if !deleted {
            return Err(BookingPaymentsError::PaymentNotFound);
        }
        Ok(())
    }

    fn plan_for(trip: &TripEntity) -> PaymentPlanDto {
        PaymentPlanDto {
            trip_id: trip.id,
            trip_price_cents: trip.price_cents,
            trip_start_date: trip.start_date,
            installments: generate_payment_plan(trip.price_cents, trip.start_date),
        }
    }

    async fn load_booking(&self, booking_id: Uuid) -> UseCaseResult<BookingEntity> {
        self.booking_repo
            .find_by_id(booking_id)
            .await
            .map_err(|err| {
                error!(%booking_id, db_error = ?err, "booking_payments: failed to load booking");
                BookingPaymentsError::Internal(err)
            })?
            .ok_or(BookingPaymentsError::BookingNotFound)
    }

    async fn load_trip(&self, trip_id: Uuid) -> UseCaseResult<TripEntity> {
        self.trip_repo
            .find_by_id(trip_id)
            .await
            .map_err(|err| {
                error!(%trip_id, db_error = ?err, "booking_payments: failed to load trip");
                BookingPaymentsError::Internal(err)
            })?
            .ok_or(BookingPaymentsError::TripNotFound)
    }
}
