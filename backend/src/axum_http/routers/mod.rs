pub mod booking_payments;
pub mod trips;
