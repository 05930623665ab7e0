pub mod booking_payments;
pub mod enums;
pub mod payment_calculator;
