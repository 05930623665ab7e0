pub mod booking_payments;
