pub mod booking_statuses;
pub mod payment_methods;
