// --- File: crates/tripholiday_bookings/src/routes.rs ---

use crate::handlers::{
    cancel_booking_handler, create_booking_handler, create_payment_order_handler,
    get_booking_handler, send_reminder_handler, update_status_handler, user_bookings_handler,
    verify_payment_handler,
};
use crate::logic::BookingsState;
use axum::{
    routing::{get, patch, post},
    Router,
};
use std::sync::Arc;

/// Creates the booking and checkout routes.
pub fn routes(state: Arc<BookingsState>) -> Router {
    Router::new()
        .route("/bookings/create", post(create_booking_handler))
        .route(
            "/bookings/create-razorpay-order",
            post(create_payment_order_handler),
        )
        .route("/bookings/verify-payment", post(verify_payment_handler))
        .route("/bookings/user/{email}", get(user_bookings_handler))
        .route(
            "/bookings/send-reminder/{booking_id}",
            post(send_reminder_handler),
        )
        .route("/bookings/{booking_id}", get(get_booking_handler))
        .route("/bookings/{booking_id}/status", patch(update_status_handler))
        .route("/bookings/{booking_id}/cancel", post(cancel_booking_handler))
        .with_state(state)
}
