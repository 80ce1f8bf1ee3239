// --- File: crates/tripholiday_bookings/src/handlers.rs ---
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use serde_json::json;
use std::sync::Arc;
use tracing::{info, warn};
use tripholiday_common::models::{Booking, BookingView, CreateBookingRequest};
use tripholiday_common::services::{BoxedError, PaymentGateway, PaymentOrderRequest};
use tripholiday_common::{
    not_found, service_unavailable, validation_error, ApiMessage, JsonBody, TripError,
};

use crate::logic::{
    apply_payment, build_booking, cancel, order_amount_paise, parse_status,
    BookingCreatedResponse, BookingResponse, BookingsResponse, BookingsState, PaymentOrderBody,
    PaymentOrderResponse, PaymentOutcome, PaymentSummary, ReminderResponse, StatusUpdateBody,
    VerifiedPayment, VerifyPaymentBody, VerifyPaymentResponse,
};

const BOOKING_NOT_FOUND: &str = "Booking not found";

fn gateway(state: &BookingsState) -> Result<Arc<dyn PaymentGateway<Error = BoxedError>>, TripError> {
    state
        .services
        .payment_gateway()
        .ok_or_else(|| service_unavailable("Payment gateway is not configured"))
}

async fn load_booking(state: &BookingsState, id: &str) -> Result<Booking, TripError> {
    state
        .bookings
        .find_by_id(id.trim())
        .await?
        .ok_or_else(|| not_found(BOOKING_NOT_FOUND))
}

async fn save_booking(state: &BookingsState, booking: &Booking) -> Result<(), TripError> {
    if state.bookings.update(booking).await? {
        Ok(())
    } else {
        Err(not_found(BOOKING_NOT_FOUND))
    }
}

/// Step one of checkout: store the guest's booking, unpaid.
#[cfg_attr(feature = "openapi", utoipa::path(
    post,
    path = "/bookings/create",
    request_body = CreateBookingRequest,
    responses(
        (status = 201, description = "Booking stored", body = BookingCreatedResponse),
        (status = 400, description = "Missing or invalid booking details")
    ),
    tag = "Bookings"
))]
pub async fn create_booking_handler(
    State(state): State<Arc<BookingsState>>,
    JsonBody(request): JsonBody<CreateBookingRequest>,
) -> Result<impl IntoResponse, TripError> {
    let booking = build_booking(request, Utc::now())?;
    state.bookings.insert(&booking).await?;

    let reference = booking.booking_reference();
    info!(
        booking = %reference,
        package = %booking.package_details.package_name,
        total = booking.pricing.total_amount,
        "Booking created"
    );

    Ok((
        StatusCode::CREATED,
        Json(BookingCreatedResponse {
            success: true,
            message: "Booking created successfully".to_string(),
            booking_id: booking.id,
            booking_reference: reference,
        }),
    ))
}

/// Opens a gateway order for (part of) a booking's amount.
#[cfg_attr(feature = "openapi", utoipa::path(
    post,
    path = "/bookings/create-razorpay-order",
    request_body = PaymentOrderBody,
    responses(
        (status = 200, description = "Order created", body = PaymentOrderResponse),
        (status = 400, description = "Missing booking id or non-positive amount"),
        (status = 404, description = "Booking not found"),
        (status = 502, description = "The gateway rejected the order"),
        (status = 503, description = "Payment gateway is not configured")
    ),
    tag = "Bookings"
))]
pub async fn create_payment_order_handler(
    State(state): State<Arc<BookingsState>>,
    JsonBody(body): JsonBody<PaymentOrderBody>,
) -> Result<Json<PaymentOrderResponse>, TripError> {
    let (Some(amount), Some(booking_id)) = (body.amount, body.booking_id) else {
        return Err(validation_error("Please provide amount and bookingId"));
    };
    let paise = order_amount_paise(amount)?;
    let gateway = gateway(&state)?;
    let mut booking = load_booking(&state, &booking_id).await?;

    let order = gateway
        .create_order(PaymentOrderRequest {
            amount: paise,
            currency: gateway.currency().to_string(),
            receipt: format!("booking_{}", booking.id),
            notes: json!({ "bookingId": booking.id }),
        })
        .await?;

    booking.payment.record_order(&order.id);
    booking.updated_at = Utc::now();
    save_booking(&state, &booking).await?;
    info!(booking = %booking.booking_reference(), order = %order.id, paise, "Payment order created");

    Ok(Json(PaymentOrderResponse {
        success: true,
        order,
        key: gateway.key_id().to_string(),
    }))
}

/// Records a payment once its gateway signature checks out, then notifies the guest.
#[cfg_attr(feature = "openapi", utoipa::path(
    post,
    path = "/bookings/verify-payment",
    request_body = VerifyPaymentBody,
    responses(
        (status = 200, description = "Payment recorded", body = VerifyPaymentResponse),
        (status = 400, description = "Invalid payment signature, order mismatch or bad amount"),
        (status = 404, description = "Booking not found"),
        (status = 503, description = "Payment gateway is not configured")
    ),
    tag = "Bookings"
))]
pub async fn verify_payment_handler(
    State(state): State<Arc<BookingsState>>,
    JsonBody(body): JsonBody<VerifyPaymentBody>,
) -> Result<Json<VerifyPaymentResponse>, TripError> {
    let (Some(order_id), Some(payment_id), Some(signature), Some(booking_id)) = (
        body.razorpay_order_id,
        body.razorpay_payment_id,
        body.razorpay_signature,
        body.booking_id,
    ) else {
        return Err(validation_error(
            "Please provide razorpay_order_id, razorpay_payment_id, razorpay_signature and bookingId",
        ));
    };

    let gateway = gateway(&state)?;
    if !gateway.verify_payment_signature(&order_id, &payment_id, &signature) {
        warn!(order = %order_id, payment = %payment_id, "Rejected payment with a bad signature");
        return Err(validation_error("Invalid payment signature"));
    }

    let mut booking = load_booking(&state, &booking_id).await?;
    let payment = VerifiedPayment {
        order_id,
        payment_id,
        signature,
        amount: body.paid_amount.unwrap_or(0.0),
        method: body.payment_method,
    };

    match apply_payment(&mut booking, &payment, Utc::now())? {
        PaymentOutcome::AlreadyRecorded => {
            info!(payment = %payment.payment_id, "Payment already recorded");
        }
        PaymentOutcome::Applied => {
            save_booking(&state, &booking).await?;
            info!(
                booking = %booking.booking_reference(),
                paid = booking.payment.paid_amount,
                pending = booking.payment.pending_amount,
                "Payment recorded"
            );

            match state.services.booking_notifier().send_confirmation(&booking).await {
                Ok(outcome) => {
                    booking.notifications.email_sent = outcome.email;
                    booking.notifications.sms_sent = outcome.sms;
                    if let Err(e) = state.bookings.update(&booking).await {
                        warn!("Could not record notification flags: {}", e);
                    }
                }
                Err(e) => warn!("Confirmation notifications failed: {}", e),
            }
        }
    }

    Ok(Json(VerifyPaymentResponse {
        success: true,
        message: "Payment verified successfully".to_string(),
        booking: PaymentSummary::from(&booking),
    }))
}

#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/bookings/{bookingId}",
    params(("bookingId" = String, Path, description = "Booking id")),
    responses(
        (status = 200, description = "The booking", body = BookingResponse),
        (status = 404, description = "Booking not found")
    ),
    tag = "Bookings"
))]
pub async fn get_booking_handler(
    State(state): State<Arc<BookingsState>>,
    Path(booking_id): Path<String>,
) -> Result<Json<BookingResponse>, TripError> {
    let booking = load_booking(&state, &booking_id).await?;
    Ok(Json(BookingResponse {
        success: true,
        message: None,
        booking: BookingView::from(booking),
    }))
}

#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/bookings/user/{email}",
    params(("email" = String, Path, description = "Guest email")),
    responses((status = 200, description = "The guest's bookings, newest first", body = BookingsResponse)),
    tag = "Bookings"
))]
pub async fn user_bookings_handler(
    State(state): State<Arc<BookingsState>>,
    Path(email): Path<String>,
) -> Result<Json<BookingsResponse>, TripError> {
    let bookings = state
        .bookings
        .find_by_email(&email.trim().to_lowercase())
        .await?;
    Ok(Json(BookingsResponse::from(bookings)))
}

#[cfg_attr(feature = "openapi", utoipa::path(
    post,
    path = "/bookings/send-reminder/{bookingId}",
    params(("bookingId" = String, Path, description = "Booking id")),
    responses(
        (status = 200, description = "Reminder sent", body = ReminderResponse),
        (status = 400, description = "No pending payment for this booking"),
        (status = 404, description = "Booking not found")
    ),
    tag = "Bookings"
))]
pub async fn send_reminder_handler(
    State(state): State<Arc<BookingsState>>,
    Path(booking_id): Path<String>,
) -> Result<Json<ReminderResponse>, TripError> {
    let mut booking = load_booking(&state, &booking_id).await?;
    if booking.payment.pending_amount <= 0.0 {
        return Err(validation_error("No pending payment for this booking"));
    }

    let outcome = state
        .services
        .booking_notifier()
        .send_payment_reminder(&booking)
        .await?;

    booking.notifications.pending_payment_reminder_sent = true;
    booking.updated_at = Utc::now();
    save_booking(&state, &booking).await?;

    Ok(Json(ReminderResponse {
        success: true,
        message: "Payment reminder sent successfully".to_string(),
        notifications: outcome,
    }))
}

#[cfg_attr(feature = "openapi", utoipa::path(
    patch,
    path = "/bookings/{bookingId}/status",
    params(("bookingId" = String, Path, description = "Booking id")),
    request_body = StatusUpdateBody,
    responses(
        (status = 200, description = "Status updated", body = BookingResponse),
        (status = 400, description = "Missing or unknown status"),
        (status = 404, description = "Booking not found")
    ),
    tag = "Bookings"
))]
pub async fn update_status_handler(
    State(state): State<Arc<BookingsState>>,
    Path(booking_id): Path<String>,
    JsonBody(body): JsonBody<StatusUpdateBody>,
) -> Result<Json<BookingResponse>, TripError> {
    let status = parse_status(body.status.as_deref())?;
    let mut booking = load_booking(&state, &booking_id).await?;

    booking.booking_status = status;
    booking.updated_at = Utc::now();
    save_booking(&state, &booking).await?;
    info!(booking = %booking.booking_reference(), %status, "Booking status changed");

    Ok(Json(BookingResponse {
        success: true,
        message: Some("Booking status updated successfully".to_string()),
        booking: BookingView::from(booking),
    }))
}

#[cfg_attr(feature = "openapi", utoipa::path(
    post,
    path = "/bookings/{bookingId}/cancel",
    params(("bookingId" = String, Path, description = "Booking id")),
    responses(
        (status = 200, description = "Booking cancelled", body = ApiMessage),
        (status = 400, description = "This booking cannot be cancelled"),
        (status = 404, description = "Booking not found")
    ),
    tag = "Bookings"
))]
pub async fn cancel_booking_handler(
    State(state): State<Arc<BookingsState>>,
    Path(booking_id): Path<String>,
) -> Result<Json<ApiMessage>, TripError> {
    let mut booking = load_booking(&state, &booking_id).await?;
    cancel(&mut booking, Utc::now())?;
    save_booking(&state, &booking).await?;
    info!(booking = %booking.booking_reference(), "Booking cancelled");

    Ok(Json(ApiMessage::ok("Booking cancelled successfully")))
}
