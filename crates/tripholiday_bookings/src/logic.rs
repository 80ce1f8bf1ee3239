// --- File: crates/tripholiday_bookings/src/logic.rs ---
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tripholiday_common::models::{
    non_blank, Booking, BookingStatus, BookingView, CreateBookingRequest, NotificationFlags,
    PaymentInfo, PaymentMethod, PaymentStatus, PaymentTransaction, Pricing, DEFAULT_PACKAGE_NAME,
};
use tripholiday_common::services::{NotificationOutcome, PaymentOrder, ServiceFactory};
use tripholiday_common::{validation_error, TripError};
use tripholiday_db::BookingRepository;
use uuid::Uuid;

pub const TRANSACTION_SUCCESS: &str = "success";

/// State shared by the booking handlers.
#[derive(Clone)]
pub struct BookingsState {
    pub bookings: Arc<dyn BookingRepository>,
    pub services: Arc<dyn ServiceFactory>,
}

// --- Request / response bodies ---

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct BookingCreatedResponse {
    pub success: bool,
    pub message: String,
    pub booking_id: String,
    pub booking_reference: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct PaymentOrderBody {
    /// Rupees.
    pub amount: Option<f64>,
    pub booking_id: Option<String>,
}

#[derive(Debug, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct PaymentOrderResponse {
    pub success: bool,
    pub order: PaymentOrder,
    /// Public key the checkout widget is opened with.
    pub key: String,
}

/// What the checkout widget posts back, plus the amount the guest chose to pay.
#[derive(Debug, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct VerifyPaymentBody {
    pub razorpay_order_id: Option<String>,
    pub razorpay_payment_id: Option<String>,
    pub razorpay_signature: Option<String>,
    #[serde(rename = "bookingId")]
    pub booking_id: Option<String>,
    #[serde(rename = "paidAmount")]
    pub paid_amount: Option<f64>,
    #[serde(rename = "paymentMethod", default)]
    pub payment_method: Option<PaymentMethod>,
}

#[derive(Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct PaymentSummary {
    pub booking_reference: String,
    pub paid_amount: f64,
    pub pending_amount: f64,
    pub status: PaymentStatus,
}

impl From<&Booking> for PaymentSummary {
    fn from(booking: &Booking) -> Self {
        Self {
            booking_reference: booking.booking_reference(),
            paid_amount: booking.payment.paid_amount,
            pending_amount: booking.payment.pending_amount,
            status: booking.payment.status,
        }
    }
}

#[derive(Debug, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct VerifyPaymentResponse {
    pub success: bool,
    pub message: String,
    pub booking: PaymentSummary,
}

#[derive(Debug, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct BookingResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub booking: BookingView,
}

#[derive(Debug, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct BookingsResponse {
    pub success: bool,
    pub bookings: Vec<BookingView>,
}

impl From<Vec<Booking>> for BookingsResponse {
    fn from(bookings: Vec<Booking>) -> Self {
        Self {
            success: true,
            bookings: bookings.into_iter().map(BookingView::from).collect(),
        }
    }
}

#[derive(Debug, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ReminderResponse {
    pub success: bool,
    pub message: String,
    pub notifications: NotificationOutcome,
}

#[derive(Debug, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct StatusUpdateBody {
    pub status: Option<String>,
}

// --- Booking creation ---

/// A 24 character hex id: creation time in seconds followed by random bits.
pub fn new_booking_id(now: DateTime<Utc>) -> String {
    let random = Uuid::new_v4().simple().to_string();
    format!("{:08x}{}", now.timestamp() as u32, &random[..16])
}

fn check_amount(value: f64, field: &str) -> Result<(), TripError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(validation_error(format!("{} must be a non-negative amount", field)))
    }
}

fn check_pricing(pricing: &Pricing) -> Result<(), TripError> {
    check_amount(pricing.base_price, "pricing.basePrice")?;
    check_amount(pricing.travelers_charge, "pricing.travelersCharge")?;
    check_amount(pricing.vehicle_charge, "pricing.vehicleCharge")?;
    check_amount(pricing.hotel_upgrade, "pricing.hotelUpgrade")?;
    check_amount(pricing.activities, "pricing.activities")?;
    check_amount(pricing.taxes, "pricing.taxes")?;
    check_amount(pricing.discount, "pricing.discount")?;
    check_amount(pricing.total_amount, "pricing.totalAmount")
}

/// Validates a booking request and turns it into a new, unpaid booking.
///
/// Nothing is paid yet, so the whole total is pending.
pub fn build_booking(
    request: CreateBookingRequest,
    now: DateTime<Utc>,
) -> Result<Booking, TripError> {
    let mut guest = request.guest_details;
    let (Some(name), Some(email), Some(phone)) = (
        non_blank(Some(guest.name)),
        non_blank(Some(guest.email)),
        non_blank(Some(guest.phone)),
    ) else {
        return Err(validation_error("Please provide guest name, email and phone"));
    };
    guest.name = name;
    guest.email = email.to_lowercase();
    guest.phone = phone;
    guest.address = non_blank(guest.address);
    guest.passport_number = non_blank(guest.passport_number);

    let mut package = request.package_details;
    check_amount(package.base_price, "packageDetails.basePrice")?;
    package.package_name =
        non_blank(Some(package.package_name)).unwrap_or_else(|| DEFAULT_PACKAGE_NAME.to_string());
    package.package_id = non_blank(package.package_id).map(|id| id.to_lowercase());

    if request.travelers.adults.count < 1 {
        return Err(validation_error("At least one adult traveler is required"));
    }

    if let Some(hotel) = &request.hotel_details {
        if hotel.num_rooms == Some(0) {
            return Err(validation_error("hotelDetails.numRooms must be at least 1"));
        }
        if let (Some(check_in), Some(check_out)) = (hotel.check_in_date, hotel.check_out_date) {
            if check_out < check_in {
                return Err(validation_error(
                    "Check-out date cannot be before check-in date",
                ));
            }
        }
    }
    if let Some(vehicle) = &request.vehicle_details {
        check_amount(vehicle.price, "vehicleDetails.price")?;
    }
    check_pricing(&request.pricing)?;

    let method = request.payment.and_then(|p| p.method);
    let total = request.pricing.total_amount;

    Ok(Booking {
        id: new_booking_id(now),
        user_id: non_blank(request.user_id),
        guest_details: guest,
        package_details: package,
        travelers: request.travelers,
        hotel_details: request.hotel_details,
        vehicle_details: request.vehicle_details,
        flight_details: request.flight_details,
        pricing: request.pricing,
        payment: PaymentInfo::unpaid(total, method),
        notifications: NotificationFlags::default(),
        booking_status: BookingStatus::Pending,
        special_requests: non_blank(request.special_requests),
        activities: request.activities,
        meals: request.meals.unwrap_or_default(),
        created_at: now,
        updated_at: now,
    })
}

// --- Payments ---

/// Converts a rupee amount into the paise the gateway expects.
pub fn order_amount_paise(amount: f64) -> Result<i64, TripError> {
    if !amount.is_finite() || amount <= 0.0 {
        return Err(validation_error("Amount must be greater than zero"));
    }
    Ok((amount * 100.0).round() as i64)
}

/// A payment the gateway has vouched for.
#[derive(Debug, Clone, PartialEq)]
pub struct VerifiedPayment {
    pub order_id: String,
    pub payment_id: String,
    pub signature: String,
    pub amount: f64,
    pub method: Option<PaymentMethod>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentOutcome {
    Applied,
    /// The payment id is already on the booking; nothing changed.
    AlreadyRecorded,
}

/// Books a verified payment against `booking`.
///
/// Once nothing is pending the payment is completed and the booking
/// confirmed; otherwise the booking stays as it was with a partial payment.
pub fn apply_payment(
    booking: &mut Booking,
    payment: &VerifiedPayment,
    now: DateTime<Utc>,
) -> Result<PaymentOutcome, TripError> {
    if booking
        .payment
        .transactions
        .iter()
        .any(|t| t.payment_id == payment.payment_id)
    {
        return Ok(PaymentOutcome::AlreadyRecorded);
    }
    if !booking.payment.accepts_order(&payment.order_id) {
        return Err(validation_error("Payment order does not match this booking"));
    }
    if !payment.amount.is_finite() || payment.amount <= 0.0 {
        return Err(validation_error("Paid amount must be greater than zero"));
    }

    let info = &mut booking.payment;
    info.razorpay_order_id = Some(payment.order_id.clone());
    info.razorpay_payment_id = Some(payment.payment_id.clone());
    info.razorpay_signature = Some(payment.signature.clone());
    info.paid_amount += payment.amount;
    info.pending_amount = booking.pricing.total_amount - info.paid_amount;
    if payment.method.is_some() {
        info.method = payment.method;
    }
    info.transactions.push(PaymentTransaction {
        amount: payment.amount,
        status: TRANSACTION_SUCCESS.to_string(),
        date: now,
        payment_id: payment.payment_id.clone(),
        method: payment.method,
    });

    if info.pending_amount <= 0.0 {
        info.status = PaymentStatus::Completed;
        booking.booking_status = BookingStatus::Confirmed;
    } else {
        info.status = PaymentStatus::Partial;
        info.is_partial_payment = true;
    }
    booking.updated_at = now;
    Ok(PaymentOutcome::Applied)
}

// --- Status changes ---

pub fn parse_status(raw: Option<&str>) -> Result<BookingStatus, TripError> {
    let raw = raw
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| validation_error("Please provide a booking status"))?;
    raw.parse()
}

pub fn cancel(booking: &mut Booking, now: DateTime<Utc>) -> Result<(), TripError> {
    match booking.booking_status {
        BookingStatus::Completed | BookingStatus::Cancelled => {
            Err(validation_error("This booking cannot be cancelled"))
        }
        _ => {
            booking.booking_status = BookingStatus::Cancelled;
            booking.updated_at = now;
            Ok(())
        }
    }
}
