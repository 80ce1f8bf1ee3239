// --- File: crates/tripholiday_bookings/src/doc.rs ---
#![cfg(feature = "openapi")]
use utoipa::OpenApi;

use crate::logic::{
    BookingCreatedResponse, BookingResponse, BookingsResponse, PaymentOrderBody,
    PaymentOrderResponse, PaymentSummary, ReminderResponse, StatusUpdateBody, VerifyPaymentBody,
    VerifyPaymentResponse,
};
use tripholiday_common::models::{
    Activity, Booking, BookingStatus, BookingView, CreateBookingRequest, FlightClass,
    FlightDetails, GuestDetails, HotelCategory, HotelDetails, Meals, NotificationFlags,
    PackageDetails, PackageOption, PaymentInfo, PaymentMethod, PaymentPreference, PaymentStatus,
    PaymentTransaction, PendingPaymentDetails, Pricing, RoomCategory, TravelerDetail,
    TravelerGroup, Travelers, VehicleDetails, VehicleType,
};
use tripholiday_common::services::{NotificationOutcome, PaymentOrder};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::create_booking_handler,
        crate::handlers::create_payment_order_handler,
        crate::handlers::verify_payment_handler,
        crate::handlers::get_booking_handler,
        crate::handlers::user_bookings_handler,
        crate::handlers::send_reminder_handler,
        crate::handlers::update_status_handler,
        crate::handlers::cancel_booking_handler
    ),
    components(
        schemas(
            Booking, BookingView, CreateBookingRequest, GuestDetails, PackageDetails, Travelers,
            TravelerGroup, TravelerDetail, HotelDetails, VehicleDetails, FlightDetails, Pricing,
            PaymentInfo, PaymentTransaction, PaymentPreference, NotificationFlags, Activity, Meals,
            PendingPaymentDetails, PackageOption, HotelCategory, RoomCategory, VehicleType,
            FlightClass, PaymentStatus, PaymentMethod, BookingStatus,
            BookingCreatedResponse, PaymentOrderBody, PaymentOrderResponse, PaymentOrder,
            VerifyPaymentBody, VerifyPaymentResponse, PaymentSummary, BookingResponse,
            BookingsResponse, ReminderResponse, StatusUpdateBody, NotificationOutcome,
            tripholiday_common::ApiMessage
        )
    ),
    tags(
        (name = "Bookings", description = "Booking, checkout and payment reminders")
    )
)]
pub struct BookingsApiDoc;
