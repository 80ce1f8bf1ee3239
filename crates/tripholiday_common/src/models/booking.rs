// --- File: crates/tripholiday_common/src/models/booking.rs ---
use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

string_enum! {
    /// Whether flights are part of the package.
    PackageOption, "package option" {
        WithFlight => "with-flight",
        WithoutFlight => "without-flight",
    }
}

string_enum! {
    HotelCategory, "hotel category" {
        ThreeStar => "3star",
        FourStar => "4star",
        FiveStar => "5star",
        Boutique => "boutique",
        Resort => "resort",
    }
}

string_enum! {
    RoomCategory, "room category" {
        Standard => "standard",
        Deluxe => "deluxe",
        Suite => "suite",
        Villa => "villa",
    }
}

string_enum! {
    VehicleType, "vehicle type" {
        Sedan => "sedan",
        Suv => "suv",
        Tempo => "tempo",
        Bus => "bus",
        Luxury => "luxury",
    }
}

string_enum! {
    FlightClass, "flight class" {
        Economy => "economy",
        PremiumEconomy => "premium-economy",
        Business => "business",
        First => "first",
    }
}

string_enum! {
    PaymentStatus, "payment status" {
        Pending => "pending",
        Partial => "partial",
        Completed => "completed",
        Failed => "failed",
        Refunded => "refunded",
    }
}

string_enum! {
    PaymentMethod, "payment method" {
        CreditCard => "credit-card",
        DebitCard => "debit-card",
        Upi => "upi",
        Netbanking => "netbanking",
        Wallet => "wallet",
        Emi => "emi",
        PayLater => "pay-later",
    }
}

string_enum! {
    BookingStatus, "booking status" {
        Pending => "pending",
        Confirmed => "confirmed",
        Cancelled => "cancelled",
        Completed => "completed",
    }
}

pub const DEFAULT_PACKAGE_NAME: &str = "Dubai Luxury Escape";

/// Days a guest has to settle the pending amount.
pub const PAYMENT_DUE_DAYS: i64 = 7;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct GuestDetails {
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub passport_number: Option<String>,
    #[serde(
        default,
        with = "crate::models::date_format::option",
        skip_serializing_if = "Option::is_none"
    )]
    #[cfg_attr(feature = "openapi", schema(value_type = Option<String>, format = Date))]
    pub passport_expiry: Option<NaiveDate>,
}

fn default_package_name() -> String {
    DEFAULT_PACKAGE_NAME.to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct PackageDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package_id: Option<String>,
    pub package_type: PackageOption,
    #[serde(default = "default_package_name")]
    pub package_name: String,
    pub base_price: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct TravelerDetail {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct TravelerGroup {
    #[serde(default)]
    pub count: u32,
    #[serde(default)]
    pub details: Vec<TravelerDetail>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Travelers {
    pub adults: TravelerGroup,
    #[serde(default)]
    pub children: TravelerGroup,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct HotelDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<HotelCategory>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room_category: Option<RoomCategory>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_rooms: Option<u32>,
    #[serde(
        default,
        with = "crate::models::date_format::option",
        skip_serializing_if = "Option::is_none"
    )]
    #[cfg_attr(feature = "openapi", schema(value_type = Option<String>, format = Date))]
    pub check_in_date: Option<NaiveDate>,
    #[serde(
        default,
        with = "crate::models::date_format::option",
        skip_serializing_if = "Option::is_none"
    )]
    #[cfg_attr(feature = "openapi", schema(value_type = Option<String>, format = Date))]
    pub check_out_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct VehicleDetails {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub vehicle_type: Option<VehicleType>,
    #[serde(default)]
    pub price: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct FlightDetails {
    #[serde(
        default,
        with = "crate::models::date_format::option",
        skip_serializing_if = "Option::is_none"
    )]
    #[cfg_attr(feature = "openapi", schema(value_type = Option<String>, format = Date))]
    pub departure_date: Option<NaiveDate>,
    #[serde(
        default,
        with = "crate::models::date_format::option",
        skip_serializing_if = "Option::is_none"
    )]
    #[cfg_attr(feature = "openapi", schema(value_type = Option<String>, format = Date))]
    pub return_date: Option<NaiveDate>,
    #[serde(rename = "class", default, skip_serializing_if = "Option::is_none")]
    pub flight_class: Option<FlightClass>,
}

/// Price breakdown in rupees, as computed by the booking form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Pricing {
    pub base_price: f64,
    pub travelers_charge: f64,
    #[serde(default)]
    pub vehicle_charge: f64,
    #[serde(default)]
    pub hotel_upgrade: f64,
    #[serde(default)]
    pub activities: f64,
    #[serde(default)]
    pub taxes: f64,
    #[serde(default)]
    pub discount: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coupon_code: Option<String>,
    pub total_amount: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct PaymentTransaction {
    pub amount: f64,
    pub status: String,
    pub date: DateTime<Utc>,
    pub payment_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<PaymentMethod>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct PaymentInfo {
    pub status: PaymentStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<PaymentMethod>,
    pub paid_amount: f64,
    pub pending_amount: f64,
    pub is_partial_payment: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub razorpay_order_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub razorpay_payment_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub razorpay_signature: Option<String>,
    /// Every gateway order opened for this booking, oldest first.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub order_ids: Vec<String>,
    #[serde(default)]
    pub transactions: Vec<PaymentTransaction>,
}

impl PaymentInfo {
    /// Nothing paid yet, everything pending.
    pub fn unpaid(total_amount: f64, method: Option<PaymentMethod>) -> Self {
        Self {
            status: PaymentStatus::Pending,
            method,
            paid_amount: 0.0,
            pending_amount: total_amount,
            is_partial_payment: false,
            razorpay_order_id: None,
            razorpay_payment_id: None,
            razorpay_signature: None,
            order_ids: Vec::new(),
            transactions: Vec::new(),
        }
    }

    /// Remembers a newly opened gateway order. Earlier orders stay payable.
    pub fn record_order(&mut self, order_id: &str) {
        if !self.order_ids.iter().any(|id| id == order_id) {
            self.order_ids.push(order_id.to_string());
        }
        self.razorpay_order_id = Some(order_id.to_string());
    }

    /// With no recorded orders any order is accepted.
    pub fn accepts_order(&self, order_id: &str) -> bool {
        self.order_ids.is_empty() || self.order_ids.iter().any(|id| id == order_id)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct NotificationFlags {
    #[serde(default)]
    pub email_sent: bool,
    #[serde(default)]
    pub sms_sent: bool,
    #[serde(default)]
    pub pending_payment_reminder_sent: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Activity {
    pub name: String,
    #[serde(default)]
    pub included: bool,
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Meals {
    #[serde(default = "default_true")]
    pub breakfast: bool,
    #[serde(default)]
    pub lunch: bool,
    #[serde(default)]
    pub dinner: bool,
}

impl Default for Meals {
    fn default() -> Self {
        Self {
            breakfast: true,
            lunch: false,
            dinner: false,
        }
    }
}

/// A guest's reservation as stored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Booking {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    pub guest_details: GuestDetails,
    pub package_details: PackageDetails,
    pub travelers: Travelers,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hotel_details: Option<HotelDetails>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vehicle_details: Option<VehicleDetails>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flight_details: Option<FlightDetails>,
    pub pricing: Pricing,
    pub payment: PaymentInfo,
    #[serde(default)]
    pub notifications: NotificationFlags,
    pub booking_status: BookingStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub special_requests: Option<String>,
    #[serde(default)]
    pub activities: Vec<Activity>,
    #[serde(default)]
    pub meals: Meals,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// What is still owed on a booking and by when.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct PendingPaymentDetails {
    pub amount: f64,
    pub due_date: DateTime<Utc>,
    pub booking_reference: String,
}

impl Booking {
    /// `TH` followed by the last eight characters of the id, uppercased.
    pub fn booking_reference(&self) -> String {
        booking_reference_for(&self.id)
    }

    pub fn total_travelers(&self) -> u32 {
        self.travelers.adults.count + self.travelers.children.count
    }

    pub fn is_payment_complete(&self) -> bool {
        self.payment.status == PaymentStatus::Completed || self.payment.pending_amount == 0.0
    }

    pub fn payment_due_date(&self) -> DateTime<Utc> {
        self.created_at + Duration::days(PAYMENT_DUE_DAYS)
    }

    pub fn pending_payment_details(&self) -> Option<PendingPaymentDetails> {
        (self.payment.pending_amount > 0.0).then(|| PendingPaymentDetails {
            amount: self.payment.pending_amount,
            due_date: self.payment_due_date(),
            booking_reference: self.booking_reference(),
        })
    }
}

pub fn booking_reference_for(id: &str) -> String {
    let start = id
        .char_indices()
        .rev()
        .nth(7)
        .map(|(idx, _)| idx)
        .unwrap_or(0);
    format!("TH{}", id[start..].to_uppercase())
}

/// A booking as returned by the API, with the derived fields filled in.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct BookingView {
    #[serde(flatten)]
    pub booking: Booking,
    pub booking_reference: String,
    pub total_travelers: u32,
    pub is_payment_complete: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pending_payment_details: Option<PendingPaymentDetails>,
}

impl From<Booking> for BookingView {
    fn from(booking: Booking) -> Self {
        Self {
            booking_reference: booking.booking_reference(),
            total_travelers: booking.total_travelers(),
            is_payment_complete: booking.is_payment_complete(),
            pending_payment_details: booking.pending_payment_details(),
            booking,
        }
    }
}

/// The only part of `payment` a client may choose when booking.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct PaymentPreference {
    #[serde(default)]
    pub method: Option<PaymentMethod>,
}

/// Body of `POST /api/bookings/create`.
///
/// Payment, notification and status state are owned by the server, so
/// they are not accepted here.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CreateBookingRequest {
    #[serde(default)]
    pub user_id: Option<String>,
    pub guest_details: GuestDetails,
    pub package_details: PackageDetails,
    pub travelers: Travelers,
    #[serde(default)]
    pub hotel_details: Option<HotelDetails>,
    #[serde(default)]
    pub vehicle_details: Option<VehicleDetails>,
    #[serde(default)]
    pub flight_details: Option<FlightDetails>,
    pub pricing: Pricing,
    #[serde(default)]
    pub payment: Option<PaymentPreference>,
    #[serde(default)]
    pub special_requests: Option<String>,
    #[serde(default)]
    pub activities: Vec<Activity>,
    #[serde(default)]
    pub meals: Option<Meals>,
}
