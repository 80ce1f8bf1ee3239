// --- File: crates/tripholiday_bookings/src/logic_test.rs ---
#[cfg(test)]
mod tests {
    use crate::logic::*;
    use chrono::{TimeZone, Utc};
    use proptest::prelude::*;
    use serde_json::json;
    use tripholiday_common::models::{
        BookingStatus, CreateBookingRequest, PaymentMethod, PaymentStatus, DEFAULT_PACKAGE_NAME,
    };
    use tripholiday_common::HttpStatusCode;

    fn request(total: f64) -> CreateBookingRequest {
        serde_json::from_value(json!({
            "guestDetails": {
                "name": " Asha Verma ",
                "email": " Asha@Example.COM ",
                "phone": "9876543210",
                "address": "  "
            },
            "packageDetails": { "packageId": "Dubai", "packageType": "with-flight", "packageName": "", "basePrice": 150000 },
            "travelers": { "adults": { "count": 2 }, "children": { "count": 1 } },
            "hotelDetails": { "category": "5star", "numRooms": 1, "checkInDate": "2026-12-20", "checkOutDate": "2026-12-25" },
            "pricing": { "basePrice": 150000, "travelersCharge": 25000, "taxes": 5000, "totalAmount": total },
            "payment": { "method": "upi" },
            "meals": { "breakfast": true, "dinner": true }
        }))
        .unwrap()
    }

    fn now() -> chrono::DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 18, 10, 0, 0).unwrap()
    }

    fn payment(payment_id: &str, amount: f64) -> VerifiedPayment {
        VerifiedPayment {
            order_id: "order_1".into(),
            payment_id: payment_id.into(),
            signature: "sig".into(),
            amount,
            method: Some(PaymentMethod::Upi),
        }
    }

    #[test]
    fn test_new_booking_id_is_24_hex_chars() {
        let id = new_booking_id(now());
        assert_eq!(id.len(), 24);
        assert!(id.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
        assert!(id.starts_with(&format!("{:08x}", now().timestamp() as u32)));
        assert_ne!(id, new_booking_id(now()));
    }

    #[test]
    fn test_build_booking_normalizes_and_starts_unpaid() {
        let booking = build_booking(request(180000.0), now()).unwrap();

        assert_eq!(booking.guest_details.name, "Asha Verma");
        assert_eq!(booking.guest_details.email, "asha@example.com");
        assert_eq!(booking.guest_details.address, None);
        assert_eq!(booking.package_details.package_name, DEFAULT_PACKAGE_NAME);
        assert_eq!(booking.package_details.package_id.as_deref(), Some("dubai"));
        assert_eq!(booking.payment.status, PaymentStatus::Pending);
        assert_eq!(booking.payment.method, Some(PaymentMethod::Upi));
        assert_eq!(booking.payment.paid_amount, 0.0);
        assert_eq!(booking.payment.pending_amount, 180000.0);
        assert_eq!(booking.booking_status, BookingStatus::Pending);
        assert!(booking.meals.dinner);
        assert_eq!(booking.total_travelers(), 3);
        assert_eq!(booking.created_at, now());
    }

    #[test]
    fn test_build_booking_rejects_bad_input() {
        let mut missing_phone = request(1000.0);
        missing_phone.guest_details.phone = "  ".into();
        let err = build_booking(missing_phone, now()).unwrap_err();
        assert_eq!(err.to_string(), "Please provide guest name, email and phone");

        let mut no_adults = request(1000.0);
        no_adults.travelers.adults.count = 0;
        assert_eq!(build_booking(no_adults, now()).unwrap_err().status_code(), 400);

        let mut backwards = request(1000.0);
        if let Some(hotel) = backwards.hotel_details.as_mut() {
            std::mem::swap(&mut hotel.check_in_date, &mut hotel.check_out_date);
        }
        assert_eq!(
            build_booking(backwards, now()).unwrap_err().to_string(),
            "Check-out date cannot be before check-in date"
        );

        let err = build_booking(request(-1.0), now()).unwrap_err();
        assert_eq!(err.to_string(), "pricing.totalAmount must be a non-negative amount");
    }

    #[test]
    fn test_order_amount_paise() {
        assert_eq!(order_amount_paise(50000.0).unwrap(), 5_000_000);
        assert_eq!(order_amount_paise(199.99).unwrap(), 19999);
        assert!(order_amount_paise(0.0).is_err());
        assert!(order_amount_paise(-10.0).is_err());
        assert!(order_amount_paise(f64::NAN).is_err());
    }

    #[test]
    fn test_partial_then_full_payment() {
        let mut booking = build_booking(request(100000.0), now()).unwrap();
        booking.payment.razorpay_order_id = Some("order_1".into());

        let outcome = apply_payment(&mut booking, &payment("pay_1", 40000.0), now()).unwrap();
        assert_eq!(outcome, PaymentOutcome::Applied);
        assert_eq!(booking.payment.status, PaymentStatus::Partial);
        assert!(booking.payment.is_partial_payment);
        assert_eq!(booking.payment.pending_amount, 60000.0);
        assert_eq!(booking.booking_status, BookingStatus::Pending);

        apply_payment(&mut booking, &payment("pay_2", 60000.0), now()).unwrap();
        assert_eq!(booking.payment.status, PaymentStatus::Completed);
        assert_eq!(booking.booking_status, BookingStatus::Confirmed);
        assert_eq!(booking.payment.pending_amount, 0.0);
        assert_eq!(booking.payment.transactions.len(), 2);
        assert_eq!(booking.payment.transactions[1].status, TRANSACTION_SUCCESS);
        assert_eq!(booking.payment.razorpay_payment_id.as_deref(), Some("pay_2"));
    }

    #[test]
    fn test_replayed_payment_changes_nothing() {
        let mut booking = build_booking(request(100000.0), now()).unwrap();
        apply_payment(&mut booking, &payment("pay_1", 40000.0), now()).unwrap();
        let before = booking.clone();

        let outcome = apply_payment(&mut booking, &payment("pay_1", 40000.0), now()).unwrap();
        assert_eq!(outcome, PaymentOutcome::AlreadyRecorded);
        assert_eq!(booking, before);
    }

    #[test]
    fn test_payment_for_another_order_is_rejected() {
        let mut booking = build_booking(request(100000.0), now()).unwrap();
        booking.payment.record_order("order_other");
        let err = apply_payment(&mut booking, &payment("pay_1", 100.0), now()).unwrap_err();
        assert_eq!(err.to_string(), "Payment order does not match this booking");
        assert!(booking.payment.transactions.is_empty());
    }

    #[test]
    fn test_earlier_order_stays_payable() {
        let mut booking = build_booking(request(100000.0), now()).unwrap();
        booking.payment.record_order("order_1");
        booking.payment.record_order("order_2");
        booking.payment.record_order("order_1");
        assert_eq!(booking.payment.order_ids, vec!["order_1", "order_2"]);
        assert_eq!(booking.payment.razorpay_order_id.as_deref(), Some("order_1"));

        booking.payment.record_order("order_2");
        let outcome = apply_payment(&mut booking, &payment("pay_1", 100000.0), now()).unwrap();
        assert_eq!(outcome, PaymentOutcome::Applied);
        assert_eq!(booking.payment.razorpay_order_id.as_deref(), Some("order_1"));
        assert_eq!(booking.payment.status, PaymentStatus::Completed);
    }

    #[test]
    fn test_non_positive_payment_is_rejected() {
        let mut booking = build_booking(request(100000.0), now()).unwrap();
        assert!(apply_payment(&mut booking, &payment("pay_1", 0.0), now()).is_err());
        assert_eq!(booking.payment.paid_amount, 0.0);
    }

    #[test]
    fn test_parse_status() {
        assert_eq!(parse_status(Some(" Confirmed ")).unwrap(), BookingStatus::Confirmed);
        assert_eq!(
            parse_status(None).unwrap_err().to_string(),
            "Please provide a booking status"
        );
        assert_eq!(
            parse_status(Some("shipped")).unwrap_err().to_string(),
            "`shipped` is not a valid booking status"
        );
    }

    #[test]
    fn test_cancel_rules() {
        let mut booking = build_booking(request(1000.0), now()).unwrap();
        booking.booking_status = BookingStatus::Confirmed;
        cancel(&mut booking, now()).unwrap();
        assert_eq!(booking.booking_status, BookingStatus::Cancelled);

        let err = cancel(&mut booking, now()).unwrap_err();
        assert_eq!(err.to_string(), "This booking cannot be cancelled");

        booking.booking_status = BookingStatus::Completed;
        assert!(cancel(&mut booking, now()).is_err());
    }

    proptest! {
        #[test]
        fn prop_paid_plus_pending_is_total(
            total in 1u32..500_000,
            payments in proptest::collection::vec(1u32..200_000, 1..6),
        ) {
            let total = total as f64;
            let mut booking = build_booking(request(total), now()).unwrap();

            for (i, amount) in payments.iter().enumerate() {
                let id = format!("pay_{}", i);
                apply_payment(&mut booking, &payment(&id, *amount as f64), now()).unwrap();

                let info = &booking.payment;
                prop_assert!((info.paid_amount + info.pending_amount - total).abs() < 1e-6);
                if info.pending_amount <= 0.0 {
                    prop_assert_eq!(info.status, PaymentStatus::Completed);
                    prop_assert_eq!(booking.booking_status, BookingStatus::Confirmed);
                } else {
                    prop_assert_eq!(info.status, PaymentStatus::Partial);
                    prop_assert!(info.is_partial_payment);
                }
            }
            prop_assert_eq!(booking.payment.transactions.len(), payments.len());
        }
    }
}
