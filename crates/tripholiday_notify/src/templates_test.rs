// --- File: crates/tripholiday_notify/src/templates_test.rs ---
#[cfg(test)]
mod tests {
    use crate::templates::*;
    use chrono::{TimeZone, Utc};
    use serde_json::json;
    use tripholiday_common::models::Booking;
    use tripholiday_config::CompanyConfig;

    fn booking(paid: f64, pending: f64) -> Booking {
        let total = paid + pending;
        let partial = pending > 0.0;
        let status = if pending > 0.0 { "partial" } else { "completed" };
        serde_json::from_value(json!({
            "id": "65f1c2a9b8e4d3f2a1b0c9d8",
            "guestDetails": { "name": "Asha <Verma>", "email": "asha@example.com", "phone": "9876543210" },
            "packageDetails": { "packageId": "goa", "packageType": "without-flight", "packageName": "Goa Beach Escape", "basePrice": 37000 },
            "travelers": { "adults": { "count": 2 }, "children": { "count": 1 } },
            "pricing": { "basePrice": 37000, "travelersCharge": 0, "totalAmount": total },
            "payment": {
                "status": status,
                "paidAmount": paid,
                "pendingAmount": pending,
                "isPartialPayment": partial
            },
            "bookingStatus": "confirmed",
            "createdAt": "2026-10-11T09:30:00Z",
            "updatedAt": "2026-10-11T09:30:00Z"
        }))
        .unwrap()
    }

    #[test]
    fn test_format_inr_uses_indian_grouping() {
        assert_eq!(format_inr(0.0), "0");
        assert_eq!(format_inr(999.0), "999");
        assert_eq!(format_inr(1000.0), "1,000");
        assert_eq!(format_inr(150000.0), "1,50,000");
        assert_eq!(format_inr(12345678.0), "1,23,45,678");
        assert_eq!(format_inr(1234.5), "1,234.5");
        assert_eq!(format_inr(1234.567), "1,234.57");
        assert_eq!(format_inr(-2500.0), "-2,500");
    }

    #[test]
    fn test_plain_amount() {
        assert_eq!(plain_amount(75000.0), "75000");
        assert_eq!(plain_amount(99.9), "99.9");
        assert_eq!(plain_amount(10.05), "10.05");
    }

    #[test]
    fn test_format_due_date() {
        let date = Utc.with_ymd_and_hms(2026, 10, 18, 9, 30, 0).unwrap();
        assert_eq!(format_due_date(date), "18 October 2026");
        let date = Utc.with_ymd_and_hms(2027, 1, 3, 0, 0, 0).unwrap();
        assert_eq!(format_due_date(date), "3 January 2027");
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("Tom & \"Jerry\" <3"), "Tom &amp; &quot;Jerry&quot; &lt;3");
    }

    #[test]
    fn test_confirmation_email_with_pending_amount() {
        let company = CompanyConfig::default();
        let email = confirmation_email(&booking(25000.0, 50000.0), &company);

        assert_eq!(email.subject, "Booking Confirmation - THA1B0C9D8");
        assert!(email.html.contains("Hello Asha &lt;Verma&gt;,"));
        assert!(email.html.contains("Goa Beach Escape"));
        assert!(email.html.contains("2 Adult(s), 1 Child(ren)"));
        assert!(email.html.contains("₹75,000"));
        assert!(email.html.contains("₹25,000"));
        assert!(email.html.contains("Please complete the remaining payment of ₹50,000"));
        assert!(email.html.contains("Complete the pending payment before travel date"));
        assert!(email
            .html
            .contains(&format!("{}/api/bookings/65f1c2a9b8e4d3f2a1b0c9d8", company.public_base_url)));
        assert!(email.html.contains(&company.support_phone));
        assert!(email.html.contains(&company.postal_address));
    }

    #[test]
    fn test_confirmation_email_fully_paid_has_no_pending_block() {
        let email = confirmation_email(&booking(75000.0, 0.0), &CompanyConfig::default());
        assert!(!email.html.contains("Pending Amount"));
        assert!(!email.html.contains("Complete the pending payment"));
    }

    #[test]
    fn test_payment_reminder_email() {
        let email = payment_reminder_email(&booking(25000.0, 50000.0), &CompanyConfig::default());
        assert_eq!(email.subject, "Payment Reminder - Booking THA1B0C9D8");
        assert!(email.html.contains("₹50,000"));
        assert!(email.html.contains("18 October 2026"));
        assert!(email.html.contains("Pay Now"));
    }

    #[test]
    fn test_confirmation_sms() {
        let company = CompanyConfig::default();
        assert_eq!(
            confirmation_sms(&booking(25000.0, 50000.0), &company),
            format!(
                "{}: Your booking is confirmed! Reference: THA1B0C9D8. Amount Paid: Rs.25000. Pending: Rs.50000. For details, check your email or call {}.",
                company.name, company.support_phone
            )
        );
        let paid_in_full = confirmation_sms(&booking(75000.0, 0.0), &company);
        assert!(!paid_in_full.contains("Pending"));
    }

    #[test]
    fn test_payment_reminder_sms() {
        let company = CompanyConfig::default();
        assert_eq!(
            payment_reminder_sms(&booking(25000.0, 50000.0), &company),
            format!(
                "{}: Payment reminder for booking THA1B0C9D8. Pending amount: Rs.50000. Please complete payment. Call {} for help.",
                company.name, company.support_phone
            )
        );
    }
}
