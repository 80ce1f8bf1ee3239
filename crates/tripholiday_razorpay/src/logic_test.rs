#[cfg(test)]
mod tests {
    use crate::error::RazorpayError;
    use crate::logic::*;
    use tripholiday_common::{HttpStatusCode, TripError};

    const SECRET: &str = "rzp_secret_123";
    const ORDER: &str = "order_IluGWxBm9U8zJ8";
    const PAYMENT: &str = "pay_IluHNWlS4Z1Y3K";
    const EXPECTED: &str = "539d47d37cce47382a9409e1930305831be596843d4b2d5afee23f8b5c87160e";

    #[test]
    fn test_payment_signature_known_vector() {
        assert_eq!(payment_signature(ORDER, PAYMENT, SECRET), EXPECTED);
    }

    #[test]
    fn test_verify_payment_signature() {
        assert!(verify_payment_signature(ORDER, PAYMENT, EXPECTED, SECRET));
        assert!(verify_payment_signature(
            ORDER,
            PAYMENT,
            &EXPECTED.to_uppercase(),
            SECRET
        ));
        assert!(!verify_payment_signature(ORDER, "pay_other", EXPECTED, SECRET));
        assert!(!verify_payment_signature(ORDER, PAYMENT, EXPECTED, "wrong-secret"));
        assert!(!verify_payment_signature(ORDER, PAYMENT, "", SECRET));
        assert!(!verify_payment_signature(ORDER, PAYMENT, EXPECTED, ""));
    }

    #[test]
    fn test_errors_map_to_bad_gateway() {
        let err = RazorpayError::ApiError {
            status_code: 400,
            message: "The amount must be atleast INR 1.00".into(),
        };
        assert_eq!(err.status_code(), 502);
        let trip: TripError = err.into();
        assert_eq!(trip.status_code(), 502);
        assert_eq!(
            trip.public_message(),
            "Razorpay error: The amount must be atleast INR 1.00"
        );

        let trip: TripError = RazorpayError::ConfigError("missing".into()).into();
        assert_eq!(trip.status_code(), 500);
    }
}
