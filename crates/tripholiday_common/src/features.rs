//! Runtime feature flags.
//!
//! The external integrations (Razorpay, SMTP email, Twilio SMS) are switched
//! on with a `use_*` flag in the configuration. A flag only takes effect when
//! the matching configuration section is present as well, so a half-configured
//! integration falls back to its disabled behaviour instead of failing at
//! request time.

use std::sync::Arc;
use tripholiday_config::AppConfig;

/// Check if a feature is enabled at runtime based on configuration.
///
/// `true` only when `use_feature` is set and `feature_config` is present.
pub fn is_feature_enabled<T>(
    _config: &Arc<AppConfig>,
    use_feature: bool,
    feature_config: Option<&T>,
) -> bool {
    use_feature && feature_config.is_some()
}

/// Check if Razorpay payments are enabled at runtime.
pub fn is_razorpay_enabled(config: &Arc<AppConfig>) -> bool {
    is_feature_enabled(config, config.use_razorpay, config.razorpay.as_ref())
}

/// Check if SMTP email is enabled at runtime.
pub fn is_email_enabled(config: &Arc<AppConfig>) -> bool {
    is_feature_enabled(config, config.use_email, config.smtp.as_ref())
}

/// Check if Twilio SMS is enabled at runtime.
pub fn is_sms_enabled(config: &Arc<AppConfig>) -> bool {
    is_feature_enabled(config, config.use_sms, config.twilio.as_ref())
}
