// --- File: crates/tripholiday_notify/src/templates.rs ---
//! Customer-facing booking messages.
//!
//! Amounts in emails use Indian digit grouping (`₹1,50,000`); SMS bodies
//! print them plainly (`Rs.150000`) to stay within one segment where possible.

use chrono::{DateTime, Datelike, Utc};
use tripholiday_common::models::Booking;
use tripholiday_config::CompanyConfig;

/// Subject and HTML body of an email.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailContent {
    pub subject: String,
    pub html: String,
}

const STYLE: &str = r#"
    body { font-family: Arial, sans-serif; line-height: 1.6; color: #333; }
    .container { max-width: 600px; margin: 0 auto; padding: 20px; }
    .header { background: linear-gradient(135deg, #FF7F27, #FF9F50); color: white; padding: 20px; text-align: center; border-radius: 10px 10px 0 0; }
    .content { background: #f9f9f9; padding: 20px; border: 1px solid #ddd; }
    .booking-details { background: white; padding: 15px; margin: 15px 0; border-radius: 8px; }
    .detail-row { display: flex; justify-content: space-between; padding: 8px 0; border-bottom: 1px solid #eee; }
    .alert-box { background: #fff3cd; border-left: 4px solid orange; padding: 15px; margin: 15px 0; border-radius: 5px; }
    .amount { font-size: 2em; color: #FF7F27; font-weight: bold; text-align: center; margin: 20px 0; }
    .footer { background: #333; color: white; padding: 15px; text-align: center; border-radius: 0 0 10px 10px; }
    .button { background: #FF7F27; color: white; padding: 12px 30px; text-decoration: none; border-radius: 5px; display: inline-block; margin: 10px 0; }
"#;

fn split_cents(amount: f64) -> (bool, u64, u64) {
    let cents = (amount.abs() * 100.0).round() as u64;
    (amount < 0.0 && cents > 0, cents / 100, cents % 100)
}

fn fraction_suffix(fraction: u64) -> String {
    match fraction {
        0 => String::new(),
        f if f % 10 == 0 => format!(".{}", f / 10),
        f => format!(".{:02}", f),
    }
}

/// Rupees with Indian grouping: the last three digits, then pairs.
///
/// At most two decimals are printed and trailing zeros are dropped.
pub fn format_inr(amount: f64) -> String {
    let (negative, whole, fraction) = split_cents(amount);
    let digits = whole.to_string();

    let grouped = if digits.len() <= 3 {
        digits
    } else {
        let (head, tail) = digits.split_at(digits.len() - 3);
        let mut groups: Vec<&str> = Vec::new();
        let mut end = head.len();
        while end > 0 {
            let start = end.saturating_sub(2);
            groups.push(&head[start..end]);
            end = start;
        }
        groups.reverse();
        format!("{},{}", groups.join(","), tail)
    };

    format!(
        "{}{}{}",
        if negative { "-" } else { "" },
        grouped,
        fraction_suffix(fraction)
    )
}

/// The amount without grouping, as SMS bodies show it.
pub fn plain_amount(amount: f64) -> String {
    let (negative, whole, fraction) = split_cents(amount);
    format!(
        "{}{}{}",
        if negative { "-" } else { "" },
        whole,
        fraction_suffix(fraction)
    )
}

/// Long-form date, e.g. `18 October 2026`.
pub fn format_due_date(date: DateTime<Utc>) -> String {
    date.format("%-d %B %Y").to_string()
}

/// Minimal escaping for guest-supplied text placed into HTML.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

fn booking_link(company: &CompanyConfig, booking: &Booking) -> String {
    format!(
        "{}/api/bookings/{}",
        company.public_base_url.trim_end_matches('/'),
        booking.id
    )
}

fn contact_block(company: &CompanyConfig) -> String {
    format!(
        "<p>📞 Phone: {}<br>\n📧 Email: {}</p>",
        escape_html(&company.support_phone),
        escape_html(&company.support_email)
    )
}

fn wrap_document(header: &str, content: &str, footer: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
<style>{STYLE}</style>
</head>
<body>
<div class="container">
<div class="header">
{header}
</div>
<div class="content">
{content}
</div>
<div class="footer">
{footer}
</div>
</div>
</body>
</html>
"#
    )
}

pub fn confirmation_email(booking: &Booking, company: &CompanyConfig) -> EmailContent {
    let reference = booking.booking_reference();
    let payment = &booking.payment;
    let company_name = escape_html(&company.name);
    let has_pending = payment.pending_amount > 0.0;

    let pending_rows = if has_pending {
        let pending = format_inr(payment.pending_amount);
        format!(
            r#"<div class="detail-row"><span>Pending Amount:</span><strong style="color: orange;">₹{pending}</strong></div>
<p style="background: #fff3cd; padding: 10px; border-left: 4px solid orange; margin-top: 10px;">
<strong>⚠️ Payment Reminder:</strong><br>
Please complete the remaining payment of ₹{pending} before your travel date.
You will receive a payment link via email and SMS.
</p>"#
        )
    } else {
        String::new()
    };
    let pending_step = if has_pending {
        "<li>Complete the pending payment before travel date</li>\n"
    } else {
        ""
    };

    let header = format!(
        "<h1>🎉 Booking Confirmed!</h1>\n<p>Thank you for choosing {company_name}</p>"
    );
    let content = format!(
        r#"<h2>Hello {name},</h2>
<p>Your booking has been confirmed. Here are the details:</p>
<div class="booking-details">
<h3>Booking Information</h3>
<div class="detail-row"><span>Booking Reference:</span><strong>{reference}</strong></div>
<div class="detail-row"><span>Package:</span><span>{package}</span></div>
<div class="detail-row"><span>Travelers:</span><span>{adults} Adult(s), {children} Child(ren)</span></div>
</div>
<div class="booking-details">
<h3>Payment Details</h3>
<div class="detail-row"><span>Total Amount:</span><span>₹{total}</span></div>
<div class="detail-row"><span>Amount Paid:</span><strong style="color: green;">₹{paid}</strong></div>
{pending_rows}
</div>
<div style="text-align: center; margin: 20px 0;">
<a href="{link}" class="button">View Booking Details</a>
</div>
<p><strong>What's Next?</strong></p>
<ul>
<li>You will receive detailed itinerary within 24 hours</li>
<li>Our team will contact you to finalize travel arrangements</li>
{pending_step}<li>Keep your booking reference handy for all communications</li>
</ul>
<p>If you have any questions, feel free to contact us at:</p>
{contact}"#,
        name = escape_html(&booking.guest_details.name),
        package = escape_html(&booking.package_details.package_name),
        adults = booking.travelers.adults.count,
        children = booking.travelers.children.count,
        total = format_inr(booking.pricing.total_amount),
        paid = format_inr(payment.paid_amount),
        link = booking_link(company, booking),
        contact = contact_block(company),
    );
    let footer = format!(
        "<p>&copy; {} {company_name}. All rights reserved.</p>\n<p>{}</p>",
        Utc::now().year(),
        escape_html(&company.postal_address)
    );

    EmailContent {
        subject: format!("Booking Confirmation - {}", reference),
        html: wrap_document(&header, &content, &footer),
    }
}

/// Callers check that something is pending first.
pub fn payment_reminder_email(booking: &Booking, company: &CompanyConfig) -> EmailContent {
    let reference = booking.booking_reference();

    let content = format!(
        r#"<h2>Hello {name},</h2>
<div class="alert-box">
<strong>⚠️ Pending Payment Alert</strong><br>
You have a pending payment for your {package} booking.
</div>
<p><strong>Booking Reference:</strong> {reference}</p>
<div class="amount">₹{pending}</div>
<p style="text-align: center; color: #666;">Pending Amount</p>
<p><strong>Payment Due Date:</strong> {due}</p>
<div style="text-align: center; margin: 20px 0;">
<a href="{link}" class="button">Pay Now</a>
</div>
<p><strong>Why complete the payment?</strong></p>
<ul>
<li>Ensure your booking is fully confirmed</li>
<li>Avoid last-minute payment hassles</li>
<li>Get detailed itinerary and travel documents</li>
</ul>
<p>For assistance, contact us:</p>
{contact}"#,
        name = escape_html(&booking.guest_details.name),
        package = escape_html(&booking.package_details.package_name),
        pending = format_inr(booking.payment.pending_amount),
        due = format_due_date(booking.payment_due_date()),
        link = booking_link(company, booking),
        contact = contact_block(company),
    );
    let footer = format!(
        "<p>&copy; {} {}. All rights reserved.</p>",
        Utc::now().year(),
        escape_html(&company.name)
    );

    EmailContent {
        subject: format!("Payment Reminder - Booking {}", reference),
        html: wrap_document("<h1>⏰ Payment Reminder</h1>", &content, &footer),
    }
}

pub fn confirmation_sms(booking: &Booking, company: &CompanyConfig) -> String {
    let payment = &booking.payment;
    let mut message = format!(
        "{}: Your booking is confirmed! Reference: {}. Amount Paid: Rs.{}. ",
        company.name,
        booking.booking_reference(),
        plain_amount(payment.paid_amount)
    );
    if payment.pending_amount > 0.0 {
        message.push_str(&format!(
            "Pending: Rs.{}. ",
            plain_amount(payment.pending_amount)
        ));
    }
    message.push_str(&format!(
        "For details, check your email or call {}.",
        company.support_phone
    ));
    message
}

pub fn payment_reminder_sms(booking: &Booking, company: &CompanyConfig) -> String {
    format!(
        "{}: Payment reminder for booking {}. Pending amount: Rs.{}. Please complete payment. Call {} for help.",
        company.name,
        booking.booking_reference(),
        plain_amount(booking.payment.pending_amount),
        company.support_phone
    )
}
