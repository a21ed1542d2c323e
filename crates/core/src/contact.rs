//! WhatsApp contact-to-purchase links.
//!
//! The storefront has no checkout: every product card links to a WhatsApp
//! chat with a pre-filled message naming the product and its price.

use serde::Serialize;

use crate::error::CoreError;

/// Click-to-chat base URL.
pub const WHATSAPP_BASE_URL: &str = "https://wa.me";

/// Shortest and longest accepted phone numbers (digits, country code included).
pub const MIN_PHONE_DIGITS: usize = 7;
pub const MAX_PHONE_DIGITS: usize = 15;

/// A ready-to-open chat link plus the message it pre-fills.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactLink {
    pub url: String,
    pub message: String,
}

/// Strip everything except digits: `+91 87886-49590` -> `918788649590`.
pub fn normalize_phone(raw: &str) -> Result<String, CoreError> {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    if !(MIN_PHONE_DIGITS..=MAX_PHONE_DIGITS).contains(&digits.len()) {
        return Err(CoreError::Validation(format!(
            "phone number must have {MIN_PHONE_DIGITS}-{MAX_PHONE_DIGITS} digits, got {}",
            digits.len()
        )));
    }
    Ok(digits)
}

/// Format a rupee amount with thousands separators: `15999.0` -> `₹15,999`.
///
/// Whole amounts drop the fractional part; others keep two decimals.
pub fn format_price(price: f64) -> String {
    let cents = (price * 100.0).round() as u64;
    let whole = cents / 100;
    let frac = cents % 100;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    if frac == 0 {
        format!("₹{grouped}")
    } else {
        format!("₹{grouped}.{frac:02}")
    }
}

/// What the storefront-wide enquiry asks about.
pub const GENERAL_SUBJECT: &str = "our products";

/// Pre-filled enquiry text: `Hi! I'm interested in the {subject}. Can you provide more details?`
pub fn enquiry_message(subject: &str) -> String {
    format!("Hi! I'm interested in the {subject}. Can you provide more details?")
}

/// Enquiry text for a product, naming its price.
pub fn purchase_message(product_name: &str, price: f64) -> String {
    enquiry_message(&format!("{product_name} ({})", format_price(price)))
}

/// Build a `wa.me` link that opens a chat with `phone` and pre-fills `message`.
pub fn whatsapp_link(phone: &str, message: &str) -> Result<String, CoreError> {
    let digits = normalize_phone(phone)?;
    Ok(format!(
        "{WHATSAPP_BASE_URL}/{digits}?text={}",
        urlencoding::encode(message)
    ))
}

/// Link and message for purchasing `product_name` at `price`.
pub fn purchase_link(phone: &str, product_name: &str, price: f64) -> Result<ContactLink, CoreError> {
    let message = purchase_message(product_name, price);
    let url = whatsapp_link(phone, &message)?;
    Ok(ContactLink { url, message })
}

/// Link and message for a storefront-wide enquiry with no product attached.
pub fn general_link(phone: &str) -> Result<ContactLink, CoreError> {
    let message = enquiry_message(GENERAL_SUBJECT);
    let url = whatsapp_link(phone, &message)?;
    Ok(ContactLink { url, message })
}
