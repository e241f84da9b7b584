//! Phone number utilities

/// Default validation pattern: a `+` followed by digits
pub const DEFAULT_NUMBER_PATTERN: &str = r"^\+\d+$";

/// Pure numeric check: non-empty and ASCII digits only, no sign or symbols
pub fn is_numeric_phone(phone: &str) -> bool {
    !phone.is_empty() && phone.chars().all(|c| c.is_ascii_digit())
}

/// Mask a phone number for logging, keeping only the last 4 digits
///
/// ```ignore
/// assert_eq!(mask_phone_number("+1234567890"), "+******7890");
/// ```
pub fn mask_phone_number(phone: &str) -> String {
    let len = phone.chars().count();
    if len <= 4 {
        return "*".repeat(len);
    }

    let visible_digits = 4;
    let masked_count = len - visible_digits;
    let last_digits: String = phone.chars().skip(masked_count).collect();

    if phone.starts_with('+') {
        format!("+{}{}", "*".repeat(masked_count - 1), last_digits)
    } else {
        format!("{}{}", "*".repeat(masked_count), last_digits)
    }
}

/// Mask every number of a list and join them for a single log field
pub fn mask_phone_numbers<S: AsRef<str>>(phones: &[S]) -> String {
    phones
        .iter()
        .map(|p| mask_phone_number(p.as_ref()))
        .collect::<Vec<_>>()
        .join(", ")
}
