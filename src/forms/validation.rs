// src/forms/validation.rs

pub const PHONE_MESSAGE: &str = "Invalid Indian phone number (10 digits, starting with 6-9)";
pub const EMAIL_MESSAGE: &str = "Invalid email address";

/// Trim + lowercase, then a structural check: one `@`, a non-empty local
/// part and a dotted domain.
pub fn normalize_email(raw: &str) -> Result<String, String> {
    let email = raw.trim().to_lowercase();
    let mut parts = email.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(EMAIL_MESSAGE.into());
    };
    let domain_ok = domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !domain.contains("..");
    if local.is_empty() || !domain_ok || email.chars().any(char::is_whitespace) {
        return Err(EMAIL_MESSAGE.into());
    }
    Ok(email)
}

/// Ten digits starting with 6-9. Spaces and dashes are ignored, as is a
/// leading `+91`/`91` country code on 12-digit input.
pub fn normalize_phone(raw: &str) -> Result<String, String> {
    let compact: String = raw
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '-')
        .collect();
    let digits = compact.strip_prefix('+').unwrap_or(&compact);
    let digits = if digits.len() == 12 && digits.starts_with("91") {
        &digits[2..]
    } else {
        digits
    };

    let valid = digits.len() == 10
        && digits.chars().all(|c| c.is_ascii_digit())
        && matches!(digits.as_bytes()[0], b'6'..=b'9');
    if valid {
        Ok(digits.to_string())
    } else {
        Err(PHONE_MESSAGE.into())
    }
}

/// Character-length bounds (not bytes).
pub fn length(value: &str, min: usize, max: usize, label: &str) -> Result<(), String> {
    let n = value.chars().count();
    if n < min {
        if min <= 1 {
            Err(format!("{label} is required"))
        } else {
            Err(format!("{label} must be at least {min} characters"))
        }
    } else if n > max {
        Err(format!("{label} is too long (max {max} characters)"))
    } else {
        Ok(())
    }
}

pub fn one_of(value: &str, allowed: &[&str], message: &str) -> Result<(), String> {
    if allowed.contains(&value) {
        Ok(())
    } else {
        Err(message.to_string())
    }
}
