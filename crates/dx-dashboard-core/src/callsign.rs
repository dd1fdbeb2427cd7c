//! Amateur radio callsign helpers.
//!
//! Callsigns are expected in upper case. None of the checks here normalize
//! their input; use [`normalize_callsign`] first for free-form text.

/// Longest alphanumeric run allowed before the separating digit.
const MAX_LEAD: usize = 3;

/// Longest alphanumeric run allowed between the digit and the final letter.
const MAX_SUFFIX_BODY: usize = 3;

#[inline]
fn is_callsign_char(b: u8) -> bool {
    b.is_ascii_uppercase() || b.is_ascii_digit()
}

/// Check a callsign against the basic amateur radio shape.
///
/// Accepts 1-3 characters of `[A-Z0-9]`, a digit, 0-3 more `[A-Z0-9]`,
/// then a final letter `[A-Z]`. Case-sensitive.
///
/// # Examples
/// ```
/// use dx_dashboard_core::is_valid_callsign;
/// assert!(is_valid_callsign("W1AW"));
/// assert!(!is_valid_callsign("w1aw"));
/// ```
#[must_use]
pub fn is_valid_callsign(callsign: &str) -> bool {
    let bytes = callsign.as_bytes();
    let len = bytes.len();

    // lead (>=1) + digit + final letter
    if len < 3 || len > MAX_LEAD + 1 + MAX_SUFFIX_BODY + 1 {
        return false;
    }
    if !bytes.iter().all(|&b| is_callsign_char(b)) {
        return false;
    }
    if !bytes[len - 1].is_ascii_uppercase() {
        return false;
    }

    // Any split point where the lead and suffix body both fit
    (1..=MAX_LEAD).any(|lead| {
        let body = len as isize - lead as isize - 2;
        (0..=MAX_SUFFIX_BODY as isize).contains(&body) && bytes[lead].is_ascii_digit()
    })
}

/// Extract the country prefix: the longest leading run of 1-3 `[A-Z0-9]`
/// characters followed by a digit, digit included.
///
/// Returns an empty string when the callsign has no such prefix.
#[must_use]
pub fn extract_prefix(callsign: &str) -> &str {
    let bytes = callsign.as_bytes();

    for lead in (1..=MAX_LEAD).rev() {
        if bytes.len() <= lead {
            continue;
        }
        if bytes[..lead].iter().all(|&b| is_callsign_char(b)) && bytes[lead].is_ascii_digit() {
            return &callsign[..=lead];
        }
    }

    ""
}

/// Remove an SSID or portable suffix (`-10`, `/P`, ...).
///
/// Returns everything before the first `-` or `/`.
#[must_use]
pub fn strip_ssid(callsign: &str) -> &str {
    match callsign.find(|c: char| c == '-' || c == '/') {
        Some(idx) => &callsign[..idx],
        None => callsign,
    }
}

/// Trim, strip the SSID and upper-case free-form callsign input.
#[must_use]
pub fn normalize_callsign(input: &str) -> String {
    strip_ssid(input.trim()).to_ascii_uppercase()
}
