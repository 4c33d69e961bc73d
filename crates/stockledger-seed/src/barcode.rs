//! GS1 barcode numbers.

use rand::Rng;

/// Compute the GS1 check digit for `payload` (all digits except the last).
///
/// Weights alternate 3, 1, 3, ... starting from the rightmost payload digit.
pub fn check_digit(payload: &[u8]) -> u8 {
    let sum: u32 = payload
        .iter()
        .rev()
        .enumerate()
        .map(|(i, d)| u32::from(*d) * if i % 2 == 0 { 3 } else { 1 })
        .sum();
    ((10 - sum % 10) % 10) as u8
}

/// Returns `true` if `code` is all digits and ends in a valid check digit.
pub fn is_valid(code: &str) -> bool {
    let digits: Option<Vec<u8>> = code
        .chars()
        .map(|c| c.to_digit(10).map(|d| d as u8))
        .collect();
    match digits.as_deref() {
        Some([payload @ .., last]) if !payload.is_empty() => check_digit(payload) == *last,
        _ => false,
    }
}

fn random_code<R: Rng + ?Sized>(rng: &mut R, len: usize) -> String {
    let mut digits: Vec<u8> = (0..len - 1).map(|_| rng.gen_range(0..10)).collect();
    digits.push(check_digit(&digits));
    digits.iter().map(|d| char::from(b'0' + d)).collect()
}

/// A random EAN-13 number.
pub fn ean13<R: Rng + ?Sized>(rng: &mut R) -> String {
    random_code(rng, 13)
}

/// A random EAN-8 number.
pub fn ean8<R: Rng + ?Sized>(rng: &mut R) -> String {
    random_code(rng, 8)
}
