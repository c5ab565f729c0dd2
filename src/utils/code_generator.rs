//! Short code generation and validation utilities.
//!
//! Generated codes are 8 characters drawn uniformly from the 62-symbol
//! alphanumeric alphabet. Custom codes accept the wider 3-20 character
//! range in the same alphabet.

use rand::Rng;

/// Alphabet for generated codes: uppercase, lowercase, digits.
const CODE_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Length of generated (non-custom) codes.
pub const GENERATED_CODE_LENGTH: usize = 8;

/// Minimum accepted short code length.
pub const MIN_CODE_LENGTH: usize = 3;

/// Maximum accepted short code length.
pub const MAX_CODE_LENGTH: usize = 20;

/// Generates a random 8-character alphanumeric short code.
///
/// Uniqueness is not guaranteed here; the registry checks the generated
/// code against taken codes and retries on collision.
///
/// # Examples
///
/// ```
/// use url_registry::utils::code_generator::generate_code;
///
/// let code = generate_code();
/// assert_eq!(code.len(), 8);
/// assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
pub fn generate_code() -> String {
    let mut rng = rand::rng();

    (0..GENERATED_CODE_LENGTH)
        .map(|_| CODE_ALPHABET[rng.random_range(0..CODE_ALPHABET.len())] as char)
        .collect()
}

/// Validates a short code against the accepted format.
///
/// # Rules
///
/// - Length: 3-20 characters
/// - Allowed characters: ASCII letters and digits
pub fn is_valid_short_code(code: &str) -> bool {
    (MIN_CODE_LENGTH..=MAX_CODE_LENGTH).contains(&code.len())
        && code.chars().all(|c| c.is_ascii_alphanumeric())
}
