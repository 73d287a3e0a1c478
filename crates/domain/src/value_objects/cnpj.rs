//! Brazilian company tax id (CNPJ)
//!
//! A `Cnpj` always holds exactly 14 ASCII digits whose last two digits are
//! valid modulo-11 check digits for the first twelve.

use serde::Serialize;
use std::fmt;

use crate::errors::InvalidCnpjError;

const CNPJ_LENGTH: usize = 14;
const FORMATTED_CNPJ_LENGTH: usize = 18;
const BASE_LENGTH: usize = 12;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "String")]
pub struct Cnpj(String);

impl Cnpj {
    /// Validate a raw CNPJ, formatted (`11.222.333/0001-81`) or not.
    ///
    /// # Errors
    ///
    /// Returns `InvalidCnpjError` carrying the raw input if the length is
    /// wrong, a non-digit remains after stripping punctuation, or the check
    /// digits do not match.
    pub fn validate(raw: &str) -> Result<Self, InvalidCnpjError> {
        let length = raw.chars().count();
        if length != CNPJ_LENGTH && length != FORMATTED_CNPJ_LENGTH {
            return Err(InvalidCnpjError::invalid_format(raw));
        }

        let cleaned: String = raw
            .chars()
            .filter(|c| !matches!(c, '.' | '/' | '-'))
            .collect();
        if cleaned.len() != CNPJ_LENGTH || !cleaned.bytes().all(|b| b.is_ascii_digit()) {
            return Err(InvalidCnpjError::invalid_format(raw));
        }

        let digits: Vec<u32> = cleaned.bytes().map(|b| u32::from(b - b'0')).collect();
        let mut registration = digits[..BASE_LENGTH].to_vec();
        let first = check_digit(&registration);
        registration.push(first);
        let second = check_digit(&registration);

        if digits[BASE_LENGTH] != first || digits[BASE_LENGTH + 1] != second {
            return Err(InvalidCnpjError::invalid_format(raw));
        }

        Ok(Self(cleaned))
    }

    /// Rebuild a CNPJ read back from storage, where it was stored validated.
    pub fn from_persisted(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Weighted sum right-to-left with weights cycling 2..=9, reduced mod 11.
fn check_digit(registration: &[u32]) -> u32 {
    let sum: u32 = registration
        .iter()
        .rev()
        .zip((2..=9).cycle())
        .map(|(digit, weight)| digit * weight)
        .sum();
    let remainder = sum % 11;
    if remainder < 2 {
        0
    } else {
        11 - remainder
    }
}

impl fmt::Display for Cnpj {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Cnpj> for String {
    fn from(cnpj: Cnpj) -> String {
        cnpj.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    fn generate_cnpj(rng: &mut impl Rng) -> String {
        let mut digits: Vec<u32> = (0..BASE_LENGTH).map(|_| rng.gen_range(0..10)).collect();
        let first = check_digit(&digits);
        digits.push(first);
        let second = check_digit(&digits);
        digits.push(second);
        digits
            .iter()
            .filter_map(|d| char::from_digit(*d, 10))
            .collect()
    }

    fn format_cnpj(cnpj: &str) -> String {
        format!(
            "{}.{}.{}/{}-{}",
            &cnpj[0..2],
            &cnpj[2..5],
            &cnpj[5..8],
            &cnpj[8..12],
            &cnpj[12..14]
        )
    }

    #[test]
    fn test_known_cnpj_is_valid() {
        let cnpj = Cnpj::validate("11222333000181").unwrap();
        assert_eq!(cnpj.as_str(), "11222333000181");
    }

    #[test]
    fn test_formatted_cnpj_is_cleaned() {
        let cnpj = Cnpj::validate("11.222.333/0001-81").unwrap();
        assert_eq!(cnpj.as_str(), "11222333000181");
    }

    #[test]
    fn test_wrong_lengths_are_rejected() {
        for raw in ["", "1122233300018", "112223330001811", "11.222.333/0001-8"] {
            let err = Cnpj::validate(raw).unwrap_err();
            assert_eq!(err.cnpj, raw);
        }
    }

    #[test]
    fn test_non_digits_are_rejected() {
        assert!(Cnpj::validate("1122233300018a").is_err());
        assert!(Cnpj::validate("11 222 333 0001").is_err());
        // 18 chars with a letter left after stripping punctuation
        assert!(Cnpj::validate("11.222.333/0001-8a").is_err());
        // 18 chars but only three separators, so 15 digits remain
        assert!(Cnpj::validate("11.222.333/0001811").is_err());
    }

    #[test]
    fn test_generated_cnpjs_validate() {
        let mut rng = rand::thread_rng();
        for _ in 0..200 {
            let raw = generate_cnpj(&mut rng);
            let cnpj = Cnpj::validate(&raw).unwrap();
            assert_eq!(cnpj.as_str(), raw);

            let formatted = format_cnpj(&raw);
            assert_eq!(Cnpj::validate(&formatted).unwrap().as_str(), raw);
        }
    }

    #[test]
    fn test_mutated_check_digits_fail() {
        let mut rng = rand::thread_rng();
        for _ in 0..100 {
            let raw = generate_cnpj(&mut rng);
            for position in [12, 13] {
                let original = raw.as_bytes()[position] - b'0';
                let replacement = (original + rng.gen_range(1..10)) % 10;
                let mut mutated = raw.clone().into_bytes();
                mutated[position] = b'0' + replacement;
                let mutated = String::from_utf8(mutated).unwrap();

                let err = Cnpj::validate(&mutated).unwrap_err();
                assert_eq!(err.cnpj, mutated);
            }
        }
    }
}
