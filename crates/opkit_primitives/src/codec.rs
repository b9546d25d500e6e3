//! Base64 decoding over the standard and URL-safe alphabets.
//!
//! Padding is optional but, when present, must be exactly the padding the
//! final group needs. Unused bits in the final symbol must be zero, so every
//! byte string has exactly one accepted encoding per padding style.

use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::Engine as _;
use thiserror::Error;

use crate::constants::BASE64_PAD;

// Padding is validated and stripped before the engine sees the input.
const DECODE_CONFIG: GeneralPurposeConfig = GeneralPurposeConfig::new()
    .with_decode_padding_mode(DecodePaddingMode::RequireNone)
    .with_decode_allow_trailing_bits(false);

const STANDARD: GeneralPurpose = GeneralPurpose::new(&alphabet::STANDARD, DECODE_CONFIG);
const URL_SAFE: GeneralPurpose = GeneralPurpose::new(&alphabet::URL_SAFE, DECODE_CONFIG);

/// Base64 alphabet selector.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Alphabet {
    /// RFC 4648 §4: `A-Z a-z 0-9 + /`.
    Standard,
    /// RFC 4648 §5: `A-Z a-z 0-9 - _`.
    UrlSafe,
}

impl Alphabet {
    const fn engine(self) -> &'static GeneralPurpose {
        match self {
            Self::Standard => &STANDARD,
            Self::UrlSafe => &URL_SAFE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("invalid base64 byte {byte:#04x} at offset {offset}")]
    InvalidByte { offset: usize, byte: u8 },

    #[error("invalid base64 length: {symbols} symbols leave a partial group")]
    InvalidLength { symbols: usize },

    #[error("non-canonical final base64 symbol {byte:#04x} at offset {offset}")]
    InvalidLastSymbol { offset: usize, byte: u8 },

    #[error("malformed base64 padding")]
    InvalidPadding,
}

impl From<base64::DecodeError> for DecodeError {
    fn from(e: base64::DecodeError) -> Self {
        match e {
            base64::DecodeError::InvalidByte(offset, byte) => Self::InvalidByte { offset, byte },
            base64::DecodeError::InvalidLength(symbols) => Self::InvalidLength { symbols },
            base64::DecodeError::InvalidLastSymbol(offset, byte) => {
                Self::InvalidLastSymbol { offset, byte }
            }
            base64::DecodeError::InvalidPadding => Self::InvalidPadding,
        }
    }
}

/// Decode `input` using the selected alphabet.
pub fn decode(input: &str, alphabet: Alphabet) -> Result<Vec<u8>, DecodeError> {
    strip_padding(input.as_bytes())
        .and_then(|body| alphabet.engine().decode(body).map_err(DecodeError::from))
        .map_err(|err| {
            tracing::debug!(?alphabet, len = input.len(), error = %err, "base64 decode rejected");
            err
        })
}

// Trailing padding must fill the final group exactly: none, or one/two
// characters making the total length a multiple of four.
fn strip_padding(input: &[u8]) -> Result<&[u8], DecodeError> {
    let pad = input.iter().rev().take_while(|&&b| b == BASE64_PAD).count();
    if pad == 0 {
        return Ok(input);
    }
    let body = &input[..input.len() - pad];
    if pad > 2 || input.len() % 4 != 0 || body.len() % 4 != 4 - pad {
        return Err(DecodeError::InvalidPadding);
    }
    Ok(body)
}

/// Decode with the standard alphabet.
#[inline]
pub fn decode_standard(input: &str) -> Result<Vec<u8>, DecodeError> {
    decode(input, Alphabet::Standard)
}

/// Decode with the URL- and filename-safe alphabet.
#[inline]
pub fn decode_url_safe(input: &str) -> Result<Vec<u8>, DecodeError> {
    decode(input, Alphabet::UrlSafe)
}

#[cfg(test)]
#[allow(clippy::missing_assert_message, clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn rfc4648_vectors() {
        let cases: &[(&str, &[u8])] = &[
            ("", b""),
            ("Zg==", b"f"),
            ("Zm8=", b"fo"),
            ("Zm9v", b"foo"),
            ("Zm9vYg==", b"foob"),
            ("Zm9vYmE=", b"fooba"),
            ("Zm9vYmFy", b"foobar"),
        ];
        for (encoded, expected) in cases {
            assert_eq!(decode_standard(encoded).unwrap(), *expected, "{encoded}");
            assert_eq!(decode_url_safe(encoded).unwrap(), *expected, "{encoded}");
        }
    }

    #[test]
    fn padding_is_optional() {
        assert_eq!(decode_standard("Zg").unwrap(), b"f");
        assert_eq!(decode_standard("Zm8").unwrap(), b"fo");
        assert_eq!(decode_standard("Zm9vYg").unwrap(), b"foob");
    }

    #[test]
    fn alphabets_differ_in_two_symbols() {
        // 0xfb 0xff encodes to "+/8" (standard) and "-_8" (URL-safe).
        assert_eq!(decode_standard("+/8=").unwrap(), [0xfb, 0xff]);
        assert_eq!(decode_url_safe("-_8=").unwrap(), [0xfb, 0xff]);
        assert!(matches!(
            decode_standard("-_8="),
            Err(DecodeError::InvalidByte { offset: 0, byte: b'-' })
        ));
        assert!(matches!(
            decode_url_safe("+/8="),
            Err(DecodeError::InvalidByte { offset: 0, byte: b'+' })
        ));
    }

    #[test]
    fn rejects_bad_characters() {
        assert!(matches!(
            decode_standard("!!!!"),
            Err(DecodeError::InvalidByte { offset: 0, byte: b'!' })
        ));
        assert!(decode_standard("Zm9v\nYmFy").is_err());
    }

    #[test]
    fn rejects_single_symbol_remainder() {
        assert!(matches!(
            decode_standard("Zm9vY"),
            Err(DecodeError::InvalidLength { .. })
        ));
    }

    #[test]
    fn rejects_malformed_padding() {
        assert_eq!(decode_standard("Zg="), Err(DecodeError::InvalidPadding));
        assert!(decode_standard("Zg===").is_err());
        assert!(decode_standard("Zg==Zg==").is_err());
        assert!(decode_standard("=Zg=").is_err());
    }

    #[test]
    fn padding_must_complete_the_group() {
        assert_eq!(strip_padding(b"Zg=="), Ok(&b"Zg"[..]));
        assert_eq!(strip_padding(b"Zm8="), Ok(&b"Zm8"[..]));
        assert_eq!(strip_padding(b"Zm9v"), Ok(&b"Zm9v"[..]));
        for bad in ["Zg=", "Zg===", "Zm8==", "=", "====", "Zm9v="] {
            assert_eq!(strip_padding(bad.as_bytes()), Err(DecodeError::InvalidPadding), "{bad}");
        }
    }

    #[test]
    fn rejects_non_zero_trailing_bits() {
        // 'h' leaves 0b0001 in the discarded low bits.
        assert!(matches!(
            decode_standard("Zh=="),
            Err(DecodeError::InvalidLastSymbol { offset: 1, byte: b'h' })
        ));
    }
}
