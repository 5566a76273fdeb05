//! Multibase: convert binary data to and from self-describing base-encoded
//! text.
//!
//! Supports 22 positional base encodings (base2 through base64urlpad),
//! each with a stable one-character multiformat prefix so decoded text can
//! identify its own encoding.
//!
//! ```
//! use multibase::{Base, decode, encode};
//!
//! let encoded = encode(b"elephant", Base::Base58Btc, true);
//! assert_eq!(encoded, "zHxwBpKd9UKM");
//!
//! let (base, bytes) = decode(&encoded).unwrap();
//! assert_eq!(base, Base::Base58Btc);
//! assert_eq!(bytes, b"elephant");
//! ```

mod alphabet;
mod base;
mod bignum;
mod chunked;
mod codec;
mod config;
mod error;

pub use alphabet::Alphabet;
pub use base::Base;
pub use codec::Codec;
pub use config::{BaseConfig, BasesConfig, Case};
pub use error::Error;

/// Encodes `input` in the given base, prepending the multiformat prefix
/// when `multiformat` is set.
pub fn encode(input: &[u8], base: Base, multiformat: bool) -> String {
    let codec = Codec::new(base);
    let mut output = String::with_capacity(
        usize::from(multiformat) + codec.encoded_size(input.len()),
    );
    if multiformat {
        output.push(base.prefix());
    }
    output.push_str(&codec.encode(input));
    output
}

/// Decodes multiformat text: the first character selects the base, the rest
/// is the payload.
pub fn decode(input: &str) -> Result<(Base, Vec<u8>), Error> {
    let mut chars = input.chars();
    let prefix = chars.next().ok_or(Error::EmptyInput)?;
    let base = Base::from_prefix(prefix).ok_or(Error::UnsupportedEncoding(prefix))?;
    let bytes = Codec::new(base).decode(chars.as_str())?;
    Ok((base, bytes))
}

/// Decodes text with an explicitly chosen base (no prefix expected).
pub fn decode_with(input: &str, base: Base) -> Result<Vec<u8>, Error> {
    Codec::new(base).decode(input)
}

/// Output length needed to encode `len` bytes, including the prefix
/// character when `multiformat` is set. Exact for chunkable radices, an
/// upper bound otherwise.
pub fn encoded_size(len: usize, base: Base, multiformat: bool) -> usize {
    usize::from(multiformat) + Codec::new(base).encoded_size(len)
}
