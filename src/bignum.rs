//! Whole-buffer conversion for radices that are not powers of two.
//!
//! Base 10, 36 and 58 have no fixed byte-to-symbol block, so the input is
//! treated as a single big-endian multiprecision integer. Leading zero bytes
//! cannot survive that conversion (the integer value discards them), so they
//! are counted up front and re-emitted as a run of the zero symbol; decode
//! applies the inverse rule to leading zero symbols.

use num_bigint::BigUint;
use num_traits::Zero;

use crate::alphabet::Alphabet;
use crate::error::Error;

const LN_256: f64 = 5.545177444479562;

/// Upper bound on the encoded length of a `len`-byte input.
///
/// A value below 256^len has at most `ceil(len * log_radix(256))` digits,
/// and each stripped leading zero byte costs exactly one symbol while
/// contributing at least one to the formula (radix <= 256). The extra one
/// absorbs rounding in the logarithm ratio; callers trim to the length
/// returned by [`encode_into`].
pub fn encoded_size(len: usize, alphabet: &Alphabet) -> usize {
    (len as f64 * LN_256 / (alphabet.radix() as f64).ln()).ceil() as usize + 1
}

/// Upper bound on the decoded length of `len` non-zero-prefixed symbols.
pub fn decoded_size(len: usize, alphabet: &Alphabet) -> usize {
    (len as f64 * (alphabet.radix() as f64).ln() / LN_256).ceil() as usize + 1
}

/// Upper bound on the decoded length of `input`, accounting for leading
/// zero symbols, each of which decodes to exactly one zero byte.
pub fn decoded_size_of(input: &[u8], alphabet: &Alphabet) -> usize {
    let zeros = count_leading_zero_symbols(input, alphabet);
    zeros + decoded_size(input.len() - zeros, alphabet)
}

pub fn count_leading_zero_symbols(input: &[u8], alphabet: &Alphabet) -> usize {
    input
        .iter()
        .take_while(|&&symbol| alphabet.value(symbol) == Some(0))
        .count()
}

pub fn encode_into(input: &[u8], alphabet: &Alphabet, output: &mut [u8]) -> Result<usize, Error> {
    let zeros = input.iter().take_while(|&&byte| byte == 0).count();
    let digits = if zeros == input.len() {
        Vec::new()
    } else {
        BigUint::from_bytes_be(&input[zeros..]).to_radix_be(alphabet.radix() as u32)
    };

    let required = zeros + digits.len();
    if output.len() < required {
        return Err(Error::BufferTooSmall {
            required,
            available: output.len(),
        });
    }

    output[..zeros].fill(alphabet.zero_symbol());
    for (slot, &digit) in output[zeros..required].iter_mut().zip(&digits) {
        *slot = alphabet.digit(digit as usize);
    }
    Ok(required)
}

pub fn decode_into(input: &[u8], alphabet: &Alphabet, output: &mut [u8]) -> Result<usize, Error> {
    let radix = alphabet.radix() as u32;
    let mut digits = Vec::with_capacity(input.len());
    for &symbol in input {
        let value = alphabet
            .value(symbol)
            .ok_or(Error::InvalidCharacter(symbol as char))?;
        digits.push(value);
    }

    let zeros = digits.iter().take_while(|&&digit| digit == 0).count();
    let mut num = BigUint::zero();
    for &digit in &digits[zeros..] {
        num = num * radix + u32::from(digit);
    }
    let bytes = if num.is_zero() {
        Vec::new()
    } else {
        num.to_bytes_be()
    };

    let required = zeros + bytes.len();
    if output.len() < required {
        return Err(Error::BufferTooSmall {
            required,
            available: output.len(),
        });
    }

    output[..zeros].fill(0);
    output[zeros..required].copy_from_slice(&bytes);
    Ok(required)
}
