//! Fixed-block conversion for power-of-two radices.
//!
//! A radix of 2^b maps `lcm(8, b) / 8` bytes to `lcm(8, b) / b` symbols, so
//! conversion reduces to regrouping bits; no multiprecision arithmetic is
//! needed and every block converts independently of the rest of the input.

use num_integer::lcm;

use crate::alphabet::Alphabet;
use crate::error::Error;

/// Encoded symbols per block.
pub fn encoded_chunk_size(alphabet: &Alphabet) -> usize {
    lcm(8, alphabet.bits()) / alphabet.bits()
}

/// Decoded bytes per block.
pub fn decoded_chunk_size(alphabet: &Alphabet) -> usize {
    lcm(8, alphabet.bits()) / 8
}

/// Exact output length for a `len`-byte input, including padding symbols
/// when the encoding pads its final block.
pub fn encoded_size(len: usize, alphabet: &Alphabet) -> usize {
    if alphabet.padding().is_some() {
        len.div_ceil(decoded_chunk_size(alphabet)) * encoded_chunk_size(alphabet)
    } else {
        (len * 8).div_ceil(alphabet.bits())
    }
}

/// Upper bound on the decoded length of `len` symbols; the actual length is
/// returned by [`decode_into`] once padding and leftover bits are known.
pub fn decoded_size(len: usize, alphabet: &Alphabet) -> usize {
    len.div_ceil(encoded_chunk_size(alphabet)) * decoded_chunk_size(alphabet)
}

pub fn encode_into(input: &[u8], alphabet: &Alphabet, output: &mut [u8]) -> Result<usize, Error> {
    let required = encoded_size(input.len(), alphabet);
    if output.len() < required {
        return Err(Error::BufferTooSmall {
            required,
            available: output.len(),
        });
    }

    let bits = alphabet.bits();
    let mut bit_buffer = 0u32;
    let mut bits_in_buffer = 0usize;
    let mut written = 0usize;

    for &byte in input {
        bit_buffer = (bit_buffer << 8) | u32::from(byte);
        bits_in_buffer += 8;
        while bits_in_buffer >= bits {
            bits_in_buffer -= bits;
            let index = ((bit_buffer >> bits_in_buffer) & ((1 << bits) - 1)) as usize;
            output[written] = alphabet.digit(index);
            written += 1;
        }
    }

    // Final partial group: left-align the remaining bits.
    if bits_in_buffer > 0 {
        let index = ((bit_buffer << (bits - bits_in_buffer)) & ((1 << bits) - 1)) as usize;
        output[written] = alphabet.digit(index);
        written += 1;
    }

    if let Some(pad) = alphabet.padding() {
        while written < required {
            output[written] = pad;
            written += 1;
        }
    }

    Ok(written)
}

pub fn decode_into(input: &[u8], alphabet: &Alphabet, output: &mut [u8]) -> Result<usize, Error> {
    let required = decoded_size(input.len(), alphabet);
    if output.len() < required {
        return Err(Error::BufferTooSmall {
            required,
            available: output.len(),
        });
    }

    let bits = alphabet.bits();
    let padding = alphabet.padding();
    let mut bit_buffer = 0u32;
    let mut bits_in_buffer = 0usize;
    let mut written = 0usize;

    for (pos, &symbol) in input.iter().enumerate() {
        // Padding fills out the final block and carries no digits; once it
        // starts, nothing but padding may follow.
        if Some(symbol) == padding {
            if let Some(&stray) = input[pos..].iter().find(|&&b| Some(b) != padding) {
                return Err(Error::InvalidCharacter(stray as char));
            }
            break;
        }
        let value = alphabet
            .value(symbol)
            .ok_or(Error::InvalidCharacter(symbol as char))?;
        bit_buffer = (bit_buffer << bits) | u32::from(value);
        bits_in_buffer += bits;
        while bits_in_buffer >= 8 {
            bits_in_buffer -= 8;
            output[written] = ((bit_buffer >> bits_in_buffer) & 0xFF) as u8;
            written += 1;
        }
    }

    // Bits left over from the final partial group are fill, not data.
    Ok(written)
}
