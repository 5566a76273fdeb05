use crate::alphabet::Alphabet;
use crate::base::Base;
use crate::error::Error;
use crate::{bignum, chunked};

/// Stateless encode/decode entry points for one base encoding.
///
/// Resolves the catalog entry once and routes every call to the fixed-block
/// engine or the multiprecision engine depending on the radix. A `Codec` is
/// cheap to construct and freely shareable across threads.
#[derive(Debug, Clone, Copy)]
pub struct Codec {
    base: Base,
    alphabet: &'static Alphabet,
}

impl Codec {
    pub fn new(base: Base) -> Codec {
        Codec {
            base,
            alphabet: base.alphabet(),
        }
    }

    pub fn base(&self) -> Base {
        self.base
    }

    pub fn alphabet(&self) -> &'static Alphabet {
        self.alphabet
    }

    pub fn is_chunkable(&self) -> bool {
        self.alphabet.is_chunkable()
    }

    /// Encoded symbols per independent block, if the radix permits blocks.
    pub fn encoded_chunk_size(&self) -> Option<usize> {
        self.is_chunkable()
            .then(|| chunked::encoded_chunk_size(self.alphabet))
    }

    /// Decoded bytes per independent block, if the radix permits blocks.
    pub fn decoded_chunk_size(&self) -> Option<usize> {
        self.is_chunkable()
            .then(|| chunked::decoded_chunk_size(self.alphabet))
    }

    /// Output length for a `len`-byte input: exact for chunkable radices,
    /// an upper bound otherwise (trim to the length `encode_into` returns).
    pub fn encoded_size(&self, len: usize) -> usize {
        if self.is_chunkable() {
            chunked::encoded_size(len, self.alphabet)
        } else {
            bignum::encoded_size(len, self.alphabet)
        }
    }

    /// Upper bound on the decoded length of `input`.
    pub fn decoded_size(&self, input: &str) -> usize {
        if self.is_chunkable() {
            chunked::decoded_size(input.len(), self.alphabet)
        } else {
            bignum::decoded_size_of(input.as_bytes(), self.alphabet)
        }
    }

    pub fn encode(&self, input: &[u8]) -> String {
        let mut output = vec![0u8; self.encoded_size(input.len())];
        // the buffer is sized by encoded_size, so encoding cannot fail
        let written = self
            .encode_into(input, &mut output)
            .expect("encoded_size bounds the output length");
        output.truncate(written);
        output.into_iter().map(char::from).collect()
    }

    /// Encodes into a caller-supplied buffer, returning the symbol count.
    pub fn encode_into(&self, input: &[u8], output: &mut [u8]) -> Result<usize, Error> {
        if self.is_chunkable() {
            chunked::encode_into(input, self.alphabet, output)
        } else {
            bignum::encode_into(input, self.alphabet, output)
        }
    }

    pub fn decode(&self, input: &str) -> Result<Vec<u8>, Error> {
        let mut output = vec![0u8; self.decoded_size(input)];
        let written = self.decode_into(input, &mut output)?;
        output.truncate(written);
        Ok(output)
    }

    /// Decodes into a caller-supplied buffer, returning the byte count.
    pub fn decode_into(&self, input: &str, output: &mut [u8]) -> Result<usize, Error> {
        // Alphabets are ASCII, so any multi-byte character is invalid;
        // reject it up front rather than reporting a garbled byte.
        if let Some(c) = input.chars().find(|c| !c.is_ascii()) {
            return Err(Error::InvalidCharacter(c));
        }
        if self.is_chunkable() {
            chunked::decode_into(input.as_bytes(), self.alphabet, output)
        } else {
            bignum::decode_into(input.as_bytes(), self.alphabet, output)
        }
    }
}
