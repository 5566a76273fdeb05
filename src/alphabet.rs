use crate::config::Case;

/// Sentinel in the decode table for bytes outside the alphabet.
const INVALID: u8 = 0xFF;

/// A validated encoding alphabet with its decode table and framing data.
///
/// Symbols are ASCII, ordered, and distinct; the radix is the symbol count.
/// Decoding goes through a flat 256-entry value table built once at
/// construction, with optional case canonicalization applied first.
#[derive(Debug, Clone)]
pub struct Alphabet {
    symbols: Vec<u8>,
    values: [u8; 256],
    padding: Option<u8>,
    case: Case,
    case_sensitive: bool,
    prefix: u8,
}

impl Alphabet {
    /// Builds an alphabet from catalog data.
    ///
    /// # Errors
    ///
    /// Returns an error if the alphabet has fewer than two or more than 255 symbols,
    /// contains non-ASCII or duplicate symbols, or if the padding symbol
    /// collides with the alphabet.
    pub fn new(
        symbols: &str,
        padding: Option<char>,
        case: Case,
        case_sensitive: bool,
        prefix: char,
    ) -> Result<Self, String> {
        if symbols.len() < 2 {
            return Err("Alphabet needs at least two symbols".to_string());
        }
        if !symbols.is_ascii() {
            return Err(format!("Alphabet must be ASCII: {}", symbols));
        }
        if symbols.len() > 255 {
            return Err(format!("Alphabet too large: {} symbols", symbols.len()));
        }
        if !prefix.is_ascii() {
            return Err(format!("Prefix must be ASCII: {}", prefix));
        }

        let mut values = [INVALID; 256];
        for (i, &b) in symbols.as_bytes().iter().enumerate() {
            if values[b as usize] != INVALID {
                return Err(format!("Duplicate symbol in alphabet: {}", b as char));
            }
            values[b as usize] = i as u8;
        }

        let padding = match padding {
            Some(c) if !c.is_ascii() => {
                return Err(format!("Padding must be ASCII: {}", c));
            }
            Some(c) if values[c as usize] != INVALID => {
                return Err(format!("Padding symbol is in the alphabet: {}", c));
            }
            Some(c) => Some(c as u8),
            None => None,
        };

        Ok(Alphabet {
            symbols: symbols.as_bytes().to_vec(),
            values,
            padding,
            case,
            case_sensitive,
            prefix: prefix as u8,
        })
    }

    /// Number of symbols, i.e. the base of the positional number system.
    pub fn radix(&self) -> usize {
        self.symbols.len()
    }

    /// True iff the radix is an exact power of two, enabling fixed-block
    /// conversion instead of multiprecision arithmetic.
    pub fn is_chunkable(&self) -> bool {
        self.symbols.len().is_power_of_two()
    }

    /// Bits per encoded symbol. Meaningful only for chunkable alphabets.
    pub fn bits(&self) -> usize {
        self.symbols.len().trailing_zeros() as usize
    }

    pub fn padding(&self) -> Option<u8> {
        self.padding
    }

    pub fn prefix(&self) -> u8 {
        self.prefix
    }

    pub fn case(&self) -> Case {
        self.case
    }

    pub fn is_case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    /// The symbol for digit value zero; leading zero bytes encode to runs
    /// of this symbol in non-chunkable bases.
    pub fn zero_symbol(&self) -> u8 {
        self.symbols[0]
    }

    /// Maps a digit value to its symbol. Panics if out of range, which the
    /// engines rule out by construction.
    pub fn digit(&self, value: usize) -> u8 {
        self.symbols[value]
    }

    /// Maps a symbol back to its digit value, canonicalizing case first for
    /// case-insensitive alphabets. Returns `None` for symbols outside the
    /// alphabet; padding is not a digit.
    pub fn value(&self, symbol: u8) -> Option<u8> {
        let symbol = if self.case_sensitive {
            symbol
        } else {
            match self.case {
                Case::Lower => symbol.to_ascii_lowercase(),
                Case::Upper => symbol.to_ascii_uppercase(),
                Case::Both | Case::None => symbol,
            }
        };
        match self.values[symbol as usize] {
            INVALID => None,
            value => Some(value),
        }
    }

    /// Raw symbol table, in digit order.
    pub fn symbols(&self) -> &[u8] {
        &self.symbols
    }
}
