use std::sync::OnceLock;

use crate::alphabet::Alphabet;
use crate::config::BasesConfig;

/// Closed enumeration of the supported base encodings.
///
/// Each variant carries a stable one-character multiformat prefix; persisted
/// encoded text depends on these never changing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Base {
    Base2,
    Base8,
    Base10,
    Base16,
    Base16Upper,
    Base32,
    Base32Upper,
    Base32Pad,
    Base32PadUpper,
    Base32Hex,
    Base32HexUpper,
    Base32HexPad,
    Base32HexPadUpper,
    Base32Z,
    Base36,
    Base36Upper,
    Base58Flickr,
    Base58Btc,
    Base64,
    Base64Pad,
    Base64Url,
    Base64UrlPad,
}

impl Base {
    pub const ALL: [Base; 22] = [
        Base::Base2,
        Base::Base8,
        Base::Base10,
        Base::Base16,
        Base::Base16Upper,
        Base::Base32,
        Base::Base32Upper,
        Base::Base32Pad,
        Base::Base32PadUpper,
        Base::Base32Hex,
        Base::Base32HexUpper,
        Base::Base32HexPad,
        Base::Base32HexPadUpper,
        Base::Base32Z,
        Base::Base36,
        Base::Base36Upper,
        Base::Base58Flickr,
        Base::Base58Btc,
        Base::Base64,
        Base::Base64Pad,
        Base::Base64Url,
        Base::Base64UrlPad,
    ];

    /// Catalog name, matching the keys in `bases.toml`.
    pub fn name(self) -> &'static str {
        match self {
            Base::Base2 => "base2",
            Base::Base8 => "base8",
            Base::Base10 => "base10",
            Base::Base16 => "base16",
            Base::Base16Upper => "base16upper",
            Base::Base32 => "base32",
            Base::Base32Upper => "base32upper",
            Base::Base32Pad => "base32pad",
            Base::Base32PadUpper => "base32padupper",
            Base::Base32Hex => "base32hex",
            Base::Base32HexUpper => "base32hexupper",
            Base::Base32HexPad => "base32hexpad",
            Base::Base32HexPadUpper => "base32hexpadupper",
            Base::Base32Z => "base32z",
            Base::Base36 => "base36",
            Base::Base36Upper => "base36upper",
            Base::Base58Flickr => "base58flickr",
            Base::Base58Btc => "base58btc",
            Base::Base64 => "base64",
            Base::Base64Pad => "base64pad",
            Base::Base64Url => "base64url",
            Base::Base64UrlPad => "base64urlpad",
        }
    }

    /// Looks up a base by catalog name.
    pub fn from_name(name: &str) -> Option<Base> {
        Base::ALL.iter().copied().find(|base| base.name() == name)
    }

    /// Looks up a base by its multiformat prefix character.
    pub fn from_prefix(prefix: char) -> Option<Base> {
        if !prefix.is_ascii() {
            return None;
        }
        catalog().by_prefix[prefix as usize]
    }

    /// Multiformat prefix character.
    pub fn prefix(self) -> char {
        self.alphabet().prefix() as char
    }

    /// Catalog metadata for this base. Total: every variant has an entry.
    pub fn alphabet(self) -> &'static Alphabet {
        &catalog().entries[self as usize]
    }
}

impl std::fmt::Display for Base {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

struct Catalog {
    entries: Vec<Alphabet>,
    by_prefix: [Option<Base>; 128],
}

impl Catalog {
    fn build() -> Result<Catalog, String> {
        let config = BasesConfig::load_default().map_err(|e| e.to_string())?;
        let mut entries = Vec::with_capacity(Base::ALL.len());
        let mut by_prefix = [None; 128];
        for base in Base::ALL {
            let cfg = config
                .get_base(base.name())
                .ok_or_else(|| format!("Missing catalog entry: {}", base.name()))?;
            let mut prefix_chars = cfg.prefix.chars();
            let prefix = match (prefix_chars.next(), prefix_chars.next()) {
                (Some(c), None) => c,
                _ => return Err(format!("Prefix must be one character: {:?}", cfg.prefix)),
            };
            let padding = cfg.padding.as_ref().and_then(|s| s.chars().next());
            let alphabet = Alphabet::new(
                &cfg.alphabet,
                padding,
                cfg.case,
                cfg.case_sensitive,
                prefix,
            )
            .map_err(|e| format!("{}: {}", base.name(), e))?;
            let slot = &mut by_prefix[alphabet.prefix() as usize];
            if slot.is_some() {
                return Err(format!("Duplicate multiformat prefix: {:?}", prefix));
            }
            *slot = Some(base);
            entries.push(alphabet);
        }
        Ok(Catalog { entries, by_prefix })
    }
}

/// The process-wide catalog, built once on first use and immutable after.
fn catalog() -> &'static Catalog {
    static CATALOG: OnceLock<Catalog> = OnceLock::new();
    CATALOG.get_or_init(|| Catalog::build().expect("embedded bases.toml is valid"))
}
