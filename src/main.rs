use clap::Parser;
use multibase::{Base, Error, decode, decode_with, encode};
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "multibase")]
#[command(about = "Convert between binary data and multibase text encodings", long_about = None)]
struct Cli {
    /// Base encoding (required to encode; inferred from the prefix when decoding)
    #[arg(short, long)]
    encoding: Option<String>,

    /// Decode instead of encode
    #[arg(short, long)]
    decode: bool,

    /// Prepend the multiformat prefix when encoding
    #[arg(short, long)]
    multibase: bool,

    /// List supported encodings
    #[arg(short, long)]
    list: bool,

    /// File to read (stdin if omitted)
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if cli.list {
        println!("Supported encodings:\n");
        for base in Base::ALL {
            let alphabet = base.alphabet();
            let preview: String = alphabet
                .symbols()
                .iter()
                .take(20)
                .map(|&b| b as char)
                .collect();
            let suffix = if alphabet.radix() > 20 { "..." } else { "" };
            println!(
                "  {:<18} base-{:<3} prefix '{}'  {}{}",
                base.name(),
                alphabet.radix(),
                base.prefix(),
                preview,
                suffix
            );
        }
        return Ok(());
    }

    let base = match cli.encoding.as_deref() {
        Some(name) => Some(
            Base::from_name(name).ok_or_else(|| Error::UnknownBaseName(name.to_string()))?,
        ),
        None => None,
    };

    let input = if let Some(path) = &cli.file {
        fs::read(path)?
    } else {
        let mut buffer = Vec::new();
        io::stdin().read_to_end(&mut buffer)?;
        buffer
    };

    if cli.decode {
        let text = String::from_utf8(input).map_err(|_| "Input must be valid UTF-8 for decoding")?;
        let bytes = match base {
            Some(base) => decode_with(text.trim(), base)?,
            None => decode(text.trim())?.1,
        };
        io::stdout().write_all(&bytes)?;
    } else {
        let base = base.ok_or("Missing --encoding: required to encode. Use --list to see names.")?;
        println!("{}", encode(&input, base, cli.multibase));
    }

    Ok(())
}
