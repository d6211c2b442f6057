use std::io::{self, BufRead};

use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;

use moneytree_b58::{b64, base58, check, convert, hashes, Result};

#[derive(Parser, Debug, PartialEq)]
#[clap(version, about = "Base58 / Base58Check encoder and decoder")]
pub(crate) struct CliArgs {
    /// Print a JSON object instead of the bare result.
    #[clap(long, global = true)]
    pub(crate) json: bool,

    #[clap(subcommand)]
    pub(crate) command: Command,
}

#[derive(Subcommand, Debug, PartialEq)]
pub(crate) enum Command {
    /// Base58-encode a hex payload.
    Encode { hex: String },
    /// Decode base58 to hex.
    Decode { base58: String },
    /// Base58Check-encode a hex payload.
    EncodeCheck { hex: String },
    /// Verify a base58check string and print its payload as hex.
    DecodeCheck { base58: String },
    /// Hash a hex payload.
    Hash {
        #[clap(value_enum)]
        algorithm: HashAlgorithm,
        hex: String,
    },
    /// HMAC-SHA512 of a hex message under a hex key.
    HmacSha512 { key: String, message: String },
    /// Standard base64 of a hex payload.
    ToBase64 { hex: String },
    /// Hex of a standard base64 string.
    FromBase64 { base64: String },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum HashAlgorithm {
    Sha256,
    Sha256d,
    Ripemd160,
    Hash160,
}

#[derive(Serialize, Debug)]
pub(crate) struct Report {
    pub(crate) input: String,
    pub(crate) output: String,
}

impl Report {
    pub(crate) fn render(&self, json: bool) -> serde_json::Result<String> {
        if json {
            serde_json::to_string(self)
        } else {
            Ok(self.output.clone())
        }
    }
}

/// `-` means the next line of `reader`, trimmed. Each `-` consumes one line.
fn resolve<R: BufRead>(arg: &str, reader: &mut R) -> io::Result<String> {
    if arg != "-" {
        return Ok(arg.to_string());
    }
    let mut line = String::new();
    reader.read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// Run `command`, reading any `-` arguments from `reader` in argument order.
pub(crate) fn run<R: BufRead>(
    command: &Command,
    reader: &mut R,
) -> std::result::Result<Report, Box<dyn std::error::Error>> {
    let (input, output) = match command {
        Command::Encode { hex } => {
            let input = resolve(hex, reader)?;
            let out = base58::encode_hex(&input)?;
            (input, out)
        }
        Command::Decode { base58: s } => {
            let input = resolve(s, reader)?;
            let out = base58::decode_to_hex(&input)?;
            (input, out)
        }
        Command::EncodeCheck { hex } => {
            let input = resolve(hex, reader)?;
            let out = check::encode_checked_hex(&input)?;
            (input, out)
        }
        Command::DecodeCheck { base58: s } => {
            let input = resolve(s, reader)?;
            let out = check::decode_checked_to_hex(&input)?;
            (input, out)
        }
        Command::Hash { algorithm, hex } => {
            let input = resolve(hex, reader)?;
            let out = hash(*algorithm, &input)?;
            (input, out)
        }
        Command::HmacSha512 { key, message } => {
            let key = convert::hex_to_bytes(&resolve(key, reader)?)?;
            let input = resolve(message, reader)?;
            let out = hashes::hmac_sha512_hex(&key, &convert::hex_to_bytes(&input)?);
            (input, out)
        }
        Command::ToBase64 { hex } => {
            let input = resolve(hex, reader)?;
            let out = b64::hex_to_base64(&input)?;
            (input, out)
        }
        Command::FromBase64 { base64 } => {
            let input = resolve(base64, reader)?;
            let out = b64::base64_to_hex(&input)?;
            (input, out)
        }
    };
    Ok(Report { input, output })
}

/// Run and render in one step, as the binary does.
pub(crate) fn execute<R: BufRead>(
    args: &CliArgs,
    reader: &mut R,
) -> std::result::Result<String, Box<dyn std::error::Error>> {
    Ok(run(&args.command, reader)?.render(args.json)?)
}

fn hash(algorithm: HashAlgorithm, hex: &str) -> Result<String> {
    let data = convert::hex_to_bytes(hex)?;
    Ok(match algorithm {
        HashAlgorithm::Sha256 => convert::bytes_to_hex(&hashes::sha256(&data)),
        HashAlgorithm::Sha256d => convert::bytes_to_hex(&hashes::sha256d(&data)),
        HashAlgorithm::Ripemd160 => convert::bytes_to_hex(&hashes::ripemd160(&data)),
        HashAlgorithm::Hash160 => convert::bytes_to_hex(&hashes::hash160(&data)),
    })
}
