//! Command-line interface for the `aes128-core` engine.

#![forbid(unsafe_code)]

use std::fmt;
use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use aes128_core::{Aes128, Aes128Key, Observer, State};
use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};

/// AES-128 file encryption CLI.
#[derive(Parser)]
#[command(name = "aes128", version, author, about = "AES-128 file encryption")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
#[group(required = true, multiple = false)]
struct KeyArg {
    /// Key as 16 comma-separated decimal bytes, e.g. "0,1,2,...,15".
    #[arg(long, value_name = "BYTES")]
    key: Option<String>,
    /// Key as 32 hex characters.
    #[arg(long, value_name = "HEX")]
    key_hex: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt a file block by block, padding the final block.
    Encrypt {
        #[command(flatten)]
        key: KeyArg,
        /// Input file.
        #[arg(long, value_name = "FILE")]
        input: PathBuf,
        /// Output path (defaults to the input path with `.bin` appended).
        #[arg(long, value_name = "FILE")]
        output: Option<PathBuf>,
        /// Print the key, every round key and every loaded block as 4x4 matrices.
        #[arg(long, default_value_t = false)]
        debug: bool,
        /// Do not print progress percentages.
        #[arg(long, short, default_value_t = false)]
        quiet: bool,
    },
    /// Print the eleven round keys as hex.
    Schedule {
        #[command(flatten)]
        key: KeyArg,
    },
    /// Check the engine against published AES-128 vectors.
    Vector,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    match cli.command {
        Commands::Encrypt {
            key,
            input,
            output,
            debug,
            quiet,
        } => {
            let output = output.unwrap_or_else(|| default_output(&input));
            cmd_encrypt(&key, &input, &output, debug, quiet)
        }
        Commands::Schedule { key } => cmd_schedule(&key),
        Commands::Vector => cmd_vector(),
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

/// Terminal observer: progress percentages and, with `--debug`, the
/// intermediate matrices.
///
/// Observer hooks cannot fail, so the first write error is kept and
/// reported by [`Console::finish`]; later lines are dropped.
struct Console<W: Write> {
    out: W,
    debug: bool,
    quiet: bool,
    last_percent: u8,
    error: Option<io::Error>,
}

impl<W: Write> Console<W> {
    fn new(out: W, debug: bool, quiet: bool) -> Self {
        Self {
            out,
            debug,
            quiet,
            last_percent: 0,
            error: None,
        }
    }

    fn line(&mut self, args: fmt::Arguments<'_>) {
        if self.error.is_some() {
            return;
        }
        if let Err(err) = writeln!(self.out, "{args}") {
            self.error = Some(err);
        }
    }

    fn matrix(&mut self, title: &str, state: &State) {
        if self.debug {
            self.line(format_args!("**** {title} ****\n{state}"));
        }
    }

    fn finish(mut self) -> io::Result<()> {
        match self.error.take() {
            Some(err) => Err(err),
            None => self.out.flush(),
        }
    }
}

impl<W: Write> Observer for Console<W> {
    fn master_key(&mut self, key: &State) {
        self.matrix("key", key);
    }

    fn round_key(&mut self, round: usize, key: &State) {
        self.matrix(&format!("round key {round}"), key);
    }

    fn block_loaded(&mut self, index: u64, state: &State) {
        self.matrix(&format!("plaintext block {index}"), state);
    }

    fn whitened(&mut self, index: u64, state: &State) {
        self.matrix(&format!("block {index} after round key 0"), state);
    }

    fn progress(&mut self, percent: u8) {
        if self.quiet || percent <= self.last_percent {
            return;
        }
        self.last_percent = percent;
        self.line(format_args!("{percent} %"));
    }
}

fn cmd_encrypt(key: &KeyArg, input: &Path, output: &Path, debug: bool, quiet: bool) -> Result<()> {
    let key = parse_key(key)?;
    if same_file(input, output) {
        bail!(
            "output {} is the input file; refusing to overwrite it",
            output.display()
        );
    }

    let mut console = Console::new(io::stdout().lock(), debug, quiet);
    let cipher = Aes128::with_observer(&key, &mut console);

    let input_len = fs::metadata(input)
        .with_context(|| format!("stat {}", input.display()))?
        .len();
    let reader = BufReader::new(
        File::open(input).with_context(|| format!("open {}", input.display()))?,
    );
    let writer = BufWriter::new(
        File::create(output).with_context(|| format!("create {}", output.display()))?,
    );

    let written = cipher
        .encrypt_stream_observed(reader, writer, Some(input_len), &mut console)
        .with_context(|| format!("encrypt {} into {}", input.display(), output.display()))?;
    console.finish().context("write to stdout")?;
    log::info!(
        "wrote {written} bytes to {} ({input_len} plaintext bytes)",
        output.display()
    );
    Ok(())
}

fn cmd_schedule(key: &KeyArg) -> Result<()> {
    let key = parse_key(key)?;
    let cipher = Aes128::new(&key);
    for (round, block) in cipher.round_keys().to_blocks().iter().enumerate() {
        println!("{round:2}: {}", hex::encode(block));
    }
    Ok(())
}

fn cmd_vector() -> Result<()> {
    const VECTORS: [(&str, &str, &str); 3] = [
        (
            "00000000000000000000000000000000",
            "00000000000000000000000000000000",
            "66e94bd4ef8a2c3b884cfa59ca342b2e",
        ),
        (
            "000102030405060708090a0b0c0d0e0f",
            "00112233445566778899aabbccddeeff",
            "69c4e0d86a7b0430d8cdb78070b4c55a",
        ),
        (
            "2b7e151628aed2a6abf7158809cf4f3c",
            "3243f6a8885a308d313198a2e0370734",
            "3925841d02dc09fbdc118597196a0b32",
        ),
    ];

    for (key_hex, plain_hex, expected) in VECTORS {
        let cipher = Aes128::new(&parse_key_hex(key_hex)?);
        let plain = decode_block(plain_hex).context("decode plaintext hex")?;
        let actual = hex::encode(cipher.encrypt_block(&plain));
        if actual != expected {
            bail!("vector mismatch for key {key_hex}: expected {expected}, got {actual}");
        }
        println!("ok  {key_hex}  {plain_hex} -> {actual}");
    }
    Ok(())
}

fn parse_key(arg: &KeyArg) -> Result<Aes128Key> {
    match (&arg.key, &arg.key_hex) {
        (Some(text), _) => Aes128Key::parse(text).context("parse key"),
        (None, Some(hex_str)) => parse_key_hex(hex_str),
        (None, None) => bail!("either --key or --key-hex is required"),
    }
}

fn parse_key_hex(hex_str: &str) -> Result<Aes128Key> {
    let bytes = hex::decode(hex_str.trim()).context("decode key hex")?;
    Aes128Key::try_from(bytes.as_slice()).context("AES-128 key must be 16 bytes (32 hex characters)")
}

fn decode_block(hex_str: &str) -> Result<[u8; 16]> {
    let bytes = hex::decode(hex_str)?;
    let mut block = [0u8; 16];
    if bytes.len() != block.len() {
        bail!("block must be 16 bytes, got {}", bytes.len());
    }
    block.copy_from_slice(&bytes);
    Ok(block)
}

/// Compares canonical paths when both exist, the paths as given otherwise.
fn same_file(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => a == b,
    }
}

fn default_output(input: &Path) -> PathBuf {
    let mut name = input.as_os_str().to_owned();
    name.push(".bin");
    PathBuf::from(name)
}
