use clap::{CommandFactory, Parser, Subcommand};
use otp::cli::{check_files, decrypt_file, encrypt_file, EncryptOptions};
use otp::random::KeySourceKind;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Version info from build.rs
const VERSION: &str = env!("CARGO_PKG_VERSION");
const PROFILE: &str = env!("OTP_PROFILE");
const GIT_HASH: &str = env!("OTP_GIT_HASH");

fn get_version() -> &'static str {
    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();
    VERSION_STRING.get_or_init(|| format!("{} ({} build, git {})", VERSION, PROFILE, GIT_HASH))
}

#[derive(Parser)]
#[command(name = "otp")]
#[command(about = "Keyed substitution cipher for letters and spaces", long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
#[command(override_usage = "otp -e <INPUT> <OUTPUT> <KEYS>\n       otp -d <INPUT> <OUTPUT> <KEYS>\n       otp check <TEXT> [KEYS]")]
struct Cli {
    /// Print version
    #[arg(short = 'V', long)]
    version: bool,

    /// Encrypt INPUT into OUTPUT and write the generated keys to KEYS
    #[arg(
        short = 'e',
        long,
        conflicts_with = "decrypt",
        requires = "input",
        requires = "output",
        requires = "keys"
    )]
    encrypt: bool,

    /// Decrypt INPUT into OUTPUT using the keys read from KEYS
    #[arg(short = 'd', long, requires = "input", requires = "output", requires = "keys")]
    decrypt: bool,

    /// File to read (plain text or ciphertext)
    input: Option<PathBuf>,

    /// File to write (ciphertext or recovered text)
    output: Option<PathBuf>,

    /// Key file (written by -e, read by -d)
    keys: Option<PathBuf>,

    /// Key generator used by -e (os, thread, seeded) [default: os]
    #[arg(long, value_parser = parse_key_source)]
    rng: Option<KeySourceKind>,

    /// Seed for `--rng seeded`
    #[arg(long)]
    seed: Option<u64>,

    /// Log level (trace, debug, info, warn, error); OTP_LOG overrides
    #[arg(long, default_value = "warn", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a text file and, optionally, its key file
    Check {
        /// Text file to validate
        text: PathBuf,

        /// Key file to validate against the text
        keys: Option<PathBuf>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
}

fn parse_key_source(s: &str) -> Result<KeySourceKind, String> {
    s.parse().map_err(|e| format!("{}", e))
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_env("OTP_LOG").unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    if cli.version {
        println!("otp {}", get_version());
        return ExitCode::SUCCESS;
    }

    if let Some(Commands::Check { text, keys, json }) = cli.command {
        return match check_files(&text, keys.as_deref()) {
            Ok(report) => {
                let rendered = if json {
                    report.to_json().map(|mut s| {
                        s.push('\n');
                        s
                    })
                } else {
                    Ok(report.render())
                };
                match rendered {
                    Ok(out) => {
                        print!("{}", out);
                        if report.is_valid() {
                            ExitCode::SUCCESS
                        } else {
                            ExitCode::FAILURE
                        }
                    }
                    Err(e) => {
                        eprintln!("Error: {}", e);
                        ExitCode::FAILURE
                    }
                }
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                ExitCode::FAILURE
            }
        };
    }

    let (input, output, keys) = match (cli.input, cli.output, cli.keys) {
        (Some(input), Some(output), Some(keys)) if cli.encrypt || cli.decrypt => {
            (input, output, keys)
        }
        _ => {
            // Invalid invocation: show usage and fail
            let _ = Cli::command().write_help(&mut std::io::stderr());
            eprintln!();
            return ExitCode::from(2);
        }
    };

    let result = if cli.encrypt {
        let key_source = cli.rng.unwrap_or_default();
        if cli.seed.is_some() && key_source != KeySourceKind::Seeded {
            tracing::warn!(rng = ?key_source, "--seed is ignored unless --rng seeded is given");
        }
        let options = EncryptOptions {
            key_source,
            seed: cli.seed,
        };
        encrypt_file(&input, &output, &keys, &options).map(|summary| {
            println!(
                "Encrypted {} symbols to {}; keys saved to {}",
                summary.symbols,
                summary.output.display(),
                summary.keys.display()
            );
        })
    } else {
        if cli.rng.is_some() || cli.seed.is_some() {
            tracing::warn!("--rng and --seed are ignored when decrypting");
        }
        decrypt_file(&input, &output, &keys).map(|summary| {
            println!(
                "Decrypted {} symbols to {}",
                summary.symbols,
                summary.output.display()
            );
        })
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
