use clap::{Parser, Subcommand};
use textkit::cli::{
    run_chars, run_decode, run_encode, run_scramble, CharsOptions, DecodeOptions, EncodeOptions,
    ScrambleOptions,
};
use textkit::CharClass;
use std::path::PathBuf;
use std::process::ExitCode;

/// Version info from build.rs
const VERSION: &str = env!("TEXTKIT_VERSION");
const PROFILE: &str = env!("TEXTKIT_PROFILE");
const GIT_HASH: &str = env!("TEXTKIT_GIT_HASH");

#[derive(Parser)]
#[command(name = "textkit")]
#[command(about = "Hex codec, seeded scrambling and character class listing", long_about = None)]
struct Cli {
    /// Print version
    #[arg(short = 'V', long)]
    version: bool,

    /// Log filter (trace, debug, info, warn, error)
    #[arg(long, env = "TEXTKIT_LOG", default_value = "warn", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Hex-encode text, a file, or stdin
    #[command(alias = "e")]
    Encode {
        /// Text to encode (reads stdin if omitted)
        #[arg(allow_hyphen_values = true)]
        text: Option<String>,

        /// Encode the raw bytes of a file
        #[arg(long, conflicts_with = "text")]
        file: Option<PathBuf>,
    },

    /// Decode hex, ignoring spaces, brackets and other separators
    #[command(alias = "d")]
    Decode {
        /// Hex input (reads stdin if omitted)
        hex: Option<String>,

        /// Write decoded bytes to a file
        #[arg(long, short)]
        output: Option<PathBuf>,

        /// Print decoded bytes as normalized hex
        #[arg(long, conflicts_with = "output")]
        raw: bool,
    },

    /// Repeatably shuffle the characters of a string
    #[command(alias = "s")]
    Scramble {
        /// Text to scramble (reads stdin if omitted)
        #[arg(allow_hyphen_values = true)]
        text: Option<String>,

        /// Seed for the shuffle
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        seed: i64,
    },

    /// List the characters in a character class
    #[command(alias = "c")]
    Chars {
        /// Class name: digits, letters, lowercase, uppercase, alphanumerics,
        /// whitespace, punctuation, control, hex, ascii-digits
        #[arg(value_parser = parse_class)]
        class: CharClass,

        /// Maximum number of characters to print
        #[arg(long)]
        limit: Option<usize>,

        /// Print a JSON array instead of one character per line
        #[arg(long)]
        json: bool,
    },
}

fn parse_class(s: &str) -> Result<CharClass, String> {
    s.parse().map_err(|e| format!("{}", e))
}

fn init_logging(level: &str) {
    let env_filter = tracing_subscriber::EnvFilter::try_new(level)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    if cli.version {
        println!("textkit {} {} ({})", PROFILE, VERSION, GIT_HASH);
        return ExitCode::SUCCESS;
    }

    let command = match cli.command {
        Some(cmd) => cmd,
        None => {
            use clap::CommandFactory;
            if let Err(e) = Cli::command().print_help() {
                eprintln!("Error: {}", e);
                return ExitCode::FAILURE;
            }
            println!();
            return ExitCode::SUCCESS;
        }
    };

    let result = match command {
        Commands::Encode { text, file } => run_encode(&EncodeOptions { text, file }),
        Commands::Decode { hex, output, raw } => run_decode(&DecodeOptions { hex, output, raw }),
        Commands::Scramble { text, seed } => run_scramble(&ScrambleOptions { text, seed }),
        Commands::Chars { class, limit, json } => run_chars(&CharsOptions { class, limit, json }),
    };

    match result {
        Ok(output) => {
            print!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
