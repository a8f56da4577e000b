use anyhow::{Context, Result, bail};
use camino::Utf8PathBuf;
use clap::{Parser, Subcommand};
use log::debug;

use devbelt::color::{self, blindness, contrast};
use devbelt::format::format_default;
use devbelt::history::History;
use devbelt::units::Category;
use devbelt::{fun, jwt, password, retest, tabular, timestamp, units};

#[derive(Parser, Debug)]
#[command(author, version, about = "Developer toolbox: converters, decoders and generators", long_about = None)]
struct Cli {
    /// Enable debug logging on stderr (RUST_LOG overrides)
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert one or more values between units, e.g. `convert km mi 100`
    Convert {
        from: String,
        to: String,
        #[arg(value_name = "VALUE", required = true)]
        values: Vec<String>,
        /// Category to resolve the units in (auto-detected when omitted)
        #[arg(long)]
        category: Option<String>,
    },
    /// List all categories, or the units of one category
    Units { category: Option<String> },
    /// Show a color in every representation plus accessibility metrics
    Color { input: String },
    /// Contrast ratio and WCAG verdicts for a color pair
    Contrast { foreground: String, background: String },
    /// Simulate how a color appears under a color-vision deficiency
    Simulate { input: String, kind: String },
    /// Decode a JWT header and payload (no signature verification)
    Jwt { token: String },
    /// Convert CSV to a JSON array of objects
    Csv2json {
        /// CSV file, or '-' for stdin
        file: Utf8PathBuf,
        #[arg(long, default_value_t = ',')]
        delimiter: char,
    },
    /// Convert a JSON array of objects to CSV
    Json2csv {
        /// JSON file, or '-' for stdin
        file: Utf8PathBuf,
        #[arg(long, default_value_t = ',')]
        delimiter: char,
    },
    /// Generate a password
    Password {
        #[arg(long, default_value_t = 16)]
        length: usize,
        /// Include symbol characters
        #[arg(long)]
        symbols: bool,
        #[arg(long)]
        no_lowercase: bool,
        #[arg(long)]
        no_uppercase: bool,
        #[arg(long)]
        no_digits: bool,
        /// Skip look-alike characters (O/0, l/1/I, ...)
        #[arg(long)]
        no_look_alikes: bool,
    },
    /// Test a regex pattern against text
    Regex {
        pattern: String,
        text: String,
        /// Replace matches instead of listing them ($n references supported)
        #[arg(long)]
        replace: Option<String>,
        #[arg(short = 'i', long)]
        ignore_case: bool,
    },
    /// Describe a unix or RFC 3339 timestamp
    Timestamp { input: String },
    /// Pick one option at random
    Pick {
        #[arg(value_name = "OPTION", required = true)]
        options: Vec<String>,
    },
    /// Flip a coin
    Coin,
    /// Roll a die
    Roll {
        #[arg(default_value_t = 6)]
        sides: u32,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let _logger = devbelt::logging::init(cli.verbose)?;

    match cli.command {
        Command::Convert {
            from,
            to,
            values,
            category,
        } => run_convert(&from, &to, &values, category.as_deref()),
        Command::Units { category } => run_units(category.as_deref()),
        Command::Color { input } => {
            let rgb = color::parse(&input)?;
            let report = color::ColorReport::for_color(rgb);
            println!("{}", serde_json::to_string_pretty(&report)?);
            Ok(())
        }
        Command::Contrast {
            foreground,
            background,
        } => {
            let fg = color::parse(&foreground)?;
            let bg = color::parse(&background)?;
            let check = contrast::WcagCheck::for_ratio(contrast::contrast_ratio(fg, bg));
            println!("{}", serde_json::to_string_pretty(&check)?);
            Ok(())
        }
        Command::Simulate { input, kind } => {
            let rgb = color::parse(&input)?;
            let kind = blindness::Deficiency::parse(&kind)?;
            println!("{}", blindness::simulate(rgb, kind).to_hex());
            Ok(())
        }
        Command::Jwt { token } => {
            let decoded = jwt::decode_now(&token)?;
            println!("{}", serde_json::to_string_pretty(&decoded)?);
            Ok(())
        }
        Command::Csv2json { file, delimiter } => {
            let input = read_input(&file)?;
            let json = tabular::csv_to_json(&input, ascii_delimiter(delimiter)?)?;
            println!("{}", serde_json::to_string_pretty(&json)?);
            Ok(())
        }
        Command::Json2csv { file, delimiter } => {
            let input = read_input(&file)?;
            let csv = tabular::json_str_to_csv(&input, ascii_delimiter(delimiter)?)?;
            print!("{}", csv);
            Ok(())
        }
        Command::Password {
            length,
            symbols,
            no_lowercase,
            no_uppercase,
            no_digits,
            no_look_alikes,
        } => {
            let options = password::PasswordOptions {
                length,
                lowercase: !no_lowercase,
                uppercase: !no_uppercase,
                digits: !no_digits,
                symbols,
                exclude_look_alikes: no_look_alikes,
            };
            let generated = password::generate(&options)?;
            println!("{}", serde_json::to_string_pretty(&generated)?);
            Ok(())
        }
        Command::Regex {
            pattern,
            text,
            replace,
            ignore_case,
        } => {
            if let Some(replacement) = replace {
                println!(
                    "{}",
                    retest::replace_all(&pattern, &text, &replacement, ignore_case)?
                );
            } else {
                let matches = retest::find_matches(&pattern, &text, ignore_case)?;
                println!("{}", serde_json::to_string_pretty(&matches)?);
            }
            Ok(())
        }
        Command::Timestamp { input } => {
            let info = timestamp::describe_now(&input)?;
            println!("{}", serde_json::to_string_pretty(&info)?);
            Ok(())
        }
        Command::Pick { options } => {
            println!("{}", fun::pick(&options, &mut rand::thread_rng())?);
            Ok(())
        }
        Command::Coin => {
            println!("{}", fun::coin_flip(&mut rand::thread_rng()));
            Ok(())
        }
        Command::Roll { sides } => {
            println!("{}", fun::roll(sides, &mut rand::thread_rng())?);
            Ok(())
        }
    }
}

fn run_convert(from: &str, to: &str, values: &[String], category: Option<&str>) -> Result<()> {
    let category = match category {
        Some(c) => Some(Category::parse(c)?),
        None => None,
    };
    let mut history = History::default();
    for raw in values {
        // Invalid numeric input renders as a blank line, not an error.
        let Ok(value) = raw.parse::<f64>() else {
            println!();
            continue;
        };
        if !value.is_finite() {
            println!();
            continue;
        }
        let result = match category {
            Some(cat) => units::convert(cat, from, to, value)?,
            None => units::convert_auto(from, to, value)?,
        };
        let rendered = format_default(result);
        history.record(format!("{} {}", raw, from), format!("{} {}", rendered, to));
        println!("{}", rendered);
    }
    for entry in history.entries() {
        debug!("converted {} -> {}", entry.input, entry.output);
    }
    Ok(())
}

fn run_units(category: Option<&str>) -> Result<()> {
    match category {
        None => {
            for cat in Category::ALL {
                println!("{}", cat);
            }
        }
        Some(c) => {
            let cat = Category::parse(c)?;
            for u in units::units_of(cat) {
                println!("{}\t{}", u.id, u.name);
            }
        }
    }
    Ok(())
}

fn read_input(path: &Utf8PathBuf) -> Result<String> {
    if path.as_str() == "-" {
        let mut buf = String::new();
        std::io::Read::read_to_string(&mut std::io::stdin(), &mut buf)
            .context("Failed to read stdin")?;
        Ok(buf)
    } else {
        std::fs::read_to_string(path).with_context(|| format!("Open {}", path))
    }
}

fn ascii_delimiter(c: char) -> Result<u8> {
    if !c.is_ascii() {
        bail!("Delimiter must be an ASCII character, got {:?}", c);
    }
    Ok(c as u8)
}
