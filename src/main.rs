//! # Barcraft CLI
//!
//! Command-line interface for barcode and QR rendering.
//!
//! ## Usage
//!
//! ```bash
//! # Styled QR code
//! barcraft render "https://example.com" --module-shape circle --finder-shape rounded_square -o qr.png
//!
//! # EAN-13 with a computed check digit
//! barcraft render 690123456789 --symbology ean13 -o ean.png
//!
//! # QR with a logo and a preset palette
//! barcraft render "hello" --logo logo.png --palette ocean -o logo.png
//!
//! # Many symbols at once (one `symbology,content` per line)
//! barcraft batch codes.csv --out-dir out/
//!
//! # Complete or verify a check digit
//! barcraft check 03600029145 --symbology upca
//!
//! # List symbologies, shapes and palettes
//! barcraft list
//!
//! # HTTP server
//! barcraft serve --listen 0.0.0.0:8080
//! ```
//!
//! Logging goes to stderr and is controlled by `RUST_LOG`
//! (default `barcraft=info`).

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use barcraft::{
    BarcraftError, Symbology,
    checksum::{compute_check_digit, digits_of, verify_check_digit},
    config::OutputSize,
    linear,
    matrix::ErrorCorrection,
    pipeline::{self, RenderRequest},
    render::{load_logo, to_png},
    server::{DEFAULT_MAX_LOGO_BYTES, RenderBody, ServerConfig},
    style::{Color, Shape, palette},
    symbology::is_valid_barcode,
};

/// Barcraft - barcode and styled QR code renderer
#[derive(Parser, Debug)]
#[command(name = "barcraft")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render one symbol to a PNG file
    Render {
        /// Content to encode
        content: String,

        /// Symbology (ean13, ean8, upca, code128, aztec, pdf417, qr)
        #[arg(short, long, default_value = "qr")]
        symbology: Symbology,

        /// Output PNG path
        #[arg(short, long, value_name = "FILE", default_value = "barcode.png")]
        out: PathBuf,

        /// Output size: WIDTHxHEIGHT, a single side, or small/square/large/linear
        #[arg(long)]
        size: Option<OutputSize>,

        /// Module shape for QR codes
        #[arg(long)]
        module_shape: Option<Shape>,

        /// Finder pattern shape for QR codes
        #[arg(long)]
        finder_shape: Option<Shape>,

        /// Preset palette name
        #[arg(long)]
        palette: Option<String>,

        /// Background color (#RRGGBB)
        #[arg(long)]
        background: Option<Color>,

        /// Foreground color (#RRGGBB)
        #[arg(long)]
        foreground: Option<Color>,

        /// Logo image placed at the center of a QR code
        #[arg(long, value_name = "FILE")]
        logo: Option<PathBuf>,

        /// Logo slot background color
        #[arg(long)]
        logo_background: Option<Color>,

        /// Recolor the logo to this color
        #[arg(long)]
        logo_tint: Option<Color>,

        /// Error correction level (L, M, Q, H)
        #[arg(long)]
        ec: Option<ErrorCorrection>,
    },

    /// Render every `symbology,content` line of a file in parallel
    Batch {
        /// Input file
        file: PathBuf,

        /// Directory for the PNG files
        #[arg(long, default_value = ".")]
        out_dir: PathBuf,

        /// Output size for every symbol (defaults per symbology)
        #[arg(long)]
        size: Option<OutputSize>,

        /// Preset palette name
        #[arg(long)]
        palette: Option<String>,
    },

    /// Complete or verify the check digit of a numeric code
    Check {
        /// Digits, with or without the check digit
        digits: String,

        /// Symbology (ean13, ean8, upca)
        #[arg(short, long, default_value = "ean13")]
        symbology: Symbology,
    },

    /// List symbologies, shapes and palettes
    List,

    /// Start the HTTP server
    Serve {
        /// Address to listen on
        #[arg(long, env = "BARCRAFT_LISTEN", default_value = "127.0.0.1:8080")]
        listen: String,

        /// Largest accepted logo upload in bytes
        #[arg(long, env = "BARCRAFT_MAX_LOGO_BYTES", default_value_t = DEFAULT_MAX_LOGO_BYTES)]
        max_logo_bytes: usize,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("barcraft=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), BarcraftError> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Render {
            content,
            symbology,
            out,
            size,
            module_shape,
            finder_shape,
            palette,
            background,
            foreground,
            logo,
            logo_background,
            logo_tint,
            ec,
        } => {
            let logo = logo
                .map(|path| std::fs::read(&path).map_err(BarcraftError::from))
                .transpose()?
                .map(|bytes| load_logo(&bytes))
                .transpose()?;

            let body = RenderBody {
                size: size.map(|s| s.to_string()),
                palette,
                background,
                foreground,
                module_shape,
                finder_shape,
                logo_background,
                logo_tint,
                error_correction: ec,
                ..RenderBody::new(content, symbology)
            };
            let request = body.into_request(logo).map_err(BarcraftError::Config)?;

            let img = pipeline::render(&request)?;
            save_png(&out, &to_png(&img)?)?;
            info!(
                %symbology,
                width = img.width(),
                height = img.height(),
                path = %out.display(),
                "saved"
            );
            Ok(())
        }

        Commands::Batch {
            file,
            out_dir,
            size,
            palette: palette_name,
        } => {
            let text = std::fs::read_to_string(&file)?;
            let requests = parse_batch(&text, size, palette_name.as_deref())?;
            std::fs::create_dir_all(&out_dir)?;

            let results = pipeline::render_batch(&requests);
            let mut failed = 0;
            for (i, (request, result)) in requests.iter().zip(results).enumerate() {
                let path = out_dir.join(format!("{:03}-{}.png", i + 1, request.symbology.name()));
                match result {
                    Ok(img) => save_png(&path, &to_png(&img)?)?,
                    Err(e) => {
                        failed += 1;
                        warn!(index = i + 1, content = %request.content, error = %e, "render failed");
                    }
                }
            }

            println!(
                "Rendered {} of {} symbols into {}",
                requests.len() - failed,
                requests.len(),
                out_dir.display()
            );
            Ok(())
        }

        Commands::Check { digits, symbology } => check(&digits, symbology),

        Commands::List => {
            println!("Symbologies:");
            for symbology in Symbology::ALL {
                let kind = if symbology.is_2d() { "2D" } else { "1D" };
                println!("  {:<8} {:<8} {}", symbology.name(), kind, symbology.label());
            }
            println!("\nShapes:");
            for shape in Shape::ALL {
                println!("  {}", shape);
            }
            println!("\nPalettes:");
            for preset in palette::all() {
                println!(
                    "  {:<10} bg {}  fg {}",
                    preset.name, preset.background, preset.foreground
                );
            }
            Ok(())
        }

        Commands::Serve {
            listen,
            max_logo_bytes,
        } => {
            let config = ServerConfig {
                listen_addr: listen,
                max_logo_bytes,
            };
            let runtime = tokio::runtime::Runtime::new()?;
            runtime.block_on(barcraft::server::serve(config))
        }
    }
}

/// Parse `symbology,content` lines; blank lines and `#` comments are skipped.
fn parse_batch(
    text: &str,
    size: Option<OutputSize>,
    palette_name: Option<&str>,
) -> Result<Vec<RenderRequest>, BarcraftError> {
    let mut requests = Vec::new();
    for (i, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let (symbology, content) = line.split_once(',').ok_or_else(|| {
            BarcraftError::Config(format!("Line {}: expected 'symbology,content'", i + 1))
        })?;
        let symbology: Symbology = symbology
            .trim()
            .parse()
            .map_err(|e| BarcraftError::Config(format!("Line {}: {}", i + 1, e)))?;

        let body = RenderBody {
            size: size.map(|s| s.to_string()),
            palette: palette_name.map(str::to_string),
            ..RenderBody::new(content.trim(), symbology)
        };
        requests.push(body.into_request(None).map_err(BarcraftError::Config)?);
    }
    Ok(requests)
}

fn check(content: &str, symbology: Symbology) -> Result<(), BarcraftError> {
    let Some(scheme) = symbology.checksum_scheme() else {
        let verdict = if is_valid_barcode(content, symbology) {
            "valid"
        } else {
            "invalid"
        };
        println!("{}: {} (no check digit)", symbology, verdict);
        return Ok(());
    };

    let digits = digits_of(content);
    let as_text = |d: &[u8]| d.iter().map(|d| char::from(b'0' + d)).collect::<String>();

    if digits.len() == scheme.data_length() + 1 {
        let (data, supplied) = digits.split_at(scheme.data_length());
        if verify_check_digit(&digits, scheme).map_err(|e| BarcraftError::Config(e.to_string()))? {
            println!("{}: {} is valid", symbology, as_text(&digits));
        } else {
            let expected = compute_check_digit(data, scheme)
                .map_err(|e| BarcraftError::Config(e.to_string()))?;
            println!(
                "{}: {} has check digit {}, expected {}",
                symbology,
                as_text(&digits),
                supplied[0],
                expected
            );
        }
        return Ok(());
    }

    let completed = linear::complete_digits(content, symbology)?;
    println!("{}: {}", symbology, as_text(&completed));
    Ok(())
}

fn save_png(path: &Path, png_bytes: &[u8]) -> Result<(), BarcraftError> {
    std::fs::write(path, png_bytes)
        .map_err(|e| BarcraftError::Image(format!("Failed to save PNG {}: {}", path.display(), e)))?;
    Ok(())
}
