use clap::{Parser, Subcommand, ValueEnum};
use qr_card::encoder::mask::evaluate_masks;
use qr_card::encoder::placement::place_data;
use qr_card::encoder::reed_solomon::interleave_with_ecc;
use qr_card::encoder::skeleton::build_skeleton;
use qr_card::encoder::version::select_version;
use qr_card::encoder::{bitstream, bitstream::BitSequence};
use qr_card::render::{parse_hex_color, save_png, to_svg, to_text};
use qr_card::tools::{batch_output_path, display_url, read_inputs, symbol_stats};
use qr_card::{ECLevel, RenderOptions, Theme, config, encode, encode_batch};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "qrtool", version, about = "QR code encoder for contact pages")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Svg,
    Png,
}

#[derive(Clone, Copy, ValueEnum)]
enum ThemeArg {
    Light,
    Dark,
}

#[derive(clap::Args)]
struct Style {
    /// Pixels per module (defaults to QR_MODULE_PX or 4)
    #[arg(long)]
    module_px: Option<u32>,
    /// Quiet zone in modules (defaults to QR_QUIET_ZONE or 4)
    #[arg(long)]
    quiet_zone: Option<u32>,
    #[arg(long, value_enum, default_value = "light")]
    theme: ThemeArg,
    /// Foreground colour, #rgb or #rrggbb
    #[arg(long)]
    fg: Option<String>,
    /// Background colour, #rgb or #rrggbb
    #[arg(long)]
    bg: Option<String>,
}

#[derive(Subcommand)]
enum Command {
    /// Encode one payload and print or save it
    Encode {
        #[arg(long)]
        text: String,
        #[arg(long, value_enum, default_value = "text")]
        format: Format,
        /// Output file (stdout when omitted; required for png)
        #[arg(long)]
        output: Option<PathBuf>,
        #[command(flatten)]
        style: Style,
    },
    /// Show version, block layout and every mask's penalty
    Inspect {
        #[arg(long)]
        text: String,
    },
    /// Encode one SVG per line of an input file, in parallel
    Batch {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out_dir: PathBuf,
        #[command(flatten)]
        style: Style,
    },
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Encode {
            text,
            format,
            output,
            style,
        } => encode_cmd(&text, format, output.as_deref(), &style),
        Command::Inspect { text } => inspect_cmd(&text),
        Command::Batch {
            input,
            out_dir,
            style,
        } => batch_cmd(&input, &out_dir, &style),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() {
    let default = if config::debug_enabled() { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn render_options(style: &Style) -> Result<RenderOptions, Box<dyn std::error::Error>> {
    let theme = match style.theme {
        ThemeArg::Light => Theme::Light,
        ThemeArg::Dark => Theme::Dark,
    };
    let mut options = RenderOptions::themed(theme);
    if let Some(px) = style.module_px {
        options.module_px = px;
    }
    if let Some(qz) = style.quiet_zone {
        options.quiet_zone = qz;
    }
    if let Some(fg) = &style.fg {
        options.foreground = parse_hex_color(fg)?;
    }
    if let Some(bg) = &style.bg {
        options.background = parse_hex_color(bg)?;
    }
    if style.module_px.is_some_and(|px| px == 0 || px > config::MAX_MODULE_PX)
        || style.quiet_zone.is_some_and(|qz| qz > config::MAX_QUIET_ZONE)
    {
        tracing::warn!(
            max_module_px = config::MAX_MODULE_PX,
            max_quiet_zone = config::MAX_QUIET_ZONE,
            "size flags out of range, clamping"
        );
    }
    let options = options.clamped();
    if options.quiet_zone < 4 {
        tracing::warn!(
            quiet_zone = options.quiet_zone,
            "quiet zone below 4 modules may not scan reliably"
        );
    }
    Ok(options)
}

fn encode_cmd(
    text: &str,
    format: Format,
    output: Option<&Path>,
    style: &Style,
) -> Result<(), Box<dyn std::error::Error>> {
    let symbol = encode(text)?;
    let options = render_options(style)?;

    match (format, output) {
        (Format::Png, Some(path)) => {
            save_png(&symbol, &options, path)?;
            println!("Wrote {} ({}px)", path.display(), options.canvas_px(symbol.size()));
        }
        (Format::Png, None) => return Err("png output requires --output".into()),
        (Format::Svg, Some(path)) => std::fs::write(path, to_svg(&symbol, &options))?,
        (Format::Svg, None) => println!("{}", to_svg(&symbol, &options)),
        (Format::Text, out) => {
            let invert = matches!(style.theme, ThemeArg::Dark);
            let rendered = to_text(&symbol, options.quiet_zone as usize, invert);
            match out {
                Some(path) => std::fs::write(path, rendered)?,
                None => {
                    print!("{rendered}");
                    println!("{}", display_url(text));
                }
            }
        }
    }
    Ok(())
}

fn inspect_cmd(text: &str) -> Result<(), Box<dyn std::error::Error>> {
    let data = text.as_bytes();
    let spec = select_version(data.len())?;
    println!(
        "Payload: {} bytes, version {} ({}x{}), level L",
        data.len(),
        spec.version.number(),
        spec.module_size(),
        spec.module_size()
    );
    println!(
        "Codewords: data={} ecc={} ({} block(s) {:?}, {} ecc each), remainder bits={}",
        spec.data_codewords,
        spec.ec_codewords,
        spec.num_blocks,
        spec.block_lengths(),
        spec.ec_codewords_per_block,
        spec.remainder_bits()
    );

    let codewords = interleave_with_ecc(&bitstream::encode_data_codewords(data, &spec)?, &spec)?;
    let mut matrix = build_skeleton(&spec);
    place_data(
        &mut matrix,
        BitSequence::from_codewords(&codewords).as_bits(),
        &spec,
    )?;
    for candidate in evaluate_masks(&matrix, ECLevel::L) {
        println!("  mask {}: penalty {}", candidate.mask.id(), candidate.penalty);
    }

    let symbol = encode(text)?;
    let stats = symbol_stats(&symbol);
    println!(
        "Chosen mask {} (penalty {}), dark modules {}/{} ({:.1}%)",
        symbol.mask_pattern.id(),
        symbol.penalty,
        stats.dark_modules,
        stats.total_modules,
        stats.dark_ratio * 100.0
    );
    Ok(())
}

fn batch_cmd(
    input: &Path,
    out_dir: &Path,
    style: &Style,
) -> Result<(), Box<dyn std::error::Error>> {
    let inputs = read_inputs(input)?;
    let options = render_options(style)?;
    std::fs::create_dir_all(out_dir)?;

    let start = Instant::now();
    let results = encode_batch(&inputs);
    let elapsed = start.elapsed();

    let mut failures = 0usize;
    for (i, (text, result)) in inputs.iter().zip(results).enumerate() {
        match result {
            Ok(symbol) => {
                let path = batch_output_path(out_dir, i, text, "svg");
                std::fs::write(&path, to_svg(&symbol, &options))?;
                println!("  {} -> {}", display_url(text), path.display());
            }
            Err(err) => {
                failures += 1;
                eprintln!("  {}: {err}", display_url(text));
            }
        }
    }
    println!(
        "Encoded {} of {} payloads in {:.2?}",
        inputs.len() - failures,
        inputs.len(),
        elapsed
    );
    Ok(())
}
