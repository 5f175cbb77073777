mod args;
mod table;

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use tracing::{debug, info};

use lux_core::{EncoderConfig, MorseLightEncoder, TransmissionStats};

use args::Cli;
use table::TransmissionRenderer;

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.debug);

    if cli.no_color {
        colored::control::set_override(false);
    }

    // Load configuration, then apply command line overrides
    let mut config = match &cli.config {
        Some(path) => EncoderConfig::load(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?,
        None => EncoderConfig::default(),
    };
    if cli.no_comb {
        config.comb.enabled = false;
    }
    if let Some(size) = cli.comb_size {
        config.comb.size = size;
    }
    debug!(?config, "encoder configuration");

    let encoder = MorseLightEncoder::from_config(&config).context("Invalid encoder configuration")?;
    debug!(
        comb_lines = encoder.builder().comb().map(|comb| comb.config().size),
        "encoder ready"
    );

    let text = match cli.text {
        Some(text) => text,
        None => {
            let stdin = io::stdin();
            read_message(&mut stdin.lock(), &mut io::stdout())?
        }
    };

    info!(chars = text.chars().count(), "encoding message");
    let encoding = encoder
        .encode_detailed(&text)
        .with_context(|| format!("Failed to encode '{}'", text))?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let renderer = TransmissionRenderer::new(config.comb.enabled);
    if cli.json {
        renderer.render_json(&encoding.pulses, &mut out)?;
        return Ok(());
    }

    writeln!(out, "Encoding: '{}'", text)?;
    writeln!(out, "LUXBIN: {}", encoding.transliteration.text().cyan())?;
    writeln!(out, "Binary: {}", encoding.transliteration.binary.dimmed())?;
    writeln!(out, "Wavelengths: {} photonic states", encoding.wavelengths.len())?;
    writeln!(out)?;

    renderer.render_table(&encoding.pulses, &mut out)?;
    writeln!(out)?;

    let stats = TransmissionStats::from_pulses(&text, &encoding.pulses);
    renderer.render_stats(&stats, &mut out)?;

    Ok(())
}

/// Ask for a message when none was given on the command line.
fn read_message(input: &mut impl BufRead, prompt: &mut impl Write) -> Result<String> {
    write!(prompt, "Enter message to transmit: ")?;
    prompt.flush()?;

    let mut line = String::new();
    input
        .read_line(&mut line)
        .context("Failed to read message from stdin")?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

fn init_tracing(debug: bool) {
    // RUST_LOG wins over the --debug flag when set
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if debug {
            "lux_cli=debug,lux_core=debug".to_string()
        } else {
            "lux_cli=warn,lux_core=warn".to_string()
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn prompt_reads_one_line() {
        let mut input = Cursor::new("sos\r\nignored\n");
        let mut prompt = Vec::new();
        let text = read_message(&mut input, &mut prompt).unwrap();
        assert_eq!(text, "sos");
        assert_eq!(String::from_utf8(prompt).unwrap(), "Enter message to transmit: ");
    }

    #[test]
    fn prompt_on_empty_input() {
        let mut input = Cursor::new("");
        let text = read_message(&mut input, &mut Vec::new()).unwrap();
        assert_eq!(text, "");
    }
}
