//! Terminal rendering of a transmission.
//!
//! Writes the transmission table and the statistics block. Pulses are only
//! read; start times come from the core timeline.

use std::io::Write;

use colored::Colorize;
use lux_core::{Pulse, Timeline, TransmissionStats};

const RULE_WIDTH: usize = 80;

/// Renderer for the transmission table
pub struct TransmissionRenderer {
    /// Show the per-pulse comb efficiency column
    show_efficiency: bool,
}

impl TransmissionRenderer {
    pub fn new(show_efficiency: bool) -> Self {
        Self { show_efficiency }
    }

    /// Render one row per pulse, with running start times.
    pub fn render_table(&self, pulses: &[Pulse], writer: &mut impl Write) -> std::io::Result<()> {
        writeln!(writer, "{}", "LUXBIN Morse Light Transmission Table".green().bold())?;
        writeln!(writer, "{}", "=".repeat(RULE_WIDTH))?;

        let mut header = format!(
            "{:>6} | {:>4} | {:>5} | {:>10} | {:>8} | {:<5}",
            "Time", "Char", "Morse", "Wavelength", "Duration", "Type"
        );
        if self.show_efficiency {
            header.push_str(&format!(" | {:>10}", "Efficiency"));
        }
        writeln!(writer, "{}", header.bold())?;
        writeln!(writer, "{}", "-".repeat(RULE_WIDTH))?;

        let mut end_ms = 0;
        for timed in Timeline::new(pulses) {
            let pulse = timed.pulse;
            let source = pulse.source_char.map(String::from).unwrap_or_else(|| "-".to_string());
            let morse = match pulse.morse_label() {
                "" => "-",
                label => label,
            };
            let wavelength = if pulse.wavelength_nm > 0.0 {
                format!("{:.1}nm", pulse.wavelength_nm)
            } else {
                "OFF".to_string()
            };
            let duration = format!("{}ms", pulse.duration_ms);
            let kind = if pulse.is_gap { "GAP" } else { "PULSE" };

            let mut row = format!(
                "{:>6} | {:>4} | {:>5} | {:>10} | {:>8} | {:<5}",
                timed.start_ms, source, morse, wavelength, duration, kind
            );
            if self.show_efficiency {
                row.push_str(&format!(" | {:>10.4}", pulse.quantum_efficiency));
            }

            if pulse.is_gap {
                writeln!(writer, "{}", row.dimmed())?;
            } else {
                writeln!(writer, "{}", row)?;
            }
            end_ms = timed.end_ms;
        }

        writeln!(writer, "{}", "=".repeat(RULE_WIDTH))?;
        writeln!(
            writer,
            "Total transmission time: {}ms ({:.2} seconds)",
            end_ms,
            end_ms as f64 / 1000.0
        )?;
        Ok(())
    }

    /// Render the statistics block.
    pub fn render_stats(
        &self,
        stats: &TransmissionStats,
        writer: &mut impl Write,
    ) -> std::io::Result<()> {
        writeln!(writer, "{}", "Transmission Statistics:".blue().bold())?;
        writeln!(writer, "   • Total pulses: {}", stats.light_pulses)?;
        writeln!(writer, "   • Unique wavelengths: {}", stats.unique_wavelengths)?;
        writeln!(
            writer,
            "   • Total time: {}ms ({:.2} seconds)",
            stats.total_time_ms,
            stats.total_time_secs()
        )?;
        writeln!(writer, "   • Data rate: {:.1} chars/second", stats.chars_per_second)?;
        Ok(())
    }

    /// Write the pulses as pretty-printed JSON followed by a newline.
    pub fn render_json(&self, pulses: &[Pulse], writer: &mut impl Write) -> std::io::Result<()> {
        serde_json::to_writer_pretty(&mut *writer, pulses)?;
        writeln!(writer)?;
        Ok(())
    }
}
