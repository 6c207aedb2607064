//! Split command implementation
//!
//! Runs the core pipeline on one packed texture and reports the three
//! derived maps, either as colored terminal output or as a JSON document.

use anyhow::Result;
use colored::Colorize;
use std::path::Path;
use std::process::ExitCode;

use ormsplit_core::{split_file, PngConfig, SplitError};

use super::json_output::{error_codes, JsonError, SplitOutput};

/// Map the `--compression` preset name to encoder settings.
fn png_config(compression: &str) -> PngConfig {
    match compression {
        "fast" => PngConfig::fast(),
        "best" => PngConfig::best_compression(),
        _ => PngConfig::default(),
    }
}

/// Run the split command
///
/// # Arguments
/// * `input` - Path to the packed metallic-roughness PNG
/// * `compression` - PNG compression preset ("default", "fast", "best")
/// * `json_output` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 on full success, 1 on any failure (including partial)
pub fn run(input: &str, compression: &str, json_output: bool) -> Result<ExitCode> {
    let config = png_config(compression);
    if json_output {
        run_json(input, &config)
    } else {
        run_human(input, &config)
    }
}

/// Run split with human-readable (colored) output
fn run_human(input: &str, config: &PngConfig) -> Result<ExitCode> {
    let report = split_file(Path::new(input), config)?;

    println!("{} {}", "Source:".dimmed(), report.source.display());
    println!("{} {}x{}", "Size:".dimmed(), report.width, report.height);
    println!();

    for map in &report.written {
        println!(
            "  {} {:<9} {} ({})",
            "ok".green().bold(),
            map.kind.to_string(),
            map.path.display(),
            &map.hash[..16]
        );
    }
    for failure in &report.failed {
        println!(
            "  {} {:<9} {}: {}",
            "failed".red().bold(),
            failure.kind.to_string(),
            failure.path.display(),
            failure.source
        );
    }

    if report.is_partial() {
        println!("\n{}", "Split finished with failures.".yellow().bold());
        Ok(ExitCode::FAILURE)
    } else {
        println!("\n{}", "Split complete.".green().bold());
        Ok(ExitCode::SUCCESS)
    }
}

/// Run split with machine-readable JSON output
fn run_json(input: &str, config: &PngConfig) -> Result<ExitCode> {
    let output = match split_file(Path::new(input), config) {
        Ok(report) => SplitOutput::from_report(&report),
        Err(e) => {
            let code = match &e {
                SplitError::Load(_) => error_codes::LOAD_ERROR,
                SplitError::ChannelCount(_) => error_codes::CHANNEL_COUNT,
            };
            SplitOutput::failure(JsonError::new(code, e.to_string()).with_file(input))
        }
    };

    println!("{}", serde_json::to_string_pretty(&output)?);

    if output.success {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}
