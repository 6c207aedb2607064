//! Inspect command implementation
//!
//! Decodes a texture's header and reports the layout facts the splitter
//! will act on: dimensions, channel layout, bit depth. Writes nothing.

use anyhow::Result;
use colored::Colorize;
use std::path::Path;
use std::process::ExitCode;

use ormsplit_core::load_source;

use super::json_output::{error_codes, InspectOutput, JsonError};

/// Run the inspect command
///
/// # Arguments
/// * `input` - Path to the PNG to inspect
/// * `json_output` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 on success, 1 on error
pub fn run(input: &str, json_output: bool) -> Result<ExitCode> {
    if json_output {
        run_json(input)
    } else {
        run_human(input)
    }
}

/// Run inspect with human-readable (colored) output
fn run_human(input: &str) -> Result<ExitCode> {
    let source = load_source(Path::new(input))?;

    println!("{}", "Texture:".cyan().bold());
    println!("  {} {}", "Path:".dimmed(), input);
    println!("  {} {}x{}", "Size:".dimmed(), source.width, source.height);
    println!("  {} {}", "Layout:".dimmed(), source.color_type_name());
    println!("  {} {}", "Channels:".dimmed(), source.channels());
    println!("  {} {}", "Bit depth:".dimmed(), source.bit_depth as u8);

    Ok(ExitCode::SUCCESS)
}

/// Run inspect with machine-readable JSON output
fn run_json(input: &str) -> Result<ExitCode> {
    let output = match load_source(Path::new(input)) {
        Ok(source) => InspectOutput::from_source(input, &source),
        Err(e) => InspectOutput::failure(
            JsonError::new(error_codes::LOAD_ERROR, e.to_string()).with_file(input),
        ),
    };

    println!("{}", serde_json::to_string_pretty(&output)?);

    if output.success {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inspect_reports_layout() {
        let tmp = tempfile::tempdir().unwrap();
        let source = tmp.path().join("decal.png");
        let file = std::fs::File::create(&source).unwrap();
        let mut encoder = png::Encoder::new(std::io::BufWriter::new(file), 1, 1);
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder.write_header().unwrap();
        writer.write_image_data(&[1, 2, 3, 4]).unwrap();
        drop(writer);

        let decoded = load_source(&source).unwrap();
        let output = InspectOutput::from_source(source.to_str().unwrap(), &decoded);

        assert!(output.success);
        assert_eq!(output.color_type.as_deref(), Some("RGBA"));
        assert_eq!(output.channels, Some(4));
        assert_eq!((output.width, output.height), (Some(1), Some(1)));
    }

    #[test]
    fn test_inspect_writes_nothing() {
        let tmp = tempfile::tempdir().unwrap();
        let source = tmp.path().join("decal.png");
        let file = std::fs::File::create(&source).unwrap();
        let mut encoder = png::Encoder::new(std::io::BufWriter::new(file), 1, 1);
        encoder.set_color(png::ColorType::Rgb);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder.write_header().unwrap();
        writer.write_image_data(&[1, 2, 3]).unwrap();
        drop(writer);

        run(source.to_str().unwrap(), true).unwrap();

        // Only the fixture itself is in the directory.
        assert_eq!(std::fs::read_dir(tmp.path()).unwrap().count(), 1);
    }
}
