// Copyright 2026 the Stele Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Interactive command line for rendering hieroglyph inscriptions.
//!
//! Every option can be given as a flag; direction, glyphs, the shen choice
//! and the output name fall back to interactive prompts when omitted.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use kurbo::Vec2;
use stele::{
    Direction, InscriptionFont, RenderParams, RingParams, TextureParams, parse_glyphs, render,
    validate_output_name,
};

#[derive(Parser, Debug)]
#[command(about = "Render a carved-sandstone image of an Egyptian hieroglyph inscription")]
struct Args {
    /// Layout direction: "V" (vertical) or "H" (horizontal).
    #[arg(long)]
    direction: Option<String>,

    /// Glyphs to inscribe: literal hieroglyphs or 4-6 digit Unicode hex
    /// code points, separated by spaces.
    #[arg(long)]
    glyphs: Option<String>,

    /// Enclose the inscription in a shen ring.
    #[arg(long)]
    shen: Option<bool>,

    /// Output file name (PNG; the suffix is optional).
    #[arg(long)]
    out: Option<String>,

    /// Path to a font covering the Egyptian Hieroglyphs block.
    #[arg(long, default_value = "fonts/NotoSansEgyptianHieroglyphs-Regular.ttf")]
    font: PathBuf,

    /// Glyph size in pixels per em.
    #[arg(long, default_value_t = 240.0)]
    size: f64,

    /// Padding around and between glyphs, in pixels.
    #[arg(long, default_value_t = 60.0)]
    padding: f64,

    /// Seed for the sandstone grain noise.
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Carve shadow offset in pixels; negative reads as light from the
    /// lower right, positive flips the relief.
    #[arg(long, default_value_t = -2.0, allow_hyphen_values = true)]
    carve_offset: f64,

    /// Skip opening the saved image in the system viewer.
    #[arg(long)]
    no_show: bool,
}

fn prompt(message: &str) -> Result<String> {
    print!("{message}");
    std::io::stdout().flush()?;
    let mut line = String::new();
    std::io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_owned())
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let direction: Direction = match &args.direction {
        Some(raw) => raw.parse()?,
        None => prompt("How would you like the output for the inscription? (V/H): ")?.parse()?,
    };

    let raw_glyphs = match &args.glyphs {
        Some(raw) => raw.clone(),
        None => prompt(
            "Which glyphs would you like inscribed? (paste glyphs or Unicode hex separated by spaces): ",
        )?,
    };
    let chars = parse_glyphs(&raw_glyphs)?;

    let shen = match args.shen {
        Some(choice) => choice,
        None => {
            let answer = prompt("Would you like a shen ring around the glyphs? (Y/N): ")?;
            matches!(answer.to_ascii_lowercase().as_str(), "y" | "yes")
        }
    };

    let raw_name = match &args.out {
        Some(raw) => raw.clone(),
        None => prompt("What name would you like the file saved as? (png only): ")?,
    };
    let output = validate_output_name(&raw_name)?;

    let font = InscriptionFont::from_file(&args.font)
        .with_context(|| format!("loading font {}", args.font.display()))?;

    let params = RenderParams {
        glyph_size: args.size,
        padding: args.padding,
        carve_offset: Vec2::new(args.carve_offset, args.carve_offset),
        texture: TextureParams {
            seed: args.seed,
            ..Default::default()
        },
        ring: shen.then(RingParams::default),
        ..Default::default()
    };

    log::info!(
        "rendering {} glyph(s), direction {:?}, shen {}",
        chars.len(),
        direction,
        shen
    );
    let image = render(&font, &chars, direction, &params)?;

    let file = File::create(&output).with_context(|| format!("creating {output}"))?;
    image.write_png(BufWriter::new(file))?;
    println!("Image saved as {output}");

    if !args.no_show {
        // The image is already on disk; a missing viewer is not fatal.
        if let Err(e) = open::that(&output) {
            log::warn!("could not open {output} in the system viewer: {e}");
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn viewer_runs_unless_opted_out() {
        let args = Args::try_parse_from(["stele"]).unwrap();
        assert!(!args.no_show);
        let args = Args::try_parse_from(["stele", "--no-show"]).unwrap();
        assert!(args.no_show);
    }

    #[test]
    fn negative_carve_offset_parses() {
        let args = Args::try_parse_from(["stele", "--carve-offset", "-3.5"]).unwrap();
        assert_eq!(args.carve_offset, -3.5);
    }
}
