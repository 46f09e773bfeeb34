//! Command-line surface: argument definitions and their translation into a
//! [`Request`].

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use picture_core::encode::DEFAULT_JPEG_QUALITY;
use picture_core::{FlipAxis, Operation, Rotation};

use crate::config::LogFormat;

#[derive(Debug, Parser)]
#[command(
    name = "picture",
    about = "Apply one raster transformation to image files",
    version
)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Log output format
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,

    /// JPEG quality (1-100) used when the output is a JPEG file
    #[arg(long, global = true, default_value_t = DEFAULT_JPEG_QUALITY,
          value_parser = clap::value_parser!(u8).range(1..=100))]
    pub jpeg_quality: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Invert every color channel
    Invert {
        /// Input image
        input: PathBuf,
        /// Output image
        output: PathBuf,
    },

    /// Convert to gray by averaging the channels
    Grayscale {
        /// Input image
        input: PathBuf,
        /// Output image
        output: PathBuf,
    },

    /// Rotate clockwise by 90, 180 or 270 degrees
    Rotate {
        /// Rotation angle: 90, 180 or 270
        angle: Rotation,
        /// Input image
        input: PathBuf,
        /// Output image
        output: PathBuf,
    },

    /// Mirror horizontally (H) or vertically (V)
    Flip {
        /// Flip axis: H or V
        axis: FlipAxis,
        /// Input image
        input: PathBuf,
        /// Output image
        output: PathBuf,
    },

    /// Average several images over their shared region
    Blend {
        /// Input images followed by the output image
        #[arg(required = true, num_args = 2..)]
        paths: Vec<PathBuf>,
    },

    /// Apply a 3x3 box blur (edges unchanged)
    Blur {
        /// Input image
        input: PathBuf,
        /// Output image
        output: PathBuf,
    },

    /// Combine several images into a diagonal tile mosaic
    Mosaic {
        /// Tile edge length in pixels
        #[arg(value_parser = clap::value_parser!(u32).range(1..))]
        tile_size: u32,
        /// Input images followed by the output image
        #[arg(required = true, num_args = 2..)]
        paths: Vec<PathBuf>,
    },
}

/// One resolved invocation: what to apply, to which pictures, and where the
/// result goes. The first input is the engine's picture, the rest are
/// auxiliary sources in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub operation: Operation,
    pub inputs: Vec<PathBuf>,
    pub output: PathBuf,
}

impl Commands {
    pub fn into_request(self) -> anyhow::Result<Request> {
        let single = |operation, input, output| Request {
            operation,
            inputs: vec![input],
            output,
        };

        let request = match self {
            Commands::Invert { input, output } => single(Operation::Invert, input, output),
            Commands::Grayscale { input, output } => single(Operation::Grayscale, input, output),
            Commands::Rotate {
                angle,
                input,
                output,
            } => single(Operation::Rotate { angle }, input, output),
            Commands::Flip {
                axis,
                input,
                output,
            } => single(Operation::Flip { axis }, input, output),
            Commands::Blur { input, output } => single(Operation::Blur, input, output),
            Commands::Blend { paths } => multi(Operation::Blend, paths)?,
            Commands::Mosaic { tile_size, paths } => multi(Operation::Mosaic { tile_size }, paths)?,
        };
        Ok(request)
    }
}

/// Split `paths` into inputs and the trailing output.
fn multi(operation: Operation, mut paths: Vec<PathBuf>) -> anyhow::Result<Request> {
    let output = paths.pop().context("missing output path")?;
    anyhow::ensure!(!paths.is_empty(), "at least one input image is required");
    Ok(Request {
        operation,
        inputs: paths,
        output,
    })
}
