//! Load, transform, save.

use std::path::Path;

use anyhow::Context;
use picture_core::decode::load_picture;
use picture_core::encode::{save_picture, SaveOptions};
use picture_core::{PixelGrid, TransformEngine};
use tracing::info;

use crate::cli::Request;

/// Execute one request end to end.
///
/// Every input is decoded before the operation runs, so a bad location aborts
/// without writing anything.
pub fn run(request: &Request, options: &SaveOptions) -> anyhow::Result<()> {
    let (first, rest) = request
        .inputs
        .split_first()
        .context("at least one input image is required")?;

    let picture = load(first)?;
    let auxiliary = rest
        .iter()
        .map(|path| load(path))
        .collect::<anyhow::Result<Vec<PixelGrid>>>()?;

    let operation = request.operation;
    let mut engine = TransformEngine::new(picture);
    operation
        .apply(&mut engine, &auxiliary)
        .with_context(|| format!("{} failed", operation.name()))?;

    let result = engine.into_picture();
    info!(
        operation = operation.name(),
        width = result.width(),
        height = result.height(),
        "transformed"
    );

    save_picture(&result, &request.output, options)
        .with_context(|| format!("invalid destination: {}", request.output.display()))?;
    info!(path = %request.output.display(), "saved");
    Ok(())
}

fn load(path: &Path) -> anyhow::Result<PixelGrid> {
    let picture =
        load_picture(path).with_context(|| format!("invalid location: {}", path.display()))?;
    info!(
        path = %path.display(),
        width = picture.width(),
        height = picture.height(),
        "loaded"
    );
    Ok(picture)
}
