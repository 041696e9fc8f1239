//! File-level handlers: read the scraper dump, run the pipeline, write JSON.

use std::path::Path;

use anyhow::Context;
use serde::Serialize;
use serde_json::Value;

use shelfscan_purify::{children_texts, parse_items, purify_with_report};

/// Purifies `input` into `output` and logs the item counts.
pub(crate) async fn run_purify(input: &Path, output: &Path, report: bool) -> anyhow::Result<()> {
    let items = read_items(input).await?;
    let result = purify_with_report(&items);

    if report {
        for skipped in &result.skipped {
            tracing::info!(id = skipped.id, reason = %skipped.reason, "skipped scraped item");
        }
    }

    write_json(output, &result.records).await?;
    tracing::info!(
        input = %input.display(),
        output = %output.display(),
        raw_items = result.raw_items,
        structured_items = result.structured_items(),
        "purify complete"
    );
    Ok(())
}

/// Writes the per-item raw text digest of `input` to `output`.
pub(crate) async fn run_texts(input: &Path, output: &Path) -> anyhow::Result<()> {
    let items = read_items(input).await?;
    let texts = children_texts(&items);
    write_json(output, &texts).await?;
    tracing::info!(output = %output.display(), items = texts.len(), "children texts written");
    Ok(())
}

async fn read_items(path: &Path) -> anyhow::Result<Vec<Value>> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("failed to read scraper dump {}", path.display()))?;
    parse_items(&raw).with_context(|| format!("invalid scraper dump {}", path.display()))
}

/// Pretty-prints `value` to `path` with two-space indentation, creating parent dirs.
async fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> anyhow::Result<()> {
    let body = render_json(value)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent)
            .await
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    tokio::fs::write(path, body)
        .await
        .with_context(|| format!("failed to write {}", path.display()))
}

pub(crate) fn render_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}
