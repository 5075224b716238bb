use hatchery_core::{Artifact, ConversionReport, Converter, GrammarError, Result};
use tokio::task::JoinSet;

/// Convert every qualifying entry as an independent blocking task.
///
/// The destination is cleared before any task starts. Returns once all
/// tasks have finished, or at the first failure; remaining tasks are
/// aborted when the set is dropped.
pub async fn run_concurrent(converter: &Converter) -> Result<ConversionReport> {
    let prepared = converter.clone();
    let entries = tokio::task::spawn_blocking(move || {
        prepared.prepare_destination()?;
        prepared.source_entries()
    })
    .await
    .map_err(|e| GrammarError::Task(e.to_string()))??;

    log::info!(
        "Converting {} grammar(s) from {:?}",
        entries.len(),
        converter.config().source_dir
    );

    let mut tasks: JoinSet<Result<Artifact>> = JoinSet::new();
    for entry in entries {
        let converter = converter.clone();
        tasks.spawn_blocking(move || converter.convert_entry(&entry));
    }

    let mut artifacts = Vec::with_capacity(tasks.len());
    while let Some(joined) = tasks.join_next().await {
        let artifact = joined.map_err(|e| GrammarError::Task(e.to_string()))??;
        artifacts.push(artifact);
    }

    Ok(ConversionReport::new(artifacts))
}
