use std::path::Path;

use anyhow::{Context, Result, anyhow, bail};
use tracing::{info, info_span};

use inhaler_ingest::{IngestOptions, default_source_path, read_records_from_path};
use inhaler_model::InhalerRecord;
use inhaler_query::{device_families, run};
use inhaler_scoring::config::load_scale;
use inhaler_scoring::{CATALOG, Scale, ScoreSelection, catalog};

use crate::cli::{ListArgs, OutputFormatArg, ScoreArgs, SourceArgs};
use inhaler_cli::render;

fn load_records(source: &SourceArgs) -> Result<Vec<InhalerRecord>> {
    let path = default_source_path(source.data.clone())?;
    let delimiter = u8::try_from(source.delimiter)
        .map_err(|_| anyhow!("delimiter must be a single ASCII character"))?;
    let options = IngestOptions::default().with_delimiter(delimiter);
    read_records_from_path(&path, options)
        .with_context(|| format!("load inhaler export {}", path.display()))
}

pub fn run_list(args: &ListArgs) -> Result<()> {
    let span = info_span!("list");
    let _guard = span.enter();

    let records = load_records(&args.source)?;
    let spec = args.filter_spec();
    let result = run(&records, &spec);
    info!(total = result.total, "query finished");

    match args.format {
        OutputFormatArg::Table => {
            println!("{}", render::rows_table(&result));
            println!("Resultados: {}", result.total);
        }
        OutputFormatArg::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&result).context("serialize results")?
            );
        }
        OutputFormatArg::Plain => println!("{}", render::rows_plain(&result)),
    }
    Ok(())
}

pub fn run_devices(source: &SourceArgs) -> Result<()> {
    let records = load_records(source)?;
    let devices = device_families(&records);
    println!("{}", render::devices_table(&devices));
    Ok(())
}

pub fn run_scales() -> Result<()> {
    println!("{}", render::scales_table(CATALOG));
    Ok(())
}

/// Built-in data for `id`, or the definition in `scale_file`.
fn resolve_scale(id: &str, scale_file: Option<&Path>) -> Result<Scale> {
    if let Some(path) = scale_file {
        let scale = load_scale(path).with_context(|| format!("load scale {id}"))?;
        if scale.id != id {
            bail!(
                "scale file {} defines '{}', not '{id}'",
                path.display(),
                scale.id
            );
        }
        return Ok(scale);
    }
    if let Some(scale) = Scale::builtin(id) {
        return Ok(scale.clone());
    }
    match catalog::find(id) {
        Some(entry) => bail!(
            "{} has no built-in criteria; pass --scale-file with its definition",
            entry.name
        ),
        None => bail!("unknown scale '{id}' (see `inhalers scales`)"),
    }
}

pub fn run_score(args: &ScoreArgs) -> Result<()> {
    let span = info_span!("score", scale = %args.scale);
    let _guard = span.enter();

    let scale = resolve_scale(&args.scale, args.scale_file.as_deref())?;
    let selection = ScoreSelection::from_toggles(&args.select);
    for id in selection.selected_ids() {
        if scale.criterion(id).is_none() {
            tracing::warn!(criterion = id, "ignoring unknown criterion");
        }
    }
    let result = scale.evaluate(&selection);

    match args.format {
        OutputFormatArg::Table => {
            println!("{}", scale.name);
            println!("{}", render::score_table(&scale, &selection, &result));
        }
        OutputFormatArg::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&result).context("serialize score")?
            );
        }
        OutputFormatArg::Plain => println!("{}", render::score_plain(&result)),
    }
    Ok(())
}
