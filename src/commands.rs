use crate::{OutputMode, emit_success};
use snippets::config::{self, SnippetsConfig};
use snippets::storage::SqliteStore;
use snippets::ui::{self, Icons};
use snippets::{GetRequest, PutRequest, SearchRequest};
use std::path::Path;

pub fn run_put(output_mode: OutputMode, store: &SqliteStore, request: &PutRequest) -> anyhow::Result<()> {
    let (name, body) = store.put(&request.name, &request.body, request.hidden)?;

    if output_mode.is_human() {
        println!("{}", ui::stored_line(&name, &body));
    } else {
        let data = serde_json::json!({
            "name": name,
            "body": body,
            "hidden": request.hidden,
        });
        emit_success(output_mode, "put", data)?;
    }
    Ok(())
}

pub fn run_get(output_mode: OutputMode, store: &SqliteStore, request: &GetRequest) -> anyhow::Result<()> {
    if output_mode.is_human() {
        let body = store.get(&request.name)?;
        if body.is_none() {
            tracing::info!("No snippet named {:?}", request.name);
        }
        println!("{}", ui::retrieved_line(body.as_deref()));
    } else {
        let snippet = store.get_snippet(&request.name)?;
        let data = serde_json::json!({
            "name": request.name,
            "found": snippet.is_some(),
            "snippet": snippet,
        });
        emit_success(output_mode, "get", data)?;
    }
    Ok(())
}

pub fn run_catalog(output_mode: OutputMode, store: &SqliteStore) -> anyhow::Result<()> {
    let names = store.catalog()?;

    if output_mode.is_human() {
        for name in &names {
            println!("{}", name);
        }
    } else {
        emit_success(output_mode, "catalog", serde_json::json!({ "names": names }))?;
    }
    Ok(())
}

pub fn run_contains(output_mode: OutputMode, store: &SqliteStore, request: &SearchRequest) -> anyhow::Result<()> {
    let bodies = store.contains(&request.needle)?;

    if output_mode.is_human() {
        for body in &bodies {
            println!("{}", body);
        }
    } else {
        let data = serde_json::json!({
            "needle": request.needle,
            "bodies": bodies,
        });
        emit_success(output_mode, "contains", data)?;
    }
    Ok(())
}

pub fn run_init(
    output_mode: OutputMode,
    config_path: &Path,
    existing: Option<SnippetsConfig>,
    database: &Path,
    force: bool,
) -> anyhow::Result<()> {
    let config = SnippetsConfig {
        database: Some(database.display().to_string()),
        ..existing.unwrap_or_default()
    };
    config::write_config(config_path, &config, force)?;

    config::ensure_db_dir(database)?;
    SqliteStore::open(database)?;
    tracing::info!("Initialized {} with config {}", database.display(), config_path.display());

    if output_mode.is_human() {
        ui::success(&format!("Wrote config to {}", config_path.display()));
        println!("{} {}", Icons::DATABASE, ui::dim(&database.display().to_string()));
    } else {
        let data = serde_json::json!({
            "config": config_path.display().to_string(),
            "database": database.display().to_string(),
        });
        emit_success(output_mode, "init", data)?;
    }
    Ok(())
}

pub fn run_stats(output_mode: OutputMode, store: &SqliteStore, database: &Path) -> anyhow::Result<()> {
    let stats = store.stats()?;

    if output_mode.is_human() {
        ui::header(&format!("Snippet statistics ({})", database.display()));
        println!("{}", ui::stats_table(&stats));
        if stats.total == 0 {
            ui::warn("No snippets stored yet.");
        }
    } else {
        emit_success(output_mode, "stats", serde_json::to_value(&stats)?)?;
    }
    Ok(())
}
