mod cli;
mod config;
mod paths;
mod schema;
#[cfg(test)]
mod testutil;
use anyhow::{bail, Context, Result};
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true)
        .with_ansi(false) // 禁用ANSI颜色，避免日志中出现控制字符
        .compact()
        .init();
}

fn main() -> Result<()> {
    init_tracing();
    let args = cli::parse();
    let cfg = config::Config::from_args(&args)?;
    tracing::info!(?cfg, "starting schema2arrow");

    let matched = paths::list(&cfg.schema_dir, cfg.kind, &cfg.pattern)?;
    if matched.is_empty() {
        bail!("no schema file matched in {} with pattern='{}'", cfg.schema_dir, cfg.pattern);
    }
    tracing::info!(count=%matched.len(), first=%matched[0], "schema files matched");

    // 取第一个匹配文件作为 schema 文档
    let doc = schema::load_schema_json(&matched[0])?;
    let mapping = schema::TypeMapping::default();

    let tables = if cfg.tables.is_empty() {
        let mut all: Vec<String> = doc.keys().cloned().collect();
        all.sort();
        all
    } else {
        cfg.tables.clone()
    };

    for table in &tables {
        let built = schema::build_schema(table, &doc, &mapping)
            .with_context(|| format!("build schema for table {}", table))?;
        for field in built.fields() {
            tracing::info!(
                table = %table,
                column = %field.name(),
                data_type = ?field.data_type(),
                nullable = field.is_nullable(),
                "column resolved"
            );
        }
        tracing::info!(table = %table, columns = built.fields().len(), "schema built");
    }
    Ok(())
}
