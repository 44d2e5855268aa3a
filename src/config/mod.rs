use crate::cli::Args;
use crate::paths::PathKind;
use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub schema_dir: String,
    pub pattern: String,
    pub kind: PathKind,
    pub tables: Vec<String>,
}

impl Config {
    pub fn from_args(a: &Args) -> Result<Self> {
        if a.schema_dir.is_empty() { bail!("--schema-dir 不能为空"); }
        if a.pattern.is_empty() { bail!("--pattern 不能为空"); }
        Ok(Self {
            schema_dir: a.schema_dir.clone(),
            pattern: a.pattern.clone(),
            kind: a.kind,
            tables: a.table.clone(),
        })
    }
}
