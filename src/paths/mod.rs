use anyhow::{bail, Context, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
pub enum PathKind { File, Folder }

impl FromStr for PathKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "file" => Ok(PathKind::File),
            "folder" => Ok(PathKind::Folder),
            other => bail!("unknown path kind '{}', expected file|folder", other),
        }
    }
}

/// 列出 base 下匹配 glob pattern 的路径，按 kind 过滤。
/// 返回正斜杠形式的路径字符串；无匹配时仅告警，不报错。
pub fn list<P: AsRef<Path>>(base: P, kind: PathKind, pattern: &str) -> Result<Vec<String>> {
    // base 作为字面路径处理，只有 pattern 参与 glob 匹配
    let base_esc = glob::Pattern::escape(&base.as_ref().to_string_lossy());
    let full = if base_esc.is_empty() {
        pattern.to_string()
    } else {
        format!("{}/{}", base_esc.trim_end_matches('/'), pattern)
    };
    let mut out = Vec::new();
    for entry in glob::glob(&full).with_context(|| format!("bad glob pattern: {}", full))? {
        let p = match entry {
            Ok(p) => p,
            Err(e) => {
                tracing::debug!(error = %e, "unreadable path skipped");
                continue;
            }
        };
        let keep = match kind {
            PathKind::File => p.is_file(),
            PathKind::Folder => p.is_dir(),
        };
        if keep { out.push(to_posix(&p)); }
    }
    if out.is_empty() {
        tracing::warn!(
            base = %base.as_ref().display(),
            pattern = %pattern,
            kind = ?kind,
            "no paths matched"
        );
    }
    Ok(out)
}

// Windows 下统一为正斜杠，与下游管道配置保持一致
fn to_posix(p: &Path) -> String {
    let s = p.to_string_lossy();
    if std::path::MAIN_SEPARATOR == '/' { s.into_owned() } else { s.replace(std::path::MAIN_SEPARATOR, "/") }
}
