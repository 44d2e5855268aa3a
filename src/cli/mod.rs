use clap::Parser;

use crate::paths::PathKind;

#[derive(Debug, Clone, Parser)]
#[command(name = "schema2arrow", version, about = "Build Arrow table schemas from a JSON schema document")]
pub struct Args {
    /// schema JSON 所在目录
    #[arg(long, value_name = "PATH")]
    pub schema_dir: String,

    /// 文件匹配（glob），默认 *.json
    #[arg(long, value_name = "GLOB", default_value = "*.json")]
    pub pattern: String,

    /// 查找类型：file 或 folder
    #[arg(long, value_enum, default_value_t = PathKind::File)]
    pub kind: PathKind,

    /// 目标表名（可重复；缺省时构建文档内全部表）
    #[arg(long, value_name = "NAME")]
    pub table: Vec<String>,
}

pub fn parse() -> Args { Args::parse() }
