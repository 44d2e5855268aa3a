use anyhow::{Context, Result};
use arrow_schema::{DataType, Field, Schema, TimeUnit};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

#[derive(Debug, Clone, Deserialize)]
pub struct ColumnDescriptor {
    pub column_name: String,
    pub data_type: String,
    pub column_position: i64,
}

/// 顶层 key 为表名，value 为该表的列描述
pub type SchemaDoc = HashMap<String, Vec<ColumnDescriptor>>;

pub fn load_schema_json<P: AsRef<Path>>(path: P) -> Result<SchemaDoc> {
    let text = std::fs::read_to_string(&path)
        .with_context(|| format!("read schema json: {:?}", path.as_ref()))?;
    serde_json::from_str(&text).with_context(|| format!("parse schema json: {:?}", path.as_ref()))
}

/// 逻辑类型名 -> Arrow DataType 的查找表，显式注入而非全局状态
#[derive(Debug, Clone)]
pub struct TypeMapping {
    map: HashMap<String, DataType>,
}

impl Default for TypeMapping {
    fn default() -> Self {
        let pairs: [(&str, DataType); 18] = [
            ("string", DataType::Utf8),
            ("str", DataType::Utf8),
            ("integer", DataType::Int32),
            ("int", DataType::Int32),
            ("long", DataType::Int64),
            ("bigint", DataType::Int64),
            ("short", DataType::Int16),
            ("smallint", DataType::Int16),
            ("byte", DataType::Int8),
            ("tinyint", DataType::Int8),
            ("float", DataType::Float32),
            ("double", DataType::Float64),
            ("boolean", DataType::Boolean),
            ("bool", DataType::Boolean),
            ("date", DataType::Date32),
            ("timestamp", DataType::Timestamp(TimeUnit::Microsecond, None)),
            ("binary", DataType::Binary),
            ("decimal", DataType::Decimal128(10, 0)),
        ];
        let map = pairs.into_iter().map(|(k, v)| (k.to_string(), v)).collect();
        Self { map }
    }
}

impl TypeMapping {
    pub fn insert(&mut self, logical_name: &str, data_type: DataType) {
        self.map.insert(logical_name.to_ascii_lowercase(), data_type);
    }

    /// 大小写不敏感查找；未知类型名回退为 Utf8，只告警不报错
    pub fn resolve(&self, data_type: &str) -> DataType {
        let key = data_type.to_ascii_lowercase();
        match self.map.get(key.as_str()) {
            Some(dt) => dt.clone(),
            None => {
                tracing::warn!(data_type = %data_type, "unknown data_type, falling back to utf8");
                DataType::Utf8
            }
        }
    }
}

/// 按 column_position 升序（稳定排序）构建指定表的 Arrow schema，所有列均可空
pub fn build_schema(table_name: &str, doc: &SchemaDoc, mapping: &TypeMapping) -> Result<Schema> {
    let columns = doc
        .get(table_name)
        .ok_or_else(|| anyhow::anyhow!("table {} not found in schema json", table_name))?;

    let mut ordered: Vec<&ColumnDescriptor> = columns.iter().collect();
    ordered.sort_by_key(|c| c.column_position);

    let fields: Vec<Field> = ordered
        .iter()
        .map(|c| Field::new(c.column_name.as_str(), mapping.resolve(&c.data_type), true))
        .collect();
    Ok(Schema::new(fields))
}
