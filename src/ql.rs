//! QL 后端的方言实现。

use crate::column::{ColumnKind, ColumnMap};
use crate::dialect::Dialect;

/// QL 方言：标识符不加引号，占位符为 `$1, $2, ...`，自增主键通过 `returning` 取回。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QlDialect;

impl QlDialect {
    pub fn new() -> Self {
        Self
    }

    fn scalar_type(kind: &ColumnKind, max_size: usize) -> String {
        let name = match kind {
            ColumnKind::Bool => "bool",
            ColumnKind::I8
            | ColumnKind::I16
            | ColumnKind::I32
            | ColumnKind::Isize
            | ColumnKind::U8
            | ColumnKind::U16
            | ColumnKind::U32
            | ColumnKind::Usize => "int32",
            ColumnKind::I64 | ColumnKind::U64 => "int64",
            ColumnKind::F64 => "float64",
            ColumnKind::F32 => "float32",
            ColumnKind::NullInt64 => "bigint",
            ColumnKind::NullFloat64 => "float64",
            ColumnKind::NullBool => "bool",
            ColumnKind::Time | ColumnKind::NullTime => "time",
            ColumnKind::String
            | ColumnKind::Bytes
            | ColumnKind::Other(_)
            | ColumnKind::Nullable(_) => {
                return if max_size > 0 {
                    format!("varchar({max_size})")
                } else {
                    "string".to_string()
                };
            }
        };
        name.to_string()
    }
}

impl Dialect for QlDialect {
    fn query_suffix(&self) -> &'static str {
        ";"
    }

    fn create_table_suffix(&self) -> &'static str {
        ""
    }

    fn create_index_suffix(&self) -> &'static str {
        ""
    }

    fn drop_index_suffix(&self) -> &'static str {
        ""
    }

    fn to_sql_type(&self, kind: &ColumnKind, max_size: usize, _is_auto_incr: bool) -> String {
        match kind {
            ColumnKind::Nullable(inner) => {
                // 只解一层；包装里再套包装按未识别类型处理
                if inner.is_nullable() {
                    log::debug!("nested nullable column kind {kind} resolved as plain string type");
                }
                Self::scalar_type(inner, max_size)
            }
            _ => Self::scalar_type(kind, max_size),
        }
    }

    fn auto_incr_str(&self) -> &'static str {
        ""
    }

    fn auto_incr_bind_value(&self) -> &'static str {
        ""
    }

    fn auto_incr_insert_suffix(&self, col: &ColumnMap) -> String {
        format!(" returning {}", self.quote_field(&col.column_name))
    }

    fn truncate_clause(&self) -> &'static str {
        "TRUNCATE"
    }

    fn bind_var(&self, i: usize) -> String {
        format!("${}", i + 1)
    }

    fn quote_field(&self, field: &str) -> String {
        field.to_string()
    }

    // 只引用表名，schema 原样输出
    fn quoted_table_for_query(&self, schema: &str, table: &str) -> String {
        if schema.trim().is_empty() {
            return self.quote_field(table);
        }
        format!("{schema}.{}", self.quote_field(table))
    }

    fn if_schema_not_exists(&self, command: &str, _schema: &str) -> String {
        format!("{command} IF NOT EXISTS")
    }

    fn if_table_exists(&self, command: &str, _schema: &str, _table: &str) -> String {
        format!("{command} IF EXISTS")
    }

    fn if_table_not_exists(&self, command: &str, _schema: &str, _table: &str) -> String {
        format!("{command} IF NOT EXISTS")
    }
}
