//! TableMap：用方言片段拼出建表、删表、清表、索引与插入语句。
//!
//! 这里只负责把 [`Dialect`] 返回的片段按固定顺序拼起来，不执行任何 SQL。

use crate::column::ColumnMap;
use crate::dialect::Dialect;
use crate::string_builder::StringBuilder;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TableError {
    #[error("table {0:?} has no persistent columns")]
    NoColumns(String),
    #[error("schema name is blank")]
    BlankSchema,
    #[error("index {index:?} references unknown column {column:?}")]
    UnknownIndexColumn { index: String, column: String },
    #[error("index {0:?} has no columns")]
    EmptyIndex(String),
}

/// 索引定义，`columns` 为 SQL 列名。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexMap {
    pub name: String,
    pub unique: bool,
    pub columns: Vec<String>,
}

impl IndexMap {
    pub fn new<I, S>(name: impl Into<String>, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            unique: false,
            columns: columns.into_iter().map(Into::into).collect(),
        }
    }

    pub fn set_unique(mut self, unique: bool) -> Self {
        self.unique = unique;
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableMap {
    pub schema_name: String,
    pub table_name: String,
    pub columns: Vec<ColumnMap>,
    pub indexes: Vec<IndexMap>,
}

impl TableMap {
    pub fn new(table_name: impl Into<String>) -> Self {
        Self {
            table_name: table_name.into(),
            ..Self::default()
        }
    }

    pub fn with_schema(mut self, schema_name: impl Into<String>) -> Self {
        self.schema_name = schema_name.into();
        self
    }

    pub fn add_column(&mut self, col: ColumnMap) -> &mut Self {
        self.columns.push(col);
        self
    }

    pub fn add_index(&mut self, index: IndexMap) -> &mut Self {
        self.indexes.push(index);
        self
    }

    /// 主键列（跳过 transient 列），按声明顺序。
    pub fn keys(&self) -> Vec<&ColumnMap> {
        self.persistent_columns().filter(|c| c.is_pk).collect()
    }

    pub fn column(&self, column_name: &str) -> Option<&ColumnMap> {
        self.columns.iter().find(|c| c.column_name == column_name)
    }

    fn has_persistent_column(&self, column_name: &str) -> bool {
        self.persistent_columns().any(|c| c.column_name == column_name)
    }

    fn persistent_columns(&self) -> impl Iterator<Item = &ColumnMap> {
        self.columns.iter().filter(|c| !c.transient)
    }

    fn quoted_table(&self, d: &dyn Dialect) -> String {
        d.quoted_table_for_query(&self.schema_name, &self.table_name)
    }

    pub fn sql_for_create(
        &self,
        d: &dyn Dialect,
        if_not_exists: bool,
    ) -> Result<String, TableError> {
        let keys = self.keys();
        let defs: Vec<String> = self
            .persistent_columns()
            .map(|c| column_definition(d, c, keys.len() == 1))
            .collect();
        if defs.is_empty() {
            return Err(TableError::NoColumns(self.table_name.clone()));
        }

        let mut buf = StringBuilder::new();
        if if_not_exists {
            buf.write_str(&d.if_table_not_exists(
                "create table",
                &self.schema_name,
                &self.table_name,
            ));
        } else {
            buf.write_str("create table");
        }
        buf.write_leading(&self.quoted_table(d));
        buf.write_str(" (");
        buf.write_strings(&defs, ", ");
        if keys.len() > 1 {
            let names: Vec<String> = keys
                .iter()
                .map(|k| d.quote_field(&k.column_name))
                .collect();
            buf.write_str(", primary key (");
            buf.write_strings(&names, ", ");
            buf.write_str(")");
        }
        buf.write_str(")");
        let suffix = d.create_table_suffix();
        if !suffix.is_empty() {
            buf.write_leading(suffix);
        }
        buf.write_str(d.query_suffix());

        let sql = buf.into_string();
        log::trace!("create table sql for {}: {sql}", self.table_name);
        Ok(sql)
    }

    pub fn sql_for_drop(&self, d: &dyn Dialect, if_exists: bool) -> String {
        let mut buf = StringBuilder::new();
        if if_exists {
            buf.write_str(&d.if_table_exists("drop table", &self.schema_name, &self.table_name));
        } else {
            buf.write_str("drop table");
        }
        buf.write_leading(&self.quoted_table(d));
        buf.write_str(d.query_suffix());
        buf.into_string()
    }

    pub fn sql_for_truncate(&self, d: &dyn Dialect) -> String {
        let mut buf = StringBuilder::new();
        buf.write_str(d.truncate_clause());
        buf.write_leading(&self.quoted_table(d));
        buf.write_str(d.query_suffix());
        buf.into_string()
    }

    pub fn sql_for_create_schema(
        &self,
        d: &dyn Dialect,
        if_not_exists: bool,
    ) -> Result<String, TableError> {
        if self.schema_name.trim().is_empty() {
            return Err(TableError::BlankSchema);
        }
        let mut buf = StringBuilder::new();
        if if_not_exists {
            buf.write_str(&d.if_schema_not_exists("create schema", &self.schema_name));
        } else {
            buf.write_str("create schema");
        }
        buf.write_leading(&self.schema_name);
        buf.write_str(d.query_suffix());
        Ok(buf.into_string())
    }

    pub fn sql_for_create_index(
        &self,
        d: &dyn Dialect,
        index: &IndexMap,
    ) -> Result<String, TableError> {
        if index.columns.is_empty() {
            return Err(TableError::EmptyIndex(index.name.clone()));
        }
        // transient 列不会建出来，不能被索引引用
        if let Some(missing) = index
            .columns
            .iter()
            .find(|c| !self.has_persistent_column(c))
        {
            return Err(TableError::UnknownIndexColumn {
                index: index.name.clone(),
                column: missing.clone(),
            });
        }
        let cols: Vec<String> = index.columns.iter().map(|c| d.quote_field(c)).collect();

        let mut buf = StringBuilder::new();
        buf.write_str("create");
        if index.unique {
            buf.write_leading("unique");
        }
        buf.write_leading("index");
        buf.write_leading(&index.name);
        buf.write_leading("on");
        buf.write_leading(&self.quoted_table(d));
        buf.write_str(" (");
        buf.write_strings(&cols, ", ");
        buf.write_str(")");
        buf.write_str(d.create_index_suffix());
        buf.write_str(d.query_suffix());
        Ok(buf.into_string())
    }

    /// 按登记顺序为 `indexes` 中的每个索引生成建索引语句，遇到第一个错误即返回。
    pub fn sql_for_create_indexes(&self, d: &dyn Dialect) -> Result<Vec<String>, TableError> {
        self.indexes
            .iter()
            .map(|index| self.sql_for_create_index(d, index))
            .collect()
    }

    pub fn sql_for_drop_index(&self, d: &dyn Dialect, index: &IndexMap) -> String {
        format!(
            "drop index {}{}{}",
            index.name,
            d.drop_index_suffix(),
            d.query_suffix()
        )
    }

    /// 返回 INSERT 语句以及按占位符顺序排列的字段名。
    ///
    /// 自增列在绑定值为空时不进入列清单，改由插入后缀取回生成值。
    pub fn sql_for_insert(&self, d: &dyn Dialect) -> Result<(String, Vec<String>), TableError> {
        let mut cols = Vec::new();
        let mut binds = Vec::new();
        let mut fields = Vec::new();
        let mut auto_incr: Option<&ColumnMap> = None;

        for c in self.persistent_columns() {
            if c.is_auto_incr {
                auto_incr = Some(c);
                let v = d.auto_incr_bind_value();
                if !v.is_empty() {
                    cols.push(d.quote_field(&c.column_name));
                    binds.push(v.to_string());
                }
                continue;
            }
            cols.push(d.quote_field(&c.column_name));
            binds.push(d.bind_var(fields.len()));
            fields.push(c.field_name.clone());
        }
        if cols.is_empty() {
            return Err(TableError::NoColumns(self.table_name.clone()));
        }

        let mut buf = StringBuilder::new();
        buf.write_str("insert into");
        buf.write_leading(&self.quoted_table(d));
        buf.write_str(" (");
        buf.write_strings(&cols, ", ");
        buf.write_str(") values (");
        buf.write_strings(&binds, ", ");
        buf.write_str(")");
        if let Some(c) = auto_incr {
            buf.write_str(&d.auto_incr_insert_suffix(c));
        }
        buf.write_str(d.query_suffix());

        let sql = buf.into_string();
        log::trace!("insert sql for {}: {sql}", self.table_name);
        Ok((sql, fields))
    }
}

fn column_definition(d: &dyn Dialect, c: &ColumnMap, single_key: bool) -> String {
    let mut def = format!("{} {}", d.quote_field(&c.column_name), d.column_sql_type(c));
    if c.is_pk || c.is_not_null {
        def.push_str(" not null");
    }
    if c.is_pk && single_key {
        def.push_str(" primary key");
    }
    if c.unique {
        def.push_str(" unique");
    }
    let auto = d.auto_incr_str();
    if c.is_auto_incr && !auto.is_empty() {
        def.push(' ');
        def.push_str(auto);
    }
    def
}
