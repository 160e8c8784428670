//! Dialect：映射引擎与具体数据库之间的 SQL 片段契约。
//!
//! 每个后端各自实现一份；引擎只通过这里的方法拼接 SQL，不关心后端细节。
//! 实现必须是无状态的纯函数：同样的输入永远得到逐字节相同的输出。

use crate::column::{ColumnKind, ColumnMap};
use dyn_clone::DynClone;

pub trait Dialect: DynClone + std::fmt::Debug + Send + Sync {
    /// 追加在每条语句末尾的终止符。
    fn query_suffix(&self) -> &'static str;

    /// 追加在 `CREATE TABLE (...)` 之后的子句，可为空。
    fn create_table_suffix(&self) -> &'static str;

    fn create_index_suffix(&self) -> &'static str;

    fn drop_index_suffix(&self) -> &'static str;

    /// 把逻辑列类型折算为后端类型名；不会失败，无法识别时回落到默认类型。
    fn to_sql_type(&self, kind: &ColumnKind, max_size: usize, is_auto_incr: bool) -> String;

    /// 建表时标记自增列的后缀；后端改用插入期子句时为空。
    fn auto_incr_str(&self) -> &'static str;

    /// 插入时自增列绑定的值；为空表示从插入列表中省略该列。
    fn auto_incr_bind_value(&self) -> &'static str;

    /// 追加在 INSERT 之后、用于取回生成主键的子句。
    fn auto_incr_insert_suffix(&self, col: &ColumnMap) -> String;

    fn truncate_clause(&self) -> &'static str;

    /// 第 `i + 1` 个参数的占位符（`i` 从 0 开始）。
    fn bind_var(&self, i: usize) -> String;

    fn quote_field(&self, field: &str) -> String;

    /// schema 为空或全是空白时只返回引用后的表名。
    fn quoted_table_for_query(&self, schema: &str, table: &str) -> String;

    fn if_schema_not_exists(&self, command: &str, schema: &str) -> String;

    fn if_table_exists(&self, command: &str, schema: &str, table: &str) -> String;

    fn if_table_not_exists(&self, command: &str, schema: &str, table: &str) -> String;

    fn column_sql_type(&self, col: &ColumnMap) -> String {
        self.to_sql_type(&col.kind, col.max_size, col.is_auto_incr)
    }

    /// 依次生成 `0..n` 的占位符。
    fn bind_vars(&self, n: usize) -> Vec<String> {
        (0..n).map(|i| self.bind_var(i)).collect()
    }
}

dyn_clone::clone_trait_object!(Dialect);
