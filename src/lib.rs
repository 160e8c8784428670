//! halo-sql-dialect：struct 映射引擎使用的 SQL 方言适配层。
//!
//! 引擎按配置选出一个 [`Dialect`]，再用它生成类型名、标识符引用、占位符与
//! `IF [NOT] EXISTS` 守卫等片段。所有方言实现都是无状态的，可跨线程共享。

pub mod column;
pub mod dialect;
pub mod flavor;
pub mod ql;
#[cfg(test)]
mod ql_tests;
mod string_builder;
pub mod table;

pub use crate::column::{ColumnKind, ColumnMap, SqlType, column_kind_of};
pub use crate::dialect::Dialect;
pub use crate::flavor::{Flavor, FlavorError};
pub use crate::ql::QlDialect;
pub use crate::table::{IndexMap, TableError, TableMap};
