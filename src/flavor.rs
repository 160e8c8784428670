//! Flavor：按配置的后端选择方言实现。

use crate::dialect::Dialect;
use crate::ql::QlDialect;
use std::fmt;
use std::str::FromStr;

/// 支持的 SQL 后端。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Flavor {
    #[default]
    Ql,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum FlavorError {
    #[error("unknown sql flavor: {0:?}")]
    Unknown(String),
}

impl Flavor {
    pub const ALL: &'static [Flavor] = &[Flavor::Ql];

    /// 返回该后端的方言实现。
    pub fn dialect(self) -> Box<dyn Dialect> {
        match self {
            Self::Ql => Box::new(QlDialect),
        }
    }

    fn name(self) -> &'static str {
        match self {
            Self::Ql => "QL",
        }
    }
}

impl fmt::Display for Flavor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Flavor {
    type Err = FlavorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|f| f.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| FlavorError::Unknown(s.to_string()))
    }
}
