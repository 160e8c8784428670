//! 列类型与列元数据：方言层只认这里的闭合枚举，不依赖任何运行时反射。
//!
//! 上游映射引擎在拿到 struct 字段的声明类型后，先把它折算成 [`ColumnKind`]，
//! 再交给 [`crate::dialect::Dialect`] 生成具体的 SQL 类型名。

use std::fmt;

/// 方言可识别的逻辑列类型。
///
/// `Nullable` 表示“可空/指针”包装，`to_sql_type` 只解开一层。
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ColumnKind {
    Bool,
    I8,
    I16,
    I32,
    I64,
    /// 平台字长的有符号整数，按 32 位整数归类。
    Isize,
    U8,
    U16,
    U32,
    U64,
    /// 平台字长的无符号整数，按 32 位整数归类。
    Usize,
    F32,
    F64,
    NullInt64,
    NullFloat64,
    NullBool,
    Time,
    NullTime,
    String,
    Bytes,
    /// 其它未识别类型，携带类型名便于排查。
    Other(String),
    Nullable(Box<ColumnKind>),
}

impl ColumnKind {
    pub fn nullable(inner: ColumnKind) -> Self {
        Self::Nullable(Box::new(inner))
    }

    pub fn other(name: impl Into<String>) -> Self {
        Self::Other(name.into())
    }

    pub fn is_nullable(&self) -> bool {
        matches!(self, Self::Nullable(_))
    }

    /// 包装层数：`Bool` 为 0，`Nullable(Bool)` 为 1，以此类推。
    pub fn depth(&self) -> usize {
        let mut depth = 0;
        let mut cur = self;
        while let Self::Nullable(inner) = cur {
            depth += 1;
            cur = inner;
        }
        depth
    }
}

impl fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut depth = 0;
        let mut base = self;
        while let Self::Nullable(inner) = base {
            depth += 1;
            base = inner;
        }
        for _ in 0..depth {
            f.write_str("Nullable<")?;
        }
        let s = match base {
            Self::Bool => "bool",
            Self::I8 => "i8",
            Self::I16 => "i16",
            Self::I32 => "i32",
            Self::I64 => "i64",
            Self::Isize => "isize",
            Self::U8 => "u8",
            Self::U16 => "u16",
            Self::U32 => "u32",
            Self::U64 => "u64",
            Self::Usize => "usize",
            Self::F32 => "f32",
            Self::F64 => "f64",
            Self::NullInt64 => "NullInt64",
            Self::NullFloat64 => "NullFloat64",
            Self::NullBool => "NullBool",
            Self::Time => "Time",
            Self::NullTime => "NullTime",
            Self::String => "String",
            Self::Bytes => "Bytes",
            Self::Other(name) => name.as_str(),
            Self::Nullable(_) => "Nullable",
        };
        f.write_str(s)?;
        for _ in 0..depth {
            f.write_str(">")?;
        }
        Ok(())
    }
}

/// 由 Rust 类型得到对应的 [`ColumnKind`]，替代运行时类型内省。
pub trait SqlType {
    fn column_kind() -> ColumnKind;
}

macro_rules! sql_type {
    ($($t:ty => $kind:ident),+ $(,)?) => {
        $(impl SqlType for $t {
            fn column_kind() -> ColumnKind {
                ColumnKind::$kind
            }
        })+
    };
}

sql_type!(
    bool => Bool,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    isize => Isize,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    usize => Usize,
    f32 => F32,
    f64 => F64,
    String => String,
    &str => String,
    Vec<u8> => Bytes,
    time::OffsetDateTime => Time,
    time::PrimitiveDateTime => Time,
);

impl<T: SqlType> SqlType for Option<T> {
    fn column_kind() -> ColumnKind {
        ColumnKind::nullable(T::column_kind())
    }
}

pub fn column_kind_of<T: SqlType>() -> ColumnKind {
    T::column_kind()
}

/// 单列的映射元数据。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnMap {
    /// SQL 列名
    pub column_name: String,
    /// 来源字段名
    pub field_name: String,
    pub kind: ColumnKind,
    /// 最大长度，0 表示使用默认类型
    pub max_size: usize,
    pub is_auto_incr: bool,
    pub is_pk: bool,
    pub is_not_null: bool,
    pub unique: bool,
    /// 不落库的字段
    pub transient: bool,
}

impl ColumnMap {
    /// 列名默认等于字段名。
    pub fn new(field_name: impl Into<String>, kind: ColumnKind) -> Self {
        let field_name = field_name.into();
        Self {
            column_name: field_name.clone(),
            field_name,
            kind,
            max_size: 0,
            is_auto_incr: false,
            is_pk: false,
            is_not_null: false,
            unique: false,
            transient: false,
        }
    }

    pub fn of<T: SqlType>(field_name: impl Into<String>) -> Self {
        Self::new(field_name, T::column_kind())
    }

    pub fn rename(mut self, column_name: impl Into<String>) -> Self {
        self.column_name = column_name.into();
        self
    }

    pub fn set_max_size(mut self, size: usize) -> Self {
        self.max_size = size;
        self
    }

    pub fn set_not_null(mut self, not_null: bool) -> Self {
        self.is_not_null = not_null;
        self
    }

    pub fn set_unique(mut self, unique: bool) -> Self {
        self.unique = unique;
        self
    }

    pub fn set_transient(mut self, transient: bool) -> Self {
        self.transient = transient;
        self
    }

    pub fn set_auto_incr(mut self, auto_incr: bool) -> Self {
        self.is_auto_incr = auto_incr;
        self
    }

    pub fn set_primary_key(mut self, pk: bool) -> Self {
        self.is_pk = pk;
        self
    }
}
