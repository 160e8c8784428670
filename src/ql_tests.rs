#[cfg(test)]
mod tests {
    use crate::column::{ColumnKind, ColumnMap};
    use crate::dialect::Dialect;
    use crate::ql::QlDialect;
    use pretty_assertions::assert_eq;

    #[test]
    fn to_sql_type_primitive_kinds() {
        let d = QlDialect::new();
        let cases = vec![
            (ColumnKind::Bool, "bool"),
            (ColumnKind::I8, "int32"),
            (ColumnKind::I16, "int32"),
            (ColumnKind::I32, "int32"),
            (ColumnKind::Isize, "int32"),
            (ColumnKind::U8, "int32"),
            (ColumnKind::U16, "int32"),
            (ColumnKind::U32, "int32"),
            (ColumnKind::Usize, "int32"),
            (ColumnKind::I64, "int64"),
            (ColumnKind::U64, "int64"),
            (ColumnKind::F64, "float64"),
            (ColumnKind::F32, "float32"),
        ];

        for (kind, expected) in cases {
            assert_eq!(d.to_sql_type(&kind, 0, false), expected, "kind {kind}");
            assert_eq!(d.to_sql_type(&kind, 255, true), expected, "kind {kind}");
        }
    }

    #[test]
    fn to_sql_type_named_wrappers() {
        let d = QlDialect::new();
        assert_eq!(d.to_sql_type(&ColumnKind::NullInt64, 0, false), "bigint");
        assert_eq!(d.to_sql_type(&ColumnKind::NullInt64, 40, false), "bigint");
        assert_eq!(d.to_sql_type(&ColumnKind::NullFloat64, 0, false), "float64");
        assert_eq!(d.to_sql_type(&ColumnKind::NullBool, 0, false), "bool");
        assert_eq!(d.to_sql_type(&ColumnKind::Time, 0, false), "time");
        assert_eq!(d.to_sql_type(&ColumnKind::NullTime, 10, false), "time");
    }

    #[test]
    fn to_sql_type_string_fallback() {
        let d = QlDialect::new();
        assert_eq!(d.to_sql_type(&ColumnKind::String, 0, false), "string");
        assert_eq!(d.to_sql_type(&ColumnKind::String, 255, false), "varchar(255)");
        assert_eq!(d.to_sql_type(&ColumnKind::Bytes, 0, false), "string");
        assert_eq!(
            d.to_sql_type(&ColumnKind::other("Uuid"), 36, false),
            "varchar(36)"
        );
    }

    #[test]
    fn to_sql_type_unwraps_one_level() {
        let d = QlDialect::new();
        let kind = ColumnKind::nullable(ColumnKind::I64);
        assert_eq!(d.to_sql_type(&kind, 0, true), "int64");
        let kind = ColumnKind::nullable(ColumnKind::NullInt64);
        assert_eq!(d.to_sql_type(&kind, 0, false), "bigint");
        let kind = ColumnKind::nullable(ColumnKind::String);
        assert_eq!(d.to_sql_type(&kind, 20, false), "varchar(20)");
    }

    #[test]
    fn to_sql_type_nested_wrapper_falls_back() {
        let d = QlDialect::new();
        let kind = ColumnKind::nullable(ColumnKind::nullable(ColumnKind::Bool));
        assert_eq!(d.to_sql_type(&kind, 0, false), "string");
        assert_eq!(d.to_sql_type(&kind, 8, false), "varchar(8)");
    }

    #[test]
    fn fixed_fragments() {
        let d = QlDialect::new();
        assert_eq!(d.query_suffix(), ";");
        assert_eq!(d.create_table_suffix(), "");
        assert_eq!(d.create_index_suffix(), "");
        assert_eq!(d.drop_index_suffix(), "");
        assert_eq!(d.auto_incr_str(), "");
        assert_eq!(d.auto_incr_bind_value(), "");
        assert_eq!(d.truncate_clause(), "TRUNCATE");
    }

    #[test]
    fn auto_incr_insert_suffix_returns_column() {
        let d = QlDialect::new();
        let col = ColumnMap::new("Id", ColumnKind::I64).rename("id");
        assert_eq!(d.auto_incr_insert_suffix(&col), " returning id");
    }

    #[test]
    fn bind_var_is_one_based() {
        let d = QlDialect::new();
        assert_eq!(d.bind_var(0), "$1");
        assert_eq!(d.bind_var(4), "$5");
        for i in [0usize, 1, 9, 99, 1000] {
            assert_eq!(d.bind_var(i), format!("${}", i + 1));
        }
    }

    #[test]
    fn quote_field_is_identity() {
        let d = QlDialect::new();
        for s in ["users", "User Name", "select", "", "a\"b"] {
            assert_eq!(d.quote_field(s), s);
        }
    }

    #[test]
    fn quoted_table_for_query_schema_handling() {
        let d = QlDialect::new();
        assert_eq!(d.quoted_table_for_query("", "users"), "users");
        assert_eq!(d.quoted_table_for_query("   ", "users"), "users");
        assert_eq!(d.quoted_table_for_query("\t\n", "users"), "users");
        assert_eq!(d.quoted_table_for_query("public", "users"), "public.users");
    }

    #[test]
    fn existence_guards() {
        let d = QlDialect::new();
        assert_eq!(
            d.if_schema_not_exists("CREATE SCHEMA foo", "foo"),
            "CREATE SCHEMA foo IF NOT EXISTS"
        );
        assert_eq!(
            d.if_table_exists("DROP TABLE", "public", "users"),
            "DROP TABLE IF EXISTS"
        );
        assert_eq!(
            d.if_table_not_exists("CREATE TABLE", "public", "users"),
            "CREATE TABLE IF NOT EXISTS"
        );
    }

    #[test]
    fn repeated_calls_are_identical() {
        let d = QlDialect::new();
        let kind = ColumnKind::nullable(ColumnKind::Time);
        assert_eq!(d.to_sql_type(&kind, 3, false), d.to_sql_type(&kind, 3, false));
        assert_eq!(d.bind_var(7), d.bind_var(7));
        assert_eq!(
            d.quoted_table_for_query("s", "t"),
            d.quoted_table_for_query("s", "t")
        );
    }

    #[test]
    fn shared_across_threads() {
        let d: std::sync::Arc<dyn Dialect> = std::sync::Arc::new(QlDialect);
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let d = d.clone();
                std::thread::spawn(move || d.bind_var(i))
            })
            .collect();
        let got: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert_eq!(got, vec!["$1", "$2", "$3", "$4"]);
    }
}
