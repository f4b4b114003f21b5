use std::sync::OnceLock;

use regex::Regex;

/// Extracts table, column and value information from PostgreSQL constraint
/// violation reports.
///
/// PostgreSQL splits a violation into a primary message
/// (`duplicate key value violates unique constraint "buyers_card_number_id_key"`)
/// and a detail line (`Key (card_number_id)=(402323) already exists.`), so most
/// parsers accept both.
pub struct ConstraintParser;

struct RegexPatterns {
    key_value: Regex,
    column_name: Regex,
    relation_name: Regex,
}

impl RegexPatterns {
    fn new() -> Self {
        // The patterns are literals; a failure here is a programming error.
        Self {
            key_value: Regex::new(r"Key \(([^)]+)\)=\(([^)]*)\)").expect("key/value pattern"),
            column_name: Regex::new(r#"column "([^"]+)""#).expect("column pattern"),
            relation_name: Regex::new(r#"(?:table|relation) "([^"]+)""#).expect("relation pattern"),
        }
    }
}

static REGEX_PATTERNS: OnceLock<RegexPatterns> = OnceLock::new();

const UNKNOWN_ENTITY: &str = "resource";

impl ConstraintParser {
    fn patterns() -> &'static RegexPatterns {
        REGEX_PATTERNS.get_or_init(RegexPatterns::new)
    }

    /// Parses a unique violation into `(entity, field, value)`.
    ///
    /// ```ignore
    /// let parsed = ConstraintParser::parse_unique_violation(
    ///     "duplicate key value violates unique constraint \"buyers_card_number_id_key\"",
    ///     Some("Key (card_number_id)=(402323) already exists."),
    ///     Some("buyers_card_number_id_key"),
    /// );
    /// assert_eq!(parsed, Some(("buyers".into(), "card_number_id".into(), "402323".into())));
    /// ```
    pub fn parse_unique_violation(
        message: &str,
        details: Option<&str>,
        constraint_name: Option<&str>,
    ) -> Option<(String, String, String)> {
        let key_value = details
            .and_then(Self::extract_key_value)
            .or_else(|| Self::extract_key_value(message));

        match (key_value, constraint_name) {
            (Some((field, value)), Some(constraint)) => {
                let entity = Self::entity_from_constraint(constraint, &field, "_key")
                    .or_else(|| Self::extract_relation(message))
                    .unwrap_or_else(|| UNKNOWN_ENTITY.to_string());
                Some((entity, field, value))
            }
            (Some((field, value)), None) => {
                let entity =
                    Self::extract_relation(message).unwrap_or_else(|| UNKNOWN_ENTITY.to_string());
                Some((entity, field, value))
            }
            (None, Some(constraint)) => Self::split_constraint_name(constraint, "_key")
                .map(|(entity, field)| (entity, field, "duplicate_value".to_string())),
            (None, None) => None,
        }
    }

    /// Parses a not-null violation into `(entity, field)`.
    pub fn parse_not_null_violation(
        message: &str,
        table_name: Option<&str>,
    ) -> Option<(String, String)> {
        let field = Self::extract_column(message)?;
        let entity = table_name
            .map(str::to_string)
            .or_else(|| Self::extract_relation(message))
            .unwrap_or_else(|| UNKNOWN_ENTITY.to_string());
        Some((entity, field))
    }

    /// Parses a foreign key violation into `(entity, field, referenced_value)`.
    pub fn parse_foreign_key_violation(
        message: &str,
        details: Option<&str>,
        constraint_name: Option<&str>,
    ) -> Option<(String, String, String)> {
        let key_value = details
            .and_then(Self::extract_key_value)
            .or_else(|| Self::extract_key_value(message));

        if let Some((field, value)) = key_value {
            let entity = constraint_name
                .and_then(|c| Self::entity_from_constraint(c, &field, "_fkey"))
                .or_else(|| Self::extract_relation(message))
                .unwrap_or_else(|| UNKNOWN_ENTITY.to_string());
            return Some((entity, field, value));
        }

        constraint_name
            .and_then(|c| Self::split_constraint_name(c, "_fkey"))
            .map(|(entity, field)| (entity, field, "invalid_reference".to_string()))
    }

    /// Parses a check violation into `(entity, field)`.
    pub fn parse_check_violation(
        message: &str,
        constraint_name: Option<&str>,
    ) -> Option<(String, String)> {
        constraint_name
            .and_then(|c| Self::split_constraint_name(c, "_check"))
            .or_else(|| {
                let field = Self::extract_column(message)?;
                let entity =
                    Self::extract_relation(message).unwrap_or_else(|| UNKNOWN_ENTITY.to_string());
                Some((entity, field))
            })
    }

    /// Recovers the table name from a constraint named `{table}_{field}{suffix}`.
    ///
    /// Works for table and column names that contain underscores, e.g.
    /// `purchase_orders_order_number_key` with field `order_number`.
    pub fn entity_from_constraint(constraint: &str, field: &str, suffix: &str) -> Option<String> {
        let entity = constraint
            .strip_suffix(suffix)?
            .strip_suffix(field)?
            .strip_suffix('_')?;
        (!entity.is_empty()).then(|| entity.to_string())
    }

    /// Splits a constraint name into `(table, field)` when the column is unknown.
    ///
    /// The split happens at the first underscore, so it is only a best effort for
    /// table names that contain underscores themselves.
    pub fn split_constraint_name(constraint: &str, suffix: &str) -> Option<(String, String)> {
        let stem = constraint.strip_suffix(suffix)?;
        let (entity, field) = stem.split_once('_')?;
        if entity.is_empty() || field.is_empty() {
            return None;
        }
        Some((entity.to_string(), field.to_string()))
    }

    /// Extracts `(field, value)` from a `Key (field)=(value)` fragment.
    pub fn extract_key_value(text: &str) -> Option<(String, String)> {
        let caps = Self::patterns().key_value.captures(text)?;
        let field = caps.get(1)?.as_str().to_string();
        let value = caps.get(2)?.as_str().to_string();
        Some((field, value))
    }

    pub fn extract_column(message: &str) -> Option<String> {
        Self::patterns()
            .column_name
            .captures(message)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
    }

    pub fn extract_relation(message: &str) -> Option<String> {
        Self::patterns()
            .relation_name
            .captures(message)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_parse_unique_violation_from_details() {
        let result = ConstraintParser::parse_unique_violation(
            "duplicate key value violates unique constraint \"buyers_card_number_id_key\"",
            Some("Key (card_number_id)=(402323) already exists."),
            Some("buyers_card_number_id_key"),
        );
        assert_eq!(
            result,
            Some((
                "buyers".to_string(),
                "card_number_id".to_string(),
                "402323".to_string()
            ))
        );
    }

    #[test]
    fn test_parse_unique_violation_table_with_underscore() {
        let result = ConstraintParser::parse_unique_violation(
            "duplicate key value violates unique constraint \"purchase_orders_order_number_key\"",
            Some("Key (order_number)=(PO-001) already exists."),
            Some("purchase_orders_order_number_key"),
        );
        assert_eq!(
            result,
            Some((
                "purchase_orders".to_string(),
                "order_number".to_string(),
                "PO-001".to_string()
            ))
        );
    }

    #[test]
    fn test_parse_unique_violation_key_in_message() {
        let message = "duplicate key value violates unique constraint\nDETAIL: Key (cid)=(42) already exists.";
        let result = ConstraintParser::parse_unique_violation(message, None, None);
        assert_eq!(
            result,
            Some(("resource".to_string(), "cid".to_string(), "42".to_string()))
        );
    }

    #[test]
    fn test_parse_unique_violation_constraint_only() {
        let result = ConstraintParser::parse_unique_violation(
            "duplicate key value violates unique constraint",
            None,
            Some("sellers_cid_key"),
        );
        assert_eq!(
            result,
            Some((
                "sellers".to_string(),
                "cid".to_string(),
                "duplicate_value".to_string()
            ))
        );
    }

    #[test]
    fn test_parse_not_null_violation() {
        let message =
            "null value in column \"zip_code\" of relation \"localities\" violates not-null constraint";
        assert_eq!(
            ConstraintParser::parse_not_null_violation(message, None),
            Some(("localities".to_string(), "zip_code".to_string()))
        );
        assert_eq!(
            ConstraintParser::parse_not_null_violation(message, Some("localities")),
            Some(("localities".to_string(), "zip_code".to_string()))
        );
    }

    #[test]
    fn test_parse_foreign_key_violation() {
        let message = "insert or update on table \"employees\" violates foreign key constraint \"employees_warehouse_id_fkey\"";
        let result = ConstraintParser::parse_foreign_key_violation(
            message,
            Some("Key (warehouse_id)=(999) is not present in table \"warehouses\"."),
            Some("employees_warehouse_id_fkey"),
        );
        assert_eq!(
            result,
            Some((
                "employees".to_string(),
                "warehouse_id".to_string(),
                "999".to_string()
            ))
        );
    }

    #[test]
    fn test_parse_check_violation() {
        let message = "new row for relation \"sections\" violates check constraint \"sections_capacity_check\"";
        assert_eq!(
            ConstraintParser::parse_check_violation(message, Some("sections_capacity_check")),
            Some(("sections".to_string(), "capacity".to_string()))
        );
    }

    #[test]
    fn test_entity_from_constraint() {
        assert_eq!(
            ConstraintParser::entity_from_constraint(
                "warehouses_warehouse_code_key",
                "warehouse_code",
                "_key"
            ),
            Some("warehouses".to_string())
        );
        assert_eq!(
            ConstraintParser::entity_from_constraint("buyers_pkey", "card_number_id", "_key"),
            None
        );
        assert_eq!(
            ConstraintParser::entity_from_constraint("cid_key", "cid", "_key"),
            None
        );
    }

    #[test]
    fn test_split_constraint_name() {
        assert_eq!(
            ConstraintParser::split_constraint_name("localities_zip_code_key", "_key"),
            Some(("localities".to_string(), "zip_code".to_string()))
        );
        assert_eq!(ConstraintParser::split_constraint_name("invalid", "_key"), None);
        assert_eq!(ConstraintParser::split_constraint_name("_key", "_key"), None);
    }

    #[test]
    fn test_extract_helpers() {
        assert_eq!(
            ConstraintParser::extract_key_value("Key (zip_code)=(1000) already exists."),
            Some(("zip_code".to_string(), "1000".to_string()))
        );
        assert_eq!(
            ConstraintParser::extract_column("null value in column \"cid\""),
            Some("cid".to_string())
        );
        assert_eq!(
            ConstraintParser::extract_relation("insert or update on table \"carriers\""),
            Some("carriers".to_string())
        );
        assert_eq!(ConstraintParser::extract_column("no column here"), None);
    }

    #[test]
    fn test_regex_patterns_caching() {
        let first = ConstraintParser::patterns();
        let second = ConstraintParser::patterns();
        assert!(std::ptr::eq(first, second));
    }

    #[test]
    fn test_graceful_parsing_failures() {
        let message = "completely unrelated error message";
        assert_eq!(ConstraintParser::parse_unique_violation(message, None, None), None);
        assert_eq!(ConstraintParser::parse_not_null_violation(message, None), None);
        assert_eq!(
            ConstraintParser::parse_foreign_key_violation(message, None, None),
            None
        );
        assert_eq!(ConstraintParser::parse_check_violation(message, None), None);
    }

    proptest! {
        #[test]
        fn prop_parsers_never_panic(message in ".{0,200}", constraint in proptest::option::of("[a-z_]{0,40}")) {
            let _ = ConstraintParser::parse_unique_violation(&message, Some(&message), constraint.as_deref());
            let _ = ConstraintParser::parse_not_null_violation(&message, None);
            let _ = ConstraintParser::parse_foreign_key_violation(&message, None, constraint.as_deref());
            let _ = ConstraintParser::parse_check_violation(&message, constraint.as_deref());
        }

        #[test]
        fn prop_entity_from_constraint_recovers_table(
            table in "[a-z]{1,10}(_[a-z]{1,10})?",
            field in "[a-z]{1,10}(_[a-z]{1,10})?",
        ) {
            let constraint = format!("{table}_{field}_key");
            prop_assert_eq!(
                ConstraintParser::entity_from_constraint(&constraint, &field, "_key"),
                Some(table)
            );
        }
    }
}
