//! Collection registry: one declarative entry per record collection.
//!
//! Adding a new collection means adding one row here and its table to
//! `schema::TABLES`; no handler code changes.

/// Per-collection configuration for the generic resource handler.
#[derive(Debug, Clone, Copy)]
pub struct Collection {
    /// URL path segment under /api
    pub path: &'static str,
    /// Backing table name
    pub table: &'static str,
    /// Columns included in free-text search (`col LIKE %term%`, OR-joined).
    /// Empty means the collection is not searchable.
    pub search_columns: &'static [&'static str],
    /// Default ordering for list responses
    pub order_by: &'static str,
}

pub const COLLECTIONS: &[Collection] = &[
    Collection { path: "students", table: "students", search_columns: &["first_name", "last_name", "admission_number"], order_by: "id DESC" },
    Collection { path: "classes", table: "classes", search_columns: &["name", "level"], order_by: "id DESC" },
    Collection { path: "parents", table: "parents", search_columns: &["first_name", "last_name", "phone"], order_by: "id DESC" },
    Collection { path: "staff", table: "staff", search_columns: &["first_name", "last_name", "role"], order_by: "id DESC" },
    Collection { path: "subjects", table: "subjects", search_columns: &["name", "code"], order_by: "id DESC" },
    Collection { path: "class-subjects", table: "class_subjects", search_columns: &[], order_by: "id DESC" },
    Collection { path: "attendance", table: "attendance", search_columns: &[], order_by: "date DESC" },
    Collection { path: "exams", table: "exams", search_columns: &["name"], order_by: "id DESC" },
    Collection { path: "exam-results", table: "exam_results", search_columns: &[], order_by: "id DESC" },
    Collection { path: "fee-structures", table: "fee_structures", search_columns: &["name"], order_by: "id DESC" },
    Collection { path: "fee-payments", table: "fee_payments", search_columns: &[], order_by: "payment_date DESC" },
    Collection { path: "discipline", table: "discipline", search_columns: &[], order_by: "incident_date DESC" },
    Collection { path: "gate-log", table: "gate_log", search_columns: &[], order_by: "timestamp DESC" },
    Collection { path: "visitors", table: "visitors", search_columns: &["name", "purpose"], order_by: "check_in DESC" },
    Collection { path: "payroll", table: "payroll", search_columns: &[], order_by: "month DESC" },
    Collection { path: "transactions", table: "transactions", search_columns: &["description", "category"], order_by: "date DESC" },
    Collection { path: "requisitions", table: "requisitions", search_columns: &["item"], order_by: "date DESC" },
    Collection { path: "assets", table: "assets", search_columns: &["name", "category", "serial_number"], order_by: "id DESC" },
    Collection { path: "letters", table: "letters", search_columns: &["title", "recipient"], order_by: "id DESC" },
    Collection { path: "calendar-events", table: "calendar_events", search_columns: &["title"], order_by: "start_date ASC" },
    Collection { path: "timetable", table: "timetable", search_columns: &[], order_by: "id DESC" },
    Collection { path: "ecd-progress", table: "ecd_progress", search_columns: &[], order_by: "id DESC" },
];

/// Look up a collection by its URL path segment
pub fn find(path: &str) -> Option<&'static Collection> {
    COLLECTIONS.iter().find(|c| c.path == path)
}

/// Validate a SQL identifier to prevent injection through record field names.
/// Table names, search columns and order expressions are compile-time
/// constants; this guards the caller-supplied field maps.
pub fn is_valid_identifier(name: &str) -> bool {
    !name.is_empty()
        && name.len() <= 64
        && name
            .chars()
            .next()
            .map(|c| c.is_ascii_alphabetic() || c == '_')
            .unwrap_or(false)
        && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_collections_by_path() {
        assert_eq!(find("students").unwrap().table, "students");
        assert_eq!(find("fee-payments").unwrap().table, "fee_payments");
        assert!(find("fee_payments").is_none());
        assert!(find("users").is_none());
        assert!(find("settings").is_none());
    }

    #[test]
    fn validates_identifiers() {
        assert!(is_valid_identifier("first_name"));
        assert!(is_valid_identifier("_private"));
        assert!(!is_valid_identifier(""));
        assert!(!is_valid_identifier("1col"));
        assert!(!is_valid_identifier("name; DROP TABLE students"));
        assert!(!is_valid_identifier("na-me"));
    }

    #[test]
    fn every_search_column_is_a_valid_identifier() {
        for c in COLLECTIONS {
            assert!(is_valid_identifier(c.table), "bad table: {}", c.table);
            for col in c.search_columns {
                assert!(is_valid_identifier(col), "bad column: {}", col);
            }
        }
    }
}
