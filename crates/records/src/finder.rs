//! Linear record search by identifier.
//!
//! The first record whose id equals the target wins. "Not found" is `None`,
//! never an error.

use datakit_core::{Identified, Record, Result, DEFAULT_ID_FIELD};
use serde_json::Value;
use tracing::{debug, trace};

/// Find the first record whose id equals `id`.
///
/// Returns a borrow into `records`, or `None` if nothing matches.
pub fn find_record<'a, R>(records: &'a [R], id: &R::Id) -> Option<&'a R>
where
    R: Identified,
{
    find_record_index(records, id).map(|idx| &records[idx])
}

/// Find the position of the first record whose id equals `id`.
pub fn find_record_index<R>(records: &[R], id: &R::Id) -> Option<usize>
where
    R: Identified,
{
    let found = records.iter().position(|record| record.id() == id);
    trace!(len = records.len(), index = ?found, "record scan");
    found
}

/// Record finder over dynamic [`Record`]s.
#[derive(Debug, Clone)]
pub struct RecordFinder {
    /// Name of the identifier field.
    id_field: String,
}

impl Default for RecordFinder {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordFinder {
    /// Create a finder keyed on [`DEFAULT_ID_FIELD`].
    pub fn new() -> Self {
        Self {
            id_field: DEFAULT_ID_FIELD.to_string(),
        }
    }

    /// Use a different identifier field.
    ///
    /// Any name is accepted, including `""`, which is a legal JSON key.
    pub fn with_id_field(mut self, id_field: impl Into<String>) -> Self {
        self.id_field = id_field.into();
        self
    }

    /// Get the identifier field name.
    pub fn id_field(&self) -> &str {
        &self.id_field
    }

    /// Find the first record whose identifier field equals `id`.
    ///
    /// Values compare with JSON equality: `1` matches `1` but not `"1"`
    /// or `1.0`. Integers and floats never compare equal.
    ///
    /// # Errors
    ///
    /// Returns `Error::MissingField` if a record without the identifier
    /// field is reached before a match.
    pub fn find<'a>(&self, records: &'a [Record], id: &Value) -> Result<Option<&'a Record>> {
        for (idx, record) in records.iter().enumerate() {
            let record_id = record.require(&self.id_field).map_err(|err| {
                debug!(index = idx, field = %self.id_field, "record missing id field");
                err
            })?;
            if record_id == id {
                trace!(index = idx, "record found");
                return Ok(Some(record));
            }
        }

        debug!(len = records.len(), %id, "record not found");
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use datakit_core::Error;
    use serde_json::json;

    #[derive(Debug, PartialEq)]
    struct User {
        id: u32,
        name: &'static str,
    }

    impl Identified for User {
        type Id = u32;

        fn id(&self) -> &u32 {
            &self.id
        }
    }

    #[derive(Debug)]
    struct Tag {
        id: String,
    }

    impl Identified for Tag {
        type Id = str;

        fn id(&self) -> &str {
            &self.id
        }
    }

    fn users() -> Vec<User> {
        vec![User { id: 1, name: "a" }, User { id: 2, name: "b" }]
    }

    fn record(id: Value, name: &str) -> Record {
        Record::new().with("id", id).with("name", name)
    }

    #[test]
    fn test_find_existing() {
        let users = users();
        let found = find_record(&users, &2).unwrap();
        assert_eq!(found, &User { id: 2, name: "b" });
    }

    #[test]
    fn test_returns_reference_into_input() {
        let users = users();
        let found = find_record(&users, &1).unwrap();
        assert!(std::ptr::eq(found, &users[0]));
    }

    #[test]
    fn test_not_found() {
        let users = vec![User { id: 1, name: "a" }];
        assert!(find_record(&users, &5).is_none());
        assert!(find_record_index(&users, &5).is_none());
    }

    #[test]
    fn test_empty_collection() {
        let users: Vec<User> = Vec::new();
        assert!(find_record(&users, &0).is_none());
    }

    #[test]
    fn test_first_duplicate_wins() {
        let users = vec![
            User { id: 3, name: "first" },
            User { id: 3, name: "second" },
        ];
        assert_eq!(find_record(&users, &3).unwrap().name, "first");
        assert_eq!(find_record_index(&users, &3), Some(0));
    }

    #[test]
    fn test_unsized_id() {
        let tags = vec![Tag { id: "x".to_string() }, Tag { id: "y".to_string() }];
        assert_eq!(find_record(&tags, "y").unwrap().id, "y");
        assert!(find_record(&tags, "z").is_none());
    }

    #[test]
    fn test_dynamic_find() {
        let records = vec![record(json!(1), "a"), record(json!(2), "b")];
        let finder = RecordFinder::default();

        let found = finder.find(&records, &json!(2)).unwrap().unwrap();
        assert_eq!(found, &record(json!(2), "b"));
        assert!(std::ptr::eq(found, &records[1]));

        assert!(finder.find(&records, &json!(5)).unwrap().is_none());
        assert!(finder.find(&[], &json!(1)).unwrap().is_none());
    }

    #[test]
    fn test_dynamic_json_equality() {
        let records = vec![record(json!(1), "a")];
        let finder = RecordFinder::default();
        assert!(finder.find(&records, &json!("1")).unwrap().is_none());
        assert!(finder.find(&records, &json!(1)).unwrap().is_some());
    }

    #[test]
    fn test_dynamic_integer_and_float_ids_distinct() {
        let finder = RecordFinder::new();

        let int_records = vec![record(json!(1), "int")];
        assert!(finder.find(&int_records, &json!(1.0)).unwrap().is_none());
        assert!(finder.find(&int_records, &json!(1)).unwrap().is_some());

        let float_records = vec![record(json!(1.0), "float")];
        assert!(finder.find(&float_records, &json!(1)).unwrap().is_none());
        let found = finder.find(&float_records, &json!(1.0)).unwrap().unwrap();
        assert!(std::ptr::eq(found, &float_records[0]));
    }

    #[test]
    fn test_dynamic_negative_and_unsigned_ids() {
        let records = vec![record(json!(-3), "neg"), record(json!(3u64), "pos")];
        let finder = RecordFinder::new();
        assert_eq!(finder.find(&records, &json!(3i32)).unwrap(), Some(&records[1]));
        assert_eq!(finder.find(&records, &json!(-3i64)).unwrap(), Some(&records[0]));
    }

    #[test]
    fn test_missing_id_before_match_fails() {
        let records = vec![Record::new().with("name", "anon"), record(json!(1), "a")];
        let err = RecordFinder::default().find(&records, &json!(1)).unwrap_err();
        assert!(matches!(err, Error::MissingField(_)));
    }

    #[test]
    fn test_missing_id_after_match_ignored() {
        let records = vec![record(json!(1), "a"), Record::new().with("name", "anon")];
        let found = RecordFinder::default().find(&records, &json!(1)).unwrap();
        assert!(found.is_some());
    }

    #[test]
    fn test_custom_id_field() {
        let finder = RecordFinder::new().with_id_field("user_id");
        assert_eq!(finder.id_field(), "user_id");

        let records = vec![
            Record::new().with("user_id", "u1").with("id", 9),
            Record::new().with("user_id", "u2"),
        ];
        let found = finder.find(&records, &json!("u2")).unwrap().unwrap();
        assert!(std::ptr::eq(found, &records[1]));
        assert!(finder.find(&records, &json!(9)).unwrap().is_none());
    }

    #[test]
    fn test_default_id_field() {
        assert_eq!(RecordFinder::default().id_field(), DEFAULT_ID_FIELD);
        assert_eq!(RecordFinder::new().id_field(), "id");
    }

    #[test]
    fn test_empty_id_field_is_a_key() {
        let finder = RecordFinder::new().with_id_field("");
        let records = vec![Record::new().with("", 4)];
        assert!(finder.find(&records, &json!(4)).unwrap().is_some());

        let err = finder.find(&[Record::new().with("id", 4)], &json!(4)).unwrap_err();
        assert!(matches!(err, Error::MissingField(_)));
    }
}
