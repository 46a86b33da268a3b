//! Search and transformation helpers for collections of records.
//!
//! Lookups borrow the collection and return references into it, so the
//! caller's collection keeps its length and order. [`remove_object`] is the
//! only helper that mutates its argument.

use std::cmp::Ordering;

use serde_json::Value;

use crate::error::UtilityError;
use crate::record::{coerce_to_string, strict_eq, Record};
use crate::text::shrink;

/// How [`get_objects_by_prop`] compares a property against the target value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchMode {
    /// The property must equal the target exactly
    #[default]
    Exact,
    /// Exact matches, plus string properties whose whitespace-stripped,
    /// lowercased form contains the normalized target
    Partial,
}

impl From<bool> for MatchMode {
    fn from(use_partial_match: bool) -> Self {
        if use_partial_match {
            Self::Partial
        } else {
            Self::Exact
        }
    }
}

/// How [`get_array_from_object`] returns the keys it collects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyFormat {
    #[default]
    List,
    /// Keys joined with `", "`
    Joined,
}

/// Keys collected by [`get_array_from_object`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ObjectKeys {
    List(Vec<String>),
    Joined(String),
}

/// Returns the first record whose `name` property equals `name`.
///
/// Elements that are not records, or that have no `name`, are skipped.
///
/// # Examples
///
/// ```
/// use nc_utilities::get_object_by_name;
/// use serde_json::json;
///
/// let spells = vec![
///     json!({"name": "Aid", "page": "phb 211"}),
///     json!({"page": "unknown"}),
///     json!({"name": "Alarm", "page": "phb 211"}),
/// ];
/// let alarm = get_object_by_name(&spells, "Alarm").unwrap();
/// assert_eq!(alarm["page"], "phb 211");
/// assert!(get_object_by_name(&spells, "alarm").is_none());
/// ```
pub fn get_object_by_name<'a>(collection: &'a [Value], name: &str) -> Option<&'a Record> {
    let found = collection
        .iter()
        .filter_map(Value::as_object)
        .find(|record| record.get("name").and_then(Value::as_str) == Some(name));
    tracing::trace!(lookup = name, found = found.is_some(), "get_object_by_name");
    found
}

/// Returns every record whose `prop` matches `value`, in collection order.
///
/// Returns `None` when nothing matches, which callers can tell apart from a
/// non-empty result without checking its length.
pub fn get_objects_by_prop<'a>(
    collection: &'a [Value],
    prop: &str,
    value: &Value,
    mode: MatchMode,
) -> Option<Vec<&'a Record>> {
    let needle = match (mode, value) {
        (MatchMode::Partial, Value::String(target)) => Some(shrink(target)),
        _ => None,
    };

    let matches: Vec<&Record> = collection
        .iter()
        .filter_map(Value::as_object)
        .filter(|record| {
            record.get(prop).is_some_and(|candidate| {
                strict_eq(candidate, value) || is_partial_match(candidate, needle.as_deref())
            })
        })
        .collect();

    tracing::trace!(prop, ?mode, matches = matches.len(), "get_objects_by_prop");
    if matches.is_empty() {
        None
    } else {
        Some(matches)
    }
}

fn is_partial_match(candidate: &Value, needle: Option<&str>) -> bool {
    match (candidate, needle) {
        (Value::String(haystack), Some(needle)) => shrink(haystack).contains(needle),
        _ => false,
    }
}

/// Counts how many times `item` appears in the collection.
///
/// The collection is not reordered. Fails when `collection` is not an array.
///
/// # Examples
///
/// ```
/// use nc_utilities::count_item_in_array;
/// use serde_json::json;
///
/// assert_eq!(count_item_in_array(&json!([1, 1, 2, 2, 2, 3]), &json!(2)), Ok(3));
/// assert!(count_item_in_array(&json!("not an array"), &json!("x")).is_err());
/// ```
pub fn count_item_in_array(collection: &Value, item: &Value) -> Result<usize, UtilityError> {
    let items = as_collection(collection, "count_item_in_array")?;
    Ok(items.iter().filter(|candidate| strict_eq(candidate, item)).count())
}

/// Returns each distinct value once, in order of first occurrence.
///
/// Fails when `collection` is not an array.
pub fn array_unique(collection: &Value) -> Result<Vec<&Value>, UtilityError> {
    let items = as_collection(collection, "array_unique")?;
    let mut unique: Vec<&Value> = Vec::with_capacity(items.len());
    for item in items {
        if !unique.iter().any(|seen| strict_eq(seen, item)) {
            unique.push(item);
        }
    }
    Ok(unique)
}

/// Returns the collection's elements sorted ascending by `prop`.
///
/// Property values are compared as strings (see
/// [`coerce_to_string`](crate::record::coerce_to_string)), so `10` sorts
/// before `9`. The sort is stable, so records sharing a value keep their
/// order. Elements without `prop` go last.
///
/// Fails when `collection` is not an array.
///
/// # Examples
///
/// ```
/// use nc_utilities::sort_objects_by_prop;
/// use serde_json::json;
///
/// let spells = json!([
///     {"name": "Alarm"},
///     {"name": "Aid"},
///     {"page": "ee 15"},
/// ]);
/// let sorted = sort_objects_by_prop(&spells, "name").unwrap();
/// assert_eq!(sorted[0]["name"], "Aid");
/// assert_eq!(sorted[1]["name"], "Alarm");
/// assert_eq!(sorted[2]["page"], "ee 15");
/// ```
pub fn sort_objects_by_prop<'a>(
    collection: &'a Value,
    prop: &str,
) -> Result<Vec<&'a Value>, UtilityError> {
    let items = as_collection(collection, "sort_objects_by_prop")?;
    let mut keyed: Vec<(Option<String>, &Value)> = items
        .iter()
        .map(|item| (item.get(prop).map(coerce_to_string), item))
        .collect();

    keyed.sort_by(|(a, _), (b, _)| match (a, b) {
        (Some(a), Some(b)) => a.cmp(b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });

    Ok(keyed.into_iter().map(|(_, item)| item).collect())
}

/// Removes every record whose `key` and `value` properties equal those of
/// `target`, and returns the same collection.
///
/// A property missing from both the record and `target` counts as equal.
/// Elements that are not records are kept.
///
/// # Examples
///
/// ```
/// use nc_utilities::remove_object;
/// use serde_json::json;
///
/// let mut filters = vec![
///     json!({"key": "school", "value": "Evocation"}),
///     json!({"key": "level", "value": 1}),
///     json!({"key": "school", "value": "Evocation"}),
/// ];
/// remove_object(&mut filters, &json!({"key": "school", "value": "Evocation"}));
/// assert_eq!(filters, vec![json!({"key": "level", "value": 1})]);
/// ```
pub fn remove_object<'a>(collection: &'a mut Vec<Value>, target: &Value) -> &'a mut Vec<Value> {
    let before = collection.len();
    collection.retain(|item| {
        !(item.is_object()
            && same_field(item, target, "key")
            && same_field(item, target, "value"))
    });
    tracing::trace!(removed = before - collection.len(), "remove_object");
    collection
}

fn same_field(item: &Value, target: &Value, field: &str) -> bool {
    match (item.get(field), target.get(field)) {
        (Some(a), Some(b)) => strict_eq(a, b),
        (None, None) => true,
        _ => false,
    }
}

/// Checks whether a string or array contains `value`.
///
/// Strings are searched for the string form of `value`; arrays are searched
/// for an equal element. Returns `None` for any other container.
///
/// # Examples
///
/// ```
/// use nc_utilities::contains;
/// use serde_json::json;
///
/// assert_eq!(contains(&json!("phb 212"), &json!("212")), Some(true));
/// assert_eq!(contains(&json!(["Wizard", "Druid"]), &json!("Bard")), Some(false));
/// assert_eq!(contains(&json!({"name": "Aid"}), &json!("Aid")), None);
/// ```
pub fn contains(container: &Value, value: &Value) -> Option<bool> {
    match container {
        Value::String(haystack) => Some(haystack.contains(coerce_to_string(value).as_str())),
        Value::Array(items) => Some(items.iter().any(|item| strict_eq(item, value))),
        _ => None,
    }
}

/// Collects the keys of the record stored under `data[key]`.
///
/// Arrays yield their indices. A missing or scalar property yields no keys.
///
/// # Examples
///
/// ```
/// use nc_utilities::{get_array_from_object, KeyFormat, ObjectKeys};
/// use serde_json::json;
///
/// let spell = json!({"name": "Aid", "classes": {"Cleric": {}, "Paladin": {}}});
/// let record = spell.as_object().unwrap();
///
/// assert_eq!(
///     get_array_from_object(record, "classes", KeyFormat::Joined),
///     ObjectKeys::Joined("Cleric, Paladin".to_string())
/// );
/// ```
pub fn get_array_from_object(data: &Record, key: &str, format: KeyFormat) -> ObjectKeys {
    let keys: Vec<String> = match data.get(key) {
        Some(Value::Object(nested)) => nested.keys().cloned().collect(),
        Some(Value::Array(items)) => (0..items.len()).map(|i| i.to_string()).collect(),
        _ => Vec::new(),
    };

    match format {
        KeyFormat::List => ObjectKeys::List(keys),
        KeyFormat::Joined => ObjectKeys::Joined(keys.join(", ")),
    }
}

fn as_collection<'a>(collection: &'a Value, operation: &str) -> Result<&'a [Value], UtilityError> {
    match collection {
        Value::Array(items) => Ok(items.as_slice()),
        other => {
            tracing::debug!(operation, found = ?other, "rejected non-array collection");
            Err(UtilityError::not_a_collection(other))
        }
    }
}
