//! nc-utilities - helper functions for loosely-typed JSON records
//!
//! Stateless helpers used by the front end when working with datasets such as
//! spell lists:
//! - Collection search and transformation over records ([`collections`])
//! - String normalization and title casing ([`text`])
//! - D&D 5e ability modifier arithmetic ([`dnd5e`])
//!
//! Records are `serde_json` objects, so the helpers work on data exactly as it
//! arrives from JSON without a schema.
//!
//! # Result conventions
//!
//! - "Not found" or "not applicable" results are `None`.
//! - Inputs of the wrong JSON kind produce [`UtilityError`].

pub mod collections;
pub mod dnd5e;
pub mod error;
pub mod record;
pub mod text;

pub use collections::{
    array_unique, contains, count_item_in_array, get_array_from_object, get_object_by_name,
    get_objects_by_prop, remove_object, sort_objects_by_prop, KeyFormat, MatchMode, ObjectKeys,
};
pub use dnd5e::{get_ability_score_modifier, get_modifier, Modifier};
pub use error::UtilityError;
pub use record::{coerce_to_string, strict_eq, Record};
pub use text::{shrink, title_case, title_case_value, title_case_with, TitleCaseConfig};
