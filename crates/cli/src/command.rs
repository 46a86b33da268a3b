//! Command parsing and execution.

use std::path::{Path, PathBuf};

use anyhow::Context;
use nc_utilities::{
    array_unique, contains, count_item_in_array, get_ability_score_modifier,
    get_array_from_object, get_modifier, get_object_by_name, get_objects_by_prop, remove_object,
    shrink, sort_objects_by_prop, title_case_with, KeyFormat, MatchMode, ObjectKeys,
};
use serde_json::{json, Value};

use crate::config::CliConfig;

pub const USAGE: &str = "\
Usage: nc-utils [--data <path>] <command> [args]

Commands:
  find <name>                      first record with the given name
  search <prop> <value> [--partial] records whose prop matches value
  sort <prop>                      records sorted by prop
  unique                           distinct values of the dataset array
  count <item>                     occurrences of item in the dataset array
  contains <item>                  whether the dataset contains item
  keys <key> [--join]              keys of the record under key
  remove <key> <value>             dataset without matching key/value records
  title <text>                     Title Case a string
  shrink <text>                    strip whitespace and lowercase
  modifier <score>                 D&D ability modifier for a score";

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Find { name: String },
    Search { prop: String, value: Value, mode: MatchMode },
    Sort { prop: String },
    Unique,
    Count { item: Value },
    Contains { item: Value },
    Keys { key: String, format: KeyFormat },
    Remove { key: Value, value: Value },
    Title { text: String },
    Shrink { text: String },
    Modifier { score: i32 },
    Help,
}

impl Command {
    fn needs_dataset(&self) -> bool {
        !matches!(
            self,
            Self::Title { .. } | Self::Shrink { .. } | Self::Modifier { .. } | Self::Help
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Invocation {
    pub command: Command,
    pub data_path: Option<PathBuf>,
}

/// Parses command-line arguments (without the program name).
pub fn parse_args<I>(args: I) -> anyhow::Result<Invocation>
where
    I: IntoIterator<Item = String>,
{
    let mut data_path = None;
    let mut partial = false;
    let mut help = false;
    let mut join = false;
    let mut positional = Vec::new();

    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--data" => {
                let path = args.next().context("--data requires a path")?;
                data_path = Some(PathBuf::from(path));
            }
            "--partial" => partial = true,
            "--join" => join = true,
            "-h" | "--help" => help = true,
            _ => positional.push(arg),
        }
    }

    if help {
        return Ok(Invocation {
            command: Command::Help,
            data_path,
        });
    }

    let mut positional = positional.into_iter();
    let Some(name) = positional.next() else {
        anyhow::bail!("{USAGE}");
    };
    let mut arg = |what: &str| {
        positional
            .next()
            .with_context(|| format!("`{name}` requires <{what}>\n\n{USAGE}"))
    };

    let command = match name.as_str() {
        "find" => Command::Find { name: arg("name")? },
        "search" => Command::Search {
            prop: arg("prop")?,
            value: parse_item(&arg("value")?),
            mode: MatchMode::from(partial),
        },
        "sort" => Command::Sort { prop: arg("prop")? },
        "unique" => Command::Unique,
        "count" => Command::Count {
            item: parse_item(&arg("item")?),
        },
        "contains" => Command::Contains {
            item: parse_item(&arg("item")?),
        },
        "keys" => Command::Keys {
            key: arg("key")?,
            format: if join {
                KeyFormat::Joined
            } else {
                KeyFormat::List
            },
        },
        "remove" => Command::Remove {
            key: parse_item(&arg("key")?),
            value: parse_item(&arg("value")?),
        },
        "title" => Command::Title { text: arg("text")? },
        "shrink" => Command::Shrink { text: arg("text")? },
        "modifier" => {
            let raw = arg("score")?;
            let score = raw
                .trim()
                .parse()
                .with_context(|| format!("invalid ability score: {raw}"))?;
            Command::Modifier { score }
        }
        other => anyhow::bail!("Unknown command: {other}\n\n{USAGE}"),
    };

    Ok(Invocation { command, data_path })
}

/// Interprets an argument as JSON when it parses, otherwise as a plain string.
pub fn parse_item(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}

/// Runs a parsed invocation and returns its JSON output.
pub fn execute(invocation: Invocation, config: &CliConfig) -> anyhow::Result<Value> {
    let Invocation { command, data_path } = invocation;
    tracing::debug!(?command, "Executing command");

    let dataset = if command.needs_dataset() {
        let path = data_path
            .or_else(|| config.data_path.clone())
            .context("no dataset given; pass --data <path> or set NC_UTILITIES_DATA_PATH")?;
        load_dataset(&path)?
    } else {
        Value::Null
    };

    let output = match command {
        Command::Find { name } => {
            let records = dataset_array(&dataset)?;
            match get_object_by_name(records, &name) {
                Some(record) => Value::Object(record.clone()),
                None => Value::Bool(false),
            }
        }
        Command::Search { prop, value, mode } => {
            let records = dataset_array(&dataset)?;
            match get_objects_by_prop(records, &prop, &value, mode) {
                Some(found) => found.into_iter().cloned().map(Value::Object).collect(),
                None => Value::Bool(false),
            }
        }
        Command::Sort { prop } => sort_objects_by_prop(&dataset, &prop)?
            .into_iter()
            .cloned()
            .collect(),
        Command::Unique => array_unique(&dataset)?.into_iter().cloned().collect(),
        Command::Count { item } => json!(count_item_in_array(&dataset, &item)?),
        Command::Contains { item } => contains(&dataset, &item).map_or(Value::Null, Value::Bool),
        Command::Keys { key, format } => {
            let record = dataset
                .as_object()
                .context("`keys` needs the dataset to be a JSON object")?;
            match get_array_from_object(record, &key, format) {
                ObjectKeys::List(keys) => json!(keys),
                ObjectKeys::Joined(joined) => Value::String(joined),
            }
        }
        Command::Remove { key, value } => {
            let Value::Array(mut records) = dataset else {
                anyhow::bail!("`remove` needs the dataset to be a JSON array");
            };
            let before = records.len();
            remove_object(&mut records, &json!({ "key": key, "value": value }));
            tracing::info!(removed = before - records.len(), "Removed matching records");
            Value::Array(records)
        }
        Command::Title { text } => Value::String(title_case_with(&text, &config.title_case)),
        Command::Shrink { text } => Value::String(shrink(&text)),
        Command::Modifier { score } => json!({
            "score": score,
            "modifier": get_ability_score_modifier(score),
            "display": get_modifier(score),
        }),
        Command::Help => Value::String(USAGE.to_string()),
    };

    Ok(output)
}

fn load_dataset(path: &Path) -> anyhow::Result<Value> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading dataset {}", path.display()))?;
    let dataset: Value = serde_json::from_str(&raw)
        .with_context(|| format!("parsing dataset {}", path.display()))?;
    tracing::info!(path = %path.display(), "Loaded dataset");
    Ok(dataset)
}

fn dataset_array(dataset: &Value) -> anyhow::Result<&[Value]> {
    dataset
        .as_array()
        .map(Vec::as_slice)
        .context("dataset must be a JSON array")
}
