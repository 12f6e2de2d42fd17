//! Forward migration of saved records.
//!
//! Saves carry no version number. Fields added after the first release are
//! listed in [`BACKFILLS`] and filled with their defaults when a save lacks
//! them (or holds `null`); every other field is left as stored.

use log::debug;
use serde_json::Value;

use crate::error::{SheetError, SheetResult};
use crate::model::GameState;

#[derive(Debug, Clone, Copy)]
struct Backfill {
    field: &'static str,
    default: fn() -> Value,
}

const BACKFILLS: &[Backfill] = &[
    Backfill {
        field: "spellsList",
        default: empty_list,
    },
    Backfill {
        field: "notes",
        default: empty_text,
    },
    Backfill {
        field: "currentParagraph",
        default: empty_text,
    },
];

fn empty_list() -> Value {
    Value::Array(Vec::new())
}

fn empty_text() -> Value {
    Value::String(String::new())
}

/// Turn a raw stored value into a current record.
///
/// # Errors
/// Returns [`SheetError::CorruptSave`] when the value is not a record even
/// after backfilling.
pub fn migrate(mut raw: Value) -> SheetResult<GameState> {
    if let Some(obj) = raw.as_object_mut() {
        for backfill in BACKFILLS {
            let missing = obj.get(backfill.field).is_none_or(Value::is_null);
            if missing {
                debug!(
                    "event=migrate module=migrate status=backfill field={}",
                    backfill.field
                );
                obj.insert(backfill.field.to_string(), (backfill.default)());
            }
        }
    }
    serde_json::from_value(raw).map_err(SheetError::CorruptSave)
}

/// Parse a stored payload and migrate it.
///
/// # Errors
/// Returns [`SheetError::CorruptSave`] for malformed JSON or a payload that
/// is not a record.
pub fn decode(payload: &str) -> SheetResult<GameState> {
    let raw: Value = serde_json::from_str(payload).map_err(SheetError::CorruptSave)?;
    migrate(raw)
}

/// Serialize a record for storage.
///
/// # Errors
/// Returns [`SheetError::Encode`] if serialization fails.
pub fn encode(state: &GameState) -> SheetResult<String> {
    serde_json::to_string(state).map_err(SheetError::Encode)
}
