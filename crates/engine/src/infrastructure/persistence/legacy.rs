//! Upgrade of character documents written by older versions.
//!
//! Older records stored equipment, weapons and jutsus as bare strings and
//! lacked several fields. Documents are upgraded here, once, as they leave
//! the store; nothing downstream ever sees the old shape.

use serde_json::{json, Map, Value};

const DEFAULT_PROFICIENCY_BONUS: i64 = 3;

/// Upgrade `doc` in place. Returns whether anything changed.
///
/// `fallback_timestamp` fills missing `created_at`/`updated_at`.
pub fn migrate_legacy_document(doc: &mut Value, fallback_timestamp: &str) -> bool {
    let Some(obj) = doc.as_object_mut() else {
        return false;
    };
    let mut changed = false;

    for key in ["equipment", "weapons"] {
        changed |= upgrade_list(obj, key, |name| json!({ "name": name, "quantity": 1 }));
    }
    changed |= upgrade_list(obj, "jutsus", |name| json!({ "name": name, "details": "" }));
    changed |= clamp_quantities(obj, "equipment");
    changed |= clamp_quantities(obj, "weapons");

    let hp = obj.get("hp").cloned().unwrap_or(json!(0));
    let chakra = obj.get("chakra").cloned().unwrap_or(json!(0));
    changed |= fill(obj, "max_hp", hp);
    changed |= fill(obj, "max_chakra", chakra);
    changed |= fill(obj, "extra_notes", json!(""));
    changed |= fill(obj, "notes", json!([]));
    changed |= fill(obj, "proficiencies", json!([]));
    changed |= fill(obj, "condition", json!("Normal"));
    changed |= fill(obj, "proficiency_bonus", json!(DEFAULT_PROFICIENCY_BONUS));
    changed |= fill(obj, "created_at", json!(fallback_timestamp));
    changed |= fill(obj, "updated_at", json!(fallback_timestamp));

    let character_name = obj.get("name").cloned().unwrap_or(json!(""));
    changed |= fill(obj, "description", json!({}));
    if let Some(description) = obj.get_mut("description").and_then(Value::as_object_mut) {
        changed |= fill(description, "name", character_name);
        changed |= fill(description, "age", Value::Null);
        changed |= fill(description, "rank", json!(""));
        changed |= fill(description, "title", json!(""));
    }

    changed
}

fn fill(obj: &mut Map<String, Value>, key: &str, value: Value) -> bool {
    if obj.contains_key(key) {
        return false;
    }
    obj.insert(key.to_string(), value);
    true
}

fn upgrade_list(
    obj: &mut Map<String, Value>,
    key: &str,
    upgrade: impl Fn(&str) -> Value,
) -> bool {
    let Some(items) = obj.get_mut(key).and_then(Value::as_array_mut) else {
        return false;
    };
    let mut changed = false;
    for item in items.iter_mut() {
        if let Some(name) = item.as_str() {
            *item = upgrade(name);
            changed = true;
        }
    }
    changed
}

fn clamp_quantities(obj: &mut Map<String, Value>, key: &str) -> bool {
    let Some(items) = obj.get_mut(key).and_then(Value::as_array_mut) else {
        return false;
    };
    let mut changed = false;
    for item in items.iter_mut().filter_map(Value::as_object_mut) {
        let valid = item
            .get("quantity")
            .and_then(Value::as_i64)
            .is_some_and(|q| q >= 1);
        if !valid {
            item.insert("quantity".to_string(), json!(1));
            changed = true;
        }
    }
    changed
}

#[cfg(test)]
mod tests {
    use super::*;

    const TS: &str = "2024-01-01T00:00:00+00:00";

    #[test]
    fn when_items_are_strings_then_they_become_objects() {
        let mut doc = json!({
            "equipment": ["Kunai", {"name": "Shuriken", "quantity": 10}],
            "weapons": ["Tanto"],
            "jutsus": ["Rasengan"],
        });

        assert!(migrate_legacy_document(&mut doc, TS));
        assert_eq!(doc["equipment"][0], json!({"name": "Kunai", "quantity": 1}));
        assert_eq!(doc["equipment"][1]["quantity"], 10);
        assert_eq!(doc["weapons"][0]["name"], "Tanto");
        assert_eq!(doc["jutsus"][0], json!({"name": "Rasengan", "details": ""}));
    }

    #[test]
    fn when_fields_are_missing_then_defaults_are_filled() {
        let mut doc = json!({"name": "Rock Lee", "hp": 14, "chakra": 4, "description": {}});

        assert!(migrate_legacy_document(&mut doc, TS));
        assert_eq!(doc["max_hp"], 14);
        assert_eq!(doc["max_chakra"], 4);
        assert_eq!(doc["condition"], "Normal");
        assert_eq!(doc["notes"], json!([]));
        assert_eq!(doc["proficiencies"], json!([]));
        assert_eq!(doc["extra_notes"], "");
        assert_eq!(doc["description"]["age"], Value::Null);
        assert_eq!(doc["description"]["rank"], "");
        assert_eq!(doc["description"]["name"], "Rock Lee");
        assert_eq!(doc["created_at"], TS);
    }

    #[test]
    fn when_quantity_is_not_positive_then_it_is_reset_to_one() {
        let mut doc = json!({"equipment": [{"name": "Kunai", "quantity": 0}]});
        assert!(migrate_legacy_document(&mut doc, TS));
        assert_eq!(doc["equipment"][0]["quantity"], 1);
    }

    #[test]
    fn when_document_is_current_then_nothing_changes() {
        let mut doc = json!({
            "name": "Neji",
            "equipment": [{"name": "Kunai", "quantity": 2}],
            "weapons": [],
            "jutsus": [{"name": "Kaiten", "details": "Spin"}],
            "hp": 10, "max_hp": 10, "chakra": 8, "max_chakra": 8,
            "extra_notes": "", "notes": [], "proficiencies": [],
            "condition": "Normal", "proficiency_bonus": 3,
            "created_at": TS, "updated_at": TS,
            "description": {"name": "Neji", "age": 13, "rank": "Genin", "title": ""}
        });
        let before = doc.clone();

        assert!(!migrate_legacy_document(&mut doc, TS));
        assert_eq!(doc, before);
    }
}
