//! Response types for the Snuba admin endpoints.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Value of a single runtime config.
///
/// The backend stores every setting as either text or a number. Numbers keep
/// their JSON representation, so `1000` stays an integer and `0.5` a float.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConfigValue {
    Number(serde_json::Number),
    Text(String),
}

impl ConfigValue {
    /// Short type label shown next to the value.
    pub fn kind(&self) -> &'static str {
        match self {
            ConfigValue::Number(_) => "number",
            ConfigValue::Text(_) => "text",
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            ConfigValue::Text(s) => Some(s),
            ConfigValue::Number(_) => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            ConfigValue::Number(n) => n.as_i64(),
            ConfigValue::Text(_) => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            ConfigValue::Number(n) => n.as_f64(),
            ConfigValue::Text(_) => None,
        }
    }
}

impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigValue::Number(n) => write!(f, "{}", n),
            ConfigValue::Text(s) => write!(f, "{:?}", s),
        }
    }
}

impl From<&str> for ConfigValue {
    fn from(value: &str) -> Self {
        ConfigValue::Text(value.to_string())
    }
}

impl From<String> for ConfigValue {
    fn from(value: String) -> Self {
        ConfigValue::Text(value)
    }
}

impl From<i64> for ConfigValue {
    fn from(value: i64) -> Self {
        ConfigValue::Number(value.into())
    }
}

/// Response from `GET configs`: config key to value.
pub type ConfigMap = HashMap<String, ConfigValue>;

/// One runtime config row, as displayed by the runtime config panel.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigEntry {
    pub key: String,
    pub value: ConfigValue,
}

/// Flatten a config map into rows sorted by key.
pub fn sorted_entries(configs: &ConfigMap) -> Vec<ConfigEntry> {
    let mut entries: Vec<ConfigEntry> = configs
        .iter()
        .map(|(key, value)| ConfigEntry {
            key: key.clone(),
            value: value.clone(),
        })
        .collect();
    entries.sort_by(|a, b| a.key.cmp(&b.key));
    entries
}

/// A predefined diagnostic query from `GET clickhouse_queries`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemQuery {
    pub name: String,
    pub sql: String,
    /// `None` when the backend sends `null` or omits the field.
    #[serde(default)]
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_configs_scenario() {
        let configs: ConfigMap =
            serde_json::from_str(r#"{"max_rows": 1000, "cluster": "default"}"#).unwrap();

        assert_eq!(configs.len(), 2);
        assert_eq!(configs["max_rows"], ConfigValue::from(1000_i64));
        assert_eq!(configs["cluster"], ConfigValue::from("default"));
    }

    #[test]
    fn test_numeric_text_is_not_coerced() {
        let configs: ConfigMap = serde_json::from_str(r#"{"a": "42", "b": 42, "c": 0.25}"#).unwrap();

        assert_eq!(configs["a"].as_str(), Some("42"));
        assert_eq!(configs["b"].as_i64(), Some(42));
        assert_eq!(configs["c"].as_f64(), Some(0.25));
        assert_eq!(configs["c"].as_i64(), None);
    }

    #[test]
    fn test_non_scalar_config_values_rejected() {
        assert!(serde_json::from_str::<ConfigMap>(r#"{"flag": true}"#).is_err());
        assert!(serde_json::from_str::<ConfigMap>(r#"{"flag": null}"#).is_err());
        assert!(serde_json::from_str::<ConfigMap>(r#"{"flag": [1]}"#).is_err());
    }

    #[test]
    fn test_queries_scenario() {
        let queries: Vec<SystemQuery> = serde_json::from_str(
            r#"[{"name":"slow_queries","sql":"SELECT 1","description":null}]"#,
        )
        .unwrap();

        assert_eq!(
            queries,
            vec![SystemQuery {
                name: "slow_queries".to_string(),
                sql: "SELECT 1".to_string(),
                description: None,
            }]
        );
    }

    #[test]
    fn test_missing_description_is_none() {
        let query: SystemQuery =
            serde_json::from_str(r#"{"name":"parts","sql":"SELECT * FROM system.parts"}"#).unwrap();
        assert_eq!(query.description, None);
    }

    #[test]
    fn test_sorted_entries() {
        let configs: ConfigMap =
            serde_json::from_str(r#"{"zeta": 1, "alpha": "x", "mid": 2.5}"#).unwrap();
        let keys: Vec<String> = sorted_entries(&configs).into_iter().map(|e| e.key).collect();
        assert_eq!(keys, vec!["alpha", "mid", "zeta"]);
    }

    #[test]
    fn test_display() {
        assert_eq!(ConfigValue::from(7_i64).to_string(), "7");
        assert_eq!(ConfigValue::from("default").to_string(), "\"default\"");
    }

    fn config_value() -> impl Strategy<Value = serde_json::Value> {
        prop_oneof![
            any::<i64>().prop_map(serde_json::Value::from),
            "[a-z0-9 ]{0,12}".prop_map(serde_json::Value::from),
        ]
    }

    proptest! {
        #[test]
        fn prop_config_map_preserves_keys_and_kinds(
            input in proptest::collection::hash_map("[a-z_]{1,16}", config_value(), 0..24)
        ) {
            let body = serde_json::to_string(&input).unwrap();
            let parsed: ConfigMap = serde_json::from_str(&body).unwrap();

            prop_assert_eq!(parsed.len(), input.len());
            for (key, raw) in &input {
                let value = parsed.get(key).expect("key preserved");
                match raw {
                    serde_json::Value::String(s) => prop_assert_eq!(value.as_str(), Some(s.as_str())),
                    serde_json::Value::Number(n) => prop_assert_eq!(value.as_i64(), n.as_i64()),
                    _ => unreachable!(),
                }
            }
        }
    }
}
