//! Loading [`MasonryOptions`] from JSON.
//!
//! Breakpoint tables accept two shapes:
//!
//! ```text
//! "breakAt": { "940": 3, "520": 2 }     object keyed by threshold
//! "breakAt": [[520, 2], [940, 3]]       explicit ordered pairs
//! ```
//!
//! Objects are ordered the way script engines enumerate own properties:
//! integer-like keys ascending, then every other key in document order.
//! Pair arrays keep their order as written.

use core::fmt;
use core::marker::PhantomData;
use std::fs;
use std::path::Path;

use anyhow::{Context as _, Result as ConfigResult};
use log::debug;
use serde::de::{self, Deserialize, Deserializer, MapAccess, SeqAccess, Visitor};

use crate::error::MasonryError;
use crate::types::{Breakpoints, MasonryOptions};

impl MasonryOptions {
    /// Parse options from a JSON document. Missing fields take their defaults.
    ///
    /// # Errors
    /// Returns [`MasonryError::Config`] when the document is malformed.
    pub fn from_json_str(source: &str) -> Result<Self, MasonryError> {
        let options: Self = serde_json::from_str(source)?;
        debug!(
            "[MASONRY] options parsed: columns={} break_at={} margin_breakpoints={}",
            options.columns,
            options.break_at.len(),
            options.margin_breakpoints.len()
        );
        Ok(options)
    }
}

/// Read and parse an options file.
///
/// # Errors
/// Returns an error if the file cannot be read or does not parse.
pub fn load_options(path: impl AsRef<Path>) -> ConfigResult<MasonryOptions> {
    let path = path.as_ref();
    let source = fs::read_to_string(path)
        .with_context(|| format!("failed to read masonry options from {}", path.display()))?;
    MasonryOptions::from_json_str(&source)
        .with_context(|| format!("failed to parse masonry options in {}", path.display()))
}

/// Canonical array index of a property key, if it is one.
fn array_index(key: &str) -> Option<u32> {
    let index: u32 = key.parse().ok()?;
    (index != u32::MAX && index.to_string() == key).then_some(index)
}

/// Numeric threshold of a property key. Spelled-out `inf`/`nan` words and
/// other non-finite values are rejected along with non-numeric keys.
fn parse_threshold<E: de::Error>(key: &str) -> Result<f64, E> {
    key.trim()
        .parse::<f64>()
        .ok()
        .filter(|threshold| threshold.is_finite())
        .ok_or_else(|| E::custom(format!("breakpoint key `{key}` is not a finite number")))
}

struct BreakpointsVisitor<T>(PhantomData<T>);

impl<'de, T: Deserialize<'de>> Visitor<'de> for BreakpointsVisitor<T> {
    type Value = Breakpoints<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("an object keyed by threshold or an array of [threshold, value] pairs")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let mut entries: Vec<(String, f64, T)> = Vec::new();

        while let Some((key, value)) = map.next_entry::<String, T>()? {
            let threshold = parse_threshold(&key)?;
            // A repeated key keeps its first position and takes the last value.
            if let Some(entry) = entries.iter_mut().find(|(existing, _, _)| *existing == key) {
                entry.2 = value;
            } else {
                entries.push((key, threshold, value));
            }
        }

        // Stable sort: integer-like keys ascending, everything else stays put.
        entries.sort_by_key(|(key, _, _)| array_index(key).map_or((1, 0), |index| (0, index)));

        Ok(entries
            .into_iter()
            .map(|(_, threshold, value)| (threshold, value))
            .collect())
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(Breakpoints::new())
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(Breakpoints::new())
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut table = Breakpoints::new();
        while let Some((threshold, value)) = seq.next_element::<(f64, T)>()? {
            table.push(threshold, value);
        }
        Ok(table)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Breakpoints<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(BreakpointsVisitor(PhantomData))
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp, reason = "parsed values are exact")]
mod tests {
    use super::*;
    use crate::types::{Breakpoint, BreakpointPolicy};

    fn pairs<T: Copy>(table: &Breakpoints<T>) -> Vec<(f64, T)> {
        table
            .iter()
            .map(|Breakpoint { threshold, value }| (*threshold, *value))
            .collect()
    }

    #[test]
    fn array_index_is_canonical() {
        assert_eq!(array_index("940"), Some(940));
        assert_eq!(array_index("0"), Some(0));
        assert_eq!(array_index("0940"), None);
        assert_eq!(array_index("940.5"), None);
        assert_eq!(array_index("-1"), None);
        assert_eq!(array_index("4294967295"), None);
    }

    #[test]
    fn empty_document_uses_defaults() {
        let options = MasonryOptions::from_json_str("{}").ok();
        assert_eq!(options, Some(MasonryOptions::default()));
    }

    #[test]
    fn object_keys_enumerate_integers_first() {
        let source = r#"{
            "columns": 5,
            "breakAt": { "1200": 4, "760.5": 2, "940": 3, "520": 1 },
            "margin": 24,
            "marginBreakpoints": { "520": 8 }
        }"#;
        let Ok(options) = MasonryOptions::from_json_str(source) else {
            panic!("options should parse");
        };
        assert_eq!(options.columns, 5);
        assert_eq!(options.margin, 24.0);
        assert_eq!(
            pairs(&options.break_at),
            vec![(520.0, 1), (940.0, 3), (1200.0, 4), (760.5, 2)]
        );
        assert_eq!(pairs(&options.margin_breakpoints), vec![(520.0, 8.0)]);
        assert_eq!(options.policy, BreakpointPolicy::Legacy);
    }

    #[test]
    fn pair_arrays_keep_their_order() {
        let source = r#"{ "breakAt": [[940, 3], [520, 2]], "policy": "strict" }"#;
        let Ok(options) = MasonryOptions::from_json_str(source) else {
            panic!("options should parse");
        };
        assert_eq!(pairs(&options.break_at), vec![(940.0, 3), (520.0, 2)]);
        assert_eq!(options.policy, BreakpointPolicy::Strict);
    }

    #[test]
    fn duplicate_keys_keep_last_value() {
        let source = r#"{ "breakAt": { "1e3": 4, "600": 2, "800.5": 1, "600": 3, "1e3": 5 } }"#;
        let Ok(options) = MasonryOptions::from_json_str(source) else {
            panic!("options should parse");
        };
        assert_eq!(
            pairs(&options.break_at),
            vec![(600.0, 3), (1000.0, 5), (800.5, 1)]
        );
    }

    #[test]
    fn non_numeric_keys_are_rejected() {
        let result = MasonryOptions::from_json_str(r#"{ "breakAt": { "wide": 3 } }"#);
        assert!(matches!(result, Err(MasonryError::Config(message)) if message.contains("wide")));
    }

    #[test]
    fn non_finite_keys_are_rejected() {
        for key in ["inf", "Infinity", "-INF", "nan", "NaN", "1e400"] {
            let source = format!(r#"{{ "breakAt": {{ "{key}": 2 }} }}"#);
            let result = MasonryOptions::from_json_str(&source);
            assert!(
                matches!(&result, Err(MasonryError::Config(message)) if message.contains(key)),
                "key {key} parsed as {result:?}"
            );
        }
    }

    #[test]
    fn null_tables_fall_back_to_empty() {
        let source = r#"{ "columns": 3, "breakAt": null, "marginBreakpoints": null }"#;
        let Ok(options) = MasonryOptions::from_json_str(source) else {
            panic!("options should parse");
        };
        assert_eq!(options.columns, 3);
        assert!(options.break_at.is_empty());
        assert!(options.margin_breakpoints.is_empty());
    }

    #[test]
    fn wrong_value_types_are_rejected() {
        let result = MasonryOptions::from_json_str(r#"{ "columns": "four" }"#);
        assert!(matches!(result, Err(MasonryError::Config(_))));
    }
}
