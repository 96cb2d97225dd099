//! Codecs for quirky wire encodings, kept in one place so the rest of the app
//! only ever sees ordinary Rust types.

/// Serde adapter for list fields the backend historically stored as a
/// JSON-encoded string (`"[\"Rust\", \"React\"]"`) rather than a real array.
/// Deserialization accepts both encodings plus `null`/missing; serialization
/// always emits a real array. Use with `#[serde(with = "wire::string_list", default)]`.
pub mod string_list {
    use serde::ser::SerializeSeq;
    use serde::{Deserialize, Deserializer, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Encoded {
        List(Vec<String>),
        JsonString(String),
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<Encoded>::deserialize(deserializer)? {
            None => Ok(Vec::new()),
            Some(Encoded::List(list)) => Ok(list),
            Some(Encoded::JsonString(raw)) => {
                if raw.trim().is_empty() {
                    return Ok(Vec::new());
                }
                serde_json::from_str(&raw).map_err(serde::de::Error::custom)
            }
        }
    }

    pub fn serialize<S>(list: &[String], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(list.len()))?;
        for item in list {
            seq.serialize_element(item)?;
        }
        seq.end()
    }
}

#[cfg(test)]
mod tests {
    use serde::{Deserialize, Serialize};

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Tagged {
        #[serde(with = "super::string_list", default)]
        tags: Vec<String>,
    }

    #[test]
    fn decodes_real_array() {
        let tagged: Tagged = serde_json::from_str(r#"{"tags": ["rust", "wasm"]}"#).unwrap();
        assert_eq!(tagged.tags, vec!["rust", "wasm"]);
    }

    #[test]
    fn decodes_json_encoded_string() {
        let tagged: Tagged = serde_json::from_str(r#"{"tags": "[\"rust\", \"wasm\"]"}"#).unwrap();
        assert_eq!(tagged.tags, vec!["rust", "wasm"]);
    }

    #[test]
    fn missing_null_and_empty_all_decode_to_empty() {
        for raw in [r#"{}"#, r#"{"tags": null}"#, r#"{"tags": ""}"#] {
            let tagged: Tagged = serde_json::from_str(raw).unwrap();
            assert!(tagged.tags.is_empty(), "failed for {raw}");
        }
    }

    #[test]
    fn always_serializes_as_array() {
        let tagged = Tagged {
            tags: vec!["rust".to_string()],
        };
        assert_eq!(
            serde_json::to_string(&tagged).unwrap(),
            r#"{"tags":["rust"]}"#
        );
    }

    #[test]
    fn malformed_encoded_string_is_an_error() {
        assert!(serde_json::from_str::<Tagged>(r#"{"tags": "not json"}"#).is_err());
    }
}
