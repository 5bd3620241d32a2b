//! Off-chain token metadata documents.
//!
//! Wallets resolve the on-chain `uri` to one of these JSON documents; field
//! names follow the token-metadata URI schema (`trait_type`, `type`).

use serde::{Deserialize, Serialize};

/// Off-chain metadata document referenced by a metadata account's `uri`.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct OffChainMetadata {
    pub name: String,
    pub symbol: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attributes: Vec<Attribute>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<Properties>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub creators: Vec<JsonCreator>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    pub trait_type: String,
    pub value: String,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Properties {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub files: Vec<FileSpec>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub creators: Vec<JsonCreator>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileSpec {
    pub uri: String,
    #[serde(rename = "type")]
    pub content_type: String,
}

/// Creator entry of the JSON document; `address` is base58 text.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsonCreator {
    pub address: String,
    pub share: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> OffChainMetadata {
        OffChainMetadata {
            name: "Generug".to_string(),
            symbol: "RUG".to_string(),
            description: Some("description".to_string()),
            image: Some("https://gateway.irys.xyz/abc".to_string()),
            attributes: vec![Attribute {
                trait_type: "background".to_string(),
                value: "teal".to_string(),
            }],
            properties: Some(Properties {
                files: vec![FileSpec {
                    uri: "https://gateway.irys.xyz/abc".to_string(),
                    content_type: "image/png".to_string(),
                }],
                creators: vec![JsonCreator {
                    address: "6gV5iGu3NjJ58qdRYr6AshB1zhXhx3Yq29bXLjy9oLt".to_string(),
                    share: 100,
                }],
            }),
            creators: vec![JsonCreator {
                address: "6gV5iGu3NjJ58qdRYr6AshB1zhXhx3Yq29bXLjy9oLt".to_string(),
                share: 100,
            }],
        }
    }

    #[test]
    fn serializes_with_schema_field_names() {
        let value = serde_json::to_value(sample()).unwrap();
        assert_eq!(value["attributes"][0]["trait_type"], "background");
        assert_eq!(value["properties"]["files"][0]["type"], "image/png");
        assert_eq!(value["creators"][0]["share"], 100);
    }

    #[test]
    fn empty_collections_are_omitted() {
        let value = serde_json::to_value(OffChainMetadata {
            name: "bare".to_string(),
            symbol: "B".to_string(),
            ..Default::default()
        })
        .unwrap();
        let object = value.as_object().unwrap();
        assert!(!object.contains_key("attributes"));
        assert!(!object.contains_key("creators"));
        assert!(!object.contains_key("description"));
    }

    #[test]
    fn round_trips_through_json() {
        let json = serde_json::to_string(&sample()).unwrap();
        let parsed: OffChainMetadata = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.attributes, sample().attributes);
        assert_eq!(parsed.properties.unwrap().files, sample().properties.unwrap().files);
    }
}
