//! Preset value rows stored next to templates by the same host.
//!
//! Templates never touch this table. The row shape is kept here so that
//! anything sharing the store reads and writes it with the exact column
//! names, nullability and length limits the host expects.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Preset value row of a data type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreValueRecord {
    #[serde(rename = "id")]
    pub id: i32,
    #[serde(rename = "datatypeNodeId")]
    pub data_type_node_id: i32,
    #[serde(rename = "value")]
    pub value: Option<String>,
    #[serde(rename = "sortorder")]
    pub sort_order: i32,
    #[serde(rename = "alias")]
    pub alias: Option<String>,
}

impl PreValueRecord {
    pub const TABLE_NAME: &'static str = "cmsDataTypePreValues";
    pub const PRIMARY_KEY: &'static str = "id";
    /// First id handed out by the table's identity column.
    pub const IDENTITY_SEED: i32 = 5;
    pub const VALUE_MAX_LEN: usize = 2500;
    pub const ALIAS_MAX_LEN: usize = 50;

    pub fn new(data_type_node_id: i32, sort_order: i32) -> Self {
        PreValueRecord {
            data_type_node_id,
            sort_order,
            ..Default::default()
        }
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    /// Check the bounded columns. Lengths are counted in characters.
    pub fn validate(&self) -> Result<(), SchemaError> {
        check_len("value", self.value.as_deref(), Self::VALUE_MAX_LEN)?;
        check_len("alias", self.alias.as_deref(), Self::ALIAS_MAX_LEN)
    }
}

fn check_len(column: &'static str, value: Option<&str>, max: usize) -> Result<(), SchemaError> {
    let actual = value.map(|v| v.chars().count()).unwrap_or(0);
    if actual > max {
        return Err(SchemaError::TooLong {
            column,
            max,
            actual,
        });
    }
    Ok(())
}

/// Error type for preset value rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    /// A bounded column holds more characters than the table allows.
    TooLong {
        column: &'static str,
        max: usize,
        actual: usize,
    },
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchemaError::TooLong {
                column,
                max,
                actual,
            } => write!(
                f,
                "column {} allows {} characters, got {}",
                column, max, actual
            ),
        }
    }
}

impl std::error::Error for SchemaError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_column_names() {
        let row = PreValueRecord {
            id: PreValueRecord::IDENTITY_SEED,
            ..PreValueRecord::new(1041, 2).with_value("red")
        };
        let json = serde_json::to_value(&row).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 5,
                "datatypeNodeId": 1041,
                "value": "red",
                "sortorder": 2,
                "alias": null,
            })
        );
    }

    #[test]
    fn limits_are_inclusive() {
        let row = PreValueRecord::new(1, 0)
            .with_value("v".repeat(PreValueRecord::VALUE_MAX_LEN))
            .with_alias("a".repeat(PreValueRecord::ALIAS_MAX_LEN));
        assert!(row.validate().is_ok());
    }

    #[test]
    fn over_length_alias_rejected() {
        let row = PreValueRecord::new(1, 0).with_alias("a".repeat(51));
        assert_eq!(
            row.validate().unwrap_err(),
            SchemaError::TooLong {
                column: "alias",
                max: 50,
                actual: 51,
            }
        );
    }

    #[test]
    fn value_length_counts_characters() {
        let row = PreValueRecord::new(1, 0).with_value("é".repeat(2500));
        assert!(row.validate().is_ok());

        let row = PreValueRecord::new(1, 0).with_value("é".repeat(2501));
        assert!(matches!(
            row.validate(),
            Err(SchemaError::TooLong { column: "value", .. })
        ));
    }

    #[test]
    fn nulls_round_trip() {
        let json = r#"{"id":9,"datatypeNodeId":3,"value":null,"sortorder":1,"alias":null}"#;
        let row: PreValueRecord = serde_json::from_str(json).unwrap();
        assert_eq!(row.value, None);
        assert_eq!(row.alias, None);
        assert_eq!(row.sort_order, 1);
    }
}
