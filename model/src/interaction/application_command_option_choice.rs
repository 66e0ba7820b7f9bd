use serde::{Deserialize, Serialize};
use serde_json::value::RawValue;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ApplicationCommandOptionChoice {
    pub name: String,
    pub value: Box<RawValue>, // string, integer or double
}

impl ApplicationCommandOptionChoice {
    pub fn new<T: Serialize>(name: impl Into<String>, value: &T) -> serde_json::Result<Self> {
        Ok(Self {
            name: name.into(),
            value: serde_json::value::to_raw_value(value)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_kept_verbatim() {
        let choice: ApplicationCommandOptionChoice =
            serde_json::from_str(r#"{"name":"n","value":1.50}"#).unwrap();
        assert_eq!(choice.value.get(), "1.50");

        let choice = ApplicationCommandOptionChoice::new("a", &"b").unwrap();
        assert_eq!(serde_json::to_string(&choice).unwrap(), r#"{"name":"a","value":"b"}"#);
    }
}
