use serde::Deserialize;
use serde::de::Error as DeError;

/// Balance value returned by SMSPortal as either JSON string or JSON number.
///
/// For numbers, the raw JSON token is preserved to avoid formatting drift
/// (`12.50` remains `"12.50"` instead of becoming `"12.5"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportMoney(String);

impl TransportMoney {
    pub fn into_string(self) -> String {
        self.0
    }
}

impl<'de> Deserialize<'de> for TransportMoney {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw: Box<serde_json::value::RawValue> = Deserialize::deserialize(deserializer)?;
        let token = raw.get();

        match token.as_bytes().first().copied() {
            Some(b'"') => {
                let parsed = serde_json::from_str::<String>(token).map_err(D::Error::custom)?;
                Ok(Self(parsed))
            }
            Some(b'-' | b'0'..=b'9') => Ok(Self(token.to_owned())),
            _ => Err(D::Error::custom(
                "expected money field to be JSON string or number",
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_numeric_token_verbatim() {
        let money: TransportMoney = serde_json::from_str("12.50").unwrap();
        assert_eq!(money.into_string(), "12.50");
    }

    #[test]
    fn unquotes_string_token() {
        let money: TransportMoney = serde_json::from_str(r#""12.50""#).unwrap();
        assert_eq!(money.into_string(), "12.50");
    }

    #[test]
    fn rejects_other_json_kinds() {
        assert!(serde_json::from_str::<TransportMoney>("null").is_err());
        assert!(serde_json::from_str::<TransportMoney>("true").is_err());
        assert!(serde_json::from_str::<TransportMoney>("{}").is_err());
    }
}
