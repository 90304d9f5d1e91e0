//! Rules for which values survive the filtering steps of a query.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// How values found while distributing over arrays are filtered.
///
/// `Loose` treats `null`, `false`, numeric zero and the empty string as
/// empty and drops them, so a genuine `0` or `""` field is
/// indistinguishable from a missing one. `Strict` drops only `null`.
/// Missing values are dropped under both policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Truthiness {
    #[default]
    Loose,
    Strict,
}

impl Truthiness {
    /// Returns true if `value` is kept by this policy.
    pub fn keeps(self, value: &Value) -> bool {
        match self {
            Truthiness::Loose => match value {
                Value::Null => false,
                Value::Bool(b) => *b,
                Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
                Value::String(s) => !s.is_empty(),
                Value::Array(_) | Value::Object(_) => true,
            },
            Truthiness::Strict => !value.is_null(),
        }
    }

    /// Like `keeps`, for a lookup that may have found nothing.
    pub fn keeps_found(self, value: Option<&Value>) -> bool {
        value.map(|v| self.keeps(v)).unwrap_or(false)
    }
}

impl fmt::Display for Truthiness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Truthiness::Loose => write!(f, "loose"),
            Truthiness::Strict => write!(f, "strict"),
        }
    }
}

impl FromStr for Truthiness {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "loose" => Ok(Truthiness::Loose),
            "strict" => Ok(Truthiness::Strict),
            other => Err(format!(
                "unknown truthiness '{}', expected 'loose' or 'strict'",
                other
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_loose_drops_falsy_scalars() {
        let policy = Truthiness::Loose;
        assert!(!policy.keeps(&json!(null)));
        assert!(!policy.keeps(&json!(false)));
        assert!(!policy.keeps(&json!(0)));
        assert!(!policy.keeps(&json!(0.0)));
        assert!(!policy.keeps(&json!("")));
        assert!(!policy.keeps_found(None));
    }

    #[test]
    fn test_loose_keeps_containers_and_truthy_scalars() {
        let policy = Truthiness::Loose;
        assert!(policy.keeps(&json!(true)));
        assert!(policy.keeps(&json!(-1)));
        assert!(policy.keeps(&json!(0.5)));
        assert!(policy.keeps(&json!("0")));
        assert!(policy.keeps(&json!([])));
        assert!(policy.keeps(&json!({})));
    }

    #[test]
    fn test_strict_only_drops_null() {
        let policy = Truthiness::Strict;
        assert!(!policy.keeps(&json!(null)));
        assert!(!policy.keeps_found(None));
        assert!(policy.keeps(&json!(false)));
        assert!(policy.keeps(&json!(0)));
        assert!(policy.keeps(&json!("")));
    }

    #[test]
    fn test_from_str() {
        assert_eq!("loose".parse::<Truthiness>(), Ok(Truthiness::Loose));
        assert_eq!("STRICT".parse::<Truthiness>(), Ok(Truthiness::Strict));
        assert!("js".parse::<Truthiness>().is_err());
        assert_eq!(Truthiness::default().to_string(), "loose");
    }
}
