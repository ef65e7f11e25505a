//! References between records, which the backend ships either as a bare id
//! or as the populated record.

use serde::{Deserialize, Serialize};

/// A link to another record: just its id, or the full record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Ref<T> {
    Populated(T),
    Id(String),
}

impl<T> Ref<T> {
    /// The populated record, if the backend embedded it.
    #[must_use]
    pub fn populated(&self) -> Option<&T> {
        match self {
            Self::Populated(record) => Some(record),
            Self::Id(_) => None,
        }
    }

    /// Project a display value out of the populated record, or an em dash.
    pub fn display(&self, f: impl FnOnce(&T) -> &str) -> String {
        self.populated()
            .map_or_else(|| "\u{2014}".to_string(), |record| f(record).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::teacher::Teacher;

    #[test]
    fn should_decode_bare_id() {
        let parsed: Ref<Teacher> = serde_json::from_str("\"t1\"").unwrap();
        assert_eq!(parsed, Ref::Id("t1".to_string()));
        assert_eq!(parsed.display(|t| &t.name), "\u{2014}");
    }

    #[test]
    fn should_decode_populated_record() {
        let parsed: Ref<Teacher> =
            serde_json::from_str(r#"{"_id":"t1","name":"Ms. Noor"}"#).unwrap();
        assert_eq!(parsed.display(|t| &t.name), "Ms. Noor");
    }
}
