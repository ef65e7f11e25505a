//! Class: a cohort of students with a shift and a section.

use serde::{Deserialize, Serialize};

use crate::id::ClassId;

/// A class as listed by `GET /api/class`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchoolClass {
    #[serde(rename = "_id")]
    pub id: ClassId,
    #[serde(rename = "className")]
    pub name: String,
    #[serde(rename = "classCode")]
    pub code: String,
    #[serde(default)]
    pub shift: String,
    #[serde(default)]
    pub section: String,
}

impl SchoolClass {
    /// Option label used by selection lists: name, code, shift, section.
    #[must_use]
    pub fn label(&self) -> String {
        [&self.name, &self.code, &self.shift, &self.section]
            .into_iter()
            .filter(|part| !part.is_empty())
            .cloned()
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_build_label_from_all_parts() {
        let class: SchoolClass = serde_json::from_str(
            r#"{"_id":"k1","className":"BSCS","classCode":"CS-4","shift":"Morning","section":"A"}"#,
        )
        .unwrap();
        assert_eq!(class.label(), "BSCS CS-4 Morning A");
    }

    #[test]
    fn should_skip_missing_shift_and_section_in_label() {
        let class: SchoolClass =
            serde_json::from_str(r#"{"_id":"k1","className":"BSCS","classCode":"CS-4"}"#).unwrap();
        assert_eq!(class.label(), "BSCS CS-4");
    }
}
