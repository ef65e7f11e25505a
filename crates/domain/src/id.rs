//! Typed identifier newtypes around the backend's opaque string ids.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

macro_rules! define_id {
    ($(#[doc = $doc:expr])* $name:ident) => {
        $(#[doc = $doc])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Wrap an id string issued by the backend.
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Access the raw id string.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl FromStr for $name {
            type Err = Infallible;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(s.to_string()))
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }
    };
}

define_id!(
    /// Unique identifier for a [`Student`](crate::student::Student).
    StudentId
);

define_id!(
    /// Unique identifier for a [`SchoolClass`](crate::class::SchoolClass).
    ClassId
);

define_id!(
    /// Unique identifier for a [`Course`](crate::course::Course).
    CourseId
);

define_id!(
    /// Unique identifier for a [`Teacher`](crate::teacher::Teacher).
    TeacherId
);

define_id!(
    /// Unique identifier for an [`ExamResult`](crate::result::ExamResult).
    ResultId
);

define_id!(
    /// Unique identifier for an [`Admin`](crate::admin::Admin).
    AdminId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_serialize_as_bare_string() {
        let id = StudentId::new("65f0c0ffee");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"65f0c0ffee\"");
    }

    #[test]
    fn should_deserialize_from_bare_string() {
        let id: CourseId = serde_json::from_str("\"abc123\"").unwrap();
        assert_eq!(id.as_str(), "abc123");
    }

    #[test]
    fn should_display_raw_id() {
        let id = ResultId::from("r-1");
        assert_eq!(id.to_string(), "r-1");
        let parsed: ResultId = "r-1".parse().unwrap();
        assert_eq!(parsed, id);
    }
}
