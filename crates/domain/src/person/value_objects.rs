//! Value objects describing a person.

use serde::{Deserialize, Serialize};

macro_rules! string_value {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Wraps an already validated value.
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            /// Returns the value as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

string_value!(
    /// A person's full name.
    Name
);

string_value!(
    /// A person's phone number.
    Phone
);

string_value!(
    /// A person's email address.
    Email
);

string_value!(
    /// A person's postal address.
    Address
);

/// Whether a person has turned up at the current event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Attendance {
    #[default]
    Absent,
    Present,
}

impl Attendance {
    /// Returns true if the person has been marked present.
    pub fn is_present(&self) -> bool {
        matches!(self, Attendance::Present)
    }

    /// Returns the attendance as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Attendance::Absent => "Absent",
            Attendance::Present => "Present",
        }
    }
}

impl std::fmt::Display for Attendance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<bool> for Attendance {
    fn from(present: bool) -> Self {
        if present {
            Attendance::Present
        } else {
            Attendance::Absent
        }
    }
}
