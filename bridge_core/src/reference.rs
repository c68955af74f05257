//! # Code References
//!
//! Every table, constant set and clause evaluator cites the standard edition
//! it comes from. Two editions appear in this crate and they are versioned
//! separately; a [`ClauseRef`] always names exactly one of them.
//!
//! ```rust
//! use bridge_core::reference::{ClauseRef, Standard};
//!
//! let cl = ClauseRef::new(Standard::Irc6_2017, "204.4");
//! assert_eq!(cl.citation(), "IRC 6:2017 Cl. 204.4");
//! ```

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Standard edition a clause or table originates from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Standard {
    /// IRC 5:2015 - General features of design
    #[serde(rename = "IRC5:2015")]
    Irc5_2015,
    /// IRC 6:2017 - Loads and load combinations
    #[serde(rename = "IRC6:2017")]
    Irc6_2017,
}

impl Standard {
    /// All editions known to this crate
    pub const ALL: [Standard; 2] = [Standard::Irc5_2015, Standard::Irc6_2017];

    /// Display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Standard::Irc5_2015 => "IRC 5:2015",
            Standard::Irc6_2017 => "IRC 6:2017",
        }
    }

    /// Short form for inline references
    pub fn short_form(&self) -> &'static str {
        match self {
            Standard::Irc5_2015 => "IRC 5",
            Standard::Irc6_2017 => "IRC 6",
        }
    }

    /// Publication year of the edition
    pub fn year(&self) -> u16 {
        match self {
            Standard::Irc5_2015 => 2015,
            Standard::Irc6_2017 => 2017,
        }
    }
}

impl fmt::Display for Standard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Reference to a numbered clause (or table) within one edition.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClauseRef {
    pub standard: Standard,
    /// Clause or table number as printed ("104.3.1", "Table 12")
    pub clause: Cow<'static, str>,
}

impl ClauseRef {
    pub const fn new(standard: Standard, clause: &'static str) -> Self {
        Self {
            standard,
            clause: Cow::Borrowed(clause),
        }
    }

    /// Format the reference for reports
    pub fn citation(&self) -> String {
        if self.clause.starts_with("Table") || self.clause.starts_with("Fig") {
            format!("{} {}", self.standard.display_name(), self.clause)
        } else {
            format!("{} Cl. {}", self.standard.display_name(), self.clause)
        }
    }
}

impl fmt::Display for ClauseRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.citation())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_citation() {
        let table = ClauseRef::new(Standard::Irc6_2017, "Table 12");
        assert_eq!(table.citation(), "IRC 6:2017 Table 12");
        let clause = ClauseRef::new(Standard::Irc5_2015, "101.41");
        assert_eq!(clause.to_string(), "IRC 5:2015 Cl. 101.41");
    }

    #[test]
    fn test_editions_distinct() {
        let a = ClauseRef::new(Standard::Irc5_2015, "204.1");
        let b = ClauseRef::new(Standard::Irc6_2017, "204.1");
        assert_ne!(a, b);
    }

    #[test]
    fn test_serialization() {
        let cl = ClauseRef::new(Standard::Irc6_2017, "211.2");
        let json = serde_json::to_string(&cl).unwrap();
        assert!(json.contains("IRC6:2017"));
        let back: ClauseRef = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cl);
    }
}
