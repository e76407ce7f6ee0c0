use serde::{Deserialize, Serialize};

/// Comparison operators.
///
/// One tag set serves three value kinds: the LIKE-family operators
/// compare strings, the ordering operators compare numbers, and
/// booleans support equality only. The compiler renders whatever
/// pairing it is handed; [`crate::validator`] is the opt-in check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operator {
    /// Equal (=)
    #[serde(rename = "EQUALS")]
    Eq,
    /// Not equal (!=)
    #[serde(rename = "NOT_EQUALS")]
    Ne,
    /// Prefix match (LIKE "v%")
    #[serde(rename = "STARTS_WITH")]
    StartsWith,
    #[serde(rename = "NOT_STARTS_WITH")]
    NotStartsWith,
    /// Suffix match (LIKE "%v")
    #[serde(rename = "ENDS_WITH")]
    EndsWith,
    #[serde(rename = "NOT_ENDS_WITH")]
    NotEndsWith,
    /// Substring match (LIKE "%v%")
    #[serde(rename = "CONTAINS")]
    Contains,
    #[serde(rename = "NOT_CONTAINS")]
    NotContains,
    /// Greater than (>)
    #[serde(rename = "GREATER_THAN")]
    Gt,
    /// Greater than or equal (>=)
    #[serde(rename = "GREATER_THAN_EQUALS")]
    Gte,
    /// Less than (<)
    #[serde(rename = "LESSER_THAN")]
    Lt,
    /// Less than or equal (<=)
    #[serde(rename = "LESSER_THAN_EQUALS")]
    Lte,
}

impl Operator {
    /// Returns the SQL symbol/keyword for this operator when the
    /// compared value is non-null. The LIKE-family symbols pair with a
    /// pattern-wrapped value.
    pub fn sql_symbol(&self) -> &'static str {
        match self {
            Operator::Eq => "=",
            Operator::Ne => "!=",
            Operator::StartsWith | Operator::EndsWith | Operator::Contains => "LIKE",
            Operator::NotStartsWith | Operator::NotEndsWith | Operator::NotContains => "NOT LIKE",
            Operator::Gt => ">",
            Operator::Gte => ">=",
            Operator::Lt => "<",
            Operator::Lte => "<=",
        }
    }

    /// The wire spelling, as it appears in JSON filter descriptions.
    pub fn wire_name(&self) -> &'static str {
        match self {
            Operator::Eq => "EQUALS",
            Operator::Ne => "NOT_EQUALS",
            Operator::StartsWith => "STARTS_WITH",
            Operator::NotStartsWith => "NOT_STARTS_WITH",
            Operator::EndsWith => "ENDS_WITH",
            Operator::NotEndsWith => "NOT_ENDS_WITH",
            Operator::Contains => "CONTAINS",
            Operator::NotContains => "NOT_CONTAINS",
            Operator::Gt => "GREATER_THAN",
            Operator::Gte => "GREATER_THAN_EQUALS",
            Operator::Lt => "LESSER_THAN",
            Operator::Lte => "LESSER_THAN_EQUALS",
        }
    }

    /// True for the LIKE-family operators, whose value is wrapped in a
    /// `%` pattern before rendering.
    pub fn is_pattern(&self) -> bool {
        matches!(
            self,
            Operator::StartsWith
                | Operator::NotStartsWith
                | Operator::EndsWith
                | Operator::NotEndsWith
                | Operator::Contains
                | Operator::NotContains
        )
    }

    /// Operators meaningful for string values.
    pub fn compares_strings(&self) -> bool {
        matches!(self, Operator::Eq | Operator::Ne) || self.is_pattern()
    }

    /// Operators meaningful for numeric values.
    pub fn compares_numbers(&self) -> bool {
        matches!(
            self,
            Operator::Eq
                | Operator::Ne
                | Operator::Gt
                | Operator::Gte
                | Operator::Lt
                | Operator::Lte
        )
    }

    /// Operators meaningful for boolean values.
    pub fn compares_bools(&self) -> bool {
        matches!(self, Operator::Eq | Operator::Ne)
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.wire_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_names_round_trip() {
        let ops = [
            Operator::Eq,
            Operator::Ne,
            Operator::StartsWith,
            Operator::NotStartsWith,
            Operator::EndsWith,
            Operator::NotEndsWith,
            Operator::Contains,
            Operator::NotContains,
            Operator::Gt,
            Operator::Gte,
            Operator::Lt,
            Operator::Lte,
        ];
        for op in ops {
            let json = serde_json::to_string(&op).unwrap();
            assert_eq!(json, format!("\"{}\"", op.wire_name()));
            let back: Operator = serde_json::from_str(&json).unwrap();
            assert_eq!(back, op);
        }
    }

    #[test]
    fn test_pattern_operators_use_like() {
        assert_eq!(Operator::Contains.sql_symbol(), "LIKE");
        assert_eq!(Operator::NotEndsWith.sql_symbol(), "NOT LIKE");
        assert!(Operator::StartsWith.is_pattern());
        assert!(!Operator::Gte.is_pattern());
    }
}
