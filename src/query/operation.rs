//! GraphQL operation kinds.

use crate::error::QueryBuilderError;
use std::fmt;
use std::str::FromStr;

/// The kind of a root operation.
///
/// # Example
///
/// ```rust
/// use graphql_query_builder::OperationKind;
///
/// let kind: OperationKind = "Mutation".parse().unwrap();
/// assert_eq!(kind, OperationKind::Mutation);
/// assert_eq!(kind.to_string(), "mutation");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OperationKind {
    /// A read-only fetch.
    Query,
    /// A write followed by a fetch.
    Mutation,
    /// A long-lived request for a stream of events.
    Subscription,
}

impl OperationKind {
    /// Returns the keyword that opens the operation.
    #[must_use]
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Query => "query",
            Self::Mutation => "mutation",
            Self::Subscription => "subscription",
        }
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

impl FromStr for OperationKind {
    type Err = QueryBuilderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_lowercase();

        match s.as_str() {
            "query" => Ok(Self::Query),
            "mutation" => Ok(Self::Mutation),
            "subscription" => Ok(Self::Subscription),
            _ => Err(QueryBuilderError::InvalidOperationKind { kind: s }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_kind_round_trips_through_strings() {
        for kind in [
            OperationKind::Query,
            OperationKind::Mutation,
            OperationKind::Subscription,
        ] {
            assert_eq!(kind.to_string().parse::<OperationKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_operation_kind_parsing_is_case_insensitive() {
        assert_eq!(
            " QUERY ".parse::<OperationKind>().unwrap(),
            OperationKind::Query
        );
    }

    #[test]
    fn test_unknown_operation_kind() {
        assert_eq!(
            "fragment".parse::<OperationKind>(),
            Err(QueryBuilderError::InvalidOperationKind {
                kind: "fragment".to_string()
            })
        );
    }
}
