use derive_more::Display;
use serde::{Deserialize, Serialize};

///
/// Operator
///
/// Comparison a bound column takes part in. Only the last bound clustering
/// column of a pattern may carry a range operator.
///

#[derive(
    Clone, Copy, Debug, Default, Deserialize, Display, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize,
)]
pub enum Operator {
    #[default]
    #[display("=")]
    Eq,

    #[display("<")]
    Lt,

    #[display("<=")]
    Lte,

    #[display(">")]
    Gt,

    #[display(">=")]
    Gte,
}

impl Operator {
    /// Range operators in the order their variants are generated.
    pub const RANGE: [Self; 4] = [Self::Lt, Self::Lte, Self::Gt, Self::Gte];

    #[must_use]
    pub const fn is_range(self) -> bool {
        !matches!(self, Self::Eq)
    }

    /// Trailing token appended once to a pattern id; empty for equality.
    #[must_use]
    pub const fn id_suffix(self) -> &'static str {
        match self {
            Self::Eq => "",
            Self::Lt => "Lt",
            Self::Lte => "Lte",
            Self::Gt => "Gt",
            Self::Gte => "Gte",
        }
    }

    /// Trailing token appended once to a route segment; empty for equality.
    #[must_use]
    pub const fn path_suffix(self) -> &'static str {
        match self {
            Self::Eq => "",
            Self::Lt => "lt",
            Self::Lte => "lte",
            Self::Gt => "gt",
            Self::Gte => "gte",
        }
    }
}
