//! Semantic column types and the conversions between them.
//!
//! The loader infers a polars dtype per column; the scrambler only reasons
//! about four coarse tags. Which tags a column may be coerced to is a static
//! table ([`SemanticType::candidates`]) and every ordered pair of tags has a
//! single conversion routine ([`convert`]).

use polars::prelude::*;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SemanticType {
    Integer,
    Float,
    Text,
    Categorical,
}

impl std::fmt::Display for SemanticType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SemanticType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "integer" | "int" | "int64" => Ok(Self::Integer),
            "float" | "float64" | "double" => Ok(Self::Float),
            "text" | "string" | "str" => Ok(Self::Text),
            "categorical" | "category" => Ok(Self::Categorical),
            other => Err(format!(
                "unknown type '{other}', expected one of: integer, float, text, categorical"
            )),
        }
    }
}

impl SemanticType {
    pub const ALL: [Self; 4] = [Self::Integer, Self::Float, Self::Text, Self::Categorical];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Integer => "integer",
            Self::Float => "float",
            Self::Text => "text",
            Self::Categorical => "categorical",
        }
    }

    /// Classifies an inferred polars dtype.
    ///
    /// Booleans, temporals and anything else non-numeric count as text.
    pub fn from_dtype(dtype: &DataType) -> Self {
        match dtype {
            DataType::Categorical(_, _) | DataType::Enum(_, _) => Self::Categorical,
            dt if dt.is_integer() => Self::Integer,
            dt if dt.is_float() => Self::Float,
            _ => Self::Text,
        }
    }

    /// Concrete dtype a column is stored as after coercion.
    pub fn dtype(&self) -> DataType {
        match self {
            Self::Integer => DataType::Int64,
            Self::Float => DataType::Float64,
            Self::Text => DataType::String,
            Self::Categorical => DataType::Categorical(None, Default::default()),
        }
    }

    /// Coercion targets for a column currently of this type.
    ///
    /// Never contains `self`. Numeric columns never move to another numeric
    /// type; plain text may only become numeric.
    pub const fn candidates(&self) -> &'static [Self] {
        match self {
            Self::Integer | Self::Float => &[Self::Text, Self::Categorical],
            Self::Text => &[Self::Integer, Self::Float],
            Self::Categorical => &[Self::Integer, Self::Float, Self::Text],
        }
    }

    /// [`Self::candidates`] restricted to `universe`, in table order.
    pub fn candidates_within(&self, universe: &[Self]) -> Vec<Self> {
        self.candidates()
            .iter()
            .copied()
            .filter(|kind| universe.contains(kind))
            .collect()
    }
}

/// Converts `series` from `from` to `to`.
///
/// Numeric targets parse every value as a number; values that do not parse
/// (and nulls) become zero. Text and categorical targets always succeed and
/// keep nulls as nulls.
///
/// # Errors
///
/// Returns the underlying polars error if a cast is not supported for the
/// concrete dtype of `series`.
pub fn convert(series: &Series, from: SemanticType, to: SemanticType) -> PolarsResult<Series> {
    match (from, to) {
        (SemanticType::Integer, SemanticType::Integer) => series.cast(&DataType::Int64),
        (SemanticType::Float, SemanticType::Float) => series.cast(&DataType::Float64),
        (SemanticType::Integer | SemanticType::Float, SemanticType::Integer) => {
            series.cast(&DataType::Int64)?.fill_null(FillNullStrategy::Zero)
        }
        (SemanticType::Integer, SemanticType::Float) => {
            series.cast(&DataType::Float64)?.fill_null(FillNullStrategy::Zero)
        }
        (SemanticType::Text | SemanticType::Categorical, SemanticType::Integer) => {
            parse_integer(series)?.fill_null(FillNullStrategy::Zero)
        }
        (SemanticType::Text | SemanticType::Categorical, SemanticType::Float) => {
            parse_float(series)?.fill_null(FillNullStrategy::Zero)
        }
        (_, SemanticType::Text) => series.cast(&DataType::String),
        (_, SemanticType::Categorical) => series.cast(&DataType::String)?.cast(&to.dtype()),
    }
}

/// Parses textual values as `f64`, leaving unparsable ones null.
fn parse_float(series: &Series) -> PolarsResult<Series> {
    series.cast(&DataType::String)?.cast(&DataType::Float64)
}

/// Parses textual values as `i64`.
///
/// Integer literals are read exactly; anything else that parses as a float
/// is truncated toward zero. Unparsable values stay null.
fn parse_integer(series: &Series) -> PolarsResult<Series> {
    let text = series.cast(&DataType::String)?;
    let exact = text.cast(&DataType::Int64)?;
    let truncated = text.cast(&DataType::Float64)?.cast(&DataType::Int64)?;
    exact.zip_with(&exact.is_not_null(), &truncated)
}
