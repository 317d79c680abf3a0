//! Image detail hints.

use serde::{Deserialize, Serialize};

/// How much visual resolution the model should spend on an image part.
///
/// # Examples
///
/// ```
/// use pictor_core::DetailLevel;
///
/// assert_eq!(DetailLevel::default(), DetailLevel::High);
/// assert_eq!(format!("{}", DetailLevel::Low), "low");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum DetailLevel {
    /// Low-resolution pass
    #[display("low")]
    Low,
    /// Full-resolution pass
    #[default]
    #[display("high")]
    High,
}
