use serde::{Deserialize, Serialize};
use std::fmt;

/// The widget shape requested by the dashboard.
///
/// Ordinals are fixed by the dashboard client and must never be
/// renumbered.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "i64", into = "u8")]
pub enum WidgetType {
    NumberAndSecondaryStat,
    RagColumnAndNumbers,
    RagNumbersOnly,
    Text,
    ChartPie,
    ChartLine,
    GeckOMeter,
}

impl WidgetType {
    /// Every widget type, indexed by `ordinal - 1`.
    pub const ALL: [Self; 7] = [
        Self::NumberAndSecondaryStat,
        Self::RagColumnAndNumbers,
        Self::RagNumbersOnly,
        Self::Text,
        Self::ChartPie,
        Self::ChartLine,
        Self::GeckOMeter,
    ];

    /// The lowest ordinal the dashboard sends.
    pub const MIN_ORDINAL: i64 = 1;

    /// Number of known widget types.
    pub const COUNT: usize = Self::ALL.len();

    #[must_use]
    pub const fn ordinal(self) -> u8 {
        match self {
            Self::NumberAndSecondaryStat => 1,
            Self::RagColumnAndNumbers => 2,
            Self::RagNumbersOnly => 3,
            Self::Text => 4,
            Self::ChartPie => 5,
            Self::ChartLine => 6,
            Self::GeckOMeter => 7,
        }
    }

    /// Looks up a widget type by its dashboard ordinal.
    ///
    /// Returns `None` for anything outside `MIN_ORDINAL..=COUNT`.
    #[must_use]
    pub fn from_ordinal(ordinal: i64) -> Option<Self> {
        let index = ordinal.checked_sub(Self::MIN_ORDINAL)?;
        usize::try_from(index)
            .ok()
            .and_then(|index| Self::ALL.get(index).copied())
    }
}

impl fmt::Display for WidgetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::NumberAndSecondaryStat => "number_and_secondary_stat",
            Self::RagColumnAndNumbers => "rag_column_and_numbers",
            Self::RagNumbersOnly => "rag_numbers_only",
            Self::Text => "text",
            Self::ChartPie => "chart_pie",
            Self::ChartLine => "chart_line",
            Self::GeckOMeter => "geck_o_meter",
        };
        f.write_str(name)
    }
}

/// Returned when an ordinal does not name a known widget type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownWidgetType(pub i64);

impl fmt::Display for UnknownWidgetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown widget type: {}", self.0)
    }
}

impl std::error::Error for UnknownWidgetType {}

impl TryFrom<i64> for WidgetType {
    type Error = UnknownWidgetType;

    fn try_from(ordinal: i64) -> Result<Self, Self::Error> {
        Self::from_ordinal(ordinal).ok_or(UnknownWidgetType(ordinal))
    }
}

impl From<WidgetType> for u8 {
    fn from(widget_type: WidgetType) -> Self {
        widget_type.ordinal()
    }
}

/// The serialization the dashboard asked for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ResponseFormat {
    #[default]
    Json,
    Xml,
}

impl ResponseFormat {
    #[must_use]
    pub const fn content_type(self) -> &'static str {
        match self {
            Self::Json => "application/json",
            Self::Xml => "text/xml",
        }
    }
}
