use rust_decimal::Decimal;
use serde::Serialize;

/// A labelled number. Used by the number, RAG and gauge widgets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DataItem {
    pub text: String,

    #[serde(serialize_with = "crate::number::serialize")]
    pub value: Decimal,
}

impl DataItem {
    pub fn new(value: impl Into<Decimal>, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            value: value.into(),
        }
    }
}

/// One line of a text widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextItem {
    /// Corner icon shown next to the line, see the associated constants.
    #[serde(rename = "type")]
    pub kind: i32,

    /// Plain text or HTML.
    pub text: String,
}

impl TextItem {
    /// No corner icon.
    pub const PLAIN: i32 = 0;
    /// Grey corner icon.
    pub const INFO: i32 = 1;
    /// Yellow corner icon.
    pub const ALERT: i32 = 2;

    pub fn new(kind: i32, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(Self::PLAIN, text)
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self::new(Self::INFO, text)
    }

    pub fn alert(text: impl Into<String>) -> Self {
        Self::new(Self::ALERT, text)
    }
}

/// A slice of a pie chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PieItem {
    #[serde(serialize_with = "crate::number::serialize")]
    pub value: Decimal,

    pub label: String,

    /// `RRGGBB` or `RRGGBBAA` hex notation. The dashboard spells it the
    /// British way.
    pub colour: String,
}

impl PieItem {
    pub fn new(
        value: impl Into<Decimal>,
        label: impl Into<String>,
        colour: impl Into<String>,
    ) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            colour: colour.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LineChartSettings {
    pub axisx: Vec<String>,

    pub axisy: Vec<String>,

    pub colour: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LineChart {
    #[serde(serialize_with = "crate::number::serialize_seq")]
    pub item: Vec<Decimal>,

    pub settings: LineChartSettings,
}

impl LineChart {
    pub fn new<I>(points: I, settings: LineChartSettings) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Decimal>,
    {
        Self {
            item: points.into_iter().map(Into::into).collect(),
            settings,
        }
    }
}

/// A gauge reading between two bounds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeckOMeter {
    #[serde(serialize_with = "crate::number::serialize")]
    pub item: Decimal,

    pub min: DataItem,

    pub max: DataItem,
}

impl GeckOMeter {
    pub fn new(item: impl Into<Decimal>, min: DataItem, max: DataItem) -> Self {
        Self {
            item: item.into(),
            min,
            max,
        }
    }
}

/// A payload that renders as a single composite record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WidgetRecord {
    LineChart(LineChart),
    GeckOMeter(GeckOMeter),
}

/// A payload that renders as a list under an `item` envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WidgetSequence {
    Items(Vec<DataItem>),
    Text(Vec<TextItem>),
    Pie(Vec<PieItem>),
}

/// What a resolver hands back for a widget request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WidgetPayload {
    Record(WidgetRecord),
    Sequence(WidgetSequence),
}

impl From<WidgetRecord> for WidgetPayload {
    fn from(record: WidgetRecord) -> Self {
        Self::Record(record)
    }
}

impl From<WidgetSequence> for WidgetPayload {
    fn from(sequence: WidgetSequence) -> Self {
        Self::Sequence(sequence)
    }
}

impl From<LineChart> for WidgetPayload {
    fn from(chart: LineChart) -> Self {
        Self::Record(WidgetRecord::LineChart(chart))
    }
}

impl From<GeckOMeter> for WidgetPayload {
    fn from(meter: GeckOMeter) -> Self {
        Self::Record(WidgetRecord::GeckOMeter(meter))
    }
}

impl From<Vec<DataItem>> for WidgetPayload {
    fn from(items: Vec<DataItem>) -> Self {
        Self::Sequence(WidgetSequence::Items(items))
    }
}

impl From<Vec<TextItem>> for WidgetPayload {
    fn from(items: Vec<TextItem>) -> Self {
        Self::Sequence(WidgetSequence::Text(items))
    }
}

impl From<Vec<PieItem>> for WidgetPayload {
    fn from(items: Vec<PieItem>) -> Self {
        Self::Sequence(WidgetSequence::Pie(items))
    }
}
