//! Types shared between the Geckoboard widget adapter and its hosts.
//!
//! The dashboard client polls a custom widget endpoint with a `type`
//! parameter naming one of seven widget shapes. The records in this crate
//! are those shapes; their field names and declaration order are part of
//! the wire format and must not change.

pub mod number;
mod payload;
mod widget;

pub use payload::{
    DataItem, GeckOMeter, LineChart, LineChartSettings, PieItem, TextItem,
    WidgetPayload, WidgetRecord, WidgetSequence,
};
pub use rust_decimal::Decimal;
pub use widget::{ResponseFormat, UnknownWidgetType, WidgetType};
