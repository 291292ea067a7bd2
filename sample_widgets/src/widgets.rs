use gecko_service::ResolveResult;
use widget_types::{
    DataItem, Decimal, GeckOMeter, LineChart, LineChartSettings, PieItem,
    TextItem, WidgetPayload, WidgetType,
};

/// Line chart points, in tenths.
const LINE_POINTS: [i64; 22] = [
    123, 23, 100, 150, 150, 130, 121, 98, 123, 23, 100, 120, 150, 130, 121,
    98, 110, 160, 150, 130, 100, 70,
];

/// Fixed sample data for every widget type.
pub fn sample_payload(_api_key: &str, widget_type: WidgetType) -> ResolveResult {
    let payload: WidgetPayload = match widget_type {
        WidgetType::NumberAndSecondaryStat => {
            vec![DataItem::new(123, ""), DataItem::new(238, "")].into()
        }
        WidgetType::RagColumnAndNumbers | WidgetType::RagNumbersOnly => vec![
            DataItem::new(123, "Text1"),
            DataItem::new(238, "Text2"),
            DataItem::new(456, "Text3"),
        ]
        .into(),
        WidgetType::Text => vec![
            TextItem::info("This is line 1"),
            TextItem::alert("This is line 2"),
            TextItem::new(3, "This is line 3"),
        ]
        .into(),
        WidgetType::ChartPie => vec![
            PieItem::new(100, "May", "FFFF10AA"),
            PieItem::new(160, "June", "FFAA0AAA"),
            PieItem::new(300, "July", "FF5505AA"),
            PieItem::new(140, "August", "FF0000AA"),
        ]
        .into(),
        WidgetType::ChartLine => LineChart::new(
            LINE_POINTS.iter().map(|&tenths| Decimal::new(tenths, 1)),
            LineChartSettings {
                axisx: vec!["Jun".into(), "Jul".into(), "Aug".into()],
                axisy: vec!["Min".into(), "Max".into()],
                colour: "ff9900".into(),
            },
        )
        .into(),
        WidgetType::GeckOMeter => GeckOMeter::new(
            23,
            DataItem::new(10, "Min visitors"),
            DataItem::new(30, "Max visitors"),
        )
        .into(),
    };

    Ok(Some(payload))
}

/// Two numbers, the first labelled with the caller's API key.
pub fn echo_api_key(api_key: &str, _widget_type: WidgetType) -> ResolveResult {
    Ok(Some(
        vec![DataItem::new(123, api_key), DataItem::new(238, "")].into(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use widget_types::{WidgetRecord, WidgetSequence};

    #[test]
    fn test_every_widget_type_has_sample_data() {
        for widget_type in WidgetType::ALL {
            let payload = sample_payload("", widget_type).unwrap();
            assert!(payload.is_some(), "{widget_type}");
        }
    }

    #[test]
    fn test_shapes_match_widget_types() {
        let payload = sample_payload("", WidgetType::ChartLine).unwrap();
        assert!(matches!(
            payload,
            Some(WidgetPayload::Record(WidgetRecord::LineChart(ref chart)))
                if chart.item.len() == LINE_POINTS.len()
        ));

        let payload = sample_payload("", WidgetType::ChartPie).unwrap();
        assert!(matches!(
            payload,
            Some(WidgetPayload::Sequence(WidgetSequence::Pie(ref items)))
                if items.len() == 4
        ));
    }

    #[test]
    fn test_text_lines_use_one_icon_each() {
        let payload = sample_payload("", WidgetType::Text).unwrap();

        let Some(WidgetPayload::Sequence(WidgetSequence::Text(lines))) =
            payload
        else {
            panic!("text widget must be a list of lines");
        };
        let kinds: Vec<i32> = lines.iter().map(|line| line.kind).collect();
        assert_eq!(kinds, [1, 2, 3]);
    }

    #[test]
    fn test_echo_uses_the_key() {
        let payload = echo_api_key("abc", WidgetType::Text).unwrap();

        assert!(matches!(
            payload,
            Some(WidgetPayload::Sequence(WidgetSequence::Items(ref items)))
                if items[0].text == "abc"
        ));
    }
}
