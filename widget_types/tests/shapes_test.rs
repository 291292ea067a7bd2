use widget_types::{
    DataItem, Decimal, GeckOMeter, LineChart, LineChartSettings, PieItem,
    TextItem, WidgetPayload, WidgetRecord, WidgetSequence, WidgetType,
};

#[test]
fn data_item_fields_keep_declared_order() {
    let item = DataItem::new(123, "Text1");

    assert_eq!(
        serde_json::to_string(&item).unwrap(),
        r#"{"text":"Text1","value":123}"#
    );
}

#[test]
fn text_item_renames_kind_to_type() {
    let item = TextItem::info("blah");

    assert_eq!(
        serde_json::to_string(&item).unwrap(),
        r#"{"type":1,"text":"blah"}"#
    );
}

#[test]
fn pie_item_fields_keep_declared_order() {
    let item = PieItem::new(100, "May", "FFFF10AA");

    assert_eq!(
        serde_json::to_string(&item).unwrap(),
        r#"{"value":100,"label":"May","colour":"FFFF10AA"}"#
    );
}

#[test]
fn geckometer_renders_bounds_as_records() {
    let meter = GeckOMeter::new(
        23,
        DataItem::new(10, "Min visitors"),
        DataItem::new(30, "Max visitors"),
    );

    assert_eq!(
        serde_json::to_string(&meter).unwrap(),
        r#"{"item":23,"min":{"text":"Min visitors","value":10},"max":{"text":"Max visitors","value":30}}"#
    );
}

#[test]
fn line_chart_points_render_without_padding() {
    let chart = LineChart::new(
        [Decimal::new(1230, 2), Decimal::new(23, 1), Decimal::from(10)],
        LineChartSettings {
            axisx: vec!["Jun".to_string()],
            axisy: vec!["Min".to_string()],
            colour: "ff9900".to_string(),
        },
    );

    assert_eq!(
        serde_json::to_string(&chart).unwrap(),
        r#"{"item":[12.3,2.3,10],"settings":{"axisx":["Jun"],"axisy":["Min"],"colour":"ff9900"}}"#
    );
}

#[test]
fn conversions_pick_the_right_shape() {
    let payload = WidgetPayload::from(vec![DataItem::new(1, "a")]);
    assert!(matches!(
        payload,
        WidgetPayload::Sequence(WidgetSequence::Items(ref items)) if items.len() == 1
    ));

    let payload = WidgetPayload::from(LineChart::default());
    assert!(matches!(
        payload,
        WidgetPayload::Record(WidgetRecord::LineChart(_))
    ));
}

#[test]
fn widget_type_serializes_as_ordinal() {
    assert_eq!(
        serde_json::to_string(&WidgetType::ChartLine).unwrap(),
        "6"
    );
    assert_eq!(
        serde_json::from_str::<WidgetType>("2").unwrap(),
        WidgetType::RagColumnAndNumbers
    );
    assert!(serde_json::from_str::<WidgetType>("8").is_err());
}
