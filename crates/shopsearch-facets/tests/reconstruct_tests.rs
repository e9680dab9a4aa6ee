use shopsearch_core::facet_result::{PartialFacetResult, TreeItem, ValueListItem};
use shopsearch_core::filter::{Bounds, FilterItem, FilterNode, ItemsFilter, ItemsKind, RangeFilter, SelectMode, UNBOUNDED_MAX};
use shopsearch_core::types::{Condition, ConditionValue, Facet, FacetMode, QuerySpecification};
use shopsearch_facets::FacetReconstructor;

fn items_node(name: &str, kind: ItemsKind, items: Vec<FilterItem>) -> FilterNode {
    FilterNode::Items(ItemsFilter { name: name.to_string(), display: None, kind, select: SelectMode::Multiple, items })
}

fn counted(name: &str, frequency: u32) -> FilterItem {
    FilterItem { frequency: Some(frequency), ..FilterItem::named(name) }
}

fn vendor_facet() -> Facet {
    Facet::product_attribute("vendor", FacetMode::ValueList, "vendor", "Manufacturer")
}

fn vendor_condition(values: &[&str]) -> Condition {
    Condition::ProductAttribute {
        field: "vendor".into(),
        value: ConditionValue::List(values.iter().map(|v| v.to_string()).collect()),
    }
}

#[test]
fn vendor_selection_marks_matching_item_active() {
    let mut spec = QuerySpecification::new();
    spec.add_condition(vendor_condition(&["Acme"])).add_facet(vendor_facet());
    let tree = vec![items_node("vendor", ItemsKind::Select, vec![counted("Acme", 3), counted("Globex", 5)])];

    let facets = FacetReconstructor::new().reconstruct(&spec, &tree);
    assert_eq!(facets.len(), 1);
    let PartialFacetResult::ValueList(result) = &facets[0] else { panic!("expected value list") };
    assert_eq!(result.facet_name, "product_attribute_vendor");
    assert_eq!(result.label, "Manufacturer");
    assert!(result.active);
    assert_eq!(
        result.items,
        vec![
            ValueListItem { id: "Acme".into(), label: "Acme".into(), active: true, frequency: Some(3) },
            ValueListItem { id: "Globex".into(), label: "Globex".into(), active: false, frequency: Some(5) },
        ]
    );
}

#[test]
fn unselected_label_vendor_lists_its_single_item() {
    let mut spec = QuerySpecification::new();
    spec.add_facet(vendor_facet());
    let tree = vec![items_node("vendor", ItemsKind::Label, vec![FilterItem::named("Acme")])];

    let facets = FacetReconstructor::new().reconstruct(&spec, &tree);
    let [PartialFacetResult::ValueList(result)] = facets.as_slice() else { panic!("expected one value list") };
    assert!(!result.active);
    assert_eq!(
        result.items,
        vec![ValueListItem { id: "Acme".into(), label: "Acme".into(), active: false, frequency: None }]
    );
}

#[test]
fn missing_price_filter_is_synthesized_from_the_condition() {
    let mut spec = QuerySpecification::new();
    spec.add_condition(Condition::PriceRange { min: 10.0, max: None }).add_facet(Facet::price("Price"));

    let facets = FacetReconstructor::new().reconstruct(&spec, &[]);
    let [PartialFacetResult::Range(range)] = facets.as_slice() else { panic!("expected one range facet") };
    assert_eq!((range.min, range.max), (10.0, UNBOUNDED_MAX));
    assert_eq!((range.active_min, range.active_max), (10.0, UNBOUNDED_MAX));
    assert!(range.active);
    assert_eq!((range.min_field_name.as_str(), range.max_field_name.as_str()), ("min", "max"));
}

#[test]
fn unselected_missing_facets_are_skipped() {
    let mut spec = QuerySpecification::new();
    spec.add_facet(vendor_facet()).add_facet(Facet::price("Price"));
    assert!(FacetReconstructor::new().reconstruct(&spec, &[]).is_empty());
}

#[test]
fn base_conditions_do_not_trigger_synthesis() {
    let mut spec = QuerySpecification::new();
    spec.add_base_condition(vendor_condition(&["Acme"])).add_facet(vendor_facet());
    assert!(FacetReconstructor::new().reconstruct(&spec, &[]).is_empty());
}

#[test]
fn range_mode_facet_is_synthesized_as_range() {
    let facet = Facet::product_attribute("weight", FacetMode::RangeResult, "weight", "Weight");
    let mut spec = QuerySpecification::new();
    spec.add_condition(Condition::ProductAttribute {
        field: "weight".into(),
        value: ConditionValue::Range { min: Some(2.0), max: None },
    })
    .add_facet(facet);

    let facets = FacetReconstructor::new().reconstruct(&spec, &[]);
    let [PartialFacetResult::Range(range)] = facets.as_slice() else { panic!("expected one range facet") };
    assert_eq!((range.active_min, range.active_max), (2.0, UNBOUNDED_MAX));
    assert_eq!(range.min_field_name, "minweight");
    assert_eq!(range.max_field_name, "maxweight");
}

#[test]
fn selected_list_facet_missing_from_response_keeps_its_selection() {
    let mut spec = QuerySpecification::new();
    spec.add_condition(vendor_condition(&["Acme"])).add_facet(vendor_facet());

    let facets = FacetReconstructor::new().reconstruct(&spec, &[]);
    let [PartialFacetResult::ValueList(result)] = facets.as_slice() else { panic!("expected one value list") };
    assert_eq!(result.items.len(), 1);
    assert!(result.items[0].active);
}

#[test]
fn output_follows_requested_order_and_ignores_extra_nodes() {
    let mut spec = QuerySpecification::new();
    spec.add_facet(Facet::price("Price")).add_facet(vendor_facet());
    let tree = vec![
        items_node("color", ItemsKind::Color, vec![FilterItem::named("Red")]),
        items_node("vendor", ItemsKind::Label, vec![FilterItem::named("Acme")]),
        FilterNode::Range(RangeFilter {
            name: "price".into(),
            display: Some("Preis".into()),
            total: Bounds { min: 1.0, max: 99.0 },
            selected: Bounds { min: 1.0, max: 99.0 },
            step_size: Some(0.5),
            unit: Some("EUR".into()),
        }),
    ];

    let facets = FacetReconstructor::new().reconstruct(&spec, &tree);
    let names: Vec<&str> = facets.iter().map(PartialFacetResult::facet_name).collect();
    assert_eq!(names, vec!["price", "product_attribute_vendor"]);
    let PartialFacetResult::Range(range) = &facets[0] else { panic!("expected range") };
    assert_eq!(range.label, "Preis");
    assert!(!range.active);
    assert_eq!(range.unit.as_deref(), Some("EUR"));
}

#[test]
fn reconstruction_is_repeatable() {
    let mut spec = QuerySpecification::new();
    spec.add_condition(Condition::PriceRange { min: 5.0, max: Some(20.0) })
        .add_condition(vendor_condition(&["Globex"]))
        .add_facet(Facet::price("Price"))
        .add_facet(vendor_facet());
    let tree = vec![items_node("vendor", ItemsKind::Select, vec![counted("Acme", 1), counted("Globex", 2)])];

    let reconstructor = FacetReconstructor::new();
    let first = reconstructor.reconstruct(&spec, &tree);
    let second = reconstructor.reconstruct(&spec, &tree);
    assert_eq!(first, second);
    assert!(first.len() <= spec.facets().len());
}

#[test]
fn empty_unselected_list_is_omitted() {
    let mut spec = QuerySpecification::new();
    spec.add_facet(vendor_facet());
    let tree = vec![items_node("vendor", ItemsKind::Label, Vec::new())];
    assert!(FacetReconstructor::new().reconstruct(&spec, &tree).is_empty());
}

#[test]
fn radio_list_mode_is_respected() {
    let mut spec = QuerySpecification::new();
    spec.add_facet(Facet::product_attribute("size", FacetMode::RadioList, "size", "Size"));
    let tree = vec![items_node("size", ItemsKind::Select, vec![FilterItem::named("M")])];
    let facets = FacetReconstructor::new().reconstruct(&spec, &tree);
    assert!(matches!(facets.as_slice(), [PartialFacetResult::RadioList(_)]));
}

#[test]
fn color_and_image_filters_become_media_lists() {
    let mut spec = QuerySpecification::new();
    spec.add_condition(Condition::ProductAttribute { field: "color".into(), value: ConditionValue::Scalar("Red".into()) })
        .add_facet(Facet::product_attribute("color", FacetMode::ValueList, "color", "Color"))
        .add_facet(Facet::product_attribute("pattern", FacetMode::ValueList, "pattern", "Pattern"));
    let tree = vec![
        items_node(
            "color",
            ItemsKind::Color,
            vec![
                FilterItem { color: Some("#ff0000".into()), ..FilterItem::named("Red") },
                FilterItem { color: Some("#0000ff".into()), ..FilterItem::named("Blue") },
            ],
        ),
        items_node(
            "pattern",
            ItemsKind::Image,
            vec![FilterItem { image: Some("https://cdn.example.com/dots.png".into()), ..FilterItem::named("Dots") }],
        ),
    ];

    let facets = FacetReconstructor::new().reconstruct(&spec, &tree);
    let [PartialFacetResult::MediaList(color), PartialFacetResult::MediaList(pattern)] = facets.as_slice() else {
        panic!("expected two media lists")
    };
    assert!(color.active);
    assert_eq!(color.items[0].color.as_deref(), Some("#ff0000"));
    assert!(color.items[0].active && !color.items[1].active);
    assert!(!pattern.active);
    assert_eq!(pattern.items[0].image.as_deref(), Some("https://cdn.example.com/dots.png"));
}

#[test]
fn category_filter_becomes_a_tree_with_joined_ids() {
    let facet = Facet {
        name: "category".into(),
        field: "cat".into(),
        mode: FacetMode::ValueList,
        label: "Categories".into(),
        form_field_name: "categoryFilter".into(),
    };
    let mut spec = QuerySpecification::new();
    spec.add_condition(Condition::Category { paths: vec![vec!["Food".into(), "Tea".into()]] }).add_facet(facet);
    let tree = vec![items_node(
        "cat",
        ItemsKind::Select,
        vec![FilterItem { items: vec![counted("Tea", 4)], ..counted("Food", 9) }],
    )];

    let facets = FacetReconstructor::new().reconstruct(&spec, &tree);
    let [PartialFacetResult::Tree(result)] = facets.as_slice() else { panic!("expected a tree") };
    assert!(result.active);
    assert_eq!(
        result.items,
        vec![TreeItem {
            id: "Food".into(),
            label: "Food".into(),
            active: false,
            frequency: Some(9),
            children: vec![TreeItem {
                id: "Food_Tea".into(),
                label: "Tea".into(),
                active: true,
                frequency: Some(4),
                children: Vec::new(),
            }],
        }]
    );
}

#[test]
fn filter_tree_reads_from_json() {
    let raw = r#"[{"node": "range", "name": "price", "display": null,
                   "total": {"min": 0.0, "max": 50.0}, "selected": {"min": 5.0, "max": 50.0},
                   "step_size": null, "unit": null}]"#;
    let tree: Vec<FilterNode> = serde_json::from_str(raw).expect("tree json");
    let mut spec = QuerySpecification::new();
    spec.add_facet(Facet::price("Price"));
    let facets = FacetReconstructor::new().reconstruct(&spec, &tree);
    let [PartialFacetResult::Range(range)] = facets.as_slice() else { panic!("expected range") };
    assert_eq!(range.active_min, 5.0);
}
