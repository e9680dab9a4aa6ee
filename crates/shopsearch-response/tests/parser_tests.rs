use shopsearch_core::filter::{Bounds, FilterNode, ItemsKind, SelectMode};
use shopsearch_core::response::{DidYouMeanKind, ProductRef};
use shopsearch_core::traits::ResponseParser;
use shopsearch_response::{ParseError, XmlResponseParser};

const FULL: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<searchResult>
  <query>
    <limit first="0" count="24"/>
    <queryString type="corrected">green tea</queryString>
    <originalQuery>gren tea</originalQuery>
  </query>
  <promotion image="https://cdn.example.com/promo.png" link="https://shop.example.com/sale"/>
  <results>
    <count>2</count>
  </results>
  <products>
    <product id="SW10001" relevance="12.5"/>
    <product id="SW10002"/>
    <product id=""/>
  </products>
  <filters>
    <filter>
      <name>vendor</name>
      <display>Manufacturer</display>
      <select>multiselect</select>
      <type>select</type>
      <items>
        <item><name>Acme</name><frequency>3</frequency></item>
        <item><name>Globex</name></item>
      </items>
    </filter>
    <filter>
      <name>price</name>
      <display>Price</display>
      <type>range-slider</type>
      <attributes>
        <selectedRange><min>4.5</min><max>20</max></selectedRange>
        <totalRange><min>0.99</min><max>99</max></totalRange>
        <stepSize>0.5</stepSize>
        <unit>EUR</unit>
      </attributes>
    </filter>
    <filter>
      <name>cat</name>
      <select>single</select>
      <type>label</type>
      <items>
        <item><name>Food</name><frequency>9</frequency>
          <items><item><name>Tea</name><frequency>4</frequency></item></items>
        </item>
      </items>
    </filter>
    <filter>
      <name>color</name>
      <type>color</type>
      <items><item><name>Red</name><color>#ff0000</color><image>https://cdn.example.com/red.png</image></item></items>
    </filter>
    <filter>
      <display>Nameless</display>
    </filter>
    <filter>
      <name>material</name>
      <type>swatch-grid</type>
    </filter>
  </filters>
</searchResult>"#;

#[test]
fn parses_counts_products_and_filters() {
    let parsed = XmlResponseParser::new().parse(FULL).expect("parse");
    assert_eq!(parsed.total_count, 2);
    let ids: Vec<&str> = parsed.products.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["SW10001", "SW10002"]);
    assert_eq!(parsed.products[0], ProductRef::new("SW10001"));
    assert!(parsed.landing_page.is_none());
    assert!(!parsed.is_empty());

    let names: Vec<&str> = parsed.filters.iter().map(FilterNode::name).collect();
    assert_eq!(names, vec!["vendor", "price", "cat", "color", "material"]);
}

#[test]
fn item_filters_keep_type_select_and_nesting() {
    let parsed = XmlResponseParser::new().parse(FULL).expect("parse");

    let FilterNode::Items(vendor) = &parsed.filters[0] else { panic!("vendor should be items") };
    assert_eq!(vendor.kind, ItemsKind::Select);
    assert_eq!(vendor.select, SelectMode::Multiple);
    assert_eq!(vendor.display.as_deref(), Some("Manufacturer"));
    assert_eq!(vendor.items[0].frequency, Some(3));
    assert_eq!(vendor.items[1].frequency, None);

    let FilterNode::Items(cat) = &parsed.filters[2] else { panic!("cat should be items") };
    assert_eq!(cat.select, SelectMode::Single);
    assert_eq!(cat.items[0].items[0].name, "Tea");

    let FilterNode::Items(color) = &parsed.filters[3] else { panic!("color should be items") };
    assert_eq!(color.kind, ItemsKind::Color);
    assert_eq!(color.items[0].color.as_deref(), Some("#ff0000"));

    let FilterNode::Items(material) = &parsed.filters[4] else { panic!("material should be items") };
    assert_eq!(material.kind, ItemsKind::Unknown("swatch-grid".into()));
    assert!(material.items.is_empty());
}

#[test]
fn range_filters_read_attributes() {
    let parsed = XmlResponseParser::new().parse(FULL).expect("parse");
    let FilterNode::Range(price) = &parsed.filters[1] else { panic!("price should be a range") };
    assert_eq!(price.total, Bounds { min: 0.99, max: 99.0 });
    assert_eq!(price.selected, Bounds { min: 4.5, max: 20.0 });
    assert_eq!(price.step_size, Some(0.5));
    assert_eq!(price.unit.as_deref(), Some("EUR"));
}

#[test]
fn promotion_and_corrected_query_are_extracted() {
    let parsed = XmlResponseParser::new().parse(FULL).expect("parse");
    let promotion = parsed.promotion.expect("promotion");
    assert_eq!(promotion.link, "https://shop.example.com/sale");

    let sdym = parsed.smart_did_you_mean.expect("smart did-you-mean");
    assert_eq!(sdym.kind, DidYouMeanKind::Corrected);
    assert_eq!(sdym.alternative_query, "green tea");
    assert_eq!(sdym.original_query.as_deref(), Some("gren tea"));
}

#[test]
fn did_you_mean_query_takes_precedence() {
    let raw = r#"<searchResult>
        <query><queryString>gren</queryString><didYouMeanQuery>green</didYouMeanQuery></query>
        <results><count>0</count></results>
    </searchResult>"#;
    let sdym = XmlResponseParser::new().parse(raw).expect("parse").smart_did_you_mean.expect("sdym");
    assert_eq!(sdym.kind, DidYouMeanKind::DidYouMean);
    assert_eq!(sdym.alternative_query, "green");
    assert_eq!(sdym.original_query.as_deref(), Some("gren"));
}

#[test]
fn plain_query_string_has_no_suggestion() {
    let raw = r#"<searchResult><query><queryString>tea</queryString></query></searchResult>"#;
    assert!(XmlResponseParser::new().parse(raw).expect("parse").smart_did_you_mean.is_none());
}

#[test]
fn landing_page_is_captured() {
    let raw = r#"<searchResult><landingPage link="https://shop.example.com/imprint"/><results><count>0</count></results></searchResult>"#;
    let parsed = XmlResponseParser::new().parse(raw).expect("parse");
    assert_eq!(parsed.landing_page.as_deref(), Some("https://shop.example.com/imprint"));
    assert!(!parsed.is_empty());
}

#[test]
fn missing_sections_degrade_to_empty() {
    let parsed = XmlResponseParser::new().parse("<searchResult/>").expect("parse");
    assert_eq!(parsed.total_count, 0);
    assert!(parsed.products.is_empty());
    assert!(parsed.filters.is_empty());
    assert!(parsed.is_empty());

    let garbled = r#"<searchResult><results><count>many</count></results></searchResult>"#;
    assert_eq!(XmlResponseParser::new().parse(garbled).expect("parse").total_count, 0);
}

#[test]
fn malformed_documents_are_errors() {
    let parser = XmlResponseParser::new();
    assert!(matches!(parser.parse_document("<searchResult>"), Err(ParseError::Xml(_))));
    assert!(matches!(parser.parse_document("<html/>"), Err(ParseError::UnexpectedRoot(ref r)) if r == "html"));
    assert!(parser.parse("").is_err());
}
