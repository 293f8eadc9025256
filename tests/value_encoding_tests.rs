//! Integration tests for literal encoding of argument and variable values.

use chrono::{FixedOffset, NaiveDate, TimeZone};
use graphql_query_builder::{
    encode_value, Argument, CustomScalar, Formatting, GraphQlId, InputObject, InputProperty,
    InputValue, OperationKind, QueryBuilderError, QueryNode, RenderOptions, Value, Variable,
};
use serde::Serialize;
use std::fmt;

#[derive(Clone, Copy, Serialize)]
enum ProductSortKeys {
    #[serde(rename = "CREATED_AT")]
    CreatedAt,
    #[serde(rename = "TITLE")]
    Title,
    Relevance,
}

impl InputValue for ProductSortKeys {
    fn graphql_type_name() -> Option<String> {
        Some("ProductSortKeys".to_string())
    }

    fn into_value(self) -> Result<Value, QueryBuilderError> {
        Value::enumeration(&self)
    }
}

#[derive(Serialize)]
enum Payload {
    #[allow(dead_code)]
    Tagged(u8),
}

struct PriceRangeInput {
    min: f64,
    max: Option<f64>,
}

impl InputObject for PriceRangeInput {
    fn property_values(&self) -> Vec<InputProperty> {
        vec![
            InputProperty::new("min", self.min),
            InputProperty::new("max", self.max),
        ]
    }
}

struct ProductFilterInput {
    title: String,
    price: PriceRangeInput,
    tags: Vec<String>,
}

impl InputObject for ProductFilterInput {
    fn property_values(&self) -> Vec<InputProperty> {
        vec![
            InputProperty::new("title", self.title.as_str()),
            InputProperty::new("price", Value::input_object(&self.price)),
            InputProperty::new("tags", self.tags.clone()),
        ]
    }
}

#[derive(Debug)]
struct Decimal(i64, u32);

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let divisor = 10_i64.pow(self.1);
        write!(f, "{}.{:0width$}", self.0 / divisor, self.0 % divisor, width = self.1 as usize)
    }
}

impl CustomScalar for Decimal {
    fn format_with_mask(&self, mask: &str) -> Option<String> {
        (mask == "cents").then(|| self.0.to_string())
    }

    fn supports_format_mask(&self) -> bool {
        true
    }
}

fn compact(value: &Value) -> Result<String, QueryBuilderError> {
    encode_value(value, None, Formatting::None, 0, 2)
}

// ============================================================================
// Scalar Encoding Tests
// ============================================================================

#[test]
fn test_primitive_literals() {
    assert_eq!(compact(&Value::Null).unwrap(), "null");
    assert_eq!(compact(&Value::from(true)).unwrap(), "true");
    assert_eq!(compact(&Value::from(-42)).unwrap(), "-42");
    assert_eq!(compact(&Value::from(u64::MAX)).unwrap(), "18446744073709551615");
    assert_eq!(compact(&Value::from(1.5)).unwrap(), "1.5");
    assert_eq!(compact(&Value::from(GraphQlId::new("7"))).unwrap(), "\"7\"");
}

#[test]
fn test_strings_are_escaped() {
    assert_eq!(compact(&Value::from("O'Brien")).unwrap(), "\"O'Brien\"");
    assert_eq!(
        compact(&Value::from("say \"hi\"\n\\")).unwrap(),
        r#""say \"hi\"\n\\""#
    );
}

#[test]
fn test_enum_uses_wire_alias() {
    let value = ProductSortKeys::CreatedAt.into_value().unwrap();
    assert_eq!(compact(&value).unwrap(), "CREATED_AT");

    let unaliased = ProductSortKeys::Relevance.into_value().unwrap();
    assert_eq!(compact(&unaliased).unwrap(), "Relevance");
}

#[test]
fn test_enum_with_data_cannot_be_resolved() {
    assert!(matches!(
        Value::enumeration(&Payload::Tagged(1)),
        Err(QueryBuilderError::EnumerationResolutionFailed { .. })
    ));
}

#[test]
fn test_temporal_values() {
    let offset = FixedOffset::east_opt(2 * 3600).unwrap();
    let timestamp = offset.with_ymd_and_hms(2024, 3, 9, 14, 30, 0).unwrap();
    assert_eq!(
        compact(&Value::from(timestamp)).unwrap(),
        "\"2024-03-09T14:30:00+02:00\""
    );

    let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
    assert_eq!(compact(&Value::from(date)).unwrap(), "\"2024-03-09\"");
}

// ============================================================================
// Format Mask Tests
// ============================================================================

#[test]
fn test_format_mask_on_dates_and_lists() {
    let dates = Value::from(vec![
        NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
        NaiveDate::from_ymd_opt(2024, 12, 31).unwrap(),
    ]);
    assert_eq!(
        encode_value(&dates, Some("%d.%m.%Y"), Formatting::None, 0, 2).unwrap(),
        r#"["02.01.2024","31.12.2024"]"#
    );
}

#[test]
fn test_format_mask_on_custom_scalar() {
    let price = Value::custom(Decimal(1999, 2));
    assert_eq!(compact(&price).unwrap(), "\"19.99\"");
    assert_eq!(
        encode_value(&price, Some("cents"), Formatting::None, 0, 2).unwrap(),
        "\"1999\""
    );
}

#[test]
fn test_format_mask_on_unsupported_value() {
    let result = encode_value(&Value::from("text"), Some("%Y"), Formatting::None, 0, 2);
    assert_eq!(
        result,
        Err(QueryBuilderError::FormattingUnsupported {
            value_type: "String".to_string(),
            mask: "%Y".to_string(),
        })
    );
}

#[test]
fn test_empty_format_mask_is_ignored() {
    assert_eq!(
        encode_value(&Value::from(3), Some(""), Formatting::None, 0, 2).unwrap(),
        "3"
    );
}

// ============================================================================
// List and Object Encoding Tests
// ============================================================================

#[test]
fn test_list_layouts() {
    let list = Value::from(vec![1, 2, 3]);
    assert_eq!(compact(&list).unwrap(), "[1,2,3]");
    assert_eq!(
        encode_value(&list, None, Formatting::Indented, 0, 2).unwrap(),
        "[\n  1,\n  2,\n  3]"
    );
    assert_eq!(compact(&Value::from(Vec::<i32>::new())).unwrap(), "[]");
}

#[test]
fn test_nested_input_object_compact() {
    let filter = ProductFilterInput {
        title: "Shirt".to_string(),
        price: PriceRangeInput {
            min: 10.5,
            max: None,
        },
        tags: vec!["summer".to_string(), "sale".to_string()],
    };

    assert_eq!(
        compact(&Value::input_object(&filter)).unwrap(),
        r#"{title:"Shirt",price:{min:10.5,max:null},tags:["summer","sale"]}"#
    );
}

#[test]
fn test_input_object_argument_indented() {
    let price = PriceRangeInput {
        min: 1.0,
        max: Some(5.25),
    };

    let mut products = QueryNode::of_type("Product");
    products.include_scalar_field("id", Vec::new());

    let mut root = QueryNode::operation(OperationKind::Query, "QueryRoot", None).unwrap();
    root.include_object_field(
        "products",
        products,
        vec![Argument::literal("price", Value::input_object(&price))],
    );

    assert_eq!(
        root.build(&RenderOptions::default()).unwrap(),
        "query {\n  products(price: {\n      min: 1\n      max: 5.25\n    }) {\n    id\n  }\n}"
    );
}

#[test]
fn test_input_object_property_bound_to_variable() {
    struct ByHandle<'a> {
        handle: &'a Variable,
    }

    impl InputObject for ByHandle<'_> {
        fn property_values(&self) -> Vec<InputProperty> {
            vec![InputProperty::variable("handle", self.handle)]
        }
    }

    let handle = Variable::non_null("handle", "red-shirt").unwrap();
    let value = Value::input_object(&ByHandle { handle: &handle });
    assert_eq!(compact(&value).unwrap(), "{handle:$handle}");
}

// ============================================================================
// Variable Type Inference Tests
// ============================================================================

#[test]
fn test_id_variable_declarations() {
    let id = GraphQlId::new("gid://shop/Product/1");

    let mut required = QueryNode::operation(OperationKind::Query, "QueryRoot", None).unwrap();
    required
        .add_variable(Variable::non_null("id", id.clone()).unwrap())
        .unwrap();
    required.include_scalar_field("shop", Vec::new());
    assert_eq!(
        required.build(&RenderOptions::default()).unwrap(),
        "query (\n  $id: ID!) {\n  shop\n}"
    );

    let mut optional = QueryNode::operation(OperationKind::Query, "QueryRoot", None).unwrap();
    optional.add_variable(Variable::new("id", id).unwrap()).unwrap();
    optional.include_scalar_field("shop", Vec::new());
    assert_eq!(
        optional.build(&RenderOptions::default()).unwrap(),
        "query (\n  $id: ID = \"gid://shop/Product/1\") {\n  shop\n}"
    );
}

#[test]
fn test_enum_and_list_variable_type_names() {
    let sort = Variable::new("sortKey", ProductSortKeys::Title).unwrap();
    assert_eq!(sort.type_name(), Some("ProductSortKeys"));

    let keys = Variable::non_null("keys", vec![ProductSortKeys::Title, ProductSortKeys::CreatedAt])
        .unwrap();
    assert_eq!(keys.type_name(), Some("[ProductSortKeys]!"));

    let mut root = QueryNode::operation(OperationKind::Query, "QueryRoot", None).unwrap();
    root.add_variable(sort).unwrap();
    root.include_scalar_field("shop", Vec::new());
    assert_eq!(
        root.build(&RenderOptions::compact()).unwrap(),
        "query($sortKey:ProductSortKeys=TITLE){shop}"
    );
}

#[test]
fn test_explicit_type_name_for_temporal_variable() {
    let since = Variable::with_type_name(
        "since",
        "DateTime",
        NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
    )
    .unwrap()
    .with_format_mask("%Y/%m/%d")
    .unwrap();

    let mut root = QueryNode::operation(OperationKind::Query, "QueryRoot", None).unwrap();
    root.add_variable(since).unwrap();
    root.include_scalar_field("shop", Vec::new());
    assert_eq!(
        root.build(&RenderOptions::compact()).unwrap(),
        r#"query($since:DateTime="2024/05/01"){shop}"#
    );
}
