use anyhow::{Context, Result};
use googletest::prelude::*;
use map_macro::hashbrown::hash_map;
use serde_yaml_ng::Value;
use test_casing::{TestCases, cases, test_casing};

use super::*;
use crate::matcher::Criteria;

fn pointer(height: f32, names: &[&str], column_widths: &[f32]) -> PointerSpec {
    PointerSpec {
        criteria: Criteria(hash_map! { "height".to_owned() => height }),
        headers: Headers {
            names: names.iter().map(|&name| name.to_owned()).collect(),
            column_widths: column_widths.to_vec(),
        },
        offset: Offset { x: 0.0, y: 2.0 },
        dimensions: Dimensions {
            width: 100.0,
            height,
        },
        multiple: None,
        tolerance: None,
    }
}

const CASES: TestCases<(&'static str, ObjectSpec)> = cases! {
    [
        (
            r#"
type: text
name: report_number
page_number: 0
offset: {x: 10.0, y: 20.0}
dimensions: {width: 100, height: 12}
            "#,
            ObjectSpec::Text(TextObject {
                name: "report_number".into(),
                page_number: 0,
                offset: Offset { x: 10.0, y: 20.0 },
                dimensions: Dimensions { width: 100.0, height: 12.0 },
                patterns: None,
            }),
        ),
        (
            r#"
type: text
name: header
page_number: 1
offset: {x: 0, y: 0}
dimensions: {width: 50, height: 10}
patterns:
  - target: number
    regex: 'No\. (\d+)'
  - target: date
    regex: '(\d{2}\.\d{2}\.\d{4})'
            "#,
            ObjectSpec::Text(TextObject {
                name: "header".into(),
                page_number: 1,
                offset: Offset { x: 0.0, y: 0.0 },
                dimensions: Dimensions { width: 50.0, height: 10.0 },
                patterns: Some(vec![
                    Pattern { target: "number".into(), regex: r"No\. (\d+)".into() },
                    Pattern { target: "date".into(), regex: r"(\d{2}\.\d{2}\.\d{4})".into() },
                ]),
            }),
        ),
        (
            r#"
type: table
name: stoppages
method: by_pointers
blocks_pointer:
  criteria: {height: 15.0}
  offset: {x: 0.0, y: 2.0}
  dimensions: {width: 100.0, height: 15.0}
  headers:
    names: [company]
    column_widths: [100.0]
row_pointer:
  criteria: {height: 20.0}
  offset: {x: 0.0, y: 2.0}
  dimensions: {width: 100.0, height: 20.0}
  headers:
    names: [start, end]
    column_widths: [40.0, 60.0]
            "#,
            ObjectSpec::Table(TableObject {
                name: "stoppages".into(),
                method: TableMethod::ByPointers,
                blocks_pointer: pointer(15.0, &["company"], &[100.0]),
                row_pointer: pointer(20.0, &["start", "end"], &[40.0, 60.0]),
            }),
        ),
        (
            r#"
type: table
name: stoppages
method: by_guesswork
blocks_pointer:
  criteria: {height: 15.0}
  offset: {x: 0.0, y: 2.0}
  dimensions: {width: 100.0, height: 15.0}
  multiple: false
  tolerance: 0.5
  headers:
    names: [company]
    column_widths: [100.0]
row_pointer:
  criteria: {height: 20.0}
  offset: {x: 0.0, y: 2.0}
  dimensions: {width: 100.0, height: 20.0}
  headers:
    names: [start, end]
    column_widths: [40.0, 60.0]
            "#,
            ObjectSpec::Table(TableObject {
                name: "stoppages".into(),
                method: TableMethod::Other("by_guesswork".into()),
                blocks_pointer: PointerSpec {
                    multiple: Some(false),
                    tolerance: Some(0.5),
                    ..pointer(15.0, &["company"], &[100.0])
                },
                row_pointer: pointer(20.0, &["start", "end"], &[40.0, 60.0]),
            }),
        ),
        (
            r#"
type: barcode
name: tracking
symbology: qr
            "#,
            ObjectSpec::Unknown(UnknownObject {
                kind: "barcode".into(),
                params: [("name", "tracking"), ("symbology", "qr")]
                    .into_iter()
                    .map(|(key, value)| (Value::from(key), Value::from(value)))
                    .collect(),
            }),
        ),
    ]
};

#[test]
fn test_cases_len() {
    assert_eq!(5, CASES.into_iter().count());
}

#[test_casing(5, CASES)]
#[gtest]
fn test_reserialise_case(input: &'static str, expected: ObjectSpec) -> Result<()> {
    let got_1: ObjectSpec =
        serde_yaml_ng::from_str(input).context("deserialising original input")?;
    expect_that!(got_1, eq(&expected));

    let reserialised = serde_yaml_ng::to_string(&got_1).context("serialising got_1")?;
    let got_2: ObjectSpec =
        serde_yaml_ng::from_str(&reserialised).context("deserialising reserialised data")?;
    expect_that!(got_2, eq(&expected));

    Ok(())
}

#[gtest]
fn test_kind_and_names() -> Result<()> {
    let config = StructuralConfig::from_yaml_str(
        r#"
pdf_structure:
  objects:
    - type: text
      name: title
      page_number: 0
      offset: {x: 0, y: 0}
      dimensions: {width: 1, height: 1}
    - type: chart
      name: trend
"#,
    )?;

    expect_that!(config.name, none());
    expect_that!(
        config.objects.iter().map(ObjectSpec::kind).collect::<Vec<_>>(),
        elements_are![eq(&ObjectKind::Text), eq(&ObjectKind::Unknown)]
    );
    expect_that!(
        config.objects.iter().map(ObjectSpec::name).collect::<Vec<_>>(),
        elements_are![eq(&Some("title")), eq(&Some("trend"))]
    );
    expect_that!(config.objects[1].type_name(), eq("chart"));
    Ok(())
}

#[gtest]
fn test_malformed_known_object_reports_the_real_problem() {
    let result = StructuralConfig::from_yaml_str(
        r#"
pdf_structure:
  objects:
    - type: text
      name: title
      offset: {x: 0, y: 0}
      dimensions: {width: 1, height: 1}
"#,
    );

    expect_that!(
        result.map_err(|err| format!("{:#}", err)),
        err(contains_substring("page_number"))
    );
}

#[gtest]
fn test_missing_pdf_structure_is_an_error() {
    expect_that!(
        StructuralConfig::from_yaml_str("objects: []"),
        err(displays_as(contains_substring("parsing structural configuration")))
    );
}

#[gtest]
fn test_pointer_tolerance_defaults() {
    let mut spec = pointer(1.0, &[], &[]);
    expect_that!(spec.tolerance(), eq(crate::matcher::DEFAULT_TOLERANCE));
    spec.tolerance = Some(0.25);
    expect_that!(spec.tolerance(), eq(0.25));
}

#[gtest]
fn test_object_conversions() -> Result<()> {
    let object: ObjectSpec = TextObject {
        name: "title".into(),
        page_number: 0,
        offset: Offset::default(),
        dimensions: Dimensions::default(),
        patterns: None,
    }
    .into();

    let text: &TextObject = (&object).try_into()?;
    expect_that!(text.name, eq("title"));

    let table: Result<&TableObject> = (&object).try_into();
    expect_that!(table, err(displays_as(starts_with("bug: object is not of type Table"))));
    Ok(())
}

#[gtest]
fn test_lift_report_config_loads() -> Result<()> {
    let config = StructuralConfig::from_yaml_str(include_str!(
        "../../../configs/lift_report_v1.yml"
    ))?;

    expect_that!(config.name.as_deref(), some(eq("lift_report_v1")));
    expect_that!(
        config.objects.iter().map(ObjectSpec::kind).collect::<Vec<_>>(),
        elements_are![eq(&ObjectKind::Text), eq(&ObjectKind::Table)]
    );

    let table: &TableObject = (&config.objects[1]).try_into()?;
    expect_that!(table.method, eq(&TableMethod::ByPointers));
    let row_width: f32 = table.row_pointer.headers.column_widths.iter().sum();
    expect_that!(row_width, eq(table.row_pointer.dimensions.width));

    let reserialised = StructuralConfig::from_yaml_str(&config.to_yaml_string()?)?;
    expect_that!(reserialised, eq(&config));
    Ok(())
}
