//! Records of the lift downtime report layout (`configs/lift_report_v1.yml`).


use anyhow::{Context, Result};
use engine::{ExtractedValue, ExtractionResult, TableBlock, result::FieldMap};
use serde::{Deserialize, Serialize};

use crate::{
    ReportError,
    cleanup::{clean_text, convert_time},
};

/// Key of the report creation time.
pub const REPORT_TIME: &str = "report_time";
/// Key of the table of stoppages, one block per lift company.
pub const STOPPAGES: &str = "stoppages_data";

pub const COMPANY_NAME: &str = "company_name";
pub const START_TIME: &str = "start_time";
pub const END_TIME: &str = "end_time";
pub const DOWNTIME_HOURS: &str = "downtime_hours";
pub const FACTORY_NUMBER: &str = "factory_number";
pub const SERIAL_NUMBER: &str = "serial_number";

/// A single stoppage of a lift.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct LiftReport {
    pub start_time: String,
    /// Empty while the lift is still stopped.
    pub end_time: String,
    pub downtime_hours: i64,
    pub factory_number: String,
    pub reg_number: String,
}

/// The stoppages of the lifts serviced by one company.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct LiftCompanyReport {
    pub company_name: String,
    pub reports: Vec<LiftReport>,
}

/// Everything converted from one lift downtime report.
#[derive(Clone, Debug, PartialEq)]
pub struct LiftReports {
    pub report_time: String,
    pub companies: Vec<LiftCompanyReport>,
}

/// Converts the extraction result of a lift downtime report into typed records.
///
/// Blocks and rows keep their order in the document.
pub fn convert_to_reports(result: &ExtractionResult) -> Result<LiftReports> {
    let report_time = result
        .get(REPORT_TIME)
        .and_then(ExtractedValue::as_text)
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .ok_or_else(|| ReportError::MissingField(REPORT_TIME.to_owned()))?;
    let report_time = convert_time(report_time)?;

    let blocks = result
        .get(STOPPAGES)
        .and_then(ExtractedValue::as_table)
        .ok_or_else(|| ReportError::MissingField(STOPPAGES.to_owned()))?;
    let companies = blocks
        .iter()
        .enumerate()
        .map(|(index, block)| {
            convert_block(block).with_context(|| format!("in stoppages block #{index}"))
        })
        .collect::<Result<Vec<_>>>()?;

    log::debug!(
        "converted {} stoppages for {} companies",
        companies
            .iter()
            .map(|company| company.reports.len())
            .sum::<usize>(),
        companies.len(),
    );
    Ok(LiftReports {
        report_time,
        companies,
    })
}

fn convert_block(block: &TableBlock) -> Result<LiftCompanyReport> {
    let company_name = block
        .block
        .get(COMPANY_NAME)
        .ok_or_else(|| ReportError::MissingField(COMPANY_NAME.to_owned()))?;
    let reports = block
        .rows
        .iter()
        .enumerate()
        .map(|(index, row)| convert_row(row).with_context(|| format!("in row #{index}")))
        .collect::<Result<Vec<_>>>()?;
    Ok(LiftCompanyReport {
        company_name: clean_text(company_name),
        reports,
    })
}

fn convert_row(row: &FieldMap) -> Result<LiftReport, ReportError> {
    let start_time = required(row, START_TIME)?;
    let downtime_hours = required(row, DOWNTIME_HOURS)?;
    let factory_number = required(row, FACTORY_NUMBER)?;
    let reg_number = required(row, SERIAL_NUMBER)?;

    let end_time = match row.get(END_TIME).map(|value| value.trim()) {
        None | Some("") => String::new(),
        Some(value) => convert_time(value)?,
    };

    Ok(LiftReport {
        start_time: convert_time(start_time)?,
        end_time,
        downtime_hours: downtime_hours
            .parse()
            .map_err(|source| ReportError::BadDowntime {
                value: downtime_hours.to_owned(),
                source,
            })?,
        factory_number: factory_number.to_owned(),
        reg_number: reg_number.to_owned(),
    })
}

fn required<'a>(row: &'a FieldMap, name: &str) -> Result<&'a str, ReportError> {
    row.get(name)
        .map(|value| value.trim())
        .filter(|value| !value.is_empty())
        .ok_or_else(|| ReportError::MissingField(name.to_owned()))
}
