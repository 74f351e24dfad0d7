//! The document sent onward once a report has been processed.

use std::io::Write;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use sha::utils::DigestExt;

use crate::{LiftCompanyReport, LiftReports};

type HashAlgo = sha::sha256::Sha256;

/// A converted lift downtime report, identified by its source file.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct ProcessedReport {
    pub filename: String,
    /// Lowercase hex SHA-256 of the source file content.
    pub file_sha256: String,
    pub report_time: String,
    pub companies: Vec<LiftCompanyReport>,
}

impl ProcessedReport {
    pub fn new(filename: impl Into<String>, content: &[u8], reports: LiftReports) -> Result<Self> {
        Ok(Self {
            filename: filename.into(),
            file_sha256: sha256_hex(content)?,
            report_time: reports.report_time,
            companies: reports.companies,
        })
    }
}

/// Returns the lowercase hex SHA-256 digest of `content`.
pub fn sha256_hex(content: &[u8]) -> Result<String> {
    let mut hash = HashAlgo::default();
    hash.write_all(content)
        .with_context(|| "hashing document content")?;
    hash.flush().with_context(|| "flushing hash")?;
    Ok(hex::encode(hash.to_bytes()))
}

#[cfg(test)]
mod tests {
    use anyhow::Result;
    use googletest::prelude::*;

    use super::*;
    use crate::LiftReport;

    #[gtest]
    fn test_digest_is_stable_hex() -> Result<()> {
        let first = sha256_hex(b"%PDF-1.7 report")?;
        let second = sha256_hex(b"%PDF-1.7 report")?;
        let other = sha256_hex(b"%PDF-1.7 other report")?;

        expect_that!(first.len(), eq(64));
        expect_that!(
            first.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()),
            eq(true)
        );
        expect_that!(second, eq(&first));
        expect_that!(other, not(eq(&first)));
        Ok(())
    }

    #[gtest]
    fn test_new_carries_reports() -> Result<()> {
        let companies = vec![LiftCompanyReport {
            company_name: "ACME".into(),
            reports: vec![LiftReport {
                start_time: "2024-03-01T10:00:00".into(),
                end_time: "".into(),
                downtime_hours: 3,
                factory_number: "F-1".into(),
                reg_number: "R-1".into(),
            }],
        }];

        let digest = sha256_hex(b"%PDF-1.7")?;

        let got = ProcessedReport::new(
            "march.pdf",
            b"%PDF-1.7",
            LiftReports {
                report_time: "2024-03-05T09:30:00".into(),
                companies: companies.clone(),
            },
        )?;

        expect_that!(
            got,
            matches_pattern!(ProcessedReport {
                filename: eq("march.pdf"),
                file_sha256: eq(&digest),
                report_time: eq("2024-03-05T09:30:00"),
                companies: eq(&companies),
            })
        );
        Ok(())
    }
}
