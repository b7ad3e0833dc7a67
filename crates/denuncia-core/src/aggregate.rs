//! Dashboard aggregations over an in-memory slice of reports.
//!
//! Everything here is pure. Grouping never re-sorts: callers that want
//! recency-ordered groups must pass recency-ordered input (see
//! [`ReportStore::list_by_recency`](crate::store::ReportStore::list_by_recency)).
//!
//! All derived keys and timestamps are rendered in UTC.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::report::Report;

/// Format of the month bucket key, e.g. `2024-03`.
pub const MONTH_FORMAT: &str = "%Y-%m";

/// Format of [`ReportDetail::created_at`], e.g. `2024-03-01 09:30`.
pub const DETAIL_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// One entry in a category group of the listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportDetail {
  pub description: String,
  pub created_at:  String,
}

impl From<&Report> for ReportDetail {
  fn from(r: &Report) -> Self {
    ReportDetail {
      description: r.description.clone(),
      created_at:  r.created_at.format(DETAIL_TIMESTAMP_FORMAT).to_string(),
    }
  }
}

/// The `/api/stats` payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
  pub category_counts: BTreeMap<String, usize>,
  pub month_counts:    BTreeMap<String, usize>,
  pub total:           usize,
}

impl DashboardStats {
  pub fn from_reports(reports: &[Report]) -> Self {
    DashboardStats {
      category_counts: count_by_category(reports),
      month_counts:    count_by_month(reports),
      total:           total_count(reports),
    }
  }
}

fn count_by<F>(reports: &[Report], key: F) -> BTreeMap<String, usize>
where
  F: Fn(&Report) -> String,
{
  let mut counts = BTreeMap::new();
  for r in reports {
    *counts.entry(key(r)).or_insert(0) += 1;
  }
  counts
}

/// Number of reports per category. Categories with no reports are absent.
pub fn count_by_category(reports: &[Report]) -> BTreeMap<String, usize> {
  count_by(reports, |r| r.category.clone())
}

/// Number of reports per `YYYY-MM` creation month.
pub fn count_by_month(reports: &[Report]) -> BTreeMap<String, usize> {
  count_by(reports, |r| r.created_at.format(MONTH_FORMAT).to_string())
}

pub fn total_count(reports: &[Report]) -> usize { reports.len() }

/// Group reports by category, keeping the input order inside each group.
pub fn group_by_category_with_detail(
  reports: &[Report],
) -> BTreeMap<String, Vec<ReportDetail>> {
  let mut groups: BTreeMap<String, Vec<ReportDetail>> = BTreeMap::new();
  for r in reports {
    groups
      .entry(r.category.clone())
      .or_default()
      .push(ReportDetail::from(r));
  }
  groups
}
