//! Report assembly: metrics and insights in, an ordered page list out.

use chrono::{DateTime, Duration, Utc};
use tracing::{debug, info};
use uuid::Uuid;

use super::format::{
    format_currency, format_long_date, format_percent, format_rating, format_short_date,
};
use super::tables::{attendance_table, department_table, recruitment_table, top_performer_table};
use crate::aggregation::compute_metrics;
use crate::config::ReportConfig;
use crate::error::EngineResult;
use crate::insights::{Insight, InsightKind, find_insight, select_insights};
use crate::models::{
    DerivedMetrics, InsightBlock, InsightEntry, Page, PageFooter, PageKind, PeriodBaseline,
    RecordSnapshot, RecruitmentEntry, Report, Section, SummaryBlock,
};

/// Title of the header block on the first page.
pub const HEADER_TITLE: &str = "Report Header";
/// Title of the executive summary block.
pub const EXECUTIVE_SUMMARY_TITLE: &str = "Executive Summary";
/// Title of the narrative insight block.
pub const KEY_INSIGHTS_TITLE: &str = "Key Insights & Strategic Recommendations";
/// Title of the closing health block.
pub const OVERALL_HEALTH_TITLE: &str = "Overall Health";
/// Title of the closing metadata block.
pub const METADATA_TITLE: &str = "Report Metadata";

const NOT_AVAILABLE: &str = "N/A";

/// Everything the assembler reads.
#[derive(Debug, Clone, Copy)]
pub struct ReportInputs<'a> {
    /// Output of the aggregation pass.
    pub metrics: &'a DerivedMetrics,
    /// Output of the insight selector for the same metrics.
    pub insights: &'a [Insight],
    /// Raw openings, listed one per row.
    pub recruitment: &'a [RecruitmentEntry],
}

/// Builds the suggested file name, `<prefix>-<YYYY-MM-DD>.<ext>`.
///
/// # Examples
///
/// ```
/// use workforce_report::config::ReportConfig;
/// use workforce_report::report::report_file_name;
/// use chrono::{TimeZone, Utc};
///
/// let at = Utc.with_ymd_and_hms(2024, 2, 14, 16, 30, 0).unwrap();
/// assert_eq!(
///     report_file_name(&ReportConfig::default(), at),
///     "HR-Dashboard-Report-2024-02-14.json"
/// );
/// ```
pub fn report_file_name(config: &ReportConfig, generated_at: DateTime<Utc>) -> String {
    format!(
        "{}-{}.{}",
        config.file_prefix,
        generated_at.format("%Y-%m-%d"),
        config.file_extension
    )
}

/// Assembles the seven report pages in [`PageKind::ORDER`].
///
/// The generation time is the metrics' `computed_at`, so assembling the
/// same inputs twice differs only in `report_id`. Sections with no data
/// still appear, as header-only tables.
///
/// # Errors
///
/// Returns [`crate::error::EngineError::ReportLayout`] if a table row does
/// not match its column layout.
pub fn assemble_report(inputs: &ReportInputs<'_>, config: &ReportConfig) -> EngineResult<Report> {
    let metrics = inputs.metrics;
    let generated_at = metrics.computed_at;

    let mut pages = Vec::with_capacity(PageKind::ORDER.len());
    for (index, kind) in PageKind::ORDER.into_iter().enumerate() {
        let sections = match kind {
            PageKind::ExecutiveSummary => vec![
                Section::Summary(header_block(config, generated_at)),
                Section::Summary(executive_summary(metrics, config)),
            ],
            PageKind::DepartmentPerformance => {
                vec![Section::Table(department_table(&metrics.departments)?)]
            }
            PageKind::TopPerformers => {
                vec![Section::Table(top_performer_table(&metrics.top_performers)?)]
            }
            PageKind::WeeklyAttendance => {
                vec![Section::Table(attendance_table(&metrics.attendance_window)?)]
            }
            PageKind::RecruitmentPipeline => {
                vec![Section::Table(recruitment_table(inputs.recruitment)?)]
            }
            PageKind::KeyInsights => {
                vec![Section::Insights(key_insights(metrics, inputs.insights))]
            }
            PageKind::Closing => vec![
                Section::Summary(overall_health(metrics)),
                Section::Summary(metadata_block(config, generated_at)),
            ],
        };
        debug!(page = index + 1, ?kind, sections = sections.len(), "Assembled page");
        pages.push(Page {
            number: index + 1,
            kind,
            sections,
            footer: page_footer(config, generated_at, index + 1, PageKind::ORDER.len()),
        });
    }

    let report = Report {
        report_id: Uuid::new_v4(),
        generated_at,
        file_name: report_file_name(config, generated_at),
        title: config.title.clone(),
        pages,
    };

    info!(
        report_id = %report.report_id,
        file_name = %report.file_name,
        pages = report.pages.len(),
        "Report assembled"
    );

    Ok(report)
}

/// Runs the whole pipeline: validate, aggregate, select insights, assemble.
///
/// # Errors
///
/// Returns the first validation failure in `snapshot`, or a layout error
/// from assembly.
pub fn build_report(
    snapshot: &RecordSnapshot,
    now: DateTime<Utc>,
    baseline: Option<&PeriodBaseline>,
    config: &ReportConfig,
) -> EngineResult<Report> {
    snapshot.validate()?;
    let metrics = compute_metrics(snapshot, now, baseline);
    let insights = select_insights(&metrics);
    assemble_report(
        &ReportInputs {
            metrics: &metrics,
            insights: &insights,
            recruitment: &snapshot.recruitment,
        },
        config,
    )
}

fn page_footer(
    config: &ReportConfig,
    generated_at: DateTime<Utc>,
    number: usize,
    total: usize,
) -> PageFooter {
    PageFooter {
        pagination: format!("{} - Page {number} of {total}", config.footer_title),
        stamp: format!(
            "Generated: {} | {}",
            format_long_date(generated_at.date_naive()),
            config.footer_marking
        ),
    }
}

fn header_block(config: &ReportConfig, generated_at: DateTime<Utc>) -> SummaryBlock {
    SummaryBlock::new(HEADER_TITLE)
        .entry("Title", config.title.as_str())
        .entry("Subtitle", config.subtitle.as_str())
        .entry("Report Generated", format_long_date(generated_at.date_naive()))
        .entry("Report Type", config.report_type.as_str())
}

fn executive_summary(metrics: &DerivedMetrics, config: &ReportConfig) -> SummaryBlock {
    let salary = match metrics.salary_range {
        Some(range) => format!(
            "{} (Range: {} - {})",
            format_currency(metrics.average_salary),
            format_currency(range.min),
            format_currency(range.max)
        ),
        None => format!("{} (Range: N/A)", format_currency(metrics.average_salary)),
    };

    SummaryBlock::new(EXECUTIVE_SUMMARY_TITLE)
        .entry(
            "Total Workforce",
            format!(
                "{} employees ({} active, {} inactive)",
                metrics.total_staff, metrics.active_staff, metrics.inactive_staff
            ),
        )
        .entry("Average Annual Salary", salary)
        .entry(
            "Overall Attendance Rate",
            format!(
                "{} (Target: {})",
                format_percent(metrics.average_attendance),
                format_percent(config.attendance_target)
            ),
        )
        .entry(
            "Average Performance Score",
            format!(
                "{}/5.0 ({})",
                format_rating(metrics.average_performance),
                format_percent(metrics.performance_percent)
            ),
        )
        .entry(
            "Open Positions",
            format!(
                "{} active recruitments across {} departments",
                metrics.open_positions, metrics.recruiting_departments
            ),
        )
        .entry(
            "Recent Activity",
            format!(
                "{} new hires in last 30 days, {} reviews pending",
                metrics.recent_hires, metrics.pending_reviews
            ),
        )
}

fn key_insights(metrics: &DerivedMetrics, insights: &[Insight]) -> InsightBlock {
    let value = |kind| {
        find_insight(insights, kind)
            .map(|insight| insight.value.clone())
            .unwrap_or_default()
    };
    let entry = |label: &str, value: String, caption: &str| InsightEntry {
        label: label.to_string(),
        value,
        caption: caption.to_string(),
    };

    let compensation = metrics
        .salary_distribution
        .iter()
        .map(|bucket| format!("{}: {}", bucket.band.label(), bucket.count))
        .collect::<Vec<_>>()
        .join(" | ");

    InsightBlock {
        title: KEY_INSIGHTS_TITLE.to_string(),
        entries: vec![
            entry(
                "STRENGTHS",
                format!(
                    "{} employees ({}%)",
                    metrics.high_performers, metrics.high_performer_percent
                ),
                "are high performers with 4.5+ ratings",
            ),
            entry(
                "ATTENTION NEEDED",
                format!("{} employees", value(InsightKind::LowAttendance)),
                "require attendance improvement (below 90% threshold)",
            ),
            entry(
                "ACTION ITEMS",
                format!("{} performance reviews", value(InsightKind::PendingReviews)),
                "are pending and should be scheduled",
            ),
            entry(
                "GROWTH TREND",
                format!("{} new hires", value(InsightKind::RecentHires)),
                "in the last 30 days shows positive expansion",
            ),
            entry(
                "TOP DEPARTMENT",
                value(InsightKind::TopDepartment),
                "leads in performance metrics and team engagement",
            ),
            entry(
                "COMPENSATION",
                compensation,
                "salary distribution across all levels",
            ),
            entry(
                "OVERALL HEALTH",
                format!(
                    "{} attendance rate",
                    format_percent(metrics.average_attendance)
                ),
                "indicates strong team commitment",
            ),
        ],
    }
}

fn overall_health(metrics: &DerivedMetrics) -> SummaryBlock {
    SummaryBlock::new(OVERALL_HEALTH_TITLE)
        .entry(
            "Performance",
            format!(
                "{} overall performance score across all departments",
                format_percent(metrics.performance_percent)
            ),
        )
        .entry(
            "Attendance",
            format!(
                "{} attendance rate indicating employee engagement",
                format_percent(metrics.average_attendance)
            ),
        )
        .entry(
            "Recruitment",
            format!(
                "{} open positions in the hiring pipeline",
                metrics.open_positions
            ),
        )
}

fn metadata_block(config: &ReportConfig, generated_at: DateTime<Utc>) -> SummaryBlock {
    let next_review = generated_at
        .checked_add_signed(Duration::days(i64::from(config.next_review_days)))
        .map(|at| format_short_date(at.date_naive()))
        .unwrap_or_else(|| NOT_AVAILABLE.to_string());

    SummaryBlock::new(METADATA_TITLE)
        .entry("Report Classification", config.classification.as_str())
        .entry("Data Sources", config.data_sources.join(", "))
        .entry("Next Review Date", next_review)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        AttendanceDay, PipelineStage, Priority, Section, StaffRecord, StaffStatus,
    };
    use chrono::{NaiveDate, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 2, 14, 9, 0, 0).unwrap()
    }

    fn staff(
        id: &str,
        department: &str,
        salary: u64,
        rating: f64,
        attendance: f64,
        joined: (i32, u32, u32),
    ) -> StaffRecord {
        StaffRecord {
            id: id.to_string(),
            name: format!("Staff {id}"),
            department: department.to_string(),
            role: "Role".to_string(),
            status: StaffStatus::Active,
            salary,
            performance_rating: rating,
            attendance_rate: attendance,
            join_date: NaiveDate::from_ymd_opt(joined.0, joined.1, joined.2).unwrap(),
            avatar: None,
        }
    }

    fn snapshot() -> RecordSnapshot {
        RecordSnapshot {
            staff: vec![
                staff("1", "Engineering", 95_000, 4.8, 96.0, (2022, 3, 15)),
                staff("2", "Sales", 48_000, 3.8, 88.0, (2024, 2, 1)),
                staff("3", "Engineering", 82_000, 4.5, 94.0, (2023, 6, 1)),
                staff("4", "Sales", 65_000, 4.1, 92.0, (2021, 9, 10)),
            ],
            attendance: vec![AttendanceDay {
                date: NaiveDate::from_ymd_opt(2024, 2, 12).unwrap(),
                present: 18,
                absent: 2,
                late: 1,
            }],
            recruitment: vec![RecruitmentEntry {
                position: "Data Analyst".to_string(),
                department: "Finance".to_string(),
                applicants: 12,
                stage: PipelineStage::Interview,
                priority: Priority::High,
            }],
        }
    }

    fn summary<'a>(report: &'a Report, kind: PageKind, index: usize) -> &'a SummaryBlock {
        match &report.page(kind).unwrap().sections[index] {
            Section::Summary(block) => block,
            other => panic!("expected summary, got {other:?}"),
        }
    }

    fn value<'a>(block: &'a SummaryBlock, key: &str) -> &'a str {
        block
            .entries
            .iter()
            .find(|entry| entry.key == key)
            .map(|entry| entry.value.as_str())
            .unwrap()
    }

    /// RA-001: pages follow the fixed order
    #[test]
    fn test_pages_in_fixed_order() {
        let report = build_report(&snapshot(), now(), None, &ReportConfig::default()).unwrap();

        let kinds: Vec<PageKind> = report.pages.iter().map(|page| page.kind).collect();
        assert_eq!(kinds, PageKind::ORDER.to_vec());
        let numbers: Vec<usize> = report.pages.iter().map(|page| page.number).collect();
        assert_eq!(numbers, vec![1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn test_every_page_carries_footer() {
        let report = build_report(&snapshot(), now(), None, &ReportConfig::default()).unwrap();

        assert_eq!(
            report.pages[1].footer.pagination,
            "HR Dashboard Analytics Report - Page 2 of 7"
        );
        assert_eq!(
            report.pages[6].footer.pagination,
            "HR Dashboard Analytics Report - Page 7 of 7"
        );
        for page in &report.pages {
            assert_eq!(
                page.footer.stamp,
                "Generated: February 14, 2024 | Confidential"
            );
        }
    }

    /// RA-002: file name and generation date
    #[test]
    fn test_file_name_and_header() {
        let report = build_report(&snapshot(), now(), None, &ReportConfig::default()).unwrap();

        assert_eq!(report.file_name, "HR-Dashboard-Report-2024-02-14.json");
        assert_eq!(report.generated_at, now());
        let header = summary(&report, PageKind::ExecutiveSummary, 0);
        assert_eq!(value(header, "Report Generated"), "February 14, 2024");
        assert_eq!(value(header, "Title"), "HR DASHBOARD");
    }

    /// RA-003: executive summary lines
    #[test]
    fn test_executive_summary_lines() {
        let report = build_report(&snapshot(), now(), None, &ReportConfig::default()).unwrap();
        let block = summary(&report, PageKind::ExecutiveSummary, 1);

        assert_eq!(
            value(block, "Total Workforce"),
            "4 employees (4 active, 0 inactive)"
        );
        assert_eq!(
            value(block, "Average Annual Salary"),
            "$72,500 (Range: $48,000 - $95,000)"
        );
        // (96 + 88 + 94 + 92) / 4 = 92.5 -> 93
        assert_eq!(value(block, "Overall Attendance Rate"), "93% (Target: 95%)");
        // (4.8 + 3.8 + 4.5 + 4.1) / 4 = 4.3
        assert_eq!(value(block, "Average Performance Score"), "4.3/5.0 (86%)");
        assert_eq!(
            value(block, "Open Positions"),
            "1 active recruitments across 1 departments"
        );
        assert_eq!(
            value(block, "Recent Activity"),
            "1 new hires in last 30 days, 1 reviews pending"
        );
    }

    /// RA-004: the insight block reuses selector values
    #[test]
    fn test_key_insights_block() {
        let report = build_report(&snapshot(), now(), None, &ReportConfig::default()).unwrap();
        let block = match &report.page(PageKind::KeyInsights).unwrap().sections[0] {
            Section::Insights(block) => block,
            other => panic!("expected insights, got {other:?}"),
        };

        let labels: Vec<&str> = block.entries.iter().map(|e| e.label.as_str()).collect();
        assert_eq!(
            labels,
            vec![
                "STRENGTHS",
                "ATTENTION NEEDED",
                "ACTION ITEMS",
                "GROWTH TREND",
                "TOP DEPARTMENT",
                "COMPENSATION",
                "OVERALL HEALTH"
            ]
        );
        assert_eq!(block.entries[0].value, "2 employees (50%)");
        assert_eq!(block.entries[0].caption, "are high performers with 4.5+ ratings");
        assert_eq!(block.entries[4].value, "Engineering");
        assert_eq!(block.entries[5].value, "<50K: 1 | 50-70K: 1 | 70-90K: 1 | >90K: 1");
    }

    /// RA-005: closing metadata
    #[test]
    fn test_closing_metadata() {
        let report = build_report(&snapshot(), now(), None, &ReportConfig::default()).unwrap();
        let block = summary(&report, PageKind::Closing, 1);

        assert_eq!(value(block, "Report Classification"), "Internal Use Only");
        assert_eq!(
            value(block, "Data Sources"),
            "HRIS, Attendance System, Performance Management"
        );
        assert_eq!(value(block, "Next Review Date"), "3/15/2024");
    }

    #[test]
    fn test_next_review_past_calendar_range_is_not_available() {
        let config = ReportConfig {
            next_review_days: u32::MAX,
            ..ReportConfig::default()
        };
        let report = build_report(&RecordSnapshot::default(), now(), None, &config).unwrap();
        let block = summary(&report, PageKind::Closing, 1);
        assert_eq!(value(block, "Next Review Date"), "N/A");

        let far_future: DateTime<Utc> = "+262142-12-31T00:00:00Z".parse().unwrap();
        let report = build_report(&snapshot(), far_future, None, &ReportConfig::default()).unwrap();
        let block = summary(&report, PageKind::Closing, 1);
        assert_eq!(value(block, "Next Review Date"), "N/A");
    }

    /// RA-006: empty snapshot still yields every page
    #[test]
    fn test_empty_snapshot_assembles_all_pages() {
        let report =
            build_report(&RecordSnapshot::default(), now(), None, &ReportConfig::default())
                .unwrap();

        assert_eq!(report.pages.len(), 7);
        let block = summary(&report, PageKind::ExecutiveSummary, 1);
        assert_eq!(value(block, "Average Annual Salary"), "$0 (Range: N/A)");
        for kind in [
            PageKind::DepartmentPerformance,
            PageKind::TopPerformers,
            PageKind::WeeklyAttendance,
            PageKind::RecruitmentPipeline,
        ] {
            match &report.page(kind).unwrap().sections[0] {
                Section::Table(table) => assert!(table.rows().is_empty()),
                other => panic!("expected table, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_invalid_snapshot_is_rejected() {
        let mut snapshot = snapshot();
        snapshot.staff[0].performance_rating = 7.0;
        assert!(build_report(&snapshot, now(), None, &ReportConfig::default()).is_err());
    }

    #[test]
    fn test_configured_naming_is_used() {
        let config = ReportConfig {
            file_prefix: "People-Review".to_string(),
            file_extension: "pdf".to_string(),
            next_review_days: 7,
            ..ReportConfig::default()
        };
        let report = build_report(&snapshot(), now(), None, &config).unwrap();

        assert_eq!(report.file_name, "People-Review-2024-02-14.pdf");
        let block = summary(&report, PageKind::Closing, 1);
        assert_eq!(value(block, "Next Review Date"), "2/21/2024");
    }
}
