//! Report assembly for the workforce report engine.
//!
//! Turns [`DerivedMetrics`] and the selected insights into a [`Report`]: an
//! ordered list of pages holding summary blocks, tables and insight blocks,
//! with every value already formatted for display.
//!
//! [`DerivedMetrics`]: crate::models::DerivedMetrics
//! [`Report`]: crate::models::Report

mod assembler;
mod format;
mod grade;
mod tables;

pub use assembler::{
    EXECUTIVE_SUMMARY_TITLE, HEADER_TITLE, KEY_INSIGHTS_TITLE, METADATA_TITLE,
    OVERALL_HEALTH_TITLE, ReportInputs, assemble_report, build_report, report_file_name,
};
pub use format::{
    format_currency, format_long_date, format_month_year, format_percent, format_rating,
    format_short_date, format_thousands, format_weekday_date, round_rating,
};
pub use grade::PerformanceGrade;
pub use tables::{
    ATTENDANCE_TABLE_TITLE, DEPARTMENT_TABLE_TITLE, RECRUITMENT_TABLE_TITLE, STATUS_COMPLETE,
    STATUS_IN_PROGRESS, TOP_PERFORMER_TABLE_TITLE, attendance_table, department_table,
    recruitment_table, top_performer_table,
};
