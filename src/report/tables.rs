//! The four tabular sections of the report.
//!
//! Column layouts are fixed here; every cell is formatted before it is
//! pushed, so exporters only place strings.

use super::format::{
    format_currency, format_month_year, format_percent, format_rating, format_weekday_date,
};
use super::grade::PerformanceGrade;
use crate::aggregation::round_to_u32;
use crate::error::EngineResult;
use crate::models::{
    Alignment, AttendanceWindow, ColumnSpec, DepartmentRollup, RankedPerformer, RecruitmentEntry,
    Table,
};

/// Title of the department performance table.
pub const DEPARTMENT_TABLE_TITLE: &str = "Department Performance Analysis";
/// Title of the top performer table.
pub const TOP_PERFORMER_TABLE_TITLE: &str = "Top Performers";
/// Title of the weekly attendance table.
pub const ATTENDANCE_TABLE_TITLE: &str = "Weekly Attendance Trends";
/// Title of the recruitment pipeline table.
pub const RECRUITMENT_TABLE_TITLE: &str = "Recruitment Pipeline Status";

/// Status cell for a hired opening.
pub const STATUS_COMPLETE: &str = "Complete";
/// Status cell for any other opening.
pub const STATUS_IN_PROGRESS: &str = "In Progress";

/// One row per department: staff, average salary, rating, attendance, grade.
pub fn department_table(departments: &[DepartmentRollup]) -> EngineResult<Table> {
    let mut table = Table::new(
        DEPARTMENT_TABLE_TITLE,
        vec![
            ColumnSpec::new("Department", 30, Alignment::Left),
            ColumnSpec::new("Staff", 25, Alignment::Center),
            ColumnSpec::new("Avg Salary", 30, Alignment::Right),
            ColumnSpec::new("Performance", 25, Alignment::Center),
            ColumnSpec::new("Attendance", 25, Alignment::Center),
            ColumnSpec::new("Grade", 20, Alignment::Center),
        ],
    );

    for rollup in departments {
        table.push_row(vec![
            rollup.department.clone(),
            rollup.staff_count.to_string(),
            format_currency(rollup.average_salary),
            format!("{}/5.0", format_rating(rollup.average_performance)),
            format_percent(rollup.average_attendance),
            PerformanceGrade::from_average(rollup.average_performance)
                .label()
                .to_string(),
        ])?;
    }

    Ok(table)
}

/// One row per ranked performer, best first.
pub fn top_performer_table(performers: &[RankedPerformer]) -> EngineResult<Table> {
    let mut table = Table::new(
        TOP_PERFORMER_TABLE_TITLE,
        vec![
            ColumnSpec::new("Rank", 15, Alignment::Center),
            ColumnSpec::new("Employee Name", 28, Alignment::Left),
            ColumnSpec::new("Department", 22, Alignment::Left),
            ColumnSpec::new("Position", 28, Alignment::Left),
            ColumnSpec::new("Rating", 20, Alignment::Center),
            ColumnSpec::new("Attendance", 20, Alignment::Center),
            ColumnSpec::new("Salary", 22, Alignment::Right),
            ColumnSpec::new("Joined", 20, Alignment::Center),
        ],
    );

    for performer in performers {
        table.push_row(vec![
            format!("#{}", performer.rank),
            performer.name.clone(),
            performer.department.clone(),
            performer.role.clone(),
            format_rating(performer.performance_rating),
            format_percent(round_to_u32(performer.attendance_rate)),
            format_currency(performer.salary),
            format_month_year(performer.join_date),
        ])?;
    }

    Ok(table)
}

/// One row per day in the attendance window, oldest first.
pub fn attendance_table(window: &AttendanceWindow) -> EngineResult<Table> {
    let mut table = Table::new(
        ATTENDANCE_TABLE_TITLE,
        vec![
            ColumnSpec::new("Date", 45, Alignment::Left),
            ColumnSpec::new("Present", 25, Alignment::Center),
            ColumnSpec::new("Absent", 25, Alignment::Center),
            ColumnSpec::new("Late", 25, Alignment::Center),
            ColumnSpec::new("Rate", 25, Alignment::Center),
            ColumnSpec::new("Total", 25, Alignment::Center),
        ],
    );

    for day in &window.days {
        table.push_row(vec![
            format_weekday_date(day.date),
            day.present.to_string(),
            day.absent.to_string(),
            day.late.to_string(),
            format_percent(day.rate_percent),
            day.total.to_string(),
        ])?;
    }

    Ok(table)
}

/// One row per opening, in input order.
pub fn recruitment_table(recruitment: &[RecruitmentEntry]) -> EngineResult<Table> {
    let mut table = Table::new(
        RECRUITMENT_TABLE_TITLE,
        vec![
            ColumnSpec::new("Position", 35, Alignment::Left),
            ColumnSpec::new("Department", 25, Alignment::Left),
            ColumnSpec::new("Applicants", 20, Alignment::Center),
            ColumnSpec::new("Stage", 25, Alignment::Center),
            ColumnSpec::new("Priority", 20, Alignment::Center),
            ColumnSpec::new("Status", 30, Alignment::Center),
        ],
    );

    for entry in recruitment {
        let status = if entry.stage.is_terminal() {
            STATUS_COMPLETE
        } else {
            STATUS_IN_PROGRESS
        };
        table.push_row(vec![
            entry.position.clone(),
            entry.department.clone(),
            entry.applicants.to_string(),
            entry.stage.label().to_string(),
            entry.priority.label().to_string(),
            status.to_string(),
        ])?;
    }

    Ok(table)
}
