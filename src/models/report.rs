//! Report structure models.
//!
//! A [`Report`] is an ordered list of [`Page`]s; a page is an ordered list of
//! [`Section`]s. These types carry the logical structure and already
//! formatted text only. Geometry, fonts and colours belong to whichever
//! exporter renders them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};

/// Horizontal alignment of a table column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Alignment {
    /// Left aligned.
    Left,
    /// Centered.
    Center,
    /// Right aligned.
    Right,
}

/// Declaration of one table column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSpec {
    /// Header label.
    pub label: String,
    /// Width relative to the other columns in the table.
    pub width: u16,
    /// Cell alignment.
    pub alignment: Alignment,
}

impl ColumnSpec {
    /// Creates a column declaration.
    pub fn new(label: impl Into<String>, width: u16, alignment: Alignment) -> Self {
        Self {
            label: label.into(),
            width,
            alignment,
        }
    }
}

/// A titled table whose rows always match its declared columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    title: String,
    columns: Vec<ColumnSpec>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Creates an empty table with the given column layout.
    pub fn new(title: impl Into<String>, columns: Vec<ColumnSpec>) -> Self {
        Self {
            title: title.into(),
            columns,
            rows: Vec::new(),
        }
    }

    /// Appends a row of formatted cells in column order.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::ReportLayout`] if the number of cells does not
    /// match the number of declared columns.
    ///
    /// # Examples
    ///
    /// ```
    /// use workforce_report::models::{Alignment, ColumnSpec, Table};
    ///
    /// let mut table = Table::new(
    ///     "Example",
    ///     vec![
    ///         ColumnSpec::new("Name", 30, Alignment::Left),
    ///         ColumnSpec::new("Count", 10, Alignment::Center),
    ///     ],
    /// );
    /// table.push_row(vec!["Engineering".to_string(), "4".to_string()]).unwrap();
    /// assert!(table.push_row(vec!["Sales".to_string()]).is_err());
    /// assert_eq!(table.rows().len(), 1);
    /// ```
    pub fn push_row(&mut self, cells: Vec<String>) -> EngineResult<()> {
        if cells.len() != self.columns.len() {
            return Err(EngineError::ReportLayout {
                table: self.title.clone(),
                message: format!(
                    "expected {} cells, got {}",
                    self.columns.len(),
                    cells.len()
                ),
            });
        }
        self.rows.push(cells);
        Ok(())
    }

    /// Table title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Column declarations in display order.
    pub fn columns(&self) -> &[ColumnSpec] {
        &self.columns
    }

    /// Rows of formatted cells.
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }
}

/// One key/value line in a summary block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryEntry {
    /// Left-hand label.
    pub key: String,
    /// Formatted value.
    pub value: String,
}

/// A titled list of key/value lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryBlock {
    /// Block title.
    pub title: String,
    /// Lines in display order.
    pub entries: Vec<SummaryEntry>,
}

impl SummaryBlock {
    /// Creates an empty block.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            entries: Vec::new(),
        }
    }

    /// Appends a line, builder style.
    pub fn entry(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.entries.push(SummaryEntry {
            key: key.into(),
            value: value.into(),
        });
        self
    }
}

/// One label/value/caption triple in an insight block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsightEntry {
    /// Short heading, e.g. `"TOP DEPARTMENT"`.
    pub label: String,
    /// Computed value.
    pub value: String,
    /// Explanatory sentence.
    pub caption: String,
}

/// A titled list of insight triples.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsightBlock {
    /// Block title.
    pub title: String,
    /// Entries in display order.
    pub entries: Vec<InsightEntry>,
}

/// A typed unit of report content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Section {
    /// Key/value lines.
    Summary(SummaryBlock),
    /// A table with typed columns.
    Table(Table),
    /// Label/value/caption triples.
    Insights(InsightBlock),
}

impl Section {
    /// The title of the wrapped block.
    pub fn title(&self) -> &str {
        match self {
            Section::Summary(block) => &block.title,
            Section::Table(table) => table.title(),
            Section::Insights(block) => &block.title,
        }
    }
}

/// The logical pages of a report, in the order they are emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageKind {
    /// Header and executive summary.
    ExecutiveSummary,
    /// Per-department performance table.
    DepartmentPerformance,
    /// Top performer ranking table.
    TopPerformers,
    /// Weekly attendance table.
    WeeklyAttendance,
    /// Recruitment pipeline table.
    RecruitmentPipeline,
    /// Key insights narrative.
    KeyInsights,
    /// Closing metadata.
    Closing,
}

impl PageKind {
    /// Every page kind in emission order.
    pub const ORDER: [PageKind; 7] = [
        PageKind::ExecutiveSummary,
        PageKind::DepartmentPerformance,
        PageKind::TopPerformers,
        PageKind::WeeklyAttendance,
        PageKind::RecruitmentPipeline,
        PageKind::KeyInsights,
        PageKind::Closing,
    ];
}

/// Footer text printed at the bottom of a page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageFooter {
    /// Left-hand text, e.g. `"HR Dashboard Analytics Report - Page 2 of 7"`.
    pub pagination: String,
    /// Right-hand text, e.g. `"Generated: February 14, 2024 | Confidential"`.
    pub stamp: String,
}

/// An ordered group of sections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    /// One-based page number.
    pub number: usize,
    /// Which logical page this is.
    pub kind: PageKind,
    /// Sections in display order.
    pub sections: Vec<Section>,
    /// Footer carrying the page count.
    pub footer: PageFooter,
}

/// A fully assembled report, ready to hand to an exporter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    /// Unique identifier for this assembly.
    pub report_id: Uuid,
    /// When the report was generated.
    pub generated_at: DateTime<Utc>,
    /// Suggested file name, `<prefix>-<YYYY-MM-DD>.<ext>`.
    pub file_name: String,
    /// Report title.
    pub title: String,
    /// Pages in order.
    pub pages: Vec<Page>,
}

impl Report {
    /// Titles of every section across all pages, in order.
    pub fn section_titles(&self) -> Vec<&str> {
        self.pages
            .iter()
            .flat_map(|page| page.sections.iter().map(Section::title))
            .collect()
    }

    /// Looks up the first page of the given kind.
    pub fn page(&self, kind: PageKind) -> Option<&Page> {
        self.pages.iter().find(|page| page.kind == kind)
    }
}
