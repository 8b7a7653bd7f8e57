//! The room-booking reports.
//!
//! Each report is a linear sequence of headings, paragraphs and tables
//! built into one [`Document`]. Saving is left to the caller.

pub mod database_config;
pub mod project_summary;

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::model::Document;

/// A report this crate knows how to generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Report {
    /// Project summary with compact tables
    ProjectSummary,
    /// Database configuration with verbose tables
    DatabaseConfig,
}

impl Report {
    /// All reports in generation order.
    pub const ALL: [Report; 2] = [Report::ProjectSummary, Report::DatabaseConfig];

    /// Iterate over all reports.
    pub fn all() -> impl Iterator<Item = Report> {
        Self::ALL.into_iter()
    }

    /// Short name used on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            Report::ProjectSummary => "summary",
            Report::DatabaseConfig => "database",
        }
    }

    /// Default output file name.
    pub fn file_name(&self) -> &'static str {
        match self {
            Report::ProjectSummary => "UniRoom_Project_Specs.docx",
            Report::DatabaseConfig => "University_DB_Config.docx",
        }
    }

    /// Document title.
    pub fn title(&self) -> &'static str {
        match self {
            Report::ProjectSummary => project_summary::TITLE,
            Report::DatabaseConfig => database_config::TITLE,
        }
    }

    /// Build the report document.
    pub fn build(&self) -> Result<Document> {
        log::debug!("Building report '{}'", self.name());
        match self {
            Report::ProjectSummary => project_summary::build(),
            Report::DatabaseConfig => database_config::build(),
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Report {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "summary" | "project-summary" | "project_summary" => Ok(Report::ProjectSummary),
            "database" | "db" | "database-config" | "database_config" => {
                Ok(Report::DatabaseConfig)
            }
            _ => Err(Error::UnknownReport(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!("summary".parse::<Report>().unwrap(), Report::ProjectSummary);
        assert_eq!("DB".parse::<Report>().unwrap(), Report::DatabaseConfig);
        assert!(matches!(
            "rooms".parse::<Report>(),
            Err(Error::UnknownReport(name)) if name == "rooms"
        ));
    }

    #[test]
    fn test_names_round_trip() {
        for report in Report::all() {
            assert_eq!(report.name().parse::<Report>().unwrap(), report);
            assert!(report.file_name().ends_with(".docx"));
        }
    }

    #[test]
    fn test_build_sets_title() {
        for report in Report::all() {
            let doc = report.build().unwrap();
            assert_eq!(doc.metadata.title.as_deref(), Some(report.title()));
        }
    }
}
