pub mod project;
pub mod report;
pub mod scanner;

pub use project::{ProjectType, DEFAULT_PROJECT_KEY, PROJECT_TYPES};
pub use report::{recommended_hours, ElectionReport, ScoredDay, RULES_APPLIED};
pub use scanner::{parse_date, RangeScanner, ScanRequest, ScanSettings, DATE_FORMAT};
