pub mod attendance;
pub mod charts;
pub mod counters;
pub mod filters;
pub mod leaves;
pub mod org;
pub mod personal;
pub mod tasks;

pub use attendance::AttendanceSection;
pub use charts::ChartsSection;
pub use counters::CounterGrid;
pub use filters::FilterBar;
pub use leaves::LeaveSection;
pub use org::OrgChartSection;
pub use personal::PersonalDetailsSection;
pub use tasks::TaskTable;
