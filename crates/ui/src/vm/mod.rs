mod percent_fmt;
mod progress_vm;
mod time_fmt;

pub use percent_fmt::{fill_style, fill_width, format_percentage};
pub use progress_vm::{ModuleRowVm, RecordSummaryVm, map_module_rows, map_record_summary};
pub use time_fmt::{format_datetime, format_time_spent};
