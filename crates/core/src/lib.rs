#![forbid(unsafe_code)]

pub mod course;
pub mod model;
pub mod options;
pub mod percentage;
pub mod time;

pub use course::{Course, CourseError, ModuleSpec};
pub use options::{InitTiming, ModulePolicy, NotificationStyle, TrackerOptions};
pub use percentage::{display_percentage, record_percentage};
pub use time::Clock;
