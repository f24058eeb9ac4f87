use progress_core::Course;
use progress_core::model::{ModuleCompletion, ProgressRecord};
use services::ProgressSnapshot;

use crate::vm::percent_fmt::format_percentage;
use crate::vm::time_fmt::{format_datetime, format_time_spent};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModuleRowVm {
    pub id: String,
    pub title: String,
    pub known: bool,
    pub completed: bool,
    pub completed_at_str: Option<String>,
    pub time_spent_str: Option<String>,
}

impl ModuleRowVm {
    fn new(id: &str, title: &str, known: bool, entry: Option<&ModuleCompletion>) -> Self {
        Self {
            id: id.to_owned(),
            title: title.to_owned(),
            known,
            completed: entry.is_some_and(|e| e.completed),
            completed_at_str: entry.map(|e| format_datetime(e.completed_date)),
            time_spent_str: entry.map(|e| format_time_spent(e.time_spent)),
        }
    }
}

/// Course modules in course order, followed by any recorded ids the course
/// does not list.
#[must_use]
pub fn map_module_rows(course: &Course, record: &ProgressRecord) -> Vec<ModuleRowVm> {
    let mut rows: Vec<ModuleRowVm> = course
        .modules()
        .iter()
        .map(|spec| {
            let entry = record
                .modules()
                .iter()
                .find(|(id, _)| id.as_str() == spec.id)
                .map(|(_, entry)| entry);
            ModuleRowVm::new(spec.id, spec.title, true, entry)
        })
        .collect();

    rows.extend(
        record
            .modules()
            .iter()
            .filter(|(id, _)| !course.is_known(id))
            .map(|(id, entry)| ModuleRowVm::new(id.as_str(), id.as_str(), false, Some(entry))),
    );
    rows
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecordSummaryVm {
    pub started_at_str: String,
    pub last_update_str: String,
    pub schema_version: u32,
    pub completed_modules: usize,
    pub total_modules: usize,
    pub labs: usize,
    pub estimated_labs: u32,
    pub assessments: usize,
    pub percentage_str: String,
}

#[must_use]
pub fn map_record_summary(course: &Course, snapshot: &ProgressSnapshot) -> RecordSummaryVm {
    let record = &snapshot.record;
    RecordSummaryVm {
        started_at_str: format_datetime(record.start_date()),
        last_update_str: format_datetime(record.last_update()),
        schema_version: record.schema_version(),
        completed_modules: record.completed_module_count(),
        total_modules: course.total_modules(),
        labs: record.lab_count(),
        estimated_labs: course.estimated_labs(),
        assessments: record.assessments().len(),
        percentage_str: format_percentage(snapshot.percentage),
    }
}
