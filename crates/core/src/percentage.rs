use crate::course::Course;
use crate::model::ProgressRecord;

/// Blend of module and lab progress, in percent.
///
/// `100 * completed / total` for modules and `100 * labs / estimated_labs` for
/// labs, averaged. Not clamped: more labs than estimated pushes it past 100.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn display_percentage(
    completed_modules: usize,
    total_modules: usize,
    lab_entries: usize,
    estimated_labs: u32,
) -> f64 {
    let ratio = |done: usize, total: f64| {
        if total > 0.0 {
            done as f64 / total * 100.0
        } else {
            0.0
        }
    };

    let module_progress = ratio(completed_modules, total_modules as f64);
    let lab_progress = ratio(lab_entries, f64::from(estimated_labs));
    (module_progress + lab_progress) / 2.0
}

/// [`display_percentage`] for a record against a course.
#[must_use]
pub fn record_percentage(record: &ProgressRecord, course: &Course) -> f64 {
    display_percentage(
        record.completed_module_count(),
        course.total_modules(),
        record.lab_count(),
        course.estimated_labs(),
    )
}
