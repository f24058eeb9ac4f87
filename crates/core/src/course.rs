use thiserror::Error;

use crate::model::ModuleId;

/// Time credited to a module that is not in the course table.
pub const DEFAULT_TIME_SPENT_SECS: u32 = 120;

/// Assumed number of labs in the course. Only an estimate.
pub const DEFAULT_ESTIMATED_LABS: u32 = 15;

/// A module as the course defines it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ModuleSpec {
    pub id: &'static str,
    pub title: &'static str,
    pub estimated_secs: u32,
}

const fn module(id: &'static str, title: &'static str, estimated_secs: u32) -> ModuleSpec {
    ModuleSpec {
        id,
        title,
        estimated_secs,
    }
}

/// The ten vSphere 8 modules, in course order.
pub const VSPHERE8_MODULES: [ModuleSpec; 10] = [
    module("introduction", "Introduction", 120),
    module("esxi-deployment", "ESXi Deployment", 180),
    module("vcenter-services", "vCenter Services", 150),
    module("storage-management", "Storage Management", 200),
    module("networking", "Networking", 180),
    module("resource-management", "Resource Management", 220),
    module("security", "Security", 160),
    module("lifecycle", "Lifecycle Management", 140),
    module("monitoring", "Monitoring", 180),
    module("automation", "Automation", 200),
];

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CourseError {
    #[error("estimated lab count must be greater than zero")]
    ZeroEstimatedLabs,
}

/// Static description of a course: its modules and the assumed lab count.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Course {
    name: String,
    modules: Vec<ModuleSpec>,
    estimated_labs: u32,
}

impl Course {
    #[must_use]
    pub fn vsphere8() -> Self {
        Self {
            name: "vSphere 8".to_owned(),
            modules: VSPHERE8_MODULES.to_vec(),
            estimated_labs: DEFAULT_ESTIMATED_LABS,
        }
    }

    /// Override the assumed lab count.
    ///
    /// # Errors
    ///
    /// Returns `CourseError::ZeroEstimatedLabs` for zero.
    pub fn with_estimated_labs(mut self, estimated_labs: u32) -> Result<Self, CourseError> {
        if estimated_labs == 0 {
            return Err(CourseError::ZeroEstimatedLabs);
        }
        self.estimated_labs = estimated_labs;
        Ok(self)
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn modules(&self) -> &[ModuleSpec] {
        &self.modules
    }

    #[must_use]
    pub fn total_modules(&self) -> usize {
        self.modules.len()
    }

    #[must_use]
    pub fn estimated_labs(&self) -> u32 {
        self.estimated_labs
    }

    #[must_use]
    pub fn spec_for(&self, id: &ModuleId) -> Option<&ModuleSpec> {
        self.modules.iter().find(|spec| spec.id == id.as_str())
    }

    #[must_use]
    pub fn is_known(&self, id: &ModuleId) -> bool {
        self.spec_for(id).is_some()
    }

    /// Estimated seconds for a module; unknown ids get [`DEFAULT_TIME_SPENT_SECS`].
    #[must_use]
    pub fn time_spent(&self, id: &ModuleId) -> u32 {
        self.spec_for(id)
            .map_or(DEFAULT_TIME_SPENT_SECS, |spec| spec.estimated_secs)
    }
}

impl Default for Course {
    fn default() -> Self {
        Self::vsphere8()
    }
}
