mod modules;
mod record;
mod state;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use modules::ModulesView;
pub use record::RecordView;
pub use state::{ViewState, view_state_from_resource};
