pub mod profile;
pub mod visualize;

pub use profile::{update_profile, ProfileOptions, ProfileOutcome, ProfileUpdate};
pub use visualize::{visualize, VisualizeOptions, VisualizeSummary};
