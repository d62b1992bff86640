mod progress;

pub use progress::StepProgress;
