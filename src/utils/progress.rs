use indicatif::{MultiProgress, ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::borrow::Cow;
use std::time::Duration;

const STEP_TEMPLATE: &str = "{spinner} {wide_msg}";
const TIMED_STEP_TEMPLATE: &str = "{spinner} [{elapsed:>3}] {wide_msg}";
const TICK: Duration = Duration::from_millis(100);

#[derive(Debug, Clone)]
pub struct StepProgress {
    multi: MultiProgress,
}

impl StepProgress {
    pub fn new(quiet: bool) -> Self {
        if quiet {
            Self::hidden()
        } else {
            Self {
                multi: MultiProgress::new(),
            }
        }
    }

    pub fn hidden() -> Self {
        Self {
            multi: MultiProgress::with_draw_target(ProgressDrawTarget::hidden()),
        }
    }

    pub fn step(&self, message: impl Into<Cow<'static, str>>) -> ProgressBar {
        self.spinner(STEP_TEMPLATE, message)
    }

    pub fn timed_step(&self, message: impl Into<Cow<'static, str>>) -> ProgressBar {
        self.spinner(TIMED_STEP_TEMPLATE, message)
    }

    fn spinner(&self, template: &str, message: impl Into<Cow<'static, str>>) -> ProgressBar {
        let pb = self.multi.add(ProgressBar::new_spinner());
        if let Ok(style) = ProgressStyle::with_template(template) {
            pb.set_style(style);
        }
        pb.set_message(message);
        pb.enable_steady_tick(TICK);
        pb
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiet_steps_draw_nothing() {
        let progress = StepProgress::new(true);
        let pb = progress.timed_step("Resolving identity ...");
        assert!(pb.is_hidden());
        assert_eq!(pb.message(), "Resolving identity ...");
        pb.finish_with_message("done");
        assert!(pb.is_finished());
    }

    #[test]
    fn step_templates_parse() {
        assert!(ProgressStyle::with_template(STEP_TEMPLATE).is_ok());
        assert!(ProgressStyle::with_template(TIMED_STEP_TEMPLATE).is_ok());
    }
}
