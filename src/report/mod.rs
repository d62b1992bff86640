mod activity_chart;
mod heatmap;
pub mod markdown;
mod quality_chart;
pub mod svg;

use crate::error::{Error, Result};
use std::fs;
use std::path::Path;

pub const HEATMAP_FILE: &str = "heatmap.svg";
pub const ACTIVITY_CHART_FILE: &str = "activity-chart.svg";
pub const CODE_QUALITY_FILE: &str = "code-quality.svg";

pub(crate) const TITLE_COLOR: &str = "#24292f";
pub(crate) const MUTED_COLOR: &str = "#57606a";
pub(crate) const AXIS_COLOR: &str = "#d0d7de";
pub(crate) const ACTIVITY_COLOR: &str = "#216e39";

pub trait SvgReport {
    fn render_svg(&self) -> String;

    fn report_create(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|err| Error::io(parent, err))?;
        }
        fs::write(path, self.render_svg()).map_err(|err| Error::io(path, err))
    }
}
