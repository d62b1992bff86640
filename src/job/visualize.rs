use crate::analyze::{ActivityAnalyzed, Analyzer};
use crate::error::Result;
use crate::logs::{collect_activity, SkippedLog};
use crate::report::{SvgReport, ACTIVITY_CHART_FILE, CODE_QUALITY_FILE, HEATMAP_FILE};
use crate::utils::StepProgress;
use std::path::PathBuf;
use tracing::info;

#[derive(Debug, Clone)]
pub struct VisualizeOptions {
    pub projects_dir: PathBuf,
    pub output_dir: PathBuf,
}

#[derive(Debug, Clone)]
pub struct VisualizeSummary {
    pub records: usize,
    pub projects_scanned: usize,
    pub skipped: Vec<SkippedLog>,
    pub analyzed: ActivityAnalyzed,
    pub written: Vec<PathBuf>,
}

pub fn visualize(
    options: &VisualizeOptions,
    progress: &StepProgress,
) -> Result<VisualizeSummary> {
    let collect_pb = progress.step(format!(
        "Scanning `{}` ...",
        options.projects_dir.display()
    ));
    let collected = collect_activity(&options.projects_dir)
        .inspect_err(|err| collect_pb.abandon_with_message(format!("❌ {err}")))?;
    collect_pb.finish_with_message(format!(
        "✅ Collected {} records from {} projects ({} skipped)",
        collected.records.len(),
        collected.projects_scanned,
        collected.skipped.len()
    ));
    info!(
        records = collected.records.len(),
        projects = collected.projects_scanned,
        logs = collected.logs_loaded,
        skipped = collected.skipped.len(),
        "collected activity"
    );

    let analyzed = collected.records.analyze_activity();

    let charts: [(&str, &dyn SvgReport); 3] = [
        (HEATMAP_FILE, &analyzed.daily),
        (ACTIVITY_CHART_FILE, &analyzed.projects),
        (CODE_QUALITY_FILE, &analyzed.quality),
    ];
    let mut written = vec![];
    for (file, chart) in charts {
        let path = options.output_dir.join(file);
        let pb = progress.step(format!("Rendering `{}` ...", path.display()));
        chart
            .report_create(&path)
            .inspect_err(|err| pb.abandon_with_message(format!("❌ {err}")))?;
        pb.finish_with_message(format!("✅ Wrote `{}`", path.display()));
        info!(path = %path.display(), "wrote chart");
        written.push(path);
    }

    Ok(VisualizeSummary {
        records: collected.records.len(),
        projects_scanned: collected.projects_scanned,
        skipped: collected.skipped,
        analyzed,
        written,
    })
}
