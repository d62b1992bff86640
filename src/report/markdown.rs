use crate::error::{Error, Result};
use crate::model::Repository;
use crate::report::{ACTIVITY_CHART_FILE, CODE_QUALITY_FILE, HEATMAP_FILE};
use chrono::NaiveDate;
use markdown_builder::{Image, Markdown};
use markdown_table::{Heading, HeadingAlignment, MarkdownTable};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartLinks {
    pub heatmap: String,
    pub activity: String,
    pub quality: String,
}

impl ChartLinks {
    pub fn for_repository(raw_base_url: &str, repo: &Repository, branch: &str, dir: &str) -> Self {
        let base = format!(
            "{}/{}/{}/{}/{}",
            raw_base_url.trim_end_matches('/'),
            repo.owner,
            repo.name,
            branch,
            dir.trim_matches('/'),
        );
        Self {
            heatmap: format!("{base}/{HEATMAP_FILE}"),
            activity: format!("{base}/{ACTIVITY_CHART_FILE}"),
            quality: format!("{base}/{CODE_QUALITY_FILE}"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ProfileReadme {
    pub username: String,
    pub charts: ChartLinks,
    pub updated: NaiveDate,
}

pub trait MarkdownReport {
    fn report_render(&self) -> Result<String>;
}

impl MarkdownReport for ProfileReadme {
    fn report_render(&self) -> Result<String> {
        let mut doc = Markdown::new();

        doc.header1(format!("Hi, I'm {} 👋", self.username));
        doc.paragraph(
            "These charts are rebuilt from my coding activity logs and published automatically."
                .to_string(),
        );

        doc.header2("Coding Activity");
        doc.image(Image::from(
            self.charts.heatmap.as_str(),
            "Coding activity heatmap",
            false,
        ));

        doc.header2("Projects & Code Quality");
        doc.add_charts_table(&self.charts)?;

        doc.paragraph(format!("*Last updated: {}*", self.updated.format("%Y-%m-%d")));

        Ok(doc.render())
    }
}

trait MarkdownExt {
    fn add_charts_table(&mut self, charts: &ChartLinks) -> Result<()>;
}

impl MarkdownExt for Markdown {
    fn add_charts_table(&mut self, charts: &ChartLinks) -> Result<()> {
        let header = [
            ("Activity by project", &charts.activity),
            ("Code quality trend", &charts.quality),
        ]
        .iter()
        .map(|(alt, url)| format!("![{alt}]({url})"))
        .map(|s| Heading::new(s, Some(HeadingAlignment::Center)))
        .collect::<Vec<_>>();

        let table = vec![vec![
            "*Activities per project*".to_string(),
            "*Average complexity and comment percentage per day*".to_string(),
        ]];

        let mut md_table = MarkdownTable::new(table);
        md_table.with_headings(header);
        let rendered = md_table
            .as_markdown()
            .map_err(|err| Error::Markdown(err.to_string()))?;

        // Pushed as a raw element: paragraphs re-wrap at 80 columns and
        // would split table rows.
        self.elements.push(Box::new(rendered));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn readme() -> ProfileReadme {
        let repo = Repository::new("octo", "activity");
        ProfileReadme {
            username: "octo".to_string(),
            charts: ChartLinks::for_repository(
                "https://raw.githubusercontent.com/",
                &repo,
                "main",
                "/visualizations/",
            ),
            updated: NaiveDate::from_ymd_opt(2024, 5, 17).expect("valid date"),
        }
    }

    #[test]
    fn chart_links_point_at_raw_files() {
        let charts = readme().charts;
        assert_eq!(
            charts.heatmap,
            "https://raw.githubusercontent.com/octo/activity/main/visualizations/heatmap.svg"
        );
        assert!(charts.activity.ends_with("/visualizations/activity-chart.svg"));
        assert!(charts.quality.ends_with("/visualizations/code-quality.svg"));
    }

    #[test]
    fn readme_embeds_every_chart() {
        let rendered = readme().report_render().expect("render");
        assert!(rendered.contains("Hi, I'm octo"));
        assert!(rendered.contains(
            "![Coding activity heatmap](https://raw.githubusercontent.com/octo/activity/main/visualizations/heatmap.svg)"
        ));
        assert!(rendered.contains("activity-chart.svg)"));
        assert!(rendered.contains("code-quality.svg)"));
        assert!(rendered.contains("Last updated: 2024-05-17"));
    }

    #[test]
    fn chart_table_rows_stay_on_one_line() {
        let rendered = readme().report_render().expect("render");
        let rows = rendered
            .lines()
            .filter(|line| line.contains('|'))
            .collect::<Vec<_>>();
        assert_eq!(rows.len(), 3, "header, alignment and caption rows:\n{rendered}");
        for row in &rows {
            assert!(row.starts_with('|') && row.ends_with('|'), "broken row: {row}");
        }
        assert!(rows[0].contains(
            "![Activity by project](https://raw.githubusercontent.com/octo/activity/main/visualizations/activity-chart.svg)"
        ));
        assert!(rows[0].contains("![Code quality trend]("));
        assert!(rows[1].contains(":-"));
    }

    #[test]
    fn readme_is_stable_for_same_day() {
        let first = readme().report_render().expect("render");
        let second = readme().report_render().expect("render");
        assert_eq!(first, second);
    }
}
