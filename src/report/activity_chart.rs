use crate::analyze::ProjectActivity;
use crate::report::svg::{Anchor, Svg};
use crate::report::{SvgReport, ACTIVITY_COLOR, AXIS_COLOR, MUTED_COLOR, TITLE_COLOR};

const BAR_WIDTH: f64 = 40.0;
const BAR_GAP: f64 = 20.0;
const PLOT_HEIGHT: f64 = 200.0;
const MARGIN: f64 = 40.0;
const HEADER: f64 = 40.0;
const LABELS: f64 = 40.0;
const MIN_WIDTH: f64 = 400.0;

impl SvgReport for ProjectActivity {
    fn render_svg(&self) -> String {
        let bars = self.0.len() as f64;
        let width = (MARGIN * 2.0 + bars * (BAR_WIDTH + BAR_GAP) - BAR_GAP).max(MIN_WIDTH);
        let height = MARGIN + HEADER + PLOT_HEIGHT + LABELS;
        let baseline = MARGIN + HEADER + PLOT_HEIGHT;

        let mut doc = Svg::new(width, height);
        doc.text(MARGIN, MARGIN, "Activity by Project", 16, Anchor::Start, TITLE_COLOR);
        doc.line(MARGIN, baseline, width - MARGIN, baseline, AXIS_COLOR);

        let max = self.scale_max() as f64;
        for (index, (project, activity)) in self.0.iter().enumerate() {
            let bar_height = *activity as f64 / max * PLOT_HEIGHT;
            let x = MARGIN + index as f64 * (BAR_WIDTH + BAR_GAP);
            let center = x + BAR_WIDTH / 2.0;
            doc.rect(x, baseline - bar_height, BAR_WIDTH, bar_height, ACTIVITY_COLOR)
                .text(
                    center,
                    baseline - bar_height - 5.0,
                    &activity.to_string(),
                    11,
                    Anchor::Middle,
                    MUTED_COLOR,
                )
                .text(center, baseline + 18.0, project, 12, Anchor::Middle, TITLE_COLOR);
        }

        doc.render()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexmap::IndexMap;

    #[test]
    fn bars_scale_to_busiest_project() {
        let mut map = IndexMap::new();
        map.insert("api".to_string(), 10);
        map.insert("web".to_string(), 5);
        let svg = ProjectActivity(map).render_svg();

        // baseline = 40 + 40 + 200
        assert!(svg.contains(r#"<rect x="40" y="80" width="40" height="200""#));
        assert!(svg.contains(r#"<rect x="100" y="180" width="40" height="100""#));
        assert!(svg.contains(r##"<text x="60" y="298" font-size="12" text-anchor="middle" fill="#24292f">api</text>"##));
        assert!(svg.contains(r##"<text x="120" y="298" font-size="12" text-anchor="middle" fill="#24292f">web</text>"##));
    }

    #[test]
    fn project_names_are_escaped() {
        let mut map = IndexMap::new();
        map.insert("a&b".to_string(), 1);
        let svg = ProjectActivity(map).render_svg();
        assert!(svg.contains(">a&amp;b</text>"));
    }

    #[test]
    fn empty_chart_keeps_minimum_width() {
        let svg = ProjectActivity::default().render_svg();
        assert!(svg.contains(r#"width="400""#));
        assert!(!svg.contains("<rect"));
    }
}
