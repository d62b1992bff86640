use crate::analyze::{QualitySample, QualityTrend};
use crate::report::svg::{Anchor, Svg};
use crate::report::{SvgReport, AXIS_COLOR, MUTED_COLOR, TITLE_COLOR};

const WIDTH: f64 = 800.0;
const HEIGHT: f64 = 400.0;
const LEFT: f64 = 60.0;
const RIGHT: f64 = WIDTH - 40.0;
const TOP: f64 = 70.0;
const BOTTOM: f64 = HEIGHT - 60.0;

const COMPLEXITY_COLOR: &str = "#cf222e";
const COMMENTS_COLOR: &str = "#0969da";

pub const NO_DATA_LABEL: &str = "No code quality data available";

impl SvgReport for QualityTrend {
    fn render_svg(&self) -> String {
        let mut doc = Svg::new(WIDTH, HEIGHT);
        doc.text(40.0, 40.0, "Code Quality Trend", 16, Anchor::Start, TITLE_COLOR);

        if self.is_empty() {
            doc.text(
                WIDTH / 2.0,
                HEIGHT / 2.0,
                NO_DATA_LABEL,
                14,
                Anchor::Middle,
                MUTED_COLOR,
            );
            return doc.render();
        }

        doc.line(LEFT, BOTTOM, RIGHT, BOTTOM, AXIS_COLOR)
            .line(LEFT, TOP, LEFT, BOTTOM, AXIS_COLOR);

        let complexity = series(&self.0, self.max_complexity(), |s| s.complexity);
        let comments = series(&self.0, self.max_comment_percentage(), |s| {
            s.comment_percentage
        });
        doc.polyline(&complexity, COMPLEXITY_COLOR)
            .polyline(&comments, COMMENTS_COLOR);

        if let (Some(first), Some(last)) = (self.0.first(), self.0.last()) {
            doc.text(LEFT, BOTTOM + 20.0, &first.date, 11, Anchor::Start, MUTED_COLOR);
            if self.0.len() > 1 {
                doc.text(RIGHT, BOTTOM + 20.0, &last.date, 11, Anchor::End, MUTED_COLOR);
            }
        }

        legend(&mut doc, 0, "Complexity", COMPLEXITY_COLOR, self.max_complexity());
        legend(
            &mut doc,
            1,
            "Comment %",
            COMMENTS_COLOR,
            self.max_comment_percentage(),
        );

        doc.render()
    }
}

fn series<F>(samples: &[QualitySample], max: f64, value: F) -> Vec<(f64, f64)>
where
    F: Fn(&QualitySample) -> f64,
{
    let max = max.max(1.0);
    let step = if samples.len() > 1 {
        (RIGHT - LEFT) / (samples.len() - 1) as f64
    } else {
        0.0
    };
    samples
        .iter()
        .enumerate()
        .map(|(index, sample)| {
            let x = if samples.len() > 1 {
                LEFT + index as f64 * step
            } else {
                (LEFT + RIGHT) / 2.0
            };
            let y = BOTTOM - value(sample) / max * (BOTTOM - TOP);
            (x, y)
        })
        .collect()
}

fn legend(doc: &mut Svg, slot: usize, label: &str, color: &str, max: f64) {
    let x = RIGHT - 260.0 + slot as f64 * 130.0;
    doc.rect(x, 30.0, 12.0, 12.0, color).text(
        x + 18.0,
        40.0,
        &format!("{label} (max {max:.1})"),
        11,
        Anchor::Start,
        MUTED_COLOR,
    );
}
