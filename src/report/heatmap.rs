use crate::analyze::DailyActivity;
use crate::report::svg::{Anchor, Svg};
use crate::report::{SvgReport, ACTIVITY_COLOR, MUTED_COLOR, TITLE_COLOR};

const COLUMNS: usize = 52;
const CELL: f64 = 12.0;
const GAP: f64 = 3.0;
const MARGIN: f64 = 20.0;
const HEADER: f64 = 50.0;

impl SvgReport for DailyActivity {
    fn render_svg(&self) -> String {
        let rows = self.0.len().div_ceil(COLUMNS).max(1);
        let pitch = CELL + GAP;
        let width = MARGIN * 2.0 + COLUMNS as f64 * pitch - GAP;
        let height = MARGIN + HEADER + rows as f64 * pitch - GAP + MARGIN;

        let mut doc = Svg::new(width, height);
        doc.text(MARGIN, MARGIN + 14.0, "Coding Activity", 16, Anchor::Start, TITLE_COLOR);
        doc.text(
            MARGIN,
            MARGIN + 34.0,
            &format!("{} activities on {} days", self.total(), self.0.len()),
            11,
            Anchor::Start,
            MUTED_COLOR,
        );

        let max = self.scale_max() as f64;
        for (index, (date, count)) in self.0.iter().enumerate() {
            let column = index % COLUMNS;
            let row = index / COLUMNS;
            let x = MARGIN + column as f64 * pitch;
            let y = MARGIN + HEADER + row as f64 * pitch;
            let intensity = *count as f64 / max;
            doc.cell(
                x,
                y,
                CELL,
                ACTIVITY_COLOR,
                intensity,
                &format!("{date}: {count} activities"),
            );
        }

        doc.render()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexmap::IndexMap;

    fn daily(days: usize) -> DailyActivity {
        let map: IndexMap<String, usize> = (0..days)
            .map(|i| (format!("day-{i}"), i % 4 + 1))
            .collect();
        DailyActivity(map)
    }

    #[test]
    fn one_cell_per_day() {
        let svg = daily(60).render_svg();
        assert_eq!(svg.matches("<title>").count(), 60);
        assert!(svg.contains("day-59: 4 activities"));
    }

    #[test]
    fn wraps_after_fifty_two_columns() {
        let svg = daily(53).render_svg();
        // The 53rd cell starts a new row at the left margin.
        assert!(svg.contains(r#"<rect x="20" y="85""#));
        assert!(svg.contains(r#"<rect x="20" y="70""#));
    }

    #[test]
    fn busiest_day_has_full_intensity() {
        let mut map = IndexMap::new();
        map.insert("2024-01-01".to_string(), 2);
        map.insert("2024-01-02".to_string(), 4);
        let svg = DailyActivity(map).render_svg();
        assert!(svg.contains(r#"fill-opacity="0.5""#));
        assert!(svg.contains(r#"fill-opacity="1""#));
    }

    #[test]
    fn empty_heatmap_still_renders() {
        let svg = DailyActivity::default().render_svg();
        assert!(svg.contains("0 activities on 0 days"));
        assert!(!svg.contains("<rect"));
        assert!(!svg.contains("NaN"));
    }
}
