use std::fmt::Write;

#[derive(Debug, Clone)]
pub struct Svg {
    width: f64,
    height: f64,
    elements: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    Start,
    Middle,
    End,
}

impl Anchor {
    fn as_str(&self) -> &'static str {
        match self {
            Anchor::Start => "start",
            Anchor::Middle => "middle",
            Anchor::End => "end",
        }
    }
}

impl Svg {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            elements: vec![],
        }
    }

    pub fn rect(&mut self, x: f64, y: f64, width: f64, height: f64, fill: &str) -> &mut Self {
        self.elements.push(format!(
            r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{}"/>"#,
            num(x),
            num(y),
            num(width),
            num(height),
            escape(fill)
        ));
        self
    }

    pub fn cell(
        &mut self,
        x: f64,
        y: f64,
        size: f64,
        fill: &str,
        opacity: f64,
        title: &str,
    ) -> &mut Self {
        self.elements.push(format!(
            r#"<rect x="{}" y="{}" width="{}" height="{}" rx="2" fill="{}" fill-opacity="{}"><title>{}</title></rect>"#,
            num(x),
            num(y),
            num(size),
            num(size),
            escape(fill),
            num(opacity),
            escape(title)
        ));
        self
    }

    pub fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, stroke: &str) -> &mut Self {
        self.elements.push(format!(
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="1"/>"#,
            num(x1),
            num(y1),
            num(x2),
            num(y2),
            escape(stroke)
        ));
        self
    }

    pub fn polyline(&mut self, points: &[(f64, f64)], stroke: &str) -> &mut Self {
        let points = points
            .iter()
            .map(|(x, y)| format!("{},{}", num(*x), num(*y)))
            .collect::<Vec<_>>()
            .join(" ");
        self.elements.push(format!(
            r#"<polyline points="{}" fill="none" stroke="{}" stroke-width="2"/>"#,
            points,
            escape(stroke)
        ));
        self
    }

    pub fn text(
        &mut self,
        x: f64,
        y: f64,
        content: &str,
        size: u32,
        anchor: Anchor,
        fill: &str,
    ) -> &mut Self {
        self.elements.push(format!(
            r#"<text x="{}" y="{}" font-size="{}" text-anchor="{}" fill="{}">{}</text>"#,
            num(x),
            num(y),
            size,
            anchor.as_str(),
            escape(fill),
            escape(content)
        ));
        self
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}" font-family="-apple-system, BlinkMacSystemFont, 'Segoe UI', Helvetica, Arial, sans-serif">"#,
            w = num(self.width),
            h = num(self.height),
        );
        for element in &self.elements {
            let _ = writeln!(out, "  {element}");
        }
        out.push_str("</svg>\n");
        out
    }
}

// two decimals, no trailing zeros
fn num(value: f64) -> String {
    let value = if value.is_finite() { value } else { 0.0 };
    let formatted = format!("{value:.2}");
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
    match trimmed {
        "-0" | "" => "0".to_string(),
        other => other.to_string(),
    }
}

pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            c => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_are_compact() {
        assert_eq!(num(12.0), "12");
        assert_eq!(num(12.5), "12.5");
        assert_eq!(num(1.0 / 3.0), "0.33");
        assert_eq!(num(-0.001), "0");
        assert_eq!(num(f64::NAN), "0");
    }

    #[test]
    fn text_is_escaped() {
        let mut svg = Svg::new(10.0, 10.0);
        svg.text(0.0, 0.0, "<a & b>", 12, Anchor::Middle, "#000");
        let rendered = svg.render();
        assert!(rendered.contains("&lt;a &amp; b&gt;"));
        assert!(rendered.contains(r#"text-anchor="middle""#));
    }

    #[test]
    fn renders_elements_in_order() {
        let mut svg = Svg::new(100.0, 50.0);
        svg.rect(0.0, 0.0, 100.0, 50.0, "#fff")
            .polyline(&[(0.0, 1.0), (2.5, 3.0)], "#f00");
        let rendered = svg.render();
        assert!(rendered.starts_with("<svg "));
        assert!(rendered.contains(r#"viewBox="0 0 100 50""#));
        assert!(rendered.contains(r#"points="0,1 2.5,3""#));
        assert!(rendered.find("<rect").expect("rect") < rendered.find("<polyline").expect("polyline"));
        assert!(rendered.trim_end().ends_with("</svg>"));
    }
}
