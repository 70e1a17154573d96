//! Bordered-card terminal output for demo results.

/// Accumulates named sections and renders them as bordered text cards.
///
/// Pure string formatting; the demo runner decides what goes in and where the
/// output is printed.
#[derive(Debug)]
pub struct Dashboard {
    title: String,
    cards: Vec<String>,
}

impl Dashboard {
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            cards: Vec::new(),
        }
    }

    /// Add one card. An empty line list renders a placeholder body.
    pub fn add_card(&mut self, header: &str, lines: &[String]) {
        let body = if lines.is_empty() {
            "  [ No data available ]".to_string()
        } else {
            lines
                .iter()
                .map(|line| format!("  * {line}"))
                .collect::<Vec<_>>()
                .join("\n")
        };
        self.cards
            .push(format!("+--- {header} ---+\n{body}\n+-----------------------+"));
    }

    #[must_use]
    pub fn render(&self) -> String {
        let banner = "=".repeat(10);
        let mut out = format!("{banner} {} {banner}\n", self.title);
        for card in &self.cards {
            out.push_str(card);
            out.push('\n');
        }
        out.push_str(&"=".repeat(22 + self.title.len()));
        out.push('\n');
        out
    }
}

#[cfg(test)]
mod tests {
    use super::Dashboard;
    use pretty_assertions::assert_eq;

    #[test]
    fn renders_title_banner_and_card_borders() {
        let mut dashboard = Dashboard::new("MIDDLE-EARTH INSIGHTS");
        dashboard.add_card("Movie", &["The Two Towers".to_string()]);

        let output = dashboard.render();
        assert!(output.contains("========== MIDDLE-EARTH INSIGHTS =========="));
        assert!(output.contains("+--- Movie ---+"));
        assert!(output.contains("  * The Two Towers"));
    }

    #[test]
    fn empty_card_renders_a_placeholder() {
        let mut dashboard = Dashboard::new("EMPTY");
        dashboard.add_card("Quotes", &[]);
        assert!(dashboard.render().contains("[ No data available ]"));
    }

    #[test]
    fn cards_render_in_insertion_order() {
        let mut dashboard = Dashboard::new("ORDER");
        dashboard.add_card("First", &["a".to_string()]);
        dashboard.add_card("Second", &["b".to_string()]);

        let output = dashboard.render();
        let first = output.find("+--- First ---+").expect("first card present");
        let second = output.find("+--- Second ---+").expect("second card present");
        assert!(first < second);
    }

    #[test]
    fn lines_keep_their_order_within_a_card() {
        let mut dashboard = Dashboard::new("LINES");
        dashboard.add_card("Quotes", &["one".to_string(), "two".to_string()]);
        let output = dashboard.render();
        assert_eq!(
            output.matches("  * ").count(),
            2,
            "both lines rendered as bullets"
        );
        let one = output.find("* one").expect("line one present");
        let two = output.find("* two").expect("line two present");
        assert!(one < two);
    }
}
