//! Static medical-terms glossary shown under a settled explanation.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

pub const GLOSSARY: [(&str, &str); 6] = [
    ("Consolidation", "An area where lung tissue is filled with fluid"),
    ("Infiltrate", "Abnormal substance in the lung tissue"),
    ("Pleural Effusion", "Fluid around the lung"),
    ("Cardiomegaly", "Enlarged heart"),
    ("Atelectasis", "Collapsed or partially collapsed lung"),
    ("Opacity", "Area that appears white/cloudy on X-ray"),
];

pub const HEADING: &str = "Medical Terms Glossary";

/// Heading plus one `Term: definition` entry per term, wrapped to `width`.
pub fn glossary_lines(width: u16) -> Vec<Line<'static>> {
    let term_style = Style::default().fg(Color::White).add_modifier(Modifier::BOLD);
    let def_style = Style::default().fg(Color::Gray);

    let mut lines = vec![Line::from(Span::styled(
        HEADING,
        Style::default().add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
    ))];

    for (term, definition) in GLOSSARY {
        let entry = format!("{term}: {definition}");
        let options = textwrap::Options::new(width.max(1) as usize)
            .break_words(true)
            .subsequent_indent("  ");
        for (i, row) in textwrap::wrap(&entry, options).into_iter().enumerate() {
            let row = row.into_owned();
            if i == 0 && row.len() > term.len() {
                let (head, tail) = row.split_at(term.len() + 1);
                lines.push(Line::from(vec![
                    Span::styled(head.to_string(), term_style),
                    Span::styled(tail.to_string(), def_style),
                ]));
            } else {
                lines.push(Line::from(Span::styled(row, def_style)));
            }
        }
    }
    lines
}
