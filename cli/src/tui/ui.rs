use modelfetch_core::selection::{Entry, Selection};
use ratatui::{
    style::{Modifier, Style},
    text::Line,
    widgets::{Paragraph, Wrap},
    Frame,
};

pub const INSTRUCTIONS: [&str; 3] = [
    "Select the models you wish to download using the arrow keys.",
    "Press SPACE to select/unselect, ENTER to confirm.",
    "Required models are pre-selected and cannot be changed.",
];

pub const TOO_SMALL: &str =
    "The terminal window is too small to display the content. Please resize and try again.";

const SEPARATOR_WIDTH: usize = 80;

pub fn entry_line(entry: &Entry) -> String {
    format!(
        "{} {} (importance: {})",
        entry.mark().as_str(),
        entry.descriptor.name,
        entry.descriptor.tier
    )
}

pub fn draw(f: &mut Frame, selection: &Selection) {
    let area = f.area();
    let header = INSTRUCTIONS.len() + 1;
    let visible = (area.height as usize).saturating_sub(header);

    let mut lines: Vec<Line> = INSTRUCTIONS.iter().map(|text| Line::raw(*text)).collect();
    lines.push(Line::raw("-".repeat(SEPARATOR_WIDTH)));

    // Rows past the bottom are dropped, there is no scrolling.
    lines.extend(
        selection
            .entries()
            .iter()
            .enumerate()
            .take(visible)
            .map(|(i, entry)| {
                let style = if i == selection.cursor() {
                    Style::default().add_modifier(Modifier::REVERSED)
                } else {
                    Style::default()
                };
                Line::styled(entry_line(entry), style)
            }),
    );

    f.render_widget(Paragraph::new(lines), area);
}

pub fn draw_too_small(f: &mut Frame) {
    let notice = Paragraph::new(TOO_SMALL).wrap(Wrap { trim: true });
    f.render_widget(notice, f.area());
}
