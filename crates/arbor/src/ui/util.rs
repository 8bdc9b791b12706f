use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

/// Returns a centered popup rectangle using percent-based dimensions.
pub fn centered_rect(horizontal_percent: u16, vertical_percent: u16, area: Rect) -> Rect {
    let vertical_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - vertical_percent) / 2),
            Constraint::Percentage(vertical_percent),
            Constraint::Percentage((100 - vertical_percent) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - horizontal_percent) / 2),
            Constraint::Percentage(horizontal_percent),
            Constraint::Percentage((100 - horizontal_percent) / 2),
        ])
        .split(vertical_layout[1])[1]
}

/// Returns a centered popup sized as a percentage of `area`, never smaller
/// than `min_width` x `min_height` unless `area` itself is smaller.
pub fn popup_rect(
    width_percent: u16,
    height_percent: u16,
    (min_width, min_height): (u16, u16),
    area: Rect,
) -> Rect {
    let width = (area.width * width_percent / 100)
        .max(min_width)
        .min(area.width);
    let height = (area.height * height_percent / 100)
        .max(min_height)
        .min(area.height);

    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

/// Builds selectable list lines using a sliding window of `max_visible_items`
/// rows and highlights the selected row.
///
/// When the selection moves past the window, the window shifts so the
/// selected row stays visible.
pub fn selectable_list_lines(
    labels: &[String],
    selected_index: usize,
    max_visible_items: usize,
    empty_text: &str,
) -> Vec<Line<'static>> {
    if labels.is_empty() {
        return vec![Line::from(Span::styled(
            empty_text.to_string(),
            Style::default().fg(Color::DarkGray),
        ))];
    }

    let clamped_selected_index = selected_index.min(labels.len() - 1);
    let start_index = clamped_selected_index
        .saturating_add(1)
        .saturating_sub(max_visible_items);

    labels
        .iter()
        .enumerate()
        .skip(start_index)
        .take(max_visible_items)
        .map(|(index, label)| {
            if index == clamped_selected_index {
                Line::from(Span::styled(
                    format!("> {label}"),
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ))
            } else {
                Line::from(Span::styled(
                    format!("  {label}"),
                    Style::default().fg(Color::White),
                ))
            }
        })
        .collect()
}
