use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::App;
use crate::util::text::truncate_to_width;

const POPUP_W: u16 = 36;
const POPUP_H: u16 = 8;

/// Render the options modal for the chosen task, centered over the list
pub fn render_options_popup(frame: &mut Frame, app: &App, area: Rect) {
    let Some(task) = app.tasks.chosen().and_then(|id| app.tasks.store().get(id)) else {
        return;
    };

    let popup = centered_fixed(POPUP_W, POPUP_H, area);
    frame.render_widget(Clear, popup);

    let bg = app.theme.background;
    let key_style = Style::default()
        .fg(app.theme.highlight)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let desc_style = Style::default().fg(app.theme.text).bg(bg);

    let toggle = if task.completed { "Unfinish" } else { "Complete" };
    let inner_w = POPUP_W.saturating_sub(2) as usize;
    let lines = vec![
        Line::from(Span::styled(
            truncate_to_width(&format!(" {}", task.text), inner_w),
            Style::default()
                .fg(app.theme.text_bright)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        option_line("e", "Edit", key_style, desc_style),
        option_line("d", "Delete", key_style, desc_style),
        option_line("c", toggle, key_style, desc_style),
        option_line("Esc", "Cancel", key_style, desc_style),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" #{} ", task.id))
        .border_style(Style::default().fg(app.theme.dim).bg(bg))
        .style(Style::default().bg(bg));
    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, popup);
}

fn option_line<'a>(key: &'a str, desc: &'a str, key_style: Style, desc_style: Style) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!(" {:<5}", key), key_style),
        Span::styled(desc, desc_style),
    ])
}

/// A `w`×`h` rectangle centered in `area`, shrunk to fit
fn centered_fixed(w: u16, h: u16, area: Rect) -> Rect {
    let w = w.min(area.width);
    let h = h.min(area.height);
    Rect {
        x: area.x + (area.width - w) / 2,
        y: area.y + (area.height - h) / 2,
        width: w,
        height: h,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_fixed_fits_small_areas() {
        let r = centered_fixed(36, 8, Rect::new(0, 2, 80, 21));
        assert_eq!(r, Rect::new(22, 8, 36, 8));
        let r = centered_fixed(36, 8, Rect::new(0, 0, 20, 4));
        assert_eq!(r, Rect::new(0, 0, 20, 4));
    }
}
