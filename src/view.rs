//! Terminal rendering of the chat screen.
//!
//! The surface is drawn from the element tree every frame: one line per
//! rendered element, indented by depth, with the active element highlighted.
//! The chat button sits on the last row and is drawn in every state.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::app::ChatApp;
use crate::dom::{Element, ElementKind};
use crate::screen::ChatIcon;
use crate::theme::{self, Theme};
use crate::window_state::WindowState;

const SURFACE_WIDTH: u16 = 48;
const SURFACE_HEIGHT: u16 = 18;

pub fn render(frame: &mut Frame, app: &ChatApp) {
    let area = frame.area();
    if area.width == 0 || area.height < 2 {
        return;
    }
    let state = app.screen().state();
    if !state.minimized() {
        render_surface(frame, app, surface_rect(area, state));
    }
    let button_row = Rect {
        x: area.x,
        y: area.y.saturating_add(area.height - 1),
        width: area.width,
        height: 1,
    };
    render_chat_button(frame, app, button_row);
}

/// Where the open surface goes: the whole area above the button row when
/// expanded, centered when windowed, otherwise docked bottom-right.
pub fn surface_rect(area: Rect, state: WindowState) -> Rect {
    let avail_height = area.height.saturating_sub(1);
    if state.expanded() {
        return Rect {
            height: avail_height,
            ..area
        };
    }
    let width = area.width.min(SURFACE_WIDTH).max(1);
    let height = avail_height.min(SURFACE_HEIGHT).max(1);
    let (x, y) = if state.windowed() {
        (
            area.x.saturating_add(area.width.saturating_sub(width) / 2),
            area.y.saturating_add(avail_height.saturating_sub(height) / 2),
        )
    } else {
        (
            area.x.saturating_add(area.width.saturating_sub(width)),
            area.y.saturating_add(avail_height.saturating_sub(height)),
        )
    };
    Rect {
        x,
        y,
        width,
        height,
    }
}

fn render_surface(frame: &mut Frame, app: &ChatApp, rect: Rect) {
    let theme = &app.options().theme;
    let state = app.screen().state();
    frame.render_widget(Clear, rect);

    let mut title = if state.shows_header() {
        format!(" {} ", app.options().title)
    } else {
        String::new()
    };
    if state.windowed() {
        title.push_str("[windowed] ");
    }
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.accent()))
        .title(Span::styled(
            title,
            Style::default()
                .fg(theme.header_fg())
                .bg(theme.accent())
                .add_modifier(Modifier::BOLD),
        ));

    let tree = app.tree();
    let mut lines: Vec<Line<'static>> = Vec::new();
    if let Some(root) = app.screen().surface_root() {
        for id in tree.descendants(root) {
            if id == app.anchor() {
                continue;
            }
            let Some(element) = tree.get(id) else {
                continue;
            };
            let draft = (id == app.composer()).then(|| app.draft());
            let indent = tree.depth(id).saturating_sub(1);
            if let Some(line) = element_line(element, tree.is_active(id), draft, indent, theme) {
                lines.push(line);
            }
        }
    }
    lines.push(Line::default());
    lines.push(status_line(app));

    let paragraph = Paragraph::new(lines)
        .style(Style::default().fg(theme::surface_fg()).bg(theme::surface_bg()))
        .block(block);
    frame.render_widget(paragraph, rect);
}

/// The rendered line for one element, or `None` for elements drawn elsewhere
/// (containers, and the heading which becomes the block title).
pub fn element_line(
    element: &Element,
    focused: bool,
    draft: Option<&str>,
    indent: usize,
    theme: &Theme,
) -> Option<Line<'static>> {
    let label = element.label().to_string();
    let (text, style) = match element.kind() {
        ElementKind::Container if element.content_editable() => {
            (format!("| {label}"), Style::default())
        }
        ElementKind::Container | ElementKind::Heading => return None,
        ElementKind::Text => (label, Style::default()),
        ElementKind::Button => (format!("[ {label} ]"), Style::default().fg(theme.icon())),
        ElementKind::Anchor => (label, Style::default().add_modifier(Modifier::UNDERLINED)),
        ElementKind::TextArea => match draft {
            Some(draft) if !draft.is_empty() => (format!("> {draft}"), Style::default()),
            _ => (format!("> {label}"), Style::default().fg(theme::muted_fg())),
        },
        ElementKind::Input(_) | ElementKind::Select => (format!("< {label} >"), Style::default()),
    };
    let style = if focused {
        Style::default()
            .fg(theme::focus_fg())
            .bg(theme::focus_bg())
            .add_modifier(Modifier::BOLD)
    } else {
        style
    };
    Some(Line::from(vec![
        Span::raw("  ".repeat(indent)),
        Span::styled(text, style),
    ]))
}

fn status_line(app: &ChatApp) -> Line<'static> {
    let screen = app.screen();
    let aria = screen
        .dialog_attributes()
        .map(|attrs| attrs.to_string())
        .unwrap_or_default();
    Line::from(Span::styled(
        format!("{} {}", screen.class_name(), aria),
        Style::default().fg(theme::muted_fg()),
    ))
}

fn render_chat_button(frame: &mut Frame, app: &ChatApp, row: Rect) {
    let theme = &app.options().theme;
    let title = app.options().title.as_str();
    let button = app.screen().chat_button(
        title,
        Some(app.host().unread()),
        app.options().agent_avatar.as_deref(),
    );
    let icon = match button.icon() {
        ChatIcon::Chat => "◉",
        ChatIcon::Close => "✕",
    };
    let content = if button.shows_content() {
        format!(" {icon} {} ", button.text())
    } else {
        " [avatar] ".to_string()
    };
    let focused = app.tree().is_active(app.anchor());
    let style = if focused {
        Style::default()
            .fg(theme::focus_fg())
            .bg(theme::focus_bg())
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.header_fg()).bg(theme.accent())
    };
    let mut spans = vec![Span::styled(content, style)];
    if let Some(badge) = button.badge_text() {
        spans.push(Span::styled(
            format!(" {badge} "),
            Style::default().bg(theme::badge_bg()).add_modifier(Modifier::BOLD),
        ));
    }
    let paragraph = Paragraph::new(Line::from(spans)).alignment(Alignment::Right);
    frame.render_widget(paragraph, row);
}
