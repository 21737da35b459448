use album_core::{AppViewModel, ContentView, ItemBreakdown, ItemView, LoadState, SearchResultView};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap};

use super::constants::*;
use super::input::Cursor;
use super::layout::compute_layout;

pub fn render(frame: &mut Frame, view: &AppViewModel, cursor: &Cursor) {
    let layout = compute_layout(frame.area());

    render_search(frame, layout.search, view);
    render_cards(frame, layout.cards, view, cursor);
    render_content(frame, layout.content, view, cursor);
    render_status(frame, layout.status, view);
}

fn render_search(frame: &mut Frame, area: Rect, view: &AppViewModel) {
    let block = Block::default()
        .title(TITLE_SEARCH)
        .title_style(title())
        .borders(Borders::ALL)
        .border_style(border());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let line = if view.search_query.is_empty() {
        Line::from(Span::styled(SEARCH_PLACEHOLDER, muted()))
    } else {
        Line::from(view.search_query.as_str())
    };
    frame.render_widget(Paragraph::new(line), inner);

    if inner.width > 0 {
        frame.set_cursor_position((search_cursor_x(inner, &view.search_query), inner.y));
    }
}

/// Column of the text cursor, pinned to the last cell for long queries.
fn search_cursor_x(inner: Rect, query: &str) -> u16 {
    let typed = u16::try_from(query.chars().count()).unwrap_or(u16::MAX);
    inner
        .x
        .saturating_add(typed)
        .min(inner.right().saturating_sub(1))
}

fn render_cards(frame: &mut Frame, area: Rect, view: &AppViewModel, cursor: &Cursor) {
    let block = Block::default()
        .title(format!("{}({}) ", TITLE_CARDS, view.cards.len()))
        .title_style(title())
        .borders(Borders::ALL)
        .border_style(border());

    let items: Vec<ListItem> = view
        .cards
        .iter()
        .map(|card| {
            let text = format!(
                "#{:<4} User {:<3} {:>3} unseen",
                card.album_id, card.user_id, card.unseen_count
            );
            let style = if card.selected {
                card_selected()
            } else {
                Style::default()
            };
            ListItem::new(Span::styled(text, style))
        })
        .collect();

    let mut state = ListState::default();
    if !view.cards.is_empty() {
        state.select(Some(cursor.card));
    }

    let list = List::new(items)
        .block(block)
        .highlight_style(cursor_highlight())
        .highlight_symbol("> ");
    frame.render_stateful_widget(list, area, &mut state);
}

fn render_content(frame: &mut Frame, area: Rect, view: &AppViewModel, cursor: &Cursor) {
    let (heading, lines, focus_line) = match &view.content {
        ContentView::Detail(detail) => detail_lines(detail, cursor.item),
        ContentView::SearchResults(results) => {
            results_lines(results, &view.search_query, &view.load, cursor.item)
        }
    };

    let block = Block::default()
        .title(heading)
        .title_style(title())
        .borders(Borders::ALL)
        .border_style(border());
    let inner_height = block.inner(area).height;
    let scroll = focus_line.saturating_sub(inner_height.saturating_sub(1));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0));
    frame.render_widget(paragraph, area);
}

fn detail_lines(detail: &ItemBreakdown, cursor_item: usize) -> (String, Vec<Line<'static>>, u16) {
    let heading = format!(
        " Album #{} | {} items, {} seen, {} unseen ",
        detail.album_id, detail.total_items, detail.seen_count, detail.unseen_count
    );
    if detail.items.is_empty() {
        let empty = Line::from(Span::styled("No items for this album", muted()));
        return (heading, vec![empty], 0);
    }
    (heading, vec![item_line(&detail.items, Some(cursor_item))], 0)
}

fn results_lines(
    results: &[SearchResultView],
    query: &str,
    load: &LoadState,
    cursor_item: usize,
) -> (String, Vec<Line<'static>>, u16) {
    let heading = if query.is_empty() {
        format!(" All albums ({}) ", results.len())
    } else {
        format!(" Results for \"{}\" ({}) ", query, results.len())
    };

    if results.is_empty() {
        let message = match load {
            LoadState::Idle | LoadState::Loading { .. } => "Waiting for albums...",
            LoadState::Failed { .. } => "No albums available",
            LoadState::Loaded { .. } => "No albums match",
        };
        return (heading, vec![Line::from(Span::styled(message, muted()))], 0);
    }

    let mut lines = Vec::with_capacity(results.len() * 2);
    let mut offset = 0;
    let mut focus_line = 0;
    for result in results {
        let local = cursor_item
            .checked_sub(offset)
            .filter(|index| *index < result.items.len());
        if local.is_some() {
            focus_line = u16::try_from(lines.len() + 1).unwrap_or(u16::MAX);
        }
        lines.push(Line::from(Span::styled(
            format!("User {} (album #{})", result.user_id, result.album_id),
            title(),
        )));
        lines.push(item_line(&result.items, local));
        offset += result.items.len();
    }
    (heading, lines, focus_line)
}

fn item_line(items: &[ItemView], cursor_item: Option<usize>) -> Line<'static> {
    let mut spans = Vec::with_capacity(items.len() * 2);
    for (index, item) in items.iter().enumerate() {
        if index > 0 {
            spans.push(Span::raw(" "));
        }
        let mut style = if item.seen {
            item_seen()
        } else {
            item_unseen()
        };
        if cursor_item == Some(index) {
            style = style.patch(cursor_highlight());
        }
        spans.push(Span::styled(item.text.clone(), style));
    }
    Line::from(spans)
}

pub fn load_label(load: &LoadState) -> String {
    match load {
        LoadState::Idle => "Starting".to_string(),
        LoadState::Loading { bytes } => format!("Loading albums... {} bytes", bytes),
        LoadState::Loaded { count, fetched_at } => {
            format!("{} albums loaded at {}", count, fetched_at)
        }
        LoadState::Failed { reason } => format!("Failed to load albums: {}", reason),
    }
}

fn render_status(frame: &mut Frame, area: Rect, view: &AppViewModel) {
    let style = match view.load {
        LoadState::Failed { .. } => status_error(),
        _ => status_bar(),
    };
    let text = format!(
        " {} | Seen items: {} | {}",
        load_label(&view.load),
        view.seen_total,
        KEY_HINTS
    );
    frame.render_widget(Paragraph::new(Line::from(text)).style(style), area);
}
