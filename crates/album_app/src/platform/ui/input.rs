use album_core::{AppViewModel, ContentView, ItemView, Msg};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Presentation-only cursor positions; never part of core state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    pub card: usize,
    pub item: usize,
}

impl Cursor {
    /// Keep both positions inside the current view.
    pub fn clamp(&mut self, view: &AppViewModel) {
        self.card = self.card.min(view.cards.len().saturating_sub(1));
        self.item = self.item.min(content_items(view).len().saturating_sub(1));
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiCommand {
    Dispatch(Msg),
    Redraw,
    Quit,
    Ignore,
}

/// Items of the content pane in display order; search results are flattened.
pub fn content_items(view: &AppViewModel) -> Vec<&ItemView> {
    match &view.content {
        ContentView::Detail(detail) => detail.items.iter().collect(),
        ContentView::SearchResults(results) => {
            results.iter().flat_map(|result| result.items.iter()).collect()
        }
    }
}

pub fn handle_key(key: KeyEvent, view: &AppViewModel, cursor: &mut Cursor) -> UiCommand {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Esc => UiCommand::Quit,
        KeyCode::Char('c') if ctrl => UiCommand::Quit,
        KeyCode::Up => {
            cursor.card = cursor.card.saturating_sub(1);
            UiCommand::Redraw
        }
        KeyCode::Down => {
            cursor.card = (cursor.card + 1).min(view.cards.len().saturating_sub(1));
            UiCommand::Redraw
        }
        KeyCode::Left => {
            cursor.item = cursor.item.saturating_sub(1);
            UiCommand::Redraw
        }
        KeyCode::Right => {
            cursor.item = (cursor.item + 1).min(content_items(view).len().saturating_sub(1));
            UiCommand::Redraw
        }
        KeyCode::Enter => match view.cards.get(cursor.card) {
            Some(card) => UiCommand::Dispatch(Msg::AlbumSelected(card.album_id)),
            None => UiCommand::Ignore,
        },
        KeyCode::Tab => match content_items(view).get(cursor.item) {
            Some(item) => UiCommand::Dispatch(Msg::ItemClicked(item.text.clone())),
            None => UiCommand::Ignore,
        },
        KeyCode::Backspace => {
            let mut query = view.search_query.clone();
            if query.pop().is_some() {
                UiCommand::Dispatch(Msg::SearchChanged(query))
            } else {
                UiCommand::Ignore
            }
        }
        // AltGr arrives as Ctrl+Alt on some platforms and still types a character.
        KeyCode::Char(ch) if ctrl == key.modifiers.contains(KeyModifiers::ALT) => {
            UiCommand::Dispatch(Msg::SearchChanged(format!("{}{}", view.search_query, ch)))
        }
        _ => UiCommand::Ignore,
    }
}
