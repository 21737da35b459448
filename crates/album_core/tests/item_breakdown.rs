use album_core::{update, Album, AppState, ContentView, ItemView, Msg};

fn loaded(albums: Vec<Album>) -> AppState {
    let (state, _) = update(AppState::new(), Msg::AppStarted);
    update(
        state,
        Msg::AlbumsLoaded {
            albums,
            fetched_at: "00:00:00".to_string(),
        },
    )
    .0
}

fn item(text: &str, seen: bool) -> ItemView {
    ItemView {
        text: text.to_string(),
        seen,
    }
}

#[test]
fn repeated_words_count_per_occurrence() {
    let state = loaded(vec![Album::new(7, 3, "a a b")]);

    let before = state.item_breakdown(7);
    assert_eq!(
        (before.total_items, before.seen_count, before.unseen_count),
        (3, 0, 3)
    );

    let (state, _) = update(state, Msg::ItemClicked("a".to_string()));
    let after = state.item_breakdown(7);
    assert_eq!(after.total_items, 3);
    assert_eq!(after.seen_count, 2);
    assert_eq!(after.unseen_count, 1);
    assert_eq!(
        after.items,
        vec![item("a", true), item("a", true), item("b", false)]
    );
}

#[test]
fn detail_view_shows_selected_album_breakdown() {
    let state = loaded(vec![Album::new(1, 1, "x y"), Album::new(2, 1, "y z")]);
    let (state, _) = update(state, Msg::AlbumSelected(2));

    let ContentView::Detail(detail) = state.view().content else {
        panic!("expected detail view");
    };
    assert_eq!(detail.album_id, 2);
    assert_eq!(detail.items, vec![item("y", true), item("z", true)]);
    assert_eq!(detail.unseen_count, 0);
    assert_eq!(state.item_breakdown(1).items, vec![item("x", false), item("y", true)]);
}

#[test]
fn counts_always_add_up() {
    let mut state = loaded(vec![
        Album::new(1, 1, "one two two three"),
        Album::new(2, 1, "two four"),
        Album::new(3, 1, ""),
    ]);
    let msgs = vec![
        Msg::ItemClicked("two".to_string()),
        Msg::SearchChanged("fo".to_string()),
        Msg::AlbumSelected(2),
        Msg::ItemClicked("three".to_string()),
        Msg::AlbumSelected(3),
    ];

    for msg in msgs {
        state = update(state, msg).0;
        for id in 1..=3 {
            let breakdown = state.item_breakdown(id);
            assert_eq!(
                breakdown.total_items,
                breakdown.seen_count + breakdown.unseen_count
            );
        }
    }

    let first = state.item_breakdown(1);
    assert_eq!((first.seen_count, first.unseen_count), (3, 1));
}

#[test]
fn empty_title_has_zero_items() {
    let state = loaded(vec![Album::new(5, 1, "")]);
    let breakdown = state.item_breakdown(5);

    assert!(breakdown.items.is_empty());
    assert_eq!(breakdown.total_items, 0);
}
