use token_grid::persistence::{load_grid, save_grid};
use token_grid::{
    GridState, GridStore, GridView, InputEvent, MemoryStore, RecordingSurface, StoreError, TokenGrid,
    ViewSettings,
};

#[test]
fn layout_survives_save_and_reload() {
    let mut store = MemoryStore::new();
    let mut view = GridView::new(
        RecordingSurface::new(),
        TokenGrid::demo(),
        ViewSettings::default(),
        800.0,
        800.0,
    );

    // Carry the circle from (1, 1) to (7, 2).
    view.handle_input(InputEvent::Down { x: 61.0, y: 61.0 });
    view.handle_input(InputEvent::Move { x: 301.0, y: 101.0 });
    view.handle_input(InputEvent::Up { x: 301.0, y: 101.0 });
    save_grid(&mut store, "table-1", view.grid()).unwrap();

    let reloaded = load_grid(&store, "table-1").unwrap();
    assert_eq!((reloaded.rows(), reloaded.cols()), (15, 15));
    let circle = reloaded.token_at(7, 2).unwrap().expect("moved token persisted");
    assert_eq!(reloaded.token(circle).unwrap().color(), "#990099");
    assert!(reloaded.token_at(14, 13).unwrap().is_some());
    assert!(reloaded.token_at(1, 1).unwrap().is_none());
}

#[test]
fn reload_replaces_view_grid() {
    let mut store = MemoryStore::new();
    store.save_dimensions("small", 3, 4).unwrap();
    store
        .save_tokens("small", r##"[{"x":3,"y":2,"color":"#123","type":"square"}]"##)
        .unwrap();

    let mut view = GridView::new(
        RecordingSurface::new(),
        TokenGrid::demo(),
        ViewSettings::default(),
        800.0,
        800.0,
    );
    view.replace_grid(load_grid(&store, "small").unwrap());

    assert_eq!(view.camera().view_size(), (160.0, 120.0));
    assert!(view.grid().token_at(3, 2).unwrap().is_some());
    assert!(view.gesture().is_idle());
}

#[test]
fn store_state_matches_http_shape() {
    let json = r##"{"tokens":"[{\"x\":1,\"y\":1,\"color\":\"#990099\",\"type\":\"circle\"}]","rows":"15","cols":"15"}"##;
    let state = GridState::from_json(json).unwrap();
    let grid = TokenGrid::from_state(&state).unwrap();
    assert_eq!(grid.len(), 1);
    assert_eq!(GridState::from_grid(&grid).unwrap().tokens, state.tokens);
}

#[test]
fn unknown_grid_is_reported() {
    let store = MemoryStore::new();
    assert!(matches!(load_grid(&store, "missing"), Err(StoreError::NotFound(_))));
}
