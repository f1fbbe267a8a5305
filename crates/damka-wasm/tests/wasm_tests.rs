#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

use damka_wasm::DamkaEngine;

#[wasm_bindgen_test]
fn create_standard_game() {
    let engine = DamkaEngine::new(false);
    assert_eq!(engine.turn(), "b");
    assert!(!engine.is_game_over());
    assert_eq!(engine.winner(), None);
    assert_eq!(engine.stone_count('b').unwrap(), 12);
    assert_eq!(engine.stone_count('w').unwrap(), 12);
}

#[wasm_bindgen_test]
fn fen_round_trip() {
    let engine = DamkaEngine::new(false);
    let fen = engine.fen();
    let engine2 = DamkaEngine::load_fen(&fen, false).unwrap();
    assert_eq!(engine.fen(), engine2.fen());
}

#[wasm_bindgen_test]
fn invalid_fen_errors() {
    assert!(DamkaEngine::load_fen("garbage", false).is_err());
}

#[wasm_bindgen_test]
fn movable_returns_front_rank() {
    let engine = DamkaEngine::new(false);
    let movable = engine.movable().unwrap();
    assert!(js_sys::Array::is_array(&movable));
    let arr = js_sys::Array::from(&movable);
    assert_eq!(arr.length(), 4);
    assert_eq!(arr.get(0).as_string().unwrap(), "2-1");
}

#[wasm_bindgen_test]
fn select_and_drop_zones() {
    let mut engine = DamkaEngine::new(false);
    assert_eq!(engine.selected(), None);

    engine.select("2-1").unwrap();
    assert_eq!(engine.selected(), Some("2-1".to_string()));

    let zones = js_sys::Array::from(&engine.drop_zones("2-1").unwrap());
    assert_eq!(zones.length(), 2);
    assert_eq!(zones.get(0).as_string().unwrap(), "3-0");
    assert_eq!(zones.get(1).as_string().unwrap(), "3-2");

    engine.deselect();
    assert_eq!(engine.selected(), None);
}

#[wasm_bindgen_test]
fn selecting_an_unmovable_square_errors() {
    let mut engine = DamkaEngine::new(false);
    assert!(engine.select("4-3").is_err());
    assert!(engine.select("5-0").is_err());
    assert!(engine.select("not-a-key").is_err());
}

#[wasm_bindgen_test]
fn stone_payload_commits_a_move() {
    let mut engine = DamkaEngine::new(false);
    let before = engine.fen();

    engine
        .drop_payload(r#"{"kind":"stone","from":"2-1"}"#, "3-2")
        .unwrap();

    assert_ne!(engine.fen(), before);
    assert_eq!(engine.turn(), "w");
}

#[wasm_bindgen_test]
fn alien_payloads_never_reach_the_engine() {
    let mut engine = DamkaEngine::new(false);
    let before = engine.fen();

    assert!(engine
        .drop_payload(r#"{"kind":"card","from":"2-1"}"#, "3-2")
        .is_err());
    assert!(engine.drop_payload("not json", "3-2").is_err());

    assert_eq!(engine.fen(), before);
    assert_eq!(engine.turn(), "b");
}

#[wasm_bindgen_test]
fn illegal_commits_are_no_ops() {
    let mut engine = DamkaEngine::new(false);
    let before = engine.fen();

    assert!(engine.commit_move("2-1", "4-1").is_err());
    assert!(engine.commit_move("5-0", "4-1").is_err());

    assert_eq!(engine.fen(), before);
}

#[wasm_bindgen_test]
fn capture_chain_through_the_adapter() {
    let mut engine = DamkaEngine::load_fen("8/8/3b4/4w3/8/6w1/8/8 b", false).unwrap();

    let zones = js_sys::Array::from(&engine.drop_zones("2-3").unwrap());
    assert_eq!(zones.length(), 1);
    assert_eq!(zones.get(0).as_string().unwrap(), "6-7");

    engine.commit_move("2-3", "6-7").unwrap();
    assert_eq!(engine.stone_count('w').unwrap(), 0);
    assert!(engine.is_game_over());
    assert_eq!(engine.winner(), Some("b".to_string()));
}

#[wasm_bindgen_test]
fn board_snapshot_lists_every_stone() {
    let engine = DamkaEngine::new(false);
    let board = engine.board().unwrap();
    assert!(js_sys::Array::is_array(&board));
    assert_eq!(js_sys::Array::from(&board).length(), 24);
}

#[wasm_bindgen_test]
fn forced_capture_flag_restricts_movable() {
    let engine = DamkaEngine::load_fen("8/8/1b3b2/2w5/8/8/8/8 b", true).unwrap();
    let arr = js_sys::Array::from(&engine.movable().unwrap());
    assert_eq!(arr.length(), 1);
    assert_eq!(arr.get(0).as_string().unwrap(), "2-1");
}
