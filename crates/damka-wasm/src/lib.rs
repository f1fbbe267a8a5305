use wasm_bindgen::prelude::*;

use damka_core::game::Damka;
use damka_core::types::{Player, Rules, Square};
use serde::{Deserialize, Serialize};

/// Initialize panic hook for readable error messages in browser console.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Drag-and-drop payload. Only a payload tagged `"stone"` ever reaches the
/// engine; anything else fails deserialization at this boundary and the
/// drop is rejected as a no-op.
#[derive(Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
enum DropPayload {
    Stone { from: String },
}

/// Serializable stone snapshot for JS renderers.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsStone {
    square: String,
    owner: String,
    king: bool,
}

fn parse_square(input: &str) -> Result<Square, JsError> {
    Square::parse(input).ok_or_else(|| JsError::new(&format!("invalid square key: {input}")))
}

/// Main WASM-exported checkers engine.
#[wasm_bindgen]
pub struct DamkaEngine {
    game: Damka,
}

#[wasm_bindgen]
impl DamkaEngine {
    /// Create a new game from the standard setup. `forced_capture` turns
    /// on side-wide mandatory capturing.
    #[wasm_bindgen(constructor)]
    pub fn new(forced_capture: bool) -> DamkaEngine {
        Self {
            game: Damka::with_rules(Rules { forced_capture }),
        }
    }

    /// Load a position from its notation string.
    #[wasm_bindgen(js_name = "loadFen")]
    pub fn load_fen(fen: &str, forced_capture: bool) -> Result<DamkaEngine, JsError> {
        let game = Damka::from_fen_with_rules(fen, Rules { forced_capture })
            .map_err(|e| JsError::new(&e.to_string()))?;
        Ok(Self { game })
    }

    /// Get the current position as a notation string.
    pub fn fen(&self) -> String {
        self.game.fen()
    }

    /// Returns "w" or "b" for the side to move.
    pub fn turn(&self) -> String {
        self.game.turn().to_code().to_string()
    }

    /// Square keys of every stone the side to move may pick up.
    pub fn movable(&self) -> Result<JsValue, JsError> {
        let keys: Vec<String> = self
            .game
            .movable()
            .into_iter()
            .map(Square::key)
            .collect();
        serde_wasm_bindgen::to_value(&keys).map_err(|e| JsError::new(&e.to_string()))
    }

    /// Pick a stone up. Errors if the square holds no movable stone.
    pub fn select(&mut self, square: &str) -> Result<(), JsError> {
        let square = parse_square(square)?;
        self.game
            .select(square)
            .map_err(|e| JsError::new(&e.to_string()))
    }

    pub fn selected(&self) -> Option<String> {
        self.game.selected().map(Square::key)
    }

    pub fn deselect(&mut self) {
        self.game.deselect();
    }

    /// Legal drop targets for the stone on `square`, as square keys.
    #[wasm_bindgen(js_name = "dropZones")]
    pub fn drop_zones(&mut self, square: &str) -> Result<JsValue, JsError> {
        let square = parse_square(square)?;
        let zones = self
            .game
            .drop_zones_for(square)
            .map_err(|e| JsError::new(&e.to_string()))?;
        let keys: Vec<String> = zones.into_iter().map(Square::key).collect();
        serde_wasm_bindgen::to_value(&keys).map_err(|e| JsError::new(&e.to_string()))
    }

    /// Handle a drop whose dragged payload is the JSON produced at drag
    /// start. The payload must carry the `"stone"` tag; the engine is not
    /// consulted for anything else.
    #[wasm_bindgen(js_name = "drop")]
    pub fn drop_payload(&mut self, payload: &str, destination: &str) -> Result<(), JsError> {
        let DropPayload::Stone { from } = serde_json::from_str(payload)
            .map_err(|e| JsError::new(&format!("rejected drop payload: {e}")))?;
        self.commit_move(&from, destination)
    }

    /// Commit the stone on `from` to `to`. The only board-mutating entry
    /// point.
    #[wasm_bindgen(js_name = "commitMove")]
    pub fn commit_move(&mut self, from: &str, to: &str) -> Result<(), JsError> {
        let from = parse_square(from)?;
        let to = parse_square(to)?;
        self.game
            .commit_move(from, to)
            .map_err(|e| JsError::new(&e.to_string()))
    }

    /// Returns true when the side to move has no legal move.
    #[wasm_bindgen(js_name = "isGameOver")]
    pub fn is_game_over(&self) -> bool {
        self.game.is_game_over()
    }

    /// Returns "w" or "b" once the game is decided.
    pub fn winner(&self) -> Option<String> {
        self.game.winner().map(|p| p.to_code().to_string())
    }

    /// Stone count for "w" or "b".
    #[wasm_bindgen(js_name = "stoneCount")]
    pub fn stone_count(&self, player: char) -> Result<u32, JsError> {
        let player = Player::from_code(player)
            .ok_or_else(|| JsError::new("invalid player: expected 'w' or 'b'"))?;
        Ok(self.game.count(player) as u32)
    }

    /// Snapshot of every stone on the board for rendering.
    pub fn board(&self) -> Result<JsValue, JsError> {
        let stones: Vec<JsStone> = self
            .game
            .board()
            .stones()
            .map(|(square, stone)| JsStone {
                square: square.key(),
                owner: stone.owner.to_code().to_string(),
                king: stone.king,
            })
            .collect();
        serde_wasm_bindgen::to_value(&stones).map_err(|e| JsError::new(&e.to_string()))
    }
}
