//! Tunable settings of the heuristic move picker.

use crate::engines::engine_trait::EngineError;
use crate::search::piece_values::CHECK_BONUS;
use crate::tables::opening_script::OpeningScript;

/// Ply after which the endgame pawn push stage is active.
pub const DEFAULT_ENDGAME_PLY_THRESHOLD: u32 = 40;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScholarConfig {
    /// Scripted opening; `None` disables the opening stage.
    pub opening_script: Option<OpeningScript>,
    pub endgame_ply_threshold: u32,
    pub capture_check_bonus: i32,
}

impl Default for ScholarConfig {
    fn default() -> Self {
        Self {
            opening_script: Some(OpeningScript::default()),
            endgame_ply_threshold: DEFAULT_ENDGAME_PLY_THRESHOLD,
            capture_check_bonus: CHECK_BONUS,
        }
    }
}

impl ScholarConfig {
    /// Apply a named option as sent by a front end (`OpeningBook`,
    /// `EndgamePly`, `CaptureCheckBonus`). Names are case-insensitive.
    pub fn set_option(&mut self, name: &str, value: &str) -> Result<(), EngineError> {
        let invalid = || EngineError::InvalidOptionValue {
            name: name.to_owned(),
            value: value.to_owned(),
        };
        let value = value.trim();

        match name.trim().to_ascii_lowercase().as_str() {
            "openingbook" => {
                let enabled: bool = value.to_ascii_lowercase().parse().map_err(|_| invalid())?;
                self.opening_script = enabled.then(OpeningScript::default);
            }
            "endgameply" => {
                self.endgame_ply_threshold = value.parse().map_err(|_| invalid())?;
            }
            "capturecheckbonus" => {
                self.capture_check_bonus = value.parse().map_err(|_| invalid())?;
            }
            _ => return Err(EngineError::UnknownOption(name.to_owned())),
        }
        Ok(())
    }
}
