pub const WINDOW_TITLE: &str = "Rock, Paper, Scissors";
pub const WINDOW_WIDTH: i32 = 600;
pub const WINDOW_HEIGHT: i32 = 520;
pub const TARGET_FPS: u32 = 60;

/// Assets are looked up relative to the working directory.
pub const ASSET_DIR: &str = ".";
pub const WIN_SOUND: &str = "win.wav";
pub const LOSE_SOUND: &str = "lose.wav";

pub const ICON_SIZE: i32 = 150;
pub const BUTTON_SIZE: f32 = 160.0;
pub const BUTTON_GAP: f32 = 20.0;
pub const MARGIN: f32 = 20.0;
pub const FONT_SIZE: i32 = 20;

pub const INSTRUCTION: &str = "Choose Rock, Paper, or Scissors:";
pub const PLAYER_PREFIX: &str = "Your choice: ";
pub const COMPUTER_PREFIX: &str = "Computer's choice: ";
pub const RESULT_PREFIX: &str = "Result: ";
pub const PLAY_AGAIN: &str = "Play Again";
