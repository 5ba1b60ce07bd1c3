use super::geometry::Rgb;

// Viewport (world units are pixels of the original 1280x720 window)
pub const SCREEN_WIDTH: f64 = 1280.0;
pub const SCREEN_HEIGHT: f64 = 720.0;

// Bird
pub const BIRD_SIZE: f64 = 20.0;
pub const BIRD_CENTER_X: f64 = 50.0;
pub const GRAVITY: f64 = 0.5;
pub const FLAP_STRENGTH: f64 = -10.0;

// Pipes
pub const PIPE_WIDTH: f64 = 70.0;
pub const PIPE_HEIGHT: f64 = 500.0;
pub const PIPE_GAP: f64 = 200.0;
pub const PIPE_SPEED: f64 = 3.0;

// Spawning: a pair appears once the frame counter exceeds the interval
pub const SPAWN_INTERVAL_FRAMES: u32 = 90;
pub const GAP_Y_MIN: i32 = 100;
pub const GAP_Y_BOTTOM_MARGIN: i32 = 300;

// Timing
pub const TARGET_FPS: u32 = 60;

// Files in the data directory
pub const APP_NAME: &str = "flappy";
pub const HIGH_SCORE_FILENAME: &str = "record.txt";
pub const CONFIG_FILENAME: &str = "config.json";
pub const LOG_FILENAME: &str = "flappy.log";

// Colors
pub const BIRD_COLOR: Rgb = Rgb(255, 255, 0);
pub const PIPE_COLOR: Rgb = Rgb(0, 255, 0);
pub const MENU_BACKGROUND: Rgb = Rgb(135, 206, 250);
pub const PLAY_BACKGROUND: Rgb = Rgb(111, 176, 255);
pub const MENU_TEXT_COLOR: Rgb = Rgb(0, 0, 0);
pub const SCORE_TEXT_COLOR: Rgb = Rgb(255, 255, 255);

// Text placement (world coordinates, relative to the viewport)
pub const MENU_TEXT_X: f64 = 50.0;
pub const MENU_PROMPT_OFFSET_Y: f64 = -50.0;
pub const MENU_RECORD_OFFSET_Y: f64 = 20.0;
pub const SCORE_TEXT_Y: f64 = 20.0;

pub const MENU_PROMPT: &str = "Press Space to start";
