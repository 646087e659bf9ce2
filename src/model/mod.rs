pub mod game;
pub mod game_status;
pub mod play_by_play;
