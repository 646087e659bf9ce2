pub mod config;
pub mod error;
pub mod formatter;
pub mod game_date;
pub mod handler;
pub mod model;
pub mod pipeline;
pub mod sns;
pub mod sportsdata;
