pub mod app;
pub mod coin_button;
pub mod dashboard;
pub mod game_stats;
pub mod particle_effect;
pub mod progress_panel;
pub mod title_banner;
pub mod wallet_connect;
