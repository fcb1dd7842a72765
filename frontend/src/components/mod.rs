pub mod air_quality_widget;
pub mod alert;
pub mod badge;
pub mod card;
pub mod events_widget;
pub mod gamification_widget;
pub mod layout;
pub mod loading;
pub mod map_panel;
pub mod points_display;
pub mod progress_bar;
pub mod traffic_widget;
pub mod weather_widget;
