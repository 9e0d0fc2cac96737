mod charts_panel;
mod dashboard;
mod kpi_cards;
mod meter_card;

pub use dashboard::Dashboard;
