pub mod commands;
pub mod config;
pub mod dossier_data;
pub mod sink;
