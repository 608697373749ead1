#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod api;
mod app;
mod args;
mod fetch;
mod logging;
mod picker;
mod window;

use std::process::ExitCode;

use clap::Parser;

use crate::args::Cli;

const APP_TITLE: &str = "Country Picker";

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::setup_tracing();

    if let Some(country) = cli.select.as_deref() {
        tracing::info!(preselect = country, "starting with preselection");
    }

    let viewport = egui::ViewportBuilder::default()
        .with_inner_size([360.0, 160.0])
        .with_min_inner_size([300.0, 140.0])
        .with_title(APP_TITLE);

    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    let preselect = cli.select;
    let result = eframe::run_native(
        APP_TITLE,
        options,
        Box::new(|cc| Ok(Box::new(app::App::new(cc, preselect)))),
    );

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "event loop exited with an error");
            ExitCode::FAILURE
        }
    }
}
