use breadboard::{app::BreadboardApp, config::Config};
use eframe::egui;
use eyre::WrapErr;

fn main() -> eyre::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::discover().wrap_err("failed to load config")?;
    let title = config.window.title.clone();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(title.clone())
            .with_inner_size([config.window.width, config.window.height]),
        ..Default::default()
    };

    eframe::run_native(
        &title,
        options,
        Box::new(move |cc| Box::new(BreadboardApp::new(cc, config))),
    )
    .map_err(|err| eyre::eyre!("failed to run the editor: {err}"))
}
