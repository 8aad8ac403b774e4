mod error;
mod filter;
mod gui;
mod person;
mod session;
mod store;
mod table;

use clap::Parser;
use eframe::egui;

use error::StartupError;
use session::Session;

/// 📇 Roster, a menu bar + table view over in-memory Person records
#[derive(Parser, Debug)]
struct Cli {
    /// Initial window width
    #[clap(long, default_value = "1000")]
    width: f32,

    /// Initial window height
    #[clap(long, default_value = "650")]
    height: f32,

    /// Window title
    #[clap(long, default_value = "Roster")]
    title: String,

    /// Start with the toolbar hidden
    #[clap(long)]
    hide_toolbar: bool,

    /// Start with an empty table instead of the sample records
    #[clap(long)]
    empty: bool,
}

fn main() {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let args = Cli::parse();

    if let Err(err) = run(args) {
        log::error!("{}", err);
        std::process::exit(1);
    }
}

fn run(args: Cli) -> Result<(), StartupError> {
    let people = if args.empty {
        Vec::new()
    } else {
        person::seed()?
    };
    log::info!("Starting with {} rows", people.len());

    let mut session = Session::new(people);
    session.set_show_toolbar(!args.hide_toolbar);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([args.width, args.height])
            .with_min_inner_size([640.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        &args.title,
        options,
        Box::new(move |cc| {
            cc.egui_ctx.set_visuals(egui::Visuals::dark());
            Box::new(gui::RosterApp::new(session))
        }),
    )?;

    Ok(())
}
