use clap::Parser;
use zonepack::app::ZonepackApp;

fn main() {
    env_logger::init();
    log::info!("starting zonepack at {}", chrono::Local::now().to_rfc3339());
    let args = ZonepackApp::parse();
    match args.op.run() {
        Ok(_) => {}
        Err(e) => {
            log::error!("{e}");
            std::process::exit(1);
        }
    }
}
