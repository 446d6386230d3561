use clap::Parser;
use roster::driver;
use tracing::Level;

#[derive(Parser, Debug)]
#[command(name = "roster")]
#[command(version, about = "Validated record and call tracing walkthrough", long_about = None)]
struct Args {}

fn main() {
    let _args = Args::parse();

    // Diagnostics go to stderr; stdout carries the walkthrough only
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(Level::WARN)
        .init();

    let stdout = std::io::stdout().lock();
    if let Err(err) = driver::run(stdout) {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}
