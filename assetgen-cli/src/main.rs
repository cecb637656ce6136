//! Binary entrypoint for assetgen-cli

fn main() {
    if let Err(err) = assetgen_cli::run() {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
