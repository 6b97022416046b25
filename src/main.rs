use std::process::exit;

fn main() {
    if let Err(e) = prodcat::app::run_cli() {
        eprintln!("error: {e}");
        exit(1);
    }
}
