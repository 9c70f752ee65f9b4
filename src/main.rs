fn main() {
    if let Err(e) = hasami_shogi::cli::run_loop() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
