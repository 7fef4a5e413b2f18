use booking_core::cli::run_cli;

fn main() {
    booking_core::init();
    if let Err(err) = run_cli() {
        booking_core::cli::output::error(err);
        std::process::exit(1);
    }
}
