//! tilegrid - compute best-fit tile grids from the command line.

fn main() {
    tilegrid_lib::logging::init();

    if let Err(err) = tilegrid_lib::cli::run() {
        eprintln!("tilegrid: {err}");
        std::process::exit(1);
    }
}
