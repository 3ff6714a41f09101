mod cli;

fn main() {
    let args = cli::parse_args();
    if let Err(e) = cli::run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
