use clap::error::ErrorKind;
use clap::Parser;

pub const USAGE: &str = "\
Usage: clrd [options]
  clrd     Move the contents of the Downloads directory ($Downloads, default $HOME/Downloads)
           into a timestamped folder under $CLRD_PATH (default $HOME/.clrd)
  clrd -d  Remove everything saved under $CLRD_PATH
  clrd -v  Log each filesystem step to stderr
  clrd -h  Print this help
";

/// Exit status for unusable arguments.
const USAGE_EXIT_CODE: i32 = 2;

#[derive(Parser, Debug)]
#[command(name = "clrd", bin_name = "clrd", version, disable_help_flag = true)]
#[command(about = "Archive the Downloads directory into timestamped batches", long_about = None)]
pub struct Cli {
    /// Remove the contents saved in the archive directory
    #[arg(short = 'd')]
    pub delete: bool,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Print help
    #[arg(short, long)]
    pub help: bool,
}

/// Parse the process arguments. Prints usage and exits for `-h` and for any
/// argument clap rejects.
pub fn parse_args() -> Cli {
    match Cli::try_parse() {
        Ok(cli) if cli.help => {
            print!("{USAGE}");
            std::process::exit(0);
        }
        Ok(cli) => cli,
        Err(e) => match e.kind() {
            ErrorKind::DisplayVersion | ErrorKind::DisplayHelp => e.exit(),
            kind => {
                eprintln!("Error: {}", kind.as_str().unwrap_or("invalid arguments"));
                print!("{USAGE}");
                std::process::exit(USAGE_EXIT_CODE);
            }
        },
    }
}
