mod inspect;
mod score;
pub mod utils;

use clap::{
    Parser,
    Subcommand,
};
use inspect::InspectArgs;
use score::ScoreArgs;
use utils::UtilsArgs;
use wild::ArgsOs;

#[derive(Parser, Debug)]
#[command(
    author = env!("CARGO_PKG_AUTHORS"),
    version = env!("CARGO_PKG_VERSION"),
    about = env!("CARGO_PKG_DESCRIPTION"),
    long_about = None,)]
struct Cli {
    #[command(subcommand)]
    command: MainMenu,
}

#[derive(Subcommand, Debug)]
enum MainMenu {
    /// Score every distinct start of a sorted BED file into a bedGraph track.
    Score {
        #[clap(flatten)]
        utils: UtilsArgs,
        #[clap(flatten)]
        args:  ScoreArgs,
    },

    /// Print the windows of a sorted BED file.
    Inspect {
        #[clap(flatten)]
        utils: UtilsArgs,
        #[clap(flatten)]
        args:  InspectArgs,
    },
}

fn main() -> anyhow::Result<()> {
    let args: ArgsOs = wild::args_os();
    let cli = Cli::parse_from(args);

    match cli.command {
        MainMenu::Score { utils, args } => {
            utils.setup()?;
            args.run(&utils)?;
        },
        MainMenu::Inspect { utils, args } => {
            utils.setup()?;
            args.run(&utils)?;
        },
    }
    Ok(())
}
