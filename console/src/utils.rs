use std::io::{
    BufReader,
    Read,
};
use std::path::Path;
use std::time::Duration;

use clap::Args;
use dupwindow::prelude::BedSource;
use indicatif::{
    ProgressBar,
    ProgressStyle,
};
use log::debug;

#[derive(Args, Debug, Clone)]
pub(crate) struct UtilsArgs {
    #[arg(
        short,
        long,
        action = clap::ArgAction::Count,
        help = "Increase log verbosity (-v info, -vv debug, -vvv trace)"
    )]
    pub verbose:  u8,
    #[arg(
        long,
        default_value_t = false,
        help = "Display a spinner counting processed windows"
    )]
    pub progress: bool,
}

impl UtilsArgs {
    pub fn setup(&self) -> anyhow::Result<()> {
        dupwindow::utils::init_logger(self.verbose)?;
        debug!("Command line utilities: {:?}", self);
        Ok(())
    }

    pub fn progress_bar(&self) -> anyhow::Result<ProgressBar> {
        if self.progress {
            init_spinner()
        }
        else {
            Ok(ProgressBar::hidden())
        }
    }
}

pub fn init_spinner() -> anyhow::Result<ProgressBar> {
    let progress_bar = ProgressBar::new_spinner();
    progress_bar.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed_precise}] {pos:>10.green} windows {msg}")?,
    );
    progress_bar.enable_steady_tick(Duration::from_millis(100));
    progress_bar.set_message("Processing...");
    Ok(progress_bar)
}

/// Opens a BED source from a path, or from stdin when the path is `-`.
pub(crate) fn open_bed(input: &Path) -> anyhow::Result<BedSource<Box<dyn Read>>> {
    if input.as_os_str() == "-" {
        debug!("Reading BED records from stdin");
        let reader: Box<dyn Read> = Box::new(BufReader::new(std::io::stdin()));
        Ok(BedSource::new(reader))
    }
    else {
        BedSource::from_path(input)
    }
}
