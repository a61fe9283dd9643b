use std::path::PathBuf;

use clap::Parser;

use crate::phrases::Slot;

#[derive(Debug, Parser)]
#[command(name = "phrasebook")]
#[command(about = "Print localized response phrases for an intent")]
pub struct Args {
    /// Intent whose phrases should be printed
    pub intent: String,

    /// Use the reprompt phrases instead of the utterances
    #[arg(long)]
    pub reprompt: bool,

    /// Print every candidate instead of one random pick
    #[arg(long)]
    pub all: bool,

    /// JSON config file
    #[arg(long, env = "PHRASEBOOK_CONFIG")]
    pub config: Option<PathBuf>,
}

impl Args {
    pub fn slot(&self) -> Slot {
        if self.reprompt {
            Slot::Reprompt
        } else {
            Slot::Utterance
        }
    }
}
