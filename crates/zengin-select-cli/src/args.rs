use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "zengin-select")]
#[command(about = "Generate bank picker JSON from the Zengin code directory")]
#[command(version)]
pub struct Cli {
    /// Output path of the syllable-grouped bank tree (picker UI)
    #[arg(long, default_value = "./output.json")]
    pub output1: PathBuf,

    /// Output path of the primary bank list
    #[arg(long, default_value = "./output_main.json")]
    pub output2: PathBuf,
}
