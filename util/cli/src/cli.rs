use std::path::PathBuf;

use clap::Parser;
use mirror256::constants::DEFAULT_DEPTH;
use mirror256::{Config, InitStrategy};

/// Mirror256 - hash a file, standard input, or the built-in example messages
#[derive(Parser, Debug)]
#[command(name = "mirror256")]
#[command(author, version, about, long_about = None)]
pub(crate) struct Cli {
    /// Run the example loop over generated canary messages
    #[arg(
        short = 'e',
        long = "example",
        conflicts_with = "file",
        help = "Hash 1024 generated messages with one hasher, printing each digest"
    )]
    pub(crate) example: bool,

    /// Input file path; standard input is read when omitted
    #[arg(short = 'f', long = "file", value_name = "FILE")]
    pub(crate) file: Option<PathBuf>,

    /// Number of layers
    #[arg(
        short = 'd',
        long = "depth",
        default_value_t = DEFAULT_DEPTH,
        value_name = "LAYERS",
        help = "Number of layers (and layer keys) in the network"
    )]
    pub(crate) depth: usize,

    /// Seed the layer keys from entropy instead of the constant table
    #[arg(
        long = "random-state",
        help = "Seed layer keys randomly; digests will not be reproducible"
    )]
    pub(crate) random_state: bool,
}

impl Cli {
    /// Parse command line arguments
    pub(crate) fn parse_args() -> Self {
        Cli::parse()
    }

    /// Hasher configuration selected by the flags.
    pub(crate) fn config(&self) -> Config {
        let init = if self.random_state {
            InitStrategy::Random
        } else {
            InitStrategy::Standard
        };
        Config::default().with_depth(self.depth).with_init(init)
    }
}
