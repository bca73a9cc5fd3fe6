use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "pod")]
#[command(about = "Inspect documents in a content pod", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Pod root directory
    #[arg(short, long, global = true, default_value = ".")]
    pub root: PathBuf,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print a document's pod path
    Path {
        /// Pod path of the document (e.g. /content/pages/home.yaml)
        pod_path: String,
    },

    /// List documents in the content directory
    #[command(alias = "ls")]
    List,

    /// Print a document's body
    Show {
        /// Pod path of the document
        pod_path: String,
    },

    /// Print a document's front matter
    #[command(name = "front-matter", alias = "fm")]
    FrontMatter {
        /// Pod path of the document
        pod_path: String,

        /// Print the parsed front matter as JSON instead of raw YAML
        #[arg(long)]
        json: bool,
    },
}
