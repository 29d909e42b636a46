//! # iwn2ili
//!
//! Links IndoWordNet synsets to the Interlingual Index (ILI).
//!
//! ## Getting started
//!
//! ```sh
//! iwn2ili
//! IndoWordNet to Interlingual Index mapping tool.
//!
//! USAGE:
//!     iwn2ili <SUBCOMMAND>
//!
//! FLAGS:
//!     -h, --help       Prints help information
//!     -V, --version    Prints version information
//!
//! SUBCOMMANDS:
//!     help      Prints this message or the help of the given subcommand(s)
//!     map       Map IndoWordNet synsets to ILIs
//!     repair    Fix malformed lines of the linked TSV
//! ```
//!
//! Set `RUST_LOG=info` to get progress and summaries.
use structopt::StructOpt;

#[macro_use]
extern crate log;

mod cli;

use iwn2ili::error::Error;
use iwn2ili::pipeline::Iwn2Ili;
use iwn2ili::repair;

fn main() -> Result<(), Error> {
    env_logger::init();

    let opt = cli::Iwn2IliCli::from_args();
    debug!("cli args\n{:#?}", opt);

    match opt {
        cli::Iwn2IliCli::Repair(r) => {
            repair::repair(&r.src, &r.dst)?;
        }
        cli::Iwn2IliCli::Map(m) => {
            let p = Iwn2Ili::new(
                m.src,
                m.wordnet,
                m.map_dir,
                m.lexicon,
                m.mapping_out,
                m.issues_out,
                m.tsv_out,
            );
            p.run()?;
        }
    };
    Ok(())
}
