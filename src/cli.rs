//! Command line arguments and parameters management/parsing.
use std::path::PathBuf;

use structopt::StructOpt;

use iwn2ili::wordnet::Lexicon;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "iwn2ili",
    about = "IndoWordNet to Interlingual Index mapping tool."
)]
/// Holds every command that is callable by the `iwn2ili` command.
pub enum Iwn2IliCli {
    #[structopt(about = "Fix malformed lines of the linked TSV")]
    Repair(Repair),
    #[structopt(about = "Map IndoWordNet synsets to ILIs")]
    Map(Map),
}

#[derive(Debug, StructOpt)]
/// Repair command and parameters.
///
/// ```sh
/// iwn2ili-repair
/// Fix malformed lines of the linked TSV
///
/// USAGE:
///     iwn2ili repair <src> <dst>
///
/// ARGS:
///     <src>    linked TSV to fix
///     <dst>    fixed TSV destination
/// ```
pub struct Repair {
    #[structopt(parse(from_os_str), help = "linked TSV to fix")]
    pub src: PathBuf,
    #[structopt(parse(from_os_str), help = "fixed TSV destination")]
    pub dst: PathBuf,
}

#[derive(Debug, StructOpt)]
/// Map command and parameters.
pub struct Map {
    #[structopt(
        parse(from_os_str),
        help = "repaired linked TSV (e.g. etc/IWN-En/data/english-hindi-linked-fixed.tsv)"
    )]
    pub src: PathBuf,
    #[structopt(
        parse(from_os_str),
        help = "wn database, or a synset_id/ili TSV dump (.tsv)"
    )]
    pub wordnet: PathBuf,
    #[structopt(
        parse(from_os_str),
        long = "map-dir",
        help = "folder containing the wn21-30.{adj,adv,noun,verb} mapping files",
        default_value = "etc/mappings-upc-2007/mapping-21-30/"
    )]
    pub map_dir: PathBuf,
    #[structopt(
        long = "lexicon",
        help = "lexicon to query, as id:version",
        default_value = "omw-en:1.4"
    )]
    pub lexicon: Lexicon,
    #[structopt(
        parse(from_os_str),
        long = "mapping-out",
        help = "mapping destination (.json for JSON, YAML otherwise)",
        default_value = "build/iwn2ili.yaml"
    )]
    pub mapping_out: PathBuf,
    #[structopt(
        parse(from_os_str),
        long = "issues-out",
        help = "issues report destination",
        default_value = "build/iwn_issues.yaml"
    )]
    pub issues_out: PathBuf,
    #[structopt(
        parse(from_os_str),
        long = "tsv-out",
        help = "also write the mapping as a flat TSV"
    )]
    pub tsv_out: Option<PathBuf>,
}
