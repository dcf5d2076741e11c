use clap::Parser;

/// The run takes no options; the parser only provides `--help` and
/// `--version`.
#[derive(Parser, Debug)]
#[command(
    name = "followgraph",
    version,
    about = "Fetch a follower graph, solve it, and post the result to a webhook"
)]
pub struct Cli {}
