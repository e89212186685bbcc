use clap::Parser;

/// Takes no options: the report location is fixed to
/// `target/checkstyle-result.xml` under the working directory.
#[derive(Parser, Debug)]
#[command(
    name = "checkstat",
    version,
    about = "Summarize Checkstyle violations by package and by file",
    after_help = "Run `mvnw checkstyle:check` first to produce the report."
)]
pub struct Cli {}
