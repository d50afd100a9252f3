mod check;
mod conf;
mod display;
mod error;
mod prelude;
mod tool;

use crate::prelude::*;

#[derive(Parser)]
#[command(version, about = "Woomcp CLI")]
struct Cli {
    /// Change the command output to JSON. Also silences the progress
    /// decorations.
    #[arg(long = "json", global = true, help = "Print the command output as JSON")]
    json: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    #[command(about = "Check connectivity to the WooCommerce MCP server")]
    Check(check::CheckCommand),
    #[command(about = "List the tools exposed by the WooCommerce MCP server")]
    Tools(tool::ToolsCommand),
    #[command(about = "Search the WooCommerce store for products")]
    Search(tool::SearchCommand),
    #[command(about = "Get or set the Woomcp CLI configuration")]
    Conf(conf::ConfCommand),
}

#[tokio::main]
async fn main() {
    // Customize parsing error handling.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // These 2 are "not real errors" that are used to stop the execution
            // to display the CLI help or version.
            match e.kind() {
                clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion => {
                    println!("{}", e);

                    std::process::exit(0);
                }
                _ => (),
            }

            eprintln!(
                "{ballot} {error}",
                ballot = "✘".red().bold(),
                error = WoomcpCliError::Syntax(e)
            );

            std::process::exit(1);
        }
    };

    if cli.json {
        JSON_MODE.store(true, Ordering::Relaxed);
    }

    // Send each sub-command to the respective handler.
    let result = match cli.command {
        Command::Check(command) => check::handle(command).await,
        Command::Tools(command) => tool::handle_tools(command).await,
        Command::Search(command) => tool::handle_search(command).await,
        Command::Conf(command) => conf::handle(command).await,
    };

    // Handle any errors that occurred during command execution.
    if let Err(e) = result {
        eprintln!("{ballot} {e}", ballot = "✘".red().bold());

        std::process::exit(1);
    }
}
