use anyhow::Result;
use clap::{Parser, Subcommand};
use grit::commands::settings::{self, ProxyUpdate};
use grit::commands::types;
use grit::domain::areas::repository::Repository;

#[derive(Parser)]
#[command(
    name = "grit",
    version = "0.1.0",
    about = "A proxy-aware git workflow companion",
    long_about = "grit wraps the everyday git workflow (status, diff, add, commit, push) \
    behind one small CLI. Every substantive operation is delegated to the git binary; \
    grit adds conventional-commit prefixes, push failure triage, and a persisted \
    proxy configuration applied to every git subprocess.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "status",
        about = "Show the working-tree status",
        long_about = "This command lists the changed and untracked files of the working tree, \
        flat or grouped by directory, and notes when local commits have not been pushed yet."
    )]
    Status {
        #[arg(long, help = "Group the listing by parent directory")]
        group: bool,
    },
    #[command(
        name = "diff",
        about = "Show the working-tree diff",
        long_about = "This command shows the unified diff of the working tree, optionally \
        restricted to the given paths. On a terminal the output is paged."
    )]
    Diff {
        #[arg(index = 1, help = "Restrict the diff to these paths")]
        paths: Vec<String>,
        #[arg(long, help = "Never page the output")]
        no_pager: bool,
    },
    #[command(
        name = "add",
        about = "Stage files for the next commit",
        long_about = "This command stages the given paths with git add. Paths are passed to \
        git as an argument vector, never through a shell."
    )]
    Add {
        #[arg(index = 1, required = true, help = "The paths to stage")]
        paths: Vec<String>,
    },
    #[command(
        name = "commit",
        about = "Create a commit, optionally staging and pushing along the way",
        long_about = "This command creates a commit with the given message. Paths given as \
        arguments are staged first; --all stages every pending change. A commit type \
        prefixes the subject in conventional-commit form, and --push chains a push after \
        a successful commit."
    )]
    Commit {
        #[arg(short, long, help = "The commit message")]
        message: String,
        #[arg(
            short = 't',
            long = "type",
            help = "Conventional-commit type for the subject (see `grit types`)"
        )]
        commit_type: Option<String>,
        #[arg(index = 1, help = "Stage these paths before committing")]
        paths: Vec<String>,
        #[arg(long, help = "Stage every pending change before committing")]
        all: bool,
        #[arg(long, help = "Push after a successful commit")]
        push: bool,
    },
    #[command(
        name = "push",
        about = "Push the current branch",
        long_about = "This command pushes the current branch, configuring an upstream on \
        origin when none exists yet. Failures are classified into network, \
        authentication, and timeout problems with actionable guidance."
    )]
    Push,
    #[command(
        name = "types",
        about = "List the conventional-commit types",
        long_about = "This command lists the commit types accepted by `grit commit --type`, \
        with their icons."
    )]
    Types,
    #[command(
        name = "config",
        about = "Show or edit the persisted settings",
        long_about = "This command reads and writes the settings file holding the language \
        preference and the proxy configuration applied to every git subprocess."
    )]
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    #[command(name = "show", about = "Show the persisted settings")]
    Show,
    #[command(name = "language", about = "Set the display-language preference")]
    Language {
        #[arg(index = 1, help = "One of: system, en, zh-cn")]
        language: String,
    },
    #[command(name = "proxy", about = "Edit the proxy configuration")]
    Proxy {
        #[arg(long, help = "Enable the proxy")]
        enable: bool,
        #[arg(long, conflicts_with = "enable", help = "Disable the proxy")]
        disable: bool,
        #[arg(long, help = "Proxy host")]
        host: Option<String>,
        #[arg(long, help = "Proxy port")]
        port: Option<String>,
        #[arg(long, help = "Comma-separated hosts to exclude from proxying")]
        no_proxy: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Status { group } => {
            let mut repository = open_repository()?;
            repository.status(group).await?
        }
        Commands::Diff { paths, no_pager } => {
            let mut repository = open_repository()?;
            repository.diff(&paths, no_pager).await?
        }
        Commands::Add { paths } => {
            let mut repository = open_repository()?;
            repository.add(&paths).await?
        }
        Commands::Commit {
            message,
            commit_type,
            paths,
            all,
            push,
        } => {
            let mut repository = open_repository()?;
            repository
                .commit(&message, commit_type.as_deref(), &paths, all, push)
                .await?
        }
        Commands::Push => {
            let mut repository = open_repository()?;
            repository.push().await?
        }
        Commands::Types => types::list(&mut std::io::stdout())?,
        Commands::Config { action } => match action {
            ConfigAction::Show => settings::show(&mut std::io::stdout())?,
            ConfigAction::Language { language } => {
                settings::set_language(&mut std::io::stdout(), language.parse()?)?
            }
            ConfigAction::Proxy {
                enable,
                disable,
                host,
                port,
                no_proxy,
            } => {
                let enabled = match (enable, disable) {
                    (true, _) => Some(true),
                    (_, true) => Some(false),
                    _ => None,
                };
                let update = ProxyUpdate {
                    enabled,
                    host,
                    port,
                    no_proxy,
                };
                settings::set_proxy(&mut std::io::stdout(), update)?
            }
        },
    }

    Ok(())
}

fn open_repository() -> Result<Repository> {
    let pwd = std::env::current_dir()?;
    Repository::open(&pwd, Box::new(std::io::stdout()))
}
