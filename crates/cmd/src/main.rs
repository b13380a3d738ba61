// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};

use cmd::commands::{build_command, jsonld_command, list_command, metadata_command, show_command};
use cmd::common::{get_clients_dir_with_override, get_origin_with_override, load_registry};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(name = "landing")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Directory of client YAML files (defaults to LANDING_CLIENTS, then ./clients)
    #[arg(long, global = true)]
    clients: Option<PathBuf>,

    /// Site origin for absolute URLs (defaults to LANDING_BASE_URL)
    #[arg(long, global = true)]
    origin: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// List clients with their template and status
    List,
    /// Show the resolved config of a client as YAML
    Show {
        /// Client id
        client: String,
    },
    /// Print the page metadata of a client as JSON
    Metadata(MetadataArgs),
    /// Print the LocalBusiness JSON-LD of a client
    Jsonld {
        /// Client id
        client: String,
    },
    /// Generate the static site
    Build {
        /// Output directory
        out_dir: PathBuf,
    },
}

#[derive(Args)]
struct MetadataArgs {
    /// Client id
    client: String,

    /// Page path appended to the origin for the canonical URL (e.g. /dubois-plomberie)
    #[arg(long)]
    path: Option<String>,
}

fn main() -> Result<()> {
    diagnostics::init();

    let cli = Cli::parse();
    let clients_dir = get_clients_dir_with_override(cli.clients);
    let origin = get_origin_with_override(cli.origin);
    let dir_display = clients_dir.display().to_string();
    diagnostics::debug!("Loading clients from {dir}", dir: dir_display);
    let registry = load_registry(&clients_dir)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match &cli.command {
        Commands::List => list_command(&registry, &mut out)?,
        Commands::Show { client } => show_command(&registry, client, &mut out)?,
        Commands::Metadata(args) => {
            metadata_command(&registry, &args.client, args.path.as_deref(), &origin, &mut out)?
        }
        Commands::Jsonld { client } => jsonld_command(&registry, client, &origin, &mut out)?,
        Commands::Build { out_dir } => build_command(&registry, &origin, out_dir, &mut out)?,
    }

    out.flush()?;
    Ok(())
}
