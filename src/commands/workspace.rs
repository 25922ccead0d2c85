use super::*;

/// Manage the workspaces you have access to
#[derive(Parser)]
pub struct Args {
    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all accessible workspaces
    List,
}

pub async fn command(args: Args, configs: &Configs, json: bool) -> Result<()> {
    match args.command {
        Commands::List => list(configs, json).await,
    }
}

async fn list(configs: &Configs, json: bool) -> Result<()> {
    let client = ApiClient::new(configs);
    let me = client.get_user().await?;
    let workspaces = user::workspaces(&me);

    if json {
        println!("{}", serde_json::to_string_pretty(&workspaces)?);
        return Ok(());
    }

    println!("{}", "All accessible workspaces:".blue());
    for workspace in &workspaces {
        println!("  {workspace}");
    }

    Ok(())
}
