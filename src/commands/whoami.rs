use super::*;

/// Get the current logged in user
#[derive(Parser)]
pub struct Args {}

pub async fn command(_args: Args, configs: &Configs, json: bool) -> Result<()> {
    let client = ApiClient::new(configs);
    let me = client.get_user().await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&me)?);
        return Ok(());
    }

    let account = me.account.as_ref().context("No account")?;
    println!(
        "Logged in as {} ({})",
        account.username.bold(),
        me.id.dimmed()
    );

    Ok(())
}
