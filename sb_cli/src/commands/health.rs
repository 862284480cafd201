use crate::client::CliClient;
use crate::error::Result;

pub async fn handle(cli_client: &CliClient) -> Result<()> {
    let greeting = cli_client.welcome().await?;
    println!("{greeting}");
    Ok(())
}
