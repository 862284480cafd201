use crate::client::CliClient;
use crate::commands::submit;
use crate::error::{ErrorCli, Result};
use crate::form::product_form::ProductForm;

/// One-shot prediction. Every field error is reported before giving up, and
/// nothing is sent unless the whole form is valid.
pub async fn handle(cli_client: &CliClient, form: ProductForm) -> Result<()> {
    let request = match form.validate() {
        Ok(request) => request,
        Err(errors) => {
            for e in &errors {
                eprintln!("⚠️ {e}");
            }
            return Err(ErrorCli::InvalidForm(errors.len()));
        }
    };

    println!("{}", submit(cli_client, &request).await);
    Ok(())
}
