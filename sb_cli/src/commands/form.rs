use crate::client::CliClient;
use crate::commands::submit;
use crate::error::Result;
use crate::form::prompt::prompt_product_form;
use inquire::{Confirm, InquireError};

fn is_cancellation(e: &InquireError) -> bool {
    matches!(
        e,
        InquireError::OperationCanceled | InquireError::OperationInterrupted
    )
}

/// Interactive session: fill the form, show the verdict, repeat on request.
/// Esc or Ctrl-C at any prompt ends the session cleanly.
pub async fn handle(cli_client: &CliClient) -> Result<()> {
    println!("🍽️ SafeBite - AI-powered Allergen Detection");
    loop {
        let form = match prompt_product_form() {
            Ok(form) => form,
            Err(crate::error::ErrorCli::Prompt(e)) if is_cancellation(&e) => break,
            Err(e) => return Err(e),
        };

        match form.validate() {
            Ok(request) => println!("{}", submit(cli_client, &request).await),
            Err(errors) => {
                for e in &errors {
                    eprintln!("{e}");
                }
                eprintln!("⚠️ Please resolve all errors before submission!");
            }
        }

        let again = Confirm::new("Check another product?")
            .with_default(true)
            .prompt();
        match again {
            Ok(true) => continue,
            Ok(false) => break,
            Err(e) if is_cancellation(&e) => break,
            Err(e) => return Err(e.into()),
        }
    }
    println!("Goodbye!");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cancellation_detection() {
        assert!(is_cancellation(&InquireError::OperationCanceled));
        assert!(is_cancellation(&InquireError::OperationInterrupted));
        assert!(!is_cancellation(&InquireError::NotTTY));
    }
}
