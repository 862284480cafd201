use crate::error::Result;
use crate::form::product_form::{ProductForm, validate_price, validate_rating, validate_text};
use inquire::validator::Validation;
use inquire::{CustomType, CustomUserError, Text};
use sb_core::types::prediction_request::{
    ALLERGENS, FAT_OIL, FOOD_PRODUCT, MAIN_INGREDIENT, SEASONING, SWEETENER,
};

fn to_validation<E: ToString>(check: std::result::Result<(), E>) -> Validation {
    match check {
        Ok(()) => Validation::Valid,
        Err(e) => Validation::Invalid(e.to_string().into()),
    }
}

fn text_field(field: &'static str, label: &str, placeholder: &str, help: &str) -> Result<String> {
    let value = Text::new(label)
        .with_placeholder(placeholder)
        .with_help_message(help)
        .with_validator(move |input: &str| -> std::result::Result<Validation, CustomUserError> {
            Ok(to_validation(validate_text(field, input)))
        })
        .prompt()?;
    Ok(value)
}

/// Asks for the eight product fields. Each control rejects invalid input in
/// place, so the returned form is expected to validate.
pub fn prompt_product_form() -> Result<ProductForm> {
    let food_product = text_field(
        FOOD_PRODUCT,
        "🥘 Food Product",
        "Enter the food product name",
        "Enter a valid food product name",
    )?;
    let main_ingredient = text_field(
        MAIN_INGREDIENT,
        "🌾 Main Ingredient",
        "Enter the main ingredient",
        "Enter the main component of the product",
    )?;
    let sweetener = text_field(
        SWEETENER,
        "🍯 Sweetener",
        "Enter the sweetener used",
        "Provide the name of the sweetener",
    )?;
    let fat_oil = text_field(
        FAT_OIL,
        "🧈 Fat/Oil",
        "Enter the type of fat or oil used",
        "Specify the fat or oil used",
    )?;
    let seasoning = text_field(
        SEASONING,
        "🧂 Seasoning",
        "Enter the seasoning used",
        "Mention the type of seasoning",
    )?;
    let allergens = text_field(
        ALLERGENS,
        "⚠️ Allergens",
        "List potential allergens (if any)",
        "List potential allergens E.g., peanuts, gluten, etc.",
    )?;

    let price = CustomType::<f64>::new("💲 Price ($)")
        .with_default(0.0)
        .with_formatter(&|v: f64| format!("{v:.2}"))
        .with_error_message("Please type a valid amount, e.g. 2.50")
        .with_help_message("Enter the price in dollars")
        .with_validator(|v: &f64| -> std::result::Result<Validation, CustomUserError> {
            Ok(to_validation(validate_price(*v)))
        })
        .prompt()?;

    let customer_rating = CustomType::<f64>::new("⭐ Customer Rating (Out of 5)")
        .with_default(0.0)
        .with_error_message("Please type a number between 0 and 5")
        .with_help_message("Provide a rating between 0 and 5")
        .with_validator(|v: &f64| -> std::result::Result<Validation, CustomUserError> {
            Ok(to_validation(validate_rating(*v)))
        })
        .prompt()?;

    Ok(ProductForm {
        food_product,
        main_ingredient,
        sweetener,
        fat_oil,
        seasoning,
        allergens,
        price,
        customer_rating,
    })
}
