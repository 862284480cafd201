use crate::form::product_form::ProductForm;
use clap::{Args, Parser, Subcommand};
use sb_core::server::default_config::{DEFAULT_CLIENT_API_URL, DEFAULT_CLIENT_TIMEOUT_SECS};

#[derive(Parser, Debug)]
#[command(version, about = "SafeBite allergen prediction client", long_about = None)]
pub struct Cli {
    /// Base URL of the prediction service
    #[arg(long, global = true, env = "SAFEBITE_API_URL", default_value = DEFAULT_CLIENT_API_URL)]
    pub url: String,

    /// Request timeout in seconds
    #[arg(
        long,
        global = true,
        env = "SAFEBITE_TIMEOUT_SECS",
        default_value_t = DEFAULT_CLIENT_TIMEOUT_SECS
    )]
    pub timeout: u64,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fill the product form interactively (default)
    Form,
    /// Submit one product given on the command line
    Predict(ProductArgs),
    /// Check that the service answers
    Health,
}

#[derive(Args, Debug, Clone)]
pub struct ProductArgs {
    #[arg(long)]
    pub food_product: String,
    #[arg(long)]
    pub main_ingredient: String,
    #[arg(long)]
    pub sweetener: String,
    #[arg(long)]
    pub fat_oil: String,
    #[arg(long)]
    pub seasoning: String,
    #[arg(long)]
    pub allergens: String,
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub price: f64,
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub rating: f64,
}

impl From<ProductArgs> for ProductForm {
    fn from(args: ProductArgs) -> Self {
        ProductForm {
            food_product: args.food_product,
            main_ingredient: args.main_ingredient,
            sweetener: args.sweetener,
            fat_oil: args.fat_oil,
            seasoning: args.seasoning,
            allergens: args.allergens,
            price: args.price,
            customer_rating: args.rating,
        }
    }
}
