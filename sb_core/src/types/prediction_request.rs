use serde::{Deserialize, Serialize};

pub const FOOD_PRODUCT: &str = "Food Product";
pub const MAIN_INGREDIENT: &str = "Main Ingredient";
pub const SWEETENER: &str = "Sweetener";
pub const FAT_OIL: &str = "Fat/Oil";
pub const SEASONING: &str = "Seasoning";
pub const ALLERGENS: &str = "Allergens";
pub const PRICE: &str = "Price ($)";
pub const CUSTOMER_RATING: &str = "Customer rating (Out of 5)";

/// Text columns, in the order the encoder consumes them.
pub const CATEGORICAL_COLUMNS: [&str; 6] = [
    FOOD_PRODUCT,
    MAIN_INGREDIENT,
    SWEETENER,
    FAT_OIL,
    SEASONING,
    ALLERGENS,
];

pub const NUMERIC_COLUMNS: [&str; 2] = [PRICE, CUSTOMER_RATING];

/// Column layout of the classifier's feature row: the numeric columns untouched,
/// followed by the encoded categorical columns.
pub const FEATURE_COLUMNS: [&str; 8] = [
    PRICE,
    CUSTOMER_RATING,
    FOOD_PRODUCT,
    MAIN_INGREDIENT,
    SWEETENER,
    FAT_OIL,
    SEASONING,
    ALLERGENS,
];

pub const PRICE_MIN: f64 = 0.0;
pub const CUSTOMER_RATING_MIN: f64 = 0.0;
pub const CUSTOMER_RATING_MAX: f64 = 5.0;

/// The eight-field product description sent to `POST /predict`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PredictionRequest {
    #[serde(rename = "Food Product")]
    pub food_product: String,
    #[serde(rename = "Main Ingredient")]
    pub main_ingredient: String,
    #[serde(rename = "Sweetener")]
    pub sweetener: String,
    #[serde(rename = "Fat/Oil")]
    pub fat_oil: String,
    #[serde(rename = "Seasoning")]
    pub seasoning: String,
    #[serde(rename = "Allergens")]
    pub allergens: String,
    #[serde(rename = "Price ($)")]
    pub price: f64,
    #[serde(rename = "Customer rating (Out of 5)")]
    pub customer_rating: f64,
}

impl PredictionRequest {
    /// Categorical values paired with their column name, in [`CATEGORICAL_COLUMNS`] order.
    pub fn categorical_values(&self) -> [(&'static str, &str); 6] {
        [
            (FOOD_PRODUCT, self.food_product.as_str()),
            (MAIN_INGREDIENT, self.main_ingredient.as_str()),
            (SWEETENER, self.sweetener.as_str()),
            (FAT_OIL, self.fat_oil.as_str()),
            (SEASONING, self.seasoning.as_str()),
            (ALLERGENS, self.allergens.as_str()),
        ]
    }

    /// Numeric values paired with their column name, in [`NUMERIC_COLUMNS`] order.
    pub fn numeric_values(&self) -> [(&'static str, f64); 2] {
        [(PRICE, self.price), (CUSTOMER_RATING, self.customer_rating)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn chips() -> PredictionRequest {
        PredictionRequest {
            food_product: "Chips".into(),
            main_ingredient: "Potato".into(),
            sweetener: "None".into(),
            fat_oil: "Sunflower Oil".into(),
            seasoning: "Salt".into(),
            allergens: "None".into(),
            price: 2.5,
            customer_rating: 4.0,
        }
    }

    #[test]
    fn test_serializes_with_exact_keys() {
        let value = serde_json::to_value(chips()).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 8);
        for key in FEATURE_COLUMNS {
            assert!(object.contains_key(key), "missing key {key}");
        }
        assert_eq!(object["Fat/Oil"], json!("Sunflower Oil"));
        assert_eq!(object["Price ($)"], json!(2.5));
    }

    #[test]
    fn test_rejects_unknown_key() {
        let mut value = serde_json::to_value(chips()).unwrap();
        value["Colour"] = json!("Yellow");
        assert!(serde_json::from_value::<PredictionRequest>(value).is_err());
    }

    #[test]
    fn test_rejects_key_with_wrong_case() {
        let body = json!({
            "food product": "Chips",
            "Main Ingredient": "Potato",
            "Sweetener": "None",
            "Fat/Oil": "Sunflower Oil",
            "Seasoning": "Salt",
            "Allergens": "None",
            "Price ($)": 2.5,
            "Customer rating (Out of 5)": 4.0
        });
        assert!(serde_json::from_value::<PredictionRequest>(body).is_err());
    }

    #[test]
    fn test_rejects_number_in_text_field() {
        let mut value = serde_json::to_value(chips()).unwrap();
        value["Seasoning"] = json!(12);
        assert!(serde_json::from_value::<PredictionRequest>(value).is_err());
    }

    #[test]
    fn test_column_views_follow_schema_order() {
        let request = chips();
        let names: Vec<&str> = request.categorical_values().iter().map(|(n, _)| *n).collect();
        assert_eq!(names, CATEGORICAL_COLUMNS);
        assert_eq!(request.categorical_values()[3].1, "Sunflower Oil");
        assert_eq!(request.numeric_values(), [(PRICE, 2.5), (CUSTOMER_RATING, 4.0)]);
        assert_eq!(&FEATURE_COLUMNS[..2], &NUMERIC_COLUMNS);
        assert_eq!(&FEATURE_COLUMNS[2..], &CATEGORICAL_COLUMNS);
    }
}
