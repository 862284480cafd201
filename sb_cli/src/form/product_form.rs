use sb_core::types::prediction_request::{
    ALLERGENS, CUSTOMER_RATING, CUSTOMER_RATING_MAX, CUSTOMER_RATING_MIN, FAT_OIL, FOOD_PRODUCT,
    MAIN_INGREDIENT, PRICE, PRICE_MIN, PredictionRequest, SEASONING, SWEETENER,
};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FieldError {
    #[error("{0} should not contain numbers. Please correct it.")]
    Numeric(&'static str),

    #[error("{0} is required. If a field doesn't apply, type 'None'.")]
    Empty(&'static str),

    #[error("{0} must be a finite number.")]
    NotFinite(&'static str),

    #[error("{field} must be at least {min}.")]
    BelowMinimum { field: &'static str, min: f64 },

    #[error("{field} must be between {min} and {max}.")]
    OutOfRange {
        field: &'static str,
        min: f64,
        max: f64,
    },
}

/// CJK ideographs that carry a numeric value but are letters (`Lo`) rather than
/// numbers, so `char::is_numeric` misses them.
const NUMERIC_IDEOGRAPHS: &str = concat!(
    "一二三四五六七八九十百千万萬億亿兆零",
    "壹壱弌貳贰貮弐弍參叁参弎肆伍陸陆柒捌玖拾佰仟",
    "廿卄卅卌兩两陌阡",
);

fn is_numeric_char(c: char) -> bool {
    c.is_numeric() || NUMERIC_IDEOGRAPHS.contains(c)
}

/// True for a non-empty value made only of numeric characters, including CJK
/// numeral ideographs. `"12.5"` and `"3 eggs"` are not purely numeric.
pub fn is_purely_numeric(value: &str) -> bool {
    !value.is_empty() && value.chars().all(is_numeric_char)
}

pub fn validate_text(field: &'static str, value: &str) -> Result<(), FieldError> {
    if is_purely_numeric(value) {
        return Err(FieldError::Numeric(field));
    }
    if value.is_empty() {
        return Err(FieldError::Empty(field));
    }
    Ok(())
}

pub fn validate_price(value: f64) -> Result<(), FieldError> {
    if !value.is_finite() {
        return Err(FieldError::NotFinite(PRICE));
    }
    if value < PRICE_MIN {
        return Err(FieldError::BelowMinimum {
            field: PRICE,
            min: PRICE_MIN,
        });
    }
    Ok(())
}

pub fn validate_rating(value: f64) -> Result<(), FieldError> {
    if !value.is_finite() {
        return Err(FieldError::NotFinite(CUSTOMER_RATING));
    }
    if !(CUSTOMER_RATING_MIN..=CUSTOMER_RATING_MAX).contains(&value) {
        return Err(FieldError::OutOfRange {
            field: CUSTOMER_RATING,
            min: CUSTOMER_RATING_MIN,
            max: CUSTOMER_RATING_MAX,
        });
    }
    Ok(())
}

/// Raw values as typed by the operator, before validation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductForm {
    pub food_product: String,
    pub main_ingredient: String,
    pub sweetener: String,
    pub fat_oil: String,
    pub seasoning: String,
    pub allergens: String,
    pub price: f64,
    pub customer_rating: f64,
}

impl ProductForm {
    /// Validates every field and builds the request, or returns one error per
    /// offending field in form order.
    pub fn validate(&self) -> Result<PredictionRequest, Vec<FieldError>> {
        let checks = [
            validate_text(FOOD_PRODUCT, &self.food_product),
            validate_text(MAIN_INGREDIENT, &self.main_ingredient),
            validate_text(SWEETENER, &self.sweetener),
            validate_text(FAT_OIL, &self.fat_oil),
            validate_text(SEASONING, &self.seasoning),
            validate_text(ALLERGENS, &self.allergens),
            validate_price(self.price),
            validate_rating(self.customer_rating),
        ];
        let errors: Vec<FieldError> = checks.into_iter().filter_map(|c| c.err()).collect();
        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(PredictionRequest {
            food_product: self.food_product.clone(),
            main_ingredient: self.main_ingredient.clone(),
            sweetener: self.sweetener.clone(),
            fat_oil: self.fat_oil.clone(),
            seasoning: self.seasoning.clone(),
            allergens: self.allergens.clone(),
            price: self.price,
            customer_rating: self.customer_rating,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chips() -> ProductForm {
        ProductForm {
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
    fn test_is_purely_numeric() {
        assert!(is_purely_numeric("123"));
        assert!(is_purely_numeric("٣"));
        assert!(is_purely_numeric("½"));
        assert!(!is_purely_numeric(""));
        assert!(!is_purely_numeric("12.5"));
        assert!(!is_purely_numeric("-3"));
        assert!(!is_purely_numeric("7up"));
        assert!(!is_purely_numeric("12 "));
    }

    #[test]
    fn test_cjk_numerals_are_numeric() {
        assert!(is_purely_numeric("五"));
        assert!(is_purely_numeric("十二"));
        assert!(is_purely_numeric("壹佰"));
        assert!(!is_purely_numeric("五香粉"));
        assert_eq!(
            validate_text(SEASONING, "七"),
            Err(FieldError::Numeric(SEASONING))
        );
    }

    #[test]
    fn test_valid_form_builds_request() {
        let request = chips().validate().unwrap();
        assert_eq!(request.food_product, "Chips");
        assert_eq!(request.fat_oil, "Sunflower Oil");
        assert_eq!(request.price, 2.5);
        assert_eq!(request.customer_rating, 4.0);
    }

    #[test]
    fn test_numeric_rejected_in_every_text_field() {
        let fields = [
            FOOD_PRODUCT,
            MAIN_INGREDIENT,
            SWEETENER,
            FAT_OIL,
            SEASONING,
            ALLERGENS,
        ];
        for (i, field) in fields.iter().enumerate() {
            let mut form = chips();
            let slot = match i {
                0 => &mut form.food_product,
                1 => &mut form.main_ingredient,
                2 => &mut form.sweetener,
                3 => &mut form.fat_oil,
                4 => &mut form.seasoning,
                _ => &mut form.allergens,
            };
            *slot = "42".into();
            assert_eq!(form.validate(), Err(vec![FieldError::Numeric(*field)]));
        }
    }

    #[test]
    fn test_one_error_per_offending_field() {
        let form = ProductForm {
            food_product: "123".into(),
            sweetener: String::new(),
            customer_rating: 5.5,
            ..chips()
        };
        assert_eq!(
            form.validate(),
            Err(vec![
                FieldError::Numeric(FOOD_PRODUCT),
                FieldError::Empty(SWEETENER),
                FieldError::OutOfRange {
                    field: CUSTOMER_RATING,
                    min: 0.0,
                    max: 5.0
                },
            ])
        );
    }

    #[test]
    fn test_default_form_reports_every_text_field() {
        let errors = ProductForm::default().validate().unwrap_err();
        assert_eq!(errors.len(), 6);
        assert!(errors.iter().all(|e| matches!(e, FieldError::Empty(_))));
    }

    #[test]
    fn test_numeric_boundaries() {
        let at_zero = ProductForm {
            price: 0.0,
            customer_rating: 0.0,
            ..chips()
        };
        assert!(at_zero.validate().is_ok());

        let at_five = ProductForm {
            customer_rating: 5.0,
            ..chips()
        };
        assert!(at_five.validate().is_ok());

        assert!(validate_rating(5.01).is_err());
        assert!(validate_rating(-0.1).is_err());
        assert!(validate_rating(f64::NAN).is_err());
        assert!(validate_price(-0.01).is_err());
        assert!(validate_price(f64::INFINITY).is_err());
        assert!(validate_price(1_000.0).is_ok());
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            FieldError::Numeric(FAT_OIL).to_string(),
            "Fat/Oil should not contain numbers. Please correct it."
        );
        assert_eq!(
            FieldError::Empty(ALLERGENS).to_string(),
            "Allergens is required. If a field doesn't apply, type 'None'."
        );
    }
}
