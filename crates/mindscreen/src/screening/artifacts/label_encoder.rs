use serde::{Deserialize, Serialize};

/// Maps a canonical category string to the integer code the model was trained with.
pub trait CategoricalEncoder: Send + Sync {
    fn transform(&self, value: &str) -> Result<i64, EncoderError>;

    /// Every category the encoder accepts.
    fn classes(&self) -> Vec<&str>;
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EncoderError {
    #[error("category '{0}' was not seen when the encoder was fitted")]
    UnknownCategory(String),
}

/// Fitted label encoder: classes kept sorted, code is the class position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelEncoder {
    classes: Vec<String>,
}

impl LabelEncoder {
    /// Builds an encoder from its fitted classes. Returns the first duplicate on failure.
    pub fn new<I, S>(classes: I) -> Result<Self, String>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut classes: Vec<String> = classes.into_iter().map(Into::into).collect();
        classes.sort();
        if let Some(pair) = classes.windows(2).find(|pair| pair[0] == pair[1]) {
            return Err(pair[0].clone());
        }
        Ok(Self { classes })
    }
}

impl CategoricalEncoder for LabelEncoder {
    fn transform(&self, value: &str) -> Result<i64, EncoderError> {
        self.classes
            .binary_search_by(|class| class.as_str().cmp(value))
            .map(|index| index as i64)
            .map_err(|_| EncoderError::UnknownCategory(value.to_string()))
    }

    fn classes(&self) -> Vec<&str> {
        self.classes.iter().map(String::as_str).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_follow_sorted_class_order() {
        let encoder = LabelEncoder::new([
            "More than 8 hours",
            "5-6 hours",
            "Less than 5 hours",
            "7-8 hours",
        ])
        .expect("distinct classes");

        assert_eq!(encoder.transform("5-6 hours"), Ok(0));
        assert_eq!(encoder.transform("7-8 hours"), Ok(1));
        assert_eq!(encoder.transform("Less than 5 hours"), Ok(2));
        assert_eq!(encoder.transform("More than 8 hours"), Ok(3));
    }

    #[test]
    fn unknown_categories_are_rejected() {
        let encoder = LabelEncoder::new(["No", "Yes"]).expect("distinct classes");
        assert_eq!(
            encoder.transform("Maybe"),
            Err(EncoderError::UnknownCategory("Maybe".to_string()))
        );
    }

    #[test]
    fn duplicate_classes_fail_construction() {
        assert_eq!(LabelEncoder::new(["Yes", "No", "Yes"]), Err("Yes".to_string()));
    }
}
