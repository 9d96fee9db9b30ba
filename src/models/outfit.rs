use serde::Serialize;

/// A complete outfit recommendation as shown to the client
///
/// Every field is free-form display text.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Outfit {
    pub top: String,
    pub bottom: String,
    pub footwear: String,
    pub colors: String,
    pub tips: String,
}

impl Outfit {
    /// Builds an outfit from static table text
    pub fn new(top: &str, bottom: &str, footwear: &str, colors: &str, tips: &str) -> Self {
        Self {
            top: top.to_string(),
            bottom: bottom.to_string(),
            footwear: footwear.to_string(),
            colors: colors.to_string(),
            tips: tips.to_string(),
        }
    }

    pub fn with_top(self, top: impl Into<String>) -> Self {
        Self {
            top: top.into(),
            ..self
        }
    }

    pub fn with_bottom(self, bottom: impl Into<String>) -> Self {
        Self {
            bottom: bottom.into(),
            ..self
        }
    }

    pub fn with_footwear(self, footwear: impl Into<String>) -> Self {
        Self {
            footwear: footwear.into(),
            ..self
        }
    }

    pub fn with_colors(self, colors: impl Into<String>) -> Self {
        Self {
            colors: colors.into(),
            ..self
        }
    }

    /// Appends one more sentence to the tips, separated by a single space
    pub fn with_tip(mut self, sentence: &str) -> Self {
        self.tips.push(' ');
        self.tips.push_str(sentence);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Outfit {
        Outfit::new("Tee", "Jeans", "Sneakers", "Black", "Keep it simple.")
    }

    #[test]
    fn test_with_tip_appends_after_space() {
        let outfit = sample().with_tip("Add a cap.").with_tip("Thrift it.");
        assert_eq!(outfit.tips, "Keep it simple. Add a cap. Thrift it.");
    }

    #[test]
    fn test_setters_only_touch_their_field() {
        let outfit = sample().with_top("Hoodie").with_colors("Olive");
        assert_eq!(outfit.top, "Hoodie");
        assert_eq!(outfit.colors, "Olive");
        assert_eq!(outfit.bottom, "Jeans");
        assert_eq!(outfit.footwear, "Sneakers");
        assert_eq!(outfit.tips, "Keep it simple.");
    }

    #[test]
    fn test_outfit_serializes_field_names() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["top"], "Tee");
        assert_eq!(json["bottom"], "Jeans");
        assert_eq!(json["footwear"], "Sneakers");
        assert_eq!(json["colors"], "Black");
        assert_eq!(json["tips"], "Keep it simple.");
    }
}
