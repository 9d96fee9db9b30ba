use crate::models::{Budget, Gender, Occasion, Outfit, Style};

/// Appended to the tips once a captured photo has been stored
pub const CAPTURED_TIP: &str =
    "Your current look has been captured and saved for future styling sessions.";

/// Generates a rule-based outfit recommendation
///
/// Starts from a base outfit picked by occasion, then refines it in a fixed
/// order: gender, style, budget. Each refinement may rewrite fields set by an
/// earlier one, and style and budget append their tips in that order.
/// Unrecognized inputs (including empty strings) select the default base or
/// skip their refinement.
pub fn recommend(occasion: &str, gender: &str, style: &str, budget: &str) -> Outfit {
    let outfit = base_outfit(Occasion::from_input(occasion));
    let outfit = refine_by_gender(outfit, Gender::from_input(gender));
    let outfit = refine_by_style(outfit, Style::from_input(style));
    refine_by_budget(outfit, Budget::from_input(budget))
}

/// Coarse recommendation for the occasion
pub fn base_outfit(occasion: Option<Occasion>) -> Outfit {
    match occasion {
        Some(Occasion::Casual) => Outfit::new(
            "Oversized cotton t-shirt or relaxed hoodie",
            "Slim-fit jeans or joggers",
            "Clean white sneakers",
            "Black • White • Grey • Denim blue",
            "Keep it simple and comfortable. Add a watch or cap for a bit of personality.",
        ),
        Some(Occasion::College) => Outfit::new(
            "Layered t-shirt with lightweight jacket or flannel",
            "Straight-fit jeans or chinos",
            "Sneakers or casual loafers",
            "Navy • Olive • Beige • White",
            "Prioritize comfort but add one statement piece like a patterned shirt or bold sneakers.",
        ),
        Some(Occasion::Party) => Outfit::new(
            "Fitted shirt or stylish knit top",
            "Black jeans or tailored trousers",
            "Chelsea boots or sleek sneakers",
            "Black • Burgundy • Metallic accents",
            "Use texture (leather, satin, knit) and one standout accessory to look elevated without overdoing it.",
        ),
        Some(Occasion::Formal) => Outfit::new(
            "Crisp button-down shirt or blouse, possibly with a blazer",
            "Tailored trousers or a pencil skirt",
            "Leather dress shoes or classic heels",
            "Navy • Charcoal • White • Soft pastels",
            "Make sure the fit is clean around shoulders and waist. Subtle accessories keep it professional.",
        ),
        None => Outfit::new(
            "Relaxed fit t-shirt or shirt",
            "Dark blue jeans",
            "Minimal sneakers",
            "Black • Navy • White",
            "Neutral tones keep your outfit clean and modern. Adjust layers based on weather.",
        ),
    }
}

/// Adjusts silhouette and cuts
///
/// Female and male refinements rewrite words inside the base text, so they
/// only take effect when the base wording contains them.
pub fn refine_by_gender(outfit: Outfit, gender: Option<Gender>) -> Outfit {
    match gender {
        Some(Gender::Female) => {
            let top = outfit.top.replace("t-shirt", "blouse or fitted top");
            let bottom = outfit.bottom.replace("jeans", "high-waisted jeans or skirt");
            outfit.with_top(top).with_bottom(bottom)
        }
        Some(Gender::Male) => {
            let top = outfit.top.replace("shirt", "shirt or polo");
            outfit.with_top(top)
        }
        Some(Gender::Neutral) => outfit
            .with_top("Relaxed, gender-neutral top (boxy tee, sweatshirt, or shirt jacket)")
            .with_bottom("Straight or wide-leg trousers/jeans with a comfortable fit"),
        None => outfit,
    }
}

/// Sets the vibe of the outfit
pub fn refine_by_style(outfit: Outfit, style: Option<Style>) -> Outfit {
    match style {
        Some(Style::Minimal) => outfit
            .with_colors("Black • White • Grey • Navy")
            .with_tip("Keep silhouettes clean, avoid big logos, and stick to 2–3 colors."),
        Some(Style::Streetwear) => outfit
            .with_top("Graphic tee or oversized hoodie with a light jacket")
            .with_bottom("Baggy jeans or cargos")
            .with_footwear("Chunky sneakers or high-tops")
            .with_tip("Play with layering, caps, and bold sneakers for a streetwear edge."),
        Some(Style::Classic) => outfit
            .with_top("Crisp shirt or knit with a simple jacket/blazer")
            .with_bottom("Straight-fit chinos or well-fitted jeans")
            .with_footwear("Loafers, derbies, or clean sneakers")
            .with_tip("Focus on timeless pieces and avoid overly trendy details."),
        Some(Style::Bold) => outfit
            .with_colors("Jewel tones • Prints • Contrast color blocking")
            .with_tip("Add one loud piece (print shirt, bright jacket, or statement shoes)."),
        None => outfit,
    }
}

/// Adds shopping advice
pub fn refine_by_budget(outfit: Outfit, budget: Option<Budget>) -> Outfit {
    match budget {
        Some(Budget::Low) => outfit
            .with_tip("Look at high-street brands and thrift stores to recreate this affordably."),
        Some(Budget::Medium) => {
            outfit.with_tip("Mix mid-range brands with a few quality basics that last longer.")
        }
        Some(Budget::High) => outfit.with_tip(
            "Invest in premium fabrics and tailoring; focus on fit and material quality.",
        ),
        None => outfit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CASUAL_TIP: &str =
        "Keep it simple and comfortable. Add a watch or cap for a bit of personality.";
    const COLLEGE_TIP: &str =
        "Prioritize comfort but add one statement piece like a patterned shirt or bold sneakers.";
    const PARTY_TIP: &str = "Use texture (leather, satin, knit) and one standout accessory to look elevated without overdoing it.";
    const MINIMAL_TIP: &str = "Keep silhouettes clean, avoid big logos, and stick to 2–3 colors.";
    const BOLD_TIP: &str = "Add one loud piece (print shirt, bright jacket, or statement shoes).";
    const LOW_TIP: &str =
        "Look at high-street brands and thrift stores to recreate this affordably.";
    const HIGH_TIP: &str =
        "Invest in premium fabrics and tailoring; focus on fit and material quality.";

    #[test]
    fn test_unrecognized_inputs_return_default_base() {
        let expected = base_outfit(None);
        assert_eq!(recommend("", "", "", ""), expected);
        assert_eq!(recommend("wedding", "other", "goth", "unlimited"), expected);
        assert_eq!(expected.top, "Relaxed fit t-shirt or shirt");
        assert_eq!(expected.bottom, "Dark blue jeans");
        assert_eq!(expected.footwear, "Minimal sneakers");
        assert_eq!(expected.colors, "Black • Navy • White");
        assert_eq!(
            expected.tips,
            "Neutral tones keep your outfit clean and modern. Adjust layers based on weather."
        );
    }

    #[test]
    fn test_unrecognized_refinements_keep_occasion_base() {
        let outfit = recommend("formal", "x", "y", "z");
        assert_eq!(outfit, base_outfit(Some(Occasion::Formal)));
    }

    #[test]
    fn test_casual_male_adds_polo() {
        let base = base_outfit(Some(Occasion::Casual));
        let outfit = recommend("casual", "male", "", "");

        assert!(outfit.top.contains("or polo"));
        assert_eq!(
            outfit.top,
            "Oversized cotton t-shirt or polo or relaxed hoodie"
        );
        assert_eq!(outfit.bottom, base.bottom);
        assert_eq!(outfit.footwear, base.footwear);
        assert_eq!(outfit.colors, base.colors);
        assert_eq!(outfit.tips, CASUAL_TIP);
    }

    #[test]
    fn test_party_female_bold_high() {
        let outfit = recommend("party", "female", "bold", "high");

        // party top has no "t-shirt"; its bottom does contain "jeans"
        assert_eq!(outfit.top, "Fitted shirt or stylish knit top");
        assert_eq!(
            outfit.bottom,
            "Black high-waisted jeans or skirt or tailored trousers"
        );
        assert_eq!(outfit.footwear, "Chelsea boots or sleek sneakers");
        assert_eq!(outfit.colors, "Jewel tones • Prints • Contrast color blocking");
        assert_eq!(outfit.tips, format!("{PARTY_TIP} {BOLD_TIP} {HIGH_TIP}"));
    }

    #[test]
    fn test_college_neutral_minimal_low() {
        let outfit = recommend("college", "neutral", "minimal", "low");

        assert_eq!(
            outfit.top,
            "Relaxed, gender-neutral top (boxy tee, sweatshirt, or shirt jacket)"
        );
        assert_eq!(
            outfit.bottom,
            "Straight or wide-leg trousers/jeans with a comfortable fit"
        );
        assert_eq!(outfit.footwear, "Sneakers or casual loafers");
        assert_eq!(outfit.colors, "Black • White • Grey • Navy");
        assert_eq!(outfit.tips, format!("{COLLEGE_TIP} {MINIMAL_TIP} {LOW_TIP}"));
    }

    #[test]
    fn test_female_rewrites_tshirt_and_jeans() {
        let outfit = recommend("college", "female", "", "");
        assert_eq!(
            outfit.top,
            "Layered blouse or fitted top with lightweight jacket or flannel"
        );
        assert_eq!(
            outfit.bottom,
            "Straight-fit high-waisted jeans or skirt or chinos"
        );
    }

    #[test]
    fn test_female_without_matching_words_is_unchanged() {
        let outfit = recommend("formal", "female", "", "");
        assert_eq!(outfit, base_outfit(Some(Occasion::Formal)));
    }

    #[test]
    fn test_style_overrides_gender_rewrite() {
        let outfit = recommend("casual", "male", "streetwear", "");
        assert_eq!(outfit.top, "Graphic tee or oversized hoodie with a light jacket");
        assert_eq!(outfit.bottom, "Baggy jeans or cargos");
        assert_eq!(outfit.footwear, "Chunky sneakers or high-tops");
        assert_eq!(
            outfit.tips,
            format!("{CASUAL_TIP} Play with layering, caps, and bold sneakers for a streetwear edge.")
        );
    }

    #[test]
    fn test_classic_medium() {
        let outfit = recommend("", "", "classic", "medium");
        assert_eq!(outfit.top, "Crisp shirt or knit with a simple jacket/blazer");
        assert_eq!(outfit.bottom, "Straight-fit chinos or well-fitted jeans");
        assert_eq!(outfit.footwear, "Loafers, derbies, or clean sneakers");
        assert!(outfit.tips.ends_with(
            "Focus on timeless pieces and avoid overly trendy details. \
             Mix mid-range brands with a few quality basics that last longer."
        ));
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        assert_eq!(
            recommend("CASUAL", "Female", "Minimal", "LOW"),
            recommend("casual", "female", "minimal", "low")
        );
    }

    #[test]
    fn test_recommend_is_deterministic() {
        let first = recommend("party", "male", "classic", "high");
        let second = recommend("party", "male", "classic", "high");
        assert_eq!(first, second);
    }
}
