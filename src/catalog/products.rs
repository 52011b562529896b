//! Product health tiers and the India alternatives catalog

use crate::alternatives::AlternativesTable;
use crate::classifier::{KeywordSet, TierRule, TierTable, Trigger};
use crate::models::{HealthRating, ProductCategory};

/// Tier tables for both product categories, scoped to one market.
#[derive(Debug)]
pub struct ProductCatalog {
    /// Shown in report headers and remote prompts.
    pub region: &'static str,
    pub food: TierTable<HealthRating>,
    pub personal_care: TierTable<HealthRating>,
}

impl ProductCatalog {
    pub fn table(&self, category: ProductCategory) -> &TierTable<HealthRating> {
        match category {
            ProductCategory::Food => &self.food,
            ProductCategory::PersonalCare => &self.personal_care,
        }
    }
}

// =============================
// Keywords
// =============================

const UNHEALTHY_FOOD: KeywordSet = KeywordSet::new(
    "unhealthy-food",
    &[
        "chips", "soda", "candy", "chocolate", "doritos", "cheetos", "mountain dew",
        "coca-cola", "pepsi", "energy drink", "cake", "cookie", "fried", "fast food",
        "maggi", "kurkure", "biscuits",
    ],
);

const MODERATE_FOOD: KeywordSet = KeywordSet::new(
    "moderate-food",
    &[
        "granola", "cereal", "juice", "white bread", "pasta sauce", "dressing",
        "protein bar", "flavored yogurt", "instant oatmeal", "parle-g", "marie",
    ],
);

const UNHEALTHY_PERSONAL: KeywordSet = KeywordSet::new(
    "unhealthy-personal-care",
    &[
        "sulfate", "paraben", "phthalate", "formaldehyde", "artificial fragrance",
        "aluminum", "propylene glycol", "sodium lauryl",
    ],
);

const MODERATE_PERSONAL: KeywordSet = KeywordSet::new(
    "moderate-personal-care",
    &[
        "synthetic", "fragrance", "preservative", "color", "pantene", "head & shoulders",
        "alcohol", "clinic plus", "sunsilk",
    ],
);

// =============================
// India: food
// =============================

const INDIA_FOOD_ALTERNATIVES: AlternativesTable = AlternativesTable::new(&[
    ("chips", &["Thinnai (Fox Nuts/Makhana)", "Too Yumm Multigrain Chips", "The Whole Truth Food Veggie Chips", "Slurrp Farm Millet Puffs"]),
    ("kurkure", &["Timios Healthy Snack Sticks", "Yoga Bar Multigrain Chips", "Farmley Roasted Makhana", "Gouri's Goodies Seed Mix"]),
    ("maggi", &["Slurrp Farm Millet Noodles", "Patanjali Atta Noodles", "Bambino Whole Wheat Vermicelli", "MTR Instant Poha"]),
    ("soda", &["Paperboat Coconut Water", "Raw Pressery Fruit Juices", "Dabur Glucose-D in water", "NatureVit Jal Jeera"]),
    ("candy", &["Nutty Gritties Dry Fruits", "True Elements Dry Fruit Bars", "Healthy Karma Energy Bites", "Naturally Yours Dates"]),
    ("chocolate", &["Pascati Organic Dark Chocolate", "Mason & Co. Dark Chocolate", "Kocoatrait Dark Chocolate", "Amul Dark Chocolate"]),
    ("energy drink", &["Auric Ayurvedic Drinks", "Dabur Chyawanprash Mixed in Milk", "B-Natural Fruit Juices", "Organic India Tulsi Tea"]),
    ("cake", &["Wheafree Millet Cake Mix", "Conscious Food Ragi Cake Mix", "Slurrp Farm Millet Pancakes", "Traditional Indian sweet dishes like Rava Kesari"]),
    ("cookie", &["Britannia Nutrichoice", "Unibic Breakfast Cookies", "Early Foods Organic Cookies", "True Elements Seeds Cookies"]),
    ("bread", &["Rudra's Organic Sourdough Bread", "Brown Tree Whole Wheat Bread", "TheHealthyBake Multigrain Bread", "English Oven Atta Bread"]),
    ("cereal", &["Soulfull Ragi Bites", "True Elements Steel Cut Oats", "Yoga Bar Wholegrain Breakfast", "Kellogg's Heart to Heart Oats"]),
    ("juice", &["Raw Pressery Cold Pressed Juice", "Paper Boat Coconut Water", "Fresh homemade nimbu pani", "B Natural Mixed Fruit Juice No Added Sugar"]),
    ("granola", &["Monsoon Harvest Toasted Millet Muesli", "True Elements Fruit & Nut Muesli", "Yoga Bar Muesli", "Conscious Food Amaranth Muesli"]),
    ("yogurt", &["Epigamia Greek Yogurt", "Milky Mist Greek Yogurt", "Traditional homemade dahi/curd", "NutriMoo Greek Yogurt"]),
]);

const FOOD_LESS_HEALTHY_CONCERNS: &[&str] = &[
    "High in processed ingredients",
    "May contain artificial additives",
    "Potentially high in sodium, sugar, or unhealthy fats",
    "Low in essential nutrients",
];

const FOOD_LESS_HEALTHY_FALLBACK: &[&str] = &[
    "Fresh fruits and vegetables from local markets",
    "Traditional Indian snacks like chana, makhana, or roasted peanuts",
    "Homemade curd or buttermilk",
    "Ragi or jowar based products",
];

const FOOD_MODERATE_CONCERNS: &[&str] = &[
    "May contain added sugars",
    "Possible presence of refined grains",
    "Some processed ingredients",
    "Moderate nutritional value",
];

const FOOD_MODERATE_FALLBACK: &[&str] = &[
    "Unprocessed traditional Indian grains like ragi, jowar, or bajra",
    "Locally made products with fewer preservatives",
    "Homemade traditional alternatives",
    "Products from Indian organic brands like 24 Mantra, Conscious Food, etc.",
];

const FOOD_HEALTHY_CONCERNS: &[&str] = &[
    "Generally nutritious, but always check labels",
    "Individual dietary needs may vary",
    "Consider organic options when available in Indian markets",
];

const FOOD_HEALTHY_SUGGESTIONS: &[&str] = &[
    "Continue choosing whole, unprocessed foods",
    "Look for local and seasonal produce at Indian farmers markets",
    "Traditional Indian superfoods like turmeric, ghee, amla, etc.",
    "Millets and traditional Indian grains",
];

// =============================
// India: personal care
// =============================

const INDIA_PERSONAL_ALTERNATIVES: AlternativesTable = AlternativesTable::new(&[
    ("shampoo", &["Biotique Bio Kelp Shampoo", "Khadi Natural Amla & Bhringraj Shampoo", "Forest Essentials Hair Cleanser", "SoulTree Hair Cleanser"]),
    ("conditioner", &["Juicy Chemistry Organic Hair Conditioner", "Rustic Art Organic Conditioner", "Kama Ayurveda Hair Conditioner", "Coconut oil hair massage (traditional Indian method)"]),
    ("soap", &["Medimix Ayurvedic Soap", "Mysore Sandal Soap", "Cinthol Original Soap", "Himalaya Neem & Turmeric Soap"]),
    ("lotion", &["Forest Essentials Body Lotion", "Biotique Bio Coconut Milk Body Lotion", "Himalaya Cocoa Butter Body Lotion", "Traditional coconut oil or mustard oil massage"]),
    ("deodorant", &["Cinthol Deo Stick", "Nivea Deodorants", "Biotique Bio Deodorants", "Himalaya Herbals Deo"]),
    ("toothpaste", &["Dabur Red Toothpaste", "Himalaya Complete Care", "Meswak Toothpaste", "Patanjali Dant Kanti"]),
    ("face wash", &["Himalaya Neem Face Wash", "Biotique Bio Honey Face Wash", "Khadi Natural Face Wash", "Forest Essentials Face Wash"]),
]);

const PERSONAL_LESS_HEALTHY_CONCERNS: &[&str] = &[
    "Contains potentially harmful chemicals",
    "May cause skin irritation or allergic reactions",
    "Possible hormone-disrupting ingredients",
    "Environmental concerns",
];

const PERSONAL_LESS_HEALTHY_FALLBACK: &[&str] = &[
    "Ayurvedic products from brands like Kama Ayurveda or Forest Essentials",
    "Traditional Indian personal care ingredients like multani mitti, besan, etc.",
    "Natural brands available in India like Biotique, Khadi Natural, or SoulTree",
    "Mamaearth or WOW Skin Science products (widely available in India)",
];

const PERSONAL_MODERATE_CONCERNS: &[&str] = &[
    "Contains some synthetic ingredients",
    "Potential irritants for sensitive skin",
    "May include artificial fragrances",
];

const PERSONAL_MODERATE_FALLBACK: &[&str] = &[
    "Natural Ayurvedic alternatives from Indian brands",
    "Traditional Indian herbs and ingredients for personal care",
    "Forest Essentials or Kama Ayurveda products (premium Indian brands)",
    "Patanjali or Himalaya products (widely available in India)",
];

const PERSONAL_HEALTHY_CONCERNS: &[&str] = &[
    "Generally safe ingredients, but individual sensitivities may vary",
    "Consider environmental impact of packaging",
    "Check for Indian certifications like COSMOS India or Ayush",
];

const PERSONAL_HEALTHY_SUGGESTIONS: &[&str] = &[
    "Continue choosing products with natural ingredients from Indian brands",
    "Look for eco-friendly packaging options available in India",
    "Support small, local Indian brands with transparent ingredient policies",
];

pub static INDIA: ProductCatalog = ProductCatalog {
    region: "India",
    food: TierTable {
        rules: &[
            TierRule {
                tier: HealthRating::LessHealthy,
                trigger: Some(Trigger::Any(UNHEALTHY_FOOD)),
                concerns: FOOD_LESS_HEALTHY_CONCERNS,
                fallback: FOOD_LESS_HEALTHY_FALLBACK,
                consult_alternatives: true,
            },
            TierRule {
                tier: HealthRating::Moderate,
                trigger: Some(Trigger::Any(MODERATE_FOOD)),
                concerns: FOOD_MODERATE_CONCERNS,
                fallback: FOOD_MODERATE_FALLBACK,
                consult_alternatives: true,
            },
        ],
        default: TierRule {
            tier: HealthRating::Healthy,
            trigger: None,
            concerns: FOOD_HEALTHY_CONCERNS,
            fallback: FOOD_HEALTHY_SUGGESTIONS,
            consult_alternatives: false,
        },
        alternatives: INDIA_FOOD_ALTERNATIVES,
    },
    personal_care: TierTable {
        rules: &[
            TierRule {
                tier: HealthRating::LessHealthy,
                trigger: Some(Trigger::Any(UNHEALTHY_PERSONAL)),
                concerns: PERSONAL_LESS_HEALTHY_CONCERNS,
                fallback: PERSONAL_LESS_HEALTHY_FALLBACK,
                consult_alternatives: true,
            },
            TierRule {
                tier: HealthRating::Moderate,
                trigger: Some(Trigger::Any(MODERATE_PERSONAL)),
                concerns: PERSONAL_MODERATE_CONCERNS,
                fallback: PERSONAL_MODERATE_FALLBACK,
                consult_alternatives: true,
            },
        ],
        default: TierRule {
            tier: HealthRating::Healthy,
            trigger: None,
            concerns: PERSONAL_HEALTHY_CONCERNS,
            fallback: PERSONAL_HEALTHY_SUGGESTIONS,
            consult_alternatives: false,
        },
        alternatives: INDIA_PERSONAL_ALTERNATIVES,
    },
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alternatives::resolve;

    fn rate(category: ProductCategory, product: &str) -> (HealthRating, Vec<String>) {
        let text = product.to_lowercase();
        let table = INDIA.table(category);
        let c = table.classify(&text);
        let alts = resolve(table, &c, &text);
        (c.tier, alts)
    }

    #[test]
    fn test_chips_are_less_healthy_with_chips_alternatives() {
        let (tier, alts) = rate(ProductCategory::Food, "Lay's Classic Chips");
        assert_eq!(tier, HealthRating::LessHealthy);
        assert_eq!(alts[0], "Thinnai (Fox Nuts/Makhana)");
        assert_eq!(alts.len(), 4);
    }

    #[test]
    fn test_unhealthy_without_specific_key_uses_generic_list() {
        let (tier, alts) = rate(ProductCategory::Food, "Pepsi");
        assert_eq!(tier, HealthRating::LessHealthy);
        assert_eq!(alts, FOOD_LESS_HEALTHY_FALLBACK);
    }

    #[test]
    fn test_moderate_food() {
        let (tier, alts) = rate(ProductCategory::Food, "Kellogg's Corn Flakes Cereal");
        assert_eq!(tier, HealthRating::Moderate);
        assert_eq!(alts[0], "Soulfull Ragi Bites");
    }

    #[test]
    fn test_unknown_food_is_healthy() {
        let (tier, alts) = rate(ProductCategory::Food, "Organic brown rice");
        assert_eq!(tier, HealthRating::Healthy);
        assert_eq!(alts, FOOD_HEALTHY_SUGGESTIONS);
    }

    #[test]
    fn test_personal_care_tiers() {
        let (tier, alts) = rate(ProductCategory::PersonalCare, "Shampoo with sulfate");
        assert_eq!(tier, HealthRating::LessHealthy);
        assert_eq!(alts[0], "Biotique Bio Kelp Shampoo");

        let (tier, _) = rate(ProductCategory::PersonalCare, "Sunsilk shampoo");
        assert_eq!(tier, HealthRating::Moderate);

        let (tier, _) = rate(ProductCategory::PersonalCare, "Plain coconut oil");
        assert_eq!(tier, HealthRating::Healthy);
    }

    #[test]
    fn test_every_tier_has_non_empty_lists() {
        for table in [&INDIA.food, &INDIA.personal_care] {
            for rule in table.rules.iter().chain(std::iter::once(&table.default)) {
                assert!(!rule.fallback.is_empty());
                assert!(!rule.concerns.is_empty());
            }
        }
    }
}
