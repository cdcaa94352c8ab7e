use serde::{Deserialize, Serialize};
use std::fmt;

/// One ingredient line as displayed on product and program pages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    pub amount: String,
    pub benefit: String,
}

impl Ingredient {
    /// Empty row for the admin forms.
    pub fn blank() -> Self {
        Self {
            name: String::new(),
            amount: String::new(),
            benefit: String::new(),
        }
    }

    /// Rows with no name are dropped before submission.
    pub fn is_blank(&self) -> bool {
        self.name.trim().is_empty()
    }
}

/// Nutrition facts, serialized flat into the owning record.
/// The calorie column keeps its legacy `cal` name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct NutritionFacts {
    #[serde(rename = "cal")]
    pub calories: u32,
    pub protein: String,
    pub fiber: String,
    pub carbs: String,
    pub fats: String,
}

/// A catalog product. Read-only from the cart's and the program editor's
/// point of view; only the admin back-office mutates it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub slug: String,
    pub name: String,
    /// Canonical values come from [`Category`]; custom values are allowed.
    pub category: String,
    /// Canonical values come from [`SubCategory`]; custom values are allowed.
    pub sub_category: String,
    /// Price in whole dirhams, always positive.
    pub price: u32,
    pub description: String,
    pub full_description: String,
    /// Opaque image URL; the application never inspects image bytes.
    pub image: String,
    #[serde(flatten)]
    pub nutrition: NutritionFacts,
    pub ingredients: Vec<Ingredient>,
    /// RFC 3339 timestamp
    pub created_at: String,
}

/// Top-level shop categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Snacks,
    Beverages,
    Compliments,
    Program,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Snacks,
        Category::Beverages,
        Category::Compliments,
        Category::Program,
    ];

    /// Display label, also the value stored on product records.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Snacks => "Healthy Snacks",
            Category::Beverages => "Juice & Smoothies",
            Category::Compliments => "Healthy Compliments",
            Category::Program => "Nutrition Programs",
        }
    }

    /// Valid sub-categories for this category; the first entry is the
    /// default the admin form falls back to.
    pub fn subcategories(&self) -> &'static [SubCategory] {
        match self {
            Category::Snacks => &[
                SubCategory::Muffin,
                SubCategory::Cake,
                SubCategory::Cookies,
                SubCategory::EnergyBalls,
                SubCategory::GranolaBar,
                SubCategory::Granola,
            ],
            Category::Beverages => &[SubCategory::Juice, SubCategory::Smoothie],
            Category::Compliments => &[
                SubCategory::Honey,
                SubCategory::Superfood,
                SubCategory::Spread,
                SubCategory::Supplement,
            ],
            Category::Program => &[
                SubCategory::WeightLoss,
                SubCategory::MuscleGain,
                SubCategory::HealthyLiving,
            ],
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Shop sub-categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubCategory {
    Muffin,
    Cake,
    Cookies,
    EnergyBalls,
    GranolaBar,
    Granola,
    Juice,
    Smoothie,
    Honey,
    Superfood,
    Spread,
    Supplement,
    WeightLoss,
    MuscleGain,
    HealthyLiving,
}

impl SubCategory {
    /// Display label, also the value stored on product and program records.
    pub fn label(&self) -> &'static str {
        match self {
            SubCategory::Muffin => "Muffin",
            SubCategory::Cake => "Cake",
            SubCategory::Cookies => "Cookies",
            SubCategory::EnergyBalls => "Energetic balls",
            SubCategory::GranolaBar => "Granola Bar",
            SubCategory::Granola => "Granola",
            SubCategory::Juice => "Juice",
            SubCategory::Smoothie => "Smoothie",
            SubCategory::Honey => "Pure Honey",
            SubCategory::Superfood => "Superfood",
            SubCategory::Spread => "Healthy Spread",
            SubCategory::Supplement => "Natural Supplement",
            SubCategory::WeightLoss => "Perte de poids",
            SubCategory::MuscleGain => "Prise de masse",
            SubCategory::HealthyLiving => "Alimentation saine",
        }
    }
}

impl fmt::Display for SubCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Meal slots in a program day. Serialized with the French labels the
/// storefront displays and the database stores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum MealType {
    #[default]
    #[serde(rename = "Petit-déjeuner")]
    Breakfast,
    #[serde(rename = "Déjeuner")]
    Lunch,
    #[serde(rename = "Collation")]
    Snack,
    #[serde(rename = "Dîner")]
    Dinner,
}

impl MealType {
    pub const ALL: [MealType; 4] = [
        MealType::Breakfast,
        MealType::Lunch,
        MealType::Snack,
        MealType::Dinner,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MealType::Breakfast => "Petit-déjeuner",
            MealType::Lunch => "Déjeuner",
            MealType::Snack => "Collation",
            MealType::Dinner => "Dîner",
        }
    }
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One entry within a meal. The product link is a snapshot taken at
/// selection time: the label is seeded from the product name but stays
/// independently editable, and later catalog edits never rewrite it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct MealItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_id: Option<String>,
    pub label: String,
}

/// One meal within a program day. The meal type column keeps its legacy
/// `repas` name. A day may carry the same meal type more than once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meal {
    #[serde(rename = "repas")]
    pub meal_type: MealType,
    pub items: Vec<MealItem>,
}

/// One numbered day of a program schedule. Day numbers are 1-indexed and
/// unique within a program; [`resize_schedule`] maintains that invariant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DaySchedule {
    pub day: u32,
    pub meals: Vec<Meal>,
}

impl DaySchedule {
    pub fn empty(day: u32) -> Self {
        Self { day, meals: Vec::new() }
    }
}

/// A multi-day meal program.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Program {
    pub id: String,
    pub slug: String,
    pub name: String,
    pub sub_category: String,
    /// Per-day rate in whole dirhams.
    pub price: u32,
    pub description: String,
    pub full_description: String,
    pub image: String,
    /// Number of days, always >= 1.
    pub duration: u32,
    /// Exactly `duration` entries numbered 1..=duration.
    pub schedule: Vec<DaySchedule>,
    pub ingredients: Vec<Ingredient>,
    #[serde(flatten)]
    pub nutrition: NutritionFacts,
    pub features: Vec<String>,
    /// RFC 3339 timestamp
    pub created_at: String,
}

/// A blog article. Content is static, shipped with the frontend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: String,
    pub title: String,
    pub excerpt: String,
    pub content: String,
    /// ISO 8601 date (YYYY-MM-DD)
    pub date: String,
    pub image: String,
    pub author: String,
}

/// Payload for creating or updating a product. The identifier, slug
/// fallback and timestamp are filled in server-side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    pub name: String,
    pub category: String,
    pub sub_category: String,
    pub price: u32,
    pub description: String,
    #[serde(default)]
    pub full_description: String,
    pub image: String,
    #[serde(flatten)]
    pub nutrition: NutritionFacts,
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
}

/// Payload for creating or updating a program. The schedule is
/// re-normalized against `duration` server-side before persisting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgramPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    pub name: String,
    pub sub_category: String,
    pub price: u32,
    pub description: String,
    #[serde(default)]
    pub full_description: String,
    pub image: String,
    pub duration: u32,
    #[serde(default)]
    pub schedule: Vec<DaySchedule>,
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
    #[serde(flatten)]
    pub nutrition: NutritionFacts,
    #[serde(default)]
    pub features: Vec<String>,
}

/// Response containing the product catalog, newest first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductListResponse {
    pub products: Vec<Product>,
}

/// Response containing all programs, newest first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgramListResponse {
    pub programs: Vec<Program>,
}

/// Response after deleting a product or program.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub success_message: String,
}

/// Request carrying a contact-form submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub reason: String,
    pub message: String,
}

/// Response after storing a contact message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactResponse {
    pub success_message: String,
}

/// URL slug from a display name: lowercased, word characters and spaces
/// kept, runs of spaces collapsed to single hyphens.
pub fn slugify(text: &str) -> String {
    let cleaned: String = text
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_' || *c == ' ')
        .collect();
    cleaned
        .split(' ')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

/// Regenerate a schedule to exactly `days` entries numbered 1..=days.
///
/// Days already present keep their meals; days beyond the new count are
/// dropped (their meals are lost); new days start empty. Also repairs
/// malformed input: duplicate day numbers keep their first occurrence,
/// gaps are filled with empty days.
pub fn resize_schedule(schedule: &[DaySchedule], days: u32) -> Vec<DaySchedule> {
    (1..=days)
        .map(|day| {
            schedule
                .iter()
                .find(|d| d.day == day)
                .cloned()
                .unwrap_or_else(|| DaySchedule::empty(day))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meal(meal_type: MealType, labels: &[&str]) -> Meal {
        Meal {
            meal_type,
            items: labels
                .iter()
                .map(|l| MealItem {
                    product_id: None,
                    label: l.to_string(),
                })
                .collect(),
        }
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Almond Energy Balls"), "almond-energy-balls");
        assert_eq!(slugify("Programme Perte de Poids 7j"), "programme-perte-de-poids-7j");
        // Accented characters and punctuation are stripped, runs of spaces collapse
        assert_eq!(slugify("Thé  Vert (Bio)!"), "th-vert-bio");
        assert_eq!(slugify("  trimmed  "), "trimmed");
        assert_eq!(slugify(""), "");
    }

    #[test]
    fn test_resize_schedule_generates_numbered_days() {
        let schedule = resize_schedule(&[], 7);
        assert_eq!(schedule.len(), 7);
        for (i, day) in schedule.iter().enumerate() {
            assert_eq!(day.day, i as u32 + 1);
            assert!(day.meals.is_empty());
        }
    }

    #[test]
    fn test_resize_schedule_keeps_existing_days() {
        let mut schedule = resize_schedule(&[], 5);
        schedule[2].meals.push(meal(MealType::Lunch, &["Salade"]));

        let resized = resize_schedule(&schedule, 8);
        assert_eq!(resized.len(), 8);
        assert_eq!(resized[2].meals.len(), 1);
        assert_eq!(resized[2].meals[0].meal_type, MealType::Lunch);
        assert!(resized[7].meals.is_empty());
    }

    #[test]
    fn test_resize_schedule_shrink_is_destructive() {
        let mut schedule = resize_schedule(&[], 10);
        schedule[1].meals.push(meal(MealType::Breakfast, &["Granola"]));
        schedule[6].meals.push(meal(MealType::Dinner, &["Soupe"]));

        let shrunk = resize_schedule(&schedule, 3);
        assert_eq!(shrunk.len(), 3);
        assert_eq!(shrunk[1].meals.len(), 1);

        // Growing back does not restore the dropped days' meals
        let regrown = resize_schedule(&shrunk, 10);
        assert_eq!(regrown.len(), 10);
        assert_eq!(regrown[1].meals.len(), 1);
        for day in &regrown[3..] {
            assert!(day.meals.is_empty(), "day {} should be empty", day.day);
        }
    }

    #[test]
    fn test_resize_schedule_repairs_gaps_and_duplicates() {
        let malformed = vec![
            DaySchedule { day: 2, meals: vec![meal(MealType::Snack, &["Noix"])] },
            DaySchedule { day: 2, meals: vec![] },
            DaySchedule { day: 5, meals: vec![] },
        ];
        let repaired = resize_schedule(&malformed, 3);
        assert_eq!(repaired.len(), 3);
        assert_eq!(repaired[0].day, 1);
        assert_eq!(repaired[1].day, 2);
        // First occurrence of the duplicated day wins
        assert_eq!(repaired[1].meals.len(), 1);
        assert_eq!(repaired[2].day, 3);
    }

    #[test]
    fn test_meal_wire_format() {
        let m = Meal {
            meal_type: MealType::Breakfast,
            items: vec![MealItem { product_id: None, label: "Muffin avoine".to_string() }],
        };
        let json = serde_json::to_value(&m).unwrap();
        assert_eq!(json["repas"], "Petit-déjeuner");
        // Unset product references are omitted entirely
        assert!(json["items"][0].get("product_id").is_none());
        assert_eq!(json["items"][0]["label"], "Muffin avoine");

        let back: Meal = serde_json::from_value(json).unwrap();
        assert_eq!(back, m);
    }

    #[test]
    fn test_meal_item_keeps_product_reference() {
        let item = MealItem {
            product_id: Some("prod-1".to_string()),
            label: "Green Detox Juice".to_string(),
        };
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["product_id"], "prod-1");

        let back: MealItem = serde_json::from_value(json).unwrap();
        assert_eq!(back, item);
    }

    #[test]
    fn test_meal_type_labels_round_trip() {
        for meal_type in MealType::ALL {
            let json = serde_json::to_string(&meal_type).unwrap();
            assert_eq!(json, format!("\"{}\"", meal_type.label()));
            let back: MealType = serde_json::from_str(&json).unwrap();
            assert_eq!(back, meal_type);
        }
    }

    #[test]
    fn test_product_serializes_nutrition_flat() {
        let product = Product {
            id: "p1".to_string(),
            slug: "oatmeal-choco-muffin".to_string(),
            name: "Oatmeal Choco Muffin".to_string(),
            category: Category::Snacks.label().to_string(),
            sub_category: SubCategory::Muffin.label().to_string(),
            price: 25,
            description: "Sugar-free oatmeal muffins.".to_string(),
            full_description: String::new(),
            image: "https://example.com/muffin.jpg".to_string(),
            nutrition: NutritionFacts {
                calories: 180,
                protein: "5g".to_string(),
                fiber: "4g".to_string(),
                carbs: "22g".to_string(),
                fats: "8g".to_string(),
            },
            ingredients: vec![],
            created_at: "2025-01-10T08:00:00Z".to_string(),
        };
        let json = serde_json::to_value(&product).unwrap();
        // Legacy flat columns, no nested nutrition object
        assert_eq!(json["cal"], 180);
        assert_eq!(json["protein"], "5g");
        assert!(json.get("nutrition").is_none());

        let back: Product = serde_json::from_value(json).unwrap();
        assert_eq!(back, product);
    }

    #[test]
    fn test_category_subcategory_defaults() {
        for category in Category::ALL {
            assert!(
                !category.subcategories().is_empty(),
                "{} has no subcategories",
                category
            );
        }
        assert_eq!(Category::Snacks.subcategories()[0], SubCategory::Muffin);
        assert_eq!(Category::Program.subcategories()[0], SubCategory::WeightLoss);
    }

    #[test]
    fn test_ingredient_blank_detection() {
        assert!(Ingredient::blank().is_blank());
        assert!(Ingredient {
            name: "   ".to_string(),
            amount: "10g".to_string(),
            benefit: String::new(),
        }
        .is_blank());
        assert!(!Ingredient {
            name: "Amandes".to_string(),
            amount: String::new(),
            benefit: String::new(),
        }
        .is_blank());
    }

    #[test]
    fn test_program_payload_defaults_optional_collections() {
        let json = serde_json::json!({
            "name": "Programme Perte de Poids",
            "sub_category": "Perte de poids",
            "price": 150,
            "description": "Programme équilibré",
            "image": "https://example.com/programme.jpg",
            "duration": 7,
            "cal": 1400,
            "protein": "90g",
            "fiber": "30g",
            "carbs": "120g",
            "fats": "40g"
        });
        let payload: ProgramPayload = serde_json::from_value(json).unwrap();
        assert!(payload.slug.is_none());
        assert!(payload.schedule.is_empty());
        assert!(payload.features.is_empty());
        assert_eq!(payload.nutrition.calories, 1400);
    }
}
