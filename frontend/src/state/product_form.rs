use shared::{Category, Ingredient, NutritionFacts, Product, ProductPayload};
use std::rc::Rc;
use yew::prelude::*;

use crate::state::IngredientField;

/// Sentinel select value meaning "operator typed a custom value".
pub const CUSTOM_VALUE: &str = "__custom__";

/// Scalar text fields of the product form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductField {
    Name,
    Slug,
    Price,
    Description,
    FullDescription,
    Image,
    Cal,
    Protein,
    Fiber,
    Carbs,
    Fats,
    CustomCategory,
    CustomSubCategory,
}

/// The admin product form.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductForm {
    pub name: String,
    pub slug: String,
    pub category: String,
    pub sub_category: String,
    pub custom_category: String,
    pub custom_sub_category: String,
    pub price: String,
    pub description: String,
    pub full_description: String,
    pub image: String,
    pub cal: String,
    pub protein: String,
    pub fiber: String,
    pub carbs: String,
    pub fats: String,
    pub ingredients: Vec<Ingredient>,
}

pub enum ProductFormAction {
    SetField(ProductField, String),
    /// Changing the category re-seeds the sub-category to the first valid
    /// one for the new category.
    SetCategory(String),
    SetSubCategory(String),
    AddIngredient,
    RemoveIngredient(usize),
    SetIngredient(usize, IngredientField, String),
    /// Begin editing an existing product.
    Load(Product),
    Reset,
}

impl Default for ProductForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            slug: String::new(),
            category: Category::Snacks.label().to_string(),
            sub_category: Category::Snacks.subcategories()[0].label().to_string(),
            custom_category: String::new(),
            custom_sub_category: String::new(),
            price: String::new(),
            description: String::new(),
            full_description: String::new(),
            image: String::new(),
            cal: String::new(),
            protein: String::new(),
            fiber: String::new(),
            carbs: String::new(),
            fats: String::new(),
            ingredients: vec![Ingredient::blank()],
        }
    }
}

impl ProductForm {
    fn set_field(&mut self, field: ProductField, value: String) {
        match field {
            ProductField::Name => self.name = value,
            ProductField::Slug => self.slug = value,
            ProductField::Price => self.price = value,
            ProductField::Description => self.description = value,
            ProductField::FullDescription => self.full_description = value,
            ProductField::Image => self.image = value,
            ProductField::Cal => self.cal = value,
            ProductField::Protein => self.protein = value,
            ProductField::Fiber => self.fiber = value,
            ProductField::Carbs => self.carbs = value,
            ProductField::Fats => self.fats = value,
            ProductField::CustomCategory => self.custom_category = value,
            ProductField::CustomSubCategory => self.custom_sub_category = value,
        }
    }

    /// The category value that would be submitted, resolving the custom
    /// sentinel to the typed text.
    pub fn resolved_category(&self) -> String {
        if self.category == CUSTOM_VALUE {
            self.custom_category.trim().to_string()
        } else {
            self.category.clone()
        }
    }

    pub fn resolved_sub_category(&self) -> String {
        if self.sub_category == CUSTOM_VALUE {
            self.custom_sub_category.trim().to_string()
        } else {
            self.sub_category.clone()
        }
    }

    /// Convert the form into the submission payload. Number fields fall
    /// back to zero; the backend re-validates.
    pub fn to_payload(&self) -> ProductPayload {
        ProductPayload {
            slug: match self.slug.trim() {
                "" => None,
                slug => Some(slug.to_string()),
            },
            name: self.name.clone(),
            category: self.resolved_category(),
            sub_category: self.resolved_sub_category(),
            price: self.price.trim().parse().unwrap_or(0),
            description: self.description.clone(),
            full_description: self.full_description.clone(),
            image: self.image.clone(),
            nutrition: NutritionFacts {
                calories: self.cal.trim().parse().unwrap_or(0),
                protein: self.protein.clone(),
                fiber: self.fiber.clone(),
                carbs: self.carbs.clone(),
                fats: self.fats.clone(),
            },
            ingredients: self
                .ingredients
                .iter()
                .filter(|ing| !ing.is_blank())
                .cloned()
                .collect(),
        }
    }
}

impl Reducible for ProductForm {
    type Action = ProductFormAction;

    fn reduce(self: Rc<Self>, action: ProductFormAction) -> Rc<Self> {
        match action {
            ProductFormAction::SetField(field, value) => {
                let mut next = (*self).clone();
                next.set_field(field, value);
                Rc::new(next)
            }
            ProductFormAction::SetCategory(value) => {
                let mut next = (*self).clone();
                next.sub_category = if value == CUSTOM_VALUE {
                    CUSTOM_VALUE.to_string()
                } else {
                    Category::ALL
                        .iter()
                        .find(|c| c.label() == value)
                        .map(|c| c.subcategories()[0].label().to_string())
                        .unwrap_or_default()
                };
                if value != CUSTOM_VALUE {
                    next.custom_category.clear();
                }
                if next.sub_category != CUSTOM_VALUE {
                    next.custom_sub_category.clear();
                }
                next.category = value;
                Rc::new(next)
            }
            ProductFormAction::SetSubCategory(value) => {
                let mut next = (*self).clone();
                if value != CUSTOM_VALUE {
                    next.custom_sub_category.clear();
                }
                next.sub_category = value;
                Rc::new(next)
            }
            ProductFormAction::AddIngredient => {
                let mut next = (*self).clone();
                next.ingredients.push(Ingredient::blank());
                Rc::new(next)
            }
            ProductFormAction::RemoveIngredient(idx) => {
                // The form always keeps at least one row
                if self.ingredients.len() <= 1 || idx >= self.ingredients.len() {
                    return self;
                }
                let mut next = (*self).clone();
                next.ingredients.remove(idx);
                Rc::new(next)
            }
            ProductFormAction::SetIngredient(idx, field, value) => {
                if idx >= self.ingredients.len() {
                    return self;
                }
                let mut next = (*self).clone();
                let ing = &mut next.ingredients[idx];
                match field {
                    IngredientField::Name => ing.name = value,
                    IngredientField::Amount => ing.amount = value,
                    IngredientField::Benefit => ing.benefit = value,
                }
                Rc::new(next)
            }
            ProductFormAction::Load(product) => {
                let ingredients = if product.ingredients.is_empty() {
                    vec![Ingredient::blank()]
                } else {
                    product.ingredients
                };
                Rc::new(Self {
                    name: product.name,
                    slug: product.slug,
                    category: product.category,
                    sub_category: product.sub_category,
                    custom_category: String::new(),
                    custom_sub_category: String::new(),
                    price: product.price.to_string(),
                    description: product.description,
                    full_description: product.full_description,
                    image: product.image,
                    cal: product.nutrition.calories.to_string(),
                    protein: product.nutrition.protein,
                    fiber: product.nutrition.fiber,
                    carbs: product.nutrition.carbs,
                    fats: product.nutrition.fats,
                    ingredients,
                })
            }
            ProductFormAction::Reset => Rc::new(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply(form: Rc<ProductForm>, action: ProductFormAction) -> Rc<ProductForm> {
        form.reduce(action)
    }

    #[test]
    fn test_default_form_starts_on_snacks() {
        let form = ProductForm::default();
        assert_eq!(form.category, "Healthy Snacks");
        assert_eq!(form.sub_category, "Muffin");
    }

    #[test]
    fn test_set_category_reseeds_sub_category() {
        let form = Rc::new(ProductForm::default());
        let form = apply(form, ProductFormAction::SetCategory("Juice & Smoothies".to_string()));
        assert_eq!(form.sub_category, "Juice");
    }

    #[test]
    fn test_custom_category_flows_into_payload() {
        let mut form = Rc::new(ProductForm::default());
        form = apply(form, ProductFormAction::SetCategory(CUSTOM_VALUE.to_string()));
        assert_eq!(form.sub_category, CUSTOM_VALUE);

        form = apply(form, ProductFormAction::SetField(ProductField::CustomCategory, " Superfoods Bio ".to_string()));
        form = apply(form, ProductFormAction::SetField(ProductField::CustomSubCategory, "Barres protéinées".to_string()));
        assert_eq!(form.resolved_category(), "Superfoods Bio");
        assert_eq!(form.resolved_sub_category(), "Barres protéinées");
    }

    #[test]
    fn test_switching_back_to_canonical_clears_custom_text() {
        let mut form = Rc::new(ProductForm::default());
        form = apply(form, ProductFormAction::SetCategory(CUSTOM_VALUE.to_string()));
        form = apply(form, ProductFormAction::SetField(ProductField::CustomCategory, "Superfoods Bio".to_string()));

        form = apply(form, ProductFormAction::SetCategory("Healthy Snacks".to_string()));
        assert!(form.custom_category.is_empty());
        assert_eq!(form.sub_category, "Muffin");
    }

    #[test]
    fn test_to_payload_filters_blank_ingredients() {
        let mut form = Rc::new(ProductForm::default());
        form = apply(form, ProductFormAction::SetField(ProductField::Name, "Keto Walnut Cake".to_string()));
        form = apply(form, ProductFormAction::SetField(ProductField::Price, "120".to_string()));
        form = apply(form, ProductFormAction::SetIngredient(0, IngredientField::Name, "Farine d'Amande".to_string()));
        form = apply(form, ProductFormAction::AddIngredient);

        let payload = form.to_payload();
        assert_eq!(payload.price, 120);
        assert_eq!(payload.ingredients.len(), 1);
        assert!(payload.slug.is_none());
    }

    #[test]
    fn test_load_round_trips_through_payload() {
        let product = Product {
            id: "p1".to_string(),
            slug: "keto-walnut-cake".to_string(),
            name: "Keto Walnut Cake".to_string(),
            category: "Healthy Snacks".to_string(),
            sub_category: "Cake".to_string(),
            price: 120,
            description: "Gluten-free cake.".to_string(),
            full_description: String::new(),
            image: "https://example.com/cake.jpg".to_string(),
            nutrition: NutritionFacts {
                calories: 320,
                protein: "10g".to_string(),
                fiber: "6g".to_string(),
                carbs: "4g".to_string(),
                fats: "28g".to_string(),
            },
            ingredients: vec![Ingredient {
                name: "Noix de Grenoble".to_string(),
                amount: "30g".to_string(),
                benefit: "Omega-3".to_string(),
            }],
            created_at: "2025-01-10T08:00:00Z".to_string(),
        };

        let form = apply(Rc::new(ProductForm::default()), ProductFormAction::Load(product.clone()));
        assert_eq!(form.price, "120");
        assert_eq!(form.cal, "320");

        let payload = form.to_payload();
        assert_eq!(payload.slug.as_deref(), Some("keto-walnut-cake"));
        assert_eq!(payload.nutrition, product.nutrition);
        assert_eq!(payload.ingredients, product.ingredients);
    }

    #[test]
    fn test_ingredient_guard_and_reset() {
        let form = Rc::new(ProductForm::default());
        let after = apply(Rc::clone(&form), ProductFormAction::RemoveIngredient(0));
        assert!(Rc::ptr_eq(&form, &after));

        let mut form = apply(form, ProductFormAction::SetField(ProductField::Name, "x".to_string()));
        form = apply(form, ProductFormAction::Reset);
        assert_eq!(*form, ProductForm::default());
    }
}
