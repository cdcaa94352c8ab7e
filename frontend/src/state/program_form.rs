use shared::{
    resize_schedule, DaySchedule, Ingredient, Meal, MealItem, MealType, NutritionFacts, Program,
    ProgramPayload, SubCategory,
};
use std::rc::Rc;
use yew::prelude::*;

use crate::state::IngredientField;

/// Features pre-filled on a new program.
const DEFAULT_FEATURES: [&str; 3] = [
    "Barquettes micro-ondables",
    "Zéro produit congelé",
    "Option végétarienne incluse",
];

/// Scalar text fields of the program form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgramField {
    Name,
    Slug,
    SubCategory,
    Price,
    Description,
    FullDescription,
    Image,
    Cal,
    Protein,
    Fiber,
    Carbs,
    Fats,
}

/// The admin program form, including the nested day/meal/item schedule.
///
/// Days are held behind `Rc` so every schedule mutation rebuilds exactly
/// the targeted day and reuses the sibling pointers unchanged. Rendering
/// that memoizes on `PartialEq` therefore sees precise change detection,
/// and edits cost one day's clone rather than the whole tree's.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgramForm {
    pub name: String,
    pub slug: String,
    pub sub_category: String,
    pub price: String,
    pub description: String,
    pub full_description: String,
    pub image: String,
    pub duration: u32,
    pub schedule: Vec<Rc<DaySchedule>>,
    pub ingredients: Vec<Ingredient>,
    pub cal: String,
    pub protein: String,
    pub fiber: String,
    pub carbs: String,
    pub fats: String,
    pub features: Vec<String>,
}

pub enum ProgramFormAction {
    SetField(ProgramField, String),
    /// Regenerate the schedule to exactly 1..=days, keeping surviving
    /// days' meals. Shrinking is destructive: dropped days are lost.
    SetDuration(u32),
    /// Append a meal with the default type and one empty item.
    AddMeal(u32),
    RemoveMeal(u32, usize),
    SetMealType(u32, usize, MealType),
    AddItem(u32, usize),
    RemoveItem(u32, usize, usize),
    /// Overwrite one item's label and product reference. The reference
    /// is a snapshot: passing `None` clears it, and nothing else ever
    /// rewrites it.
    SetItemLabel {
        day: u32,
        meal: usize,
        item: usize,
        label: String,
        product_id: Option<String>,
    },
    AddIngredient,
    RemoveIngredient(usize),
    SetIngredient(usize, IngredientField, String),
    AddFeature,
    RemoveFeature(usize),
    SetFeature(usize, String),
    /// Begin editing an existing program.
    Load(Program),
    Reset,
}

impl Default for ProgramForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            slug: String::new(),
            sub_category: SubCategory::WeightLoss.label().to_string(),
            price: String::new(),
            description: String::new(),
            full_description: String::new(),
            image: String::new(),
            duration: 7,
            schedule: (1..=7).map(|day| Rc::new(DaySchedule::empty(day))).collect(),
            ingredients: vec![Ingredient::blank()],
            cal: String::new(),
            protein: String::new(),
            fiber: String::new(),
            carbs: String::new(),
            fats: String::new(),
            features: DEFAULT_FEATURES.iter().map(|f| f.to_string()).collect(),
        }
    }
}

impl ProgramForm {
    fn set_field(&mut self, field: ProgramField, value: String) {
        match field {
            ProgramField::Name => self.name = value,
            ProgramField::Slug => self.slug = value,
            ProgramField::SubCategory => self.sub_category = value,
            ProgramField::Price => self.price = value,
            ProgramField::Description => self.description = value,
            ProgramField::FullDescription => self.full_description = value,
            ProgramField::Image => self.image = value,
            ProgramField::Cal => self.cal = value,
            ProgramField::Protein => self.protein = value,
            ProgramField::Fiber => self.fiber = value,
            ProgramField::Carbs => self.carbs = value,
            ProgramField::Fats => self.fats = value,
        }
    }

    /// Rebuild the day matching `day` through `rewrite`, reusing every
    /// sibling `Rc`. An unknown day number or a `None` from the closure
    /// yields `None`: the caller leaves the tree untouched.
    fn rewrite_day(
        &self,
        day: u32,
        rewrite: impl FnOnce(&DaySchedule) -> Option<DaySchedule>,
    ) -> Option<Vec<Rc<DaySchedule>>> {
        let target = self.schedule.iter().find(|d| d.day == day)?;
        let replacement = Rc::new(rewrite(target)?);
        Some(
            self.schedule
                .iter()
                .map(|d| {
                    if d.day == day {
                        Rc::clone(&replacement)
                    } else {
                        Rc::clone(d)
                    }
                })
                .collect(),
        )
    }

    /// Rebuild one meal within one day, with the same no-op semantics.
    fn rewrite_meal(
        &self,
        day: u32,
        meal_idx: usize,
        rewrite: impl FnOnce(&Meal) -> Option<Meal>,
    ) -> Option<Vec<Rc<DaySchedule>>> {
        self.rewrite_day(day, |d| {
            let replacement = rewrite(d.meals.get(meal_idx)?)?;
            let mut meals = d.meals.clone();
            meals[meal_idx] = replacement;
            Some(DaySchedule { day: d.day, meals })
        })
    }

    /// Convert the form into the submission payload. Number fields fall
    /// back to zero; the backend re-validates.
    pub fn to_payload(&self) -> ProgramPayload {
        ProgramPayload {
            slug: match self.slug.trim() {
                "" => None,
                slug => Some(slug.to_string()),
            },
            name: self.name.clone(),
            sub_category: self.sub_category.clone(),
            price: self.price.trim().parse().unwrap_or(0),
            description: self.description.clone(),
            full_description: self.full_description.clone(),
            image: self.image.clone(),
            duration: self.duration,
            schedule: self.schedule.iter().map(|d| (**d).clone()).collect(),
            ingredients: self
                .ingredients
                .iter()
                .filter(|ing| !ing.is_blank())
                .cloned()
                .collect(),
            nutrition: NutritionFacts {
                calories: self.cal.trim().parse().unwrap_or(0),
                protein: self.protein.clone(),
                fiber: self.fiber.clone(),
                carbs: self.carbs.clone(),
                fats: self.fats.clone(),
            },
            features: self
                .features
                .iter()
                .filter(|f| !f.trim().is_empty())
                .cloned()
                .collect(),
        }
    }
}

impl Reducible for ProgramForm {
    type Action = ProgramFormAction;

    fn reduce(self: Rc<Self>, action: ProgramFormAction) -> Rc<Self> {
        match action {
            ProgramFormAction::SetField(field, value) => {
                let mut next = (*self).clone();
                next.set_field(field, value);
                Rc::new(next)
            }
            ProgramFormAction::SetDuration(days) => {
                let days = days.max(1);
                let schedule = (1..=days)
                    .map(|day| {
                        self.schedule
                            .iter()
                            .find(|d| d.day == day)
                            .map(Rc::clone)
                            .unwrap_or_else(|| Rc::new(DaySchedule::empty(day)))
                    })
                    .collect();
                let mut next = (*self).clone();
                next.duration = days;
                next.schedule = schedule;
                Rc::new(next)
            }
            ProgramFormAction::AddMeal(day) => {
                let schedule = self.rewrite_day(day, |d| {
                    let mut meals = d.meals.clone();
                    meals.push(Meal {
                        meal_type: MealType::default(),
                        items: vec![MealItem::default()],
                    });
                    Some(DaySchedule { day: d.day, meals })
                });
                replace_schedule(self, schedule)
            }
            ProgramFormAction::RemoveMeal(day, meal_idx) => {
                let schedule = self.rewrite_day(day, |d| {
                    if meal_idx >= d.meals.len() {
                        return None;
                    }
                    let mut meals = d.meals.clone();
                    meals.remove(meal_idx);
                    Some(DaySchedule { day: d.day, meals })
                });
                replace_schedule(self, schedule)
            }
            ProgramFormAction::SetMealType(day, meal_idx, meal_type) => {
                let schedule = self.rewrite_meal(day, meal_idx, |meal| {
                    Some(Meal { meal_type, items: meal.items.clone() })
                });
                replace_schedule(self, schedule)
            }
            ProgramFormAction::AddItem(day, meal_idx) => {
                let schedule = self.rewrite_meal(day, meal_idx, |meal| {
                    let mut items = meal.items.clone();
                    items.push(MealItem::default());
                    Some(Meal { meal_type: meal.meal_type, items })
                });
                replace_schedule(self, schedule)
            }
            ProgramFormAction::RemoveItem(day, meal_idx, item_idx) => {
                let schedule = self.rewrite_meal(day, meal_idx, |meal| {
                    if item_idx >= meal.items.len() {
                        return None;
                    }
                    let mut items = meal.items.clone();
                    items.remove(item_idx);
                    Some(Meal { meal_type: meal.meal_type, items })
                });
                replace_schedule(self, schedule)
            }
            ProgramFormAction::SetItemLabel { day, meal, item, label, product_id } => {
                let schedule = self.rewrite_meal(day, meal, |m| {
                    if item >= m.items.len() {
                        return None;
                    }
                    let mut items = m.items.clone();
                    items[item] = MealItem { product_id, label };
                    Some(Meal { meal_type: m.meal_type, items })
                });
                replace_schedule(self, schedule)
            }
            ProgramFormAction::AddIngredient => {
                let mut next = (*self).clone();
                next.ingredients.push(Ingredient::blank());
                Rc::new(next)
            }
            ProgramFormAction::RemoveIngredient(idx) => {
                // The form always keeps at least one row
                if self.ingredients.len() <= 1 || idx >= self.ingredients.len() {
                    return self;
                }
                let mut next = (*self).clone();
                next.ingredients.remove(idx);
                Rc::new(next)
            }
            ProgramFormAction::SetIngredient(idx, field, value) => {
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
            ProgramFormAction::AddFeature => {
                let mut next = (*self).clone();
                next.features.push(String::new());
                Rc::new(next)
            }
            ProgramFormAction::RemoveFeature(idx) => {
                if idx >= self.features.len() {
                    return self;
                }
                let mut next = (*self).clone();
                next.features.remove(idx);
                Rc::new(next)
            }
            ProgramFormAction::SetFeature(idx, value) => {
                if idx >= self.features.len() {
                    return self;
                }
                let mut next = (*self).clone();
                next.features[idx] = value;
                Rc::new(next)
            }
            ProgramFormAction::Load(program) => {
                let duration = program.duration.max(1);
                let ingredients = if program.ingredients.is_empty() {
                    vec![Ingredient::blank()]
                } else {
                    program.ingredients
                };
                Rc::new(Self {
                    name: program.name,
                    slug: program.slug,
                    sub_category: program.sub_category,
                    price: program.price.to_string(),
                    description: program.description,
                    full_description: program.full_description,
                    image: program.image,
                    duration,
                    // Stored schedules are normalized already; this also
                    // repairs any legacy rows that are not.
                    schedule: resize_schedule(&program.schedule, duration)
                        .into_iter()
                        .map(Rc::new)
                        .collect(),
                    ingredients,
                    cal: program.nutrition.calories.to_string(),
                    protein: program.nutrition.protein,
                    fiber: program.nutrition.fiber,
                    carbs: program.nutrition.carbs,
                    fats: program.nutrition.fats,
                    features: program.features,
                })
            }
            ProgramFormAction::Reset => Rc::new(Self::default()),
        }
    }
}

fn replace_schedule(form: Rc<ProgramForm>, schedule: Option<Vec<Rc<DaySchedule>>>) -> Rc<ProgramForm> {
    match schedule {
        Some(schedule) => {
            let mut next = (*form).clone();
            next.schedule = schedule;
            Rc::new(next)
        }
        // Out-of-range target: leave the form untouched
        None => form,
    }
}
