//! Reducer-based state containers for the cart and the admin forms.

pub mod cart;
pub mod product_form;
pub mod program_form;

/// Columns of an editable ingredient row, shared by both admin forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IngredientField {
    Name,
    Amount,
    Benefit,
}
