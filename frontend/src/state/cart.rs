use gloo::storage::{errors::StorageError, LocalStorage, Storage};
use serde::{Deserialize, Serialize};
use shared::Product;
use std::rc::Rc;
use yew::prelude::*;

/// Local-storage key for the persisted cart snapshot.
const CART_STORAGE_KEY: &str = "healthybite.cart.v1";

/// One product and its quantity in the cart. The product is a shared
/// reference into the catalog snapshot, never a copy per line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub product: Rc<Product>,
    pub quantity: u32,
}

/// The cart store. Lines keep insertion order, which is also display
/// order. `count` and `total` are derived from the lines on every read so
/// they can never drift from them. The drawer flag is observable state
/// but is excluded from the persisted snapshot.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CartState {
    pub lines: Vec<CartLine>,
    pub drawer_open: bool,
}

pub enum CartAction {
    /// Merge a product into the cart: an existing line gains quantity,
    /// otherwise a new line is appended at the end.
    Add(Rc<Product>),
    /// Drop the line for this product id; absent id is a no-op.
    Remove(String),
    /// Set a line's quantity; zero behaves exactly like `Remove`.
    SetQuantity(String, u32),
    /// Empty the cart, used after the checkout hand-off.
    Clear,
    OpenDrawer,
    CloseDrawer,
}

impl CartState {
    /// Sum of all quantities, shown on the navbar badge.
    pub fn count(&self) -> u32 {
        self.lines.iter().map(|line| line.quantity).sum()
    }

    /// Sum of price × quantity over all lines, in dirhams.
    pub fn total(&self) -> u32 {
        self.lines
            .iter()
            .map(|line| line.product.price * line.quantity)
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Rebuild the store from the persisted snapshot, or start empty.
    /// The drawer always starts closed.
    pub fn restore() -> Self {
        let lines: Vec<CartLine> = match LocalStorage::get(CART_STORAGE_KEY) {
            Ok(lines) => lines,
            Err(StorageError::KeyNotFound(_)) => Vec::new(),
            Err(e) => {
                gloo::console::warn!("Failed to restore cart:", e.to_string());
                Vec::new()
            }
        };
        Self { lines, drawer_open: false }
    }

    /// Write the line snapshot back to local storage.
    pub fn persist(lines: &[CartLine]) {
        if let Err(e) = LocalStorage::set(CART_STORAGE_KEY, lines) {
            gloo::console::warn!("Failed to persist cart:", e.to_string());
        }
    }

    fn with_lines(&self, lines: Vec<CartLine>) -> Rc<Self> {
        Rc::new(Self { lines, drawer_open: self.drawer_open })
    }
}

impl Reducible for CartState {
    type Action = CartAction;

    fn reduce(self: Rc<Self>, action: CartAction) -> Rc<Self> {
        match action {
            CartAction::Add(product) => {
                let mut lines = self.lines.clone();
                match lines.iter_mut().find(|line| line.product.id == product.id) {
                    Some(line) => line.quantity += 1,
                    None => lines.push(CartLine { product, quantity: 1 }),
                }
                self.with_lines(lines)
            }
            CartAction::Remove(product_id) => {
                let lines = self
                    .lines
                    .iter()
                    .filter(|line| line.product.id != product_id)
                    .cloned()
                    .collect();
                self.with_lines(lines)
            }
            CartAction::SetQuantity(product_id, 0) => {
                self.reduce(CartAction::Remove(product_id))
            }
            CartAction::SetQuantity(product_id, quantity) => {
                let lines = self
                    .lines
                    .iter()
                    .map(|line| {
                        if line.product.id == product_id {
                            CartLine { product: Rc::clone(&line.product), quantity }
                        } else {
                            line.clone()
                        }
                    })
                    .collect();
                self.with_lines(lines)
            }
            CartAction::Clear => self.with_lines(Vec::new()),
            CartAction::OpenDrawer => Rc::new(Self {
                lines: self.lines.clone(),
                drawer_open: true,
            }),
            CartAction::CloseDrawer => Rc::new(Self {
                lines: self.lines.clone(),
                drawer_open: false,
            }),
        }
    }
}

/// Handle type the cart is provided under via context.
pub type CartHandle = UseReducerHandle<CartState>;

#[cfg(test)]
mod tests {
    use super::*;
    use shared::NutritionFacts;

    fn product(id: &str, price: u32) -> Rc<Product> {
        Rc::new(Product {
            id: id.to_string(),
            slug: id.to_string(),
            name: format!("Product {}", id),
            category: "Healthy Snacks".to_string(),
            sub_category: "Muffin".to_string(),
            price,
            description: String::new(),
            full_description: String::new(),
            image: String::new(),
            nutrition: NutritionFacts::default(),
            ingredients: vec![],
            created_at: String::new(),
        })
    }

    fn apply(state: Rc<CartState>, action: CartAction) -> Rc<CartState> {
        state.reduce(action)
    }

    #[test]
    fn test_repeated_add_merges_into_one_line() {
        let p = product("s1", 25);
        let mut state = Rc::new(CartState::default());
        for _ in 0..4 {
            state = apply(state, CartAction::Add(Rc::clone(&p)));
        }
        assert_eq!(state.lines.len(), 1);
        assert_eq!(state.lines[0].quantity, 4);
        assert_eq!(state.count(), 4);
    }

    #[test]
    fn test_totals_follow_the_worked_scenario() {
        let s1 = product("s1", 25);
        let b1 = product("b1", 35);
        let mut state = Rc::new(CartState::default());

        state = apply(state, CartAction::Add(Rc::clone(&s1)));
        assert_eq!((state.count(), state.total()), (1, 25));

        state = apply(state, CartAction::Add(Rc::clone(&s1)));
        assert_eq!((state.count(), state.total()), (2, 50));

        state = apply(state, CartAction::Add(Rc::clone(&b1)));
        assert_eq!((state.count(), state.total()), (3, 85));

        state = apply(state, CartAction::SetQuantity("s1".to_string(), 5));
        assert_eq!((state.count(), state.total()), (7, 160));

        state = apply(state, CartAction::Remove("b1".to_string()));
        assert_eq!((state.count(), state.total()), (5, 125));
    }

    #[test]
    fn test_lines_keep_insertion_order() {
        let mut state = Rc::new(CartState::default());
        for id in ["a", "b", "c"] {
            state = apply(state, CartAction::Add(product(id, 10)));
        }
        // Bumping an existing line must not move it
        state = apply(state, CartAction::Add(product("a", 10)));
        let order: Vec<&str> = state.lines.iter().map(|l| l.product.id.as_str()).collect();
        assert_eq!(order, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_set_quantity_zero_equals_remove() {
        let p = product("s1", 25);
        let base = apply(Rc::new(CartState::default()), CartAction::Add(p));

        let removed = apply(Rc::clone(&base), CartAction::Remove("s1".to_string()));
        let zeroed = apply(base, CartAction::SetQuantity("s1".to_string(), 0));
        assert_eq!(*removed, *zeroed);
        assert!(zeroed.is_empty());
    }

    #[test]
    fn test_remove_missing_id_is_noop() {
        let state = apply(Rc::new(CartState::default()), CartAction::Add(product("s1", 25)));
        let after = apply(Rc::clone(&state), CartAction::Remove("ghost".to_string()));
        assert_eq!(*state, *after);
    }

    #[test]
    fn test_clear_always_empties() {
        let mut state = Rc::new(CartState::default());
        state = apply(state, CartAction::Add(product("s1", 25)));
        state = apply(state, CartAction::SetQuantity("s1".to_string(), 9));
        state = apply(state, CartAction::Clear);
        assert!(state.is_empty());
        assert_eq!((state.count(), state.total()), (0, 0));
    }

    #[test]
    fn test_drawer_flag_does_not_touch_lines() {
        let mut state = Rc::new(CartState::default());
        state = apply(state, CartAction::Add(product("s1", 25)));
        let lines_before = state.lines.clone();

        state = apply(state, CartAction::OpenDrawer);
        assert!(state.drawer_open);
        state = apply(state, CartAction::CloseDrawer);
        assert!(!state.drawer_open);
        assert_eq!(state.lines, lines_before);
    }

    #[test]
    fn test_merged_lines_share_the_product() {
        let p = product("s1", 25);
        let mut state = Rc::new(CartState::default());
        state = apply(state, CartAction::Add(Rc::clone(&p)));
        state = apply(state, CartAction::Add(Rc::clone(&p)));
        // Still the catalog's product, not a per-line copy
        assert!(Rc::ptr_eq(&state.lines[0].product, &p));
    }

    #[test]
    fn test_snapshot_round_trip_preserves_lines() {
        let mut state = Rc::new(CartState::default());
        state = apply(state, CartAction::Add(product("s1", 25)));
        state = apply(state, CartAction::Add(product("b1", 35)));

        let snapshot = serde_json::to_string(&state.lines).unwrap();
        let restored: Vec<CartLine> = serde_json::from_str(&snapshot).unwrap();
        let restored_state = CartState { lines: restored, drawer_open: false };
        assert_eq!(restored_state.lines, state.lines);
        assert_eq!(restored_state.total(), state.total());
    }
}
