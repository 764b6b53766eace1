//! Section 5.1: Pure Functions
//!
//! A pure function maps inputs to an output and does nothing else. Because
//! `double(5)` has no side effects, every occurrence of it can be replaced
//! by `10` without changing the program: that is referential transparency.
//!
//! The shopping cart below is shown twice: once mutating the caller's cart
//! in place, once returning a new cart and leaving the original alone.

use fp_common::{FpError, lazy, reduce};
use im::Vector;
use serde::Serialize;

pub fn double(x: i64) -> i64 {
    x.wrapping_mul(2)
}

/// Largest value, or `None` for an empty slice.
pub fn max_of(values: &[i64]) -> Option<i64> {
    reduce(
        |best: Option<i64>, n| Some(best.map_or(*n, |b| b.max(*n))),
        None,
        values,
    )
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Item {
    pub name: String,
    pub price: u32,
}

impl Item {
    pub fn new(name: impl Into<String>, price: u32) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineItem {
    pub item: Item,
    pub quantity: u32,
}

/// A cart of line items backed by a persistent vector.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Cart {
    items: Vector<LineItem>,
}

impl Cart {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> impl Iterator<Item = &LineItem> {
        self.items.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of `price * quantity` over all line items.
    #[must_use]
    pub fn total(&self) -> u64 {
        lazy::reduce(
            |acc, line: &LineItem| acc + u64::from(line.item.price) * u64::from(line.quantity),
            0,
            &self.items,
        )
    }

    pub fn to_json_pretty(&self) -> fp_common::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

pub fn camera() -> Item {
    Item::new("Digital SLR Camera", 1495)
}

/// Appends to the caller's cart and hands the same cart back.
pub fn add_to_cart_in_place(cart: &mut Cart, item: Item, quantity: u32) -> &Cart {
    cart.items.push_back(LineItem { item, quantity });
    cart
}

/// Returns a new cart with the line item added; `cart` is left as it was.
#[must_use]
pub fn add_to_cart(cart: &Cart, item: Item, quantity: u32) -> Cart {
    let mut items = cart.items.clone();
    items.push_back(LineItem { item, quantity });
    Cart { items }
}

/// [`add_to_cart`] that rejects an empty quantity.
pub fn try_add_to_cart(cart: &Cart, item: Item, quantity: u32) -> fp_common::Result<Cart> {
    if quantity == 0 {
        return Err(FpError::InvalidArgument(format!(
            "quantity for `{}` must be at least 1",
            item.name
        )));
    }
    Ok(add_to_cart(cart, item, quantity))
}

pub fn demonstrate() -> fp_common::Result<()> {
    println!("max of [2, 8, 5] = {:?}", max_of(&[2, 8, 5]));
    println!("double(5) = {}", double(5));

    let mut original_cart = Cart::new();
    add_to_cart_in_place(&mut original_cart, camera(), 1);
    println!("original cart after in-place add:\n{}", original_cart.to_json_pretty()?);

    let original_cart2 = Cart::new();
    let new_cart2 = add_to_cart(&original_cart2, camera(), 1);
    println!("original cart after pure add:\n{}", original_cart2.to_json_pretty()?);
    println!("new cart total: {}", new_cart2.total());

    if let Err(err) = try_add_to_cart(&new_cart2, camera(), 0) {
        tracing::debug!(%err, "rejected empty line item");
        println!("rejected: {err}");
    }
    Ok(())
}
