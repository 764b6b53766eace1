//! Section 1.2: Composing Objects
//!
//! A composite type is built from primitive types and other composites.
//! Two ways of getting there:
//!
//! - **Struct composition**: a `Bar` holds a `Foo`, instead of inheriting
//!   from it.
//! - **Mixin composition**: start from a base record and merge in the
//!   features you want, like stirring toppings into vanilla ice cream.

use fp_common::{Record, Value, filter, map, merge, merge_all, record};

/// A composite built from two primitives.
#[must_use]
pub fn full_name(first_name: &str, last_name: &str) -> Record {
    record! { "first_name" => first_name, "last_name" => last_name }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Foo {
    pub a: String,
}

impl Default for Foo {
    fn default() -> Self {
        Self { a: "a".to_string() }
    }
}

/// Holds a `Foo` and adds its own field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bar {
    pub foo: Foo,
    pub b: String,
}

impl Default for Bar {
    fn default() -> Self {
        Self {
            foo: Foo::default(),
            b: "b".to_string(),
        }
    }
}

impl Bar {
    pub fn a(&self) -> &str {
        &self.foo.a
    }

    /// Flattens the composite into a record: `{a: "a", b: "b"}`.
    #[must_use]
    pub fn to_record(&self) -> Record {
        record! { "a" => self.foo.a.as_str(), "b" => self.b.as_str() }
    }
}

/// `{a: "a"}` merged with `{b: "b"}`.
#[must_use]
pub fn mixin() -> Record {
    let a = record! { "a" => "a" };
    let b = record! { "b" => "b" };
    merge(&a, &b)
}

#[must_use]
pub fn vanilla() -> Record {
    record! { "flavor" => "vanilla" }
}

#[must_use]
pub fn nuts() -> Record {
    record! { "nuts" => true }
}

#[must_use]
pub fn caramel() -> Record {
    record! { "caramel" => true }
}

/// Replaces the base flavor.
#[must_use]
pub fn chocolate_swirl() -> Record {
    record! { "flavor" => "chocolate swirl" }
}

/// Vanilla with each topping mixed in, left to right.
#[must_use]
pub fn ice_cream(toppings: &[Record]) -> Record {
    let mut layers = vec![vanilla()];
    layers.extend_from_slice(toppings);
    merge_all(&layers)
}

const ADJECTIVES: [(&str, &str); 2] = [("nuts", "nutty"), ("caramel", "caramel")];

/// Names a scoop, e.g. "nutty caramel chocolate swirl ice cream".
#[must_use]
pub fn describe_ice_cream(scoop: &Record) -> String {
    let present = filter(
        |(field, _)| matches!(scoop.get(field), Some(Value::Bool(true))),
        &ADJECTIVES,
    );
    let mut words = map(|(_, adjective)| (*adjective).to_string(), &present);
    words.push(scoop.get_str("flavor").unwrap_or("plain").to_string());
    words.push("ice cream".to_string());
    words.join(" ")
}

pub fn demonstrate() {
    println!("full name: {}", full_name("Claude", "Debussy"));

    let bar = Bar::default();
    println!("bar (struct composition): {bar:?} -> {}", bar.to_record());
    println!("mixin: {}", mixin());

    let scoop = ice_cream(&[nuts(), caramel(), chocolate_swirl()]);
    println!("{}: {scoop}", describe_ice_cream(&scoop));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_name() {
        let name = full_name("Claude", "Debussy");
        assert_eq!(name.get_str("first_name").unwrap(), "Claude");
        assert_eq!(name.get_str("last_name").unwrap(), "Debussy");
    }

    #[test]
    fn test_struct_composition_matches_mixin() {
        let bar = Bar::default();
        assert_eq!(bar.a(), "a");
        assert_eq!(bar.b, "b");
        assert_eq!(bar.to_record(), mixin());
    }

    #[test]
    fn test_mixin_output() {
        assert_eq!(mixin().to_string(), r#"{"a":"a","b":"b"}"#);
    }

    #[test]
    fn test_ice_cream() {
        let scoop = ice_cream(&[nuts(), caramel(), chocolate_swirl()]);
        assert_eq!(
            describe_ice_cream(&scoop),
            "nutty caramel chocolate swirl ice cream"
        );
        assert_eq!(describe_ice_cream(&ice_cream(&[])), "vanilla ice cream");
    }

    #[test]
    fn test_toppings_do_not_change_base() {
        let base = vanilla();
        let _ = ice_cream(&[chocolate_swirl()]);
        assert_eq!(base.get_str("flavor").unwrap(), "vanilla");
    }
}
