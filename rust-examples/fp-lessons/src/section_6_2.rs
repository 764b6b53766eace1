//! Section 6.2: Immutability
//!
//! An immutable value cannot be modified after it is created. A binding
//! without `mut` is not the whole story: a type with interior mutability
//! (`Cell`, `RefCell`, ...) can still be changed through a shared
//! reference, so it is only frozen one level deep.
//!
//! Real immutability comes from types that expose no mutators at any
//! depth. Changing such a value means building a new one.

use std::cell::Cell;

use fp_common::{Record, record};

/// `{foo: "Hello", bar: "world", baz: "!"}`
#[must_use]
pub fn flat_greeting() -> Record {
    record! { "foo" => "Hello", "bar" => "world", "baz" => "!" }
}

/// `{foo: {greeting: "Hello"}, bar: "world", baz: "!"}`
#[must_use]
pub fn nested_greeting() -> Record {
    record! {
        "foo" => record! { "greeting" => "Hello" },
        "bar" => "world",
        "baz" => "!",
    }
}

/// The nested greeting with `foo.greeting` replaced, as a new record.
pub fn say_goodbye(greeting: &Record) -> fp_common::Result<Record> {
    greeting.with_path(&["foo", "greeting"], "Goodbye")
}

/// Frozen at the top, mutable underneath.
#[derive(Debug)]
pub struct ShallowGreeting {
    pub foo: Cell<&'static str>,
    pub bar: &'static str,
}

impl Default for ShallowGreeting {
    fn default() -> Self {
        Self {
            foo: Cell::new("Hello"),
            bar: "world",
        }
    }
}

/// Changes the greeting through a shared reference.
pub fn overwrite_greeting(greeting: &ShallowGreeting) {
    greeting.foo.set("Goodbye");
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Salutation {
    greeting: String,
}

/// Immutable all the way down: fields are private and there are no setters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Greeting {
    foo: Salutation,
    bar: String,
    baz: String,
}

impl Default for Greeting {
    fn default() -> Self {
        Self {
            foo: Salutation {
                greeting: "Hello".to_string(),
            },
            bar: "world".to_string(),
            baz: "!".to_string(),
        }
    }
}

impl Greeting {
    pub fn greeting(&self) -> &str {
        &self.foo.greeting
    }

    pub fn bar(&self) -> &str {
        &self.bar
    }

    pub fn baz(&self) -> &str {
        &self.baz
    }

    #[must_use]
    pub fn with_greeting(&self, greeting: impl Into<String>) -> Self {
        Self {
            foo: Salutation {
                greeting: greeting.into(),
            },
            ..self.clone()
        }
    }
}

pub fn demonstrate() -> fp_common::Result<()> {
    let a = flat_greeting();
    let changed = a.with("foo", "Goodbye");
    println!("a: {a}");
    println!("a with a new foo: {changed}");

    let shallow = ShallowGreeting::default();
    overwrite_greeting(&shallow);
    println!("shallow greeting after overwrite: {shallow:?}");

    let b = nested_greeting();
    let goodbye = say_goodbye(&b)?;
    println!("b: {b}");
    println!("b with a new foo.greeting: {goodbye}");

    let typed = Greeting::default();
    let typed_goodbye = typed.with_greeting("Goodbye");
    for greeting in [&typed, &typed_goodbye] {
        println!("{} {}{}", greeting.greeting(), greeting.bar(), greeting.baz());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_record_update_is_a_copy() {
        let a = flat_greeting();
        let changed = a.with("foo", "Goodbye");
        assert_eq!(a.get_str("foo").unwrap(), "Hello");
        assert_eq!(changed.get_str("foo").unwrap(), "Goodbye");
    }

    #[test]
    fn test_shallow_freeze_is_a_pitfall() {
        let shallow = ShallowGreeting::default();
        overwrite_greeting(&shallow);
        assert_eq!(shallow.foo.get(), "Goodbye");
        assert_eq!(shallow.bar, "world");
    }

    #[test]
    fn test_nested_update_leaves_original() {
        let b = nested_greeting();
        let goodbye = say_goodbye(&b).unwrap();

        assert_eq!(b.get_record("foo").unwrap().get_str("greeting").unwrap(), "Hello");
        assert_eq!(
            goodbye.get_record("foo").unwrap().get_str("greeting").unwrap(),
            "Goodbye"
        );
        assert_eq!(goodbye.get_str("baz").unwrap(), "!");
    }

    #[test]
    fn test_say_goodbye_needs_nested_record() {
        assert!(say_goodbye(&flat_greeting()).is_err());
    }

    #[test]
    fn test_typed_greeting() {
        let hello = Greeting::default();
        let goodbye = hello.with_greeting("Goodbye");
        assert_eq!(hello.greeting(), "Hello");
        assert_eq!(goodbye.greeting(), "Goodbye");
        assert_eq!(goodbye.bar(), "world");
        assert_ne!(hello, goodbye);
    }
}
