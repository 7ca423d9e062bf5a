use std::any::Any;
use std::collections::HashMap;

/// Typed storage for parsed argument values, one slot per declared field.
///
/// Build via [`Schema::default_container`](crate::Schema::default_container),
/// which seeds every slot: optional fields with their declared defaults,
/// boolean fields with `false`, and required fields with the type's `Default`.
/// The parse engine writes slots in field-resolution order; after a successful
/// parse, read them back with [`Container::get`].
#[derive(Default)]
pub struct Container {
    slots: HashMap<String, Box<dyn Any>>,
}

impl std::fmt::Debug for Container {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Container")
            .field("slots", &self.slots.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl Container {
    pub(crate) fn new() -> Self {
        Self {
            slots: HashMap::default(),
        }
    }

    pub(crate) fn put<T: 'static>(&mut self, name: &str, value: T) {
        self.slots.insert(name.to_string(), Box::new(value));
    }

    /// Read the field `name` as a `T`.
    ///
    /// Returns `None` when the field was never declared, or when `T` is not
    /// the field's declared type.
    ///
    /// ### Example
    /// ```
    /// use declargs::{Optional, SchemaBuilder};
    ///
    /// let schema = SchemaBuilder::new("program")
    ///     .optional(Optional::new("threads", 1u32).short('t'))
    ///     .build()
    ///     .unwrap();
    /// let container = schema.default_container();
    ///
    /// assert_eq!(container.get::<u32>("threads"), Some(&1));
    /// assert_eq!(container.get::<String>("threads"), None);
    /// assert_eq!(container.get::<u32>("unknown"), None);
    /// ```
    pub fn get<T: 'static>(&self, name: &str) -> Option<&T> {
        self.slots.get(name).and_then(|slot| slot.downcast_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn put_get() {
        let mut container = Container::new();
        container.put("threads", 4u32);
        container.put("input", "in.txt".to_string());

        assert_eq!(container.get::<u32>("threads"), Some(&4));
        assert_eq!(container.get::<String>("input"), Some(&"in.txt".to_string()));
    }

    #[test]
    fn put_overwrites() {
        let mut container = Container::new();
        container.put("threads", 1u32);
        container.put("threads", 8u32);

        assert_eq!(container.get::<u32>("threads"), Some(&8));
    }

    #[test]
    fn get_missing() {
        let container = Container::new();
        assert_eq!(container.get::<u32>("threads"), None);
    }

    #[test]
    fn get_wrong_type() {
        let mut container = Container::new();
        container.put("threads", 4u32);

        assert_eq!(container.get::<i32>("threads"), None);
    }
}
