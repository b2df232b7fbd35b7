use crate::{
    predicate::{Predicate, matches},
    source::{OrderDirection, QuerySource},
    traits::Record,
    value::Value,
};
use std::cmp::Reverse;

///
/// Person
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Person {
    pub id: i64,
    pub name: String,
    pub age: i64,
    pub active: bool,
}

impl Person {
    pub(crate) fn new(id: i64, name: &str, age: i64, active: bool) -> Self {
        Self {
            id,
            name: name.to_string(),
            age,
            active,
        }
    }
}

impl Record for Person {
    fn field(&self, name: &str) -> Option<Value> {
        match name {
            "id" => Some(Value::Int(self.id)),
            "name" => Some(Value::Text(self.name.clone())),
            "age" => Some(Value::Int(self.age)),
            "active" => Some(Value::Bool(self.active)),
            _ => None,
        }
    }
}

/// Ana, Bob, VIP Carl, Dana.
pub(crate) fn people() -> Vec<Person> {
    vec![
        Person::new(1, "Ana", 30, true),
        Person::new(2, "Bob", 70, true),
        Person::new(3, "VIP Carl", 40, false),
        Person::new(4, "Dana", 70, false),
    ]
}

// Navigation targets for include chains.
pub(crate) struct Address;
pub(crate) struct Order;
pub(crate) struct OrderLine;

///
/// ListSource
///
/// In-memory `QuerySource` that applies filters and ordering eagerly and
/// records every other transformation, so tests can assert on both the
/// produced rows and the directives a storage engine would have received.
///

#[derive(Debug)]
pub(crate) struct ListSource<T> {
    pub rows: Vec<T>,
    pub included: Vec<String>,
    pub no_tracking: bool,
    pub split_query: bool,
    pub ordered_by: Option<(String, OrderDirection)>,
}

impl<T> ListSource<T> {
    pub(crate) const fn new(rows: Vec<T>) -> Self {
        Self {
            rows,
            included: Vec::new(),
            no_tracking: false,
            split_query: false,
            ordered_by: None,
        }
    }
}

impl<T: Record> QuerySource<T> for ListSource<T> {
    fn filter(mut self, predicate: &Predicate) -> Self {
        self.rows.retain(|row| matches(row, predicate));
        self
    }

    fn include(mut self, path: &str) -> Self {
        self.included.push(path.to_string());
        self
    }

    fn no_tracking(mut self) -> Self {
        self.no_tracking = true;
        self
    }

    fn split_query(mut self) -> Self {
        self.split_query = true;
        self
    }

    fn order_by(mut self, path: &str, direction: OrderDirection) -> Self {
        match direction {
            OrderDirection::Asc => self.rows.sort_by_cached_key(|row| row.field(path)),
            OrderDirection::Desc => self.rows.sort_by_cached_key(|row| Reverse(row.field(path))),
        }

        self.ordered_by = Some((path.to_string(), direction));
        self
    }
}
