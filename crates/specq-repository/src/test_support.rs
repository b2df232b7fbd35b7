use crate::backend::QueryBackend;
use specq::{
    predicate::{Predicate, matches},
    source::{OrderDirection, QuerySource},
    traits::Record,
    value::Value,
};
use std::{cmp::Reverse, convert::Infallible};

///
/// Person
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Person {
    pub id: i64,
    pub age: i64,
}

impl Person {
    pub(crate) const fn new(id: i64, age: i64) -> Self {
        Self { id, age }
    }
}

impl Record for Person {
    fn field(&self, name: &str) -> Option<Value> {
        match name {
            "id" => Some(Value::Int(self.id)),
            "age" => Some(Value::Int(self.age)),
            _ => None,
        }
    }
}

///
/// VecSource
///
/// Source over a cloned row vector; filters and ordering apply eagerly,
/// eager-load and tracking directives are accepted and ignored.
///

#[derive(Debug)]
pub(crate) struct VecSource {
    rows: Vec<Person>,
}

impl QuerySource<Person> for VecSource {
    fn filter(mut self, predicate: &Predicate) -> Self {
        self.rows.retain(|row| matches(row, predicate));
        self
    }

    fn include(self, _path: &str) -> Self {
        self
    }

    fn no_tracking(self) -> Self {
        self
    }

    fn split_query(self) -> Self {
        self
    }

    fn order_by(mut self, path: &str, direction: OrderDirection) -> Self {
        match direction {
            OrderDirection::Asc => self.rows.sort_by_cached_key(|row| row.field(path)),
            OrderDirection::Desc => self.rows.sort_by_cached_key(|row| Reverse(row.field(path))),
        }

        self
    }
}

///
/// VecBackend
///

pub(crate) struct VecBackend {
    rows: Vec<Person>,
}

impl VecBackend {
    pub(crate) const fn new(rows: Vec<Person>) -> Self {
        Self { rows }
    }
}

impl QueryBackend<Person> for VecBackend {
    type Source = VecSource;
    type Error = Infallible;

    fn source(&self) -> VecSource {
        VecSource {
            rows: self.rows.clone(),
        }
    }

    fn count(&self, source: VecSource) -> Result<usize, Infallible> {
        Ok(source.rows.len())
    }

    fn fetch(&self, source: VecSource) -> Result<Vec<Person>, Infallible> {
        Ok(source.rows)
    }

    fn fetch_page(
        &self,
        source: VecSource,
        skip: usize,
        take: usize,
    ) -> Result<Vec<Person>, Infallible> {
        Ok(source.rows.into_iter().skip(skip).take(take).collect())
    }
}
