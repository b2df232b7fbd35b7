use crate::value::Value;

///
/// Record
///
/// Row abstraction used by in-memory evaluation: any type that can expose
/// field values by name. Dot-separated paths are passed through verbatim;
/// whether an implementor resolves nested paths is its own concern.
///

pub trait Record {
    /// Read a field by name.
    ///
    /// `None` means the field is not present on this row; any comparison
    /// over a missing field evaluates to false.
    fn field(&self, name: &str) -> Option<Value>;
}
