use specq::source::QuerySource;

///
/// QueryBackend
///
/// The storage collaborator that owns query execution: it produces fresh
/// query sources and materializes transformed ones. Round trips and their
/// failures live here; the engine never executes anything itself, so
/// backend errors propagate through the repository untranslated.
///

pub trait QueryBackend<T> {
    type Source: QuerySource<T>;
    type Error;

    /// A fresh, untransformed source over the backing set.
    fn source(&self) -> Self::Source;

    /// Count the rows the source would produce.
    fn count(&self, source: Self::Source) -> Result<usize, Self::Error>;

    /// Materialize every row the source produces.
    fn fetch(&self, source: Self::Source) -> Result<Vec<T>, Self::Error>;

    /// Materialize one window of rows.
    fn fetch_page(
        &self,
        source: Self::Source,
        skip: usize,
        take: usize,
    ) -> Result<Vec<T>, Self::Error>;
}
