use crate::{
    backend::QueryBackend,
    page::{PageRequest, PagedResult},
};
use specq::{evaluator, spec::Specification};
use std::marker::PhantomData;

///
/// ReadRepository
///
/// Specification-driven read surface: counts, single rows, full lists, and
/// pages, all parameterized by a specification.
///

pub trait ReadRepository<T> {
    type Error;

    /// Number of rows matching the criteria, ignoring ordering, eager
    /// loads, and hints.
    fn count(&self, spec: &Specification<T>) -> Result<usize, Self::Error>;

    /// First row under the full pipeline, if any.
    fn first(&self, spec: &Specification<T>) -> Result<Option<T>, Self::Error>;

    /// Every row under the full pipeline.
    fn list(&self, spec: &Specification<T>) -> Result<Vec<T>, Self::Error>;

    /// One page of rows plus the criteria-only total.
    fn list_page(
        &self,
        spec: &Specification<T>,
        page: &PageRequest,
    ) -> Result<PagedResult<T>, Self::Error>;
}

///
/// SpecificationRepository
///
/// Generic read repository over a query backend. Counts run the
/// criteria-only pipeline; item queries run the full pipeline; pagination
/// is plain skip/take computed from the page request and delegated to the
/// backend together with materialization.
///

pub struct SpecificationRepository<T, B> {
    backend: B,
    _marker: PhantomData<fn(&T)>,
}

impl<T, B: QueryBackend<T>> SpecificationRepository<T, B> {
    #[must_use]
    pub const fn new(backend: B) -> Self {
        Self {
            backend,
            _marker: PhantomData,
        }
    }

    #[must_use]
    pub const fn backend(&self) -> &B {
        &self.backend
    }
}

impl<T, B: QueryBackend<T>> ReadRepository<T> for SpecificationRepository<T, B> {
    type Error = B::Error;

    fn count(&self, spec: &Specification<T>) -> Result<usize, Self::Error> {
        let source = evaluator::apply_criteria_only(self.backend.source(), Some(spec));

        self.backend.count(source)
    }

    fn first(&self, spec: &Specification<T>) -> Result<Option<T>, Self::Error> {
        let source = evaluator::apply_all(self.backend.source(), Some(spec));
        let mut items = self.backend.fetch_page(source, 0, 1)?;

        Ok(items.pop())
    }

    fn list(&self, spec: &Specification<T>) -> Result<Vec<T>, Self::Error> {
        let source = evaluator::apply_all(self.backend.source(), Some(spec));

        self.backend.fetch(source)
    }

    fn list_page(
        &self,
        spec: &Specification<T>,
        page: &PageRequest,
    ) -> Result<PagedResult<T>, Self::Error> {
        let total_count = self.count(spec)?;

        let source = evaluator::apply_all(self.backend.source(), Some(spec));
        let items = self.backend.fetch_page(source, page.skip(), page.take())?;

        Ok(PagedResult::new(
            items,
            total_count,
            page.page(),
            page.page_size(),
        ))
    }
}
