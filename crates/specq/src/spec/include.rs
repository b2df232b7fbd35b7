use super::Specification;
use crate::path::{Nav, PathError};
use std::marker::PhantomData;

impl<T> Specification<T> {
    /// Eager-load a single navigation. Returns a chain for nesting further
    /// levels onto the same path.
    ///
    /// An invalid navigation expression fails fast and adds no path.
    pub fn include<U>(&mut self, nav: Nav<T, U>) -> Result<IncludeChain<'_, T, U>, PathError> {
        let path = nav.resolve()?;
        Ok(self.add_chain(path))
    }

    /// Eager-load a collection navigation. The chain continues at the
    /// element type.
    pub fn include_many<E>(
        &mut self,
        nav: Nav<T, Vec<E>>,
    ) -> Result<IncludeChain<'_, T, E>, PathError> {
        let path = nav.resolve()?;
        Ok(self.add_chain(path))
    }

    fn add_chain<C>(&mut self, path: String) -> IncludeChain<'_, T, C> {
        self.include_paths.push(path.clone());
        let index = self.include_paths.len() - 1;

        IncludeChain {
            spec: self,
            index,
            path,
            _marker: PhantomData,
        }
    }

    fn update_include_path(&mut self, index: usize, path: String) {
        self.include_paths[index] = path;
    }
}

///
/// IncludeChain
///
/// Fluent continuation of one include slot. Each top-level `include` or
/// `include_many` call occupies exactly one slot in the owning
/// specification's path list; every `then`/`then_many` rewrites that slot
/// with a longer path instead of adding a new one. The chain borrows the
/// specification mutably, so it cannot outlive the construction window.
///

pub struct IncludeChain<'s, T, C> {
    spec: &'s mut Specification<T>,
    index: usize,
    path: String,
    _marker: PhantomData<fn(&C)>,
}

impl<'s, T, C> IncludeChain<'s, T, C> {
    /// Extend the slot's path by one navigation level.
    ///
    /// On failure the slot keeps its previous, shorter path.
    pub fn then<N>(self, nav: Nav<C, N>) -> Result<IncludeChain<'s, T, N>, PathError> {
        let segment = nav.resolve()?;
        Ok(self.extend(segment))
    }

    /// Extend the slot's path by one collection navigation level; the
    /// chain continues at the element type.
    pub fn then_many<E>(self, nav: Nav<C, Vec<E>>) -> Result<IncludeChain<'s, T, E>, PathError> {
        let segment = nav.resolve()?;
        Ok(self.extend(segment))
    }

    /// Path accumulated in this slot so far.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    fn extend<N>(self, segment: String) -> IncludeChain<'s, T, N> {
        let path = format!("{}.{segment}", self.path);
        self.spec.update_include_path(self.index, path.clone());

        IncludeChain {
            spec: self.spec,
            index: self.index,
            path,
            _marker: PhantomData,
        }
    }
}
