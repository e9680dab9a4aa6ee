//! Ordered, first-match-wins handler dispatch.
//!
//! A registry is built once with a fixed handler list and never mutated
//! afterwards. When several handlers support the same item the one
//! registered first wins, so generic handlers belong at the end.

/// Capability check shared by condition, sorting and facet handlers.
pub trait Supports<Item: ?Sized> {
    fn supports(&self, item: &Item) -> bool;
}

pub struct HandlerRegistry<H: ?Sized> {
    handlers: Vec<Box<H>>,
}

impl<H: ?Sized> HandlerRegistry<H> {
    pub fn new(handlers: Vec<Box<H>>) -> Self { Self { handlers } }

    pub fn resolve<Item: ?Sized>(&self, item: &Item) -> Option<&H>
    where
        H: Supports<Item>,
    {
        self.handlers.iter().map(|h| &**h).find(|h| h.supports(item))
    }

    pub fn len(&self) -> usize { self.handlers.len() }

    pub fn is_empty(&self) -> bool { self.handlers.is_empty() }
}

impl<H: ?Sized> std::fmt::Debug for HandlerRegistry<H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HandlerRegistry").field("handlers", &self.handlers.len()).finish()
    }
}
