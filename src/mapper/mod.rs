//! # Record → DTO mapping
//!
//! Every conversion is an explicit call. There are two equivalent spellings at a
//! call site:
//!
//! ```rust
//! use record_mapper::mapper::ToDto;
//! use record_mapper::model::{AddressDto, AddressRecord};
//!
//! let record = AddressRecord::new(1, "Rue de la Paix", "Paris", "France", "95000");
//! let a = record.to_dto();
//! let b = AddressDto::from(&record);
//! assert_eq!(a, b);
//! ```
//!
//! Sequences are projected lazily with [`ToDtos`]: nothing is mapped until the
//! iterator is advanced, and output order follows input order.

pub mod address_mapper;
pub mod user_mapper;

/// Conversion from an internal record into its transfer object.
///
/// Implementations are pure: the source is borrowed, never mutated, and the
/// returned DTO owns all of its data.
pub trait ToDto {
    type Dto;

    fn to_dto(&self) -> Self::Dto;
}

/// Lazy projection of borrowed records into DTOs.
pub trait ToDtos: Iterator + Sized {
    fn to_dtos(self) -> Dtos<Self> {
        Dtos { inner: self }
    }
}

impl<'a, R, I> ToDtos for I
where
    R: ToDto + 'a,
    I: Iterator<Item = &'a R>,
{
}

/// Iterator returned by [`ToDtos::to_dtos`].
#[derive(Debug, Clone)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Dtos<I> {
    inner: I,
}

impl<'a, R, I> Iterator for Dtos<I>
where
    R: ToDto + 'a,
    I: Iterator<Item = &'a R>,
{
    type Item = R::Dto;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(R::to_dto)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, R, I> DoubleEndedIterator for Dtos<I>
where
    R: ToDto + 'a,
    I: DoubleEndedIterator<Item = &'a R>,
{
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(R::to_dto)
    }
}

impl<'a, R, I> ExactSizeIterator for Dtos<I>
where
    R: ToDto + 'a,
    I: ExactSizeIterator<Item = &'a R>,
{
}
