use crate::prelude::*;

/// A short-lived view of a state object, borrowed from the [`Network`] that owns it
pub trait ObjectWrapper<'a>
{
    type Underlying: 'a;
    fn wrap(network: &'a Network, obj: &'a Self::Underlying) -> Self;
    fn raw(&self) -> &'a Self::Underlying;
}

pub trait WrapResult<'a, T: ObjectWrapper<'a>, E>
{
    fn wrap(self, network: &'a Network) -> Result<T, E>;
}

impl<'a, T: ObjectWrapper<'a>, E> WrapResult<'a, T, E> for Result<&'a T::Underlying, E>
{
    fn wrap(self, network: &'a Network) -> Result<T, E> {
        self.map(|obj| T::wrap(network, obj))
    }
}

/// Iterator adapter turning raw state references into wrappers
pub struct WrappedObjectIterator<'a, T: ObjectWrapper<'a>, I: Iterator<Item=&'a T::Underlying>>
{
    net: &'a Network,
    iter: I,
    _wrapped: std::marker::PhantomData<T>,
}

impl<'a, T: ObjectWrapper<'a>, I: Iterator<Item=&'a T::Underlying>> Iterator for WrappedObjectIterator<'a, T, I>
{
    type Item = T;

    fn next(&mut self) -> Option<Self::Item>
    {
        self.iter.next().map(|obj| T::wrap(self.net, obj))
    }
}

pub trait WrapIterator<'a, T: ObjectWrapper<'a>, I: Iterator<Item=&'a T::Underlying>>
{
    fn wrap(self, net: &'a Network) -> WrappedObjectIterator<'a, T, I>;
}

impl<'a, T: ObjectWrapper<'a>, I: Iterator<Item=&'a T::Underlying>> WrapIterator<'a, T, I> for I
{
    fn wrap(self, net: &'a Network) -> WrappedObjectIterator<'a, T, I> {
        WrappedObjectIterator { net, iter: self, _wrapped: std::marker::PhantomData }
    }
}
