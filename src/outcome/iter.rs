use crate::optional::iter::{IntoIter, Iter, IterMut};
use crate::outcome::core::Outcome;

impl<T, E> IntoIterator for Outcome<T, E> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { inner: self.into_result().ok() }
    }
}

impl<'a, T, E> IntoIterator for &'a Outcome<T, E> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, E> IntoIterator for &'a mut Outcome<T, E> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T, E> Outcome<T, E> {
    /// Yields the success value, if any.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter { inner: self.value() }
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        match self {
            Outcome::Success(value) => IterMut { inner: Some(value) },
            Outcome::Failure(_) => IterMut { inner: None },
        }
    }
}

/// Collects success values, stopping at the first failure, which is returned
/// without logging again.
///
/// # Examples
///
/// ```
/// use logerr::outcome::Outcome;
///
/// let all: Outcome<Vec<i32>, String> =
///     vec![Outcome::success(1), Outcome::success(2)].into_iter().collect();
/// assert_eq!(all, Outcome::success(vec![1, 2]));
///
/// let broken: Outcome<Vec<i32>, &str> =
///     vec![Outcome::success(1), Outcome::silent_failure("bad")].into_iter().collect();
/// assert_eq!(broken.error(), Some(&"bad"));
/// ```
impl<T, E, C> FromIterator<Outcome<T, E>> for Outcome<C, E>
where
    C: FromIterator<T>,
{
    fn from_iter<I: IntoIterator<Item = Outcome<T, E>>>(iter: I) -> Self {
        match iter.into_iter().map(Outcome::into_result).collect::<Result<C, E>>() {
            Ok(collected) => Outcome::Success(collected),
            Err(error) => Outcome::Failure(error),
        }
    }
}
