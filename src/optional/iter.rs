use crate::optional::core::OptionalValue;

/// Borrowing iterator over the value, if any. Built by `iter()` on either container.
pub struct Iter<'a, T> {
    pub(crate) inner: Option<&'a T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }
}

/// Mutable iterator over the value, if any.
pub struct IterMut<'a, T> {
    pub(crate) inner: Option<&'a mut T>,
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }
}

/// Owning iterator over the value, if any.
pub struct IntoIter<T> {
    pub(crate) inner: Option<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }
}

impl<T> IntoIterator for OptionalValue<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { inner: self.into_option() }
    }
}

impl<'a, T> IntoIterator for &'a OptionalValue<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut OptionalValue<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T> OptionalValue<T> {
    /// Yields the present value, if any.
    pub fn iter(&self) -> Iter<'_, T> {
        match self {
            OptionalValue::Present(value) => Iter { inner: Some(value) },
            OptionalValue::Absent(_) => Iter { inner: None },
        }
    }

    /// Yields the present value mutably, if any.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        match self {
            OptionalValue::Present(value) => IterMut { inner: Some(value) },
            OptionalValue::Absent(_) => IterMut { inner: None },
        }
    }
}

/// Collects present values, stopping at the first absence.
///
/// The absence is returned as is, without logging again.
///
/// # Examples
///
/// ```
/// use logerr::optional::OptionalValue;
///
/// let all: OptionalValue<Vec<i32>> =
///     vec![OptionalValue::present(1), OptionalValue::present(2)].into_iter().collect();
/// assert_eq!(all, OptionalValue::present(vec![1, 2]));
///
/// let gap: OptionalValue<Vec<i32>> =
///     vec![OptionalValue::present(1), OptionalValue::silent("gap")].into_iter().collect();
/// assert_eq!(gap.reason(), Some("gap"));
/// ```
impl<T, C> FromIterator<OptionalValue<T>> for OptionalValue<C>
where
    C: FromIterator<T>,
{
    fn from_iter<I: IntoIterator<Item = OptionalValue<T>>>(iter: I) -> Self {
        let mut reason = None;
        let collected = iter
            .into_iter()
            .map_while(|item| match item {
                OptionalValue::Present(value) => Some(value),
                OptionalValue::Absent(why) => {
                    reason = Some(why);
                    None
                },
            })
            .collect();
        match reason {
            Some(reason) => OptionalValue::Absent(reason),
            None => OptionalValue::Present(collected),
        }
    }
}
