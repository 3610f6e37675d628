use crate::or::core::Or;

/// Iterator over a reference to the good value, if any.
#[derive(Debug, Clone)]
pub struct Iter<'a, G> {
    inner: Option<&'a G>,
}

impl<'a, G> Iterator for Iter<'a, G> {
    type Item = &'a G;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }
}

#[derive(Debug)]
pub struct IterMut<'a, G> {
    inner: Option<&'a mut G>,
}

impl<'a, G> Iterator for IterMut<'a, G> {
    type Item = &'a mut G;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }
}

#[derive(Debug, Clone)]
pub struct IntoIter<G> {
    inner: Option<G>,
}

impl<G> Iterator for IntoIter<G> {
    type Item = G;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }
}

impl<G, B> IntoIterator for Or<G, B> {
    type Item = G;
    type IntoIter = IntoIter<G>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { inner: self.into_good() }
    }
}

impl<'a, G, B> IntoIterator for &'a Or<G, B> {
    type Item = &'a G;
    type IntoIter = Iter<'a, G>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, G, B> IntoIterator for &'a mut Or<G, B> {
    type Item = &'a mut G;
    type IntoIter = IterMut<'a, G>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<G, B> Or<G, B> {
    /// Iterates over the good value: one item for `Good`, none for `Bad`.
    pub fn iter(&self) -> Iter<'_, G> {
        Iter { inner: self.as_ref().into_good() }
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, G> {
        IterMut { inner: self.as_mut().into_good() }
    }
}
