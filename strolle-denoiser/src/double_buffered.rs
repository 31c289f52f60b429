/// Pair of buffers where one is being read (the current one) while the other
/// one (the scratch one) is being written to.
///
/// Passes read from [`Self::curr()`], write into [`Self::split_mut()`]'s
/// scratch and call [`Self::swap()`] once the entire pass is complete, so
/// that nobody ever observes a partially-written buffer.
#[derive(Clone, Debug)]
pub struct DoubleBuffered<T> {
    a: T,
    b: T,
    alternate: bool,
}

impl<T> DoubleBuffered<T> {
    pub fn new(curr: T, scratch: T) -> Self {
        Self {
            a: curr,
            b: scratch,
            alternate: false,
        }
    }

    pub fn get(&self, alternate: bool) -> &T {
        if alternate {
            &self.b
        } else {
            &self.a
        }
    }

    pub fn curr(&self) -> &T {
        self.get(self.alternate)
    }

    /// Returns `(current, scratch)`.
    pub fn split_mut(&mut self) -> (&T, &mut T) {
        if self.alternate {
            (&self.b, &mut self.a)
        } else {
            (&self.a, &mut self.b)
        }
    }

    /// Promotes scratch buffer to be the current one.
    pub fn swap(&mut self) {
        self.alternate = !self.alternate;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn swap() {
        let mut target = DoubleBuffered::new(vec![1, 2], vec![0, 0]);

        assert_eq!(&vec![1, 2], target.curr());

        let (curr, scratch) = target.split_mut();

        for (dst, src) in scratch.iter_mut().zip(curr) {
            *dst = src * 10;
        }

        // Nothing changes until the buffers get swapped
        assert_eq!(&vec![1, 2], target.curr());

        target.swap();

        assert_eq!(&vec![10, 20], target.curr());
        assert_eq!(&vec![10, 20], target.get(true));
        assert_eq!(&vec![1, 2], target.get(false));

        target.swap();

        assert_eq!(&vec![1, 2], target.curr());
    }
}
