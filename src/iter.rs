use crate::core::RingBuffer;

/// Iterator over the bytes of a `RingBuffer`, oldest first
///
/// This iterator implements `Clone` and can also be walked from the newest
/// byte with `rev()`.
#[derive(Clone)]
pub struct RingBufferIter<'a, const N: usize> {
    buffer: &'a RingBuffer<N>,
    front: usize,
    back: usize,
}

impl<const N: usize> Iterator for RingBufferIter<'_, N> {
    type Item = u8;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        let data = self.buffer.peek(self.front);
        self.front += 1;
        data
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl<const N: usize> DoubleEndedIterator for RingBufferIter<'_, N> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        self.buffer.peek(self.back)
    }
}

impl<const N: usize> ExactSizeIterator for RingBufferIter<'_, N> {}

impl<'a, const N: usize> IntoIterator for &'a RingBuffer<N> {
    type Item = u8;
    type IntoIter = RingBufferIter<'a, N>;

    fn into_iter(self) -> Self::IntoIter {
        RingBufferIter {
            buffer: self,
            front: 0,
            back: self.num_items(),
        }
    }
}
