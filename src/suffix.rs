use std::cmp::min;

/// How a node's suffix relates to the unconsumed remainder of a term or prefix.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Comparison {
    /// Not even the first byte is shared.
    NoMatch,
    /// Both sides are consumed completely.
    Equal,
    /// The remainder ends inside the suffix.
    Subkey,
    /// The suffix ends inside the remainder.
    Superkey,
    /// Both sides have bytes left after the shared run.
    SharedPrefix,
}

/// The edge label of a node: the bytes it adds to its parent's path.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct Suffix {
    data: Box<[u8]>,
}

impl Suffix {
    pub fn from_slice(src: &[u8]) -> Self {
        Self {
            data: Box::from(src),
        }
    }

    /// Returns a suffix holding the first `length` bytes.
    pub fn partial_before(&self, length: usize) -> Self {
        assert!(length <= self.data.len());
        Suffix::from_slice(&self.data[..length])
    }

    /// Returns a suffix holding everything from `start` onwards.
    pub fn partial_after(&self, start: usize) -> Self {
        assert!(start <= self.data.len());
        Suffix::from_slice(&self.data[start..])
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the length of the common prefix between `self` and `slice`.
    pub fn prefix_length_slice(&self, slice: &[u8]) -> usize {
        let len = min(self.data.len(), slice.len());
        let mut idx = 0;
        while idx < len {
            if self.data[idx] != slice[idx] {
                break;
            }
            idx += 1;
        }
        idx
    }

    /// Classifies `remaining` against this suffix, returning the class and the
    /// number of leading bytes both share.
    pub fn compare(&self, remaining: &[u8]) -> (Comparison, usize) {
        let common = self.prefix_length_slice(remaining);
        let cmp = if common == 0 {
            Comparison::NoMatch
        } else if common == self.len() && common == remaining.len() {
            Comparison::Equal
        } else if common == remaining.len() {
            Comparison::Subkey
        } else if common == self.len() {
            Comparison::Superkey
        } else {
            Comparison::SharedPrefix
        };
        (cmp, common)
    }

    pub fn to_slice(&self) -> &[u8] {
        &self.data
    }
}

impl From<&[u8]> for Suffix {
    fn from(src: &[u8]) -> Self {
        Self::from_slice(src)
    }
}

impl AsRef<[u8]> for Suffix {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}
