/// A single cached value tied to the key it was computed from.
///
/// The key is usually a tuple of input versions; any change to it throws the
/// cached value away on the next read.
#[derive(Debug)]
pub struct Memo<K, V> {
    entry: Option<(K, V)>,
    computations: u64,
}

impl<K, V> Default for Memo<K, V> {
    fn default() -> Self {
        Self {
            entry: None,
            computations: 0,
        }
    }
}

impl<K: PartialEq, V> Memo<K, V> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_or_compute<F>(&mut self, key: K, compute: F) -> &V
    where
        F: FnOnce() -> V,
    {
        let fresh = matches!(&self.entry, Some((cached, _)) if *cached == key);
        if !fresh {
            self.entry = None;
        }
        let computations = &mut self.computations;
        let (_, value) = self.entry.get_or_insert_with(|| {
            *computations += 1;
            (key, compute())
        });
        value
    }

    /// How many times the value has been (re)computed.
    #[cfg(test)]
    pub fn computations(&self) -> u64 {
        self.computations
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recomputes_only_when_key_changes() {
        let mut memo: Memo<(u64, u64), u64> = Memo::new();

        assert_eq!(*memo.get_or_compute((1, 1), || 10), 10);
        assert_eq!(*memo.get_or_compute((1, 1), || 20), 10);
        assert_eq!(memo.computations(), 1);

        assert_eq!(*memo.get_or_compute((2, 1), || 30), 30);
        assert_eq!(memo.computations(), 2);
    }
}
