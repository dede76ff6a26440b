/// Element-to-instance mapping with lookup-or-create semantics.
///
/// Keys only need identity comparison (DOM handles are not hashable), so
/// entries live in a small vector and lookups are linear.
#[derive(Debug)]
pub struct Registry<K, V> {
    entries: Vec<(K, V)>,
}

impl<K, V> Default for Registry<K, V> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<K: PartialEq, V> Registry<K, V> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, key: &K) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Returns the existing entry, or builds and stores one. A failing
    /// constructor leaves the registry untouched.
    pub fn get_or_try_insert_with<E>(
        &mut self,
        key: K,
        create: impl FnOnce(&K) -> Result<V, E>,
    ) -> Result<&V, E> {
        let index = match self.entries.iter().position(|(k, _)| *k == key) {
            Some(i) => i,
            None => {
                let value = create(&key)?;
                self.entries.push((key, value));
                self.entries.len() - 1
            }
        };
        Ok(&self.entries[index].1)
    }

    pub fn get_or_insert_with(&mut self, key: K, create: impl FnOnce(&K) -> V) -> &V {
        match self.get_or_try_insert_with(key, |k| Ok::<V, std::convert::Infallible>(create(k))) {
            Ok(v) => v,
            Err(never) => match never {},
        }
    }

    pub fn remove(&mut self, key: &K) -> Option<V> {
        let index = self.entries.iter().position(|(k, _)| k == key)?;
        Some(self.entries.swap_remove(index).1)
    }

    pub fn drain(&mut self) -> impl Iterator<Item = (K, V)> + '_ {
        self.entries.drain(..)
    }
}

/// Runs `attach` on every item. A failure is logged and the loop moves on to
/// the next item. Returns how many items attached.
pub fn attach_each<T, E, F>(items: impl IntoIterator<Item = T>, mut attach: F) -> usize
where
    E: std::fmt::Display,
    F: FnMut(T) -> Result<(), E>,
{
    let mut attached = 0;
    for item in items {
        match attach(item) {
            Ok(()) => attached += 1,
            Err(e) => log::error!("[tilt] skipped: {}", e),
        }
    }
    attached
}
