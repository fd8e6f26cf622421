use {
    crate::error::Result,
    std::{collections::BTreeMap, ops::Bound},
};

/// The ordered key-value collaborator the store adapter runs on. Anything
/// with point get/put and prefix iteration plugs in; durability and
/// compaction are its business, not ours.
pub trait Engine {
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>>;

    fn put(&mut self, key: &[u8], value: &[u8]) -> Result<()>;

    /// Forward-only iteration over the entries whose key starts with
    /// `prefix`, in key order, one read per step.
    fn scan_prefix<'a>(
        &'a self,
        prefix: &[u8],
    ) -> Box<dyn Iterator<Item = Result<(Vec<u8>, Vec<u8>)>> + 'a>;
}

/// In-memory ordered engine, used by the tests and the REPL.
#[derive(Debug, Default)]
pub struct Memory {
    data: BTreeMap<Vec<u8>, Vec<u8>>,
}

impl Memory {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Engine for Memory {
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>> {
        Ok(self.data.get(key).cloned())
    }

    fn put(&mut self, key: &[u8], value: &[u8]) -> Result<()> {
        self.data.insert(key.to_vec(), value.to_vec());
        Ok(())
    }

    fn scan_prefix<'a>(
        &'a self,
        prefix: &[u8],
    ) -> Box<dyn Iterator<Item = Result<(Vec<u8>, Vec<u8>)>> + 'a> {
        let start = Bound::Included(prefix.to_vec());
        let end = match prefix_end(prefix) {
            Some(end) => Bound::Excluded(end),
            None => Bound::Unbounded,
        };

        Box::new(
            self.data
                .range((start, end))
                .map(|(key, value)| Ok((key.clone(), value.clone()))),
        )
    }
}

/// The first key past every key sharing `prefix`: increment the last
/// non-0xff byte and truncate after it. An all-0xff prefix has no upper
/// bound.
fn prefix_end(prefix: &[u8]) -> Option<Vec<u8>> {
    let mut end = prefix.to_vec();

    while let Some(last) = end.pop() {
        if last < 0xff {
            end.push(last + 1);
            return Some(end);
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn put_get() {
        let mut engine = Memory::new();
        engine.put(b"a", b"1").unwrap();
        engine.put(b"a", b"2").unwrap();

        assert_eq!(engine.get(b"a").unwrap(), Some(b"2".to_vec()));
        assert_eq!(engine.get(b"b").unwrap(), None);
    }

    #[test]
    fn scan_prefix_is_ordered_and_bounded() {
        let mut engine = Memory::new();
        for key in [&b"a_2"[..], b"a_1", b"b_1", b"a"] {
            engine.put(key, b"v").unwrap();
        }

        let keys: Vec<_> = engine
            .scan_prefix(b"a_")
            .map(|item| item.unwrap().0)
            .collect();

        assert_eq!(keys, vec![b"a_1".to_vec(), b"a_2".to_vec()]);
    }

    #[test]
    fn prefix_end_handles_0xff() {
        assert_eq!(prefix_end(b"ab"), Some(b"ac".to_vec()));
        assert_eq!(prefix_end(&[b'a', 0xff]), Some(b"b".to_vec()));
        assert_eq!(prefix_end(&[0xff, 0xff]), None);
        assert_eq!(prefix_end(b""), None);
    }
}
