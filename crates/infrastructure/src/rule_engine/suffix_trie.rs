use std::collections::HashMap;

use rustc_hash::FxBuildHasher;

#[derive(Default)]
struct TrieNode<T> {
    children: HashMap<Box<str>, TrieNode<T>, FxBuildHasher>,
    entries: Vec<T>,
}

impl<T> TrieNode<T> {
    fn new() -> Self {
        Self {
            children: HashMap::with_hasher(FxBuildHasher),
            entries: Vec::new(),
        }
    }
}

/// Reversed-label trie for `||host^`-style suffix rules.
///
/// A rule inserted for `host` matches `host` itself and any subdomain of
/// it, unlike a teacher-style wildcard trie which matches only subdomains.
pub struct SuffixTrie<T> {
    root: TrieNode<T>,
}

impl<T> SuffixTrie<T> {
    pub fn new() -> Self {
        Self {
            root: TrieNode::new(),
        }
    }

    pub fn insert(&mut self, host: &str, entry: T) {
        let mut node = &mut self.root;
        for label in host.split('.').rev() {
            node = node
                .children
                .entry(label.into())
                .or_insert_with(TrieNode::new);
        }
        node.entries.push(entry);
    }

    /// Returns every entry whose registered host equals `domain` or is a
    /// parent of it, in the order the matching labels were traversed
    /// (shallowest match last).
    pub fn lookup(&self, domain: &str) -> Vec<&T>
    where
        T: Clone,
    {
        let mut node = &self.root;
        let mut matches = Vec::new();
        for label in domain.split('.').rev() {
            match node.children.get(label) {
                Some(child) => {
                    matches.extend(child.entries.iter());
                    node = child;
                }
                None => break,
            }
        }
        matches
    }
}

impl<T> Default for SuffixTrie<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_the_host_itself() {
        let mut trie = SuffixTrie::new();
        trie.insert("ads.example", "block");
        assert_eq!(trie.lookup("ads.example"), vec![&"block"]);
    }

    #[test]
    fn matches_subdomains() {
        let mut trie = SuffixTrie::new();
        trie.insert("ads.example", "block");
        assert_eq!(trie.lookup("sub.ads.example"), vec![&"block"]);
    }

    #[test]
    fn does_not_match_unrelated_domains() {
        let mut trie = SuffixTrie::new();
        trie.insert("ads.example", "block");
        assert!(trie.lookup("example.com").is_empty());
    }

    #[test]
    fn does_not_match_a_sibling_with_a_shared_suffix() {
        let mut trie = SuffixTrie::new();
        trie.insert("ads.example", "block");
        assert!(trie.lookup("notads.example").is_empty());
    }
}
