//! Code table generation by tree traversal.
//!
//! Walking from the root, descending left appends a 0 and descending right
//! appends a 1; the accumulated path at each leaf is that symbol's code.
//! Because codes terminate only at leaves, no code can be a prefix of
//! another, which is what makes decoding unambiguous.
//!
//! # Single-symbol inputs
//!
//! A tree whose root is itself a leaf would assign the natural zero-length
//! path as its code, and a zero-length code cannot round-trip (the encoded
//! stream would be empty regardless of input length). Such a root gets the
//! one-bit code `0` instead.

use std::collections::HashMap;

use crate::bits::Bitstream;
use crate::tree::{HuffNode, HuffmanTree};

/// Mapping from symbol to its prefix-free code.
///
/// Derived from, and only valid for, one specific tree. One entry per leaf.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeTable {
    codes: HashMap<char, Bitstream>,
}

impl CodeTable {
    /// Derive the code table for `tree`. Empty tree gives an empty table.
    ///
    /// Traversal is depth-first with an explicit stack; skewed trees can be
    /// as deep as the alphabet is large, so recursion is avoided.
    pub fn from_tree(tree: &HuffmanTree) -> Self {
        let mut codes = HashMap::new();
        let root = match tree.root() {
            Some(root) => root,
            None => return Self { codes },
        };

        let mut stack: Vec<(&HuffNode, Bitstream)> = vec![(root, Bitstream::new())];
        while let Some((node, path)) = stack.pop() {
            match node {
                HuffNode::Leaf { symbol, .. } => {
                    let code = if path.is_empty() {
                        // Root is a leaf: single-symbol alphabet
                        let mut code = Bitstream::new();
                        code.push(false);
                        code
                    } else {
                        path
                    };
                    codes.insert(*symbol, code);
                }
                HuffNode::Internal { left, right, .. } => {
                    let mut left_path = path.clone();
                    left_path.push(false);
                    let mut right_path = path;
                    right_path.push(true);
                    stack.push((right.as_ref(), right_path));
                    stack.push((left.as_ref(), left_path));
                }
            }
        }

        Self { codes }
    }

    /// Code for `symbol`, if it was part of the tree's alphabet.
    pub fn get(&self, symbol: char) -> Option<&Bitstream> {
        self.codes.get(&symbol)
    }

    /// Number of coded symbols (= number of leaves in the source tree).
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// True if derived from an empty tree.
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Iterate over (symbol, code) pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (char, &Bitstream)> + '_ {
        self.codes.iter().map(|(&s, code)| (s, code))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::freq::FrequencyTable;

    fn table_for(text: &str) -> CodeTable {
        CodeTable::from_tree(&HuffmanTree::from_frequencies(&FrequencyTable::from_text(
            text,
        )))
    }

    #[test]
    fn test_empty_tree_gives_empty_table() {
        let table = table_for("");
        assert!(table.is_empty());
        assert_eq!(table.get('a'), None);
    }

    #[test]
    fn test_single_symbol_gets_code_zero() {
        let table = table_for("aaaa");
        assert_eq!(table.len(), 1);
        assert_eq!(table.get('a').unwrap().to_string(), "0");
    }

    #[test]
    fn test_one_entry_per_distinct_symbol() {
        let table = table_for("abracadabra");
        assert_eq!(table.len(), 5);
        for symbol in ['a', 'b', 'r', 'c', 'd'] {
            assert!(table.get(symbol).is_some(), "missing code for {symbol:?}");
        }
    }

    #[test]
    fn test_abracadabra_codes() {
        // Deterministic under the documented tie-break: a is alone on the
        // shallow side, the four rare symbols share the deep side.
        let table = table_for("abracadabra");
        assert_eq!(table.get('a').unwrap().to_string(), "0");
        assert_eq!(table.get('c').unwrap().to_string(), "100");
        assert_eq!(table.get('d').unwrap().to_string(), "101");
        assert_eq!(table.get('b').unwrap().to_string(), "110");
        assert_eq!(table.get('r').unwrap().to_string(), "111");
    }

    #[test]
    fn test_prefix_free() {
        let table = table_for("the quick brown fox jumps over the lazy dog");
        let codes: Vec<String> = table.iter().map(|(_, code)| code.to_string()).collect();

        for (i, a) in codes.iter().enumerate() {
            for (j, b) in codes.iter().enumerate() {
                if i != j {
                    assert!(!b.starts_with(a.as_str()), "{a} is a prefix of {b}");
                }
            }
        }
    }

    #[test]
    fn test_frequent_symbols_get_shorter_codes() {
        // a (5 occurrences) must not have a longer code than any of the
        // symbols occurring once or twice.
        let table = table_for("abracadabra");
        let a_len = table.get('a').unwrap().len();
        for symbol in ['b', 'r', 'c', 'd'] {
            assert!(a_len <= table.get(symbol).unwrap().len());
        }
    }

    #[test]
    fn test_deep_skewed_tree() {
        // Fibonacci-like frequencies force a maximally skewed tree; the
        // explicit-stack traversal must handle depth near alphabet size.
        let mut text = String::new();
        let mut count = 1usize;
        let mut next = 1usize;
        for symbol in 'a'..='z' {
            for _ in 0..count {
                text.push(symbol);
            }
            let sum = count + next;
            count = next;
            next = sum;
        }

        let table = table_for(&text);
        assert_eq!(table.len(), 26);
        let max_len = table.iter().map(|(_, code)| code.len()).max().unwrap();
        assert_eq!(max_len, 25);
    }
}
