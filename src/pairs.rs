// coprime pairs (m, n) with m <= n from the tree (a, b) => (a + b, b), (a, a + b) rooted at (1, 2).
// (1, 1) always comes first; the tree is walked depth first with an explicit stack,
// nodes deeper than max_depth - 1 are not expanded, so max_depth = d yields 2^d pairs (d >= 1)
pub struct Pairs {
    max_depth: usize,
    stack: Vec<(u64, u64, usize)>,
    started: bool,
}
impl Pairs {
    pub fn new(max_depth: usize) -> Self {
        let stack = if max_depth == 0 { vec![] } else { vec![(1, 2, 0)] };
        Self { max_depth, stack, started: false }
    }
}
impl Iterator for Pairs {
    type Item = (u64, u64);
    fn next(&mut self) -> Option<Self::Item> {
        if !self.started {
            self.started = true;
            return Some((1, 1));
        }
        let (a, b, depth) = self.stack.pop()?;
        if depth + 1 < self.max_depth {
            self.stack.push((a + b, b, depth + 1));
            self.stack.push((a, a + b, depth + 1));
        }
        Some(if a > b { (b, a) } else { (a, b) })
    }
}

#[cfg(test)]
fn drain(mut iter: Pairs) -> Vec<(u64, u64)> {
    let mut v = Vec::with_capacity(16);
    while let Some(p) = iter.next() {
        v.push(p);
    }
    for _ in 0..10 {
        assert_eq!(iter.next(), None);
    }
    v
}

#[test]
fn test_pairs_order() {
    assert_eq!(drain(Pairs::new(0)), vec![(1, 1)]);
    assert_eq!(drain(Pairs::new(1)), vec![(1, 1), (1, 2)]);
    assert_eq!(drain(Pairs::new(2)), vec![(1, 1), (1, 2), (1, 3), (2, 3)]);
    assert_eq!(drain(Pairs::new(3)), vec![(1, 1), (1, 2), (1, 3), (1, 4), (3, 4), (2, 3), (3, 5), (2, 5)]);
}

#[test]
fn test_pairs_unique_coprime() {
    use num::Integer;
    use std::collections::BTreeSet;

    for depth in 0..12 {
        let v = drain(Pairs::new(depth));
        assert_eq!(v.len(), 1 << depth);
        assert_eq!(v.iter().collect::<BTreeSet<_>>().len(), v.len());
        for &(m, n) in &v[1..] {
            assert_lt!(m, n);
            assert_eq!(m.gcd(&n), 1);
        }
    }
}

#[test]
fn test_pairs_restartable() {
    assert_eq!(drain(Pairs::new(6)), drain(Pairs::new(6)));
}
