//! Small index-set helpers shared by the traversal code.

/// Elements of `a` that also appear in `b`, in `a`'s order.
///
/// Adjacency lists are short (a handful of edges or faces), so a linear
/// membership scan beats building a set.
pub fn ordered_intersection(a: &[usize], b: &[usize]) -> Vec<usize> {
    a.iter().copied().filter(|x| b.contains(x)).collect()
}
