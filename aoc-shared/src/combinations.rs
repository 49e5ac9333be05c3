/// Lazy iterator over the `r`-combinations of a slice in lexicographic index order.
#[derive(Debug, Clone)]
pub struct Combinations<'a, T> {
    items: &'a [T],
    indices: Vec<usize>,
    done: bool,
}

impl<'a, T> Combinations<'a, T> {
    pub fn new(items: &'a [T], r: usize) -> Self {
        Self {
            items,
            indices: (0..r).collect(),
            done: r > items.len(),
        }
    }
}

impl<T: Clone> Iterator for Combinations<'_, T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Vec<T>> {
        if self.done {
            return None;
        }
        let current = self.indices.iter().map(|&i| self.items[i].clone()).collect();

        let n = self.items.len();
        let r = self.indices.len();
        // Rightmost index that can still advance.
        match (0..r).rev().find(|&i| self.indices[i] != i + n - r) {
            Some(i) => {
                self.indices[i] += 1;
                for j in i + 1..r {
                    self.indices[j] = self.indices[j - 1] + 1;
                }
            }
            None => self.done = true,
        }
        Some(current)
    }
}

/// All `r`-element combinations of `items`, order-preserving within each combination.
///
/// Yields `C(n, r)` combinations; none when `r > n`, one empty combination when `r == 0`.
pub fn combinations<T: Clone>(items: &[T], r: usize) -> Vec<Vec<T>> {
    Combinations::new(items, r).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lexicographic() {
        assert_eq!(
            combinations(&[1, 2, 3, 4], 2),
            vec![
                vec![1, 2],
                vec![1, 3],
                vec![1, 4],
                vec![2, 3],
                vec![2, 4],
                vec![3, 4]
            ]
        );
    }

    #[test]
    fn test_edge_sizes() {
        assert_eq!(combinations(&[1, 2], 0), vec![Vec::<i32>::new()]);
        assert!(combinations(&[1, 2], 3).is_empty());
        assert_eq!(combinations(&['a', 'b'], 2), vec![vec!['a', 'b']]);
        assert_eq!(combinations::<u8>(&[], 0), vec![Vec::<u8>::new()]);
    }

    #[test]
    fn test_lazy_take() {
        let items: Vec<u32> = (0..30).collect();
        let first: Vec<_> = Combinations::new(&items, 15).take(2).collect();
        assert_eq!(first[1].last(), Some(&15));
    }
}
