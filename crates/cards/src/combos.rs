// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Combinations of positions.

/// Returns the binomial coefficient for n choose k.
pub const fn nck(n: usize, k: usize) -> usize {
    if k > n {
        return 0;
    }

    // nck(n, k) = nck(n, n - k)
    let k = if k > n - k { n - k } else { k };

    let mut res = 1;
    let mut i = 0;
    while i < k {
        // Exact at every step, res * (n - i) is divisible by (i + 1).
        res = res * (n - i) / (i + 1);
        i += 1;
    }

    res
}

/// Calls the `f` closure with the indices of each k-subset of `0..n`.
///
/// Subsets are visited in lexicographic order, for n = 4 and k = 2 the order
/// is `[0, 1], [0, 2], [0, 3], [1, 2], [1, 3], [2, 3]`.
pub fn for_each_ksubset<F>(n: usize, k: usize, mut f: F)
where
    F: FnMut(&[usize]),
{
    if k > n {
        return;
    }

    let mut c = (0..k).collect::<Vec<_>>();
    loop {
        f(&c);

        // The rightmost index that has not reached its last position.
        let Some(i) = (0..k).rev().find(|&i| c[i] != i + n - k) else {
            return;
        };

        c[i] += 1;
        for j in (i + 1)..k {
            c[j] = c[j - 1] + 1;
        }
    }
}
