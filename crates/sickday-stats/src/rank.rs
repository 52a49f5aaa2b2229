/// Ranks of a dataset with ties resolved by averaging.
#[derive(Debug, Clone, PartialEq)]
pub struct Ranks {
    /// 1-based rank of each input value, in input order.
    pub ranks: Vec<f64>,
    /// Size of each group of tied values (groups of one included).
    pub tie_sizes: Vec<usize>,
}

impl Ranks {
    /// Assigns average ranks to `values`.
    ///
    /// # Examples
    ///
    /// ```
    /// use sickday_stats::rank::Ranks;
    ///
    /// let ranks = Ranks::new(&[10.0, 20.0, 10.0, 30.0]);
    /// assert_eq!(ranks.ranks, vec![1.5, 3.0, 1.5, 4.0]);
    /// assert!(ranks.has_ties());
    /// ```
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn new(values: &[f64]) -> Self {
        let mut order = (0..values.len()).collect::<Vec<_>>();
        order.sort_by(|&i, &j| values[i].total_cmp(&values[j]));

        let mut ranks = vec![0.0; values.len()];
        let mut tie_sizes = vec![];
        let mut start = 0;
        while start < order.len() {
            let mut end = start + 1;
            while end < order.len() && values[order[end]] == values[order[start]] {
                end += 1;
            }
            // positions start..end share the average of ranks start+1..=end
            let average = (start + end + 1) as f64 / 2.0;
            for &idx in &order[start..end] {
                ranks[idx] = average;
            }
            tie_sizes.push(end - start);
            start = end;
        }

        Self { ranks, tie_sizes }
    }

    /// Returns `true` if any two values share a rank.
    #[must_use]
    pub fn has_ties(&self) -> bool {
        self.tie_sizes.iter().any(|&t| t > 1)
    }

    /// Returns `Σ (t³ - t)` over tie groups, the usual tie correction term.
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn tie_correction_sum(&self) -> f64 {
        self.tie_sizes
            .iter()
            .map(|&t| {
                let t = t as f64;
                t.powi(3) - t
            })
            .sum()
    }
}
