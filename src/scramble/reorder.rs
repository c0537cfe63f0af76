use polars::prelude::*;
use rand::Rng;
use rand::seq::SliceRandom as _;

/// Returns `df` with its columns in a uniformly random order.
///
/// Rows and per-column data are untouched.
///
/// # Errors
///
/// Propagates the polars error from the column selection.
pub fn reorder_columns<R: Rng + ?Sized>(df: &DataFrame, rng: &mut R) -> PolarsResult<DataFrame> {
    let mut order = df.get_column_names_owned();
    order.shuffle(rng);
    df.select(order)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng as _;
    use rand::rngs::StdRng;

    fn sample() -> PolarsResult<DataFrame> {
        df!(
            "a" => [1i64, 2],
            "b" => ["x", "y"],
            "c" => [0.1f64, 0.2],
            "d" => [true, false],
        )
    }

    #[test]
    fn test_reorder_is_a_permutation() -> anyhow::Result<()> {
        let original = sample()?;
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let shuffled = reorder_columns(&original, &mut rng)?;

            assert_eq!(shuffled.width(), original.width());
            assert_eq!(shuffled.height(), original.height());

            let mut names: Vec<String> =
                shuffled.get_column_names().iter().map(|n| n.to_string()).collect();
            names.sort();
            assert_eq!(names, vec!["a", "b", "c", "d"], "seed {seed} lost a column");

            for column in shuffled.get_columns() {
                let before = original.column(column.name())?;
                assert!(
                    before.as_materialized_series().equals_missing(column.as_materialized_series()),
                    "column {} changed contents",
                    column.name()
                );
            }
        }
        Ok(())
    }

    #[test]
    fn test_reorder_reaches_more_than_one_order() -> anyhow::Result<()> {
        let original = sample()?;
        let mut orders = std::collections::HashSet::new();
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let shuffled = reorder_columns(&original, &mut rng)?;
            orders.insert(
                shuffled
                    .get_column_names()
                    .iter()
                    .map(|n| n.to_string())
                    .collect::<Vec<_>>(),
            );
        }
        assert!(orders.len() > 1, "50 seeds should not all give the same order");
        Ok(())
    }
}
