use polars::prelude::*;
use rand::Rng;
use rand::seq::SliceRandom as _;

/// Original and assigned name of one column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relabel {
    pub original: String,
    pub label: String,
}

/// Labels `prefix0..prefix{n-1}` for `n` columns.
pub fn opaque_labels(prefix: &str, n: usize) -> Vec<String> {
    (0..n).map(|i| format!("{prefix}{i}")).collect()
}

/// Replaces every column name with a shuffled opaque label.
///
/// The set of labels is fixed by the column count; only which column gets
/// which label is random. Column positions and data are untouched.
///
/// # Errors
///
/// Propagates the polars error if the frame rejects the new names.
pub fn rename_columns<R: Rng + ?Sized>(
    df: &mut DataFrame,
    prefix: &str,
    rng: &mut R,
) -> PolarsResult<Vec<Relabel>> {
    let originals: Vec<String> = df
        .get_column_names()
        .into_iter()
        .map(|name| name.to_string())
        .collect();

    let mut labels = opaque_labels(prefix, originals.len());
    labels.shuffle(rng);

    df.set_column_names(labels.iter().map(String::as_str))?;

    Ok(originals
        .into_iter()
        .zip(labels)
        .map(|(original, label)| Relabel { original, label })
        .collect())
}
