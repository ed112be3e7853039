//! Group-by over numeric key columns.
//!
//! Keys are `f64` configuration values (group size, informed fraction) that
//! repeat bit-identically across rows of the same configuration, so exact
//! comparison via `total_cmp` is the right equality.

use crate::{Table, TableResult};

/// One group: its key values (in `keys` order) and the member row indices.
#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    pub key:  Vec<f64>,
    pub rows: Vec<usize>,
}

/// Group row indices by one or more numeric key columns.
///
/// Output is sorted ascending by key (lexicographic `total_cmp`), matching
/// the ordering the downstream line plots rely on for monotone x axes.
pub fn group_by(table: &Table, keys: &[&str]) -> TableResult<Vec<Group>> {
    let key_columns: Vec<&[f64]> = keys
        .iter()
        .map(|k| table.numeric(k))
        .collect::<TableResult<_>>()?;

    let n_rows = table.n_rows();
    let mut keyed: Vec<(Vec<f64>, usize)> = (0..n_rows)
        .map(|row| (key_columns.iter().map(|c| c[row]).collect(), row))
        .collect();

    keyed.sort_by(|a, b| {
        let ord = a
            .0
            .iter()
            .zip(&b.0)
            .map(|(x, y)| x.total_cmp(y))
            .find(|o| o.is_ne())
            .unwrap_or(std::cmp::Ordering::Equal);
        ord.then(a.1.cmp(&b.1)) // stable within a group
    });

    let mut groups: Vec<Group> = Vec::new();
    for (key, row) in keyed {
        match groups.last_mut() {
            Some(g) if keys_equal(&g.key, &key) => g.rows.push(row),
            _ => groups.push(Group { key, rows: vec![row] }),
        }
    }
    Ok(groups)
}

fn keys_equal(a: &[f64], b: &[f64]) -> bool {
    a.iter().zip(b).all(|(x, y)| x.total_cmp(y).is_eq())
}
