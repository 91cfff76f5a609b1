//! Fan-in: collect parameter rows back into one record each.

use std::collections::BTreeMap;
use std::sync::Arc;

use super::explode::{ParamRow, RecordKey};
use crate::record::{OutputRecord, QueryParam};

/// Groups rows by source record and rebuilds one `OutputRecord` per group.
///
/// The group key is the input ordinal together with the record identity, so
/// two input lines that happen to be identical stay two records. Output is in
/// input order; parameters keep the order their rows arrived in.
pub fn regroup<I>(rows: I) -> Vec<OutputRecord>
where
    I: IntoIterator<Item = ParamRow>,
{
    let mut groups: BTreeMap<(usize, Arc<RecordKey>), Vec<QueryParam>> = BTreeMap::new();
    for row in rows {
        let params = groups.entry((row.ordinal, row.key)).or_default();
        if let Some(param) = row.param {
            params.push(param);
        }
    }

    groups
        .into_iter()
        .map(|((_, key), query_params)| {
            let key = Arc::try_unwrap(key).unwrap_or_else(|shared| (*shared).clone());
            OutputRecord {
                row_id: key.row_id,
                is_sample: key.is_sample,
                raw_url: key.raw_url,
                scheme: key.scheme,
                domain: key.domain,
                path: key.path,
                fragment: key.fragment,
                query_params,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decompose::DecodeOptions;
    use crate::record::InputRecord;
    use crate::transform::explode::explode;

    fn rows_for(inputs: &[InputRecord]) -> Vec<ParamRow> {
        inputs
            .iter()
            .enumerate()
            .flat_map(|(i, r)| explode(i, r, &DecodeOptions::default()))
            .collect()
    }

    #[test]
    fn regroup_restores_one_record_per_input() {
        let inputs = vec![
            InputRecord::new(10, false, "https://a.com/p?a=1&b=2&c=3"),
            InputRecord::new(11, false, "https://b.com/"),
            InputRecord::new(12, true, "https://c.com/q?z=9"),
        ];
        let out = regroup(rows_for(&inputs));
        assert_eq!(out.len(), 3);
        assert_eq!(out[0].row_id, 10);
        assert_eq!(out[0].query_params.len(), 3);
        assert_eq!(out[1].row_id, 11);
        assert!(out[1].query_params.is_empty());
        assert_eq!(out[2].query_params, vec![QueryParam::new("z", "9")]);
    }

    #[test]
    fn regroup_orders_by_input_position() {
        let inputs = vec![
            InputRecord::new(2, false, "https://a.com/?x=1"),
            InputRecord::new(1, false, "https://b.com/?y=1"),
        ];
        let mut rows = rows_for(&inputs);
        rows.reverse();
        let out = regroup(rows);
        assert_eq!(out[0].row_id, 2);
        assert_eq!(out[1].row_id, 1);
    }

    #[test]
    fn identical_inputs_stay_separate() {
        let inputs = vec![
            InputRecord::new(5, false, "https://a.com/?x=1"),
            InputRecord::new(5, false, "https://a.com/?x=1"),
        ];
        let out = regroup(rows_for(&inputs));
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].query_params.len(), 1);
        assert_eq!(out[1].query_params.len(), 1);
    }

    #[test]
    fn empty_input() {
        assert!(regroup(Vec::new()).is_empty());
    }
}
