//! Query-string tokenization.

use crate::record::QueryParam;

/// Splits a decoded query string into parameters.
///
/// Tokens are separated by `&`; empty tokens are dropped. Each token is split
/// on its first `=`, so the value may itself contain `=`. A token without `=`
/// yields an empty value.
pub fn parse_query(query: Option<&str>) -> Vec<QueryParam> {
    query
        .into_iter()
        .flat_map(|q| q.split('&'))
        .filter(|token| !token.is_empty())
        .map(|token| match token.split_once('=') {
            Some((name, value)) => QueryParam::new(name, value),
            None => QueryParam::new(token, ""),
        })
        .collect()
}
