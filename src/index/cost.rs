//! Static relevance cost for ranking index entries.
//!
//! Lower is better. The heuristic is a deliberately simple linear formula;
//! the weights are tunable but the defaults must stay exactly as documented
//! to preserve existing ranking behavior.

use serde::{Deserialize, Serialize};

/// Weights for the ranking formula.
///
/// `cost = len(full_name) + len(rendered_type)
///       + qualification_depth_weight * depth
///       + signature_size
///       + (has_doc ? 0 : missing_doc_penalty)
///       - (is_stdlib ? stdlib_bonus : 0)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostWeights {
    pub qualification_depth_weight: i64,
    pub missing_doc_penalty: i64,
    pub stdlib_bonus: i64,
}

impl Default for CostWeights {
    fn default() -> Self {
        Self {
            qualification_depth_weight: 5,
            missing_doc_penalty: 1000,
            stdlib_bonus: 100,
        }
    }
}

impl CostWeights {
    /// Computes the ranking cost of one declaration. Deterministic and total:
    /// shorter, shallower, documented signatures rank first, and stdlib
    /// declarations get a flat bonus so common idioms surface early.
    #[allow(clippy::fn_params_excessive_bools)]
    pub fn cost(
        &self,
        full_name: &str,
        rendered_type: &str,
        qualification_depth: usize,
        signature_size: u32,
        has_doc: bool,
        is_stdlib: bool,
    ) -> i64 {
        full_name.len() as i64
            + rendered_type.len() as i64
            + self.qualification_depth_weight * qualification_depth as i64
            + i64::from(signature_size)
            + if has_doc { 0 } else { self.missing_doc_penalty }
            - if is_stdlib { self.stdlib_bonus } else { 0 }
    }
}
