//! Static feature glossary.
//!
//! Fixed text, independent of the input data: it documents what the
//! engineered columns mean and which assumptions the pipeline bakes in.

use std::path::Path;

use tracing::info;
use triagyx_common::Result;

const GLOSSARY: &str = "\
Engineered feature glossary — unified drug-candidate table

1) drug_score
   Composite ranking score in [0,1]: efficacy_index (45%), safety_index
   (35%) and a complexity-balance term (20%). Higher is better.

2) safety_index
   Safety proxy in [0,1]: inverse normalized toxicity (70%) blended with
   the Lipinski-style rule-compliance ratio (30%). Higher means lower
   estimated risk and better oral drug-likeness.

3) efficacy_index
   Efficacy proxy in [0,1]: normalized binding score (60%), stability
   (20%) and solubility (20%). Higher means better predicted therapeutic
   performance.

4) molecular_complexity
   Structural complexity proxy in [0,1], from normalized complexity,
   heavy-atom count and rotatable-bond count. The drug score rewards
   mid-range complexity and penalizes both extremes.

5) priority_rank
   Dense integer rank after sorting by drug_score descending; rank 1 is
   the highest-priority candidate. Ties keep their merge order.

Assumptions
- The three sources have heterogeneous schemas with partially missing
  fields; critical numeric gaps are filled with whole-population medians.
- Numeric outliers are winsorized at the 1st/99th percentile before
  scoring; they are clamped, not removed.
- The solubility benchmark's measured log-solubility is min-max rescaled
  onto the [0,1] solubility scale used by the simulated candidates.
- All columns are snake_case and every exported numeric field is finite.
";

/// The glossary text.
pub fn feature_glossary() -> &'static str {
    GLOSSARY
}

/// Write the glossary artifact.
pub fn write_glossary(path: &Path) -> Result<()> {
    std::fs::write(path, GLOSSARY)?;
    info!(path = %path.display(), "wrote feature glossary");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glossary_names_every_engineered_feature() {
        let text = feature_glossary();
        for feature in [
            "drug_score",
            "safety_index",
            "efficacy_index",
            "molecular_complexity",
            "priority_rank",
        ] {
            assert!(text.contains(feature), "glossary is missing {feature}");
        }
    }

    #[test]
    fn test_glossary_states_assumptions() {
        let text = feature_glossary();
        assert!(text.contains("median"));
        assert!(text.contains("1st/99th percentile"));
        assert!(text.contains("min-max"));
    }

    #[test]
    fn test_write_glossary() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("feature_description.txt");
        write_glossary(&path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), feature_glossary());
    }
}
