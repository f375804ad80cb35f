//! Parent-link resolution shared by model bones and animation bone links.
//!
//! Both formats store their hierarchy as a flat array of records with an
//! integer parent index per entry. A parent may sit at a smaller or larger
//! index than its child, so links resolve only after the whole array has
//! been read. The result must be a forest: every parent in range, no entry
//! its own ancestor.

use crate::util::{Error, Result};

/// Sentinel parent index marking a root entry.
pub const PARENT_NONE: i32 = -1;

/// Resolve raw parent indices into in-bounds optional indices.
///
/// [`PARENT_NONE`] marks a root. Fails with [`Error::InvalidBoneLink`] on
/// any other out-of-range index or when the resolved links form a cycle.
pub fn resolve_parents(raw: &[i32]) -> Result<Vec<Option<usize>>> {
    let count = raw.len();
    let mut parents = Vec::with_capacity(count);
    for (index, &parent) in raw.iter().enumerate() {
        if parent == PARENT_NONE {
            parents.push(None);
        } else if parent >= 0 && (parent as usize) < count {
            parents.push(Some(parent as usize));
        } else {
            return Err(Error::InvalidBoneLink(format!(
                "bone {index} links to parent {parent}, but only {count} bones exist"
            )));
        }
    }

    // Walking up from any entry must terminate within `count` steps.
    for start in 0..count {
        let mut cursor = parents[start];
        let mut steps = 0usize;
        while let Some(next) = cursor {
            steps += 1;
            if steps > count {
                return Err(Error::InvalidBoneLink(format!(
                    "bone {start} is part of a parent cycle"
                )));
            }
            cursor = parents[next];
        }
    }

    Ok(parents)
}
