use crate::util::error::MapPointError;
use log::warn;

/// Two ordinate tokens in source order. Which one is latitude is decided later.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrdinatePair<'a> {
    pub first: &'a str,
    pub second: &'a str,
    /// Index of the pair within its part.
    pub index: usize,
}

impl OrdinatePair<'_> {
    /// Position of the first token within the part's token sequence.
    pub fn first_position(&self) -> usize {
        self.index * 2
    }

    pub fn second_position(&self) -> usize {
        self.index * 2 + 1
    }
}

/// Groups tokens two at a time.
///
/// An odd token count is an error unless `lenient`, in which case the
/// trailing token is dropped. A lone pair is duplicated so that a single
/// point can still be drawn as a zero-length line.
pub fn build_pairs<'a>(
    tokens: &[&'a str],
    part: usize,
    lenient: bool,
) -> Result<Vec<OrdinatePair<'a>>, MapPointError> {
    if tokens.len() % 2 != 0 {
        if !lenient {
            return Err(MapPointError::OddOrdinateCount {
                count: tokens.len(),
                part,
            });
        }
        if let Some(last) = tokens.last() {
            warn!("Dropping unpaired ordinate '{}' in part {}", last, part);
        }
    }

    let mut pairs: Vec<OrdinatePair<'a>> = tokens
        .chunks_exact(2)
        .enumerate()
        .map(|(index, chunk)| OrdinatePair {
            first: chunk[0],
            second: chunk[1],
            index,
        })
        .collect();

    if pairs.len() == 1 {
        pairs.push(pairs[0]);
    }

    Ok(pairs)
}

/// Pairs the tokens of comma-separated groups.
///
/// Unless `lenient`, every group must hold exactly two ordinates, so a
/// three-ordinate group is rejected rather than re-paired across its
/// neighbours. An odd total is reported first as `OddOrdinateCount`.
pub fn build_group_pairs<'a>(
    groups: &[Vec<&'a str>],
    part: usize,
    lenient: bool,
) -> Result<Vec<OrdinatePair<'a>>, MapPointError> {
    let tokens: Vec<&'a str> = groups.iter().flatten().copied().collect();
    let pairs = build_pairs(&tokens, part, lenient)?;

    if !lenient {
        if let Some((group, members)) = groups.iter().enumerate().find(|(_, g)| g.len() != 2) {
            return Err(MapPointError::UnpairedGroup {
                group,
                count: members.len(),
                part,
            });
        }
    }

    Ok(pairs)
}
