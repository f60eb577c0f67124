use election_bubbles_core::Bubble;
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;

pub const fn wrap_decrement(index: usize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }

    if index == 0 {
        len - 1
    } else {
        index - 1
    }
}

pub const fn wrap_increment(index: usize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }

    (index + 1) % len
}

/// Bubble in `region`/`row` whose column is nearest to `column`.
fn nearest_in_row(bubbles: &[Bubble], region: usize, row: usize, column: usize) -> Option<usize> {
    bubbles
        .iter()
        .enumerate()
        .filter(|(_, b)| b.region_index == region && b.cell.row == row)
        .min_by_key(|(_, b)| b.cell.column.abs_diff(column))
        .map(|(index, _)| index)
}

fn last_row(bubbles: &[Bubble], region: usize) -> Option<usize> {
    bubbles
        .iter()
        .filter(|b| b.region_index == region)
        .map(|b| b.cell.row)
        .max()
}

/// One grid row down, continuing into the next region's first row.
pub fn row_below(bubbles: &[Bubble], index: usize) -> Option<usize> {
    let current = bubbles.get(index)?;
    nearest_in_row(
        bubbles,
        current.region_index,
        current.cell.row + 1,
        current.cell.column,
    )
    .or_else(|| nearest_in_row(bubbles, current.region_index + 1, 0, current.cell.column))
}

/// One grid row up, continuing into the previous region's last row.
pub fn row_above(bubbles: &[Bubble], index: usize) -> Option<usize> {
    let current = bubbles.get(index)?;
    if current.cell.row > 0 {
        return nearest_in_row(
            bubbles,
            current.region_index,
            current.cell.row - 1,
            current.cell.column,
        );
    }

    let region = current.region_index.checked_sub(1)?;
    let row = last_row(bubbles, region)?;
    nearest_in_row(bubbles, region, row, current.cell.column)
}

/// Best fuzzy match of `query` against area names.
pub fn best_area_match(bubbles: &[Bubble], query: &str) -> Option<usize> {
    let query = query.trim();
    if query.is_empty() {
        return None;
    }

    let matcher = SkimMatcherV2::default();
    bubbles
        .iter()
        .enumerate()
        .filter_map(|(index, bubble)| {
            matcher
                .fuzzy_match(&bubble.hover.area, query)
                .map(|score| (score, index))
        })
        .max_by(|(a, a_index), (b, b_index)| a.cmp(b).then(b_index.cmp(a_index)))
        .map(|(_, index)| index)
}
