use std::sync::OnceLock;

/// The most neighbors a Moore-8 cell can have, plus one for zero
const COUNTS: usize = 9;
type RuleTable = [[bool; COUNTS]; 2];

/// Returns a Singleton lookup table for the Game of Life ruleset
///
/// Equivalent to calling [`generate_rule_table`] once and storing the result
fn rule_table() -> &'static RuleTable {
    static TABLE: OnceLock<RuleTable> = OnceLock::new();
    TABLE.get_or_init(generate_rule_table)
}

/// Creates a lookup table for the B3/S23 ruleset
///
/// The table is indexed first by the previous state of the cell (`0` dead, `1` alive)
/// and then by its count of alive neighbors.
///
/// Returns whether the cell is alive in the next generation
fn generate_rule_table() -> RuleTable {
    let mut table = [[false; COUNTS]; 2];
    for (alive, row) in table.iter_mut().enumerate() {
        for (neighbors, next) in row.iter_mut().enumerate() {
            *next = match (alive == 1, neighbors) {
                // survival
                (true, 2 | 3) => true,
                // reproduction
                (false, 3) => true,
                // underpopulation, overpopulation, or staying dead
                _ => false,
            };
        }
    }
    table
}

/// Next state of a cell given its previous state and its number of alive neighbors
#[inline]
pub(super) fn next_state(alive: bool, neighbors: usize) -> bool {
    debug_assert!(neighbors < COUNTS, "more than 8 neighbors");
    rule_table()[usize::from(alive)][neighbors]
}
