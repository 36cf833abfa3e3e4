use word_bitset::BitSet;

/// Prints every subset of `0..picks.len()` by setting and unsetting one
/// position per recursion level.
fn combinations(idx: usize, picked: &mut BitSet, picks: &mut [bool]) {
    if idx == picks.len() {
        for (slot, pick) in picks.iter_mut().enumerate() {
            *pick = picked.get(slot);
        }
        println!("{picks:?} -> {:?}", picked.iter_ones().collect::<Vec<_>>());
        return;
    }
    if !picked.get(idx) {
        picked.set(idx);
        combinations(idx + 1, picked, picks);
        picked.unset(idx);
    }
    combinations(idx + 1, picked, picks)
}

fn main() {
    const ITEMS: usize = 5;
    // indices run 0..=capacity, so ITEMS slots need capacity ITEMS - 1
    let mut picked = BitSet::new(ITEMS - 1);
    let mut picks = [false; ITEMS];
    combinations(0, &mut picked, &mut picks);
}
