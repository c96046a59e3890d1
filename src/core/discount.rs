/// Staffel: bottle-count thresholds and the free bottles they earn,
/// highest threshold first. The terminal `(0, 0)` row makes the scan total.
const STAFFEL: [(u32, u32); 11] = [
    (60, 15),
    (54, 13),
    (48, 12),
    (42, 10),
    (36, 9),
    (30, 7),
    (24, 6),
    (18, 4),
    (12, 3),
    (6, 1),
    (0, 0),
];

/// Free bottles earned by the group for `total_bottles` ordered bottles.
///
/// The reward saturates at the top tier: everything from 60 bottles up
/// earns 15 free bottles.
pub fn resolve_free_bottles(total_bottles: u32) -> u32 {
    for (threshold, free) in STAFFEL {
        if total_bottles >= threshold {
            return free;
        }
    }
    0
}
