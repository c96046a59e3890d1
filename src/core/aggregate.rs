use std::collections::HashMap;

use crate::core::discount::resolve_free_bottles;
use crate::domain::model::{OrderLine, PersonTotal, TastingSummary};

/// Groups the order log by person and derives the group totals plus the
/// free bottles earned by the group.
///
/// The grouping key is the exact person string. Per-person rows keep the
/// order of first appearance in the log, which is deterministic for a
/// fixed input.
pub fn aggregate(orders: &[OrderLine]) -> TastingSummary {
    let mut per_person: Vec<PersonTotal> = Vec::new();
    let mut by_name: HashMap<&str, usize> = HashMap::new();
    let mut total_bottles: u32 = 0;
    let mut total_amount = 0.0;

    for line in orders {
        let amount = line.line_total();
        total_bottles += line.quantity;
        total_amount += amount;

        match by_name.get(line.person.as_str()) {
            Some(&i) => {
                per_person[i].bottles += line.quantity;
                per_person[i].amount += amount;
            }
            None => {
                by_name.insert(line.person.as_str(), per_person.len());
                per_person.push(PersonTotal {
                    name: line.person.clone(),
                    bottles: line.quantity,
                    amount,
                });
            }
        }
    }

    let free_bottles = resolve_free_bottles(total_bottles);
    TastingSummary {
        per_person,
        total_bottles,
        total_amount,
        free_bottles,
    }
}
