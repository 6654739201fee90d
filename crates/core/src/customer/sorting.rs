//! Display ordering for customer lists.

use std::cmp::Ordering;

use super::types::Customer;

/// Orders customers by name. Unnamed customers go last; ties break on guid.
pub fn compare_by_name(a: &Customer, b: &Customer) -> Ordering {
    match (&a.customer_name, &b.customer_name) {
        (Some(x), Some(y)) => x.cmp(y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
    .then_with(|| a.guid.cmp(&b.guid))
}

/// Sorts customers in place with [`compare_by_name`].
pub fn sort_by_name(customers: &mut [Customer]) {
    customers.sort_by(compare_by_name);
}
