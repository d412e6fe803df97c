//! Domain Tests
//!
//! Exercises the list editing operations, budget evaluation and filters.

#[cfg(test)]
mod tests {
    use crate::domain::{
        next_list_id, sorted_by_recency, BudgetStatus, DomainError, ItemFilter, ShoppingList,
        DEFAULT_LIST_NAME,
    };

    fn list_with_items(pairs: &[(&str, f64)]) -> ShoppingList {
        let mut list = ShoppingList::new(1, "Courses");
        for (text, price) in pairs {
            list.add_item(text, *price).expect("valid item");
        }
        list
    }

    #[test]
    fn test_new_list_is_blank() {
        let list = ShoppingList::blank(7);
        assert_eq!(list.id, 7);
        assert_eq!(list.name, DEFAULT_LIST_NAME);
        assert!(list.items.is_empty());
        assert_eq!(list.budget_max, 0.0);
        assert_eq!(list.created_at, list.updated_at);
    }

    #[test]
    fn test_add_item_appends() {
        let mut list = ShoppingList::new(1, "Courses");
        let before = list.updated_at;

        list.add_item("Riz", 5.5).expect("valid item");

        assert_eq!(list.items.len(), 1);
        let item = &list.items[0];
        assert_eq!(item.text, "Riz");
        assert_eq!(item.price, 5.5);
        assert!(!item.purchased);
        assert!(list.updated_at >= before);
    }

    #[test]
    fn test_add_item_rejects_empty_text() {
        let mut list = ShoppingList::new(1, "Courses");
        let before = list.clone();

        let err = list.add_item("   ", 2.0).unwrap_err();

        assert!(matches!(err, DomainError::InvalidInput(_)));
        assert_eq!(list, before);
    }

    #[test]
    fn test_add_item_rejects_bad_price() {
        let mut list = ShoppingList::new(1, "Courses");
        let before = list.clone();

        assert!(list.add_item("Riz", -1.0).is_err());
        assert!(list.add_item("Riz", f64::NAN).is_err());
        assert!(list.add_item("Riz", f64::INFINITY).is_err());
        assert_eq!(list, before);
    }

    #[test]
    fn test_item_ids_unique_within_list() {
        let mut list = list_with_items(&[("Riz", 5.5), ("Huile", 3.0)]);
        list.delete_item(1).expect("item exists");
        list.add_item("Sel", 0.5).expect("valid item");

        let mut ids: Vec<u32> = list.items.iter().map(|i| i.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), list.items.len());
    }

    #[test]
    fn test_toggle_twice_round_trips() {
        let mut list = list_with_items(&[("Riz", 5.5)]);
        let id = list.items[0].id;

        list.toggle_item(id).expect("item exists");
        assert!(list.items[0].purchased);
        list.toggle_item(id).expect("item exists");
        assert!(!list.items[0].purchased);
    }

    #[test]
    fn test_toggle_unknown_id_leaves_state() {
        let mut list = list_with_items(&[("Riz", 5.5)]);
        let before = list.clone();

        let err = list.toggle_item(99).unwrap_err();

        assert!(matches!(err, DomainError::NotFound(_)));
        assert_eq!(list, before);
    }

    #[test]
    fn test_delete_item() {
        let mut list = list_with_items(&[("Riz", 5.5), ("Huile", 3.0)]);
        let id = list.items[0].id;

        list.delete_item(id).expect("item exists");

        assert_eq!(list.items.len(), 1);
        assert_eq!(list.items[0].text, "Huile");
        assert!(list.delete_item(id).is_err());
    }

    #[test]
    fn test_set_budget_coerces_invalid_to_zero() {
        let mut list = ShoppingList::new(1, "Courses");

        list.set_budget_max(25.0);
        assert_eq!(list.budget_max, 25.0);

        list.set_budget_max(-3.0);
        assert_eq!(list.budget_max, 0.0);

        list.set_budget_max(f64::NAN);
        assert_eq!(list.budget_max, 0.0);
    }

    #[test]
    fn test_rename_rejects_empty() {
        let mut list = ShoppingList::new(1, "Courses");

        assert!(list.rename("  ").is_err());
        assert_eq!(list.name, "Courses");

        list.rename("Marché du samedi").expect("valid name");
        assert_eq!(list.name, "Marché du samedi");
    }

    #[test]
    fn test_updated_at_never_moves_backwards() {
        let mut list = ShoppingList::new(1, "Courses");
        let created = list.created_at;

        list.add_item("Riz", 5.5).expect("valid item");
        let after_add = list.updated_at;
        list.toggle_item(1).expect("item exists");

        assert!(list.updated_at >= after_add);
        assert!(list.updated_at >= created);
    }

    #[test]
    fn test_duplicate_resets_purchases_and_ids() {
        let mut list = list_with_items(&[("Riz", 10.0)]);
        list.toggle_item(1).expect("item exists");
        list.set_budget_max(30.0);

        let clone = list.duplicate(2, "Semaine prochaine").expect("valid name");

        assert_eq!(clone.id, 2);
        assert_eq!(clone.name, "Semaine prochaine copie");
        assert_eq!(clone.budget_max, 30.0);
        assert_eq!(clone.items.len(), 1);
        assert!(clone.items.iter().all(|i| !i.purchased));

        let source_ids: Vec<u32> = list.items.iter().map(|i| i.id).collect();
        assert!(clone.items.iter().all(|i| !source_ids.contains(&i.id)));
    }

    #[test]
    fn test_duplicate_rejects_empty_name() {
        let list = list_with_items(&[("Riz", 10.0)]);
        assert!(list.duplicate(2, " ").is_err());
    }

    #[test]
    fn test_budget_zero_never_flags() {
        let mut list = list_with_items(&[("Riz", 100.0)]);
        list.toggle_item(1).expect("item exists");

        let status = BudgetStatus::evaluate(&list);
        assert_eq!(status.total_spent, 100.0);
        assert!(!status.over_budget);
    }

    #[test]
    fn test_budget_counts_only_purchased() {
        let mut list = list_with_items(&[("Riz", 5.5), ("Huile", 3.0)]);
        list.set_budget_max(10.0);
        list.toggle_item(1).expect("item exists");

        let status = BudgetStatus::evaluate(&list);
        assert_eq!(status.total_spent, 5.5);
        assert_eq!(status.remaining, 4.5);
        assert!(!status.over_budget);
    }

    // Scenario from the product brief: Riz 5.50 bought, Huile 3.00 pending,
    // budget 5 -> spent 5.50, remaining -0.50, over budget.
    #[test]
    fn test_budget_exceeded_scenario() {
        let mut list = list_with_items(&[("Riz", 5.5), ("Huile", 3.0)]);
        list.toggle_item(1).expect("item exists");
        list.set_budget_max(5.0);

        let status = BudgetStatus::evaluate(&list);
        assert_eq!(status.total_spent, 5.5);
        assert_eq!(status.remaining, -0.5);
        assert!(status.over_budget);
    }

    #[test]
    fn test_filter_modes() {
        let mut list = list_with_items(&[("Riz", 5.5), ("Huile", 3.0), ("Sel", 0.5)]);
        list.toggle_item(2).expect("item exists");

        let all = ItemFilter::All.apply(&list.items);
        assert_eq!(all.len(), 3);

        let purchased = ItemFilter::Purchased.apply(&list.items);
        assert_eq!(purchased.len(), 1);
        assert_eq!(purchased[0].text, "Huile");

        let unpurchased = ItemFilter::Unpurchased.apply(&list.items);
        let texts: Vec<&str> = unpurchased.iter().map(|i| i.text.as_str()).collect();
        assert_eq!(texts, ["Riz", "Sel"]);
    }

    #[test]
    fn test_filter_unknown_mode_falls_back_to_all() {
        for mode in [ItemFilter::All, ItemFilter::Purchased, ItemFilter::Unpurchased] {
            assert_eq!(ItemFilter::from_str(mode.as_str()), mode);
        }
        assert_eq!(ItemFilter::from_str("n'importe quoi"), ItemFilter::All);
        assert_eq!(ItemFilter::from_str(""), ItemFilter::All);
    }

    #[test]
    fn test_sorted_by_recency_keeps_ties_stable() {
        let a = ShoppingList::new(1, "A");
        // B touched later, A and C tie exactly
        let mut b = ShoppingList::new(2, "B");
        b.updated_at = a.updated_at + chrono::Duration::seconds(1);
        let c = ShoppingList {
            created_at: a.created_at,
            updated_at: a.updated_at,
            ..ShoppingList::new(3, "C")
        };

        let sorted = sorted_by_recency(&[a, b, c]);
        let names: Vec<&str> = sorted.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, ["B", "A", "C"]);
    }

    #[test]
    fn test_next_list_id_counts_every_known_id() {
        assert_eq!(next_list_id([]), 1);
        assert_eq!(next_list_id([1, 2, 3]), 4);
        // The unsaved edited list's id participates too
        assert_eq!(next_list_id([1, 2].into_iter().chain([9])), 10);
    }
}
